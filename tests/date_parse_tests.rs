use chrono::NaiveDate;
use tsheet::errors::AppError;
use tsheet::utils::date::{month_bounds, month_from_name, month_label, parse_loose_date, short_display};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn parse(s: &str) -> NaiveDate {
    parse_loose_date(s, today()).unwrap_or_else(|e| panic!("'{s}' should parse: {e}"))
}

#[test]
fn empty_input_is_today() {
    assert_eq!(parse(""), today());
    assert_eq!(parse("   "), today());
}

#[test]
fn missing_parts_come_from_today() {
    assert_eq!(parse("5"), ymd(2026, 10, 5));
    assert_eq!(parse("05"), ymd(2026, 10, 5));
    assert_eq!(parse("5/3"), ymd(2026, 3, 5));
    assert_eq!(parse("5 mar"), ymd(2026, 3, 5));
}

#[test]
fn month_names_and_abbreviations() {
    assert_eq!(parse("02 Mar 17"), ymd(2017, 3, 2));
    assert_eq!(parse("04 April 17"), ymd(2017, 4, 4));
    assert_eq!(parse("4-apr-2017"), ymd(2017, 4, 4));
    assert_eq!(parse("  7  JUNE 2020 "), ymd(2020, 6, 7));
}

#[test]
fn numeric_forms_with_delimiters() {
    assert_eq!(parse("02/03/2012"), ymd(2012, 3, 2));
    assert_eq!(parse("2.3.12"), ymd(2012, 3, 2));
    assert_eq!(parse("2-3-12"), ymd(2012, 3, 2));
    assert_eq!(parse("1.2.99"), ymd(2099, 2, 1));
    assert_eq!(parse("29 2 2024"), ymd(2024, 2, 29));
}

#[test]
fn digit_runs_without_delimiters() {
    assert_eq!(parse("020312"), ymd(2012, 3, 2));
    assert_eq!(parse("02032012"), ymd(2012, 3, 2));
}

#[test]
fn invalid_dates_are_rejected() {
    for bad in [
        "123",
        "1234567",
        "31 Feb 2021",
        "29 2 2023",
        "1 Foo 2020",
        "1/2/3/4",
        "Mar",
        "1//2",
        "1 2 123",
        "x 3 2020",
        "1 2 20x0",
        "1 2 0000",
    ] {
        match parse_loose_date(bad, today()) {
            Err(AppError::InvalidDate(s)) => assert_eq!(s, bad.trim()),
            other => panic!("'{bad}' should be rejected, got {other:?}"),
        }
    }
}

#[test]
fn month_lookup() {
    assert_eq!(month_from_name("jan"), Some(1));
    assert_eq!(month_from_name("September"), Some(9));
    assert_eq!(month_from_name("SEP"), Some(9));
    assert_eq!(month_from_name("may"), Some(5));
    assert_eq!(month_from_name("ju"), None);
    assert_eq!(month_from_name("sept"), None);
    assert_eq!(month_from_name(""), None);
}

#[test]
fn display_helpers() {
    assert_eq!(short_display(ymd(2017, 3, 2)), "02 Mar 17");
    assert_eq!(month_label(ymd(2017, 3, 2)), "March 2017");
    assert_eq!(month_label(ymd(2024, 12, 31)), "December 2024");
    assert_eq!(month_bounds(2024, 2), Some((ymd(2024, 2, 1), ymd(2024, 2, 29))));
    assert_eq!(month_bounds(2023, 12), Some((ymd(2023, 12, 1), ymd(2023, 12, 31))));
    assert_eq!(month_bounds(2023, 13), None);
}
