use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tsheet::core::summary::{filter_range, parse_entries, summarize};
use tsheet::errors::AppError;
use tsheet::models::{SummaryRow, Timebase, WorkDuration};

const HOURS_CSV: &str = "Date,Duration,Activity,Rate
2017-03-02,02:30,Coding,10
2017-04-04,01:00,Review,12.5
2017-03-15,00:45,Meeting,10

2017-03-02,01:00,Docs,20
";

fn row(date: &str, duration: &str, activity: &str, rate: &str) -> SummaryRow {
    SummaryRow {
        date: date.to_string(),
        duration: duration.to_string(),
        activity: activity.to_string(),
        rate: rate.to_string(),
    }
}

#[test]
fn parses_rows_and_skips_header_and_blank_lines() {
    let entries = parse_entries(HOURS_CSV).unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2017, 3, 2).unwrap());
    assert_eq!(entries[0].duration, WorkDuration::Clock { hours: 2, minutes: 30 });
    assert_eq!(entries[0].activity, "Coding");
    assert_eq!(entries[1].rate, 12.5);
    assert_eq!(entries[0].pay(), 25.0);
}

#[test]
fn quoted_activity_keeps_its_comma() {
    let entries = parse_entries("2017-05-01,01:00,\"Coding, tests\",10\n").unwrap();
    assert_eq!(entries[0].activity, "Coding, tests");
}

#[test]
fn groups_by_month_newest_first() {
    let entries = parse_entries(HOURS_CSV).unwrap();
    let months = summarize(&entries, Timebase::Hour, "£");

    assert_eq!(months.len(), 2);

    let april = &months[0];
    assert_eq!(april.label, "April 2017");
    assert_eq!(april.total_time, "1:00");
    assert_eq!(april.total_pay, "£12.50");
    assert_eq!(april.rows, vec![row("04 Apr 17", "01:00", "Review", "12.50")]);

    let march = &months[1];
    assert_eq!((march.year, march.month), (2017, 3));
    assert_eq!(march.label, "March 2017");
    assert_eq!(march.total_time, "4:15");
    assert_eq!(march.total_pay, "£52.50");
    assert_eq!(
        march.rows,
        vec![
            row("15 Mar 17", "00:45", "Meeting", "10.00"),
            row("02 Mar 17", "01:00", "Docs", "20.00"),
            row("02 Mar 17", "02:30", "Coding", "10.00"),
        ]
    );
}

#[test]
fn same_month_of_different_years_are_separate_groups() {
    let csv = "2016-03-01,01:00,A,10\n2017-03-01,01:00,B,10\n";
    let months = summarize(&parse_entries(csv).unwrap(), Timebase::Hour, "$");
    let labels: Vec<&str> = months.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(labels, vec!["March 2017", "March 2016"]);
}

#[test]
fn hour_totals_carry_minutes() {
    let csv = "2020-01-01,00:40,A,1\n2020-01-02,00:40,B,1\n2020-01-03,110:00,C,1\n";
    let months = summarize(&parse_entries(csv).unwrap(), Timebase::Hour, "€");
    assert_eq!(months[0].total_time, "111:20");
}

#[test]
fn day_timebase_sums_decimals() {
    let csv = "Date,Duration,Activity,Rate
2021-06-01,0.5,Site visit,200
2021-06-02,1,Workshop,200
2021-06-09,0.25,Call,200
";
    let months = summarize(&parse_entries(csv).unwrap(), Timebase::Day, "€");
    assert_eq!(months.len(), 1);
    assert_eq!(months[0].total_time, "1.75");
    assert_eq!(months[0].total_pay, "€350.00");
    assert_eq!(months[0].rows[0].duration, "0.25");
}

#[test]
fn empty_sheet_has_no_months() {
    let entries = parse_entries("Date,Duration,Activity,Rate\n").unwrap();
    assert!(entries.is_empty());
    assert!(summarize(&entries, Timebase::Hour, "£").is_empty());
}

#[test]
fn malformed_rows_report_their_line() {
    let bad_date = "Date,Duration,Activity,Rate\n2017-13-01,01:00,A,10\n";
    match parse_entries(bad_date) {
        Err(AppError::InvalidEntry { row, reason }) => {
            assert_eq!(row, 2);
            assert!(reason.contains("2017-13-01"));
        }
        other => panic!("expected InvalidEntry, got {other:?}"),
    }

    let missing_field = "2017-03-01,01:00,A\n";
    assert!(matches!(
        parse_entries(missing_field),
        Err(AppError::InvalidEntry { row: 1, .. })
    ));

    let bad_rate = "2017-03-01,01:00,A,ten\n";
    assert!(matches!(
        parse_entries(bad_rate),
        Err(AppError::InvalidEntry { .. })
    ));
}

#[test]
fn range_filter_keeps_ids() {
    let entries = parse_entries(HOURS_CSV).unwrap();
    let from = NaiveDate::from_ymd_opt(2017, 3, 1).unwrap();
    let to = NaiveDate::from_ymd_opt(2017, 3, 31).unwrap();

    let ids: Vec<usize> = filter_range(&entries, Some((from, to)))
        .iter()
        .map(|(id, _)| *id)
        .collect();
    assert_eq!(ids, vec![1, 3, 4]);
    assert_eq!(filter_range(&entries, None).len(), 4);
}
