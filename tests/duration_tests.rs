use tsheet::errors::AppError;
use tsheet::models::{Timebase, WorkDuration};
use tsheet::utils::duration::{normalize, normalize_days, normalize_hours};

#[test]
fn hours_from_integers_and_decimals() {
    let cases = [
        ("1", "01:00"),
        (" 8 ", "08:00"),
        ("100", "100:00"),
        (".5", "00:30"),
        ("3.25", "03:15"),
        ("25.167", "25:10"),
        ("1.15", "01:09"),
        ("0.999", "01:00"),
        ("2.", "02:00"),
    ];
    for (input, expected) in cases {
        assert_eq!(normalize_hours(input).unwrap(), expected, "input {input:?}");
    }
}

#[test]
fn hours_from_colon_forms() {
    let cases = [
        ("1:0", "01:00"),
        ("2:", "02:00"),
        (":45", "00:45"),
        ("1:30", "01:30"),
        ("1:75", "02:15"),
        ("12:05", "12:05"),
    ];
    for (input, expected) in cases {
        assert_eq!(normalize_hours(input).unwrap(), expected, "input {input:?}");
    }
}

#[test]
fn unparseable_hours_are_rejected() {
    for bad in ["", "abc", "-1", "1:2:3", "1e2", "1.2.3", "nan", "inf", "1:x", "one hour"] {
        assert!(
            matches!(normalize_hours(bad), Err(AppError::InvalidDuration(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn days_keep_shortest_decimal() {
    assert_eq!(normalize_days("1.50").unwrap(), "1.5");
    assert_eq!(normalize_days("2.0").unwrap(), "2");
    assert_eq!(normalize_days(" 0.25 ").unwrap(), "0.25");
    assert_eq!(normalize_days(".5").unwrap(), "0.5");
    assert!(normalize_days("2:30").is_err());
    assert!(normalize_days("-1").is_err());
}

#[test]
fn normalize_dispatches_on_timebase() {
    assert_eq!(normalize("1.5", Timebase::Hour).unwrap(), "01:30");
    assert_eq!(normalize("1.5", Timebase::Day).unwrap(), "1.5");
}

#[test]
fn stored_durations() {
    let clock = WorkDuration::parse_stored("02:30").unwrap();
    assert_eq!(clock, WorkDuration::Clock { hours: 2, minutes: 30 });
    assert_eq!(clock.decimal(), 2.5);
    assert_eq!(clock.total_minutes(), 150);
    assert_eq!(clock.to_string(), "02:30");

    let days = WorkDuration::parse_stored("0.5").unwrap();
    assert_eq!(days, WorkDuration::Decimal(0.5));
    assert_eq!(days.total_minutes(), 30);
    assert_eq!(days.to_string(), "0.5");

    let edited = WorkDuration::parse_stored("01:75").unwrap();
    assert_eq!(edited, WorkDuration::Clock { hours: 2, minutes: 15 });
    assert_eq!(edited.to_string(), "02:15");

    assert!(WorkDuration::parse_stored("soon").is_err());
}
