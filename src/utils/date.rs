//! Date utilities: tolerant day-month-year parsing and display helpers.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Month, Months, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+|[/.\-]").expect("valid delimiter regex"));

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Month number for a full or three letter month name (case-insensitive).
pub fn month_from_name(name: &str) -> Option<u32> {
    name.parse::<Month>().ok().map(|m| m.number_from_month())
}

/// Parse a date written in day-month-year order.
///
/// Accepted forms (`today` fills whatever is missing):
/// - empty string → `today`
/// - `D` / `DD` → day of the current month
/// - `DDMMYY` / `DDMMYYYY` without delimiters
/// - one to three parts separated by whitespace, `/`, `.` or `-`,
///   e.g. `2 3`, `02/03/17`, `4 April 2017`, `4-apr-17`
///
/// One or two digit years are placed in the century of `today`.
pub fn parse_loose_date(input: &str, today: NaiveDate) -> AppResult<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return Ok(today);
    }

    let invalid = || AppError::InvalidDate(s.to_string());

    let mut parts: Vec<&str> = DELIMITERS.split(s).collect();

    if parts.len() == 1 {
        parts = match s.len() {
            1 | 2 => parts,
            6 | 8 if s.is_ascii() => vec![&s[..2], &s[2..4], &s[4..]],
            _ => return Err(invalid()),
        };
    }

    if parts.len() > 3 {
        return Err(invalid());
    }

    let mut day = today.day();
    let mut month = today.month();
    let mut year = today.year();

    for (idx, part) in parts.iter().enumerate() {
        match idx {
            0 => day = parse_digits(part).ok_or_else(invalid)?,
            1 => {
                month = parse_digits(part)
                    .or_else(|| month_from_name(part))
                    .ok_or_else(invalid)?
            }
            _ => {
                let value = parse_digits(part).ok_or_else(invalid)? as i32;
                year = match part.len() {
                    1 | 2 => today.year() - today.year().rem_euclid(100) + value,
                    4 if value > 0 => value,
                    _ => return Err(invalid()),
                };
            }
        }
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// `02 Mar 17`
pub fn short_display(d: NaiveDate) -> String {
    d.format("%d %b %y").to_string()
}

/// `March 2017`
pub fn month_label(d: NaiveDate) -> String {
    d.format("%B %Y").to_string()
}

/// First and last day of a calendar month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some((first, last))
}
