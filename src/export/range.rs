// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::month_bounds;
use chrono::NaiveDate;

/// Parse a `--range` / `--period` value.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - `start:end`, each side in one of the forms above
///
/// `None` and `all` mean no filter.
pub fn parse_optional_range(r: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match r.map(str::trim) {
        None => Ok(None),
        Some(r) if r.eq_ignore_ascii_case("all") => Ok(None),
        Some(r) => parse_range(r).map(Some),
    }
}

pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (start, end) = match r.split_once(':') {
        Some((s, e)) => (period_bounds(s.trim())?.0, period_bounds(e.trim())?.1),
        None => period_bounds(r.trim())?,
    };

    if start > end {
        return Err(AppError::InvalidRange(format!("{r}: start is after end")));
    }

    Ok((start, end))
}

/// First and last day covered by a single period.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidRange(p.to_string());
    let number = |s: &str| -> AppResult<u32> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        s.parse().map_err(|_| invalid())
    };

    match p.len() {
        // YYYY
        4 => {
            let y = number(p)? as i32;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 if p.as_bytes()[4] == b'-' => {
            let y = number(&p[0..4])? as i32;
            let m = number(&p[5..7])?;
            month_bounds(y, m).ok_or_else(invalid)
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}
