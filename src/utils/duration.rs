//! Duration normalization for user input.

use crate::errors::{AppError, AppResult};
use crate::models::duration::parse_decimal;
use crate::models::{Timebase, WorkDuration};

/// Normalize a duration given in hours to `HH:MM`.
///
/// ```
/// use tsheet::utils::duration::normalize_hours;
/// assert_eq!(normalize_hours("1").unwrap(), "01:00");
/// assert_eq!(normalize_hours(".5").unwrap(), "00:30");
/// assert_eq!(normalize_hours("2:").unwrap(), "02:00");
/// assert_eq!(normalize_hours("25.167").unwrap(), "25:10");
/// ```
pub fn normalize_hours(input: &str) -> AppResult<String> {
    let s = input.trim();
    let invalid = || AppError::InvalidDuration(s.to_string());

    if s.contains(':') {
        return WorkDuration::parse_stored(s)
            .map(|d| d.to_string())
            .map_err(|_| invalid());
    }

    let hours = parse_decimal(s).ok_or_else(invalid)?;
    let total = (hours * 60.0).round();
    if total > u32::MAX as f64 {
        return Err(invalid());
    }

    Ok(WorkDuration::from_minutes(total as u32).to_string())
}

/// Normalize a duration given in days: any non-negative decimal, written in
/// its shortest form (`1.50` → `1.5`).
pub fn normalize_days(input: &str) -> AppResult<String> {
    let s = input.trim();
    parse_decimal(s)
        .map(|v| WorkDuration::Decimal(v).to_string())
        .ok_or_else(|| AppError::InvalidDuration(s.to_string()))
}

pub fn normalize(input: &str, timebase: Timebase) -> AppResult<String> {
    match timebase {
        Timebase::Hour => normalize_hours(input),
        Timebase::Day => normalize_days(input),
    }
}
