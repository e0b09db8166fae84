use crate::errors::{AppError, AppResult};
use std::fmt;

/// A duration as stored in a timesheet row.
///
/// Hour-based sheets store clock values (`HH:MM`), day-based sheets store
/// decimal amounts. Rows are read back without knowing the timebase, so the
/// representation is decided by the text itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkDuration {
    Clock { hours: u32, minutes: u32 },
    Decimal(f64),
}

impl WorkDuration {
    pub fn from_minutes(total: u32) -> Self {
        WorkDuration::Clock {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    /// Parse a stored duration: `H:M` is a clock value, anything else must
    /// be a non-negative decimal. Clock minutes >= 60 carry into hours.
    pub fn parse_stored(s: &str) -> AppResult<Self> {
        let s = s.trim();
        let invalid = || AppError::InvalidDuration(s.to_string());

        if let Some((h, m)) = s.split_once(':') {
            let hours = parse_part(h).ok_or_else(invalid)?;
            let minutes = parse_part(m).ok_or_else(invalid)?;
            let total = hours
                .checked_mul(60)
                .and_then(|m| m.checked_add(minutes))
                .ok_or_else(invalid)?;
            return Ok(WorkDuration::from_minutes(total));
        }

        let value = parse_decimal(s).ok_or_else(invalid)?;
        Ok(WorkDuration::Decimal(value))
    }

    /// Duration as a decimal number of timebase units.
    pub fn decimal(&self) -> f64 {
        match *self {
            WorkDuration::Clock { hours, minutes } => hours as f64 + minutes as f64 / 60.0,
            WorkDuration::Decimal(v) => v,
        }
    }

    /// Duration in whole minutes (decimal amounts are read as hours).
    pub fn total_minutes(&self) -> u64 {
        match *self {
            WorkDuration::Clock { hours, minutes } => hours as u64 * 60 + minutes as u64,
            WorkDuration::Decimal(v) => (v * 60.0).round() as u64,
        }
    }
}

impl fmt::Display for WorkDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            WorkDuration::Clock { hours, minutes } => write!(f, "{:02}:{:02}", hours, minutes),
            WorkDuration::Decimal(v) => write!(f, "{}", v),
        }
    }
}

/// Empty clock parts count as zero (`2:` and `:45` are valid).
fn parse_part(s: &str) -> Option<u32> {
    if s.is_empty() {
        return Some(0);
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Plain decimal number: digits with at most one dot, at least one digit.
pub(crate) fn parse_decimal(s: &str) -> Option<f64> {
    let digits = s.bytes().filter(u8::is_ascii_digit).count();
    let dots = s.bytes().filter(|b| *b == b'.').count();

    if digits == 0 || dots > 1 || digits + dots != s.len() {
        return None;
    }

    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
