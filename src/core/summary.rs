//! Reading timesheet rows and grouping them by calendar month.

use crate::errors::{AppError, AppResult};
use crate::models::{Entry, MonthSummary, SummaryRow, Timebase, WorkDuration};
use crate::utils::date::{month_label, short_display};
use crate::utils::formatting::{days_total, hours_total, money};
use chrono::{Datelike, NaiveDate};
use std::io::Read;

pub const CSV_HEADER: [&str; 4] = ["Date", "Duration", "Activity", "Rate"];

/// Parse CSV text of a timesheet.
///
/// Blank lines and lines whose first field does not start with a digit
/// (the header) are skipped.
pub fn parse_entries(text: &str) -> AppResult<Vec<Entry>> {
    read_entries(text.as_bytes())
}

pub fn read_entries<R: Read>(reader: R) -> AppResult<Vec<Entry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let row = record.position().map(|p| p.line() as usize).unwrap_or(0);

        let first = record.get(0).unwrap_or("").trim();
        if !first.starts_with(|c: char| c.is_ascii_digit()) {
            if record.iter().any(|f| !f.trim().is_empty()) && !first.eq_ignore_ascii_case("date") {
                log::warn!("skipping row {row}: {:?}", record);
            }
            continue;
        }

        entries.push(parse_record(&record, row)?);
    }

    Ok(entries)
}

fn parse_record(record: &csv::StringRecord, row: usize) -> AppResult<Entry> {
    if record.len() != CSV_HEADER.len() {
        return Err(AppError::InvalidEntry {
            row,
            reason: format!("expected 4 fields, found {}", record.len()),
        });
    }

    let field = |i: usize| record.get(i).unwrap_or("").trim();
    let bad = |reason: String| AppError::InvalidEntry { row, reason };

    let date = NaiveDate::parse_from_str(field(0), "%Y-%m-%d")
        .map_err(|_| bad(format!("invalid date '{}'", field(0))))?;
    let duration = WorkDuration::parse_stored(field(1))
        .map_err(|_| bad(format!("invalid duration '{}'", field(1))))?;
    let rate = field(3)
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
        .ok_or_else(|| bad(format!("invalid rate '{}'", field(3))))?;

    Ok(Entry {
        date,
        duration,
        activity: field(2).to_string(),
        rate,
    })
}

/// Group entries by calendar month, newest month first.
///
/// Inside a month, rows are newest date first; rows sharing a date keep
/// the most recently added one on top.
pub fn summarize(entries: &[Entry], timebase: Timebase, currency: &str) -> Vec<MonthSummary> {
    let mut sorted: Vec<&Entry> = entries.iter().rev().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut out: Vec<MonthSummary> = Vec::new();
    let mut group: Vec<&Entry> = Vec::new();

    for entry in sorted {
        if let Some(first) = group.first()
            && month_key(first.date) != month_key(entry.date)
        {
            out.push(build_month(&group, timebase, currency));
            group.clear();
        }
        group.push(entry);
    }

    if !group.is_empty() {
        out.push(build_month(&group, timebase, currency));
    }

    out
}

fn month_key(d: NaiveDate) -> (i32, u32) {
    (d.year(), d.month())
}

fn build_month(group: &[&Entry], timebase: Timebase, currency: &str) -> MonthSummary {
    let (year, month) = month_key(group[0].date);
    let pay: f64 = group.iter().map(|e| e.pay()).sum();

    let total_time = match timebase {
        Timebase::Hour => hours_total(group.iter().map(|e| e.duration.total_minutes()).sum()),
        Timebase::Day => days_total(group.iter().map(|e| e.duration.decimal()).sum()),
    };

    let rows = group
        .iter()
        .map(|e| SummaryRow {
            date: short_display(e.date),
            duration: e.duration.to_string(),
            activity: e.activity.clone(),
            rate: format!("{:.2}", e.rate),
        })
        .collect();

    MonthSummary {
        year,
        month,
        label: month_label(group[0].date),
        pay,
        total_pay: money(currency, pay),
        total_time,
        rows,
    }
}

/// Entries with a date inside `[from, to]`, keeping their 1-based ids.
pub fn filter_range(
    entries: &[Entry],
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> Vec<(usize, &Entry)> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| (i + 1, e))
        .filter(|(_, e)| match bounds {
            Some((from, to)) => e.date >= from && e.date <= to,
            None => true,
        })
        .collect()
}
