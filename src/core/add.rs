use crate::core::sheet::{Timesheet, parse_rate};
use crate::errors::{AppError, AppResult};
use crate::models::{Entry, WorkDuration};
use crate::utils::date::parse_loose_date;
use crate::utils::duration::normalize;
use chrono::NaiveDate;

/// Raw, user-typed values of an entry. `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct EntryInput<'a> {
    pub date: Option<&'a str>,
    pub duration: Option<&'a str>,
    pub activity: Option<&'a str>,
    pub rate: Option<&'a str>,
}

pub struct AddLogic;

impl AddLogic {
    /// Build an entry from user input, normalizing date and duration
    /// against the sheet's timebase.
    pub fn build(sheet: &Timesheet, input: &EntryInput<'_>, today: NaiveDate) -> AppResult<Entry> {
        let date = parse_loose_date(input.date.unwrap_or(""), today)?;

        let duration_raw = input.duration.unwrap_or("").trim();
        if duration_raw.is_empty() {
            return Err(AppError::EmptyField("duration"));
        }
        let duration = parse_duration(duration_raw, sheet)?;

        let activity = input.activity.unwrap_or("").trim();
        if activity.is_empty() {
            return Err(AppError::EmptyField("activity"));
        }

        let rate = match input.rate {
            Some(r) => parse_rate(r)?,
            None => sheet.settings.rate,
        };

        Ok(Entry {
            date,
            duration,
            activity: activity.to_string(),
            rate,
        })
    }

    /// Append a new entry and write the sheet. Returns the new entry id.
    pub fn apply(sheet: &mut Timesheet, input: &EntryInput<'_>, today: NaiveDate) -> AppResult<usize> {
        let entry = Self::build(sheet, input, today)?;
        log::debug!("adding {:?} to {}", entry, sheet.name);
        sheet.entries.push(entry);
        sheet.save()?;
        Ok(sheet.entries.len())
    }
}

pub(crate) fn parse_duration(raw: &str, sheet: &Timesheet) -> AppResult<WorkDuration> {
    let canonical = normalize(raw, sheet.timebase())?;
    WorkDuration::parse_stored(&canonical)
}
