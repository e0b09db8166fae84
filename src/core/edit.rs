use crate::core::add::{EntryInput, parse_duration};
use crate::core::sheet::{Timesheet, parse_rate};
use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use crate::utils::date::parse_loose_date;
use chrono::NaiveDate;

pub struct EditLogic;

impl EditLogic {
    /// Replace the given fields of entry `id` (1-based, file order).
    /// Returns the entry as it was before the edit.
    pub fn apply(
        sheet: &mut Timesheet,
        id: usize,
        input: &EntryInput<'_>,
        today: NaiveDate,
    ) -> AppResult<Entry> {
        let idx = id
            .checked_sub(1)
            .filter(|i| *i < sheet.entries.len())
            .ok_or(AppError::EntryNotFound(id))?;

        let mut updated = sheet.entries[idx].clone();

        if let Some(d) = input.date {
            updated.date = parse_loose_date(d, today)?;
        }
        if let Some(dur) = input.duration {
            if dur.trim().is_empty() {
                return Err(AppError::EmptyField("duration"));
            }
            updated.duration = parse_duration(dur, sheet)?;
        }
        if let Some(act) = input.activity {
            let act = act.trim();
            if act.is_empty() {
                return Err(AppError::EmptyField("activity"));
            }
            updated.activity = act.to_string();
        }
        if let Some(r) = input.rate {
            updated.rate = parse_rate(r)?;
        }

        let previous = std::mem::replace(&mut sheet.entries[idx], updated);
        sheet.save()?;
        Ok(previous)
    }
}
