use crate::core::sheet::Timesheet;
use crate::errors::{AppError, AppResult};
use crate::models::Entry;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove entries by 1-based id. All ids are checked before anything
    /// is removed; duplicates are ignored.
    pub fn apply(sheet: &mut Timesheet, ids: &[usize]) -> AppResult<Vec<Entry>> {
        let mut sorted: Vec<usize> = ids.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        if let Some(bad) = sorted
            .iter()
            .find(|id| **id == 0 || **id > sheet.entries.len())
        {
            return Err(AppError::EntryNotFound(*bad));
        }

        let mut removed = Vec::with_capacity(sorted.len());
        // back to front so earlier indices stay valid
        for id in sorted.iter().rev() {
            removed.push(sheet.entries.remove(id - 1));
        }
        removed.reverse();

        sheet.save()?;
        log::info!("removed {} entries from {}", removed.len(), sheet.name);
        Ok(removed)
    }
}
