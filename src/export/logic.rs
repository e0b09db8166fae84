// src/export/logic.rs

use crate::core::sheet::Timesheet;
use crate::core::summary::{filter_range, summarize};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, notify_export_success};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::MonthExport;
use crate::export::range::parse_optional_range;
use crate::models::{Entry, EntryExport};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// High level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the entries (or the month summaries) of a sheet.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file (`~/` is expanded)
    /// - `range`: `None`, `"all"` or `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and
    ///   `start:end` pairs of those
    ///
    /// Returns the written path, or `None` when nothing matched the range.
    pub fn export(
        sheet: &Timesheet,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        summary: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let bounds = parse_optional_range(range)?;
        let selected = filter_range(&sheet.entries, bounds);

        if selected.is_empty() {
            warning("No entries found for selected range.");
            return Ok(None);
        }

        ensure_writable(&path, force)?;

        if summary {
            let entries: Vec<Entry> = selected.iter().map(|(_, e)| (*e).clone()).collect();
            let months = summarize(&entries, sheet.timebase(), sheet.currency());
            match format {
                ExportFormat::Csv => {
                    let flat: Vec<MonthExport> = months.iter().map(MonthExport::from).collect();
                    export_csv(&flat, &path)?
                }
                ExportFormat::Json => export_json(&months, &path)?,
            }
        } else {
            let rows: Vec<EntryExport> = selected
                .iter()
                .map(|(id, e)| EntryExport::from_entry(*id, e))
                .collect();
            match format {
                ExportFormat::Csv => export_csv(&rows, &path)?,
                ExportFormat::Json => export_json(&rows, &path)?,
            }
        }

        Ok(Some(path))
    }

    /// Copy the sheet's CSV file unchanged.
    pub fn export_raw(sheet: &Timesheet, file: &str, force: bool) -> AppResult<PathBuf> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(&path, force)?;
        sheet.export_raw(&path)?;
        notify_export_success("CSV", &path);
        Ok(path)
    }
}
