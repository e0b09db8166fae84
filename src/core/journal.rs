//! Append-only journal of the operations that changed a timesheet.

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write one journal line (JSON) into `tsheet.log`.
pub fn ttlog(cfg: &Config, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let line = JournalEntry {
        // local timestamp, RFC 3339
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    fs::create_dir_all(&cfg.home)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(cfg.journal_file())?;
    writeln!(file, "{}", serde_json::to_string(&line)?)?;

    Ok(())
}

/// Journal write that never fails the calling command.
pub fn record(cfg: &Config, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(cfg, operation, target, message) {
        warning(format!("Failed to write journal: {e}"));
    }
}

/// All journal lines, oldest first. Unreadable lines are skipped.
pub fn read_all(cfg: &Config) -> AppResult<Vec<JournalEntry>> {
    let path = cfg.journal_file();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| match serde_json::from_str(l) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("skipping journal line: {e}");
                None
            }
        })
        .collect())
}
