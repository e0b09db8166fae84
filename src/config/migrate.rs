//! Configuration checks and upgrades.

use crate::config::Config;
use crate::errors::AppResult;
use std::fmt;
use std::fs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    MissingCurrency(String),
    MissingTimebase(String),
    /// Listed in the config but the CSV file is gone.
    MissingCsv(String),
    /// CSV file in the sheets directory with no config entry.
    OrphanCsv(String),
}

impl ConfigIssue {
    /// Issues `migrate` can repair.
    pub fn is_fixable(&self) -> bool {
        matches!(
            self,
            ConfigIssue::MissingCurrency(_) | ConfigIssue::MissingTimebase(_)
        )
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::MissingCurrency(n) => write!(f, "timesheet '{n}' has no currency"),
            ConfigIssue::MissingTimebase(n) => write!(f, "timesheet '{n}' has no timebase"),
            ConfigIssue::MissingCsv(n) => write!(f, "timesheet '{n}' has no CSV file"),
            ConfigIssue::OrphanCsv(n) => write!(f, "file '{n}' is not a known timesheet"),
        }
    }
}

pub fn check(cfg: &Config) -> AppResult<Vec<ConfigIssue>> {
    let mut issues = Vec::new();

    for (name, settings) in &cfg.timesheets {
        if settings.currency.is_none() {
            issues.push(ConfigIssue::MissingCurrency(name.clone()));
        }
        if settings.timebase.is_none() {
            issues.push(ConfigIssue::MissingTimebase(name.clone()));
        }
        if !cfg.sheet_file(name).exists() {
            issues.push(ConfigIssue::MissingCsv(name.clone()));
        }
    }

    let dir = cfg.sheets_dir();
    if dir.exists() {
        let mut orphans = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("csv") {
                continue;
            }
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            if !cfg.timesheets.contains_key(&stem) {
                orphans.push(ConfigIssue::OrphanCsv(
                    path.file_name()
                        .map(|s| s.to_string_lossy().to_string())
                        .unwrap_or_default(),
                ));
            }
        }
        orphans.sort_by_key(|i| i.to_string());
        issues.extend(orphans);
    }

    Ok(issues)
}

/// Fill missing settings from the configured defaults.
/// Returns the number of fields written; the file is saved only on change.
pub fn migrate(cfg: &mut Config) -> AppResult<usize> {
    let currency = cfg.default_currency.clone();
    let timebase = cfg.default_timebase;
    let mut changed = 0;

    for (name, settings) in cfg.timesheets.iter_mut() {
        if settings.currency.is_none() {
            settings.currency = Some(currency.clone());
            log::info!("set currency of '{name}' to {currency}");
            changed += 1;
        }
        if settings.timebase.is_none() {
            settings.timebase = Some(timebase);
            log::info!("set timebase of '{name}' to {timebase}");
            changed += 1;
        }
    }

    if changed > 0 {
        cfg.save()?;
    }

    Ok(changed)
}
