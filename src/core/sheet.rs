//! Timesheet storage: one CSV file per sheet, settings in the config file.

use crate::config::Config;
use crate::core::summary::{CSV_HEADER, read_entries};
use crate::errors::{AppError, AppResult};
use crate::models::{Entry, SheetSettings, Timebase};
use crate::utils::formatting::sanitize_name;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Timesheet {
    pub name: String,
    pub settings: SheetSettings,
    pub entries: Vec<Entry>,
    pub path: PathBuf,
}

/// Validate a user supplied name; whitespace becomes `_`.
pub fn normalize_name(raw: &str) -> AppResult<String> {
    let name = sanitize_name(raw);
    if name.is_empty() {
        return Err(AppError::EmptyField("name"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AppError::InvalidName(format!(
            "'{name}' (use letters, digits, '_' or '-')"
        )));
    }
    Ok(name)
}

/// Non-negative decimal rate of pay.
pub fn parse_rate(raw: &str) -> AppResult<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(AppError::EmptyField("rate of pay"));
    }
    s.parse::<f64>()
        .ok()
        .filter(|r| r.is_finite() && *r >= 0.0)
        .ok_or_else(|| AppError::InvalidRate(s.to_string()))
}

impl Timesheet {
    /// Create an empty sheet and register it in the config.
    pub fn create(
        cfg: &mut Config,
        name: &str,
        rate: f64,
        currency: Option<&str>,
        timebase: Option<Timebase>,
    ) -> AppResult<Self> {
        let name = normalize_name(name)?;
        if let Some(existing) = cfg.find_sheet(&name) {
            return Err(AppError::SheetExists(existing.to_string()));
        }

        let currency = match currency.map(str::trim) {
            Some("") => return Err(AppError::EmptyField("currency")),
            Some(c) => c.to_string(),
            None => cfg.default_currency.clone(),
        };
        let timebase = timebase.unwrap_or(cfg.default_timebase);

        let path = cfg.sheet_file(&name);
        if path.exists() {
            return Err(AppError::SheetExists(name));
        }

        let sheet = Self {
            name: name.clone(),
            settings: SheetSettings::new(rate, &currency, timebase),
            entries: Vec::new(),
            path,
        };
        sheet.save()?;

        cfg.timesheets.insert(name.clone(), sheet.settings.clone());
        cfg.last = Some(name);
        cfg.save()?;

        log::info!("created timesheet {}", sheet.path.display());
        Ok(sheet)
    }

    /// Open a registered sheet. Settings missing from older configs are
    /// filled with the defaults and written back.
    pub fn open(cfg: &mut Config, name: &str) -> AppResult<Self> {
        let name = cfg
            .find_sheet(name)
            .map(str::to_string)
            .ok_or_else(|| AppError::SheetNotFound(name.to_string()))?;

        let default_currency = cfg.default_currency.clone();
        let default_timebase = cfg.default_timebase;

        let mut upgraded = false;
        let settings = match cfg.timesheets.get_mut(&name) {
            Some(s) => {
                if s.currency.is_none() {
                    s.currency = Some(default_currency);
                    upgraded = true;
                }
                if s.timebase.is_none() {
                    s.timebase = Some(default_timebase);
                    upgraded = true;
                }
                s.clone()
            }
            None => return Err(AppError::SheetNotFound(name)),
        };
        if upgraded {
            log::info!("filled missing settings of '{name}'");
            cfg.save()?;
        }

        let path = cfg.sheet_file(&name);
        let entries = if path.exists() {
            read_entries(fs::File::open(&path)?)?
        } else {
            log::warn!("{} is missing, starting empty", path.display());
            Vec::new()
        };

        Ok(Self {
            name,
            settings,
            entries,
            path,
        })
    }

    /// Open the sheet given on the command line or the last opened one.
    pub fn open_active(cfg: &mut Config, requested: Option<&str>) -> AppResult<Self> {
        let name = cfg.resolve_sheet(requested)?;
        Self::open(cfg, &name)
    }

    /// Rewrite the CSV file with the current entries.
    pub fn save(&self) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let mut wtr = csv::Writer::from_path(&self.path)?;
        wtr.write_record(CSV_HEADER)?;
        for entry in &self.entries {
            wtr.write_record(entry.to_record())?;
        }
        wtr.flush()?;

        log::debug!("wrote {} rows to {}", self.entries.len(), self.path.display());
        Ok(())
    }

    pub fn timebase(&self) -> Timebase {
        self.settings.timebase()
    }

    pub fn currency(&self) -> &str {
        self.settings.currency()
    }

    /// Distinct activities, sorted.
    pub fn activities(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| e.activity.clone())
            .filter(|a| !a.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Copy the CSV file as-is to `dest`.
    pub fn export_raw(&self, dest: &Path) -> AppResult<()> {
        if !self.path.exists() {
            self.save()?;
        }
        fs::copy(&self.path, dest)?;
        Ok(())
    }
}

/// Registered sheet names, sorted.
pub fn list(cfg: &Config) -> Vec<String> {
    cfg.timesheets.keys().cloned().collect()
}

/// Rename a sheet: CSV file, config key and `last`.
pub fn rename(cfg: &mut Config, old: &str, new: &str) -> AppResult<String> {
    let old = cfg
        .find_sheet(old)
        .map(str::to_string)
        .ok_or_else(|| AppError::SheetNotFound(old.to_string()))?;
    let new = normalize_name(new)?;

    if old == new {
        return Ok(new);
    }
    if let Some(existing) = cfg.find_sheet(&new)
        && !existing.eq_ignore_ascii_case(&old)
    {
        return Err(AppError::SheetExists(existing.to_string()));
    }

    let from = cfg.sheet_file(&old);
    let to = cfg.sheet_file(&new);
    // an unregistered CSV may sit under the new name; a case-only rename
    // may see the old file itself on case-insensitive filesystems
    if to.exists() && !old.eq_ignore_ascii_case(&new) {
        return Err(AppError::SheetExists(new));
    }
    if from.exists() {
        fs::rename(&from, &to)?;
    }

    if let Some(settings) = cfg.timesheets.remove(&old) {
        cfg.timesheets.insert(new.clone(), settings);
    }
    if cfg.last.as_deref() == Some(old.as_str()) {
        cfg.last = Some(new.clone());
    }
    cfg.save()?;

    log::info!("renamed '{old}' to '{new}'");
    Ok(new)
}

/// Remove a sheet's CSV file and its config entry.
pub fn delete(cfg: &mut Config, name: &str) -> AppResult<String> {
    let name = cfg
        .find_sheet(name)
        .map(str::to_string)
        .ok_or_else(|| AppError::SheetNotFound(name.to_string()))?;

    let path = cfg.sheet_file(&name);
    if path.exists() {
        fs::remove_file(&path)?;
    }

    cfg.timesheets.remove(&name);
    if cfg.last.as_deref() == Some(name.as_str()) {
        cfg.last = None;
    }
    cfg.save()?;

    log::info!("deleted timesheet '{name}'");
    Ok(name)
}

/// Make `name` the sheet used when `--sheet` is not given.
pub fn set_last(cfg: &mut Config, name: &str) -> AppResult<String> {
    let name = cfg
        .find_sheet(name)
        .map(str::to_string)
        .ok_or_else(|| AppError::SheetNotFound(name.to_string()))?;
    cfg.last = Some(name.clone());
    cfg.save()?;
    Ok(name)
}
