use crate::config::Config;
use crate::core::sheet::{self, parse_rate};
use crate::errors::{AppError, AppResult};
use crate::models::Timebase;

/// Requested changes; `None` leaves a field as is.
#[derive(Debug, Default)]
pub struct SettingsChange<'a> {
    pub name: Option<&'a str>,
    pub rate: Option<&'a str>,
    pub currency: Option<&'a str>,
    pub timebase: Option<Timebase>,
}

impl SettingsChange<'_> {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.rate.is_none() && self.currency.is_none() && self.timebase.is_none()
    }
}

pub struct SettingsLogic;

impl SettingsLogic {
    /// Apply the changes to `sheet_name` and return a description of each.
    ///
    /// Changing the timebase does not convert durations already recorded.
    pub fn apply(cfg: &mut Config, sheet_name: &str, change: &SettingsChange<'_>) -> AppResult<Vec<String>> {
        // validate everything first, so a bad value changes nothing
        let rate = change.rate.map(parse_rate).transpose()?;
        let currency = match change.currency.map(str::trim) {
            Some("") => return Err(AppError::EmptyField("currency")),
            other => other.map(str::to_string),
        };

        let mut name = cfg
            .find_sheet(sheet_name)
            .map(str::to_string)
            .ok_or_else(|| AppError::SheetNotFound(sheet_name.to_string()))?;
        let mut done = Vec::new();

        if let Some(new_name) = change.name {
            let renamed = sheet::rename(cfg, &name, new_name)?;
            if renamed != name {
                done.push(format!("name: {name} -> {renamed}"));
                name = renamed;
            }
        }

        let settings = cfg
            .timesheets
            .get_mut(&name)
            .ok_or_else(|| AppError::SheetNotFound(name.clone()))?;

        if let Some(r) = rate {
            done.push(format!("rate: {} -> {}", settings.rate, r));
            settings.rate = r;
        }
        if let Some(c) = currency {
            done.push(format!("currency: {} -> {}", settings.currency(), c));
            settings.currency = Some(c);
        }
        if let Some(t) = change.timebase {
            done.push(format!("timebase: {} -> {}", settings.timebase(), t));
            settings.timebase = Some(t);
        }

        cfg.save()?;
        Ok(done)
    }
}
