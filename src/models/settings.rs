use crate::models::timebase::Timebase;
use serde::{Deserialize, Serialize};

/// Pay configuration of a single timesheet, as stored in the config file.
///
/// `currency` and `timebase` were added after the first releases, so they
/// may be missing on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetSettings {
    pub rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timebase: Option<Timebase>,
}

impl SheetSettings {
    pub fn new(rate: f64, currency: &str, timebase: Timebase) -> Self {
        Self {
            rate,
            currency: Some(currency.to_string()),
            timebase: Some(timebase),
        }
    }

    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(crate::config::DEFAULT_CURRENCY)
    }

    pub fn timebase(&self) -> Timebase {
        self.timebase.unwrap_or_default()
    }
}
