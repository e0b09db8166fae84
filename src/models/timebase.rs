use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit in which the durations of a timesheet are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Timebase {
    #[default]
    Hour,
    Day,
}

impl Timebase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timebase::Hour => "hour",
            Timebase::Day => "day",
        }
    }

    /// "hours" / "days", used in summary headers.
    pub fn plural(&self) -> &'static str {
        match self {
            Timebase::Hour => "hours",
            Timebase::Day => "days",
        }
    }
}

impl fmt::Display for Timebase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
