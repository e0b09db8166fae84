use crate::models::duration::WorkDuration;
use chrono::NaiveDate;
use serde::Serialize;

/// One dated line of a timesheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub date: NaiveDate,
    pub duration: WorkDuration,
    pub activity: String,
    pub rate: f64,
}

impl Entry {
    pub fn pay(&self) -> f64 {
        self.rate * self.duration.decimal()
    }

    /// Fields in CSV column order.
    pub fn to_record(&self) -> [String; 4] {
        [
            self.date.format("%Y-%m-%d").to_string(),
            self.duration.to_string(),
            self.activity.clone(),
            self.rate.to_string(),
        ]
    }
}

/// Flat view of an entry for listing and export.
#[derive(Debug, Clone, Serialize)]
pub struct EntryExport {
    pub id: usize,
    pub date: String,
    pub duration: String,
    pub activity: String,
    pub rate: String,
    pub pay: String,
}

impl EntryExport {
    pub fn from_entry(id: usize, e: &Entry) -> Self {
        Self {
            id,
            date: e.date.format("%Y-%m-%d").to_string(),
            duration: e.duration.to_string(),
            activity: e.activity.clone(),
            rate: format!("{:.2}", e.rate),
            pay: format!("{:.2}", e.pay()),
        }
    }
}
