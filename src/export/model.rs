// src/export/model.rs

use crate::models::MonthSummary;
use serde::Serialize;

/// Flat month totals for CSV / JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct MonthExport {
    pub month: String,
    pub year: i32,
    pub entries: usize,
    pub total_time: String,
    pub total_pay: String,
}

impl From<&MonthSummary> for MonthExport {
    fn from(m: &MonthSummary) -> Self {
        Self {
            month: m.label.clone(),
            year: m.year,
            entries: m.rows.len(),
            total_time: m.total_time.clone(),
            total_pay: format!("{:.2}", m.pay),
        }
    }
}
