use serde::Serialize;

/// One displayed row of a month group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    /// `DD Mon YY`
    pub date: String,
    pub duration: String,
    pub activity: String,
    /// Two decimals, no currency symbol.
    pub rate: String,
}

/// Entries of one calendar month with their totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    /// `March 2017`
    pub label: String,
    #[serde(skip)]
    pub pay: f64,
    pub total_pay: String,
    pub total_time: String,
    pub rows: Vec<SummaryRow>,
}
