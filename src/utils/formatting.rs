//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `£12.50`
pub fn money(currency: &str, amount: f64) -> String {
    format!("{}{:.2}", currency, amount)
}

/// Total of an hour-based sheet: hours are not padded (`123:05`).
pub fn hours_total(minutes: u64) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// Total of a day-based sheet, shortest decimal text.
pub fn days_total(days: f64) -> String {
    // summing decimals drifts (0.1 + 0.2); four places is plenty for days
    let rounded = (days * 10_000.0).round() / 10_000.0;
    format!("{}", rounded)
}

/// Replace whitespace runs by `_` after trimming.
pub fn sanitize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_")
}
