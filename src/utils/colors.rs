/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREEN: &str = "\x1b[32m";

/// Highlight the currently opened timesheet in listings.
pub fn mark_current(name: &str, current: bool) -> String {
    if current {
        format!("{GREEN}* {name}{RESET}")
    } else {
        format!("  {name}")
    }
}
