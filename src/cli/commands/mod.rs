pub mod activities;
pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod edit;
pub mod entries;
pub mod export;
pub mod init;
pub mod log;
pub mod new;
pub mod open;
pub mod remove;
pub mod settings;
pub mod sheets;
pub mod summary;

use crate::ui::messages::warning;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
