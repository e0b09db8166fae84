use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::journal;
use crate::core::settings::{SettingsChange, SettingsLogic};
use crate::core::sheet::Timesheet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cli: &Cli, cfg: &mut Config) -> AppResult<()> {
    if let Commands::Settings {
        name,
        rate,
        currency,
        timebase,
    } = &cli.command
    {
        let sheet = Timesheet::open_active(cfg, cli.sheet.as_deref())?;

        let change = SettingsChange {
            name: name.as_deref(),
            rate: rate.as_deref(),
            currency: currency.as_deref(),
            timebase: *timebase,
        };

        if change.is_empty() {
            println!("name     : {}", sheet.name);
            println!("rate     : {:.2}", sheet.settings.rate);
            println!("currency : {}", sheet.currency());
            println!("timebase : {}", sheet.timebase());
            println!("entries  : {}", sheet.entries.len());
            return Ok(());
        }

        let done = SettingsLogic::apply(cfg, &sheet.name, &change)?;
        if done.is_empty() {
            info("Nothing changed.");
        }
        for line in &done {
            success(line);
        }
        journal::record(cfg, "settings", &sheet.name, &done.join("; "));
    }

    Ok(())
}
