use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::journal;
use crate::core::sheet::{Timesheet, parse_rate};
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &mut Config) -> AppResult<()> {
    if let Commands::New {
        name,
        rate,
        currency,
        timebase,
    } = cmd
    {
        let rate = parse_rate(rate)?;
        let sheet = Timesheet::create(cfg, name, rate, currency.as_deref(), *timebase)?;

        success(format!(
            "Timesheet '{}' created ({}{:.2} per {}).",
            sheet.name,
            sheet.currency(),
            sheet.settings.rate,
            sheet.timebase()
        ));

        journal::record(cfg, "new", &sheet.name, "Timesheet created");
    }

    Ok(())
}
