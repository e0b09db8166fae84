use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::add::{AddLogic, EntryInput};
use crate::core::journal;
use crate::core::sheet::Timesheet;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

/// Add an entry to the active timesheet.
pub fn handle(cli: &Cli, cfg: &mut Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_arg,
        duration,
        activity,
        rate,
    } = &cli.command
    {
        let mut sheet = Timesheet::open_active(cfg, cli.sheet.as_deref())?;

        let input = EntryInput {
            date: date_arg.as_deref(),
            duration: Some(duration.as_str()),
            activity: Some(activity.as_str()),
            rate: rate.as_deref(),
        };

        let id = AddLogic::apply(&mut sheet, &input, date::today())?;
        let entry = &sheet.entries[id - 1];

        success(format!(
            "Added #{id} to '{}': {} | {} | {} | {:.2}",
            sheet.name,
            entry.date.format("%Y-%m-%d"),
            entry.duration,
            entry.activity,
            entry.rate
        ));

        journal::record(
            cfg,
            "add",
            &sheet.name,
            &format!("{} {} {}", entry.date, entry.duration, entry.activity),
        );
    }

    Ok(())
}
