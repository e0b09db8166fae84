use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::add::EntryInput;
use crate::core::edit::EditLogic;
use crate::core::journal;
use crate::core::sheet::Timesheet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date;

pub fn handle(cli: &Cli, cfg: &mut Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date: date_arg,
        duration,
        activity,
        rate,
    } = &cli.command
    {
        let input = EntryInput {
            date: date_arg.as_deref(),
            duration: duration.as_deref(),
            activity: activity.as_deref(),
            rate: rate.as_deref(),
        };

        if input.date.is_none()
            && input.duration.is_none()
            && input.activity.is_none()
            && input.rate.is_none()
        {
            info("Nothing to change: use --date, --dur, --act or --rate.");
            return Ok(());
        }

        let mut sheet = Timesheet::open_active(cfg, cli.sheet.as_deref())?;
        let before = EditLogic::apply(&mut sheet, *id, &input, date::today())?;
        let after = &sheet.entries[id - 1];

        success(format!(
            "Entry #{id} updated: {} | {} | {} | {:.2}",
            after.date.format("%Y-%m-%d"),
            after.duration,
            after.activity,
            after.rate
        ));

        journal::record(
            cfg,
            "edit",
            &sheet.name,
            &format!(
                "#{id}: {} {} {} -> {} {} {}",
                before.date, before.duration, before.activity, after.date, after.duration, after.activity
            ),
        );
    }

    Ok(())
}
