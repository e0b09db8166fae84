use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::sheet::Timesheet;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cli: &Cli, cfg: &mut Config) -> AppResult<()> {
    let sheet = Timesheet::open_active(cfg, cli.sheet.as_deref())?;
    let activities = sheet.activities();

    if activities.is_empty() {
        info(format!("No activities recorded in '{}'.", sheet.name));
        return Ok(());
    }

    for activity in activities {
        println!("{activity}");
    }

    Ok(())
}
