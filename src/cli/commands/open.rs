use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sheet;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &mut Config) -> AppResult<()> {
    if let Commands::Open { name } = cmd {
        let name = sheet::set_last(cfg, name)?;
        success(format!("Opened timesheet '{name}'."));
    }
    Ok(())
}
