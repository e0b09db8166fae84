use crate::cli::commands::ask_confirmation;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::journal;
use crate::core::sheet::Timesheet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cli: &Cli, cfg: &mut Config) -> AppResult<()> {
    if let Commands::Del { ids, yes } = &cli.command {
        let mut sheet = Timesheet::open_active(cfg, cli.sheet.as_deref())?;

        let list = ids
            .iter()
            .map(|id| format!("#{id}"))
            .collect::<Vec<_>>()
            .join(", ");

        if !*yes
            && !ask_confirmation(&format!(
                "Delete entries {list} from '{}'? This action is irreversible.",
                sheet.name
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = DeleteLogic::apply(&mut sheet, ids)?;
        success(format!(
            "{} entr{} deleted from '{}'.",
            removed.len(),
            if removed.len() == 1 { "y" } else { "ies" },
            sheet.name
        ));

        journal::record(cfg, "del", &sheet.name, &format!("Deleted {list}"));
    }

    Ok(())
}
