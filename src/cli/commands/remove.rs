use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{journal, sheet};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &mut Config) -> AppResult<()> {
    if let Commands::Remove { names, yes } = cmd {
        // resolve every name before deleting anything
        let mut found: Vec<String> = Vec::new();
        for name in names {
            let resolved = cfg
                .find_sheet(name)
                .map(str::to_string)
                .ok_or_else(|| AppError::SheetNotFound(name.clone()))?;
            if !found.contains(&resolved) {
                found.push(resolved);
            }
        }

        let listed = found
            .iter()
            .map(|n| format!("'{n}'"))
            .collect::<Vec<_>>()
            .join(", ");

        if !*yes
            && !ask_confirmation(&format!(
                "Delete timesheet(s) {listed} and all their entries? This action is irreversible."
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        for name in &found {
            let removed = sheet::delete(cfg, name)?;
            success(format!("Timesheet '{removed}' has been deleted."));
            journal::record(cfg, "remove", &removed, "Timesheet deleted");
        }
    }

    Ok(())
}
