use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::journal;
use crate::core::sheet::Timesheet;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &mut Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        summary,
        raw,
        force,
    } = &cli.command
    {
        let sheet = Timesheet::open_active(cfg, cli.sheet.as_deref())?;

        let written = if *raw {
            Some(ExportLogic::export_raw(&sheet, file, *force)?)
        } else {
            ExportLogic::export(&sheet, *format, file, range.as_deref(), *summary, *force)?
        };

        if let Some(path) = written {
            journal::record(
                cfg,
                "export",
                &sheet.name,
                &format!(
                    "{} {} to {}",
                    if *raw { "raw" } else { format.as_str() },
                    if *summary { "summary" } else { "entries" },
                    path.display()
                ),
            );
        }
    }
    Ok(())
}
