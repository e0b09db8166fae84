use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::sheet::Timesheet;
use crate::core::summary::filter_range;
use crate::errors::AppResult;
use crate::export::range::parse_optional_range;
use crate::models::EntryExport;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cli: &Cli, cfg: &mut Config) -> AppResult<()> {
    if let Commands::Entries { period } = &cli.command {
        let sheet = Timesheet::open_active(cfg, cli.sheet.as_deref())?;
        let bounds = parse_optional_range(period.as_deref())?;
        let selected = filter_range(&sheet.entries, bounds);

        if selected.is_empty() {
            info(format!("No entries in '{}'.", sheet.name));
            return Ok(());
        }

        let mut table = Table::new(vec![
            "ID".to_string(),
            "Date".to_string(),
            "Duration".to_string(),
            "Activity".to_string(),
            format!("Rate ({})", sheet.currency()),
            format!("Pay ({})", sheet.currency()),
        ]);

        // most recent first, like the summary
        for (id, entry) in selected.iter().rev() {
            let e = EntryExport::from_entry(*id, entry);
            table.add_row(vec![
                e.id.to_string(),
                e.date,
                e.duration,
                e.activity,
                e.rate,
                e.pay,
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
