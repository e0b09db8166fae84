use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::sheet::Timesheet;
use crate::core::summary::{filter_range, summarize};
use crate::errors::AppResult;
use crate::export::range::parse_optional_range;
use crate::models::{Entry, MonthSummary, Timebase};
use crate::ui::messages::{header, info};
use crate::utils::formatting::bold;
use crate::utils::table::Table;

pub fn handle(cli: &Cli, cfg: &mut Config) -> AppResult<()> {
    if let Commands::Summary { period } = &cli.command {
        let sheet = Timesheet::open_active(cfg, cli.sheet.as_deref())?;
        let bounds = parse_optional_range(period.as_deref())?;

        let entries: Vec<Entry> = filter_range(&sheet.entries, bounds)
            .into_iter()
            .map(|(_, e)| e.clone())
            .collect();

        if entries.is_empty() {
            info(format!("There are no entries to display in '{}'.", sheet.name));
            info("Use `tsheet add --dur <DURATION> --act <ACTIVITY>` to create one.");
            return Ok(());
        }

        let months = summarize(&entries, sheet.timebase(), sheet.currency());
        for month in &months {
            print_month(month, sheet.timebase(), sheet.currency());
        }
    }

    Ok(())
}

fn print_month(month: &MonthSummary, timebase: Timebase, currency: &str) {
    header(&month.label);
    println!(
        "{}  {}\n",
        bold(&format!("Time: {} {};", month.total_time, timebase.plural())),
        bold(&format!("Pay: {}", month.total_pay))
    );

    let mut table = Table::new(vec![
        "Date".to_string(),
        "Duration".to_string(),
        "Activity".to_string(),
        format!("Rate ({currency})"),
    ]);
    for row in &month.rows {
        table.add_row(vec![
            row.date.clone(),
            row.duration.clone(),
            row.activity.clone(),
            row.rate.clone(),
        ]);
    }

    println!("{}", table.render());
}
