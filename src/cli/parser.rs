use crate::export::ExportFormat;
use crate::models::Timebase;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for tsheet
/// CLI application to keep timesheets of worked hours and pay
#[derive(Parser)]
#[command(
    name = "tsheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple timesheet CLI: record worked hours and compute monthly pay totals",
    long_about = None
)]
pub struct Cli {
    /// Override the home directory (config file, sheets and journal)
    #[arg(global = true, long = "home", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Timesheet to work on (default: the last opened one)
    #[arg(global = true, long = "sheet", short = 's', value_name = "NAME")]
    pub sheet: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the home directory and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Fill missing fields with the defaults")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Create a new timesheet and open it
    New {
        /// Name of the timesheet (whitespace becomes '_')
        name: String,

        #[arg(long = "rate", help = "Default rate of pay")]
        rate: String,

        #[arg(long = "currency", help = "Currency symbol (default from config)")]
        currency: Option<String>,

        #[arg(long = "timebase", value_enum, help = "Unit of durations: hour or day")]
        timebase: Option<Timebase>,
    },

    /// List timesheets
    Sheets,

    /// Open a timesheet (used when --sheet is not given)
    Open { name: String },

    /// Delete one or more timesheets and their entries
    Remove {
        #[arg(required = true, num_args = 1.., help = "Timesheets to delete")]
        names: Vec<String>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show or change the settings of a timesheet
    Settings {
        #[arg(long = "name", help = "Rename the timesheet")]
        name: Option<String>,

        #[arg(long = "rate", help = "Default rate of pay")]
        rate: Option<String>,

        #[arg(long = "currency")]
        currency: Option<String>,

        #[arg(long = "timebase", value_enum)]
        timebase: Option<Timebase>,
    },

    /// Add an entry
    Add {
        /// Date in day-month-year order, e.g. 4, 4/3, 04 Mar 17, 040317 (default: today)
        date: Option<String>,

        /// Duration: 2, 1.5, 1:30 (hours) or 0.5 (days)
        #[arg(long = "dur", short = 'd')]
        duration: String,

        /// What was done
        #[arg(long = "act", short = 'a')]
        activity: String,

        /// Rate of pay (default: the sheet's rate)
        #[arg(long = "rate", short = 'r')]
        rate: Option<String>,
    },

    /// List entries with their ids
    Entries {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Edit an entry
    Edit {
        /// Entry id, as shown by `entries`
        id: usize,

        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "dur", short = 'd')]
        duration: Option<String>,

        #[arg(long = "act", short = 'a')]
        activity: Option<String>,

        #[arg(long = "rate", short = 'r')]
        rate: Option<String>,
    },

    /// Delete entries by id
    Del {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<usize>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show entries grouped by month with time and pay totals
    Summary {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// List distinct activities of a timesheet
    Activities,

    /// Export timesheet data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, help = "Export month totals instead of entries")]
        summary: bool,

        #[arg(
            long,
            conflicts_with_all = ["summary", "range", "format"],
            help = "Copy the timesheet CSV file unchanged"
        )]
        raw: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Back up the configuration and all timesheets
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Print the operation journal
    Log {
        #[arg(long = "print", help = "Print the journal")]
        print: bool,
    },
}
