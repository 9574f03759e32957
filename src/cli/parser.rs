use crate::config::Theme;
use crate::export::ExportFormat;
use crate::models::settings::WorkPattern;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small timesheet CLI: log start/finish, lunch and paid time off per week and total the hours",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

        #[arg(long = "theme", value_enum, help = "Set the display theme")]
        theme: Option<Theme>,
    },

    /// Show or update the stored work settings
    Settings {
        #[arg(long = "pattern", value_enum, help = "Reporting period: weekly or fortnightly")]
        pattern: Option<WorkPattern>,

        #[arg(long = "target", help = "Target hours per period")]
        target: Option<f64>,

        #[arg(long = "rate", help = "Hourly rate used for pay estimates")]
        rate: Option<f64>,

        #[arg(long = "clear-rate", conflicts_with = "rate", help = "Remove the hourly rate")]
        clear_rate: bool,
    },

    /// Set start/finish, lunch, PTO, notes or tags of one weekday
    Add {
        /// Date (YYYY-MM-DD), Monday to Friday
        date: String,

        #[arg(long = "in", help = "Start time (HH:MM, empty string clears)")]
        start: Option<String>,

        #[arg(long = "out", help = "Finish time (HH:MM, empty string clears)")]
        finish: Option<String>,

        #[arg(long = "lunch", help = "Lunch break in hours (e.g. 0.5)")]
        lunch: Option<String>,

        #[arg(
            long = "lunch-step",
            allow_negative_numbers = true,
            value_name = "MINUTES",
            help = "Lengthen (or shorten, if negative) the lunch break, up to 4 hours"
        )]
        lunch_step: Option<i64>,

        #[arg(long = "pto", help = "Paid time off hours")]
        pto: Option<String>,

        #[arg(long = "notes")]
        notes: Option<String>,

        #[arg(long = "tags", help = "Comma separated tags")]
        tags: Option<String>,
    },

    /// Work with whole weeks
    Week {
        #[command(subcommand)]
        action: WeekAction,
    },

    /// Clear one day, or delete a whole week with --week
    Del {
        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(long = "week", help = "Delete every day of the week containing DATE")]
        week: bool,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List stored weeks, most recent first
    List {
        #[arg(
            long = "select",
            short = 's',
            value_name = "MONDAYS",
            help = "Comma separated week dates to total (any day of the week works)"
        )]
        select: Option<String>,
    },

    /// Totals for the current weekly/fortnightly period
    Period {
        #[arg(long = "date", short = 'd', help = "Reference date (default: today)")]
        date: Option<String>,

        #[arg(long = "pattern", value_enum, help = "Override the stored work pattern")]
        pattern: Option<WorkPattern>,
    },

    /// Export week summaries (or days) to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "days", help = "Export one row per stored day instead of per week")]
        days: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum WeekAction {
    /// Create a new week (default: the next Monday without data)
    New {
        /// Any date of the week to create
        date: Option<String>,

        #[arg(long = "in", help = "Start time for every day")]
        start: Option<String>,

        #[arg(long = "out", help = "Finish time for every day")]
        finish: Option<String>,

        #[arg(long = "lunch", help = "Lunch hours for every day")]
        lunch: Option<String>,

        #[arg(long = "pto", help = "PTO hours for every day")]
        pto: Option<String>,
    },

    /// Show the five days of a week with the running total
    Show {
        /// Any date of the week (default: today)
        date: Option<String>,
    },

    /// Copy Monday's times, lunch and PTO to the rest of the week
    FillDown {
        /// Any date of the week
        date: String,
    },

    /// Print the next Monday that has no stored week
    Next,
}
