use crate::export::ExportFormat;
use crate::models::Schema;
use clap::{Parser, Subcommand};

/// Command-line interface definition for attendlog
#[derive(Parser)]
#[command(
    name = "attendlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record activity logins/logouts in a flat CSV attendance table",
    long_about = None
)]
pub struct Cli {
    /// Override the table path (useful for tests or a second table)
    #[arg(global = true, long = "table", value_name = "PATH")]
    pub table: Option<String>,

    /// Override the table schema
    #[arg(global = true, long = "schema", value_enum)]
    pub schema: Option<Schema>,

    /// Override the duplicate-login policy (true = every login appends a row)
    #[arg(global = true, long = "allow-duplicates", value_name = "BOOL")]
    pub allow_duplicates: Option<bool>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the attendance table
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
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
    },

    /// Start a session (appends an open record)
    Login {
        #[arg(long, short = 'a', help = "Activity or topic of the session")]
        activity: Option<String>,

        #[arg(long, short = 'd', help = "Date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long, short = 't', help = "Login time, default now")]
        time: Option<String>,

        #[arg(long, help = "Scheduled-time label (schedule schema only)")]
        scheduled: Option<String>,
    },

    /// Close the first open session for the date (and activity)
    Logout {
        #[arg(
            long,
            short = 'a',
            help = "Activity of the session (required by the activity schema)"
        )]
        activity: Option<String>,

        #[arg(long, short = 'd', help = "Date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long, short = 't', help = "Logout time, default now")]
        time: Option<String>,
    },

    /// Set the remark of a record (activity schema only)
    Remark {
        #[arg(long, short = 'd', help = "Date of the record (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, short = 'a', help = "Activity of the record")]
        activity: Option<String>,

        /// Remark text
        text: Option<String>,
    },

    /// List records
    List {
        #[arg(long, help = "Show only open sessions")]
        open: bool,

        #[arg(long, short = 'd', help = "Show only the given date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(
            long,
            short = 'p',
            help = "Filter by year/month/day or a custom range (e.g. 2024-01:2024-03)"
        )]
        period: Option<String>,

        #[arg(long, help = "Print records as JSON")]
        json: bool,
    },

    /// Print the fixed activity list of the activity schema
    Activities,

    /// Export the table
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

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log")]
        print: bool,
    },
}
