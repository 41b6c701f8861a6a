use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rWorklog
/// CLI application to log team activity and daily standups with SQLite
#[derive(Parser)]
#[command(
    name = "rworklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small team worklog CLI: start/stop task events, daily standups and an admin view, using SQLite",
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

/// Fields shared by `start` and `stop`.
#[derive(Args, Debug, Clone)]
pub struct ActivityArgs {
    /// Your name, as registered in the team roster
    #[arg(long = "name", short = 'n')]
    pub name: String,

    /// Project / client label
    #[arg(long = "project", short = 'p', default_value = "")]
    pub project: String,

    /// Task category: scraping, data-processing, upload-delivery, bug-fix, meeting
    #[arg(long = "category", short = 'c')]
    pub category: String,

    /// Optional details
    #[arg(long = "note", default_value = "")]
    pub note: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init {
        /// Admin secret to store (hashed) in the new configuration
        #[arg(long = "admin-secret")]
        admin_secret: Option<String>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing configuration fields with defaults")]
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

        #[arg(
            long = "set-admin-secret",
            value_name = "SECRET",
            help = "Store a new admin secret (salted hash)"
        )]
        set_admin_secret: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Show the active team roster
    Team,

    /// Record the START of a task
    Start(ActivityArgs),

    /// Record the END of a task
    Stop(ActivityArgs),

    /// Submit today's standup update (once per day)
    Daily {
        #[arg(long = "name", short = 'n')]
        name: String,

        #[arg(long = "yesterday", help = "What did you do yesterday?")]
        yesterday: String,

        #[arg(long = "today", help = "What will you do today?")]
        today: String,

        #[arg(long = "blockers", default_value = "", help = "Anything blocking you?")]
        blockers: String,
    },

    /// Admin area (requires the admin secret)
    Admin {
        /// Admin secret
        #[arg(long = "secret", env = "RWORKLOG_ADMIN_SECRET", hide_env_values = true)]
        secret: Option<String>,

        #[command(subcommand)]
        command: AdminCommands,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}

#[derive(Subcommand)]
pub enum AdminCommands {
    /// List activity records, newest first
    Records {
        #[arg(long, help = "Only this employee (\"All\" for everyone)")]
        employee: Option<String>,

        #[arg(long, help = "Only this project (\"All\" for every project)")]
        project: Option<String>,
    },

    /// Edit project and/or note of an activity record
    Edit {
        id: i64,

        #[arg(long)]
        project: Option<String>,

        #[arg(long)]
        note: Option<String>,
    },

    /// Delete an activity record
    Delete {
        id: i64,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Today's standup updates with blocker flags
    Today,

    /// Add an employee to the roster
    Hire { name: String },

    /// Deactivate an employee (history is kept)
    Revoke { name: String },

    /// Export activity records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (YYYY-MM-DD:YYYY-MM-DD)"
        )]
        range: Option<String>,

        #[arg(long)]
        employee: Option<String>,

        #[arg(long)]
        project: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
