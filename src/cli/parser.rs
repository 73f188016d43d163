use crate::config::Backend;
use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for stagelist
/// Event-list manager for stage performances
#[derive(Parser)]
#[command(
    name = "stagelist",
    version = env!("CARGO_PKG_VERSION"),
    about = "Stage performance event list: register acts, mark them completed and show what is on now",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the record store backend
    #[arg(global = true, long = "backend", value_enum)]
    pub backend: Option<Backend>,

    /// Override the server URL used by the remote backend
    #[arg(global = true, long = "server")]
    pub server: Option<String>,

    /// Override the JSON file used by the local backend
    #[arg(global = true, long = "local-file")]
    pub local_file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// The six text attributes of an act, all optional on the command line.
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    #[arg(long = "church", help = "Church / group name")]
    pub church_name: Option<String>,

    #[arg(long = "name", help = "Performer name")]
    pub name: Option<String>,

    #[arg(long = "no", help = "Act / dance number")]
    pub no: Option<String>,

    #[arg(long = "token", help = "Token")]
    pub token: Option<String>,

    #[arg(long = "author", help = "Author")]
    pub author: Option<String>,

    #[arg(long = "mobile", help = "Mobile number")]
    pub mobile_no: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Report keys missing from the configuration file")]
        check: bool,
    },

    /// Database maintenance (SQLite backend only)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Run the HTTP record store
    Serve {
        #[arg(long = "bind", help = "Address to bind (default from config)")]
        bind: Option<String>,

        #[arg(long = "port", help = "Port to listen on (default from config)")]
        port: Option<u16>,
    },

    /// Register a new act
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// List every act with its status
    List {
        #[arg(long = "json", help = "Print the raw JSON records")]
        json: bool,
    },

    /// Flip an act between pending and completed
    Toggle {
        /// Event id
        id: i64,
    },

    /// Change fields of an existing act in place
    Edit {
        /// Event id
        id: i64,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete an act by id
    Del {
        /// Event id
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show completed acts, then pending ones
    Order,

    /// Show previous / current / next pending act
    Viewer {
        #[arg(
            long = "position",
            default_value_t = 0,
            help = "Starting position among pending acts (0-based)"
        )]
        position: usize,

        #[arg(
            long = "watch",
            help = "Keep polling; type n (next), p (previous) or q (quit)"
        )]
        watch: bool,
    },

    /// Interactive console with background refresh
    Console,

    /// Export all acts
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
