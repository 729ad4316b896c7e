use crate::export::ExportFormat;
use crate::models::ChartKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for presence-analyzer
#[derive(Parser)]
#[command(
    name = "presence-analyzer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Presence analysis: per-weekday and monthly statistics, chart data and a dashboard server",
    long_about = None
)]
pub struct Cli {
    /// Override the presence CSV path from the config file
    #[arg(global = true, long = "csv", value_name = "FILE")]
    pub csv: Option<String>,

    /// Override the users XML path from the config file
    #[arg(global = true, long = "xml", value_name = "FILE")]
    pub xml: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration directory and a default config file
    Init,

    /// Inspect or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "List keys missing from the configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List users from the users XML file
    Users,

    /// Compute one statistic for a user
    Stats {
        /// Statistic to compute
        #[arg(value_enum)]
        kind: ChartKind,

        /// User id
        user_id: u32,

        /// Print the raw API JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the rendered chart description for a user
    Chart {
        #[arg(value_enum)]
        kind: ChartKind,

        user_id: u32,
    },

    /// Convert a seconds offset to the clock time shown on charts
    Interval {
        #[arg(allow_hyphen_values = true)]
        seconds: i64,
    },

    /// Export one statistic for a user
    Export {
        #[arg(long, value_enum)]
        kind: ChartKind,

        #[arg(long = "user")]
        user_id: u32,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Run the HTTP API and dashboard
    Serve {
        #[arg(long, help = "Bind address (default from config)")]
        host: Option<String>,

        #[arg(long, short = 'p', help = "Port (default from config)")]
        port: Option<u16>,
    },
}
