//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod airlines;
pub mod args;
pub mod context;
pub mod init;
pub mod search;
pub mod status;

pub use args::{GlobalOptions, OutputFormat, SearchArgs};
pub use context::CommandContext;

/// farescout - search flight offers from the command line
#[derive(Parser, Debug)]
#[command(name = "farescout")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "FARESCOUT_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "FARESCOUT_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Custom API host (e.g. https://api.amadeus.com)
    #[arg(long, global = true, env = "FARESCOUT_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "FARESCOUT_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search flight offers and show the top three
    Search(SearchArgs),

    /// List known airline codes and names
    Airlines,

    /// Set up API credentials
    Init,

    /// Show credential and configuration status
    Status,

    /// Display version information
    Version,
}
