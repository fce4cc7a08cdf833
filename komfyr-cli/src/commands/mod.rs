//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod analyze;
mod logs;
mod service;
mod storage;

pub use logs::LogCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Query and ingest logs
    Logs {
        #[command(subcommand)]
        command: LogCommands,
    },
    /// Show storage statistics
    Stats,
    /// List all groups that have logs
    Groups,
    /// Delete logs (all of them unless --group is given)
    Purge {
        /// Group to purge (use a trailing * for prefix match)
        #[arg(short, long)]
        group: Option<String>,

        /// Required to purge every log
        #[arg(long)]
        yes: bool,
    },
    /// Analyze logs and print insights
    Analyze {
        /// Group to analyze (default: all logs)
        #[arg(short, long)]
        group: Option<String>,

        /// Ignore the cached analysis
        #[arg(long)]
        refresh: bool,

        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },
    /// Check service health
    Health,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Logs { command } => logs::handle_log_command(command, config).await,
        Commands::Stats => storage::show_stats(config).await,
        Commands::Groups => storage::list_groups(config).await,
        Commands::Purge { group, yes } => storage::purge(config, group, yes).await,
        Commands::Analyze {
            group,
            refresh,
            json,
        } => analyze::analyze(config, group, refresh, json).await,
        Commands::Health => service::health(config).await,
    }
}
