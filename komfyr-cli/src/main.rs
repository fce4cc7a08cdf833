//! Komfyrvakt CLI
//!
//! Command-line interface for the Komfyrvakt logging service.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use komfyr_client::DEFAULT_BASE_URL;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "komfyr")]
#[command(about = "Komfyrvakt logging service CLI", long_about = None)]
struct Cli {
    /// API base URL, including the /api root
    #[arg(long, env = "KOMFYRVAKT_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// API key (kmf_...)
    #[arg(long, env = "KOMFYRVAKT_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "komfyr_cli=info,komfyr_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        api_key: cli.api_key,
    };

    handle_command(cli.command, &config).await
}
