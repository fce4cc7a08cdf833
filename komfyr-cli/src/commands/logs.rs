//! Log command handlers
//!
//! Handles listing, viewing and ingesting logs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use colored::*;
use komfyr_core::domain::log::{LogLevel, StoredLog};
use komfyr_core::dto::log::{LogQuery, NewLog};

use crate::config::Config;

/// Log subcommands
#[derive(Subcommand)]
pub enum LogCommands {
    /// List logs
    List {
        /// Filter by group (use a trailing * for prefix match)
        #[arg(short, long)]
        group: Option<String>,

        /// Filter by tag (repeatable or comma-separated; any tag matches)
        #[arg(short, long = "tag", value_delimiter = ',')]
        tags: Vec<String>,

        /// Minimum severity
        #[arg(short, long)]
        level: Option<LogLevel>,

        /// Only logs after this ISO-8601 timestamp
        #[arg(long)]
        since: Option<String>,

        /// Only logs before this ISO-8601 timestamp
        #[arg(long)]
        until: Option<String>,

        /// Filter by source
        #[arg(short, long)]
        source: Option<String>,

        /// Maximum number of logs (1-1000)
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..=1000))]
        limit: Option<u32>,

        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },
    /// Show a single log
    Get {
        /// Log ID
        id: String,

        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },
    /// Send a log entry
    Post {
        /// Log message
        message: String,

        /// Severity
        #[arg(short, long, default_value_t = LogLevel::Info)]
        level: LogLevel,

        /// Group identifier
        #[arg(short, long)]
        group: Option<String>,

        /// Tag (repeatable or comma-separated)
        #[arg(short, long = "tag", value_delimiter = ',')]
        tags: Vec<String>,

        /// Structured data as a JSON object
        #[arg(short, long)]
        data: Option<String>,

        /// Source identifier
        #[arg(short, long)]
        source: Option<String>,
    },
    /// Send log entries from a JSON file containing an array of logs
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },
}

/// Handle log commands
///
/// # Arguments
/// * `command` - The log command to execute
/// * `config` - The CLI configuration
pub async fn handle_log_command(command: LogCommands, config: &Config) -> Result<()> {
    match command {
        LogCommands::List {
            group,
            tags,
            level,
            since,
            until,
            source,
            limit,
            json,
        } => {
            let query = LogQuery {
                group,
                tags: (!tags.is_empty()).then_some(tags),
                level,
                since,
                until,
                source,
                limit,
            };
            list_logs(config, &query, json).await
        }
        LogCommands::Get { id, json } => get_log(config, &id, json).await,
        LogCommands::Post {
            message,
            level,
            group,
            tags,
            data,
            source,
        } => {
            let log = NewLog {
                message,
                level,
                group,
                tags,
                data: data.as_deref().map(parse_data).transpose()?,
                source,
            };
            post_log(config, &log).await
        }
        LogCommands::Import { file } => import_logs(config, &file).await,
    }
}

/// List logs matching a query
async fn list_logs(config: &Config, query: &LogQuery, json: bool) -> Result<()> {
    let key = config.require_api_key()?;
    let logs = config.client().list_logs(key, query).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&logs)?);
        return Ok(());
    }

    if logs.is_empty() {
        println!("{}", "No logs found.".yellow());
    } else {
        println!("{}", format!("Found {} log(s):", logs.len()).bold());
        println!("{}", "─".repeat(80).dimmed());
        for log in &logs {
            print_log_line(log);
        }
        println!("{}", "─".repeat(80).dimmed());
    }

    Ok(())
}

/// Get and display a single log
async fn get_log(config: &Config, id: &str, json: bool) -> Result<()> {
    let key = config.require_api_key()?;
    let log = config.client().get_log(key, id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&log)?);
    } else {
        print_log_details(&log);
    }

    Ok(())
}

/// Send a single log
async fn post_log(config: &Config, log: &NewLog) -> Result<()> {
    let key = config.require_api_key()?;
    let stored = config.client().create_log(key, log).await?;

    tracing::debug!("Stored log {}", stored.id);
    println!("{} Stored log {}", "✓".green(), stored.id.cyan());

    Ok(())
}

/// Send logs from a file in one batch
async fn import_logs(config: &Config, file: &Path) -> Result<()> {
    let key = config.require_api_key()?;

    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let logs: Vec<NewLog> = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a JSON array of logs", file.display()))?;

    if logs.is_empty() {
        println!("{}", "No logs in file, nothing sent.".yellow());
        return Ok(());
    }

    let result = config.client().create_logs(key, &logs).await?;
    println!(
        "{} Ingested {} log(s) from {}",
        "✓".green(),
        result.ingested,
        file.display()
    );

    Ok(())
}

/// Parse `--data` into a JSON object
fn parse_data(raw: &str) -> Result<serde_json::Map<String, serde_json::Value>> {
    match serde_json::from_str::<serde_json::Value>(raw).context("--data is not valid JSON")? {
        serde_json::Value::Object(map) => Ok(map),
        _ => bail!("--data must be a JSON object"),
    }
}

/// Print a log as one line
fn print_log_line(log: &StoredLog) {
    let group = log
        .group
        .as_deref()
        .map(|g| format!(" ({})", g))
        .unwrap_or_default();

    println!(
        "{} [{}] {}{}",
        format_timestamp(log).dimmed(),
        colorize_level(log.level),
        log.message,
        group.dimmed()
    );
}

/// Print detailed log information
fn print_log_details(log: &StoredLog) {
    println!("{}", "Log Details:".bold());
    println!("  ID:        {}", log.id.cyan());
    println!("  Level:     {}", colorize_level(log.level));
    println!("  Message:   {}", log.message);
    println!("  Timestamp: {}", format_timestamp(log));

    if let Some(group) = &log.group {
        println!("  Group:     {}", group);
    }
    if let Some(source) = &log.source {
        println!("  Source:    {}", source);
    }
    if !log.tags.is_empty() {
        println!("  Tags:      {}", log.tags.join(", "));
    }

    if let Some(data) = &log.data {
        println!("\n{}", "Data:".bold());
        for (key, value) in data {
            println!("  {} = {}", key.cyan(), value);
        }
    }
}

/// Format a log's timestamp for display, falling back to the raw value
fn format_timestamp(log: &StoredLog) -> String {
    log.parsed_timestamp()
        .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| log.timestamp.clone())
}

/// Colorize a log level for display
pub fn colorize_level(level: LogLevel) -> ColoredString {
    let level_str = level.as_str().to_uppercase();
    match level {
        LogLevel::Debug => level_str.dimmed(),
        LogLevel::Info => level_str.cyan(),
        LogLevel::Warning => level_str.yellow(),
        LogLevel::Error => level_str.red(),
        LogLevel::Critical => level_str.red().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_data_object() {
        let data = parse_data(r#"{"temperature": 8.5, "door": "open"}"#).unwrap();
        assert_eq!(data["temperature"], 8.5);
        assert_eq!(data["door"], "open");
    }

    #[test]
    fn test_parse_data_rejects_non_objects() {
        assert!(parse_data("[1, 2]").is_err());
        assert!(parse_data("8.5").is_err());
        assert!(parse_data("{not json").is_err());
    }

    #[test]
    fn test_format_timestamp() {
        let mut log = StoredLog {
            id: "log_1".to_string(),
            message: "m".to_string(),
            level: LogLevel::Info,
            group: None,
            tags: vec![],
            data: None,
            timestamp: "2025-11-12T20:15:30.123Z".to_string(),
            source: None,
        };
        assert_eq!(format_timestamp(&log), "2025-11-12 20:15:30");

        log.timestamp = "sometime".to_string();
        assert_eq!(format_timestamp(&log), "sometime");
    }
}
