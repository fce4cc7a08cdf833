//! Storage command handlers
//!
//! Statistics, group listing and purging.

use anyhow::{Result, bail};
use colored::*;
use komfyr_core::dto::log::{PurgeResult, PurgeScope};

use crate::config::Config;

/// Show storage statistics
pub async fn show_stats(config: &Config) -> Result<()> {
    let key = config.require_api_key()?;
    let stats = config.client().stats(key).await?;

    println!("{}", "Storage Statistics:".bold());
    println!("  Total logs: {}", stats.total_logs.to_string().cyan());
    println!("  Storage:    {}", stats.storage);
    println!("  Retention:  {}h", stats.retention_hours);

    Ok(())
}

/// List all groups
pub async fn list_groups(config: &Config) -> Result<()> {
    let key = config.require_api_key()?;
    let groups = config.client().list_groups(key).await?;

    if groups.is_empty() {
        println!("{}", "No groups found.".yellow());
    } else {
        println!("{}", format!("Found {} group(s):", groups.len()).bold());
        for group in groups {
            println!("  {} {}", "▸".cyan(), group);
        }
    }

    Ok(())
}

/// Purge one group, or everything when confirmed
pub async fn purge(config: &Config, group: Option<String>, yes: bool) -> Result<()> {
    let key = config.require_api_key()?;

    if group.is_none() && !yes {
        bail!("Refusing to purge ALL logs without --yes (or pass --group to purge one group)");
    }

    tracing::info!("Purging logs (group: {})", group.as_deref().unwrap_or("<all>"));
    let result = config.client().purge_logs(key, group.as_deref()).await?;
    println!("{} {}", "✓".green(), describe_purge(&result));

    Ok(())
}

fn describe_purge(result: &PurgeResult) -> String {
    match (result.scope, result.group.as_deref()) {
        (PurgeScope::Group, Some(group)) => {
            format!("Purged {} log(s) from group {}", result.purged, group)
        }
        (PurgeScope::Group, None) => format!("Purged {} log(s)", result.purged),
        (PurgeScope::All, _) => format!(
            "Purged {} log(s) and {} index key(s)",
            result.purged,
            result.indexes_cleared.unwrap_or(0)
        ),
    }
}
