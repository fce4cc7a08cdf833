//! Service health command

use anyhow::Result;
use colored::*;

use crate::config::Config;

/// Check health and print the service version
pub async fn health(config: &Config) -> Result<()> {
    let client = config.client();
    let key = config.api_key_or_empty();

    let health = client.health(key).await?;
    let status = if health.is_healthy() {
        health.status.green()
    } else {
        health.status.red()
    };
    println!("{} at {}: {}", health.service.bold(), client.base_url(), status);

    match client.service_info(key).await {
        Ok(info) => {
            println!("  Version: {}", info.version);
            if !info.description.is_empty() {
                println!("  {}", info.description.dimmed());
            }
        }
        Err(e) => tracing::warn!("Could not fetch service info: {}", e),
    }

    Ok(())
}
