//! Configuration module
//!
//! Handles CLI configuration: where the API lives and which key to use.

use anyhow::{Result, bail};
use komfyr_client::KomfyrClient;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Komfyrvakt API, including `/api`
    pub api_url: String,
    /// API key sent as a bearer token
    pub api_key: Option<String>,
}

impl Config {
    /// Build a client for the configured API
    pub fn client(&self) -> KomfyrClient {
        KomfyrClient::new(&self.api_url)
    }

    /// The API key, or an error explaining how to provide one
    pub fn require_api_key(&self) -> Result<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => bail!("No API key configured. Pass --api-key or set KOMFYRVAKT_API_KEY."),
        }
    }

    /// The trimmed API key, or an empty string for endpoints that ignore it
    pub fn api_key_or_empty(&self) -> &str {
        self.api_key.as_deref().map(str::trim).unwrap_or_default()
    }
}
