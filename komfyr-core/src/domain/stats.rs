//! Usage statistics

use serde::{Deserialize, Serialize};

/// Storage statistics reported by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of logs currently stored
    pub total_logs: u64,

    /// Storage backend identifier (e.g. "redis")
    pub storage: String,

    /// How long logs are kept before they expire
    pub retention_hours: u64,
}
