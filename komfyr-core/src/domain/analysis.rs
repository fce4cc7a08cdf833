//! Analysis domain types
//!
//! An analysis is computed by the service over up to a thousand recent logs:
//! counts per level and tag, per-field summaries of the structured `data`
//! payloads, and a natural-language assessment.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::log::LogLevel;

/// Response of the analyze endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub status: String,

    /// Whether the service answered from its analysis cache
    pub cached: bool,

    pub analysis: Analysis,
}

/// The result of analyzing a group of logs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// When the analysis was produced (ISO-8601)
    pub timestamp: String,

    #[serde(default)]
    pub group: Option<String>,

    pub aggregation: Aggregation,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_series: Option<TimeSeries>,

    pub ai_insights: Insights,

    /// Number of logs the analysis actually covered
    pub analyzed_logs: u64,
}

/// Counts and field summaries over the analyzed logs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    pub total_logs: u64,

    /// Level wire name → count
    #[serde(default)]
    pub level_counts: BTreeMap<String, u64>,

    /// Tag → count
    #[serde(default)]
    pub tag_counts: BTreeMap<String, u64>,

    /// Field name → summary (type, count, min/max/avg, unique values, ...)
    #[serde(default)]
    pub data_fields: BTreeMap<String, serde_json::Value>,
}

impl Aggregation {
    /// Count for a single level, zero when the level never occurred
    pub fn level_count(&self, level: LogLevel) -> u64 {
        self.level_counts.get(level.as_str()).copied().unwrap_or(0)
    }
}

/// Per-interval breakdown of the analyzed logs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    #[serde(default)]
    pub intervals: Vec<Interval>,
    #[serde(default)]
    pub total_intervals: u64,
    #[serde(default)]
    pub fields_tracked: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    #[serde(default)]
    pub timestamp: Option<String>,
    pub log_count: u64,
    #[serde(default)]
    pub levels: BTreeMap<String, u64>,
    #[serde(default)]
    pub data: BTreeMap<String, serde_json::Value>,
}

/// Assessment attached to an analysis
///
/// The service sends plain text when AI analysis is unavailable or there was
/// nothing to analyze, and a structured report otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Insights {
    Text(String),
    Report(InsightReport),
}

impl Insights {
    /// One-line summary suitable for display
    pub fn summary(&self) -> &str {
        match self {
            Insights::Text(text) => text,
            Insights::Report(report) => &report.summary,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    #[serde(default)]
    pub summary: String,
    /// "normal", "warning" or "critical"
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub findings: Vec<Finding>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub severity: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub action: String,
    /// "low", "medium" or "high"
    #[serde(default)]
    pub priority: String,
}
