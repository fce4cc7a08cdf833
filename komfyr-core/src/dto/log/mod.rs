//! Log DTOs: ingest payloads, query filters and write results

use serde::{Deserialize, Serialize};

use crate::domain::log::{LogLevel, StoredLog};

/// A log entry to ingest
///
/// The service assigns `id` and `timestamp`; neither exists on this type, so
/// neither can ever be sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewLog {
    pub message: String,

    #[serde(default)]
    pub level: LogLevel,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Map<String, serde_json::Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl NewLog {
    /// Create an `info` entry with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_data(mut self, data: serde_json::Map<String, serde_json::Value>) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Filters for listing logs
///
/// Every field is optional; `None` means no filter on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogQuery {
    /// Exact group, or a prefix ending in `*`
    pub group: Option<String>,
    /// Match logs carrying any of these tags
    pub tags: Option<Vec<String>>,
    /// Minimum severity
    pub level: Option<LogLevel>,
    /// ISO-8601 lower bound
    pub since: Option<String>,
    /// ISO-8601 upper bound
    pub until: Option<String>,
    pub source: Option<String>,
    /// Maximum number of logs (the service caps this at 1000)
    pub limit: Option<u32>,
}

impl LogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self
    }

    pub fn until(mut self, until: impl Into<String>) -> Self {
        self.until = Some(until.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query-string parameters for this filter, in a stable order
    ///
    /// Absent and empty values are skipped (empty strings, an empty tag list,
    /// a zero limit). Tags are joined with commas.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        push_non_empty(&mut pairs, "group", self.group.as_deref());
        if let Some(tags) = self.tags.as_ref().filter(|tags| !tags.is_empty()) {
            pairs.push(("tags", tags.join(",")));
        }
        if let Some(level) = self.level {
            pairs.push(("level", level.to_string()));
        }
        push_non_empty(&mut pairs, "since", self.since.as_deref());
        push_non_empty(&mut pairs, "until", self.until.as_deref());
        push_non_empty(&mut pairs, "source", self.source.as_deref());
        if let Some(limit) = self.limit.filter(|limit| *limit > 0) {
            pairs.push(("limit", limit.to_string()));
        }

        pairs
    }
}

fn push_non_empty(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        pairs.push((key, value.to_string()));
    }
}

/// Result of a batch ingest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchIngest {
    pub ingested: u64,
    pub logs: Vec<StoredLog>,
}

/// Result of a purge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurgeResult {
    /// Number of log entries deleted
    pub purged: u64,

    pub scope: PurgeScope,

    /// The group pattern that was purged, for group-scoped purges
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Index keys removed, for full purges
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexes_cleared: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurgeScope {
    Group,
    All,
}
