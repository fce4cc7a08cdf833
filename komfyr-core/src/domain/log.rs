//! Log domain types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A log entry as stored by the service, including its generated ID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredLog {
    /// Service-generated identifier (e.g. `log_20251112201530_abc123`)
    pub id: String,

    pub message: String,

    pub level: LogLevel,

    /// Group identifier (e.g. `restaurant-a:fridge-1`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Tags for filtering; may be empty but is always present
    pub tags: Vec<String>,

    /// Additional structured data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Map<String, serde_json::Value>>,

    /// ISO-8601 creation time, exactly as the service sent it
    pub timestamp: String,

    /// Source identifier (e.g. a sensor ID or service name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl StoredLog {
    /// Parse the timestamp into a UTC datetime
    ///
    /// Accepts both offset-qualified timestamps (`2025-11-12T20:15:30Z`) and the
    /// naive form the service emits for server-generated times, which is UTC.
    /// Returns `None` if the timestamp is in neither form.
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }
}

/// Parse an ISO-8601 timestamp, treating naive values as UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Log severity, ordered from least to most severe
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// All levels in ascending severity
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    /// Wire name of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "invalid log level '{}' (expected one of: debug, info, warning, error, critical)",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_level_wire_names() {
        assert_eq!(serde_json::to_string(&LogLevel::Warning).unwrap(), "\"warning\"");
        let level: LogLevel = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(level, LogLevel::Critical);
        assert!(serde_json::from_str::<LogLevel>("\"fatal\"").is_err());
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Error < LogLevel::Critical);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("ERROR".parse::<LogLevel>(), Ok(LogLevel::Error));
        assert_eq!(" debug ".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_stored_log_requires_tags() {
        let missing_tags = r#"{
            "id": "log_1", "message": "m", "level": "info",
            "timestamp": "2025-11-12T20:15:30Z"
        }"#;
        assert!(serde_json::from_str::<StoredLog>(missing_tags).is_err());

        let empty_tags = r#"{
            "id": "log_1", "message": "m", "level": "info", "tags": [],
            "timestamp": "2025-11-12T20:15:30Z", "group": null
        }"#;
        let log: StoredLog = serde_json::from_str(empty_tags).unwrap();
        assert!(log.tags.is_empty());
        assert!(log.group.is_none());
    }

    #[test]
    fn test_parse_timestamp_forms() {
        let zulu = parse_timestamp("2025-11-12T20:15:30Z").unwrap();
        let naive = parse_timestamp("2025-11-12T20:15:30.123456").unwrap();
        assert_eq!(zulu.hour(), 20);
        assert_eq!(naive.day(), 12);
        assert_eq!(naive.minute(), 15);
        assert!(parse_timestamp("yesterday").is_none());
    }
}
