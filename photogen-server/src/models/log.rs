//! Log transfer objects

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::Log;

/// Severity stored in `logs.level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Create log request
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogCreate {
    pub level: LogLevel,
    pub message: String,
    #[serde(default)]
    pub generation_id: Option<i32>,
}

/// Log response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogOut {
    pub id: i32,
    pub generation_id: Option<i32>,
    pub level: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<Log> for LogOut {
    fn from(l: Log) -> Self {
        Self {
            id: l.id,
            generation_id: l.generation_id,
            level: l.level,
            message: l.message,
            created_at: l.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_round_trips_lowercase() {
        let raw = r#"{"level": "warning", "message": "m"}"#;
        let log: LogCreate = serde_json::from_str(raw).unwrap();
        assert_eq!(log.level, LogLevel::Warning);
        assert_eq!(log.generation_id, None);
        assert_eq!(log.level.to_string(), "warning");
    }

    #[test]
    fn log_out_keeps_stored_fields() {
        let log = Log {
            id: 7,
            generation_id: Some(3),
            level: "error".into(),
            message: "completion failed".into(),
            created_at: Utc::now(),
        };
        let created_at = log.created_at;

        let out = LogOut::from(log);
        assert_eq!(out.id, 7);
        assert_eq!(out.generation_id, Some(3));
        assert_eq!(out.level, "error");
        assert_eq!(out.message, "completion failed");
        assert_eq!(out.created_at, created_at);

        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["generation_id"], 3);
        assert_eq!(json["level"], "error");
    }
}
