//! Audit log entity model and create DTO.

use serde::Serialize;
use serde_json::Value;
use watchpost_core::error::CoreError;
use watchpost_core::log_level::LogLevel;
use watchpost_core::schema::{as_object, nullable_string, required_enum, required_string};
use watchpost_core::types::{DbId, Timestamp};

/// An append-only record of a system or operator action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: DbId,
    pub timestamp: Timestamp,
    pub level: LogLevel,
    /// Short label, e.g. "System Startup".
    pub action: String,
    /// Actor name; "SYSTEM" for automated actions.
    pub user: String,
    pub details: Option<String>,
}

/// DTO for appending a log entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateLog {
    pub level: LogLevel,
    pub action: String,
    pub user: String,
    pub details: Option<String>,
}

impl CreateLog {
    pub fn validate(input: &Value) -> Result<Self, CoreError> {
        let data = as_object(input)?;
        Ok(Self {
            level: required_enum(data, "level")?,
            action: required_string(data, "action")?,
            user: required_string(data, "user")?,
            details: nullable_string(data, "details")?.flatten(),
        })
    }
}
