//! Incident entity model and create DTO.

use serde::Serialize;
use serde_json::Value;
use watchpost_core::error::CoreError;
use watchpost_core::incident::{IncidentStatus, Priority};
use watchpost_core::schema::{as_object, optional_enum, required_enum, required_string};
use watchpost_core::types::{DbId, Timestamp};

/// A case that may group several related alerts. The grouping is not
/// recorded; incidents stand alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: DbId,
    pub title: String,
    pub summary: String,
    pub status: IncidentStatus,
    pub priority: Priority,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for opening a new incident.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateIncident {
    pub title: String,
    pub summary: String,
    /// Defaults to `open` if omitted.
    pub status: Option<IncidentStatus>,
    pub priority: Priority,
}

impl CreateIncident {
    pub fn validate(input: &Value) -> Result<Self, CoreError> {
        let data = as_object(input)?;
        Ok(Self {
            title: required_string(data, "title")?,
            summary: required_string(data, "summary")?,
            status: optional_enum(data, "status")?,
            priority: required_enum(data, "priority")?,
        })
    }
}
