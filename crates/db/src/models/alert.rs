//! Alert entity model, create DTO, and partial-update patch.

use serde::Serialize;
use serde_json::{Map, Value};
use watchpost_core::alert::{AlertStatus, Severity};
use watchpost_core::error::CoreError;
use watchpost_core::schema::{
    as_object, nested, nullable_object, optional_enum, optional_number, optional_string,
    optional_string_array, required_enum, required_string,
};
use watchpost_core::types::{DbId, Timestamp};

/// A detected security event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub status: AlertStatus,
    pub location: String,
    /// Set when the alert is created; never changed by updates.
    pub timestamp: Timestamp,
    pub metadata: AlertMetadata,
}

/// Detector output attached to an alert. Keys other than the known ones
/// are kept as-is in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_objects: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AlertMetadata {
    const KNOWN_KEYS: [&'static str; 3] = ["confidence", "source", "detectedObjects"];

    /// Validate a metadata object. Field paths in errors are relative to
    /// the object; callers prefix them with [`nested`].
    pub fn validate(data: &Map<String, Value>) -> Result<Self, CoreError> {
        let confidence = optional_number(data, "confidence")?;
        let source = optional_string(data, "source")?;
        let detected_objects = optional_string_array(data, "detectedObjects")?;
        let extra = data
            .iter()
            .filter(|(k, _)| !Self::KNOWN_KEYS.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Self {
            confidence,
            source,
            detected_objects,
            extra,
        })
    }
}

/// Read the `metadata` field: `None` when absent, `Some(None)` for `null`.
fn read_metadata(data: &Map<String, Value>) -> Result<Option<Option<AlertMetadata>>, CoreError> {
    match nullable_object(data, "metadata")? {
        None => Ok(None),
        Some(None) => Ok(Some(None)),
        Some(Some(map)) => AlertMetadata::validate(map)
            .map(|m| Some(Some(m)))
            .map_err(|e| nested("metadata", e)),
    }
}

/// DTO for creating a new alert.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAlert {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    /// Defaults to `active` if omitted.
    pub status: Option<AlertStatus>,
    pub location: String,
    /// Defaults to an empty object if omitted or null.
    pub metadata: Option<AlertMetadata>,
}

impl CreateAlert {
    /// Parse and validate a request body, reporting the first failing field.
    pub fn validate(input: &Value) -> Result<Self, CoreError> {
        let data = as_object(input)?;
        Ok(Self {
            title: required_string(data, "title")?,
            description: required_string(data, "description")?,
            severity: required_enum(data, "severity")?,
            status: optional_enum(data, "status")?,
            location: required_string(data, "location")?,
            metadata: read_metadata(data)?.flatten(),
        })
    }
}

/// A partial alert update. Every creatable field may be replaced; `id` and
/// `timestamp` cannot be.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub severity: Option<Severity>,
    pub status: Option<AlertStatus>,
    pub location: Option<String>,
    /// An explicit `null` in the request resets metadata to `{}`.
    pub metadata: Option<AlertMetadata>,
}

impl AlertPatch {
    /// Parse and validate a partial update body. Absent fields stay `None`.
    pub fn validate(input: &Value) -> Result<Self, CoreError> {
        let data = as_object(input)?;
        Ok(Self {
            title: optional_string(data, "title")?,
            description: optional_string(data, "description")?,
            severity: optional_enum(data, "severity")?,
            status: optional_enum(data, "status")?,
            location: optional_string(data, "location")?,
            metadata: read_metadata(data)?.map(Option::unwrap_or_default),
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow merge: each present field overwrites the alert's value.
    pub fn apply(self, alert: &mut Alert) {
        if let Some(title) = self.title {
            alert.title = title;
        }
        if let Some(description) = self.description {
            alert.description = description;
        }
        if let Some(severity) = self.severity {
            alert.severity = severity;
        }
        if let Some(status) = self.status {
            alert.status = status;
        }
        if let Some(location) = self.location {
            alert.location = location;
        }
        if let Some(metadata) = self.metadata {
            alert.metadata = metadata;
        }
    }
}
