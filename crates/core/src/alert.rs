//! Alert severity and status vocabularies.
//!
//! Status transitions are not enforced: the update endpoint accepts any
//! [`AlertStatus`] regardless of the current one, so operators can re-open
//! a resolved alert or skip acknowledgement entirely.

use serde::{Deserialize, Serialize};

use crate::schema::EnumValue;

/// How urgently an alert needs operator attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl EnumValue for Severity {
    const ALL: &'static [Self] = &[
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Info,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Info => "info",
        }
    }
}

/// Where an alert sits in the operator workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    /// Initial status for a newly raised alert.
    #[default]
    Active,
    Resolved,
    Acknowledged,
}

impl EnumValue for AlertStatus {
    const ALL: &'static [Self] = &[
        AlertStatus::Active,
        AlertStatus::Resolved,
        AlertStatus::Acknowledged,
    ];

    fn as_str(self) -> &'static str {
        match self {
            AlertStatus::Active => "active",
            AlertStatus::Resolved => "resolved",
            AlertStatus::Acknowledged => "acknowledged",
        }
    }
}
