//! Incident status and priority vocabularies.

use serde::{Deserialize, Serialize};

use crate::schema::EnumValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    #[default]
    Open,
    Investigating,
    Closed,
}

impl EnumValue for IncidentStatus {
    const ALL: &'static [Self] = &[
        IncidentStatus::Open,
        IncidentStatus::Investigating,
        IncidentStatus::Closed,
    ];

    fn as_str(self) -> &'static str {
        match self {
            IncidentStatus::Open => "open",
            IncidentStatus::Investigating => "investigating",
            IncidentStatus::Closed => "closed",
        }
    }
}

/// Incident priority. Unlike alert severity there is no `info` level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl EnumValue for Priority {
    const ALL: &'static [Self] = &[
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}
