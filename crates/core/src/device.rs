//! Device kinds, connectivity states, and placement defaults.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::schema::EnumValue;

/// Map coordinate assigned when a device is registered without a position.
/// The tactical map is 5000x5000, so this is its centre.
pub const DEFAULT_MAP_X: i32 = 2500;
pub const DEFAULT_MAP_Y: i32 = 2500;

pub const BATTERY_MIN: i32 = 0;
pub const BATTERY_MAX: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Camera,
    Drone,
    Sensor,
    Server,
}

impl EnumValue for DeviceType {
    const ALL: &'static [Self] = &[
        DeviceType::Camera,
        DeviceType::Drone,
        DeviceType::Sensor,
        DeviceType::Server,
    ];

    fn as_str(self) -> &'static str {
        match self {
            DeviceType::Camera => "camera",
            DeviceType::Drone => "drone",
            DeviceType::Sensor => "sensor",
            DeviceType::Server => "server",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Online,
    Offline,
    Warning,
    Maintenance,
}

impl EnumValue for DeviceStatus {
    const ALL: &'static [Self] = &[
        DeviceStatus::Online,
        DeviceStatus::Offline,
        DeviceStatus::Warning,
        DeviceStatus::Maintenance,
    ];

    fn as_str(self) -> &'static str {
        match self {
            DeviceStatus::Online => "online",
            DeviceStatus::Offline => "offline",
            DeviceStatus::Warning => "warning",
            DeviceStatus::Maintenance => "maintenance",
        }
    }
}

/// Validate a battery percentage. Wired devices report no battery at all,
/// so only present values are checked.
pub fn validate_battery(battery: i32) -> Result<(), CoreError> {
    if (BATTERY_MIN..=BATTERY_MAX).contains(&battery) {
        Ok(())
    } else {
        Err(CoreError::invalid_field(
            "battery",
            format!("Battery must be between {BATTERY_MIN} and {BATTERY_MAX}, received {battery}"),
        ))
    }
}
