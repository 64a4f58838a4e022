//! Device entity model and create DTO.

use serde::Serialize;
use serde_json::Value;
use validator::{ValidateIp, ValidateUrl};
use watchpost_core::device::{validate_battery, DeviceStatus, DeviceType};
use watchpost_core::error::CoreError;
use watchpost_core::schema::{as_object, nullable_integer, nullable_string, required_enum, required_string};
use watchpost_core::types::{DbId, Timestamp};

/// A tracked physical asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub status: DeviceStatus,
    pub location: String,
    pub last_ping: Timestamp,
    /// Percentage; `None` for wired devices.
    pub battery: Option<i32>,
    pub ip_address: Option<String>,
    pub video_url: Option<String>,
    pub x: i32,
    pub y: i32,
}

/// DTO for registering a new device.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDevice {
    pub name: String,
    pub device_type: DeviceType,
    pub status: DeviceStatus,
    pub location: String,
    pub battery: Option<i32>,
    pub ip_address: Option<String>,
    pub video_url: Option<String>,
    /// Defaults to the map centre if omitted or null.
    pub x: Option<i32>,
    pub y: Option<i32>,
}

impl CreateDevice {
    /// Parse and validate a request body, reporting the first failing field.
    pub fn validate(input: &Value) -> Result<Self, CoreError> {
        let data = as_object(input)?;

        let name = required_string(data, "name")?;
        let device_type = required_enum(data, "type")?;
        let status = required_enum(data, "status")?;
        let location = required_string(data, "location")?;

        let battery = nullable_integer(data, "battery")?.flatten();
        if let Some(b) = battery {
            validate_battery(b)?;
        }

        let ip_address = nullable_string(data, "ipAddress")?.flatten();
        if let Some(ip) = ip_address.as_deref() {
            if !ip.validate_ip() {
                return Err(CoreError::invalid_field(
                    "ipAddress",
                    format!("Invalid IP address '{ip}'"),
                ));
            }
        }

        let video_url = nullable_string(data, "videoUrl")?.flatten();
        if let Some(url) = video_url.as_deref() {
            if !url.validate_url() {
                return Err(CoreError::invalid_field("videoUrl", "Invalid url"));
            }
        }

        Ok(Self {
            name,
            device_type,
            status,
            location,
            battery,
            ip_address,
            video_url,
            x: nullable_integer(data, "x")?.flatten(),
            y: nullable_integer(data, "y")?.flatten(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn failing_field(err: CoreError) -> Option<String> {
        match err {
            CoreError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    fn body() -> Value {
        json!({
            "name": "Cam-09 Roof",
            "type": "camera",
            "status": "online",
            "location": "Roof",
        })
    }

    #[test]
    fn minimal_body_leaves_optionals_empty() {
        let input = CreateDevice::validate(&body()).unwrap();
        assert_eq!(input.device_type, DeviceType::Camera);
        assert_eq!(input.battery, None);
        assert_eq!(input.ip_address, None);
        assert_eq!(input.x, None);
        assert_eq!(input.y, None);
    }

    #[test]
    fn type_field_uses_wire_name() {
        let mut input = body();
        input["type"] = json!("submarine");
        let err = CreateDevice::validate(&input).unwrap_err();
        assert_eq!(failing_field(err).as_deref(), Some("type"));
    }

    #[test]
    fn battery_out_of_range_is_rejected() {
        let mut input = body();
        input["battery"] = json!(140);
        let err = CreateDevice::validate(&input).unwrap_err();
        assert_eq!(failing_field(err).as_deref(), Some("battery"));
    }

    #[test]
    fn null_battery_is_accepted() {
        let mut input = body();
        input["battery"] = Value::Null;
        assert_eq!(CreateDevice::validate(&input).unwrap().battery, None);
    }

    #[test]
    fn malformed_ip_is_rejected() {
        let mut input = body();
        input["ipAddress"] = json!("192.168.1.300");
        let err = CreateDevice::validate(&input).unwrap_err();
        assert_eq!(failing_field(err).as_deref(), Some("ipAddress"));

        input["ipAddress"] = json!("192.168.1.101");
        assert!(CreateDevice::validate(&input).is_ok());
    }

    #[test]
    fn malformed_video_url_is_rejected() {
        let mut input = body();
        input["videoUrl"] = json!("not a url");
        let err = CreateDevice::validate(&input).unwrap_err();
        assert_eq!(failing_field(err).as_deref(), Some("videoUrl"));
    }

    #[test]
    fn coordinates_are_read_when_present() {
        let mut input = body();
        input["x"] = json!(1200);
        input["y"] = json!(3400);
        let input = CreateDevice::validate(&input).unwrap();
        assert_eq!((input.x, input.y), (Some(1200), Some(3400)));
    }
}
