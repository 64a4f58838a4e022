//! Fixture data inserted when the store starts empty.
//!
//! Emptiness is judged by the device table alone. Because nothing is
//! persisted, every fresh process is empty and gets the same fixtures.

use watchpost_core::alert::{AlertStatus, Severity};
use watchpost_core::device::{DeviceStatus, DeviceType};
use watchpost_core::log_level::LogLevel;

use crate::models::alert::CreateAlert;
use crate::models::device::CreateDevice;
use crate::models::log_entry::CreateLog;
use crate::repositories::{AlertRepo, DeviceRepo, LogRepo};
use crate::Store;

const SAMPLE_VIDEO_BASE: &str = "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample";

fn device(
    name: &str,
    device_type: DeviceType,
    status: DeviceStatus,
    location: &str,
    ip_address: &str,
    battery: Option<i32>,
    video: Option<&str>,
) -> CreateDevice {
    CreateDevice {
        name: name.into(),
        device_type,
        status,
        location: location.into(),
        battery,
        ip_address: Some(ip_address.into()),
        video_url: video.map(|file| format!("{SAMPLE_VIDEO_BASE}/{file}")),
        x: None,
        y: None,
    }
}

fn alert(
    title: &str,
    description: &str,
    severity: Severity,
    status: AlertStatus,
    location: &str,
) -> CreateAlert {
    CreateAlert {
        title: title.into(),
        description: description.into(),
        severity,
        status: Some(status),
        location: location.into(),
        metadata: None,
    }
}

fn log(level: LogLevel, action: &str, user: &str, details: &str) -> CreateLog {
    CreateLog {
        level,
        action: action.into(),
        user: user.into(),
        details: Some(details.into()),
    }
}

#[rustfmt::skip]
pub fn fixture_devices() -> Vec<CreateDevice> {
    use DeviceStatus::{Online, Warning};
    use DeviceType::{Camera, Drone, Sensor};

    vec![
        device("Cam-01 Main Gate", Camera, Online, "Zone A", "192.168.1.101", None, Some("VolkswagenGTIReview.mp4")),
        device("Cam-02 Loading Dock", Camera, Online, "Zone B", "192.168.1.102", None, Some("TearsOfSteel.mp4")),
        device("Drone-Alpha", Drone, Warning, "Perimeter", "192.168.1.201", Some(34), Some("ElephantsDream.mp4")),
        device("Sensor-Perimeter-N", Sensor, Online, "North Wall", "192.168.1.55", Some(88), None),
    ]
}

#[rustfmt::skip]
pub fn fixture_alerts() -> Vec<CreateAlert> {
    vec![
        alert("Perimeter Breach", "Motion detected in Zone A (North)", Severity::Critical, AlertStatus::Active, "Zone A"),
        alert("Drone Battery Low", "Drone-Alpha battery below 35%", Severity::Medium, AlertStatus::Active, "Perimeter"),
        alert("Connection Lost", "Cam-04 signal lost for >10s", Severity::High, AlertStatus::Resolved, "Zone C"),
    ]
}

pub fn fixture_logs() -> Vec<CreateLog> {
    vec![
        log(LogLevel::Info, "System Startup", "SYSTEM", "Initialization complete"),
        log(LogLevel::Warning, "Auth Failed", "unknown", "Failed login attempt from 10.0.0.5"),
    ]
}

/// Insert the fixtures if the device table is empty. Returns whether
/// anything was inserted.
pub async fn seed_if_empty(store: &Store) -> bool {
    if !DeviceRepo::is_empty(store).await {
        tracing::debug!("Store already populated, skipping seed");
        return false;
    }

    for input in fixture_devices() {
        DeviceRepo::create(store, input).await;
    }
    for input in fixture_alerts() {
        AlertRepo::create(store, input).await;
    }
    for input in fixture_logs() {
        LogRepo::create(store, input).await;
    }

    let counts = store.counts().await;
    tracing::info!(
        devices = counts.devices,
        alerts = counts.alerts,
        logs = counts.logs,
        "Seeded empty store with fixture data",
    );
    true
}
