//! Repository for the devices table.

use chrono::Utc;
use watchpost_core::device::{DEFAULT_MAP_X, DEFAULT_MAP_Y};
use watchpost_core::types::DbId;

use crate::models::device::{CreateDevice, Device};
use crate::Store;

/// Provides list, lookup, and create for devices.
pub struct DeviceRepo;

impl DeviceRepo {
    /// List all devices in insertion order.
    pub async fn list(store: &Store) -> Vec<Device> {
        store.devices.read().await.rows().to_vec()
    }

    pub async fn find_by_id(store: &Store, id: DbId) -> Option<Device> {
        store
            .devices
            .read()
            .await
            .rows()
            .iter()
            .find(|d| d.id == id)
            .cloned()
    }

    /// Register a new device. `lastPing` starts at the creation time and
    /// an unplaced device lands at the map centre.
    pub async fn create(store: &Store, input: CreateDevice) -> Device {
        let mut table = store.devices.write().await;
        let device = Device {
            id: table.allocate_id(),
            name: input.name,
            device_type: input.device_type,
            status: input.status,
            location: input.location,
            last_ping: Utc::now(),
            battery: input.battery,
            ip_address: input.ip_address,
            video_url: input.video_url,
            x: input.x.unwrap_or(DEFAULT_MAP_X),
            y: input.y.unwrap_or(DEFAULT_MAP_Y),
        };
        table.push(device.clone());
        device
    }

    pub async fn is_empty(store: &Store) -> bool {
        store.devices.read().await.is_empty()
    }
}
