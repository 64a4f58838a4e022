//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&Store` as the first argument. List methods return owned
//! snapshots so no lock is held once a method returns.

pub mod alert_repo;
pub mod device_repo;
pub mod incident_repo;
pub mod log_repo;

pub use alert_repo::AlertRepo;
pub use device_repo::DeviceRepo;
pub use incident_repo::IncidentRepo;
pub use log_repo::LogRepo;

use std::cmp::Reverse;

use watchpost_core::types::{DbId, Timestamp};

/// Sort rows newest-first by `key`. Rows created in the same instant are
/// ordered by descending id, so the most recently inserted comes first.
pub(crate) fn newest_first<T>(rows: &mut [T], key: impl Fn(&T) -> (Timestamp, DbId)) {
    rows.sort_by_key(|row| Reverse(key(row)));
}
