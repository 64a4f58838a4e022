//! In-memory storage for alerts, devices, incidents, and audit logs.
//!
//! A [`Store`] owns four independent tables. It is created once at startup
//! and shared behind an `Arc`; nothing is persisted, so every restart
//! begins empty (see [`seed::seed_if_empty`]).

use serde::Serialize;
use tokio::sync::RwLock;
use watchpost_core::types::DbId;

use crate::models::alert::Alert;
use crate::models::device::Device;
use crate::models::incident::Incident;
use crate::models::log_entry::LogEntry;

pub mod models;
pub mod repositories;
pub mod seed;

/// Rows of one entity type plus the counter for the next identifier.
///
/// Identifiers start at 1 and are never reused within a process lifetime.
#[derive(Debug)]
pub struct Table<T> {
    rows: Vec<T>,
    next_id: DbId,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    /// Reserve the next identifier.
    pub(crate) fn allocate_id(&mut self) -> DbId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn rows(&self) -> &[T] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [T] {
        &mut self.rows
    }

    pub(crate) fn push(&mut self, row: T) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The process-wide data store.
///
/// Each table sits behind its own `RwLock`, and every repository operation
/// takes the lock once for its whole find-then-mutate sequence, so a single
/// operation is never interleaved with another on the same table.
#[derive(Debug)]
pub struct Store {
    pub(crate) alerts: RwLock<Table<Alert>>,
    pub(crate) devices: RwLock<Table<Device>>,
    pub(crate) incidents: RwLock<Table<Incident>>,
    pub(crate) logs: RwLock<Table<LogEntry>>,
}

/// Row counts per table, reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub alerts: usize,
    pub devices: usize,
    pub incidents: usize,
    pub logs: usize,
}

impl Store {
    /// Allocate an empty store.
    pub fn new() -> Self {
        Self {
            alerts: RwLock::new(Table::new()),
            devices: RwLock::new(Table::new()),
            incidents: RwLock::new(Table::new()),
            logs: RwLock::new(Table::new()),
        }
    }

    pub async fn counts(&self) -> TableCounts {
        TableCounts {
            alerts: self.alerts.read().await.len(),
            devices: self.devices.read().await.len(),
            incidents: self.incidents.read().await.len(),
            logs: self.logs.read().await.len(),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
