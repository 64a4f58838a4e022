//! Repository for the append-only audit log.

use chrono::Utc;

use crate::models::log_entry::{CreateLog, LogEntry};
use crate::repositories::newest_first;
use crate::Store;

pub struct LogRepo;

impl LogRepo {
    /// List all entries, newest first.
    pub async fn list(store: &Store) -> Vec<LogEntry> {
        let mut logs = store.logs.read().await.rows().to_vec();
        newest_first(&mut logs, |l| (l.timestamp, l.id));
        logs
    }

    pub async fn create(store: &Store, input: CreateLog) -> LogEntry {
        let mut table = store.logs.write().await;
        let entry = LogEntry {
            id: table.allocate_id(),
            timestamp: Utc::now(),
            level: input.level,
            action: input.action,
            user: input.user,
            details: input.details,
        };
        table.push(entry.clone());
        entry
    }
}
