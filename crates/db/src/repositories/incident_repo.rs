//! Repository for the incidents table.

use chrono::Utc;
use watchpost_core::types::DbId;

use crate::models::incident::{CreateIncident, Incident};
use crate::repositories::newest_first;
use crate::Store;

pub struct IncidentRepo;

impl IncidentRepo {
    /// List all incidents, most recently created first.
    pub async fn list(store: &Store) -> Vec<Incident> {
        let mut incidents = store.incidents.read().await.rows().to_vec();
        newest_first(&mut incidents, |i| (i.created_at, i.id));
        incidents
    }

    pub async fn find_by_id(store: &Store, id: DbId) -> Option<Incident> {
        store
            .incidents
            .read()
            .await
            .rows()
            .iter()
            .find(|i| i.id == id)
            .cloned()
    }

    /// Open a new incident. `createdAt` and `updatedAt` start out equal.
    pub async fn create(store: &Store, input: CreateIncident) -> Incident {
        let mut table = store.incidents.write().await;
        let now = Utc::now();
        let incident = Incident {
            id: table.allocate_id(),
            title: input.title,
            summary: input.summary,
            status: input.status.unwrap_or_default(),
            priority: input.priority,
            created_at: now,
            updated_at: now,
        };
        table.push(incident.clone());
        incident
    }
}
