//! Repository for the alerts table.

use chrono::Utc;
use watchpost_core::error::CoreError;
use watchpost_core::types::DbId;

use crate::models::alert::{Alert, AlertPatch, CreateAlert};
use crate::repositories::newest_first;
use crate::Store;

/// Provides list, create, and partial update for alerts. Alerts are never
/// deleted.
pub struct AlertRepo;

impl AlertRepo {
    /// List all alerts, newest first.
    pub async fn list(store: &Store) -> Vec<Alert> {
        let mut alerts = store.alerts.read().await.rows().to_vec();
        newest_first(&mut alerts, |a| (a.timestamp, a.id));
        alerts
    }

    /// Create a new alert, returning the stored record.
    ///
    /// The timestamp is always assigned here, never taken from the caller.
    pub async fn create(store: &Store, input: CreateAlert) -> Alert {
        let mut table = store.alerts.write().await;
        let alert = Alert {
            id: table.allocate_id(),
            title: input.title,
            description: input.description,
            severity: input.severity,
            status: input.status.unwrap_or_default(),
            location: input.location,
            timestamp: Utc::now(),
            metadata: input.metadata.unwrap_or_default(),
        };
        table.push(alert.clone());
        alert
    }

    /// Merge `patch` over the alert with the given id and return the result.
    pub async fn update(store: &Store, id: DbId, patch: AlertPatch) -> Result<Alert, CoreError> {
        let mut table = store.alerts.write().await;
        let alert = table
            .rows_mut()
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(CoreError::NotFound {
                entity: "Alert",
                id,
            })?;
        patch.apply(alert);
        Ok(alert.clone())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Duration;
    use watchpost_core::alert::{AlertStatus, Severity};

    use super::*;
    use crate::models::alert::AlertMetadata;

    fn input(title: &str) -> CreateAlert {
        CreateAlert {
            title: title.into(),
            description: "Motion detected".into(),
            severity: Severity::High,
            status: None,
            location: "Zone A".into(),
            metadata: None,
        }
    }

    #[tokio::test]
    async fn create_applies_defaults() {
        let store = Store::new();
        let before = Utc::now();
        let alert = AlertRepo::create(&store, input("Perimeter Breach")).await;

        assert_eq!(alert.id, 1);
        assert_eq!(alert.status, AlertStatus::Active);
        assert_eq!(alert.metadata, AlertMetadata::default());
        assert!(alert.timestamp >= before);
    }

    #[tokio::test]
    async fn create_keeps_supplied_status() {
        let store = Store::new();
        let mut req = input("Connection Lost");
        req.status = Some(AlertStatus::Resolved);
        let alert = AlertRepo::create(&store, req).await;
        assert_eq!(alert.status, AlertStatus::Resolved);
    }

    #[tokio::test]
    async fn ids_increase_per_table() {
        let store = Store::new();
        let a = AlertRepo::create(&store, input("a")).await;
        let b = AlertRepo::create(&store, input("b")).await;
        assert_eq!((a.id, b.id), (1, 2));
    }

    #[tokio::test]
    async fn list_is_newest_first_regardless_of_insertion_order() {
        let store = Store::new();
        AlertRepo::create(&store, input("first")).await;
        AlertRepo::create(&store, input("second")).await;
        AlertRepo::create(&store, input("third")).await;

        // Backdate the newest insert so insertion order and time order differ.
        {
            let mut table = store.alerts.write().await;
            let third = table.rows_mut().iter_mut().find(|a| a.id == 3).unwrap();
            third.timestamp -= Duration::hours(1);
        }

        let titles: Vec<_> = AlertRepo::list(&store)
            .await
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, ["second", "first", "third"]);
    }

    #[tokio::test]
    async fn list_twice_is_identical() {
        let store = Store::new();
        AlertRepo::create(&store, input("a")).await;
        AlertRepo::create(&store, input("b")).await;
        assert_eq!(AlertRepo::list(&store).await, AlertRepo::list(&store).await);
    }

    #[tokio::test]
    async fn update_merges_only_supplied_fields() {
        let store = Store::new();
        let created = AlertRepo::create(&store, input("Perimeter Breach")).await;

        let patch = AlertPatch {
            status: Some(AlertStatus::Resolved),
            ..AlertPatch::default()
        };
        let updated = AlertRepo::update(&store, created.id, patch).await.unwrap();

        assert_eq!(updated.status, AlertStatus::Resolved);
        assert_eq!(updated.title, "Perimeter Breach");
        assert_eq!(updated.timestamp, created.timestamp);
        assert_eq!(AlertRepo::list(&store).await, vec![updated]);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = Store::new();
        let err = AlertRepo::update(&store, 99, AlertPatch::default())
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Alert", id: 99 });
    }
}
