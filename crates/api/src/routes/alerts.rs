//! Route definitions for alerts.
//!
//! Mounted at `/alerts` by `api_routes()`.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::alerts;
use crate::state::AppState;

/// ```text
/// GET    /           -> list_alerts
/// POST   /           -> create_alert
/// PATCH  /{id}       -> update_alert
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(alerts::list_alerts).post(alerts::create_alert))
        .route("/{id}", patch(alerts::update_alert))
}
