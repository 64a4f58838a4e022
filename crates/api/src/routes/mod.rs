pub mod alerts;
pub mod devices;
pub mod health;
pub mod incidents;
pub mod logs;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /alerts                 list, create
/// /alerts/{id}            partial update (PATCH)
///
/// /devices                list, create
/// /devices/{id}           get
///
/// /incidents              list, create
/// /incidents/{id}         get
///
/// /logs                   list, append
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/alerts", alerts::router())
        .nest("/devices", devices::router())
        .nest("/incidents", incidents::router())
        .nest("/logs", logs::router())
}
