//! Route definitions for devices.
//!
//! Mounted at `/devices` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::devices;
use crate::state::AppState;

/// ```text
/// GET    /           -> list_devices
/// POST   /           -> create_device
/// GET    /{id}       -> get_device
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(devices::list_devices).post(devices::create_device))
        .route("/{id}", get(devices::get_device))
}
