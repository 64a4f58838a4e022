//! Route definitions for incidents.
//!
//! Mounted at `/incidents` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::incidents;
use crate::state::AppState;

/// ```text
/// GET    /           -> list_incidents
/// POST   /           -> create_incident
/// GET    /{id}       -> get_incident
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(incidents::list_incidents).post(incidents::create_incident),
        )
        .route("/{id}", get(incidents::get_incident))
}
