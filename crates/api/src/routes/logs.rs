//! Route definitions for the audit log.
//!
//! Mounted at `/logs` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::logs;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(logs::list_logs).post(logs::create_log))
}
