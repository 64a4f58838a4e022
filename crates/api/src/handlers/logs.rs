//! Handlers for the audit log.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;
use watchpost_db::models::log_entry::CreateLog;
use watchpost_db::repositories::LogRepo;

use crate::error::AppResult;
use crate::handlers::json_body;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /logs
// ---------------------------------------------------------------------------

pub async fn list_logs(State(state): State<AppState>) -> impl IntoResponse {
    Json(LogRepo::list(&state.store).await)
}

// ---------------------------------------------------------------------------
// POST /logs
// ---------------------------------------------------------------------------

/// Append an entry. Entries are never edited or removed.
pub async fn create_log(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = CreateLog::validate(&json_body(payload)?)?;
    let entry = LogRepo::create(&state.store, input).await;

    tracing::debug!(log_id = entry.id, action = %entry.action, "Log entry appended");

    Ok((StatusCode::CREATED, Json(entry)))
}
