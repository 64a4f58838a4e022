//! Handlers for alerts.
//!
//! Creation reports the first invalid field. Updates are stricter about
//! what they reveal: a bad id, a bad body, and an unknown alert all
//! produce the same generic 400.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;
use watchpost_db::models::alert::{AlertPatch, CreateAlert};
use watchpost_db::repositories::AlertRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{json_body, parse_id};
use crate::state::AppState;

/// Message for every failed alert update.
pub const UPDATE_FAILED_MESSAGE: &str = "Invalid input or ID";

// ---------------------------------------------------------------------------
// GET /alerts
// ---------------------------------------------------------------------------

/// List all alerts, newest first.
pub async fn list_alerts(State(state): State<AppState>) -> impl IntoResponse {
    Json(AlertRepo::list(&state.store).await)
}

// ---------------------------------------------------------------------------
// POST /alerts
// ---------------------------------------------------------------------------

pub async fn create_alert(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = CreateAlert::validate(&json_body(payload)?)?;
    let alert = AlertRepo::create(&state.store, input).await;

    tracing::info!(
        alert_id = alert.id,
        severity = ?alert.severity,
        location = %alert.location,
        "Alert raised",
    );

    Ok((StatusCode::CREATED, Json(alert)))
}

// ---------------------------------------------------------------------------
// PATCH /alerts/:id
// ---------------------------------------------------------------------------

/// Apply a partial update. Status transitions are not restricted.
pub async fn update_alert(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let update_failed = || AppError::BadRequest(UPDATE_FAILED_MESSAGE.into());

    let id = parse_id(&raw_id).ok_or_else(update_failed)?;
    let body = json_body(payload).map_err(|_| update_failed())?;
    let patch = AlertPatch::validate(&body).map_err(|e| {
        tracing::debug!(alert_id = id, error = %e, "Rejected alert update");
        update_failed()
    })?;

    let alert = AlertRepo::update(&state.store, id, patch)
        .await
        .map_err(|e| {
            tracing::debug!(alert_id = id, error = %e, "Rejected alert update");
            update_failed()
        })?;

    tracing::info!(alert_id = alert.id, status = ?alert.status, "Alert updated");

    Ok(Json(alert))
}
