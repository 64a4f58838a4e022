//! Handlers for incidents.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;
use watchpost_core::error::CoreError;
use watchpost_db::models::incident::CreateIncident;
use watchpost_db::repositories::IncidentRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{json_body, parse_id};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /incidents
// ---------------------------------------------------------------------------

pub async fn list_incidents(State(state): State<AppState>) -> impl IntoResponse {
    Json(IncidentRepo::list(&state.store).await)
}

// ---------------------------------------------------------------------------
// GET /incidents/:id
// ---------------------------------------------------------------------------

pub async fn get_incident(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id).ok_or(AppError::NotFound("Incident"))?;
    let incident = IncidentRepo::find_by_id(&state.store, id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Incident",
            id,
        }))?;

    Ok(Json(incident))
}

// ---------------------------------------------------------------------------
// POST /incidents
// ---------------------------------------------------------------------------

pub async fn create_incident(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = CreateIncident::validate(&json_body(payload)?)?;
    let incident = IncidentRepo::create(&state.store, input).await;

    tracing::info!(
        incident_id = incident.id,
        priority = ?incident.priority,
        "Incident opened",
    );

    Ok((StatusCode::CREATED, Json(incident)))
}
