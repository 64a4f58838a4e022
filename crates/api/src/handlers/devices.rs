//! Handlers for devices.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;
use watchpost_core::error::CoreError;
use watchpost_db::models::device::CreateDevice;
use watchpost_db::repositories::DeviceRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{json_body, parse_id};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /devices
// ---------------------------------------------------------------------------

/// List all devices in registration order.
pub async fn list_devices(State(state): State<AppState>) -> impl IntoResponse {
    Json(DeviceRepo::list(&state.store).await)
}

// ---------------------------------------------------------------------------
// GET /devices/:id
// ---------------------------------------------------------------------------

/// Get a single device. A non-numeric id cannot match anything, so it is
/// reported as not found rather than as a bad request.
pub async fn get_device(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&raw_id).ok_or(AppError::NotFound("Device"))?;
    let device = DeviceRepo::find_by_id(&state.store, id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Device",
            id,
        }))?;

    Ok(Json(device))
}

// ---------------------------------------------------------------------------
// POST /devices
// ---------------------------------------------------------------------------

pub async fn create_device(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = CreateDevice::validate(&json_body(payload)?)?;
    let device = DeviceRepo::create(&state.store, input).await;

    tracing::info!(
        device_id = device.id,
        name = %device.name,
        device_type = ?device.device_type,
        "Device registered",
    );

    Ok((StatusCode::CREATED, Json(device)))
}
