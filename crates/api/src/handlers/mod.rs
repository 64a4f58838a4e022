//! HTTP handlers, one module per entity.

pub mod alerts;
pub mod devices;
pub mod incidents;
pub mod logs;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;
use watchpost_core::types::DbId;

use crate::error::{AppError, AppResult};

/// Unwrap a JSON body, turning malformed or non-JSON payloads into a 400.
pub(crate) fn json_body(payload: Result<Json<Value>, JsonRejection>) -> AppResult<Value> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Parse a decimal id from a path segment.
pub(crate) fn parse_id(raw: &str) -> Option<DbId> {
    raw.parse().ok()
}
