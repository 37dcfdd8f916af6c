//! Liveness probe.

use axum::Json;
use serde_json::{Value, json};

/// Health check endpoint. Fixed response, independent of downstream state.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
