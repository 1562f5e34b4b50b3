//! Service status endpoint.

use axum::Json;
use serde_json::{json, Value};

/// GET /check - Basic liveness probe.
///
/// Returns 200 with a static status body. No storage access.
pub async fn check() -> Json<Value> {
    tracing::debug!("check endpoint handled");
    Json(json!({ "status": "OK" }))
}
