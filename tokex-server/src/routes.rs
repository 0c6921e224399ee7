//! API route handlers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::persist::persist_record;
use crate::AppState;

/// Accept one extracted record as a JSON POST body and persist it.
///
/// Responds `200 {"ok":true,"path":...}` on success and `400 {"error":...}`
/// when the body is not valid JSON. The body is taken as a raw string so a
/// malformed payload reaches our error shape instead of the framework's.
#[tracing::instrument(name = "receive_extract", skip(state, body))]
pub async fn receive_extract(State(state): State<AppState>, body: String) -> impl IntoResponse {
    let record: serde_json::Value = match serde_json::from_str(&body) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(error = %e, "rejecting malformed record");
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e.to_string() })),
            );
        }
    };

    match persist_record(&state.store_dir, &state.output_path, &record).await {
        Ok(path) => (
            StatusCode::OK,
            Json(serde_json::json!({ "ok": true, "path": path.display().to_string() })),
        ),
        Err(e) => {
            tracing::error!(error = %e, "failed to persist record");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
        }
    }
}

/// CORS preflight handler.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Fallback for unknown paths and methods.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
