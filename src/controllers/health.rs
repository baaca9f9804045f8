use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use crate::infrastructure::config::Config;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(config): State<Arc<Config>>) -> impl IntoResponse {
    let tts = config.is_tts_configured();
    let storage = config.is_storage_configured();

    let (status, readiness) = if tts && storage {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
    };

    (
        status,
        Json(json!({
            "status": readiness,
            "tts": configured(tts),
            "storage": configured(storage)
        })),
    )
}

fn configured(present: bool) -> &'static str {
    if present {
        "configured"
    } else {
        "missing"
    }
}
