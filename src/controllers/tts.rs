use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    domain::tts::{
        RequestValidationError, SynthesizeRequest, SynthesizeResponse, TtsService, TtsServiceApi,
    },
    error::{AppError, AppResult},
};

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /api/tts/synthesize - Convert text to speech and store the audio
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        body: Result<Bytes, BytesRejection>,
    ) -> AppResult<Json<SynthesizeResponse>> {
        let body = body.map_err(body_rejection)?;

        // Parse by hand so malformed JSON gets our own 400 body
        let body: Value = serde_json::from_slice(&body).map_err(|_| AppError::InvalidJson)?;

        let request = SynthesizeRequest::from_json(&body)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let response = controller.tts_service.synthesize(request).await?;

        Ok(Json(response))
    }

    /// Any path the router does not serve
    pub async fn not_found() -> AppError {
        AppError::NotFound
    }

    /// Any method other than POST (OPTIONS never reaches the router)
    pub async fn method_not_allowed() -> AppError {
        AppError::MethodNotAllowed
    }
}

/// Bodies past the extractor limit are reported as oversized text
fn body_rejection(rejection: BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::BadRequest(RequestValidationError::TextTooLong.to_string())
    } else {
        tracing::warn!(error = %rejection.body_text(), "Failed to read request body");
        AppError::InvalidJson
    }
}
