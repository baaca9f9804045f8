use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Method not allowed. Only POST requests are accepted.")]
    MethodNotAllowed,

    #[error("Not found.")]
    NotFound,

    #[error("Invalid JSON in request body.")]
    InvalidJson,

    #[error("{0}")]
    BadRequest(String),

    #[error("TTS service configuration error.")]
    TtsNotConfigured,

    #[error("Storage service configuration error.")]
    StorageNotConfigured,

    #[error("TTS generation failed: {message}")]
    TtsGeneration { status: StatusCode, message: String },

    #[error("No audio content received from TTS service.")]
    NoAudioContent,

    #[error("File upload failed: {0}")]
    UploadFailed(String),

    #[error("An unexpected error occurred while processing your request.")]
    Unexpected(String),
}

/// Error body shared by every failure path
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidJson | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::TtsGeneration { status, .. } => *status,
            Self::TtsNotConfigured
            | Self::StorageNotConfigured
            | Self::NoAudioContent
            | Self::UploadFailed(_)
            | Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        let details = match self {
            Self::Unexpected(details) => Some(details.clone()),
            _ => None,
        };

        ErrorResponse {
            success: false,
            error: self.to_string(),
            details,
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::Unexpected(details) => tracing::error!(
                error = %self,
                details = %details,
                status = %status.as_u16(),
                "Request failed"
            ),
            _ => tracing::error!(
                error = %self,
                status = %status.as_u16(),
                "Request failed"
            ),
        }

        (status, Json(self.to_response())).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
