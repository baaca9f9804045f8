use axum::http::StatusCode;

use crate::error::AppError;
use crate::infrastructure::repositories::{StorageError, SynthesisError};

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to decode audio content: {0}")]
    Decode(#[from] base64::DecodeError),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Synthesis(SynthesisError::NotConfigured) => AppError::TtsNotConfigured,
            TtsServiceError::Synthesis(SynthesisError::Rejected { status, message }) => {
                AppError::TtsGeneration {
                    status: StatusCode::from_u16(status)
                        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    message: message.unwrap_or_else(|| "Unknown error".to_string()),
                }
            }
            TtsServiceError::Synthesis(SynthesisError::NoAudioContent) => AppError::NoAudioContent,
            TtsServiceError::Synthesis(
                e @ (SynthesisError::Transport(_) | SynthesisError::InvalidResponse(_)),
            ) => AppError::Unexpected(e.to_string()),
            TtsServiceError::Storage(StorageError::NotConfigured) => AppError::StorageNotConfigured,
            TtsServiceError::Storage(StorageError::UploadFailed(msg)) => AppError::UploadFailed(msg),
            e @ TtsServiceError::Decode(_) => AppError::Unexpected(e.to_string()),
        }
    }
}
