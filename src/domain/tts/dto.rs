use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Longest text accepted for a single synthesis, in UTF-16 code units
pub const MAX_TEXT_LENGTH: usize = 5000;

/// Validated body of POST /api/tts/synthesize
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizeRequest {
    pub text: String,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestValidationError {
    #[error("Text parameter is required and must be a string.")]
    MissingText,
    #[error("FileName parameter is required and must be a string.")]
    MissingFileName,
    #[error("Text is too long. Maximum length is 5000 characters.")]
    TextTooLong,
}

impl SynthesizeRequest {
    /// Validate an already parsed JSON body. Checks run in order and the
    /// first failure is returned.
    pub fn from_json(body: &Value) -> Result<Self, RequestValidationError> {
        let text = non_empty_string(body, "text").ok_or(RequestValidationError::MissingText)?;
        let file_name =
            non_empty_string(body, "fileName").ok_or(RequestValidationError::MissingFileName)?;

        if utf16_len(text) > MAX_TEXT_LENGTH {
            return Err(RequestValidationError::TextTooLong);
        }

        Ok(Self {
            text: text.to_string(),
            file_name: file_name.to_string(),
        })
    }

    pub fn text_length(&self) -> usize {
        utf16_len(&self.text)
    }
}

/// Length as browsers and the JSON clients of this API count it
fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

fn non_empty_string<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

/// Success body of POST /api/tts/synthesize
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeResponse {
    pub success: bool,
    pub audio_url: String,
    pub file_name: String,
    pub text_length: usize,
    pub audio_size: usize,
    pub timestamp: String,
}

impl SynthesizeResponse {
    pub fn new(audio_url: String, file_name: String, text_length: usize, audio_size: usize) -> Self {
        Self {
            success: true,
            audio_url,
            file_name,
            text_length,
            audio_size,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
