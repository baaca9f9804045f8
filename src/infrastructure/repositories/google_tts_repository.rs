use super::tts_repository::{SynthesisError, TtsRepository};
use crate::domain::tts::VoiceProfile;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeSpeechRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelectionParams<'a>,
    audio_config: AudioConfig<'a>,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelectionParams<'a> {
    language_code: &'a str,
    name: &'a str,
    ssml_gender: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig<'a> {
    audio_encoding: &'a str,
    speaking_rate: f64,
    pitch: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeSpeechResponse {
    audio_content: Option<String>,
    error: Option<GoogleApiError>,
}

#[derive(Debug, Deserialize)]
struct GoogleApiError {
    message: Option<String>,
}

impl<'a> SynthesizeSpeechRequest<'a> {
    fn new(text: &'a str, voice: &'a VoiceProfile) -> Self {
        Self {
            input: SynthesisInput { text },
            voice: VoiceSelectionParams {
                language_code: voice.language_code,
                name: voice.name,
                ssml_gender: voice.ssml_gender,
            },
            audio_config: AudioConfig {
                audio_encoding: voice.audio_encoding,
                speaking_rate: voice.speaking_rate,
                pitch: voice.pitch,
            },
        }
    }
}

/// Google Cloud Text-to-Speech implementation of TTS repository
pub struct GoogleTtsRepository {
    http_client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl GoogleTtsRepository {
    pub fn new(http_client: reqwest::Client, api_url: String, api_key: Option<String>) -> Self {
        Self {
            http_client,
            api_url,
            api_key,
        }
    }
}

/// reqwest errors print the request URL, and the key travels in its query
fn redact_key(error: &reqwest::Error, api_key: &str) -> String {
    error.to_string().replace(api_key, "[redacted]")
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(&self, text: &str, voice: &VoiceProfile) -> Result<String, SynthesisError> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::error!("GOOGLE_CLOUD_API_KEY environment variable not set");
            return Err(SynthesisError::NotConfigured);
        };

        let start_time = std::time::Instant::now();

        tracing::info!(
            voice = voice.name,
            language = voice.language_code,
            text_length = text.chars().count(),
            "Calling Google TTS synthesize"
        );

        let response = self
            .http_client
            .post(&self.api_url)
            .query(&[("key", api_key)])
            .json(&SynthesizeSpeechRequest::new(text, voice))
            .send()
            .await
            .map_err(|e| {
                let message = redact_key(&e, api_key);
                tracing::error!(error = %message, "Google TTS request failed");
                SynthesisError::Transport(message)
            })?;

        let status = response.status();
        let body: SynthesizeSpeechResponse = response
            .json()
            .await
            .map_err(|e| SynthesisError::InvalidResponse(redact_key(&e, api_key)))?;

        if !status.is_success() {
            let message = body.error.and_then(|error| error.message);
            tracing::error!(
                status = status.as_u16(),
                error_message = message.as_deref().unwrap_or("Unknown error"),
                "Google TTS API error"
            );
            return Err(SynthesisError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let audio_content = body
            .audio_content
            .filter(|content| !content.is_empty())
            .ok_or(SynthesisError::NoAudioContent)?;

        tracing::info!(
            provider = "google",
            latency_ms = start_time.elapsed().as_millis(),
            encoded_size = audio_content.len(),
            "TTS synthesis completed"
        );

        Ok(audio_content)
    }
}
