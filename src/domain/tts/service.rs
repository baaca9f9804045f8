use super::audio::decode_audio_content;
use super::dto::{SynthesizeRequest, SynthesizeResponse};
use super::error::TtsServiceError;
use super::file_name::{storage_key, AUDIO_CONTENT_TYPE};
use super::voice::VoiceProfile;
use crate::infrastructure::repositories::{StorageRepository, TtsRepository};
use async_trait::async_trait;
use std::sync::Arc;

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    storage_repo: Arc<dyn StorageRepository>,
    voice: VoiceProfile,
}

impl TtsService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, storage_repo: Arc<dyn StorageRepository>) -> Self {
        Self {
            tts_repo,
            storage_repo,
            voice: VoiceProfile::default(),
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize the request text and publish it as an MP3 object
    ///
    /// This operation:
    /// - Calls the speech provider once
    /// - Decodes the returned audio
    /// - Uploads it under the sanitized file name, replacing any previous object
    ///
    /// Returns the public URL along with size metadata
    async fn synthesize(
        &self,
        request: SynthesizeRequest,
    ) -> Result<SynthesizeResponse, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        request: SynthesizeRequest,
    ) -> Result<SynthesizeResponse, TtsServiceError> {
        let text_length = request.text_length();

        tracing::info!(
            text_length = text_length,
            file_name = %request.file_name,
            "Processing TTS request"
        );

        // 1. Synthesize
        let audio_content = self.tts_repo.synthesize(&request.text, &self.voice).await?;

        // 2. Decode
        let audio = decode_audio_content(&audio_content)?;
        let audio_size = audio.len();

        tracing::info!(audio_size = audio_size, "Audio generated successfully");

        // 3. Upload, overwriting any object with the same key
        let key = storage_key(&request.file_name);
        self.storage_repo
            .upload(&key, audio, AUDIO_CONTENT_TYPE, true)
            .await?;

        // 4. Resolve public URL
        let audio_url = self.storage_repo.public_url(&key)?;

        tracing::info!(audio_url = %audio_url, "File uploaded successfully");

        Ok(SynthesizeResponse::new(audio_url, key, text_length, audio_size))
    }
}
