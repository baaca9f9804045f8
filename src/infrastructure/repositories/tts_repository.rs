use crate::domain::tts::VoiceProfile;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SynthesisError {
    #[error("speech synthesis API key is not configured")]
    NotConfigured,

    /// The provider answered with a non-success status
    #[error("speech synthesis rejected with status {status}: {}", .message.as_deref().unwrap_or("Unknown error"))]
    Rejected { status: u16, message: Option<String> },

    /// Success status but no audio in the body
    #[error("no audio content in synthesis response")]
    NoAudioContent,

    #[error("speech synthesis request failed: {0}")]
    Transport(String),

    #[error("invalid synthesis response: {0}")]
    InvalidResponse(String),
}

/// Repository trait for text-to-speech providers
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize `text` with the given voice
    ///
    /// Returns the audio exactly as the provider encodes it in its response
    /// (base64 text); decoding is left to the caller.
    async fn synthesize(&self, text: &str, voice: &VoiceProfile) -> Result<String, SynthesisError>;
}
