pub mod audio;
pub mod dto;
pub mod error;
pub mod file_name;
pub mod service;
pub mod voice;

pub use dto::{RequestValidationError, SynthesizeRequest, SynthesizeResponse, MAX_TEXT_LENGTH};
pub use error::TtsServiceError;
pub use file_name::{sanitize_file_name, storage_key};
pub use service::{TtsService, TtsServiceApi};
pub use voice::VoiceProfile;
