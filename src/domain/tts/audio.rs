use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

/// Standard alphabet; trailing `=` padding may be present or not
const AUDIO_CONTENT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode the base64 audio field of a synthesis response into raw bytes
pub fn decode_audio_content(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    AUDIO_CONTENT_ENGINE.decode(encoded.trim())
}
