/// Voice and audio settings sent with every synthesis request
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceProfile {
    pub language_code: &'static str,
    pub name: &'static str,
    pub ssml_gender: &'static str,
    pub audio_encoding: &'static str,
    pub speaking_rate: f64,
    pub pitch: f64,
}

impl VoiceProfile {
    /// Calm US English male narrator, slightly slowed and lowered
    pub const NARRATOR: VoiceProfile = VoiceProfile {
        language_code: "en-US",
        name: "en-US-Neural2-J",
        ssml_gender: "MALE",
        audio_encoding: "MP3",
        speaking_rate: 0.95,
        pitch: -2.0,
    };
}

impl Default for VoiceProfile {
    fn default() -> Self {
        Self::NARRATOR
    }
}
