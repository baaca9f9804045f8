use once_cell::sync::Lazy;
use regex::Regex;

pub const AUDIO_FILE_EXTENSION: &str = "mp3";
pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

static DISALLOWED_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9_-]").expect("static regex is valid"));

/// Replace every character outside `[A-Za-z0-9_-]` with `_`, one for one
pub fn sanitize_file_name(file_name: &str) -> String {
    DISALLOWED_CHARS.replace_all(file_name, "_").into_owned()
}

/// Object key under which the synthesized audio for `file_name` is stored
pub fn storage_key(file_name: &str) -> String {
    format!("{}.{}", sanitize_file_name(file_name), AUDIO_FILE_EXTENSION)
}
