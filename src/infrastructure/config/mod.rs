use serde::Deserialize;
use std::env;

pub const DEFAULT_TTS_URL: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";
pub const DEFAULT_STORAGE_BUCKET: &str = "audio-files";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    // Google Cloud Text-to-Speech
    pub tts_api_url: String,
    pub google_cloud_api_key: Option<String>,
    // Supabase Storage
    pub supabase_url: Option<String>,
    pub supabase_service_role_key: Option<String>,
    pub storage_bucket: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Secrets are optional here; a missing one turns into a 500 on the
    /// request that needs it rather than a failed startup.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            tts_api_url: env::var("GOOGLE_TTS_URL").unwrap_or_else(|_| DEFAULT_TTS_URL.to_string()),
            google_cloud_api_key: optional_secret("GOOGLE_CLOUD_API_KEY"),
            supabase_url: optional_secret("SUPABASE_URL"),
            supabase_service_role_key: optional_secret("SUPABASE_SERVICE_ROLE_KEY"),
            storage_bucket: env::var("STORAGE_BUCKET")
                .unwrap_or_else(|_| DEFAULT_STORAGE_BUCKET.to_string()),
        };

        Ok(config)
    }

    pub fn is_tts_configured(&self) -> bool {
        self.google_cloud_api_key.is_some()
    }

    pub fn is_storage_configured(&self) -> bool {
        self.supabase_url.is_some() && self.supabase_service_role_key.is_some()
    }
}

/// Empty values are treated the same as unset ones
fn optional_secret(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
