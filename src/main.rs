use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use speech_upload_backend::controllers::tts::TtsController;
use speech_upload_backend::domain::tts::TtsService;
use speech_upload_backend::infrastructure::config::{Config, LogFormat};
use speech_upload_backend::infrastructure::http::start_http_server;
use speech_upload_backend::infrastructure::repositories::{
    GoogleTtsRepository, StorageRepository, SupabaseStorageRepository, TtsRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting speech upload backend on {}:{}",
        config.host,
        config.port
    );

    // Report which secrets are present without exposing them
    tracing::info!(
        tts_configured = config.is_tts_configured(),
        storage_configured = config.is_storage_configured(),
        bucket = %config.storage_bucket,
        "Service configuration check"
    );

    if !config.is_tts_configured() || !config.is_storage_configured() {
        tracing::warn!("Required secrets are missing. Synthesis requests will fail with a configuration error until they are set.");
    }

    let config = Arc::new(config);

    // Shared HTTP client; connection pooling is left to reqwest
    let http_client = reqwest::Client::new();

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject http client and secrets)
    tracing::info!("Instantiating repositories...");
    let tts_repo: Arc<dyn TtsRepository> = Arc::new(GoogleTtsRepository::new(
        http_client.clone(),
        config.tts_api_url.clone(),
        config.google_cloud_api_key.clone(),
    ));
    let storage_repo: Arc<dyn StorageRepository> = Arc::new(SupabaseStorageRepository::new(
        http_client,
        config.supabase_url.clone(),
        config.supabase_service_role_key.clone(),
        config.storage_bucket.clone(),
    ));

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let tts_service = Arc::new(TtsService::new(tts_repo, storage_repo));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let tts_controller = Arc::new(TtsController::new(tts_service));

    // Start HTTP server with all routes
    start_http_server(config, tts_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "speech_upload_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "speech_upload_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
