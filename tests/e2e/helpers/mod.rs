use speech_upload_backend::controllers::tts::TtsController;
use speech_upload_backend::domain::tts::TtsService;
use speech_upload_backend::infrastructure::config::{Config, LogFormat, DEFAULT_STORAGE_BUCKET};
use speech_upload_backend::infrastructure::http::create_app;
use speech_upload_backend::infrastructure::repositories::{
    GoogleTtsRepository, SupabaseStorageRepository,
};
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use wiremock::MockServer;

pub mod upstream_mocks;

use api_client::TestClient;

pub const TEST_API_KEY: &str = "test-google-api-key";
pub const TEST_SERVICE_ROLE_KEY: &str = "test-service-role-key";

/// Test context with a running server and a mock upstream
pub struct TestContext {
    pub client: TestClient,
    pub upstream: MockServer,
    #[allow(dead_code)]
    pub config: Config,
}

impl TestContext {
    /// Start with every secret configured
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Start after adjusting the default test configuration
    pub async fn with_config(customize: impl FnOnce(&mut Config)) -> Self {
        let upstream = MockServer::start().await;

        let mut config = Config {
            host: "127.0.0.1".to_string(),
            port: 0, // Will be assigned by the OS
            log_format: LogFormat::Pretty,
            tts_api_url: format!("{}{}", upstream.uri(), upstream_mocks::SYNTHESIZE_PATH),
            google_cloud_api_key: Some(TEST_API_KEY.to_string()),
            supabase_url: Some(upstream.uri()),
            supabase_service_role_key: Some(TEST_SERVICE_ROLE_KEY.to_string()),
            storage_bucket: DEFAULT_STORAGE_BUCKET.to_string(),
        };
        customize(&mut config);

        let app = create_test_app(config.clone());

        // Start server
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local addr");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            client: TestClient::new(&base_url),
            upstream,
            config,
        }
    }

    /// Public URL the service should hand back for `key`
    pub fn public_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.upstream.uri(),
            DEFAULT_STORAGE_BUCKET,
            key
        )
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async { TestContext::new().await }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Mock expectations are verified when the upstream server drops
        }
    }
}

fn create_test_app(config: Config) -> axum::Router {
    let config = Arc::new(config);
    let http_client = reqwest::Client::new();

    let tts_repo = Arc::new(GoogleTtsRepository::new(
        http_client.clone(),
        config.tts_api_url.clone(),
        config.google_cloud_api_key.clone(),
    ));
    let storage_repo = Arc::new(SupabaseStorageRepository::new(
        http_client,
        config.supabase_url.clone(),
        config.supabase_service_role_key.clone(),
        config.storage_bucket.clone(),
    ));
    let tts_service = Arc::new(TtsService::new(tts_repo, storage_repo));
    let tts_controller = Arc::new(TtsController::new(tts_service));

    create_app(config, tts_controller)
}
