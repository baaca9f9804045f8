use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{TEST_API_KEY, TEST_SERVICE_ROLE_KEY};

pub const SYNTHESIZE_PATH: &str = "/v1/text:synthesize";

/// Four base64 chars, three zero bytes once decoded
pub const SILENT_AUDIO_BASE64: &str = "AAAA";

fn upload_path(key: &str) -> String {
    format!("/storage/v1/object/audio-files/{}", key)
}

/// Google answers with `audio_content`, `expected_calls` times
pub async fn mock_synthesis_success(server: &MockServer, audio_content: &str, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(SYNTHESIZE_PATH))
        .and(query_param("key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "audioContent": audio_content
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Google answers with an arbitrary status and JSON body
pub async fn mock_synthesis_response(server: &MockServer, status: u16, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(SYNTHESIZE_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Fails the test if the synthesis endpoint is ever called
pub async fn mock_synthesis_never_called(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(SYNTHESIZE_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

/// Storage accepts upserts of `key` carrying exactly `bytes`
pub async fn mock_upload_success(server: &MockServer, key: &str, bytes: Vec<u8>, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(upload_path(key)))
        .and(header("authorization", format!("Bearer {}", TEST_SERVICE_ROLE_KEY).as_str()))
        .and(header("content-type", "audio/mpeg"))
        .and(header("x-upsert", "true"))
        .and(wiremock::matchers::body_bytes(bytes))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Key": format!("audio-files/{}", key)
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Storage rejects uploads of `key` with a Supabase style error body
pub async fn mock_upload_failure(server: &MockServer, key: &str, message: &str) {
    Mock::given(method("POST"))
        .and(path(upload_path(key)))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "statusCode": "404",
            "error": "Bucket not found",
            "message": message
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Fails the test if anything is uploaded
pub async fn mock_upload_never_called(server: &MockServer) {
    Mock::given(method("POST"))
        .and(wiremock::matchers::path_regex(r"^/storage/v1/object/.*"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}
