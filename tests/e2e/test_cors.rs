use crate::e2e::helpers;

use helpers::upstream_mocks::mock_synthesis_never_called;
use helpers::TestContext;
use hyper::{Method, StatusCode};
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_answer_preflight_with_no_content(ctx: &TestContext) {
    mock_synthesis_never_called(&ctx.upstream).await;

    let response = ctx.client.options("/api/tts/synthesize").await.unwrap();

    response
        .assert_status(StatusCode::NO_CONTENT)
        .assert_cors_headers();
    assert!(response.body_bytes.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_methods_other_than_post(ctx: &TestContext) {
    mock_synthesis_never_called(&ctx.upstream).await;

    for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
        let response = ctx
            .client
            .request(method, "/api/tts/synthesize")
            .await
            .unwrap();

        response
            .assert_status(StatusCode::METHOD_NOT_ALLOWED)
            .assert_error_message("Method not allowed. Only POST requests are accepted.")
            .assert_cors_headers();
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id(ctx: &TestContext) {
    let response = ctx.client.options("/api/tts/synthesize").await.unwrap();
    response.assert_header_exists("x-request-id");

    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");

    let first = response.header("x-request-id").cloned();
    let second = ctx.client.get("/health").await.unwrap().header("x-request-id").cloned();
    assert_ne!(first, second, "request ids should be unique");
}
