pub mod cors;
pub mod request_id;

use axum::{
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, tts::TtsController};
use crate::error::AppError;
use crate::infrastructure::config::Config;

pub use cors::cors_middleware;
pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Build the application router with every route and middleware attached
pub fn create_app(config: Arc<Config>, tts_controller: Arc<TtsController>) -> Router {
    let tts_routes = Router::new()
        .route(
            "/api/tts/synthesize",
            post(TtsController::synthesize).fallback(TtsController::method_not_allowed),
        )
        .with_state(tts_controller);

    // Panics are caught innermost so the 500 body still gets CORS headers
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(config)
        .merge(tts_routes)
        .fallback(TtsController::not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(cors_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_app(config.clone(), tts_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "Unknown panic".to_string()
    };

    AppError::Unexpected(details).into_response()
}
