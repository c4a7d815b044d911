//! Legal Advisor Backend
//!
//! An HTTP server backing the legal laws assistant widget. Provides session,
//! chat, history-export, and voice endpoints over an in-memory pattern store.

mod api;
mod config;
mod error;
mod patterns;
mod session;
mod voice;

use api::utils::RouterState;
use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
    routing::{get, post, put},
    Json, Router,
};
use config::Config;
use serde::Serialize;
use session::SessionManager;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;
use voice::{NullSpeechEngine, VoiceAdapter};

#[derive(Serialize)]
struct HelloResponse {
    message: String,
    status: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    message: String,
}

/// Request ID middleware - adds unique ID to each request for tracing
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    let duration = start.elapsed();
    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    // Load the pattern resource; a missing or malformed file degrades to an
    // empty set so every query receives the fallback response
    let patterns = match patterns::load_patterns(&config.patterns.path) {
        Ok(entries) => {
            info!(
                "Loaded {} patterns from {}",
                entries.len(),
                config.patterns.path
            );
            entries
        }
        Err(e) => {
            warn!(
                "Failed to load patterns ({}); every query will receive the fallback response",
                e
            );
            Vec::new()
        }
    };

    let state: RouterState = (
        Arc::new(SessionManager::new()),
        Arc::new(patterns),
        Arc::new(VoiceAdapter::new(Arc::new(NullSpeechEngine))),
    );

    // Build our application with routes
    let mut router = Router::new()
        // Health check and hello world
        .route("/", get(hello_world))
        .route("/api/health", get(health_check))
        // Session API
        .route("/api/sessions", post(api::sessions::create_session))
        .route("/api/sessions/:id", get(api::sessions::get_session))
        .route("/api/sessions/:id/login", post(api::sessions::login))
        .route("/api/sessions/:id/language", put(api::sessions::set_language))
        // Chat API
        .route("/api/sessions/:id/chat", post(api::chat::chat))
        // Interaction history API
        .route("/api/sessions/:id/history", get(api::history::get_history))
        .route(
            "/api/sessions/:id/history/export",
            get(api::history::export_history),
        );

    // Voice API (optional)
    if config.voice.enabled {
        router = router
            .route("/api/sessions/:id/voice/query", post(api::voice::voice_query))
            .route("/api/sessions/:id/voice/stop", post(api::voice::voice_stop));
    } else {
        info!("Voice endpoints disabled by configuration");
    }

    let app = router
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive()) // Allow CORS for development
        .with_state(state);

    // Bind to address from config
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address: {}", e))?;

    info!("🚀 Server running on http://{}", addr);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Setup graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals (Ctrl+C, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}

async fn hello_world() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello from Legal Advisor Backend!".to_string(),
        status: "ok".to_string(),
    })
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "Backend is healthy".to_string(),
    })
}
