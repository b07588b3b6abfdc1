//! HTTP server implementation using Axum.

use axum::{
    Router,
    routing::{get, post},
};
use docubuddy_assistant::Assistant;
use docubuddy_core::config::DocuBuddyConfig;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;

/// Shared state for the gateway server.
pub struct AppState {
    pub config: DocuBuddyConfig,
    pub assistant: Assistant,
    pub start_time: std::time::Instant,
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let shared = Arc::new(state);
    Router::new()
        .route("/ask", post(routes::ask))
        .route("/health", get(routes::health_check))
        .layer({
            let cors = CorsLayer::new()
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                .allow_headers(Any)
                .max_age(std::time::Duration::from_secs(3600));

            // Restrict CORS origins in production via env var
            // Example: DOCUBUDDY_CORS_ORIGINS=https://intranet.example.com
            if let Ok(origins_str) = std::env::var("DOCUBUDDY_CORS_ORIGINS") {
                let origins: Vec<_> = origins_str
                    .split(',')
                    .filter_map(|s| s.trim().parse::<axum::http::HeaderValue>().ok())
                    .collect();
                cors.allow_origin(origins)
            } else {
                // Development fallback — allow all origins
                cors.allow_origin(Any)
            }
        })
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

/// Start the HTTP server.
pub async fn start(config: DocuBuddyConfig) -> anyhow::Result<()> {
    let provider = docubuddy_providers::create_provider(&config)?;
    match provider.health_check().await {
        Ok(true) => tracing::info!("✅ Provider '{}' ready", provider.name()),
        _ => tracing::warn!(
            "⚠️ Provider '{}' not ready — completions will fail until credentials/endpoint are fixed",
            provider.name()
        ),
    }

    if !std::path::Path::new(&config.document.path).exists() {
        tracing::warn!(
            "⚠️ Policy document not found at '{}' — /ask will report missing documentation",
            config.document.path
        );
    } else {
        tracing::info!("📄 Policy document: {}", config.document.path);
    }

    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let assistant = Assistant::new(config.clone(), provider);
    let state = AppState {
        config,
        assistant,
        start_time: std::time::Instant::now(),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🌐 Gateway server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
