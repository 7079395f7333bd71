//! HTTP surface
//!
//! Three routes over a shared [`App`]: a health check, idea generation and
//! image generation. CORS is open to any origin.

pub mod error;
pub mod handlers;

pub use error::ApiError;

use crate::app::App;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<App>,
}

pub fn router(app: Arc<App>) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::root))
        .route("/generate-ideas", post(handlers::generate_ideas))
        .route("/generate-images", post(handlers::generate_images))
        .with_state(AppState { app });

    with_layers(routes)
}

/// Panic recovery, request tracing and open CORS.
fn with_layers(routes: Router) -> Router {
    routes
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

pub async fn serve(app: Arc<App>, addr: SocketAddr) -> crate::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, router(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
