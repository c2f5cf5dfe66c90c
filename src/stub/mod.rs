//! Reference stub backend
//!
//! An in-memory blog backend built with Axum, speaking the same envelope
//! protocol as the real one. Used by the end-to-end client tests and for
//! developing the front-ends without a real server.
//!
//! # Endpoints
//!
//! - `GET /api/blogs` - All posts, newest first
//! - `POST /api/blogs` - Create a post (multipart)
//! - `GET /api/blogs/:id` - Get a post
//! - `POST /api/blogs/:id` - Update a post (multipart, `_method=PUT`)
//! - `DELETE /api/blogs/:id` - Delete a post
//! - `GET /api/storage/cover_images/:file` - Uploaded cover images
//! - `GET /health` - Liveness probe
//!
//! # Example
//!
//! ```rust,ignore
//! use blogdeck::config::StubConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     blogdeck::stub::serve(&StubConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod store;

pub use error::{StubError, StubResult};
pub use store::{PostStore, PostResource, COVER_IMAGE_PREFIX};

use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::StubConfig;

/// Cover uploads are capped at 10 MB
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Shared state for the stub handlers
#[derive(Default)]
pub struct StubState {
    pub store: PostStore,
}

impl StubState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Build the stub router with all routes and middleware
pub fn build_router(state: Arc<StubState>) -> Router {
    let api_routes = Router::new()
        .route(
            "/blogs",
            get(routes::list_posts).post(routes::create_post),
        )
        .route(
            "/blogs/:id",
            get(routes::get_post)
                .post(routes::update_post)
                .delete(routes::delete_post),
        )
        .route("/storage/cover_images/:file", get(routes::cover_image))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the stub server
pub async fn serve(config: &StubConfig) -> Result<(), StubError> {
    let router = build_router(Arc::new(StubState::new()));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Blogdeck stub backend listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Blogdeck stub backend shut down gracefully");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
