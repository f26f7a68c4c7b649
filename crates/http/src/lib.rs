//! HTTP API server for the Caramel gallery.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod handlers;
mod response_types;

use std::path::PathBuf;
use std::sync::Arc;

use axum::http::Method;
use axum::http::header::CONTENT_TYPE;
use axum::routing::get;
use axum::{Json, Router};
use caramel_core::ServerConfig;
use caramel_service::{ChatService, GalleryService, ServiceError, VisitorService};
use caramel_storage::BlobStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

pub use response_types::{VersionResponse, VisitorCountFailure};

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for thread-safe sharing across handlers.
pub struct AppState {
    /// Photo listing and media bytes
    pub gallery: Arc<GalleryService>,
    /// Visitor counter
    pub visitors: Arc<VisitorService>,
    /// Persona chat proxy
    pub chat: Arc<ChatService>,
    /// Static site served for paths no route claims
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    /// Wires every service against one blob store.
    ///
    /// # Errors
    /// Returns an error if the chat client cannot be initialized.
    pub fn new(config: &ServerConfig, store: Arc<dyn BlobStore>) -> Result<Self, ServiceError> {
        let chat = ChatService::from_config(&config.inference, config.persona.clone())?;
        Ok(Self {
            gallery: Arc::new(GalleryService::new(
                Arc::clone(&store),
                config.image_container.clone(),
                &config.public_base_url,
            )),
            visitors: Arc::new(VisitorService::new(store)),
            chat: Arc::new(chat),
            static_dir: config.static_dir.clone(),
        })
    }
}

/// Any origin may call the API; preflights are answered by the layer itself.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/list-images", get(handlers::images::list_images))
        .route(
            "/api/visitor-count",
            get(handlers::visitors::visitor_count).post(handlers::visitors::visitor_count),
        )
        .route("/api/chat", get(handlers::chat::chat_status).post(handlers::chat::chat))
        .route("/media/{container}/{name}", get(handlers::media::get_image));

    let router = match &state.static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };
    router.layer(cors_layer()).with_state(state)
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        tracing::info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                tracing::info!("received terminate signal, shutting down");
            },
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
