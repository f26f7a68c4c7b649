use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use caramel_core::ServerConfig;
use caramel_http::{AppState, create_router, shutdown_signal};
use caramel_storage::{BlobStore, FsBlobStore, MemoryBlobStore};

pub(crate) struct ServeArgs {
    pub host: String,
    pub port: u16,
    pub memory: bool,
    pub storage_dir: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
}

pub(crate) async fn run(args: ServeArgs) -> Result<()> {
    let mut config = ServerConfig::from_env()?;
    if args.storage_dir.is_some() {
        config.storage_dir = args.storage_dir;
    }
    if args.static_dir.is_some() {
        config.static_dir = args.static_dir;
    }

    let store: Arc<dyn BlobStore> = match (&config.storage_dir, args.memory) {
        (Some(dir), false) => {
            tracing::info!("Blob store at {}", dir.display());
            Arc::new(FsBlobStore::open(dir.clone()).await?)
        },
        _ => {
            tracing::warn!("Using in-memory blob store, data is lost on exit");
            Arc::new(MemoryBlobStore::new())
        },
    };

    let state = Arc::new(AppState::new(&config, store)?);
    let router = create_router(state);
    let addr = format!("{}:{}", args.host, args.port);
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("Server stopped");
    Ok(())
}
