//! HTTP Server Object
//!
//! Explicit server construction: configuration and the store collaborator are
//! injected at startup, so there is no process-wide mutable state. Handlers
//! receive the store through an `Extension` layer and can be exercised against
//! a test double without a running server.

use crate::query::handlers::{handle_index, handle_search, handle_suggest};
use crate::store::LinkStore;

use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;

pub const DEFAULT_PORT: u16 = 7777;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            debug: false,
        }
    }
}

pub fn build_router(store: Arc<dyn LinkStore>) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/search", post(handle_search))
        .route("/suggest", get(handle_suggest))
        .layer(Extension(store))
}

pub async fn run(config: ServerConfig, store: Arc<dyn LinkStore>) -> anyhow::Result<()> {
    let app = build_router(store);
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    tracing::info!("HTTP server listening on {}", addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
