//! Server wiring: app state, router, and startup.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use slipscan_ocr::TextExtractor;
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::routes;

/// Application state shared across requests. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    pub fn new(extractor: Arc<dyn TextExtractor>) -> Self {
        Self { extractor }
    }
}

/// Build the router. A single fallback handler services every method and
/// path, matching the edge-function contract.
pub fn scan_router(state: AppState) -> Router {
    Router::new().fallback(routes::scan).with_state(state)
}

/// Start the HTTP server and serve until shutdown.
#[instrument(skip(state))]
pub async fn start_server(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = scan_router(state);

    info!("slipscan HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
