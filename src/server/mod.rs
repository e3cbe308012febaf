//! Liveness endpoint
//!
//! A single `GET /` route that answers with a fixed plaintext acknowledgment.
//! It says nothing about probe results; it only shows the process is up.

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Body returned by `GET /`
pub const LIVENESS_MESSAGE: &str = "URL Runner Active";

/// Builds the liveness router
pub fn router() -> Router {
    Router::new().route("/", get(liveness))
}

async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// Binds the liveness listener on all interfaces
pub async fn bind(port: u16) -> std::io::Result<TcpListener> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    TcpListener::bind(addr).await
}

/// Serves the liveness router until the process exits
pub async fn serve(listener: TcpListener) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Liveness endpoint listening on {}", addr);
    }
    axum::serve(listener, router()).await
}
