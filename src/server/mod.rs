//! HTTP boundary: serves synthesized fields as GeoJSON.
//!
//! `GET /api/weather?timeIndex=<int>` always answers `200 OK`; a missing or malformed
//! `timeIndex` falls back to the configured default index.

mod handlers;
mod state;

use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::field::FieldSynthesizer;

pub use handlers::weather_handler;
pub use state::AppState;

/// Route of the field endpoint.
pub const WEATHER_ROUTE: &str = "/api/weather";

/// Errors that can occur while running the server.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(WEATHER_ROUTE, get(weather_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `bind` and serves until Ctrl-C.
pub async fn serve(bind: SocketAddr, synth: FieldSynthesizer) -> Result<(), ServerError> {
    let listener = TcpListener::bind(bind)
        .await
        .map_err(|source| ServerError::Bind { addr: bind, source })?;

    info!(
        default_time_index = synth.default_time_index(),
        resolution = %synth.config().grid.resolution_label(),
        "Serving {} on http://{}",
        WEATHER_ROUTE,
        bind
    );

    axum::serve(listener, router(AppState::new(synth)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
