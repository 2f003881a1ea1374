//! # env-manager - HTTP Front Door
//!
//! Two fixed routes on a hardcoded port: a greeting on `/` (and on every path
//! nothing else claims) and a JSON health payload on `/health`.
//!
//! ## Modules
//!
//! - [`handlers`] - The greeting and health check handlers
//! - [`error`] - Fatal listener errors
//! - [`utils`] - Constants

pub mod error;
pub mod handlers;
pub mod utils;

use std::net::SocketAddr;

use axum::{Router, routing::any};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::error::{ServerError, ServerResult};
use crate::handlers::{greeting, health_check};
use crate::utils::constant::*;

/// Creates the Axum router.
///
/// `/health` is an exact match for every method. Everything else, including
/// `/health/...`, lands on the fallback and receives the greeting.
pub fn app() -> Router {
    Router::new()
        .route("/", any(greeting))
        .route("/health", any(health_check))
        .fallback(greeting)
}

/// The address the binary listens on: `[::]:8080`, all interfaces on both
/// address families.
#[inline]
pub fn default_addr() -> SocketAddr {
    SocketAddr::from((BIND_HOST, PORT))
}

/// Serves [`app`] on an already bound listener.
///
/// Only returns if the accept loop fails; there is no graceful shutdown.
pub async fn serve(listener: TcpListener) -> ServerResult<()> {
    axum::serve(listener, app())
        .await
        .map_err(ServerError::Serve)
}

/// Binds `addr` and serves forever.
///
/// # Errors
///
/// [`ServerError::Bind`] if the port cannot be bound (already in use,
/// permission denied), [`ServerError::Serve`] if the accept loop fails later.
#[instrument]
pub async fn run(addr: SocketAddr) -> ServerResult<()> {
    info!("🚀 Starting {SERVICE_NAME} server...");
    info!("🌟 Server running on port {}", addr.port());

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    serve(listener).await
}
