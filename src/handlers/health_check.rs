//! # Health Check Handler
//!
//! Fixed status payload for load balancers and deployment tooling. It reports
//! that the process is up and answering HTTP; nothing else is checked.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::utils::constant::{HEALTH_STATUS_OK, SERVICE_NAME};

/// Body of the health endpoint.
///
/// Field order is part of the wire format: it serialises to
/// `{"status":"ok","service":"env-manager"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus<'a> {
    pub status: &'a str,
    pub service: &'a str,
}

impl HealthStatus<'static> {
    pub const fn ok() -> Self {
        Self {
            status: HEALTH_STATUS_OK,
            service: SERVICE_NAME,
        }
    }
}

/// Health check endpoint, mounted on `/health` for every method.
///
/// # Returns
///
/// Always `200 OK` with `Content-Type: application/json`.
#[instrument]
pub async fn health_check() -> Json<HealthStatus<'static>> {
    debug!("Health check endpoint accessed");
    Json(HealthStatus::ok())
}
