use axum::http::{Method, Uri};
use tracing::{debug, instrument};

use crate::utils::constant::GREETING;

/// Greeting served on `/` and as the router fallback, so any method on any
/// unmatched path gets `200 OK` with the same plain-text body.
#[instrument(skip_all, fields(method = %method, uri = %uri))]
pub async fn greeting(method: Method, uri: Uri) -> &'static str {
    debug!("Greeting endpoint accessed");
    GREETING
}
