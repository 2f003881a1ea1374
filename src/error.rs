//! # Server Errors
//!
//! The only failures this application knows about happen while bringing the
//! listener up or while the accept loop runs. Request handlers cannot fail.

use std::io;
use std::net::SocketAddr;

use thiserror::Error;

/// Fatal errors raised while starting or running the HTTP listener.
///
/// None of these are recovered from: the binary logs them and exits with a
/// non-zero status.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

/// Convenience Result type alias that uses ServerError as the error type.
pub type ServerResult<T> = Result<T, ServerError>;
