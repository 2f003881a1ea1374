//! # HTTP Request Handlers
//!
//! ## Available Handlers
//!
//! - **Greeting** (`greeting`) - Static greeting for `/` and every unmatched path
//! - **Health Check** (`health_check`) - Fixed JSON status payload

mod greeting;
mod health_check;

pub use greeting::*;
pub use health_check::*;
