//! # Utility Modules
//!
//! - **Constants** (`constant`) - Response bodies, service name and listen address

pub mod constant;
