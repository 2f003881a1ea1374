//! # Application Constants
//!
//! Fixed values served by or used to start the env-manager server.
//! Nothing here is read from the environment.

use std::net::Ipv6Addr;

/// Name reported by the health endpoint and used in log banners.
pub const SERVICE_NAME: &str = "env-manager";

/// Body returned for `/` and every unmatched path.
pub const GREETING: &str = "Hello from env-manager! 🔐";

/// Status reported by the health endpoint.
pub const HEALTH_STATUS_OK: &str = "ok";

/// TCP port the server listens on.
pub const PORT: u16 = 8080;

/// Listen on all interfaces. The unspecified IPv6 address also accepts IPv4
/// clients on dual-stack hosts (Linux default, `net.ipv6.bindv6only = 0`).
pub const BIND_HOST: Ipv6Addr = Ipv6Addr::UNSPECIFIED;

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "env_manager=info";
