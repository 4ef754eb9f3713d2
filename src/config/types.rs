//! Configuration types for the HTTP server.
//!
//! Tax rates are fixed in code; only process-level settings live here.

use serde::Deserialize;

/// Default interface to bind.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default TCP port.
pub const DEFAULT_PORT: u16 = 8080;
/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "sales_vat=info";

/// Settings for the HTTP server process.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// The interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_filter: default_log_filter(),
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` address to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
