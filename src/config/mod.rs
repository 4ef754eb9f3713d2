//! Configuration loading for the sales VAT server.
//!
//! Settings come from `SALES_VAT_*` environment variables (with `.env`
//! support) or from a YAML file. VAT multipliers are not configurable.
//!
//! # Example
//!
//! ```no_run
//! use sales_vat::config::ConfigLoader;
//!
//! let config = ConfigLoader::from_env().unwrap().into_config();
//! println!("Listening on {}", config.bind_address());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, HOST_VAR, LOG_VAR, PORT_VAR};
pub use types::{DEFAULT_HOST, DEFAULT_LOG_FILTER, DEFAULT_PORT, ServerConfig};
