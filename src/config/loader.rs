//! Configuration loading from YAML files and environment variables.

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};

use super::types::ServerConfig;

/// Environment variable holding the bind host.
pub const HOST_VAR: &str = "SALES_VAT_HOST";
/// Environment variable holding the bind port.
pub const PORT_VAR: &str = "SALES_VAT_PORT";
/// Environment variable holding the default log filter.
pub const LOG_VAR: &str = "SALES_VAT_LOG";

/// Loads server configuration.
///
/// # Example
///
/// ```no_run
/// use sales_vat::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./server.yaml")?;
/// println!("Binding to {}", loader.config().bind_address());
/// # Ok::<(), sales_vat::error::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ServerConfig,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file.
    ///
    /// Returns `ConfigError::NotFound` if the file cannot be read and
    /// `ConfigError::ParseError` if it is not valid server configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ConfigError::NotFound {
            path: path_str.clone(),
        })?;

        let config = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path_str,
            message: e.to_string(),
        })?;

        Ok(Self { config })
    }

    /// Loads configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Unset variables fall back to the defaults in [`ServerConfig`].
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(host) = lookup(HOST_VAR) {
            if host.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: HOST_VAR.to_string(),
                    message: "must not be blank".to_string(),
                });
            }
            config.host = host;
        }

        if let Some(port) = lookup(PORT_VAR) {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: PORT_VAR.to_string(),
                message: format!("'{}' is not a valid port number", port),
            })?;
        }

        if let Some(filter) = lookup(LOG_VAR) {
            config.log_filter = filter;
        }

        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ServerConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn write_temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "sales_vat_{}_{}.yaml",
            name,
            uuid::Uuid::new_v4()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let loader = ConfigLoader::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(loader.config(), &ServerConfig::default());
    }

    #[test]
    fn test_environment_overrides() {
        let loader = ConfigLoader::from_lookup(lookup_from(&[
            (HOST_VAR, "127.0.0.1"),
            (PORT_VAR, "3000"),
            (LOG_VAR, "sales_vat=debug"),
        ]))
        .unwrap();
        let config = loader.into_config();
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.log_filter, "sales_vat=debug");
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = ConfigLoader::from_lookup(lookup_from(&[(PORT_VAR, "eighty")])).unwrap_err();
        match err {
            ConfigError::InvalidValue { key, message } => {
                assert_eq!(key, PORT_VAR);
                assert!(message.contains("eighty"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_host_rejected() {
        assert!(matches!(
            ConfigLoader::from_lookup(lookup_from(&[(HOST_VAR, " ")])),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_load_yaml_file() {
        let path = write_temp_config("valid", "host: 127.0.0.1\nport: 8181\n");
        let loader = ConfigLoader::load(&path).unwrap();
        assert_eq!(loader.config().bind_address(), "127.0.0.1:8181");
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let result = ConfigLoader::load("/nonexistent/sales_vat/server.yaml");
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let path = write_temp_config("invalid", "port: [not a port\n");
        let result = ConfigLoader::load(&path);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
        fs::remove_file(path).ok();
    }
}
