//! Server configuration.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "TRANSIT_BIND_ADDR";
/// Environment variable holding the station file path.
pub const STATIONS_FILE_VAR: &str = "TRANSIT_STATIONS_FILE";
/// Environment variable holding the connection file path.
pub const CONNECTIONS_FILE_VAR: &str = "TRANSIT_CONNECTIONS_FILE";

/// Errors reading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} '{value}': {source}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        #[source]
        source: AddrParseError,
    },
}

/// Configuration for the HTTP server and its input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,

    /// Station records, one `id;name` per line.
    pub stations_path: PathBuf,

    /// Connection records, one `from;to;weight` per line.
    pub connections_path: PathBuf,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        bind_addr: SocketAddr,
        stations_path: impl Into<PathBuf>,
        connections_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            bind_addr,
            stations_path: stations_path.into(),
            connections_path: connections_path.into(),
        }
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a configuration from `lookup`, falling back to the defaults for
    /// unset or empty variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(BIND_ADDR_VAR) {
            config.bind_addr =
                value
                    .trim()
                    .parse()
                    .map_err(|source| ConfigError::InvalidBindAddr {
                        var: BIND_ADDR_VAR,
                        value: value.clone(),
                        source,
                    })?;
        }
        if let Some(path) = get(STATIONS_FILE_VAR) {
            config.stations_path = path.into();
        }
        if let Some(path) = get(CONNECTIONS_FILE_VAR) {
            config.connections_path = path.into();
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            stations_path: PathBuf::from("data/stations.txt"),
            connections_path: PathBuf::from("data/connections.txt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.stations_path, PathBuf::from("data/stations.txt"));
    }

    #[test]
    fn overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (BIND_ADDR_VAR, "0.0.0.0:8080"),
            (STATIONS_FILE_VAR, "data/estacoes.txt"),
            (CONNECTIONS_FILE_VAR, "data/conexoes.txt"),
        ]))
        .unwrap();

        assert_eq!(
            config,
            ServerConfig::new(
                SocketAddr::from(([0, 0, 0, 0], 8080)),
                "data/estacoes.txt",
                "data/conexoes.txt",
            )
        );
    }

    #[test]
    fn empty_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "  ")])).unwrap();
        assert_eq!(config.bind_addr, ServerConfig::default().bind_addr);
    }

    #[test]
    fn bad_bind_addr() {
        let err = ServerConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert!(matches!(
            &err,
            ConfigError::InvalidBindAddr { value, .. } if value == "localhost"
        ));
        assert!(err.to_string().starts_with("invalid TRANSIT_BIND_ADDR 'localhost'"));
    }
}
