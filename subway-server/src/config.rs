//! Server configuration.

use std::net::SocketAddr;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "SUBWAY_ADDR";

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Read configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value.parse().map_err(|_| ConfigError::Invalid {
                var: ADDR_VAR,
                value,
            })?;
        }
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], 8080)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn unset_variable_uses_default() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn address_from_variable() {
        let config =
            ServerConfig::from_lookup(|var| (var == ADDR_VAR).then(|| "0.0.0.0:3000".to_string()))
                .unwrap();
        assert_eq!(config.addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn invalid_address_rejected() {
        let err = ServerConfig::from_lookup(|_| Some("not an address".to_string())).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: ADDR_VAR,
                value: "not an address".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid value for SUBWAY_ADDR: not an address"
        );
    }
}
