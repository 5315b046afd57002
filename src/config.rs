//! Server configuration loaded from the environment.
//!
//! `ADDR_CONFIG` and `PORT_CONFIG` are required; `REQUEST_TIMEOUT_MS` is
//! optional. A `.env` file is honored when the binary loads it first.

use std::time::Duration;

use thiserror::Error;

/// Bind host variable.
pub const ADDR_VAR: &str = "ADDR_CONFIG";
/// Bind port variable. A leading `:` is accepted.
pub const PORT_VAR: &str = "PORT_CONFIG";
/// Per-request deadline variable, in milliseconds.
pub const TIMEOUT_VAR: &str = "REQUEST_TIMEOUT_MS";

const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    /// A variable could not be parsed.
    #[error("invalid value `{value}` for {var}")]
    Invalid {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
    },
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host or IP to bind.
    pub addr: String,
    /// TCP port to bind.
    pub port: u16,
    /// Deadline applied to every request's store call.
    pub request_timeout: Duration,
}

impl ServerConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, so tests need not touch the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |var: &'static str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let addr = required(ADDR_VAR)?;
        let raw_port = required(PORT_VAR)?;
        let port = raw_port
            .trim_start_matches(':')
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid {
                var: PORT_VAR,
                value: raw_port.clone(),
            })?;

        let request_timeout = match lookup(TIMEOUT_VAR).map(|v| v.trim().to_string()) {
            Some(raw) if !raw.is_empty() => {
                let ms = raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                    var: TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
                Duration::from_millis(ms)
            }
            _ => Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        };

        Ok(Self {
            addr,
            port,
            request_timeout,
        })
    }

    /// `host:port` string accepted by `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, time::Duration};

    use super::{ConfigError, ServerConfig};

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn parses_colon_prefixed_port_and_default_timeout() {
        let cfg = ServerConfig::from_lookup(lookup(&[
            ("ADDR_CONFIG", "0.0.0.0"),
            ("PORT_CONFIG", ":8080"),
        ]))
        .expect("config");
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
        assert_eq!(cfg.request_timeout, Duration::from_millis(5_000));
    }

    #[test]
    fn explicit_timeout_is_honored() {
        let cfg = ServerConfig::from_lookup(lookup(&[
            ("ADDR_CONFIG", "127.0.0.1"),
            ("PORT_CONFIG", "9000"),
            ("REQUEST_TIMEOUT_MS", "250"),
        ]))
        .expect("config");
        assert_eq!(cfg.request_timeout, Duration::from_millis(250));
    }

    #[test]
    fn missing_and_invalid_values_are_reported() {
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[("PORT_CONFIG", "8080")])),
            Err(ConfigError::Missing("ADDR_CONFIG"))
        );
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[("ADDR_CONFIG", "localhost"), ("PORT_CONFIG", "  ")])),
            Err(ConfigError::Missing("PORT_CONFIG"))
        );
        assert!(matches!(
            ServerConfig::from_lookup(lookup(&[("ADDR_CONFIG", "localhost"), ("PORT_CONFIG", "http")])),
            Err(ConfigError::Invalid { var: "PORT_CONFIG", .. })
        ));
    }
}
