//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `VERACITY_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `VERACITY_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Path to the trust registry JSON file (`{"source name": score}`).
    pub registry_path: Option<PathBuf>,

    /// Path to a JSON file of articles to seed the repository with.
    pub articles_path: Option<PathBuf>,

    /// Timeout for a single page fetch, in seconds. Default: `10`.
    pub fetch_timeout_secs: u64,

    /// Max entries in the fetched-page cache. Default: `1_000`.
    pub page_cache_capacity: u64,

    /// Max entries kept in the verification history log. Default: `500`.
    pub history_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            registry_path: None,
            articles_path: None,
            fetch_timeout_secs: 10,
            page_cache_capacity: 1_000,
            history_capacity: 500,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "VERACITY_PORT";
    const ENV_BIND_ADDR: &'static str = "VERACITY_BIND_ADDR";
    const ENV_REGISTRY_PATH: &'static str = "VERACITY_REGISTRY_PATH";
    const ENV_ARTICLES_PATH: &'static str = "VERACITY_ARTICLES_PATH";
    const ENV_FETCH_TIMEOUT_SECS: &'static str = "VERACITY_FETCH_TIMEOUT_SECS";
    const ENV_PAGE_CACHE_CAPACITY: &'static str = "VERACITY_PAGE_CACHE_CAPACITY";
    const ENV_HISTORY_CAPACITY: &'static str = "VERACITY_HISTORY_CAPACITY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let registry_path = Self::parse_optional_path_from_env(Self::ENV_REGISTRY_PATH);
        let articles_path = Self::parse_optional_path_from_env(Self::ENV_ARTICLES_PATH);
        let fetch_timeout_secs =
            Self::parse_u64_from_env(Self::ENV_FETCH_TIMEOUT_SECS, defaults.fetch_timeout_secs);
        let page_cache_capacity = Self::parse_u64_from_env(
            Self::ENV_PAGE_CACHE_CAPACITY,
            defaults.page_cache_capacity,
        );
        let history_capacity = Self::parse_u64_from_env(
            Self::ENV_HISTORY_CAPACITY,
            defaults.history_capacity as u64,
        ) as usize;

        Ok(Self {
            port,
            bind_addr,
            registry_path,
            articles_path,
            fetch_timeout_secs,
            page_cache_capacity,
            history_capacity,
        })
    }

    /// Validates paths and basic invariants (does not create files).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                value: self.fetch_timeout_secs.to_string(),
            });
        }

        if let Some(ref path) = self.registry_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        if let Some(ref path) = self.articles_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
