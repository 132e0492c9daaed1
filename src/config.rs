//! Process configuration, read once at startup
//!
//! Values come from the environment; a `.env` file in the working directory
//! is loaded first when present.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::db::connection::{DbConfig, DATABASE_NAME, DEFAULT_POOL_SIZE};
use crate::llm::groq::DEFAULT_BASE_URL;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Listen address for the HTTP server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Credentials and endpoint for the model gateway
#[derive(Clone, PartialEq)]
pub struct GatewayConfig {
    pub api_key: String,
    pub base_url: String,
}

// Keeps the API key out of logs
impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DbConfig,
    pub gateway: GatewayConfig,
}

impl AppConfig {
    /// Load `.env` (if any) and read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use edubot::config::AppConfig;
    ///
    /// let env = HashMap::from([("GROQ_API_KEY", "gsk_test"), ("DB_PORT", "5433")]);
    /// let config = AppConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
    /// assert_eq!(config.database.port, 5433);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DbConfig::default();

        let max_pool_size: usize = parse_or(&lookup, "DB_POOL_SIZE", DEFAULT_POOL_SIZE)?;
        if max_pool_size == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_POOL_SIZE",
                value: "0".to_string(),
                reason: "pool size must be at least 1".to_string(),
            });
        }

        let wait_timeout = match non_empty(&lookup, "DB_POOL_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(parse_value("DB_POOL_TIMEOUT_SECS", &raw)?)),
            None => None,
        };

        let database = DbConfig {
            host: non_empty(&lookup, "DB_HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "DB_PORT", defaults.port)?,
            database: DATABASE_NAME.to_string(),
            user: non_empty(&lookup, "DB_USER").unwrap_or(defaults.user),
            // An empty password is a legitimate value
            password: lookup("DB_PASSWORD").unwrap_or(defaults.password),
            max_pool_size,
            wait_timeout,
        };

        let gateway = GatewayConfig {
            api_key: non_empty(&lookup, "GROQ_API_KEY").ok_or(ConfigError::Missing("GROQ_API_KEY"))?,
            base_url: non_empty(&lookup, "GROQ_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        };

        let server_defaults = ServerConfig::default();
        let server = ServerConfig {
            host: parse_or(&lookup, "SERVER_HOST", server_defaults.host)?,
            port: parse_or(&lookup, "SERVER_PORT", server_defaults.port)?,
        };

        Ok(Self {
            server,
            database,
            gateway,
        })
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match non_empty(lookup, key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}
