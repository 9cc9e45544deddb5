//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `HOST`: bind address, default `0.0.0.0`
//! - `PORT`: listen port, default `3000`
//!
//! `.env` is loaded before parsing. Leptos site settings (site root, pkg
//! dir) come from `[package.metadata.leptos]` via `get_configuration`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid HOST: {0}")]
    InvalidHost(String),
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `HOST` or `PORT` is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("HOST").map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => DEFAULT_HOST,
        };
        let port = match lookup("PORT").map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
