//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid HOST {0:?}: expected an IP address")]
    InvalidHost(String),
    #[error("invalid PORT {0:?}: expected 1-65535")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub addr: SocketAddr,
}

impl HostConfig {
    /// Build the bind address from the environment.
    ///
    /// Optional, each falling back to the matching half of `site_addr`
    /// (Leptos `site-addr` / `LEPTOS_SITE_ADDR`):
    /// - `HOST`: IP address to bind
    /// - `PORT`: port to bind
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when either value is present but unparseable.
    pub fn from_env(site_addr: SocketAddr) -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").ok();
        let port = std::env::var("PORT").ok();
        Self::from_values(host.as_deref(), port.as_deref(), site_addr)
    }

    fn from_values(host: Option<&str>, port: Option<&str>, site_addr: SocketAddr) -> Result<Self, ConfigError> {
        let ip: IpAddr = match host.map(str::trim).filter(|h| !h.is_empty()) {
            None => site_addr.ip(),
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost(raw.to_owned()))?,
        };
        let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
            None => site_addr.port(),
            Some(raw) => raw
                .parse::<u16>()
                .ok()
                .filter(|p| *p != 0)
                .ok_or_else(|| ConfigError::InvalidPort(raw.to_owned()))?,
        };
        Ok(Self { addr: SocketAddr::new(ip, port) })
    }
}
