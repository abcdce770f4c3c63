//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;
pub use client::net::api::DEFAULT_ITEMS_ENDPOINT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Items API the browser fetches from; advertised in the HTML shell.
    pub items_endpoint: String,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `ITEMS_ENDPOINT`: default `http://localhost:8080/items`
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = parse_host(std::env::var("HOST").ok().as_deref())?;
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let items_endpoint = parse_items_endpoint(std::env::var("ITEMS_ENDPOINT").ok().as_deref())?;
        Ok(Self { host, port, items_endpoint })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT, items_endpoint: DEFAULT_ITEMS_ENDPOINT.to_owned() }
    }
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match raw {
        None => Ok(DEFAULT_HOST),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var: "HOST", value: value.to_owned() }),
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var: "PORT", value: value.to_owned() }),
    }
}

fn parse_items_endpoint(raw: Option<&str>) -> Result<String, ConfigError> {
    match raw {
        None => Ok(DEFAULT_ITEMS_ENDPOINT.to_owned()),
        Some(value) => {
            client::util::endpoint::normalize_endpoint(value).ok_or(ConfigError::Blank { var: "ITEMS_ENDPOINT" })
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
