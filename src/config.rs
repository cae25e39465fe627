//! Host server configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};

use crate::error::ServerError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    pub fn from_env() -> Result<Self, ServerError> {
        Self::parse(std::env::var("HOST").ok().as_deref(), std::env::var("PORT").ok().as_deref())
    }

    fn parse(host: Option<&str>, port: Option<&str>) -> Result<Self, ServerError> {
        let host = host.unwrap_or(DEFAULT_HOST);
        let host = host
            .parse::<IpAddr>()
            .map_err(|_| ServerError::Config(format!("invalid HOST: {host}")))?;
        let port = match port {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ServerError::Config(format!("invalid PORT: {raw}")))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
