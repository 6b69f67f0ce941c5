use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Listener configuration.
///
/// The port comes from, in order: an explicit override (the `--port` flag),
/// the `PORT` environment variable, then the default 3000. Host comes from
/// `HOST` with a bind-everything default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Resolve configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env(port_override: Option<u16>) -> Result<Self> {
        let port = match port_override {
            Some(port) => port,
            None => match env::var("PORT") {
                Ok(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid PORT value '{}'", raw))?,
                Err(_) => DEFAULT_PORT,
            },
        };
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_beats_environment() {
        let config = ServerConfig::from_env(Some(8081)).unwrap();
        assert_eq!(config.port, 8081);
    }

    #[test]
    fn test_bind_addr_formats() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };
        let addr = config.bind_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_bad_host_rejected() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            port: 3000,
        };
        assert!(config.bind_addr().is_err());
    }
}
