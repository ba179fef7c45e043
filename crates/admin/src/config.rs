//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `TIFFIN_ADMIN_TOKEN` - Bearer token staff present on every request
//!
//! ## Optional
//! - `TIFFIN_ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `TIFFIN_ADMIN_PORT` - Listen port (default: 3001)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Minimum accepted admin token length.
const MIN_TOKEN_LENGTH: usize = 16;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),

    #[error("Insecure value for {0}: {1}")]
    InsecureSecret(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Bearer token staff must present
    pub admin_token: SecretString,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required variable is missing, a variable
    /// is invalid, or the admin token is too short.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("TIFFIN_ADMIN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("TIFFIN_ADMIN_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("TIFFIN_ADMIN_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("TIFFIN_ADMIN_PORT".to_string(), e.to_string())
            })?;

        let token = std::env::var("TIFFIN_ADMIN_TOKEN")
            .map_err(|_| ConfigError::MissingEnvVar("TIFFIN_ADMIN_TOKEN".to_string()))?;
        if token.len() < MIN_TOKEN_LENGTH {
            return Err(ConfigError::InsecureSecret(
                "TIFFIN_ADMIN_TOKEN".to_string(),
                format!("must be at least {MIN_TOKEN_LENGTH} characters"),
            ));
        }

        Ok(Self {
            host,
            port,
            admin_token: SecretString::from(token),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = AdminConfig {
            host: "127.0.0.1".parse().expect("valid ip"),
            port: 3001,
            admin_token: SecretString::from("0123456789abcdef"),
        };
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3001");
    }
}
