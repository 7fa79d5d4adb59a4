//! Server configuration read from the environment.

use std::net::SocketAddr;

use url::Url;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:3000/";

/// Startup configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind (`HOST`).
    pub host: String,
    /// Port to bind (`PORT`).
    pub port: u16,
    /// Base for generated links (`PUBLIC_BASE_URL`).
    pub public_base_url: Url,
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `PUBLIC_BASE_URL` from the process
    /// environment, falling back to defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` is not a `u16` or
    /// `PUBLIC_BASE_URL` is not an absolute URL.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ServerConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };

        let raw_base =
            lookup("PUBLIC_BASE_URL").unwrap_or_else(|| DEFAULT_PUBLIC_BASE_URL.to_owned());
        let public_base_url = Url::parse(&raw_base).map_err(|e| {
            AppError::Config(format!("PUBLIC_BASE_URL must be an absolute URL: {e}"))
        })?;
        if public_base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "PUBLIC_BASE_URL cannot be used as a link base: {raw_base}"
            )));
        }

        Ok(Self {
            host,
            port,
            public_base_url,
        })
    }

    /// The address to bind.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host` and `port` do not form a socket
    /// address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}
