//! Environment-supplied server configuration.

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 4096;
pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_LOGIN_USERNAME: &str = "parent";
pub const DEFAULT_LOGIN_PASSWORD: &str = "pacifico2024";

/// Everything the server reads from the environment.
///
/// | Variable | Default |
/// |---|---|
/// | `PORTAL_ADDR` | `127.0.0.1:4096` |
/// | `PORTAL_UPSTREAM_URL` | `http://localhost:8000/api` |
/// | `PORTAL_UPSTREAM_TOKEN` | empty |
/// | `PORTAL_LOGIN_USER` | `parent` |
/// | `PORTAL_LOGIN_PASSWORD` | `pacifico2024` |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub upstream_url: String,
    pub upstream_token: String,
    pub login_username: String,
    pub login_password: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let addr = match env::var("PORTAL_ADDR") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("Invalid PORTAL_ADDR '{}'", value))?,
            Err(_) => SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
        };

        let upstream_url = normalize_base_url(
            &env::var("PORTAL_UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string()),
        );

        Ok(ServerConfig {
            addr,
            upstream_url,
            upstream_token: env::var("PORTAL_UPSTREAM_TOKEN").unwrap_or_default(),
            login_username: env::var("PORTAL_LOGIN_USER")
                .unwrap_or_else(|_| DEFAULT_LOGIN_USERNAME.to_string()),
            login_password: env::var("PORTAL_LOGIN_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_LOGIN_PASSWORD.to_string()),
        })
    }
}

/// Strip trailing slashes so path concatenation stays predictable
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
