//! Shared application state.

use portal_core::auth::Authenticator;

use crate::config::ServerConfig;
use crate::upstream::Upstream;

#[derive(Clone)]
pub struct AppState {
    pub upstream: Upstream,
    pub auth: Authenticator,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        AppState {
            upstream: Upstream::new(config.upstream_url, config.upstream_token),
            auth: Authenticator::static_credential(config.login_username, config.login_password),
        }
    }
}
