//! Login gate for the portal.
//!
//! The portal historically shipped a single hard-coded credential pair. That
//! check now lives behind [`Authenticator`] so the static variant can be
//! swapped for token- or session-based verification without touching the
//! login route. None of the variants establish a session; a successful check
//! only unlocks the dashboard for the current viewer.

use serde::Deserialize;

/// Message shown on a rejected login attempt
pub const INVALID_CREDENTIALS: &str = "Invalid username or password. Please try again.";

/// A username/password pair as submitted by the login form
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Pluggable credential check
#[derive(Debug, Clone)]
pub enum Authenticator {
    /// A single fixed credential pair (the placeholder scheme; not a
    /// security mechanism)
    StaticCredential { username: String, password: String },
}

impl Authenticator {
    pub fn static_credential(username: impl Into<String>, password: impl Into<String>) -> Self {
        Authenticator::StaticCredential {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn verify(&self, credentials: &Credentials) -> bool {
        match self {
            Authenticator::StaticCredential { username, password } => {
                credentials.username == *username && credentials.password == *password
            }
        }
    }
}
