//! Error types for portal data fetches.

use thiserror::Error;

/// Why a section fetch failed.
///
/// The portal deliberately presents all of these the same way to the user
/// (one message plus a retry affordance); the distinction only matters for
/// logging.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upstream returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Result type alias for section fetches.
pub type FetchResult<T> = Result<T, FetchError>;
