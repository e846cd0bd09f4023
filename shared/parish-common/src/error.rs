//! Common Error Types

use thiserror::Error;

/// Errors raised while decoding or encoding API payloads.
#[derive(Debug, Error)]
pub enum Error {
    /// Payload was not valid JSON for the expected type.
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
