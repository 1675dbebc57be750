//! Client error types

use crate::transport::TransportError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never produced a response
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Id already in use (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other non-2xx status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body missing or of the wrong shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
