//! Error types for the backend bridge.
//!
//! The selection core itself is total over its inputs and has no error
//! type; everything that can fail lives on the network edge.

use std::fmt;

/// Errors from talking to the tablet or the export backend.
#[derive(Debug, Clone)]
pub enum RpcError {
    /// Browser window not available
    NoWindow,
    /// Failed to create the HTTP request
    RequestCreationFailed,
    /// Network request failed (unreachable tablet, CORS, ...)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    HttpError(u16),
    /// Failed to read the response body
    ResponseReadFailed,
    /// Response body was not the expected JSON shape
    InvalidPayload(String),
    /// Request timed out
    Timeout,
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidPayload(msg) => write!(f, "Unexpected response: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for RpcError {}
