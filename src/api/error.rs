//! Error types for calls against the remote users API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Transport failure (DNS, connect, TLS, timeout).
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The requested user does not exist.
    #[error("User {id} not found")]
    NotFound { id: u64 },

    /// The API answered with a non-success status.
    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Short type tag used in log lines.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::ClientBuild(_) => "client_build",
            ApiError::Connection { .. } => "connection_error",
            ApiError::NotFound { .. } => "not_found",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode(_) => "decode_error",
        }
    }
}
