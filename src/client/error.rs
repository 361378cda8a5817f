//! Client error types

use thiserror::Error;

/// Gateway client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// The gateway rejected the request (400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The addressed record does not exist (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unreachable gateway, any other non-2xx status, or an undecodable body
    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Transport(format!("invalid response body: {}", err))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
