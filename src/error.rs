//! Client Error Types
//!
//! Every failure between a form handler and the backend ends up here. The
//! controller never shows these to the user directly; each form renders its
//! own fixed fallback text and the detail goes to the log.

use thiserror::Error;

/// Errors raised while talking to the MoodTrack backend
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response (connection refused, CORS,
    /// timeout, aborted fetch)
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not the JSON we expected
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request payload could not be serialized
    #[error("Failed to encode request: {0}")]
    Encode(String),

    /// The client was configured with an unusable value
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(feature = "native")]
impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            ClientError::Config(e.to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    }
}
