//! Error types for the Techblog client.

use thiserror::Error;

/// Result type for Techblog client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Shown when the server gave us nothing better to display.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong, please try again";

/// Techblog client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration error (missing URL, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout, body decoding)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response. `message` is the raw response body.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Input rejected before anything was sent
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Access token could not be decoded
    #[error("Invalid token: {0}")]
    Token(String),

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Text suitable for the notification channel: the server payload when
    /// there is one, otherwise a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } if !message.trim().is_empty() => message.clone(),
            ClientError::Validation(message) => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}
