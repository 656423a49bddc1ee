//! Error types for the betboard application.

use thiserror::Error;

/// The main error type for betboard.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/TUI related errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// The HTTP exchange with the backend could not complete.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a status outside 2xx.
    #[error("Request failed with HTTP status {status}")]
    Request { status: u16 },

    /// The backend answered 2xx but the body was not the expected JSON.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Channel communication errors
    #[error("Channel error: {0}")]
    Channel(String),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new channel error.
    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }

    /// Create a request error from a non-success status code.
    pub fn request(status: u16) -> Self {
        Self::Request { status }
    }

    /// HTTP status carried by a request error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status } => Some(*status),
            _ => None,
        }
    }

    /// Whether this failure came from talking to the backend.
    pub fn is_gateway(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Request { .. } | Self::Decode(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_carries_status() {
        let err = Error::request(503);
        assert_eq!(err.status(), Some(503));
        assert!(err.is_gateway());
        assert_eq!(err.to_string(), "Request failed with HTTP status 503");
    }

    #[test]
    fn test_decode_error_from_serde() {
        let err: Error = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, Error::Decode(_)));
        assert!(err.is_gateway());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_config_error_is_not_gateway() {
        assert!(!Error::config("bad").is_gateway());
    }
}
