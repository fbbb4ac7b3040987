//! Error types for form sessions
//!
//! Validation outcomes are never errors; they are field states. This type
//! only covers operational failures around a session.
use thiserror::Error;

/// Result type for form operations
pub type Result<T> = std::result::Result<T, Error>;

/// Operational errors of a form session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Form configuration is invalid
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong with the configuration
        message: String,
    },

    /// A raw value arrived after the session was released
    #[error("Form session is closed; update to '{field}' was dropped")]
    SessionClosed {
        /// Name of the field that was being set
        field: &'static str,
    },

    /// The session was created outside a tokio runtime
    #[error("No async runtime available: {0}")]
    RuntimeUnavailable(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether the error means the session can no longer be used
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::SessionClosed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::config("debounce too long").to_string(),
            "Configuration error: debounce too long"
        );
        assert_eq!(
            Error::SessionClosed { field: "username" }.to_string(),
            "Form session is closed; update to 'username' was dropped"
        );
    }

    #[test]
    fn test_is_closed() {
        assert!(Error::SessionClosed { field: "password" }.is_closed());
        assert!(!Error::config("x").is_closed());
    }
}
