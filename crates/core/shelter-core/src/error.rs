//! Error types for the shelter client

use thiserror::Error;

/// Boxed source error carried by backend and connection failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for shelter operations
#[derive(Debug, Error)]
pub enum ShelterError {
    /// Argument rejected before any backend interaction
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Connection could not be established
    #[error("Connection error: {message}")]
    Connection {
        /// What was being attempted
        message: String,
        /// Underlying driver error
        #[source]
        source: Option<BoxError>,
    },

    /// Database operation failed after the connection was established
    #[error("Backend error: {message}")]
    Backend {
        /// Operation that failed
        message: String,
        /// Underlying driver error
        #[source]
        source: Option<BoxError>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenient Result type using ShelterError
pub type Result<T> = std::result::Result<T, ShelterError>;

impl ShelterError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        ShelterError::InvalidArgument(msg.into())
    }

    /// Create a connection error wrapping the driver cause
    pub fn connection<E>(msg: impl Into<String>, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        ShelterError::Connection {
            message: msg.into(),
            source: Some(source.into()),
        }
    }

    /// Create a backend error wrapping the driver cause
    pub fn backend<E>(msg: impl Into<String>, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        ShelterError::Backend {
            message: msg.into(),
            source: Some(source.into()),
        }
    }

    /// Create a backend error with no underlying cause
    pub fn backend_msg(msg: impl Into<String>) -> Self {
        ShelterError::Backend {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        ShelterError::Config(msg.into())
    }

    /// Whether the error was raised by argument validation.
    ///
    /// Validation errors are always surfaced to the caller; everything else
    /// may be coerced to a neutral result by [`crate::CollectionClient`].
    pub fn is_validation(&self) -> bool {
        matches!(self, ShelterError::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_creation() {
        let err = ShelterError::invalid_argument("query must be a JSON object");
        assert_eq!(
            err.to_string(),
            "Invalid argument: query must be a JSON object"
        );
        assert!(err.is_validation());

        let err = ShelterError::config("MONGO_PORT is not a port number");
        assert_eq!(
            err.to_string(),
            "Configuration error: MONGO_PORT is not a port number"
        );
        assert!(!err.is_validation());
    }

    #[test]
    fn test_connection_error_keeps_source() {
        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = ShelterError::connection("Failed to connect to MongoDB", cause);

        assert_eq!(err.to_string(), "Connection error: Failed to connect to MongoDB");
        assert_eq!(err.source().map(|s| s.to_string()), Some("refused".into()));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_backend_error_without_source() {
        let err = ShelterError::backend_msg("insert not acknowledged");
        assert_eq!(err.to_string(), "Backend error: insert not acknowledged");
        assert!(err.source().is_none());
    }
}
