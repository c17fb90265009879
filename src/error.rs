//! Error types for airfreight.

use thiserror::Error;

/// Library-level error type for airfreight operations.
#[derive(Error, Debug)]
pub enum AirfreightError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AirfreightError {
    /// Shorthand for an `InvalidArgument` error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// True for caller mistakes, as opposed to environment failures.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Result type alias for airfreight operations.
pub type Result<T> = std::result::Result<T, AirfreightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = AirfreightError::invalid("speed must be positive");
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Invalid argument: speed must be positive");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AirfreightError = io_err.into();
        assert!(matches!(err, AirfreightError::Io(_)));
        assert!(!err.is_invalid_argument());
    }
}
