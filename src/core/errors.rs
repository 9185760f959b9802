//! Error types for the send-token crate
//!
//! The form model itself never fails: the only user-visible failure is a
//! `SubmissionError` reported by the execution collaborator. `SendTokenError`
//! covers the ambient layers around it (configuration, IO, serialization).

use thiserror::Error;

/// Failure reported by the execution collaborator for one submit attempt.
///
/// The message is passed through verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct SubmissionError(pub String);

impl SubmissionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Errors raised outside the form model.
#[derive(Debug, Error)]
pub enum SendTokenError {
    /// Invalid or inconsistent configuration
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Terminal failure of a submit attempt
    #[error("Submission failed: {0}")]
    Submission(#[from] SubmissionError),
}

pub type Result<T> = std::result::Result<T, SendTokenError>;

impl SendTokenError {
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Toml(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_error_is_verbatim() {
        let err = SubmissionError::new("insufficient funds");
        assert_eq!(err.to_string(), "insufficient funds");
        assert_eq!(err.message(), "insufficient funds");
    }

    #[test]
    fn test_display_config_error() {
        let err = SendTokenError::Config("slow_warning_secs must be positive".to_string());
        assert_eq!(err.to_string(), "Configuration error: slow_warning_secs must be positive");
        assert!(err.is_config_error());
    }

    #[test]
    fn test_from_submission_error() {
        let err: SendTokenError = SubmissionError::new("nonce too low").into();
        assert!(matches!(err, SendTokenError::Submission(_)));
        assert!(!err.is_config_error());
        assert_eq!(err.to_string(), "Submission failed: nonce too low");
    }
}
