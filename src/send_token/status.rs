use crate::core::errors::SubmissionError;
use serde::{Deserialize, Serialize};

/// Outcome tracker for the latest submit attempt.
///
/// The variants are mutually exclusive, so "loading with an error" cannot be
/// represented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ConfirmationStatus {
    #[default]
    Idle,
    Loading,
    Failed { error: String },
    Succeeded { message: String },
}

impl ConfirmationStatus {
    pub fn loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Succeeded { message } => Some(message),
            _ => None,
        }
    }

    /// Whether the last attempt finished, successfully or not.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::Succeeded { .. })
    }
}

/// Terminal result of one submission, as reported by the executor.
///
/// Serialized as `{"message": ..}` or `{"error": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionResult {
    Message(String),
    Error(String),
}

impl From<Result<String, SubmissionError>> for SubmissionResult {
    fn from(result: Result<String, SubmissionError>) -> Self {
        match result {
            Ok(message) => Self::Message(message),
            Err(SubmissionError(error)) => Self::Error(error),
        }
    }
}

impl From<SubmissionResult> for ConfirmationStatus {
    fn from(result: SubmissionResult) -> Self {
        match result {
            SubmissionResult::Message(message) => Self::Succeeded { message },
            SubmissionResult::Error(error) => Self::Failed { error },
        }
    }
}
