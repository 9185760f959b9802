use async_trait::async_trait;

use crate::core::{domain::DraftTransaction, errors::SubmissionError};

/// Defines the interface of whatever builds, signs and broadcasts a confirmed
/// draft.
#[async_trait]
pub trait TransactionExecutor: Send + Sync {
    /// Execute `draft`, returning a message for the user on success
    /// (typically the transaction hash).
    async fn execute(&self, draft: &DraftTransaction) -> Result<String, SubmissionError>;

    /// Short name for logs.
    fn name(&self) -> &str {
        "executor"
    }
}
