//! Local executor that never touches a node.
//!
//! Checks that the draft is complete and answers with a deterministic
//! pseudo transaction hash, so the send flow can be driven end to end offline.

use async_trait::async_trait;
use sha3::{Digest, Keccak256};
use std::time::Duration;
use tracing::debug;

use super::traits::TransactionExecutor;
use crate::core::{domain::DraftTransaction, errors::SubmissionError};

#[derive(Debug, Clone, Default)]
pub struct DryRunExecutor {
    latency: Duration,
}

impl DryRunExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep this long before answering.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    /// `0x`-prefixed keccak-256 of the draft's JSON encoding.
    pub fn pseudo_hash(draft: &DraftTransaction) -> Result<String, SubmissionError> {
        let encoded = serde_json::to_vec(draft)
            .map_err(|e| SubmissionError::new(format!("failed to encode draft: {}", e)))?;
        Ok(format!("0x{}", hex::encode(Keccak256::digest(&encoded))))
    }
}

#[async_trait]
impl TransactionExecutor for DryRunExecutor {
    async fn execute(&self, draft: &DraftTransaction) -> Result<String, SubmissionError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if draft.from.is_none() {
            return Err(SubmissionError::new("no source address selected"));
        }
        if draft.to.as_deref().map_or(true, |to| to.trim().is_empty()) {
            return Err(SubmissionError::new("no destination address"));
        }
        if draft.amount.is_none() {
            return Err(SubmissionError::new("no amount"));
        }
        let hash = Self::pseudo_hash(draft)?;
        debug!(%hash, "dry run accepted draft");
        Ok(hash)
    }

    fn name(&self) -> &str {
        "dry-run"
    }
}
