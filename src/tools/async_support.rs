// src/tools/async_support.rs
//! Helpers for awaiting calls into the execution collaborator

use std::time::Duration;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::timeout;
use tracing::warn;

/// How long one named operation may run before it is reported as slow.
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    pub duration: Duration,
    pub operation_name: String,
}

impl TimeoutConfig {
    pub fn new(duration: Duration, operation_name: impl Into<String>) -> Self {
        Self { duration, operation_name: operation_name.into() }
    }

    /// Standard window: 30 seconds
    pub fn standard(operation_name: impl Into<String>) -> Self {
        Self::new(Duration::from_secs(30), operation_name)
    }
}

/// Await `handle` to completion, warning each time `config.duration` passes
/// without a result.
///
/// The task is never cancelled: a send that has started may already be on
/// the network. A panicking task comes back as `Err(JoinError)`.
pub async fn join_with_watchdog<T>(
    mut handle: JoinHandle<T>,
    config: &TimeoutConfig,
) -> Result<T, JoinError> {
    let mut waited = Duration::ZERO;
    loop {
        match timeout(config.duration, &mut handle).await {
            Ok(joined) => return joined,
            Err(_) => {
                waited += config.duration;
                warn!(
                    operation = %config.operation_name,
                    waited = ?waited,
                    "operation still running"
                );
            }
        }
    }
}
