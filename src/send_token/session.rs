//! A send form wired to an executor.
//!
//! The session owns its form exclusively. Accepted submits run the executor
//! on a tokio task; the verdict comes back over a channel and is applied by
//! the owner in `next_result`, so state is only ever touched from one place.
//! A call is never cancelled once started. Slow calls are only logged, and a
//! panicking executor is reported as a failed attempt.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::blockchain::TransactionExecutor;
use crate::core::config::SendTokenConfig;
use crate::core::domain::AddressList;
use crate::send_token::form::{ExecutionSink, SendTokenForm};
use crate::send_token::intent::{ConfirmSendRequest, SendIntent};
use crate::send_token::status::{ConfirmationStatus, SubmissionResult};
use crate::tools::async_support::{join_with_watchdog, TimeoutConfig};

type Outcome = (u64, SubmissionResult);

/// Spawns one executor call per confirm request.
struct SpawningSink {
    executor: Arc<dyn TransactionExecutor>,
    watch: TimeoutConfig,
    results: mpsc::UnboundedSender<Outcome>,
}

impl ExecutionSink for SpawningSink {
    fn confirm(&mut self, request: ConfirmSendRequest) {
        let executor = Arc::clone(&self.executor);
        let watch = self.watch.clone();
        let results = self.results.clone();
        tokio::spawn(async move {
            let ConfirmSendRequest { attempt, draft } = request;
            let name = executor.name().to_string();
            debug!(attempt, executor = %name, "executing draft");
            let call = tokio::spawn(async move { executor.execute(&draft).await });
            let result = match join_with_watchdog(call, &watch).await {
                Ok(outcome) => SubmissionResult::from(outcome),
                Err(join_err) => {
                    error!(attempt, executor = %name, %join_err, "executor task failed");
                    SubmissionResult::Error(format!("transaction executor failed: {}", join_err))
                }
            };
            if results.send((attempt, result)).is_err() {
                debug!(attempt, "session dropped before result arrived");
            }
        });
    }
}

pub struct SendTokenSession {
    form: SendTokenForm,
    sink: SpawningSink,
    results: mpsc::UnboundedReceiver<Outcome>,
}

impl SendTokenSession {
    /// `slow_warning` is how long a call may run before it is logged as slow.
    pub fn new(form: SendTokenForm, executor: Arc<dyn TransactionExecutor>, slow_warning: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            form,
            sink: SpawningSink {
                executor,
                watch: TimeoutConfig::new(slow_warning, "confirm_send_transaction"),
                results: tx,
            },
            results: rx,
        }
    }

    /// Fresh form built from `config` defaults.
    pub fn from_config(
        config: &SendTokenConfig,
        address_list: AddressList,
        executor: Arc<dyn TransactionExecutor>,
    ) -> Self {
        let form = SendTokenForm::with_defaults(address_list, &config.defaults);
        Self::new(form, executor, config.submission.slow_warning())
    }

    pub fn form(&self) -> &SendTokenForm {
        &self.form
    }

    pub fn status(&self) -> &ConfirmationStatus {
        self.form.status()
    }

    /// Apply one intent. Must run inside a tokio runtime, since an accepted
    /// confirm spawns the executor call.
    pub fn handle(&mut self, intent: SendIntent) -> bool {
        self.form.dispatch(intent, &mut self.sink)
    }

    /// Wait for the in-flight submission to finish and apply its result.
    ///
    /// Returns `None` right away when nothing is in flight.
    pub async fn next_result(&mut self) -> Option<&ConfirmationStatus> {
        if !self.form.status().loading() {
            return None;
        }
        while self.form.status().loading() {
            let Some((attempt, result)) = self.results.recv().await else {
                // `self.sink` keeps a sender and every call reports back, panics
                // included; only a runtime shutting down drops the task
                error!("result channel closed while loading");
                return None;
            };
            self.form.on_submission_result(attempt, result);
        }
        Some(self.form.status())
    }
}
