//! Draft transaction form model
//!
//! One `SendTokenForm` per open send screen. It owns the draft fields and the
//! confirmation status of the latest submit, and hands confirm requests to an
//! `ExecutionSink`. Results come back through `on_submission_result`.

use crate::core::config::FormDefaults;
use crate::core::domain::{Address, AddressList, DraftTransaction, GasPrice};
use crate::core::validation::{check_draft, DraftIssue};
use crate::send_token::intent::{ConfirmSendRequest, SendIntent};
use crate::send_token::status::{ConfirmationStatus, SubmissionResult};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Receives confirm requests emitted by [`SendTokenForm::submit`].
pub trait ExecutionSink {
    fn confirm(&mut self, request: ConfirmSendRequest);
}

/// Records every request; handy when the caller drives execution itself.
impl ExecutionSink for Vec<ConfirmSendRequest> {
    fn confirm(&mut self, request: ConfirmSendRequest) {
        self.push(request);
    }
}

/// Everything a presentation layer needs to draw the send screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendTokenView {
    pub from: Option<Address>,
    pub to: Option<String>,
    #[serde(with = "crate::tools::serdes::decimal_number_option")]
    pub amount: Option<Decimal>,
    pub gas_price: Option<GasPrice>,
    pub address_list: AddressList,
    pub confirmation_loading: bool,
    pub confirmation_error: Option<String>,
    pub confirmation_message: Option<String>,
    pub issues: Vec<DraftIssue>,
}

#[derive(Debug, Clone, Default)]
pub struct SendTokenForm {
    draft: DraftTransaction,
    status: ConfirmationStatus,
    address_list: AddressList,
    attempt: u64,
}

impl SendTokenForm {
    /// Empty draft, idle status.
    pub fn new(address_list: AddressList) -> Self {
        Self { address_list, ..Default::default() }
    }

    /// Empty draft pre-filled with configured defaults.
    pub fn with_defaults(address_list: AddressList, defaults: &FormDefaults) -> Self {
        let mut form = Self::new(address_list);
        form.draft.gas_price = defaults.gas_price.clone();
        form
    }

    pub fn draft(&self) -> &DraftTransaction {
        &self.draft
    }

    pub fn status(&self) -> &ConfirmationStatus {
        &self.status
    }

    pub fn address_list(&self) -> &AddressList {
        &self.address_list
    }

    /// Number of submits accepted so far; also the id of the latest attempt.
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// Swap in a freshly resolved address list. The current selection is kept
    /// even if the new list no longer contains it.
    pub fn set_address_list(&mut self, address_list: AddressList) {
        debug!(count = address_list.len(), "address list replaced");
        self.address_list = address_list;
    }

    /// Select the source address. Only addresses from the supplied list are
    /// accepted.
    pub fn set_from(&mut self, address: Address) -> bool {
        if !self.address_list.contains(&address) {
            warn!(%address, "ignoring source address outside the address list");
            return false;
        }
        self.edit("from", |draft| draft.from = Some(address))
    }

    pub fn set_amount(&mut self, amount: Decimal) -> bool {
        self.edit("amount", |draft| draft.amount = Some(amount))
    }

    pub fn set_to(&mut self, to: impl Into<String>) -> bool {
        let to = to.into();
        self.edit("to", |draft| draft.to = Some(to))
    }

    pub fn set_gas_price(&mut self, gas_price: GasPrice) -> bool {
        self.edit("gas_price", |draft| draft.gas_price = Some(gas_price))
    }

    fn edit(&mut self, field: &'static str, apply: impl FnOnce(&mut DraftTransaction)) -> bool {
        if self.status.loading() {
            warn!(field, attempt = self.attempt, "ignoring edit while a submission is in flight");
            return false;
        }
        apply(&mut self.draft);
        // editing after a finished attempt starts a new draft round
        if self.status.is_terminal() {
            self.status = ConfirmationStatus::Idle;
        }
        debug!(field, "draft field updated");
        true
    }

    /// Emit one confirm request for the current draft and enter `Loading`.
    ///
    /// Returns `false` without emitting anything if a submission is already
    /// in flight.
    pub fn submit<S: ExecutionSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        if self.status.loading() {
            warn!(attempt = self.attempt, "submit ignored: previous submission still loading");
            return false;
        }
        self.attempt += 1;
        self.status = ConfirmationStatus::Loading;
        info!(
            attempt = self.attempt,
            from = ?self.draft.from,
            to = ?self.draft.to,
            amount = ?self.draft.amount,
            "confirming send transaction"
        );
        sink.confirm(ConfirmSendRequest { attempt: self.attempt, draft: self.draft.clone() });
        true
    }

    /// Apply the executor's verdict for `attempt`.
    ///
    /// Results for anything but the in-flight attempt are dropped.
    pub fn on_submission_result(&mut self, attempt: u64, result: SubmissionResult) -> bool {
        if !self.status.loading() || attempt != self.attempt {
            warn!(attempt, current = self.attempt, "dropping stale submission result");
            return false;
        }
        match &result {
            SubmissionResult::Message(message) => info!(attempt, %message, "submission succeeded"),
            SubmissionResult::Error(error) => warn!(attempt, %error, "submission failed"),
        }
        self.status = result.into();
        true
    }

    /// Reducer-style entry point: route `intent` to the matching operation.
    pub fn dispatch<S: ExecutionSink + ?Sized>(&mut self, intent: SendIntent, sink: &mut S) -> bool {
        debug!(intent = intent.name(), "dispatch");
        match intent {
            SendIntent::ChangeFrom(address) => self.set_from(address),
            SendIntent::ChangeAmount(amount) => self.set_amount(amount),
            SendIntent::ChangeTo(to) => self.set_to(to),
            SendIntent::ChangeGasPrice(gas_price) => self.set_gas_price(gas_price),
            SendIntent::ConfirmSendTransaction => self.submit(sink),
        }
    }

    pub fn issues(&self) -> Vec<DraftIssue> {
        check_draft(&self.draft, &self.address_list)
    }

    pub fn view(&self) -> SendTokenView {
        SendTokenView {
            from: self.draft.from.clone(),
            to: self.draft.to.clone(),
            amount: self.draft.amount,
            gas_price: self.draft.gas_price.clone(),
            address_list: self.address_list.clone(),
            confirmation_loading: self.status.loading(),
            confirmation_error: self.status.error().map(str::to_string),
            confirmation_message: self.status.message().map(str::to_string),
            issues: self.issues(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form() -> SendTokenForm {
        SendTokenForm::new(AddressList::from(vec!["0x1", "0x3"]))
    }

    #[test]
    fn test_new_form_is_idle_and_empty() {
        let form = form();
        assert!(form.draft().is_empty());
        assert_eq!(form.status(), &ConfirmationStatus::Idle);
        assert_eq!(form.attempt(), 0);
    }

    #[test]
    fn test_with_defaults_prefills_gas_price() {
        let defaults = FormDefaults { gas_price: Some(GasPrice::from(21000)) };
        let form = SendTokenForm::with_defaults(AddressList::default(), &defaults);
        assert_eq!(form.draft().gas_price, Some(GasPrice::from(21000)));
    }

    #[test]
    fn test_set_from_rejects_unknown_address() {
        let mut form = form();
        assert!(!form.set_from(Address::from("0x9")));
        assert_eq!(form.draft().from, None);
        assert!(form.set_from(Address::from("0x3")));
        assert_eq!(form.draft().from, Some(Address::from("0x3")));
    }

    #[test]
    fn test_submit_while_loading_emits_nothing() {
        let mut form = form();
        let mut sink = Vec::new();
        assert!(form.submit(&mut sink));
        assert!(!form.submit(&mut sink));
        assert_eq!(sink.len(), 1);
        assert_eq!(form.attempt(), 1);
    }

    #[test]
    fn test_edits_ignored_while_loading() {
        let mut form = form();
        form.set_to("0x2");
        let mut sink = Vec::new();
        form.submit(&mut sink);
        assert!(!form.set_to("0x4"));
        assert!(!form.set_amount(Decimal::ONE));
        assert_eq!(form.draft().to.as_deref(), Some("0x2"));
        assert_eq!(form.draft().amount, None);
    }

    #[test]
    fn test_edit_after_result_returns_to_idle() {
        let mut form = form();
        let mut sink = Vec::new();
        form.submit(&mut sink);
        form.on_submission_result(1, SubmissionResult::Error("nonce too low".to_string()));
        assert_eq!(form.status().error(), Some("nonce too low"));

        assert!(form.set_amount(Decimal::from(2)));
        assert_eq!(form.status(), &ConfirmationStatus::Idle);
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut form = form();
        assert!(!form.on_submission_result(0, SubmissionResult::Message("x".to_string())));

        let mut sink = Vec::new();
        form.submit(&mut sink);
        assert!(!form.on_submission_result(7, SubmissionResult::Message("x".to_string())));
        assert!(form.status().loading());
        assert!(form.on_submission_result(1, SubmissionResult::Message("x".to_string())));
        assert!(!form.on_submission_result(1, SubmissionResult::Error("late".to_string())));
        assert_eq!(form.status().message(), Some("x"));
    }

    #[test]
    fn test_resubmit_after_error_clears_it() {
        let mut form = form();
        let mut sink = Vec::new();
        form.submit(&mut sink);
        form.on_submission_result(1, SubmissionResult::Error("insufficient funds".to_string()));
        assert!(form.submit(&mut sink));
        assert_eq!(form.status(), &ConfirmationStatus::Loading);
        assert_eq!(sink.iter().map(|r| r.attempt).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_dispatch_routes_intents() {
        let mut form = form();
        let mut sink = Vec::new();
        assert!(form.dispatch(SendIntent::ChangeFrom(Address::from("0x1")), &mut sink));
        assert!(form.dispatch(SendIntent::ChangeTo("0x2".to_string()), &mut sink));
        assert!(form.dispatch(SendIntent::ChangeAmount(Decimal::from(5)), &mut sink));
        assert!(form.dispatch(SendIntent::ChangeGasPrice(GasPrice::from(21000)), &mut sink));
        assert!(form.dispatch(SendIntent::ConfirmSendTransaction, &mut sink));
        assert!(!form.dispatch(SendIntent::ConfirmSendTransaction, &mut sink));
        assert_eq!(sink.len(), 1);
        assert_eq!(&sink[0].draft, form.draft());
    }

    #[test]
    fn test_view_mirrors_state() {
        let mut form = form();
        form.set_from(Address::from("0x1"));
        let mut sink = Vec::new();
        form.submit(&mut sink);
        form.on_submission_result(1, SubmissionResult::Message("0xabc".to_string()));

        let view = form.view();
        assert_eq!(view.from, Some(Address::from("0x1")));
        assert!(!view.confirmation_loading);
        assert_eq!(view.confirmation_message.as_deref(), Some("0xabc"));
        assert_eq!(view.confirmation_error, None);
        assert_eq!(
            view.issues,
            vec![DraftIssue::MissingTo, DraftIssue::MissingAmount, DraftIssue::MissingGasPrice]
        );
    }

    #[test]
    fn test_replacing_address_list_keeps_selection() {
        let mut form = form();
        form.set_from(Address::from("0x1"));
        form.set_address_list(AddressList::from(vec!["0x5"]));
        assert_eq!(form.draft().from, Some(Address::from("0x1")));
        assert_eq!(form.issues()[0], DraftIssue::FromNotInAddressList);
    }
}
