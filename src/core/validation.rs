//! Advisory checks on a draft transaction.
//!
//! These are hints for whatever presents the form. They never block an edit
//! or a submit; the execution collaborator has the final word.

use crate::core::domain::{AddressList, DraftTransaction};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

static HEX_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("Hardcoded regex should always compile"));

/// A problem a user would likely want to fix before submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftIssue {
    MissingFrom,
    FromNotInAddressList,
    MissingTo,
    MalformedTo,
    MissingAmount,
    NegativeAmount,
    MissingGasPrice,
}

impl fmt::Display for DraftIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            DraftIssue::MissingFrom => "No source address selected",
            DraftIssue::FromNotInAddressList => "Source address is not one of the available addresses",
            DraftIssue::MissingTo => "No destination address entered",
            DraftIssue::MalformedTo => "Destination is not a 0x-prefixed 20-byte hex address",
            DraftIssue::MissingAmount => "No amount entered",
            DraftIssue::NegativeAmount => "Amount must not be negative",
            DraftIssue::MissingGasPrice => "No gas price chosen",
        };
        f.write_str(msg)
    }
}

/// Whether `address` looks like a hex account address.
pub fn is_hex_address(address: &str) -> bool {
    HEX_ADDRESS.is_match(address)
}

/// Collect advisory issues for `draft`, in field order.
pub fn check_draft(draft: &DraftTransaction, addresses: &AddressList) -> Vec<DraftIssue> {
    let mut issues = Vec::new();

    match &draft.from {
        None => issues.push(DraftIssue::MissingFrom),
        Some(from) if !addresses.contains(from) => issues.push(DraftIssue::FromNotInAddressList),
        Some(_) => {}
    }

    match draft.to.as_deref().map(str::trim) {
        None | Some("") => issues.push(DraftIssue::MissingTo),
        Some(to) if !is_hex_address(to) => issues.push(DraftIssue::MalformedTo),
        Some(_) => {}
    }

    match draft.amount {
        None => issues.push(DraftIssue::MissingAmount),
        Some(amount) if amount < Decimal::ZERO => issues.push(DraftIssue::NegativeAmount),
        Some(_) => {}
    }

    if draft.gas_price.is_none() {
        issues.push(DraftIssue::MissingGasPrice);
    }

    issues
}
