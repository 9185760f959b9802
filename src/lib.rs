// src/lib.rs
//! Draft-transaction form model for a "send token" screen.
//!
//! A [`send_token::SendTokenForm`] holds the fields being edited, accepts at
//! most one in-flight confirm, and surfaces the executor's verdict.
//! [`send_token::SendTokenSession`] wires a form to a
//! [`blockchain::TransactionExecutor`] on a tokio runtime.

pub mod blockchain;
pub mod cli;
pub mod core;
pub mod send_token;
pub mod tools;

pub use crate::core::{Address, AddressList, DraftTransaction, GasPrice, SendTokenError, SubmissionError};
pub use send_token::{ConfirmationStatus, SendIntent, SendTokenForm, SendTokenSession, SubmissionResult};
