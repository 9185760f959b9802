pub mod config;
pub mod domain;
pub mod errors;
pub mod validation;

pub use domain::{Address, AddressList, DraftTransaction, GasPrice};
pub use errors::{SendTokenError, SubmissionError};
