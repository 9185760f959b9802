use crate::core::domain::{Address, DraftTransaction, GasPrice};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A discrete command aimed at a send form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum SendIntent {
    ChangeFrom(Address),
    ChangeAmount(#[serde(with = "crate::tools::serdes::decimal_number")] Decimal),
    ChangeTo(String),
    ChangeGasPrice(GasPrice),
    ConfirmSendTransaction,
}

impl SendIntent {
    pub fn name(&self) -> &'static str {
        match self {
            SendIntent::ChangeFrom(_) => "change_from",
            SendIntent::ChangeAmount(_) => "change_amount",
            SendIntent::ChangeTo(_) => "change_to",
            SendIntent::ChangeGasPrice(_) => "change_gas_price",
            SendIntent::ConfirmSendTransaction => "confirm_send_transaction",
        }
    }
}

/// The confirm intent as handed to the execution collaborator: the attempt
/// number plus the draft frozen at submit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmSendRequest {
    pub attempt: u64,
    pub draft: DraftTransaction,
}
