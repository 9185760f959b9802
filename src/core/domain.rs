use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An account address, kept exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Ordered addresses the user may send from. Read-only to the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressList(Vec<Address>);

impl AddressList {
    pub fn new(addresses: Vec<Address>) -> Self {
        Self(addresses)
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.0.iter().any(|a| a == address)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<A: Into<Address>> From<Vec<A>> for AddressList {
    fn from(addresses: Vec<A>) -> Self {
        Self(addresses.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Address>> FromIterator<A> for AddressList {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Gas price as handed in by the caller.
///
/// Opaque to the form: compared and passed through to the executor, never
/// interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GasPrice(serde_json::Value);

impl GasPrice {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl fmt::Display for GasPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

impl From<u64> for GasPrice {
    fn from(v: u64) -> Self {
        Self(serde_json::Value::from(v))
    }
}

impl From<&str> for GasPrice {
    fn from(v: &str) -> Self {
        Self(serde_json::Value::from(v))
    }
}

impl From<serde_json::Value> for GasPrice {
    fn from(v: serde_json::Value) -> Self {
        Self(v)
    }
}

/// The in-progress transaction being edited on the send form.
///
/// Every field starts absent. `from` and `to` also read `false` as absent so
/// state written by older front-ends keeps loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftTransaction {
    #[serde(default, with = "crate::tools::serdes::false_as_absent")]
    pub from: Option<Address>,
    #[serde(default, with = "crate::tools::serdes::false_as_absent")]
    pub to: Option<String>,
    #[serde(default, with = "crate::tools::serdes::decimal_number_option")]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub gas_price: Option<GasPrice>,
}

impl DraftTransaction {
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none() && self.amount.is_none() && self.gas_price.is_none()
    }
}
