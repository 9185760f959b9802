use serde::{
    de::{self, Deserializer},
    ser::Serializer,
    Deserialize, Serialize,
};

/// Optional fields where older state used `false` for "nothing selected".
///
/// `null`, a missing key and `false` all read as `None`; `true` is rejected.
/// Serialization writes `null` for `None`.
pub mod false_as_absent {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Legacy<T> {
        Flag(bool),
        Value(T),
    }

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        match Option::<Legacy<T>>::deserialize(deserializer)? {
            None | Some(Legacy::Flag(false)) => Ok(None),
            Some(Legacy::Flag(true)) => {
                Err(de::Error::custom("expected a value or `false`, found `true`"))
            }
            Some(Legacy::Value(v)) => Ok(Some(v)),
        }
    }
}

/// Serialize a Decimal as a JSON number
///
/// Whole values are written as integers, anything else as `f64`. Reading
/// accepts numbers and numeric strings.
pub mod decimal_number {
    use super::*;
    use rust_decimal::{prelude::ToPrimitive, Decimal};

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.fract().is_zero() {
            if let Some(whole) = value.to_i64() {
                return serializer.serialize_i64(whole);
            }
        }
        match value.to_f64() {
            Some(f) => serializer.serialize_f64(f),
            None => serializer.serialize_str(&value.to_string()),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        <Decimal as Deserialize>::deserialize(deserializer)
    }
}

/// `decimal_number` for optional fields
pub mod decimal_number_option {
    use super::*;
    use rust_decimal::Decimal;

    struct AsNumber<'a>(&'a Decimal);

    impl Serialize for AsNumber<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            super::decimal_number::serialize(self.0, serializer)
        }
    }

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_some(&AsNumber(v)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Decimal>::deserialize(deserializer)
    }
}
