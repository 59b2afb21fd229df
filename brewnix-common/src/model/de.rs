// brewnix-common/src/model/de.rs
//! Serde helpers shared by the Cask model's `Deserialize` impls.

use serde::de::{self, Deserializer, Unexpected};
use serde::Deserialize;
use serde_json::Value;

/// Homebrew writes single-element lists as a bare value (`"quit": "com.foo"`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged, expecting = "a value or an array of values")]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

/// `deserialize_with` adapter normalising [`OneOrMany`] to a list.
pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    OneOrMany::<T>::deserialize(deserializer).map(Vec::from)
}

/// Like [`one_or_many`], for keys that may be absent or `null`.
pub fn optional_one_or_many<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<OneOrMany<T>>::deserialize(deserializer)?.map(Vec::from))
}

/// A key that must be present and hold `null`.
pub fn null<'de, D>(deserializer: D) -> Result<(), D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        Ok(())
    } else {
        Err(de::Error::invalid_type(unexpected(&value), &"null"))
    }
}

/// Reads a string and keeps it only if `valid` accepts it.
pub fn validated_string<'de, D>(
    deserializer: D,
    valid: impl Fn(&str) -> bool,
    expected: &'static str,
) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if valid(&s) {
        Ok(s)
    } else {
        Err(de::Error::invalid_value(Unexpected::Str(&s), &expected))
    }
}

/// Serde's description of a JSON value, as used in its own error messages.
pub fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => match (n.as_u64(), n.as_i64(), n.as_f64()) {
            (Some(u), _, _) => Unexpected::Unsigned(u),
            (None, Some(i), _) => Unexpected::Signed(i),
            (None, None, Some(f)) => Unexpected::Float(f),
            _ => Unexpected::Other("number"),
        },
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
