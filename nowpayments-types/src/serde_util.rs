//! Deserialization helpers for the vendor's loosely typed JSON.
//!
//! The API is inconsistent about numeric fields: `payment_id` arrives as a
//! string in some responses and as a number in others, and invoice amounts
//! come back as strings (`"price_amount": "1000"`). These helpers accept
//! either encoding.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    String(String),
}

/// Deserializes a `u64` from either a JSON number or a numeric string.
pub fn u64_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::<u64>::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// Deserializes an `f64` from either a JSON number or a numeric string.
pub fn f64_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::<f64>::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// Deserializes `Option<u64>`, accepting a number, a numeric string or null.
pub fn opt_u64_or_string<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString<u64>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::String(s)) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Deserializes `Option<f64>`, accepting a number, a numeric string or null.
pub fn opt_f64_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString<f64>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::String(s)) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Deserializes `Option<String>` from a string, a number or null.
///
/// Used for extra-id / memo style fields which the vendor emits as whichever
/// of the two it feels like.
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        String(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::String(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    }))
}
