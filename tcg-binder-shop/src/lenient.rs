//! Deserializers for hand-edited JSON where numbers may be strings, ids may
//! be numbers, and flags may be any truthy value.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tcg_binder_core::text::parse_leading_float;

use crate::types::Product;

/// A number or numeric string; anything else is 0.
pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    let value = match Value::deserialize(d)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_leading_float(&s),
        _ => None,
    };
    Ok(value.filter(|v| v.is_finite()).unwrap_or(0.0))
}

/// Strings, numbers and booleans as text; null and containers as empty.
pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Like [`text`], but empty and missing values are `None`.
pub fn optional_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Bool(false) => None,
        other => Some(other.to_string()),
    })
}

/// JavaScript truthiness.
pub fn truthy<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Only a literal `true` counts.
pub fn strict_true<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(matches!(Value::deserialize(d)?, Value::Bool(true)))
}

/// A product list when the value is an array, otherwise nothing.
pub fn product_list<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<Product>>, D::Error> {
    match Value::deserialize(d)? {
        Value::Array(items) => items
            .into_iter()
            .map(Product::deserialize)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(None),
    }
}
