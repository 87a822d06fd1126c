// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Forgiving field deserializers for records coming from the presence API.
//!
//! The API is loosely typed: counters sometimes arrive as strings, ids as
//! numbers, dates in more than one format. None of these should make a
//! whole response fail to parse.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::user::Role;
use crate::time_utils::parse_date;

/// A non-negative counter. Anything unusable becomes 0.
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_count).unwrap_or(0))
}

/// Coerce a JSON value to a count, truncating fractions and clamping.
pub fn coerce_count(value: &Value) -> u32 {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                v.min(u32::MAX as u64) as u32
            } else {
                n.as_f64().map(clamp_f64).unwrap_or(0)
            }
        }
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .map(|v| v.min(u32::MAX as u64) as u32)
                .or_else(|_| s.parse::<f64>().map(clamp_f64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

fn clamp_f64(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        v.trunc().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

/// An identifier sent either as a string or a number.
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

/// A required string; null or non-text values become `""`.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        _ => String::new(),
    })
}

/// An optional date; unparseable input becomes `None`.
pub fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => parse_date(&s),
        _ => None,
    })
}

/// An optional role; unknown roles become `None`.
pub fn role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s.parse().ok(),
        Some(Value::Number(n)) => n.as_u64().and_then(Role::from_index),
        _ => None,
    })
}

/// An optional string; blank or non-text values become `None`, numbers are kept as text.
pub fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
