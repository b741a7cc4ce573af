// ABOUTME: Lenient serde readers for the persisted profile
// ABOUTME: Blank or malformed values read as absent instead of failing the whole profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

//! The profile blob has no schema version. Form inputs were historically
//! persisted as strings (`"age": "30"`) and unselected options as `""`, so
//! every reader here maps blanks and unparseable values to `None`.

use super::food::Constitution;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn read_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer)
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Number or numeric string, anything else is `None`
pub(super) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(read_value(deserializer)?.as_ref().and_then(as_f64))
}

/// Non-negative whole number or numeric string
pub(super) fn whole_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(read_value(deserializer)?
        .as_ref()
        .and_then(as_f64)
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n.round() as u32))
}

/// Non-blank string
pub(super) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match read_value(deserializer)? {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

/// List of strings; non-string entries are dropped
pub(super) fn text_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match read_value(deserializer)? {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

/// Personal constitution; the `tridoshic` food tag reads as absent
pub(super) fn constitution<'de, D>(deserializer: D) -> Result<Option<Constitution>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match read_value(deserializer)? {
        Some(Value::String(s)) => s
            .parse::<Constitution>()
            .ok()
            .filter(|constitution| !constitution.is_wildcard()),
        _ => None,
    })
}
