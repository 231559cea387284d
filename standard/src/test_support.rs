//! Test-only helpers for building values.

use serde_json::json;

use crate::pattern::Pattern;
use crate::value::Value;

/// Convert a `serde_json::json!` literal into a [`Value`].
pub fn value(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// Build a `RegExp` value from a `/source/flags` literal.
pub fn re(literal: &str) -> Value {
    Value::RegExp(Pattern::parse(literal).expect("pattern literal"))
}

/// Build an array of string values.
pub fn strings(items: &[&str]) -> Value {
    Value::Array(items.iter().copied().map(Value::from).collect())
}

/// The `{ appStore: { trigger: "fire" } }` store used across projection tests.
pub fn app_store() -> Value {
    value(json!({"appStore": {"trigger": "fire", "count": 3}}))
}
