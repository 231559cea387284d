//! Defaulting and checked access.
//!
//! None of these fail: a missing or mistyped input is replaced by a default.

use crate::core::tag::Tag;
use crate::value::{Map, Value};

/// Return `value` unless it is nullish, then `fallback` unless it is nullish,
/// then an empty array.
pub fn define(value: Value, fallback: Value) -> Value {
    if !value.is_nullish() {
        value
    } else if !fallback.is_nullish() {
        fallback
    } else {
        Value::Array(Vec::new())
    }
}

/// Return `value` if its tag is `expected`, otherwise a default.
///
/// `expected` is case-insensitive and defaults to `"array"` when `None`. An
/// unrecognised tag name never matches. Resolution order:
///
/// 1. `value`, when its tag matches;
/// 2. `fallback`, when it is not nullish;
/// 3. an empty object for `"object"`, an empty array for `"array"`;
/// 4. `Null`.
pub fn check(value: Value, expected: Option<&str>, fallback: Value) -> Value {
    let expected = match expected {
        None => Some(Tag::Array),
        Some(name) => name.parse::<Tag>().ok(),
    };
    if expected == Some(value.tag()) {
        return value;
    }
    if !fallback.is_nullish() {
        return fallback;
    }
    match expected {
        Some(Tag::Object) => Value::Object(Map::new()),
        Some(Tag::Array) => Value::Array(Vec::new()),
        _ => Value::Null,
    }
}

/// Element of `sequence` at `index`, or `fallback` (else `Null`) when the
/// access is invalid.
///
/// Valid accesses need an array and an integral numeric index in
/// `[-len, len - 1]`; negative indices count from the end.
pub fn get(sequence: &Value, index: &Value, fallback: Value) -> Value {
    let element = match (sequence, index) {
        (Value::Array(items), Value::Number(index)) if index.fract() == 0.0 => {
            get_index(items, *index as i64)
        }
        _ => None,
    };
    match element {
        Some(element) => element.clone(),
        None if fallback.is_nullish() => Value::Null,
        None => fallback,
    }
}

/// Statically typed counterpart of [`get`].
pub fn get_index(items: &[Value], index: i64) -> Option<&Value> {
    let len = i64::try_from(items.len()).ok()?;
    let position = if index < 0 { index + len } else { index };
    if !(0..len).contains(&position) {
        return None;
    }
    usize::try_from(position).ok().and_then(|position| items.get(position))
}
