//! String and pattern matching helpers.
//!
//! Case folding uses full Unicode uppercasing, so `"straße"` and `"STRASSE"`
//! compare equal.

use serde::{Deserialize, Serialize};

use crate::value::{Value, number_to_string};

/// Options for the plain-string branch of [`one_of_with`] and [`all_of_with`].
///
/// Pattern candidates are unaffected; they match according to their own flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Compare plain-string candidates ignoring case.
    pub fold_case: bool,
}

impl MatchOptions {
    pub fn case_insensitive() -> Self {
        Self { fold_case: true }
    }
}

fn fold(text: &str) -> String {
    text.to_uppercase()
}

fn candidate_matches(text: &str, candidate: &Value, options: MatchOptions) -> bool {
    match candidate {
        Value::RegExp(pattern) => pattern.is_match(text),
        Value::String(literal) if options.fold_case => fold(literal) == fold(text),
        Value::String(literal) => literal == text,
        _ => false,
    }
}

/// True if `value` is a string and at least one candidate matches it.
///
/// Plain-string candidates must be exactly equal. `candidates` must be an
/// array; anything else (or an empty array) yields `false`.
pub fn one_of(value: &Value, candidates: &Value) -> bool {
    one_of_with(value, candidates, MatchOptions::default())
}

pub fn one_of_with(value: &Value, candidates: &Value, options: MatchOptions) -> bool {
    let (Some(text), Some(candidates)) = (value.as_str(), candidates.as_array()) else {
        return false;
    };
    candidates
        .iter()
        .any(|candidate| candidate_matches(text, candidate, options))
}

/// True if `value` is a string and every candidate matches it.
///
/// An empty candidate list is never a match.
pub fn all_of(value: &Value, candidates: &Value) -> bool {
    all_of_with(value, candidates, MatchOptions::default())
}

pub fn all_of_with(value: &Value, candidates: &Value, options: MatchOptions) -> bool {
    let (Some(text), Some(candidates)) = (value.as_str(), candidates.as_array()) else {
        return false;
    };
    if candidates.is_empty() {
        return false;
    }
    candidates
        .iter()
        .all(|candidate| candidate_matches(text, candidate, options))
}

/// Case-insensitive containment.
///
/// - Two strings: substring search.
/// - An array haystack: some element equals `needle` (case-folded when both
///   are strings, exact otherwise).
pub fn contains(haystack: &Value, needle: &Value) -> bool {
    match (haystack, needle) {
        (Value::String(text), Value::String(part)) => fold(text).contains(&fold(part)),
        (Value::Array(items), _) => items.iter().any(|item| element_matches(item, needle)),
        _ => false,
    }
}

fn element_matches(item: &Value, needle: &Value) -> bool {
    match (item, needle) {
        (Value::String(left), Value::String(right)) => fold(left) == fold(right),
        _ => item == needle,
    }
}

/// Run `pattern` against `value` without failing on type mismatch.
///
/// Only a non-empty string tested by a `RegExp` can be `true`.
pub fn test(value: &Value, pattern: &Value) -> bool {
    match (value, pattern) {
        (Value::String(text), Value::RegExp(pattern)) if !text.is_empty() => {
            pattern.is_match(text)
        }
        _ => false,
    }
}

/// Case-insensitive equality of two strings. No coercion.
pub fn is_equivalent(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::String(left), Value::String(right)) => fold(left) == fold(right),
        _ => false,
    }
}

pub use self::is_equivalent as is_same;

/// Like [`is_equivalent`], but numbers are first rendered in decimal form so
/// `100` and `"100"` are similar.
pub fn is_similar(left: &Value, right: &Value) -> bool {
    is_equivalent(&coerce_number(left), &coerce_number(right))
}

fn coerce_number(value: &Value) -> Value {
    match value {
        Value::Number(number) => Value::String(number_to_string(*number)),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{re, strings};
    use serde_json::json;

    #[test]
    fn one_of_literal_and_pattern_candidates() {
        let hello = Value::from("hello");
        assert!(one_of(&hello, &strings(&["hello", "world"])));
        assert!(one_of(&hello, &Value::Array(vec![re("/world/i"), re("/hell/i")])));
        assert!(one_of(
            &Value::from("hello world"),
            &Value::Array(vec![re("/world/i"), re("/hell/i")])
        ));
    }

    #[test]
    fn one_of_rejects_non_strings_and_non_arrays() {
        assert!(!one_of(&Value::from(1), &Value::from(json!([1]))));
        assert!(!one_of(&Value::from("a"), &Value::from("a")));
        assert!(!one_of(&Value::from("a"), &Value::Array(Vec::new())));
    }

    #[test]
    fn plain_string_branch_is_exact_by_default() {
        let value = Value::from("Hello");
        let candidates = strings(&["hello"]);
        assert!(!one_of(&value, &candidates));
        assert!(!all_of(&value, &candidates));
    }

    #[test]
    fn plain_string_branch_folds_case_when_enabled() {
        let value = Value::from("Hello");
        let candidates = strings(&["hello", "HELLO"]);
        assert!(one_of_with(&value, &candidates, MatchOptions::case_insensitive()));
        assert!(all_of_with(&value, &candidates, MatchOptions::case_insensitive()));
    }

    #[test]
    fn fold_case_does_not_change_pattern_semantics() {
        let value = Value::from("HELLO");
        let candidates = Value::Array(vec![re("/hello/")]);
        assert!(!one_of_with(&value, &candidates, MatchOptions::case_insensitive()));
    }

    #[test]
    fn all_of_requires_every_candidate() {
        let hello = Value::from("hello");
        assert!(!all_of(&hello, &strings(&["hello", "world"])));
        assert!(!all_of(&hello, &Value::Array(vec![re("/world/i"), re("/hell/i")])));
        assert!(all_of(
            &Value::from("hello world"),
            &Value::Array(vec![re("/world/i"), re("/hell/i")])
        ));
    }

    #[test]
    fn all_of_empty_candidates_is_false() {
        assert!(!all_of(&Value::from("hello"), &Value::Array(Vec::new())));
        assert!(!all_of(&Value::from(""), &Value::Array(Vec::new())));
        assert!(!all_of(&Value::from("hello"), &Value::Null));
    }

    #[test]
    fn all_of_counts_unsupported_candidates_as_misses() {
        let candidates = Value::Array(vec![re("/hell/"), Value::from(1)]);
        assert!(!all_of(&Value::from("hello"), &candidates));
    }

    #[test]
    fn contains_strings_is_case_insensitive_substring() {
        assert!(contains(&Value::from("hello"), &Value::from("HELL")));
        assert!(!contains(&Value::from("hello"), &Value::from("world")));
    }

    #[test]
    fn contains_array_matches_whole_elements() {
        assert!(contains(&strings(&["foo", "bar"]), &Value::from("FOO")));
        assert!(contains(&Value::from(json!([1, "hello"])), &Value::from("HELLO")));
        assert!(contains(&Value::from(json!([1, 2])), &Value::from(1)));
        assert!(!contains(&strings(&["hello"]), &Value::from("HELL")));
        assert!(!contains(&Value::from(json!(["1"])), &Value::from(1)));
    }

    #[test]
    fn contains_other_shapes_is_false() {
        assert!(!contains(&Value::from(json!({"foo": 1})), &Value::from("foo")));
        assert!(!contains(&Value::from("1"), &Value::from(1)));
    }

    #[test]
    fn test_requires_unempty_string_and_pattern() {
        assert!(!test(&Value::from(12), &re("/12/i")));
        assert!(test(&Value::from("12"), &re("/12/i")));
        assert!(!test(&Value::from(""), &re("/.*/")));
        assert!(!test(&Value::from("12"), &Value::from("12")));
    }

    #[test]
    fn equivalent_ignores_case_without_coercion() {
        assert!(is_equivalent(&Value::from("hello"), &Value::from("HELLO")));
        assert!(!is_equivalent(&Value::from("1"), &Value::from(1)));
        assert!(is_same(&Value::from("a"), &Value::from("A")));
    }

    #[test]
    fn similar_coerces_numbers() {
        assert!(is_similar(&Value::from("hello"), &Value::from("HELLO")));
        assert!(is_similar(&Value::from("1"), &Value::from(1)));
        assert!(is_similar(&Value::from(100), &Value::from("100")));
        assert!(is_similar(&Value::from(1.5), &Value::from("1.5")));
        assert!(!is_similar(&Value::from(true), &Value::from("true")));
    }

    #[test]
    fn similar_compares_large_and_tiny_numbers_in_exponent_form() {
        assert!(is_similar(&Value::from(1e21), &Value::from("1e+21")));
        assert!(is_similar(&Value::from(1e21), &Value::from("1E+21")));
        assert!(!is_similar(&Value::from(1e21), &Value::from("1000000000000000000000")));
        assert!(is_similar(&Value::from(1.5e-7), &Value::from("1.5e-7")));
    }
}
