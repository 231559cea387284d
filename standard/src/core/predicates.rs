//! Single-value predicates built on the type classifier.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::matching::one_of;
use crate::core::tag::{Tag, type_of};
use crate::errors::Error;
use crate::pattern::Pattern;
use crate::value::Value;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+@[A-Za-z0-9_.\-]+\.[A-Za-z]{2,4}$").expect("email regex")
});

static WEEKDAY_NAMES: LazyLock<Value> = LazyLock::new(|| {
    weekday_patterns(&[
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
        "sunday",
    ])
});

static WEEKDAY_ABBREVIATIONS: LazyLock<Value> = LazyLock::new(|| {
    weekday_patterns(&["mon", "tue", "wed", "thu", "fri", "sat", "sun"])
});

fn weekday_patterns(names: &[&str]) -> Value {
    Value::Array(
        names
            .iter()
            .map(|name| Value::RegExp(Pattern::new(name, "i").expect("weekday pattern")))
            .collect(),
    )
}

pub fn is_string(value: &Value) -> bool {
    type_of(value) == Tag::String
}

pub fn is_number(value: &Value) -> bool {
    type_of(value) == Tag::Number
}

pub fn is_boolean(value: &Value) -> bool {
    type_of(value) == Tag::Boolean
}

pub fn is_object(value: &Value) -> bool {
    type_of(value) == Tag::Object
}

pub fn is_array(value: &Value) -> bool {
    type_of(value) == Tag::Array
}

pub fn is_regexp(value: &Value) -> bool {
    type_of(value) == Tag::RegExp
}

pub fn is_null(value: &Value) -> bool {
    type_of(value) == Tag::Null
}

pub fn is_undefined(value: &Value) -> bool {
    type_of(value) == Tag::Undefined
}

pub fn is_function(value: &Value) -> bool {
    type_of(value) == Tag::Function
}

/// String with at least one character. Whitespace counts as content.
pub fn is_unempty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|text| !text.is_empty())
}

/// Object with at least one entry.
pub fn is_unempty_object(value: &Value) -> bool {
    value.as_object().is_some_and(|map| !map.is_empty())
}

/// Array with at least one element.
pub fn is_unempty_array(value: &Value) -> bool {
    value.as_array().is_some_and(|items| !items.is_empty())
}

pub use self::is_unempty_array as is_uarray;
pub use self::is_unempty_object as is_uobject;
pub use self::is_unempty_string as is_ustring;

/// Loose `local@domain.tld` shape check, not RFC 5322 validation.
///
/// `local` and `domain` are runs of alphanumerics, `_`, `-` and `.`; the
/// top-level domain is 2 to 4 letters.
pub fn is_email(value: &Value) -> bool {
    value.as_str().is_some_and(|text| EMAIL_RE.is_match(text))
}

/// Case-insensitive weekday check using substring semantics, so `"Tues"`,
/// `"THURSDAY"` and `"sat."` all pass.
pub fn is_day_of_week(value: &Value) -> bool {
    one_of(value, &WEEKDAY_NAMES) || one_of(value, &WEEKDAY_ABBREVIATIONS)
}

/// Named predicate, used where the predicate is picked at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    String,
    Number,
    Boolean,
    Object,
    Array,
    RegExp,
    Null,
    Undefined,
    Function,
    Email,
    DayOfWeek,
    UnemptyString,
    UnemptyObject,
    UnemptyArray,
}

impl Predicate {
    pub fn evaluate(self, value: &Value) -> bool {
        match self {
            Predicate::String => is_string(value),
            Predicate::Number => is_number(value),
            Predicate::Boolean => is_boolean(value),
            Predicate::Object => is_object(value),
            Predicate::Array => is_array(value),
            Predicate::RegExp => is_regexp(value),
            Predicate::Null => is_null(value),
            Predicate::Undefined => is_undefined(value),
            Predicate::Function => is_function(value),
            Predicate::Email => is_email(value),
            Predicate::DayOfWeek => is_day_of_week(value),
            Predicate::UnemptyString => is_unempty_string(value),
            Predicate::UnemptyObject => is_unempty_object(value),
            Predicate::UnemptyArray => is_unempty_array(value),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Predicate::String => "string",
            Predicate::Number => "number",
            Predicate::Boolean => "boolean",
            Predicate::Object => "object",
            Predicate::Array => "array",
            Predicate::RegExp => "regexp",
            Predicate::Null => "null",
            Predicate::Undefined => "undefined",
            Predicate::Function => "function",
            Predicate::Email => "email",
            Predicate::DayOfWeek => "day-of-week",
            Predicate::UnemptyString => "unempty-string",
            Predicate::UnemptyObject => "unempty-object",
            Predicate::UnemptyArray => "unempty-array",
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts kebab-case names plus the short `ustring`/`uobject`/`uarray` forms.
impl FromStr for Predicate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let predicate = match s.to_lowercase().replace('_', "-").as_str() {
            "string" => Predicate::String,
            "number" => Predicate::Number,
            "boolean" => Predicate::Boolean,
            "object" => Predicate::Object,
            "array" => Predicate::Array,
            "regexp" => Predicate::RegExp,
            "null" => Predicate::Null,
            "undefined" => Predicate::Undefined,
            "function" => Predicate::Function,
            "email" => Predicate::Email,
            "day-of-week" => Predicate::DayOfWeek,
            "unempty-string" | "ustring" => Predicate::UnemptyString,
            "unempty-object" | "uobject" => Predicate::UnemptyObject,
            "unempty-array" | "uarray" => Predicate::UnemptyArray,
            _ => return Err(Error::UnknownPredicate(s.to_string())),
        };
        Ok(predicate)
    }
}
