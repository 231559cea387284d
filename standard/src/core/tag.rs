//! Classification of values into a closed set of type tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::value::Value;

/// Semantic kind of a [`Value`], rendered as a lowercase tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    String,
    Number,
    Boolean,
    Object,
    Array,
    RegExp,
    Null,
    Undefined,
    Function,
}

impl Tag {
    pub const ALL: [Tag; 9] = [
        Tag::String,
        Tag::Number,
        Tag::Boolean,
        Tag::Object,
        Tag::Array,
        Tag::RegExp,
        Tag::Null,
        Tag::Undefined,
        Tag::Function,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::String => "string",
            Tag::Number => "number",
            Tag::Boolean => "boolean",
            Tag::Object => "object",
            Tag::Array => "array",
            Tag::RegExp => "regexp",
            Tag::Null => "null",
            Tag::Undefined => "undefined",
            Tag::Function => "function",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive: `"Array"` and `"ARRAY"` both parse to [`Tag::Array`].
impl FromStr for Tag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Tag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == lowered)
            .ok_or_else(|| Error::UnknownTag(s.to_string()))
    }
}

/// Return the tag of `value`, derived from its variant alone.
pub fn type_of(value: &Value) -> Tag {
    match value {
        Value::Undefined => Tag::Undefined,
        Value::Null => Tag::Null,
        Value::Bool(_) => Tag::Boolean,
        Value::Number(_) => Tag::Number,
        Value::String(_) => Tag::String,
        Value::RegExp(_) => Tag::RegExp,
        Value::Array(_) => Tag::Array,
        Value::Object(_) => Tag::Object,
        Value::Function(_) => Tag::Function,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;
    use crate::value::{Callable, Map};

    #[test]
    fn classifies_every_variant() {
        let cases = [
            (Value::from("foo"), "string"),
            (Value::from(1), "number"),
            (Value::Bool(true), "boolean"),
            (Value::Null, "null"),
            (Value::RegExp(Pattern::new("foo", "").expect("pattern")), "regexp"),
            (Value::Object(Map::new()), "object"),
            (Value::Array(Vec::new()), "array"),
            (Value::Undefined, "undefined"),
            (Value::Function(Callable::new(|_| Value::Undefined)), "function"),
        ];
        for (value, expected) in cases {
            assert_eq!(type_of(&value).as_str(), expected, "{:?}", value);
        }
    }

    #[test]
    fn array_is_never_object() {
        assert_eq!(type_of(&Value::Array(vec![Value::Null])), Tag::Array);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("ARRAY".parse::<Tag>().expect("tag"), Tag::Array);
        assert_eq!("RegExp".parse::<Tag>().expect("tag"), Tag::RegExp);
        assert!(matches!("date".parse::<Tag>(), Err(Error::UnknownTag(_))));
    }

    #[test]
    fn serde_names_match_display() {
        for tag in Tag::ALL {
            let rendered = serde_json::to_string(&tag).expect("serialize");
            assert_eq!(rendered, format!("\"{}\"", tag));
        }
    }
}
