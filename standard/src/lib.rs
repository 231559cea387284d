//! Predicates, safe defaults and store projection over dynamically typed values.
//!
//! Everything operates on [`Value`], a closed tagged union of the usual
//! dynamic kinds (`undefined`, `null`, booleans, numbers, strings, patterns,
//! arrays, objects and functions). The crate is split as:
//!
//! - **[`core`]**: Pure logic (classification, predicates, matching,
//!   defaulting, projection). No I/O, never fails.
//! - **[`io`]**: Config and argument loading for the CLI.
//!
//! The common functions are re-exported at the crate root:
//!
//! ```
//! use standard::{Mapping, Value, check, derive, is_email};
//! use serde_json::json;
//!
//! assert!(is_email(&Value::from("nsakhilesh02@gmail.com")));
//! assert_eq!(check(Value::Null, Some("string"), Value::from("hello")), Value::from("hello"));
//!
//! let projector = derive(Mapping::new().with("trigger", "appStore"));
//! let store = Value::from(json!({"appStore": {"trigger": "fire"}}));
//! assert_eq!(projector.project(&store), Value::from(json!({"trigger": "fire"})));
//! ```

pub mod core;
pub mod errors;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod pattern;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod value;

pub use crate::core::access::{check, define, get, get_index};
pub use crate::core::derive::{Derive, Mapping, derive, derive_from};
pub use crate::core::matching::{
    MatchOptions, all_of, all_of_with, contains, is_equivalent, is_same, is_similar, one_of,
    one_of_with, test,
};
pub use crate::core::pass_by_value::{pass_by_value, pass_callable_by_value};
pub use crate::core::predicates::{
    Predicate, is_array, is_boolean, is_day_of_week, is_email, is_function, is_null, is_number,
    is_object, is_regexp, is_string, is_uarray, is_undefined, is_unempty_array, is_unempty_object,
    is_unempty_string, is_uobject, is_ustring,
};
pub use crate::core::tag::{Tag, type_of};
pub use crate::errors::{Error, Result};
pub use crate::pattern::Pattern;
pub use crate::value::{Callable, Map, Value};
