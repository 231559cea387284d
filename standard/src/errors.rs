//! Typed errors for the few fallible constructors in this crate.
//!
//! Predicates, defaulting and projection never fail; only building a
//! [`Pattern`](crate::pattern::Pattern) or parsing a name can.

use thiserror::Error;

/// Error type for pattern compilation and name parsing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
    #[error("unsupported pattern flag '{0}'")]
    UnsupportedFlag(char),
    #[error("pattern literal must look like /source/flags, got '{0}'")]
    MalformedLiteral(String),
    #[error("unknown type tag '{0}'")]
    UnknownTag(String),
    #[error("unknown predicate '{0}'")]
    UnknownPredicate(String),
    #[error("invalid mapping: {0}")]
    InvalidMapping(String),
}

pub type Result<T> = std::result::Result<T, Error>;
