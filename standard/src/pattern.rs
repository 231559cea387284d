//! Compiled regular expressions carried inside [`Value::RegExp`](crate::Value).

use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};

use crate::errors::{Error, Result};

/// A compiled pattern that remembers the source text and flags it was built from.
///
/// Supported flags: `i` (case-insensitive), `m` (multi-line anchors), `s`
/// (dot matches newline) and `x` (whitespace and `#` comments ignored).
/// `g`, `y` and `u` are accepted and ignored since matching here is stateless.
#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    flags: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str, flags: &str) -> Result<Self> {
        let mut builder = RegexBuilder::new(source);
        for flag in flags.chars() {
            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                'x' => {
                    builder.ignore_whitespace(true);
                }
                'g' | 'y' | 'u' => {}
                other => return Err(Error::UnsupportedFlag(other)),
            }
        }
        let regex = builder.build().map_err(|source_err| Error::InvalidPattern {
            pattern: source.to_string(),
            source: source_err,
        })?;
        tracing::trace!(source, flags, "compiled pattern");
        Ok(Self {
            source: source.to_string(),
            flags: flags.to_string(),
            regex,
        })
    }

    /// Parse a `/source/flags` literal.
    pub fn parse(literal: &str) -> Result<Self> {
        let malformed = || Error::MalformedLiteral(literal.to_string());
        let body = literal.strip_prefix('/').ok_or_else(malformed)?;
        let (source, flags) = body.rsplit_once('/').ok_or_else(malformed)?;
        Self::new(source, flags)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// True if the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
