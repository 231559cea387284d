//! Pure value logic: classification, predicates, matching, defaulting and
//! projection.
//!
//! Core modules perform no I/O. Every function is total over its inputs and
//! never mutates caller-supplied values.

pub mod access;
pub mod derive;
pub mod matching;
pub mod pass_by_value;
pub mod predicates;
pub mod tag;
