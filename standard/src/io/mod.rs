//! I/O helpers for the CLI: configuration and argument input.

pub mod config;
pub mod input;
