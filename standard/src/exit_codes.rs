//! Stable exit codes for CLI commands.

/// Command succeeded, or a predicate-style command evaluated to `true`.
pub const OK: i32 = 0;
/// Invalid input, config or other errors.
pub const INVALID: i32 = 1;
/// A predicate-style command (`is`, `contains`, `one-of`, ...) evaluated to `false`.
pub const FALSE: i32 = 2;
