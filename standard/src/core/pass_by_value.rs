//! Wrapping callables so they only ever see copies of their arguments.

use crate::value::{Callable, Value};

/// Wrap `func` so every argument is deep-copied before the call.
///
/// The wrapped function owns its copies; mutating them leaves the caller's
/// values untouched.
pub fn pass_by_value<F>(func: F) -> impl Fn(&[Value]) -> Value
where
    F: Fn(Vec<Value>) -> Value,
{
    move |args: &[Value]| {
        tracing::trace!(arity = args.len(), "calling with copied arguments");
        func(args.to_vec())
    }
}

/// [`pass_by_value`] for a [`Callable`] stored inside a [`Value::Function`].
pub fn pass_callable_by_value(callable: Callable) -> impl Fn(&[Value]) -> Value {
    pass_by_value(move |args| callable.call(args))
}
