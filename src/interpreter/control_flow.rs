use super::error::RuntimeError;
use crate::value::Value;

/// How evaluation leaves the normal path: an explicit `return` unwinding
/// to the nearest function (or program) boundary, or a runtime error
/// unwinding all the way out.
///
/// Riding the `Err` channel means `?` propagates a `return` through any
/// enclosing expression untouched, and only `eval_program` and the call
/// machinery unwrap it, so a wrapped return can never leak into a
/// program-visible value.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlFlow {
    Return(Value),
    Error(RuntimeError),
}

impl From<RuntimeError> for ControlFlow {
    fn from(error: RuntimeError) -> Self {
        ControlFlow::Error(error)
    }
}
