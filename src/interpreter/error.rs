use std::fmt;

use crate::ast::{InfixOp, PrefixOp};

/// A runtime failure. Evaluation stops at the first error reached at a
/// sequencing point; enclosing operators never see their remaining
/// operands evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    TypeMismatch {
        left: &'static str,
        op: InfixOp,
        right: &'static str,
    },
    UnknownPrefixOperator {
        op: PrefixOp,
        operand: &'static str,
    },
    UnknownInfixOperator {
        left: &'static str,
        op: InfixOp,
        right: &'static str,
    },
    UnsupportedType {
        kind: &'static str,
    },
    IdentifierNotFound {
        name: String,
    },
    NotAFunction {
        kind: &'static str,
    },
    WrongArgumentCount {
        got: usize,
        want: usize,
    },
    LenUnsupported {
        kind: &'static str,
    },
    ArrayArgument {
        builtin: &'static str,
        kind: &'static str,
    },
    DivisionByZero,
    NotIterable {
        kind: &'static str,
    },
    UnusableHashKey {
        kind: &'static str,
    },
    IndexNotSupported {
        kind: &'static str,
    },
}

impl RuntimeError {
    pub fn identifier_not_found(name: impl Into<String>) -> Self {
        RuntimeError::IdentifierNotFound { name: name.into() }
    }

    pub fn not_a_function(kind: &'static str) -> Self {
        RuntimeError::NotAFunction { kind }
    }

    pub fn wrong_argument_count(got: usize, want: usize) -> Self {
        RuntimeError::WrongArgumentCount { got, want }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::TypeMismatch { left, op, right } => {
                write!(f, "type mismatch: {} {} {}", left, op, right)
            }
            RuntimeError::UnknownPrefixOperator { op, operand } => {
                write!(f, "unknown operator: {}{}", op, operand)
            }
            RuntimeError::UnknownInfixOperator { left, op, right } => {
                write!(f, "unknown operator: {} {} {}", left, op, right)
            }
            RuntimeError::UnsupportedType { kind } => {
                write!(f, "unsupported type: {}", kind)
            }
            RuntimeError::IdentifierNotFound { name } => {
                write!(f, "identifier not found: {}", name)
            }
            RuntimeError::NotAFunction { kind } => {
                write!(f, "not a function: {}", kind)
            }
            RuntimeError::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments. got={}, want={}", got, want)
            }
            RuntimeError::LenUnsupported { kind } => {
                write!(f, "argument to len not supported, got {}", kind)
            }
            RuntimeError::ArrayArgument { builtin, kind } => {
                write!(f, "argument to {} must be ARRAY, got {}", builtin, kind)
            }
            RuntimeError::DivisionByZero => f.write_str("division by zero"),
            RuntimeError::NotIterable { kind } => {
                write!(f, "for: not iterable: {}", kind)
            }
            RuntimeError::UnusableHashKey { kind } => {
                write!(f, "unusable as hash key: {}", kind)
            }
            RuntimeError::IndexNotSupported { kind } => {
                write!(f, "index operator not supported: {}", kind)
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
