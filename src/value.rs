use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;

use crate::ast::Block;
use crate::interpreter::builtins::BuiltinFunction;
use crate::interpreter::environment::Environment;

/// A runtime value. Arrays, hashes, and functions are shared by `Rc`;
/// the language has no in-place mutation, so sharing is observationally
/// read-only.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Int(i64),
    Bool(bool),
    Str(Rc<str>),
    Array(Rc<Vec<Value>>),
    Hash(Rc<IndexMap<HashKey, Value>>),
    Function(Rc<Function>),
    Builtin(&'static BuiltinFunction),
}

impl Value {
    /// The kind name used throughout runtime error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Int(_) => "INTEGER",
            Value::Bool(_) => "BOOLEAN",
            Value::Str(_) => "STRING",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
        }
    }

    /// The truthiness rule shared by `while` conditions: boolean true, or
    /// any integer. Everything else is falsy.
    pub fn is_truthy(&self) -> bool {
        matches!(self, Value::Bool(true) | Value::Int(_))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Hash(a), Value::Hash(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

/// A user-defined function: parameters, body, and the environment it
/// closed over at definition time.
#[derive(Debug)]
pub struct Function {
    pub params: Vec<Rc<str>>,
    pub body: Block,
    pub env: Environment,
}

/// The kinds admissible as hash keys. Arrays, hashes, and functions are
/// rejected at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    Int(i64),
    Bool(bool),
    Str(Rc<str>),
}

impl HashKey {
    pub fn from_value(value: &Value) -> Option<HashKey> {
        match value {
            Value::Int(n) => Some(HashKey::Int(*n)),
            Value::Bool(b) => Some(HashKey::Bool(*b)),
            Value::Str(s) => Some(HashKey::Str(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashKey::Int(n) => write!(f, "{}", n),
            HashKey::Bool(b) => write!(f, "{}", b),
            HashKey::Str(s) => f.write_str(s),
        }
    }
}

// The display form: what `puts` prints and what the REPL echoes. Strings
// print raw, containers recurse, functions print their source.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Int(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => f.write_str(s),
            Value::Array(elements) => {
                let elements = elements
                    .iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{}]", elements)
            }
            Value::Hash(pairs) => {
                let pairs = pairs
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, value))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{{}}}", pairs)
            }
            Value::Function(function) => {
                let params = function
                    .params
                    .iter()
                    .map(|param| param.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "fn({}) {}", params, function.body)
            }
            Value::Builtin(_) => f.write_str("builtin function"),
        }
    }
}
