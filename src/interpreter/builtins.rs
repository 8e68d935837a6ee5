use std::rc::Rc;

use super::error::RuntimeError;
use crate::value::Value;

pub type BuiltinFn = fn(&[Value]) -> Result<Value, RuntimeError>;

#[derive(Debug)]
pub struct BuiltinFunction {
    pub name: &'static str,
    pub func: BuiltinFn,
}

static BUILTINS: &[BuiltinFunction] = &[
    BuiltinFunction {
        name: "len",
        func: builtin_len,
    },
    BuiltinFunction {
        name: "first",
        func: builtin_first,
    },
    BuiltinFunction {
        name: "last",
        func: builtin_last,
    },
    BuiltinFunction {
        name: "rest",
        func: builtin_rest,
    },
    BuiltinFunction {
        name: "push",
        func: builtin_push,
    },
    BuiltinFunction {
        name: "puts",
        func: builtin_puts,
    },
];

/// Consulted after an environment miss during identifier resolution.
pub fn lookup(name: &str) -> Option<&'static BuiltinFunction> {
    BUILTINS.iter().find(|builtin| builtin.name == name)
}

fn expect_arity(args: &[Value], want: usize) -> Result<(), RuntimeError> {
    if args.len() != want {
        return Err(RuntimeError::wrong_argument_count(args.len(), want));
    }
    Ok(())
}

fn builtin_len(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity(args, 1)?;
    match &args[0] {
        Value::Str(s) => Ok(Value::Int(s.len() as i64)),
        Value::Array(elements) => Ok(Value::Int(elements.len() as i64)),
        other => Err(RuntimeError::LenUnsupported {
            kind: other.type_name(),
        }),
    }
}

fn builtin_first(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity(args, 1)?;
    match &args[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::ArrayArgument {
            builtin: "first",
            kind: other.type_name(),
        }),
    }
}

fn builtin_last(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity(args, 1)?;
    match &args[0] {
        Value::Array(elements) => Ok(elements.last().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::ArrayArgument {
            builtin: "last",
            kind: other.type_name(),
        }),
    }
}

// All elements but the first, as a new array. Null on an empty array.
fn builtin_rest(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity(args, 1)?;
    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Ok(Value::Null)
            } else {
                Ok(Value::Array(Rc::new(elements[1..].to_vec())))
            }
        }
        other => Err(RuntimeError::ArrayArgument {
            builtin: "rest",
            kind: other.type_name(),
        }),
    }
}

// Returns a new array; the argument is not mutated.
fn builtin_push(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity(args, 2)?;
    match &args[0] {
        Value::Array(elements) => {
            let mut extended = elements.as_ref().clone();
            extended.push(args[1].clone());
            Ok(Value::Array(Rc::new(extended)))
        }
        other => Err(RuntimeError::ArrayArgument {
            builtin: "push",
            kind: other.type_name(),
        }),
    }
}

fn builtin_puts(args: &[Value]) -> Result<Value, RuntimeError> {
    for arg in args {
        println!("{}", arg);
    }
    Ok(Value::Null)
}
