use indexmap::IndexMap;
use std::rc::Rc;

use super::builtins;
use super::control_flow::ControlFlow;
use super::environment::Environment;
use super::error::RuntimeError;
use crate::ast::{Block, Expr, ForSource, InfixOp, PrefixOp, Program, Stmt};
use crate::value::{Function, HashKey, Value};

/// Evaluation result of a single node. A `return` and a runtime error
/// both ride the `Err` channel (see [`ControlFlow`]), so `?` gives the
/// eager propagation the language semantics require.
type Evaluated = Result<Value, ControlFlow>;

/// Evaluates a program against `env`. The caller owns the environment;
/// the REPL passes the same one for every input line. A `return` at the
/// top level is unwrapped here, and the first runtime error becomes the
/// program's outcome. Without either, the result is the value of the
/// last statement.
pub fn eval_program(program: &Program, env: &Environment) -> Result<Value, RuntimeError> {
    let mut result = Value::Null;
    for stmt in &program.statements {
        match eval_statement(stmt, env) {
            Ok(value) => result = value,
            Err(ControlFlow::Return(value)) => return Ok(value),
            Err(ControlFlow::Error(error)) => return Err(error),
        }
    }
    Ok(result)
}

fn eval_statement(stmt: &Stmt, env: &Environment) -> Evaluated {
    match stmt {
        Stmt::Let { name, value } => {
            let value = eval_expression(value, env)?;
            env.set(name, value);
            Ok(Value::Null)
        }
        Stmt::Return(value) => {
            let value = eval_expression(value, env)?;
            Err(ControlFlow::Return(value))
        }
        Stmt::Expr(expr) => eval_expression(expr, env),
    }
}

// Blocks neither unwrap returns nor open a scope; their value is the
// value of their last statement, or null when empty.
fn eval_block(block: &Block, env: &Environment) -> Evaluated {
    let mut result = Value::Null;
    for stmt in &block.statements {
        result = eval_statement(stmt, env)?;
    }
    Ok(result)
}

fn eval_expression(expr: &Expr, env: &Environment) -> Evaluated {
    match expr {
        Expr::Int(value) => Ok(Value::Int(*value)),
        Expr::Bool(value) => Ok(Value::Bool(*value)),
        Expr::Str(value) => Ok(Value::Str(value.clone())),
        Expr::Ident(name) => eval_identifier(name, env),
        Expr::Array(elements) => Ok(Value::Array(Rc::new(eval_expressions(elements, env)?))),
        Expr::Hash(pairs) => eval_hash_literal(pairs, env),
        Expr::Prefix { op, right } => {
            let right = eval_expression(right, env)?;
            Ok(eval_prefix(op, &right)?)
        }
        Expr::Infix { left, op, right } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            Ok(eval_infix(op, &left, &right)?)
        }
        Expr::If {
            condition,
            consequence,
            alternative,
        } => {
            // booleans pick a branch, integers always take the
            // consequence, anything else is null
            match eval_expression(condition, env)? {
                Value::Bool(true) | Value::Int(_) => eval_block(consequence, env),
                Value::Bool(false) => match alternative {
                    Some(alternative) => eval_block(alternative, env),
                    None => Ok(Value::Null),
                },
                _ => Ok(Value::Null),
            }
        }
        Expr::While { condition, body } => {
            let mut result = Value::Null;
            while eval_expression(condition, env)?.is_truthy() {
                result = eval_block(body, env)?;
            }
            Ok(result)
        }
        Expr::For {
            iterator,
            source,
            body,
        } => {
            let items = match source {
                ForSource::List(elements) => eval_expressions(elements, env)?,
                ForSource::Ident(name) => match eval_identifier(name, env)? {
                    Value::Array(elements) => elements.as_ref().clone(),
                    other => {
                        return Err(RuntimeError::NotIterable {
                            kind: other.type_name(),
                        }
                        .into())
                    }
                },
            };
            let mut result = Value::Null;
            for item in items {
                env.set(iterator, item);
                result = eval_block(body, env)?;
            }
            Ok(result)
        }
        Expr::Function { params, body } => Ok(Value::Function(Rc::new(Function {
            params: params.clone(),
            body: body.clone(),
            env: env.clone(),
        }))),
        Expr::Call { function, args } => {
            let function = eval_expression(function, env)?;
            let args = eval_expressions(args, env)?;
            apply_function(&function, &args)
        }
        Expr::Index { left, index } => {
            let left = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            Ok(eval_index(&left, &index)?)
        }
        Expr::MapCall { function, elements } => {
            let function = eval_expression(function, env)?;
            if !matches!(function, Value::Function(_) | Value::Builtin(_)) {
                return Err(RuntimeError::not_a_function(function.type_name()).into());
            }
            let elements = eval_expressions(elements, env)?;
            let mut mapped = Vec::with_capacity(elements.len());
            for element in elements {
                mapped.push(apply_function(&function, &[element])?);
            }
            Ok(Value::Array(Rc::new(mapped)))
        }
        Expr::Assign { name, value } => {
            let value = eval_expression(value, env)?;
            env.set(name, value.clone());
            Ok(value)
        }
    }
}

fn eval_identifier(name: &str, env: &Environment) -> Evaluated {
    if let Some(value) = env.get(name) {
        return Ok(value);
    }
    if let Some(builtin) = builtins::lookup(name) {
        return Ok(Value::Builtin(builtin));
    }
    Err(RuntimeError::identifier_not_found(name).into())
}

// Left to right; the first error abandons the rest.
fn eval_expressions(exprs: &[Expr], env: &Environment) -> Result<Vec<Value>, ControlFlow> {
    let mut values = Vec::with_capacity(exprs.len());
    for expr in exprs {
        values.push(eval_expression(expr, env)?);
    }
    Ok(values)
}

fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &Environment) -> Evaluated {
    let mut hash = IndexMap::with_capacity(pairs.len());
    for (key_expr, value_expr) in pairs {
        let key_value = eval_expression(key_expr, env)?;
        let key = match HashKey::from_value(&key_value) {
            Some(key) => key,
            None => {
                return Err(RuntimeError::UnusableHashKey {
                    kind: key_value.type_name(),
                }
                .into())
            }
        };
        let value = eval_expression(value_expr, env)?;
        hash.insert(key, value);
    }
    Ok(Value::Hash(Rc::new(hash)))
}

fn eval_prefix(op: &PrefixOp, right: &Value) -> Result<Value, RuntimeError> {
    match op {
        PrefixOp::Not => Ok(eval_bang(right)),
        PrefixOp::Neg => match right {
            Value::Int(n) => Ok(Value::Int(n.wrapping_neg())),
            other => Err(RuntimeError::UnknownPrefixOperator {
                op: PrefixOp::Neg,
                operand: other.type_name(),
            }),
        },
    }
}

fn eval_bang(value: &Value) -> Value {
    match value {
        Value::Bool(true) => Value::Bool(false),
        Value::Bool(false) => Value::Bool(true),
        Value::Null => Value::Bool(true),
        _ => Value::Bool(false),
    }
}

// Operands must be the same kind; the kind then decides which operators
// exist for it.
fn eval_infix(op: &InfixOp, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Int(l), Value::Int(r)) => eval_integer_infix(op, *l, *r),
        (Value::Bool(l), Value::Bool(r)) => match op {
            InfixOp::Eq => Ok(Value::Bool(l == r)),
            InfixOp::NotEq => Ok(Value::Bool(l != r)),
            _ => Err(RuntimeError::UnknownInfixOperator {
                left: "BOOLEAN",
                op: op.clone(),
                right: "BOOLEAN",
            }),
        },
        (Value::Str(l), Value::Str(r)) => match op {
            InfixOp::Add => {
                let mut combined = String::with_capacity(l.len() + r.len());
                combined.push_str(l);
                combined.push_str(r);
                Ok(Value::Str(Rc::from(combined)))
            }
            _ => Err(RuntimeError::UnknownInfixOperator {
                left: "STRING",
                op: op.clone(),
                right: "STRING",
            }),
        },
        _ if left.type_name() != right.type_name() => Err(RuntimeError::TypeMismatch {
            left: left.type_name(),
            op: op.clone(),
            right: right.type_name(),
        }),
        _ => Err(RuntimeError::UnsupportedType {
            kind: left.type_name(),
        }),
    }
}

// Wrapping two's-complement arithmetic; only division traps, on zero.
fn eval_integer_infix(op: &InfixOp, left: i64, right: i64) -> Result<Value, RuntimeError> {
    match op {
        InfixOp::Add => Ok(Value::Int(left.wrapping_add(right))),
        InfixOp::Sub => Ok(Value::Int(left.wrapping_sub(right))),
        InfixOp::Mul => Ok(Value::Int(left.wrapping_mul(right))),
        InfixOp::Div => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(Value::Int(left.wrapping_div(right)))
            }
        }
        InfixOp::Lt => Ok(Value::Bool(left < right)),
        InfixOp::Gt => Ok(Value::Bool(left > right)),
        InfixOp::Eq => Ok(Value::Bool(left == right)),
        InfixOp::NotEq => Ok(Value::Bool(left != right)),
    }
}

fn eval_index(left: &Value, index: &Value) -> Result<Value, RuntimeError> {
    match (left, index) {
        (Value::Array(elements), Value::Int(i)) => {
            if *i < 0 || *i as usize >= elements.len() {
                Ok(Value::Null)
            } else {
                Ok(elements[*i as usize].clone())
            }
        }
        (Value::Hash(pairs), key) => match HashKey::from_value(key) {
            Some(key) => Ok(pairs.get(&key).cloned().unwrap_or(Value::Null)),
            None => Err(RuntimeError::UnusableHashKey {
                kind: key.type_name(),
            }),
        },
        _ => Err(RuntimeError::IndexNotSupported {
            kind: left.type_name(),
        }),
    }
}

/// Applies a function value to already-evaluated arguments. Used by call
/// expressions and the `map` form.
///
/// A user function runs its body in a fresh environment enclosed by the
/// environment it captured at definition time (not the caller's), which
/// is what makes closures work. The return flow is unwrapped here, at
/// the function boundary.
pub fn apply_function(function: &Value, args: &[Value]) -> Evaluated {
    match function {
        Value::Function(function) => {
            if args.len() != function.params.len() {
                return Err(
                    RuntimeError::wrong_argument_count(args.len(), function.params.len()).into(),
                );
            }
            let call_env = Environment::new_enclosed(&function.env);
            for (param, arg) in function.params.iter().zip(args) {
                call_env.set(param, arg.clone());
            }
            match eval_block(&function.body, &call_env) {
                Err(ControlFlow::Return(value)) => Ok(value),
                other => other,
            }
        }
        Value::Builtin(builtin) => Ok((builtin.func)(args)?),
        other => Err(RuntimeError::not_a_function(other.type_name()).into()),
    }
}
