pub mod builtins;
pub mod control_flow;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod parser;

pub use control_flow::ControlFlow;
pub use environment::Environment;
pub use error::RuntimeError;
pub use evaluator::eval_program;
pub use parser::{ParseError, Parser};

use std::fmt;

use crate::ast::Program;
use crate::lexer::Lexer;
use crate::value::Value;

/// Lex and parse `source`, returning the program alongside any parse
/// errors. Callers must check the error list before evaluating.
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program, parser.into_errors())
}

/// One-shot convenience for tests and simple drivers: parse and evaluate
/// in a fresh top-level environment.
pub fn parse_and_eval(source: &str) -> Result<Value, EvalFailure> {
    let (program, errors) = parse(source);
    if !errors.is_empty() {
        return Err(EvalFailure::Parse(errors));
    }
    let env = Environment::new();
    eval_program(&program, &env).map_err(EvalFailure::Runtime)
}

#[derive(Debug, Clone, PartialEq)]
pub enum EvalFailure {
    Parse(Vec<ParseError>),
    Runtime(RuntimeError),
}

impl fmt::Display for EvalFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalFailure::Parse(errors) => {
                let messages = errors
                    .iter()
                    .map(|error| error.to_string())
                    .collect::<Vec<_>>()
                    .join("; ");
                write!(f, "parse failed: {}", messages)
            }
            EvalFailure::Runtime(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for EvalFailure {}
