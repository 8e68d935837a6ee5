use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum PrefixOp {
    Not,
    Neg,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InfixOp {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Gt,
    Eq,
    NotEq,
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefixOp::Not => f.write_str("!"),
            PrefixOp::Neg => f.write_str("-"),
        }
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            InfixOp::Add => "+",
            InfixOp::Sub => "-",
            InfixOp::Mul => "*",
            InfixOp::Div => "/",
            InfixOp::Lt => "<",
            InfixOp::Gt => ">",
            InfixOp::Eq => "==",
            InfixOp::NotEq => "!=",
        };
        f.write_str(op)
    }
}

/// Root node: the ordered statements of a source file or REPL line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let { name: Rc<str>, value: Expr },
    Return(Expr),
    Expr(Expr),
}

/// A `{ ... }` statement sequence. Blocks do not open a new scope; they
/// exist for control flow only.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

/// The source of a `for` loop: an inline element list or a name resolved
/// at evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub enum ForSource {
    List(Vec<Expr>),
    Ident(Rc<str>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(Rc<str>),
    Int(i64),
    Bool(bool),
    Str(Rc<str>),
    Array(Vec<Expr>),
    Hash(Vec<(Expr, Expr)>),
    Prefix {
        op: PrefixOp,
        right: Box<Expr>,
    },
    Infix {
        left: Box<Expr>,
        op: InfixOp,
        right: Box<Expr>,
    },
    If {
        condition: Box<Expr>,
        consequence: Block,
        alternative: Option<Block>,
    },
    While {
        condition: Box<Expr>,
        body: Block,
    },
    For {
        iterator: Rc<str>,
        source: ForSource,
        body: Block,
    },
    Function {
        params: Vec<Rc<str>>,
        body: Block,
    },
    Call {
        function: Box<Expr>,
        args: Vec<Expr>,
    },
    Index {
        left: Box<Expr>,
        index: Box<Expr>,
    },
    /// The special-cased `map(f, [...])` form.
    MapCall {
        function: Box<Expr>,
        elements: Vec<Expr>,
    },
    /// `x = expr` without `let`.
    Assign {
        name: Rc<str>,
        value: Box<Expr>,
    },
}

// The printer emits re-parseable surface syntax: every prefix/infix
// subexpression parenthesized exactly once, string literals quoted,
// statements separated by single spaces. Parsing the printed form yields
// a program that prints identically.

fn join<T: fmt::Display>(items: &[T], sep: &str) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join(&self.statements, " "))
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let { name, value } => write!(f, "let {} = {};", name, value),
            Stmt::Return(value) => write!(f, "return {};", value),
            Stmt::Expr(expr) => write!(f, "{};", expr),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            f.write_str("{ }")
        } else {
            write!(f, "{{ {} }}", join(&self.statements, " "))
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident(name) => f.write_str(name),
            Expr::Int(value) => write!(f, "{}", value),
            Expr::Bool(value) => write!(f, "{}", value),
            Expr::Str(value) => write!(f, "\"{}\"", value),
            Expr::Array(elements) => write!(f, "[{}]", join(elements, ", ")),
            Expr::Hash(pairs) => {
                let pairs = pairs
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, value))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{{}}}", pairs)
            }
            Expr::Prefix { op, right } => write!(f, "({}{})", op, right),
            Expr::Infix { left, op, right } => write!(f, "({} {} {})", left, op, right),
            Expr::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if ({}) {}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, " else {}", alternative)?;
                }
                Ok(())
            }
            Expr::While { condition, body } => write!(f, "while ({}) {}", condition, body),
            Expr::For {
                iterator,
                source,
                body,
            } => match source {
                ForSource::List(elements) => {
                    write!(f, "for {} in [{}] {}", iterator, join(elements, ", "), body)
                }
                ForSource::Ident(name) => write!(f, "for {} in {} {}", iterator, name, body),
            },
            Expr::Function { params, body } => {
                write!(f, "fn({}) {}", join(params, ", "), body)
            }
            Expr::Call { function, args } => write!(f, "{}({})", function, join(args, ", ")),
            Expr::Index { left, index } => write!(f, "({}[{}])", left, index),
            Expr::MapCall { function, elements } => {
                write!(f, "map({}, [{}])", function, join(elements, ", "))
            }
            Expr::Assign { name, value } => write!(f, "{} = {}", name, value),
        }
    }
}
