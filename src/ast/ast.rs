use std::fmt::{self, Display};

use super::expressions::{
    AssignmentExpr, BinaryExpr, BlockExpr, CallExpr, ClosureExpr, FunctionExpr, IfExpr, Parameter,
};

/// Expression Types
///
/// Names the variant of an [`Expr`] without borrowing its payload.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ExprType {
    Number,
    String,
    Character,
    Boolean,
    Symbol,
    Assignment,
    Binary,
    If,
    Function,
    Closure,
    Call,
    Block,
}

/// Every node of the syntax tree.
///
/// Each node owns its children outright; dropping a node drops its subtree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(i32),
    String(String),
    /// Code point of the first character of a character literal.
    Character(u32),
    Boolean(bool),
    Symbol(String),
    Assignment(AssignmentExpr),
    Binary(BinaryExpr),
    If(IfExpr),
    Function(FunctionExpr),
    Closure(ClosureExpr),
    Call(CallExpr),
    Block(BlockExpr),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Number(_) => ExprType::Number,
            Expr::String(_) => ExprType::String,
            Expr::Character(_) => ExprType::Character,
            Expr::Boolean(_) => ExprType::Boolean,
            Expr::Symbol(_) => ExprType::Symbol,
            Expr::Assignment(_) => ExprType::Assignment,
            Expr::Binary(_) => ExprType::Binary,
            Expr::If(_) => ExprType::If,
            Expr::Function(_) => ExprType::Function,
            Expr::Closure(_) => ExprType::Closure,
            Expr::Call(_) => ExprType::Call,
            Expr::Block(_) => ExprType::Block,
        }
    }

    /// Wraps an operand in parentheses when its own syntax would swallow what follows it.
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Function(function) if !function.is_external() => write!(f, "({})", self),
            _ => write!(f, "{}", self),
        }
    }
}

/// The root of a parsed source: its top-level expressions in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Expr>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

fn escape(value: &str, quote: char) -> String {
    let mut escaped = String::new();

    for ch in value.chars() {
        match ch {
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            '\0' => escaped.push_str("\\0"),
            '\\' => escaped.push_str("\\\\"),
            ch if ch == quote => {
                escaped.push('\\');
                escaped.push(ch);
            }
            ch => escaped.push(ch),
        }
    }

    escaped
}

fn join<T: Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<String>>()
        .join(separator)
}

impl Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} {}", self.type_name, name),
            None => write!(f, "{}", self.type_name),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", value),
            Expr::String(value) => write!(f, "\"{}\"", escape(value, '"')),
            Expr::Character(code) => {
                let ch = char::from_u32(*code).unwrap_or(char::REPLACEMENT_CHARACTER);
                write!(f, "'{}'", escape(&ch.to_string(), '\''))
            }
            Expr::Boolean(value) => write!(f, "{}", value),
            Expr::Symbol(name) => write!(f, "{}", name),
            Expr::Assignment(assignment) => {
                write!(f, "(")?;
                assignment.assignee.fmt_operand(f)?;
                write!(f, " {} {})", assignment.operator, assignment.value)
            }
            Expr::Binary(binary) => {
                write!(f, "(")?;
                binary.left.fmt_operand(f)?;
                write!(f, " {} {})", binary.operator, binary.right)
            }
            Expr::If(if_expr) => match &if_expr.else_branch {
                Some(else_branch) => write!(
                    f,
                    "(if {} {} else {})",
                    if_expr.condition, if_expr.then_branch, else_branch
                ),
                None => write!(f, "(if {} {})", if_expr.condition, if_expr.then_branch),
            },
            Expr::Function(function) => match &function.body {
                Some(body) => write!(
                    f,
                    "def {}({}) {}",
                    function.name,
                    join(&function.params, ", "),
                    body
                ),
                None => write!(f, "ext {}({})", function.name, join(&function.params, ", ")),
            },
            Expr::Closure(closure) => {
                write!(f, "cls({}) {}", closure.params.join(", "), closure.body)
            }
            Expr::Call(call) => {
                call.callee.fmt_operand(f)?;
                write!(f, "({})", join(&call.arguments, ", "))
            }
            // `{}` alone reads back as no node at all
            Expr::Block(block) if block.body.is_empty() => write!(f, "{{ {{}} }}"),
            Expr::Block(block) => write!(f, "{{ {} }}", join(&block.body, "; ")),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", join(&self.body, ";\n"))
    }
}
