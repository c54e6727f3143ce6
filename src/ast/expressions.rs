use super::ast::Expr;

/// Assignment Expression
/// Represents `assignee = value`. The operator is always `=`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub operator: String,
    pub assignee: Box<Expr>,
    pub value: Box<Expr>,
}

/// Binary Expression
/// Represents any other infix operator from the precedence table.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
}

/// If Expression
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub condition: Box<Expr>,
    pub then_branch: Box<Expr>,
    pub else_branch: Option<Box<Expr>>,
}

/// A typed parameter of a `def` or `ext` function.
///
/// The type is a plain identifier; the name is only present when a second
/// identifier follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub type_name: String,
    pub name: Option<String>,
}

impl Parameter {
    pub fn new(type_name: &str, name: Option<&str>) -> Self {
        Parameter {
            type_name: String::from(type_name),
            name: name.map(String::from),
        }
    }
}

/// Function Expression
/// Represents both `def` functions and `ext` declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
    pub name: String,
    pub params: Vec<Parameter>,
    /// `None` marks a function implemented outside the language.
    pub body: Option<Box<Expr>>,
}

impl FunctionExpr {
    pub fn is_external(&self) -> bool {
        self.body.is_none()
    }
}

/// Closure Expression
/// An anonymous function with untyped parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosureExpr {
    pub params: Vec<String>,
    pub body: Box<Expr>,
}

/// Call Expression
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

/// Block Expression
/// A brace delimited sequence of expressions. Statements that produced no
/// node are left out, so the body can be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockExpr {
    pub body: Vec<Expr>,
}
