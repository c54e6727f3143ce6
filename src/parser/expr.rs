use crate::{
    ast::{
        ast::Expr,
        expressions::{
            AssignmentExpr, BinaryExpr, CallExpr, ClosureExpr, FunctionExpr, IfExpr, Parameter,
        },
    },
    errors::errors::{Error, ErrorImpl, NameKind},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{precedence_of, Precedence, ASSIGNMENT_OPERATOR, LOWEST_PRECEDENCE},
    parser::{delimited, parse_block, Parser},
};

/// Parses a full expression: an atom, any trailing binary operators, and
/// one more optional call on the result.
///
/// Returns `None` when the expression is an empty block (or a closure
/// around one) that produces no node.
pub fn parse_expr(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    let left = match parse_atom(parser)? {
        Some(atom) => atom,
        None => return nothing_unless_continued(parser),
    };

    let expr = maybe_binary(parser, left, LOWEST_PRECEDENCE)?;
    Ok(Some(maybe_call(parser, expr)?))
}

/// Like [`parse_expr`] for positions that need a node.
pub fn expect_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parse_expr(parser)? {
        Some(expr) => Ok(expr),
        None => Err(missing_expression(parser)),
    }
}

fn missing_expression(parser: &Parser) -> Error {
    parser.error(ErrorImpl::MissingExpression {
        found: parser.current_token().value.clone(),
    })
}

/// An absent node cannot be an operand or a callee.
fn nothing_unless_continued(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    if parser.is_operator(None) || parser.is_punctuation(Some('(')) {
        return Err(missing_expression(parser));
    }

    Ok(None)
}

/// Folds `left` with every following operator that binds tighter than `floor`.
///
/// After building a node the loop re-tests against the same `floor`, so
/// operators of equal precedence fold to the left, `=` included:
/// `a = b = c` is `(a = b) = c`.
pub fn maybe_binary(parser: &mut Parser, left: Expr, floor: Precedence) -> Result<Expr, Error> {
    let mut left = left;

    while parser.is_operator(None) {
        let operator = parser.current_token().value.clone();
        let precedence = match precedence_of(&operator) {
            Some(precedence) => precedence,
            None => return Err(parser.error(ErrorImpl::UnknownOperator { operator })),
        };

        if precedence <= floor {
            break;
        }
        parser.consume_operator(&operator)?;

        let right_atom = match parse_atom(parser)? {
            Some(atom) => atom,
            None => return Err(missing_expression(parser)),
        };
        let right = maybe_binary(parser, right_atom, precedence)?;

        log::trace!("folding `{}` at precedence {}", operator, precedence);

        left = if operator == ASSIGNMENT_OPERATOR {
            Expr::Assignment(AssignmentExpr {
                operator,
                assignee: Box::new(left),
                value: Box::new(right),
            })
        } else {
            Expr::Binary(BinaryExpr {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            })
        };
    }

    Ok(left)
}

/// Wraps `expr` in a call if an argument list follows it.
pub fn maybe_call(parser: &mut Parser, expr: Expr) -> Result<Expr, Error> {
    if !parser.is_punctuation(Some('(')) {
        return Ok(expr);
    }

    let arguments = delimited(parser, '(', ')', ',', expect_expr)?;

    Ok(Expr::Call(CallExpr {
        callee: Box::new(expr),
        arguments,
    }))
}

/// Parses the smallest expression unit, followed by an optional call.
pub fn parse_atom(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    match parse_unit(parser)? {
        Some(atom) => Ok(Some(maybe_call(parser, atom)?)),
        None if parser.is_punctuation(Some('(')) => Err(missing_expression(parser)),
        None => Ok(None),
    }
}

fn parse_unit(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    let token = parser.current_token();
    let kind = token.kind;
    let value = token.value.clone();

    match kind {
        TokenKind::Keyword => match value.as_str() {
            "ext" => parse_ext(parser).map(Some),
            "def" => parse_function(parser).map(Some),
            "if" => parse_if(parser).map(Some),
            "true" | "false" => parse_bool(parser).map(Some),
            "cls" => parse_closure(parser),
            _ => parse_terminal(parser).map(Some),
        },
        TokenKind::Punctuation => match value.chars().next() {
            Some('(') => parse_grouping(parser),
            Some('{') => parse_block(parser),
            _ => parse_terminal(parser).map(Some),
        },
        _ => parse_terminal(parser).map(Some),
    }
}

/// Consumes one token and turns it into a literal or a symbol.
fn parse_terminal(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance();

    match token.kind {
        TokenKind::Identifier => Ok(Expr::Symbol(token.value)),
        TokenKind::Number => match token.value.parse::<i32>() {
            Ok(value) => Ok(Expr::Number(value)),
            Err(_) => Err(parser.error_at(
                &token,
                ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                },
            )),
        },
        // An empty literal reads as NUL
        TokenKind::Character => Ok(Expr::Character(
            token.first_char().map_or(0, |ch| ch as u32),
        )),
        TokenKind::String => Ok(Expr::String(token.value)),
        _ => Err(parser.error_at(
            &token,
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
        )),
    }
}

fn parse_bool(parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr::Boolean(parser.advance().value == "true"))
}

fn parse_grouping(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    parser.consume_punctuation('(')?;
    let expr = parse_expr(parser)?;
    parser.consume_punctuation(')')?;

    Ok(expr)
}

fn parse_if(parser: &mut Parser) -> Result<Expr, Error> {
    parser.consume_keyword("if")?;

    let condition = expect_expr(parser)?;
    let then_branch = expect_expr(parser)?;
    let else_branch = if parser.is_keyword(Some("else")) {
        parser.advance();
        parse_expr(parser)?.map(Box::new)
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        condition: Box::new(condition),
        then_branch: Box::new(then_branch),
        else_branch,
    }))
}

fn parse_varname(parser: &mut Parser) -> Result<String, Error> {
    parser.consume_name(NameKind::Variable)
}

/// Parses `type` or `type name`.
fn parse_param(parser: &mut Parser) -> Result<Parameter, Error> {
    let type_name = parser.consume_name(NameKind::Type)?;
    let name = if parser.current_token_kind() == TokenKind::Identifier {
        Some(parser.advance().value)
    } else {
        None
    };

    Ok(Parameter { type_name, name })
}

/// `ext name(type name, type, ...)`
fn parse_ext(parser: &mut Parser) -> Result<Expr, Error> {
    parser.consume_keyword("ext")?;

    let name = parser.consume_name(NameKind::Function)?;
    let params = delimited(parser, '(', ')', ',', parse_param)?;

    Ok(Expr::Function(FunctionExpr {
        name,
        params,
        body: None,
    }))
}

/// `def name(params)? body`. The name token is taken as is.
fn parse_function(parser: &mut Parser) -> Result<Expr, Error> {
    parser.consume_keyword("def")?;

    let name = parser.advance().value;
    let params = if parser.is_punctuation(Some('(')) {
        delimited(parser, '(', ')', ',', parse_param)?
    } else {
        vec![]
    };
    let body = parse_expr(parser)?.map(Box::new);

    Ok(Expr::Function(FunctionExpr { name, params, body }))
}

/// `cls(a, b) { ... }`. An empty body yields no closure at all.
fn parse_closure(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    parser.consume_keyword("cls")?;

    let params = delimited(parser, '(', ')', ',', parse_varname)?;
    let body = parse_block(parser)?;

    Ok(body.map(|body| {
        Expr::Closure(ClosureExpr {
            params,
            body: Box::new(body),
        })
    }))
}
