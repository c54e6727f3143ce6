use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A syntax error raised while tokenizing or parsing.
///
/// There is no recovery: the first error aborts the whole parse and is
/// handed back to the caller of [`crate::parser::parser::parse`].
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The human readable message, always naming the expected or found token.
    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedPunctuation { .. } => "ExpectedPunctuation",
            ErrorImpl::ExpectedKeyword { .. } => "ExpectedKeyword",
            ErrorImpl::ExpectedOperator { .. } => "ExpectedOperator",
            ErrorImpl::ExpectedName { .. } => "ExpectedName",
            ErrorImpl::UnknownOperator { .. } => "UnknownOperator",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::MissingExpression { .. } => "MissingExpression",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::ExpectedPunctuation { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}` but found `{}`",
                expected, found
            )),
            ErrorImpl::ExpectedKeyword { expected, found } => ErrorTip::Suggestion(format!(
                "Expected keyword `{}` but found `{}`",
                expected, found
            )),
            ErrorImpl::ExpectedOperator { expected, found } => ErrorTip::Suggestion(format!(
                "Expected operator `{}` but found `{}`",
                expected, found
            )),
            ErrorImpl::ExpectedName { name, found } => ErrorTip::Suggestion(format!(
                "A {} name must be an identifier, found `{}`",
                name, found
            )),
            ErrorImpl::UnknownOperator { operator } => ErrorTip::Suggestion(format!(
                "Operator `{}` has no precedence, is it a typo?",
                operator
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::MissingExpression { found } => ErrorTip::Suggestion(format!(
                "An empty block has no value, it cannot be used before `{}`",
                found
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SyntaxError: {}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Which kind of name an identifier position was expecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Variable,
    Type,
    Function,
}

impl Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameKind::Variable => write!(f, "variable"),
            NameKind::Type => write!(f, "type"),
            NameKind::Function => write!(f, "function"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token {token:?}")]
    UnexpectedToken { token: String },
    #[error("token '{expected}' expected, found {found:?}")]
    ExpectedPunctuation { expected: char, found: String },
    #[error("keyword {expected:?} expected, found {found:?}")]
    ExpectedKeyword { expected: String, found: String },
    #[error("operator '{expected}' expected, found {found:?}")]
    ExpectedOperator { expected: String, found: String },
    #[error("{name} name expected, found {found:?}")]
    ExpectedName { name: NameKind, found: String },
    #[error("unknown operator {operator:?}")]
    UnknownOperator { operator: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("expected expression, found {found:?}")]
    MissingExpression { found: String },
}
