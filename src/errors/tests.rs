//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, NameKind};
use crate::Position;
use std::rc::Rc;

fn at_zero(error_impl: ErrorImpl) -> Error {
    Error::new(error_impl, Position(0, Rc::new("test.src".to_string())))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.src".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 10);
    assert_eq!(error.get_position().1.as_str(), "test.src");
}

#[test]
fn test_expected_punctuation_message() {
    let error = at_zero(ErrorImpl::ExpectedPunctuation {
        expected: ';',
        found: "2".to_string(),
    });

    assert_eq!(error.get_error_name(), "ExpectedPunctuation");
    assert_eq!(error.get_message(), "token ';' expected, found \"2\"");
    assert_eq!(error.to_string(), "SyntaxError: token ';' expected, found \"2\"");
}

#[test]
fn test_expected_keyword_message() {
    let error = at_zero(ErrorImpl::ExpectedKeyword {
        expected: "if".to_string(),
        found: "x".to_string(),
    });

    assert_eq!(error.get_message(), "keyword \"if\" expected, found \"x\"");
}

#[test]
fn test_expected_operator_message() {
    let error = at_zero(ErrorImpl::ExpectedOperator {
        expected: "=".to_string(),
        found: "+".to_string(),
    });

    assert_eq!(error.get_message(), "operator '=' expected, found \"+\"");
}

#[test]
fn test_expected_name_messages() {
    let variable = at_zero(ErrorImpl::ExpectedName {
        name: NameKind::Variable,
        found: "1".to_string(),
    });
    let type_name = at_zero(ErrorImpl::ExpectedName {
        name: NameKind::Type,
        found: ")".to_string(),
    });
    let function = at_zero(ErrorImpl::ExpectedName {
        name: NameKind::Function,
        found: "if".to_string(),
    });

    assert_eq!(variable.get_message(), "variable name expected, found \"1\"");
    assert_eq!(type_name.get_message(), "type name expected, found \")\"");
    assert_eq!(function.get_message(), "function name expected, found \"if\"");
}

#[test]
fn test_unexpected_token_message() {
    let error = at_zero(ErrorImpl::UnexpectedToken {
        token: "+".to_string(),
    });

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_message(), "unexpected token \"+\"");
}

#[test]
fn test_unknown_operator_error() {
    let error = at_zero(ErrorImpl::UnknownOperator {
        operator: "=-".to_string(),
    });

    assert_eq!(error.get_error_name(), "UnknownOperator");
    assert_eq!(error.get_message(), "unknown operator \"=-\"");
}

#[test]
fn test_number_parse_error() {
    let error = at_zero(ErrorImpl::NumberParseError {
        token: "99999999999".to_string(),
    });

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_missing_expression_error() {
    let error = at_zero(ErrorImpl::MissingExpression {
        found: "+".to_string(),
    });

    assert_eq!(error.get_error_name(), "MissingExpression");
    assert_eq!(error.get_message(), "expected expression, found \"+\"");
}

#[test]
fn test_error_tip_none() {
    let error = at_zero(ErrorImpl::UnrecognisedToken {
        token: "@".to_string(),
    });

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = at_zero(ErrorImpl::UnexpectedToken {
        token: "}".to_string(),
    });

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`}`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_is_std_error() {
    let error: Box<dyn std::error::Error> = Box::new(at_zero(ErrorImpl::UnknownOperator {
        operator: "=-".to_string(),
    }));

    assert_eq!(error.to_string(), "SyntaxError: unknown operator \"=-\"");
}
