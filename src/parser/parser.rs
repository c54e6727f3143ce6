//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the Parser struct, which wraps the token stream
//! with one-token lookahead predicates and consume-or-fail primitives, and
//! the grammar pieces that sit above expressions:
//! - the generic delimited-list combinator
//! - brace delimited blocks
//! - the top-level driver

use std::rc::Rc;

use crate::{
    ast::{
        ast::{Expr, Program},
        expressions::BlockExpr,
    },
    errors::errors::{Error, ErrorImpl, NameKind},
    lexer::{
        stream::{TokenStream, Tokens},
        tokens::{Token, TokenKind},
    },
};

use super::expr::parse_expr;

/// Parses one element of a delimited list.
pub type ElementParser<T> = fn(&mut Parser) -> Result<T, Error>;

/// Cursor over a token stream.
///
/// Every grammar function receives the parser explicitly, so any number of
/// parses can be in flight at once over independent streams.
pub struct Parser<'a> {
    input: &'a mut dyn TokenStream,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a mut dyn TokenStream) -> Self {
        Parser { input }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.input.peek()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.input.peek().kind
    }

    /// Consumes the current token and returns it.
    pub fn advance(&mut self) -> Token {
        self.input.next()
    }

    pub fn at_end(&self) -> bool {
        self.input.at_end()
    }

    /// Builds an error positioned at the current token.
    pub fn error(&self, error: ErrorImpl) -> Error {
        self.input.report_error(error)
    }

    /// Builds an error positioned at an already consumed token.
    pub fn error_at(&self, token: &Token, error: ErrorImpl) -> Error {
        if token.span.start.is_null() {
            self.error(error)
        } else {
            Error::new(error, token.span.start.clone())
        }
    }

    /// True if the current token is punctuation starting with `ch`, or any
    /// punctuation when `ch` is `None`.
    pub fn is_punctuation(&self, ch: Option<char>) -> bool {
        let token = self.current_token();
        token.kind == TokenKind::Punctuation && ch.map_or(true, |ch| token.first_char() == Some(ch))
    }

    pub fn is_keyword(&self, keyword: Option<&str>) -> bool {
        let token = self.current_token();
        token.kind == TokenKind::Keyword && keyword.map_or(true, |keyword| token.value == keyword)
    }

    pub fn is_operator(&self, operator: Option<&str>) -> bool {
        let token = self.current_token();
        token.kind == TokenKind::Operator
            && operator.map_or(true, |operator| token.value == operator)
    }

    pub fn consume_punctuation(&mut self, ch: char) -> Result<(), Error> {
        if !self.is_punctuation(Some(ch)) {
            return Err(self.error(ErrorImpl::ExpectedPunctuation {
                expected: ch,
                found: self.current_token().value.clone(),
            }));
        }

        self.advance();
        Ok(())
    }

    pub fn consume_keyword(&mut self, keyword: &str) -> Result<(), Error> {
        if !self.is_keyword(Some(keyword)) {
            return Err(self.error(ErrorImpl::ExpectedKeyword {
                expected: String::from(keyword),
                found: self.current_token().value.clone(),
            }));
        }

        self.advance();
        Ok(())
    }

    pub fn consume_operator(&mut self, operator: &str) -> Result<(), Error> {
        if !self.is_operator(Some(operator)) {
            return Err(self.error(ErrorImpl::ExpectedOperator {
                expected: String::from(operator),
                found: self.current_token().value.clone(),
            }));
        }

        self.advance();
        Ok(())
    }

    /// Consumes an identifier used as a variable, type or function name.
    pub fn consume_name(&mut self, name: NameKind) -> Result<String, Error> {
        if self.current_token_kind() != TokenKind::Identifier {
            return Err(self.error(ErrorImpl::ExpectedName {
                name,
                found: self.current_token().value.clone(),
            }));
        }

        Ok(self.advance().value)
    }
}

/// Parses `start element (separator element)* separator? end`.
///
/// An empty list and a trailing separator are both accepted. Running out of
/// input ends the loop and the closing token check reports the error.
pub fn delimited<T>(
    parser: &mut Parser,
    start: char,
    end: char,
    separator: char,
    element: ElementParser<T>,
) -> Result<Vec<T>, Error> {
    let mut list = vec![];
    let mut first = true;

    parser.consume_punctuation(start)?;

    while !parser.at_end() {
        if parser.is_punctuation(Some(end)) {
            break;
        }

        if first {
            first = false;
        } else {
            parser.consume_punctuation(separator)?;
        }

        if parser.is_punctuation(Some(end)) {
            break;
        }

        list.push(element(parser)?);
    }

    parser.consume_punctuation(end)?;
    Ok(list)
}

/// Parses `{ expr; expr; ... }`.
///
/// A block without statements produces no node at all. A block whose
/// statements are all absent is still a node, with an empty body.
pub fn parse_block(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    let statements = delimited(parser, '{', '}', ';', parse_expr)?;

    if statements.is_empty() {
        return Ok(None);
    }

    let body = statements.into_iter().flatten().collect();
    Ok(Some(Expr::Block(BlockExpr { body })))
}

/// Parses semicolon separated expressions until the stream is exhausted.
///
/// The last expression does not need a trailing semicolon.
pub fn parse_toplevel(parser: &mut Parser) -> Result<Program, Error> {
    let mut body = vec![];

    while !parser.at_end() {
        if let Some(expr) = parse_expr(parser)? {
            body.push(expr);
        }

        if !parser.at_end() {
            parser.consume_punctuation(';')?;
        }
    }

    log::debug!("parsed {} top-level expressions", body.len());
    Ok(Program { body })
}

/// Parses a full program from any token stream.
pub fn parse_stream(input: &mut dyn TokenStream) -> Result<Program, Error> {
    let mut parser = Parser::new(input);
    parse_toplevel(&mut parser)
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse, as produced by `tokenize`
/// * `file` - Reference-counted string containing the source file name
///
/// # Returns
///
/// Either every top-level expression of the source, or the first syntax error.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Program, Error> {
    let mut stream = Tokens::new(tokens, file);
    parse_stream(&mut stream)
}
