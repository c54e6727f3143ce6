//! The token stream consumed by the parser.
//!
//! The parser only ever looks one token ahead, so a stream needs nothing
//! more than a lookahead slot, a way to advance, and an error hook that
//! positions diagnostics at the current token.

use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::tokens::{Token, TokenKind};

pub trait TokenStream {
    /// Returns the lookahead token without consuming it.
    fn peek(&self) -> &Token;
    /// Consumes and returns the lookahead token. At end of input the EOF token
    /// is returned and the stream does not move.
    fn next(&mut self) -> Token;
    fn at_end(&self) -> bool;
    /// Builds the error that aborts the current parse, positioned at the lookahead.
    fn report_error(&self, error: ErrorImpl) -> Error;
}

/// A cursor over an already tokenized source.
pub struct Tokens {
    tokens: Vec<Token>,
    pos: usize,
    file: Rc<String>,
}

impl Tokens {
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if !tokens.last().map_or(false, Token::is_eof) {
            tokens.push(Token::eof());
        }

        Tokens {
            tokens,
            pos: 0,
            file,
        }
    }

    /// Number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    fn last_index(&self) -> usize {
        self.tokens.len() - 1
    }
}

impl From<Vec<Token>> for Tokens {
    fn from(tokens: Vec<Token>) -> Self {
        Tokens::new(tokens, Rc::new(String::from("shell")))
    }
}

impl TokenStream for Tokens {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn next(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos < self.last_index() {
            self.pos += 1;
        }
        token
    }

    fn at_end(&self) -> bool {
        self.peek().kind == TokenKind::EOF
    }

    fn report_error(&self, error: ErrorImpl) -> Error {
        let start = &self.peek().span.start;
        // Hand-built tokens carry no file, fall back to the stream's.
        let position = if start.is_null() {
            Position(start.0, Rc::clone(&self.file))
        } else {
            start.clone()
        };

        Error::new(error, position)
    }
}
