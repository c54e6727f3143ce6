use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::{Position, Span};

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("def");
        set.insert("ext");
        set.insert("cls");
        set.insert("if");
        set.insert("else");
        set.insert("true");
        set.insert("false");
        set
    };
}

/// Token classes produced by the lexer.
///
/// `EOF` doubles as the "no token" sentinel: peeking past the end of the
/// stream always yields it.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    Number,
    String,
    Character,
    Keyword,
    Punctuation,
    Operator,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.value)
    }
}

impl Token {
    /// Builds a token with no source position, for hand-built streams.
    pub fn new(kind: TokenKind, value: &str) -> Self {
        Token {
            kind,
            value: String::from(value),
            span: Span {
                start: Position::null(),
                end: Position::null(),
            },
        }
    }

    pub fn eof() -> Self {
        Token::new(TokenKind::EOF, "EOF")
    }

    /// First character of the token text, which is what punctuation is matched on.
    pub fn first_char(&self) -> Option<char> {
        self.value.chars().next()
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }
}
