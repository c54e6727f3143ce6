use std::rc::Rc;

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{TokenKind, Token, KEYWORDS};

pub type RegexHandler = fn(&mut Lexer, &Regex);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            // Patterns are fixed at compile time; anchoring keeps matching at the cursor.
            regex: Regex::new(&format!("^(?:{})", pattern)).expect("invalid lexer pattern"),
            handler,
        }
    }
}

#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            patterns: vec![
                RegexPattern::new("[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
                RegexPattern::new("[0-9]+", number_handler),
                RegexPattern::new("\\s+", skip_handler),
                RegexPattern::new("//[^\\n]*", skip_handler),
                RegexPattern::new("\"(?:[^\"\\\\]|\\\\.)*\"", string_handler),
                RegexPattern::new("'(?:[^'\\\\]|\\\\.)*'", character_handler),
                RegexPattern::new(",", MK_DEFAULT_HANDLER!(TokenKind::Punctuation, ",")),
                RegexPattern::new(";", MK_DEFAULT_HANDLER!(TokenKind::Punctuation, ";")),
                RegexPattern::new("\\(", MK_DEFAULT_HANDLER!(TokenKind::Punctuation, "(")),
                RegexPattern::new("\\)", MK_DEFAULT_HANDLER!(TokenKind::Punctuation, ")")),
                RegexPattern::new("\\{", MK_DEFAULT_HANDLER!(TokenKind::Punctuation, "{")),
                RegexPattern::new("\\}", MK_DEFAULT_HANDLER!(TokenKind::Punctuation, "}")),
                RegexPattern::new("\\[", MK_DEFAULT_HANDLER!(TokenKind::Punctuation, "[")),
                RegexPattern::new("\\]", MK_DEFAULT_HANDLER!(TokenKind::Punctuation, "]")),
                RegexPattern::new("[+\\-*/%=&|<>!]+", operator_handler),
            ],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span of the next `len` bytes starting at the cursor.
    pub fn span(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }
}

fn matched(lexer: &Lexer, regex: &Regex) -> String {
    regex
        .find(lexer.remainder())
        .map(|found| found.as_str().to_string())
        .unwrap_or_default()
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched(lexer, regex);
    let span = lexer.span(matched.len());

    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Number, matched, span));
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched(lexer, regex);
    lexer.advance_n(matched.len());
}

fn operator_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched(lexer, regex);
    let span = lexer.span(matched.len());

    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Operator, matched, span));
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) {
    quoted_handler(lexer, regex, TokenKind::String);
}

fn character_handler(lexer: &mut Lexer, regex: &Regex) {
    quoted_handler(lexer, regex, TokenKind::Character);
}

fn quoted_handler(lexer: &mut Lexer, regex: &Regex, kind: TokenKind) {
    let matched = matched(lexer, regex);
    let span = lexer.span(matched.len());

    // Both quote characters are ASCII, so slicing them off stays on char boundaries.
    let literal = unescape(&matched[1..matched.len() - 1]);

    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(kind, literal, span));
}

fn unescape(literal: &str) -> String {
    let mut result = String::new();
    let mut chars = literal.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek() {
            Some('n') => {
                result.push('\n');
                chars.next();
            }
            Some('t') => {
                result.push('\t');
                chars.next();
            }
            Some('r') => {
                result.push('\r');
                chars.next();
            }
            Some('\\') => {
                result.push('\\');
                chars.next();
            }
            Some('"') => {
                result.push('"');
                chars.next();
            }
            Some('\'') => {
                result.push('\'');
                chars.next();
            }
            Some('0') => {
                result.push('\0');
                chars.next();
            }
            Some('x') => {
                chars.next();
                let mut hex = String::new();

                for _ in 0..2 {
                    match chars.peek() {
                        Some(ch) if ch.is_ascii_hexdigit() => {
                            hex.push(*ch);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) => result.push(byte as char),
                    Err(_) => {
                        result.push('x');
                        result.push_str(&hex);
                    }
                }
            }
            _ => result.push(ch), // Keep the backslash
        }
    }

    result
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let value = matched(lexer, regex);
    let span = lexer.span(value.len());
    let kind = if KEYWORDS.contains(value.as_str()) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };

    lexer.advance_n(value.len());
    lexer.push(MK_TOKEN!(kind, value, span));
}

/// Splits `source` into tokens, always ending with an EOF token.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let mut matched = false;

        for index in 0..lex.patterns.len() {
            let pattern = lex.patterns[index].clone();

            if pattern.regex.is_match(lex.remainder()) {
                (pattern.handler)(&mut lex, &pattern.regex);
                matched = true;
                break;
            }
        }

        if !matched {
            return Err(Error::new(
                ErrorImpl::UnrecognisedToken {
                    token: lex.at().to_string(),
                },
                lex.position(),
            ));
        }
    }

    let span = lex.span(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));

    log::debug!("tokenized {} tokens from {}", lex.tokens.len(), lex.file);
    Ok(lex.tokens)
}
