//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, literals, punctuation and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//!
//! It also defines the [`stream::TokenStream`] interface the parser reads from.

pub mod lexer;
pub mod stream;
pub mod tokens;
