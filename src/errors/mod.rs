//! Error types and error handling for the front end.
//!
//! This module defines the single error carrier shared by the lexer and
//! the parser. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each diagnostic
//! - Error names and suggestions for rendering

pub mod errors;

#[cfg(test)]
mod tests;
