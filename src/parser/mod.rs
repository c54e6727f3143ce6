//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive descent parser that transforms a
//! stream of tokens into an Abstract Syntax Tree. It handles:
//!
//! - Atoms: literals, symbols and the keyword forms (`def`, `ext`, `if`, `cls`)
//! - Calls directly after an atom or after a full binary expression
//! - Binary and assignment expressions by precedence climbing
//! - Blocks and the top-level program
//!
//! The first error aborts the parse; there is no recovery.

pub mod expr;
pub mod lookups;
pub mod parser;
