//! Common lexer types
//!
//! This module contains the fatal error tier of the lexer. Unlike parse
//! errors, a lex error aborts tokenization entirely.

use crate::blocks::ast::range::Position;
use std::fmt;

/// Fatal tokenization failure
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    /// Where tokenization stopped
    pub position: Position,
    /// The source fragment no pattern matched
    pub snippet: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexing error at {}: no token pattern matched {:?}",
            self.position, self.snippet
        )
    }
}

impl std::error::Error for LexError {}

impl From<LexError> for String {
    fn from(err: LexError) -> Self {
        err.to_string()
    }
}
