//! Base tokenization implementation for the Blocks lexer
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where source strings become token streams.

use crate::blocks::ast::range::SourceLocation;
use crate::blocks::lexing::common::LexError;
use crate::blocks::token::{Span, Token};
use logos::Logos;

/// Tokenize source code with location information
///
/// Returns tokens paired with their byte spans, in source order. The parser
/// and any token transformation operate on this stream; nothing downstream
/// re-reads the source except through the spans recorded here.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                let locations = SourceLocation::new(source);
                return Err(LexError {
                    position: locations.byte_to_position(lexer.span().start),
                    snippet: lexer.slice().to_string(),
                });
            }
        }
    }

    Ok(tokens)
}
