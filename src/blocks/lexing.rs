//! Lexer
//!
//!     This module orchestrates tokenization for the Blocks format. The token
//!     set is defined with logos in [token](crate::blocks::token); lexing here
//!     is a thin loop that pairs each token with its byte span in the source.
//!
//! Source Token Preservation
//!
//!     Tokens carry the byte range of their source text. The parser relies on
//!     these spans to re-assemble the exact character images of opaque
//!     content (comments, code, script expressions) and to attach line/column
//!     locations to every AST node, so spans must be preserved untouched
//!     through any token handling.
//!
//! Failure
//!
//!     The single-character fallback token makes the lexer total over valid
//!     UTF-8, so tokenization failing indicates an internal contradiction in
//!     the token set. That case is surfaced as a fatal [`LexError`] carrying
//!     the position and the offending snippet; no partial token stream is
//!     returned.

pub mod base_tokenization;
pub mod common;

pub use base_tokenization::tokenize;
pub use common::LexError;
