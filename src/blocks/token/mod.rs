//! Core token types and helpers shared across the lexer, parser, and tooling.

pub mod core;

pub use core::{Span, Token};
