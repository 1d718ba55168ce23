//! # blocks-parser
//!
//! A parser for the Blocks markup language.
//!
//! Blocks documents mix literal text with four kinds of delimited constructs
//! (comments, code, script expressions, and generic named containers), each
//! in a block and an inline form, optionally annotated with attributes.
//! Generic containers use repeated-colon delimiters whose open/close repeat
//! counts must match, which is what makes arbitrary nesting depth possible
//! with longer delimiters at each level.
//!
//! The crate covers the core of the toolchain: tokenization, the
//! recursive-descent parse into a location-tracked AST, and the text-merge
//! pass. The include preprocessor and front-matter extractor run before
//! this crate; expression evaluation and rendering run after it, consuming
//! the serialized tree.
//!
//! ```ignore
//! let outcome = blocks_parser::parse_document(":::#note\nSome text.\n:::\n")?;
//! assert!(outcome.errors.is_empty());
//! ```

pub mod blocks;

pub use blocks::ast::{Attributes, Document, Location, Node, Position};
pub use blocks::lexing::LexError;
pub use blocks::parsing::{
    parse_document, parse_document_with_options, ParseOutcome, ParserOptions,
};
