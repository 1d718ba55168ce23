//! AST definitions and utilities for the Blocks format
//!
//!     This module provides the core Abstract Syntax Tree definitions, along
//!     with utilities for tracking source positions, modeling parse errors,
//!     and rendering normalized snapshots.
//!
//! Shape
//!
//!     Every node carries a kind, an optional name, optional attributes,
//!     content, and a location. Content is an opaque string for comment,
//!     code, and script kinds (never re-parsed) and an ordered child list for
//!     the generic kinds and the document root. This shape is the contract
//!     the external collaborators (renderer, evaluator, preprocessor) rely
//!     on, which is why the whole tree derives serde with a `type` tag on
//!     the node union.
//!
//! Nesting
//!
//!     The content relationship is a tree, not a graph: each node owns its
//!     children directly, so no cycle is possible by construction. Only
//!     generic containers recurse; blocks may not nest inside inline
//!     containers, which the parser enforces by never producing such trees.
//!
//! ## Modules
//!
//! - `range` - Position and Location types plus byte-offset conversion
//! - `attributes` - the `{#id .class %option key=value}` annotation model
//! - `elements` - AST node type definitions organized by element kind
//! - `error` - the recoverable parse error tier
//! - `snapshot` - normalized outline rendering for tests and tooling

pub mod attributes;
pub mod elements;
pub mod error;
pub mod range;
pub mod snapshot;

pub use attributes::Attributes;
pub use elements::{
    walk, CodeBlock, CodeInline, CommentBlock, CommentInline, Document, GenericBlock,
    GenericInline, Node, ScriptBlock, ScriptInline, Text,
};
pub use error::{format_source_context, render_with_context, ConstructKind, ParseError};
pub use range::{Location, Position, SourceLocation};
