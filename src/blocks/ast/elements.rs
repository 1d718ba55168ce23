//! AST node type definitions organized by element kind
//!
//! Each construct of the Blocks language gets one struct. Content is either
//! an opaque string (comment/code/script kinds, never re-parsed) or a vector
//! of child nodes (generic kinds and the document root, the recursion
//! points). Nodes are built once by the parser and are immutable afterwards;
//! transforms produce new trees.

pub mod code;
pub mod comment;
pub mod document;
pub mod generic;
pub mod node;
pub mod script;
pub mod text;

pub use code::{CodeBlock, CodeInline};
pub use comment::{CommentBlock, CommentInline};
pub use document::Document;
pub use generic::{GenericBlock, GenericInline};
pub use node::{walk, Node};
pub use script::{ScriptBlock, ScriptInline};
pub use text::Text;
