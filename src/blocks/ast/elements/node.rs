//! The node union over all non-root elements
//!
//! Downstream passes (rendering, evaluation, merging) dispatch on this enum
//! with exhaustive matches, so adding a node kind forces every dispatch site
//! to be revisited at compile time.

use super::super::range::Location;
use super::code::{CodeBlock, CodeInline};
use super::comment::{CommentBlock, CommentInline};
use super::generic::{GenericBlock, GenericInline};
use super::script::{ScriptBlock, ScriptInline};
use super::text::Text;
use serde::{Deserialize, Serialize};

/// Any node that can appear in document or container content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    Text(Text),
    CommentBlock(CommentBlock),
    CommentInline(CommentInline),
    CodeBlock(CodeBlock),
    CodeInline(CodeInline),
    ScriptBlock(ScriptBlock),
    ScriptInline(ScriptInline),
    GenericBlock(GenericBlock),
    GenericInline(GenericInline),
}

impl Node {
    /// Stable kind name used in diagnostics and snapshot renderings.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Text(_) => "text",
            Node::CommentBlock(_) => "comment-block",
            Node::CommentInline(_) => "comment-inline",
            Node::CodeBlock(_) => "code-block",
            Node::CodeInline(_) => "code-inline",
            Node::ScriptBlock(_) => "script-block",
            Node::ScriptInline(_) => "script-inline",
            Node::GenericBlock(_) => "generic-block",
            Node::GenericInline(_) => "generic-inline",
        }
    }

    pub fn location(&self) -> &Location {
        match self {
            Node::Text(n) => &n.location,
            Node::CommentBlock(n) => &n.location,
            Node::CommentInline(n) => &n.location,
            Node::CodeBlock(n) => &n.location,
            Node::CodeInline(n) => &n.location,
            Node::ScriptBlock(n) => &n.location,
            Node::ScriptInline(n) => &n.location,
            Node::GenericBlock(n) => &n.location,
            Node::GenericInline(n) => &n.location,
        }
    }

    /// Child nodes for the recursive kinds, `None` for opaque-content kinds.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::GenericBlock(n) => Some(&n.content),
            Node::GenericInline(n) => Some(&n.content),
            Node::Text(_)
            | Node::CommentBlock(_)
            | Node::CommentInline(_)
            | Node::CodeBlock(_)
            | Node::CodeInline(_)
            | Node::ScriptBlock(_)
            | Node::ScriptInline(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Convenience accessor for the literal value of a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(&text.value),
            _ => None,
        }
    }
}

/// Depth-first walk over a node and its descendants.
///
/// Only the recursive kinds contribute descendants; opaque content is never
/// walked into.
pub fn walk<'a>(node: &'a Node, visit: &mut dyn FnMut(&'a Node)) {
    visit(node);
    if let Some(children) = node.children() {
        for child in children {
            walk(child, visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        let node = Node::Text(Text::new("x"));
        assert_eq!(node.kind_name(), "text");
        let node = Node::GenericBlock(GenericBlock::new(None, None, 3, Vec::new()));
        assert_eq!(node.kind_name(), "generic-block");
    }

    #[test]
    fn test_children_only_for_recursive_kinds() {
        let opaque = Node::CodeBlock(CodeBlock::new(None, None, "x"));
        assert!(opaque.children().is_none());

        let inner = Node::Text(Text::new("y"));
        let container = Node::GenericInline(GenericInline::new(None, None, vec![inner]));
        assert_eq!(container.children().map(|c| c.len()), Some(1));
    }

    #[test]
    fn test_walk_visits_nested_nodes() {
        let tree = Node::GenericBlock(GenericBlock::new(
            None,
            None,
            4,
            vec![
                Node::Text(Text::new("a")),
                Node::GenericInline(GenericInline::new(
                    None,
                    None,
                    vec![Node::Text(Text::new("b"))],
                )),
            ],
        ));

        let mut kinds = Vec::new();
        walk(&tree, &mut |node| kinds.push(node.kind_name()));
        assert_eq!(
            kinds,
            vec!["generic-block", "text", "generic-inline", "text"]
        );
    }
}
