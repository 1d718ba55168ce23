//! Text-merge pass
//!
//! A pure tree transform that coalesces adjacent literal-text siblings at
//! every nesting level. The pass recurses into generic container content
//! (the only recursive kinds) and never touches the opaque string content of
//! comment, code, or script nodes. Running it on an already-merged tree
//! returns an identical tree.

use crate::blocks::ast::elements::{Document, Node};
use crate::blocks::ast::range::Location;

/// Merge adjacent text siblings throughout a document.
pub fn merge_document(document: Document) -> Document {
    let location = document.location.clone();
    Document::new(merge_nodes(document.children)).at(location)
}

/// Merge adjacent text siblings in one child sequence, recursing into
/// generic containers.
pub fn merge_nodes(nodes: Vec<Node>) -> Vec<Node> {
    let mut merged: Vec<Node> = Vec::with_capacity(nodes.len());

    for node in nodes {
        let node = match node {
            Node::GenericBlock(mut block) => {
                block.content = merge_nodes(block.content);
                Node::GenericBlock(block)
            }
            Node::GenericInline(mut inline) => {
                inline.content = merge_nodes(inline.content);
                Node::GenericInline(inline)
            }
            other => other,
        };

        match node {
            Node::Text(next) => {
                if let Some(Node::Text(previous)) = merged.last_mut() {
                    previous.value.push_str(&next.value);
                    previous.location = Location::covering(&previous.location, &next.location);
                } else {
                    merged.push(Node::Text(next));
                }
            }
            other => merged.push(other),
        }
    }

    merged
}
