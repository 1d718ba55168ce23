//! Normalized outline rendering of a parsed tree
//!
//! Produces a deterministic, line-per-node string for snapshot tests and
//! debugging. Opaque content is rendered with Rust debug escaping so
//! newlines stay visible on one line.

use super::elements::{Document, Node};

/// Serialize a document to pretty JSON, the exchange shape downstream
/// collaborators (renderer, evaluator) consume.
pub fn to_json(document: &Document) -> serde_json::Result<String> {
    serde_json::to_string_pretty(document)
}

/// Render a document as an indented outline.
pub fn outline(document: &Document) -> String {
    let mut out = String::from("document\n");
    for child in &document.children {
        outline_node(child, 1, &mut out);
    }
    out
}

fn outline_node(node: &Node, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let mut line = format!("{}{}", indent, node.kind_name());

    match node {
        Node::Text(text) => line.push_str(&format!(" {:?}", text.value)),
        Node::CommentBlock(n) => {
            push_name(&mut line, &n.name);
            line.push_str(&format!(" {:?}", n.content));
        }
        Node::CommentInline(n) => {
            push_name(&mut line, &n.name);
            line.push_str(&format!(" {:?}", n.content));
        }
        Node::CodeBlock(n) => {
            push_name(&mut line, &n.name);
            push_attrs(&mut line, &n.attributes);
            line.push_str(&format!(" {:?}", n.content));
        }
        Node::CodeInline(n) => {
            push_name(&mut line, &n.name);
            push_attrs(&mut line, &n.attributes);
            line.push_str(&format!(" {:?}", n.content));
        }
        Node::ScriptBlock(n) => {
            push_name(&mut line, &n.name);
            push_attrs(&mut line, &n.attributes);
            line.push_str(&format!(" {:?}", n.content));
        }
        Node::ScriptInline(n) => line.push_str(&format!(" {:?}", n.expression)),
        Node::GenericBlock(n) => {
            push_name(&mut line, &n.name);
            push_attrs(&mut line, &n.attributes);
            line.push_str(&format!(" (delim {})", n.delimiter_length));
        }
        Node::GenericInline(n) => {
            push_name(&mut line, &n.name);
            push_attrs(&mut line, &n.attributes);
        }
    }

    line.push('\n');
    out.push_str(&line);

    if let Some(children) = node.children() {
        for child in children {
            outline_node(child, depth + 1, out);
        }
    }
}

fn push_name(line: &mut String, name: &Option<String>) {
    if let Some(name) = name {
        line.push_str(&format!(" #{}", name));
    }
}

fn push_attrs(line: &mut String, attributes: &Option<super::attributes::Attributes>) {
    if let Some(attributes) = attributes {
        line.push_str(&format!(" {}", attributes));
    }
}
