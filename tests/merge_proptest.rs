//! Property-based tests for the text-merge pass and plain-text parsing
//!
//! Two invariants drive the merge pass: running it twice is the same as
//! running it once, and a merged tree never holds two adjacent text
//! siblings. Both are checked over generated trees rather than hand-picked
//! cases. A third property pins that delimiter-free input always parses
//! cleanly into a single text node.

use blocks_parser::blocks::ast::elements::{
    CodeInline, CommentInline, Document, GenericBlock, GenericInline, Node, Text,
};
use blocks_parser::blocks::parsing::parse_document;
use blocks_parser::blocks::testing::matchers::assert_no_adjacent_text;
use blocks_parser::blocks::transforms::merge_text::{merge_document, merge_nodes};
use proptest::prelude::*;

/// Generate arbitrary node trees with text runs, opaque leaves, and nested
/// generic containers.
fn node_strategy() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        "[a-z \\n]{0,8}".prop_map(|value| Node::Text(Text::new(value))),
        "[a-z]{1,8}".prop_map(|content| Node::CodeInline(CodeInline::new(None, None, content))),
        "[a-z]{1,8}".prop_map(|content| Node::CommentInline(CommentInline::new(None, content))),
    ];

    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            (prop::collection::vec(inner.clone(), 0..4), 3usize..7).prop_map(
                |(children, delimiter_length)| {
                    Node::GenericBlock(GenericBlock::new(None, None, delimiter_length, children))
                }
            ),
            prop::collection::vec(inner, 0..4).prop_map(|children| {
                Node::GenericInline(GenericInline::new(None, None, children))
            }),
        ]
    })
}

proptest! {
    #[test]
    fn merge_is_idempotent(children in prop::collection::vec(node_strategy(), 0..6)) {
        let document = Document::new(children);
        let once = merge_document(document);
        let twice = merge_document(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn merged_trees_have_no_adjacent_text_siblings(
        children in prop::collection::vec(node_strategy(), 0..6)
    ) {
        let merged = merge_nodes(children);
        assert_no_adjacent_text(&merged);
    }

    #[test]
    fn delimiter_free_input_parses_without_errors(source in "[a-z ]{1,40}(\\n[a-z ]{0,40}){0,3}") {
        let outcome = parse_document(&source).expect("lexing failed");
        prop_assert!(outcome.errors.is_empty());
        prop_assert_eq!(outcome.document.children.len(), 1);
        prop_assert_eq!(
            outcome.document.children[0].as_text(),
            Some(source.as_str())
        );
    }
}
