//! Test support utilities
//!
//! Factories for building token streams and small assertion helpers for
//! picking apart parsed trees. Used by the unit tests in this crate and by
//! the integration tests under `tests/`.

pub mod factories {
    use crate::blocks::token::{Span, Token};

    /// Build a `(Token, Span)` stream from `(token, start, end)` triples.
    pub fn mk_tokens(entries: &[(Token, usize, usize)]) -> Vec<(Token, Span)> {
        entries
            .iter()
            .map(|(token, start, end)| (token.clone(), *start..*end))
            .collect()
    }
}

pub mod matchers {
    use crate::blocks::ast::elements::{
        CodeBlock, CommentBlock, GenericBlock, GenericInline, Node, ScriptInline,
    };

    /// Extract the value of a text node, panicking with the actual kind on
    /// mismatch.
    pub fn expect_text(node: &Node) -> &str {
        node.as_text()
            .unwrap_or_else(|| panic!("expected text node, got {}", node.kind_name()))
    }

    pub fn expect_generic_block(node: &Node) -> &GenericBlock {
        match node {
            Node::GenericBlock(block) => block,
            other => panic!("expected generic block, got {}", other.kind_name()),
        }
    }

    pub fn expect_generic_inline(node: &Node) -> &GenericInline {
        match node {
            Node::GenericInline(inline) => inline,
            other => panic!("expected generic inline, got {}", other.kind_name()),
        }
    }

    pub fn expect_code_block(node: &Node) -> &CodeBlock {
        match node {
            Node::CodeBlock(code) => code,
            other => panic!("expected code block, got {}", other.kind_name()),
        }
    }

    pub fn expect_comment_block(node: &Node) -> &CommentBlock {
        match node {
            Node::CommentBlock(comment) => comment,
            other => panic!("expected comment block, got {}", other.kind_name()),
        }
    }

    pub fn expect_script_inline(node: &Node) -> &ScriptInline {
        match node {
            Node::ScriptInline(script) => script,
            other => panic!("expected inline script, got {}", other.kind_name()),
        }
    }

    /// Assert that no two adjacent siblings are both text nodes, at any
    /// nesting level.
    pub fn assert_no_adjacent_text(nodes: &[Node]) {
        for pair in nodes.windows(2) {
            assert!(
                !(pair[0].is_text() && pair[1].is_text()),
                "adjacent text siblings: {:?} / {:?}",
                pair[0],
                pair[1]
            );
        }
        for node in nodes {
            if let Some(children) = node.children() {
                assert_no_adjacent_text(children);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::factories::mk_tokens;
    use super::matchers::assert_no_adjacent_text;
    use crate::blocks::ast::elements::{GenericInline, Node, Text};
    use crate::blocks::token::Token;

    #[test]
    fn test_mk_tokens_pairs_spans() {
        let tokens = mk_tokens(&[
            (Token::Identifier("a".to_string()), 0, 1),
            (Token::Whitespace, 1, 2),
        ]);
        assert_eq!(tokens[0].1, 0..1);
        assert_eq!(tokens[1].1, 1..2);
    }

    #[test]
    fn test_assert_no_adjacent_text_accepts_separated_text() {
        let nodes = vec![
            Node::Text(Text::new("a")),
            Node::GenericInline(GenericInline::new(None, None, vec![])),
            Node::Text(Text::new("b")),
        ];
        assert_no_adjacent_text(&nodes);
    }

    #[test]
    #[should_panic(expected = "adjacent text siblings")]
    fn test_assert_no_adjacent_text_rejects_adjacent_text() {
        let nodes = vec![Node::Text(Text::new("a")), Node::Text(Text::new("b"))];
        assert_no_adjacent_text(&nodes);
    }
}
