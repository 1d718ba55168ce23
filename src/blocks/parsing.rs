//! Parser
//!
//!     This module turns a token stream into a [`Document`] plus an error
//!     list. Parsing is total over lexable input: every call produces a
//!     best-effort tree, and recoverable problems accumulate as
//!     [`ParseError`](crate::blocks::ast::error::ParseError) values instead
//!     of aborting.
//!
//!     The primary entry points parse, then run the text-merge pass, so the
//!     returned tree never holds two adjacent literal-text siblings. The
//!     `_raw` variant skips the merge for callers that want the
//!     token-granular tree (mostly tests and custom pipelines).

pub mod attributes;
#[allow(clippy::module_inception)]
pub mod parser;

pub use parser::{ParserOptions, DEFAULT_MAX_NESTING_DEPTH};

use crate::blocks::ast::elements::Document;
use crate::blocks::ast::error::ParseError;
use crate::blocks::lexing::{tokenize, LexError};
use crate::blocks::transforms::merge_text::merge_document;
use parser::Parser;

/// Result of a parse run: the tree plus every recoverable error met on the
/// way. Errors being present means the tree is partial or degraded, never
/// absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub document: Document,
    pub errors: Vec<ParseError>,
}

/// Parse source text into a merged document tree.
///
/// The only fatal failure is a [`LexError`]; everything recoverable lands in
/// the outcome's error list.
pub fn parse_document(source: &str) -> Result<ParseOutcome, LexError> {
    parse_document_with_options(source, ParserOptions::default())
}

/// Parse with explicit parser options.
pub fn parse_document_with_options(
    source: &str,
    options: ParserOptions,
) -> Result<ParseOutcome, LexError> {
    let outcome = parse_document_raw_with_options(source, options)?;
    Ok(ParseOutcome {
        document: merge_document(outcome.document),
        errors: outcome.errors,
    })
}

/// Parse without running the text-merge pass.
pub fn parse_document_raw(source: &str) -> Result<ParseOutcome, LexError> {
    parse_document_raw_with_options(source, ParserOptions::default())
}

/// Parse without the merge pass, with explicit options.
pub fn parse_document_raw_with_options(
    source: &str,
    options: ParserOptions,
) -> Result<ParseOutcome, LexError> {
    let tokens = tokenize(source)?;
    let (document, errors) = Parser::new(source, tokens, options).run();
    Ok(ParseOutcome { document, errors })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::ast::elements::Node;
    use crate::blocks::ast::error::{ConstructKind, ParseError};

    fn parse(source: &str) -> ParseOutcome {
        parse_document(source).expect("lexing failed")
    }

    #[test]
    fn test_empty_input() {
        let outcome = parse("");
        assert_eq!(outcome.document.children.len(), 0);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_plain_text_merges_to_one_node() {
        let outcome = parse("just some plain text.\n");
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.document.children.len(), 1);
        assert_eq!(
            outcome.document.children[0].as_text(),
            Some("just some plain text.\n")
        );
    }

    #[test]
    fn test_comment_block_keeps_interior_spacing() {
        let outcome = parse("/* comment */");
        assert!(outcome.errors.is_empty());
        match &outcome.document.children[0] {
            Node::CommentBlock(comment) => {
                assert_eq!(comment.name, None);
                assert_eq!(comment.content, " comment ");
            }
            other => panic!("expected comment block, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_code_block_length_mismatch_still_closes() {
        let outcome = parse("```\ncode\n````");
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(
            outcome.errors[0],
            ParseError::DelimiterLengthMismatch {
                open_length: 3,
                close_length: 4,
                position: crate::blocks::ast::range::Position::new(3, 1, 9),
            }
        );
        match &outcome.document.children[0] {
            Node::CodeBlock(code) => assert_eq!(code.content, "code\n"),
            other => panic!("expected code block, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_nested_generic_blocks_by_longer_delimiters() {
        let outcome = parse("::::#outer\n::::::#inner\ntext\n::::::\n::::");
        assert!(outcome.errors.is_empty(), "errors: {:?}", outcome.errors);

        let outer = match &outcome.document.children[0] {
            Node::GenericBlock(block) => block,
            other => panic!("expected generic block, got {}", other.kind_name()),
        };
        assert_eq!(outer.name.as_deref(), Some("outer"));
        assert_eq!(outer.delimiter_length, 4);

        let inner = outer
            .content
            .iter()
            .find_map(|node| match node {
                Node::GenericBlock(block) => Some(block),
                _ => None,
            })
            .expect("inner generic block");
        assert_eq!(inner.name.as_deref(), Some("inner"));
        assert_eq!(inner.delimiter_length, 6);
        assert_eq!(inner.content.len(), 1);
        assert_eq!(inner.content[0].as_text(), Some("text\n"));
    }

    #[test]
    fn test_escaped_delimiter_is_literal_text() {
        let outcome = parse("\\:::");
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.document.children.len(), 1);
        assert_eq!(outcome.document.children[0].as_text(), Some(":::"));
    }

    #[test]
    fn test_unclosed_generic_block_recovers() {
        let outcome = parse(":::#note\nbody text");
        assert_eq!(outcome.errors.len(), 1);
        assert!(matches!(
            outcome.errors[0],
            ParseError::UnclosedConstruct {
                kind: ConstructKind::GenericBlock,
                ..
            }
        ));
        match &outcome.document.children[0] {
            Node::GenericBlock(block) => {
                assert_eq!(block.name.as_deref(), Some("note"));
                assert_eq!(block.content[0].as_text(), Some("body text"));
            }
            other => panic!("expected generic block, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_shorter_closer_reports_mismatch_and_closes() {
        let outcome = parse("::::::x\n:::");
        assert_eq!(outcome.errors.len(), 1);
        assert!(matches!(
            outcome.errors[0],
            ParseError::DelimiterLengthMismatch {
                open_length: 6,
                close_length: 3,
                ..
            }
        ));
        assert!(matches!(outcome.document.children[0], Node::GenericBlock(_)));
    }

    #[test]
    fn test_colon_without_line_closer_is_text() {
        let outcome = parse("Inline code: This is after the colon.");
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.document.children.len(), 1);
        assert_eq!(
            outcome.document.children[0].as_text(),
            Some("Inline code: This is after the colon.")
        );
    }

    #[test]
    fn test_colon_pair_on_line_opens_generic_inline() {
        let outcome = parse(":emphasis:");
        assert!(outcome.errors.is_empty());
        match &outcome.document.children[0] {
            Node::GenericInline(inline) => {
                assert_eq!(inline.name, None);
                assert_eq!(inline.content.len(), 1);
                assert_eq!(inline.content[0].as_text(), Some("emphasis"));
            }
            other => panic!("expected generic inline, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_closer_on_next_line_does_not_open() {
        let outcome = parse("x :a\nb: y");
        assert!(outcome.errors.is_empty());
        // Both colons end up as literal text; merge leaves text and newline
        // boundaries as a single node.
        assert_eq!(outcome.document.children.len(), 1);
        assert_eq!(outcome.document.children[0].as_text(), Some("x :a\nb: y"));
    }

    #[test]
    fn test_inline_script_expression() {
        let outcome = parse("value: !count + 1! here");
        // The colon has a closing candidate? No second colon on the line, so
        // it stays literal; the script expression parses.
        assert!(outcome.errors.is_empty());
        let script = outcome
            .document
            .children
            .iter()
            .find_map(|node| match node {
                Node::ScriptInline(script) => Some(script),
                _ => None,
            })
            .expect("inline script");
        assert_eq!(script.expression, "count + 1");
    }

    #[test]
    fn test_nesting_depth_limit_reports_structural_error() {
        // Openers of strictly growing length, never closed: recursion depth
        // equals the number of openers.
        let mut source = String::new();
        for i in 0..6 {
            source.push_str(&":".repeat(3 + i));
            source.push('\n');
        }
        let outcome = parse_document_with_options(
            &source,
            ParserOptions {
                max_nesting_depth: 4,
            },
        )
        .expect("lexing failed");

        assert!(outcome
            .errors
            .iter()
            .any(|e| matches!(e, ParseError::NestingTooDeep { limit: 4, .. })));
    }

    #[test]
    fn test_raw_parse_keeps_token_granular_text() {
        let outcome = parse_document_raw("a b").expect("lexing failed");
        // Identifier, whitespace, identifier: three text nodes before merge.
        assert_eq!(outcome.document.children.len(), 3);
    }
}
