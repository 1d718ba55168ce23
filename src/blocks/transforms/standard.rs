//! Pre-built transform pipelines for the common processing paths

use super::stages::{LexedSource, MergeText, ParseRaw, Tokenize};
use super::Transform;
use crate::blocks::parsing::ParseOutcome;
use once_cell::sync::Lazy;

/// Source text → token stream.
pub static TOKENIZE: Lazy<Transform<String, LexedSource>> =
    Lazy::new(|| Transform::from_fn(Ok).then(Tokenize));

/// Source text → document + errors, without the merge pass.
pub static PARSE_RAW: Lazy<Transform<String, ParseOutcome>> =
    Lazy::new(|| Transform::from_fn(Ok).then(Tokenize).then(ParseRaw));

/// Source text → merged document + errors. The full standard path.
pub static PARSE: Lazy<Transform<String, ParseOutcome>> =
    Lazy::new(|| Transform::from_fn(Ok).then(Tokenize).then(ParseRaw).then(MergeText));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_parse_pipeline() {
        let outcome = PARSE.run("/* note */".to_string()).unwrap();
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.document.children.len(), 1);
    }

    #[test]
    fn test_tokenize_pipeline() {
        let lexed = TOKENIZE.run(":::\n:::".to_string()).unwrap();
        assert_eq!(lexed.tokens.len(), 3);
    }

    #[test]
    fn test_raw_pipeline_skips_merge() {
        let raw = PARSE_RAW.run("a b".to_string()).unwrap();
        assert_eq!(raw.document.children.len(), 3);
    }
}
