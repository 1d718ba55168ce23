//! Individual pipeline stages
//!
//! Each stage wraps one step of the standard path (tokenize, parse, merge)
//! as a [`Runnable`] so custom pipelines can recombine them.

use super::merge_text::merge_document;
use super::{Runnable, TransformError};
use crate::blocks::lexing::tokenize;
use crate::blocks::parsing::{ParseOutcome, ParserOptions};
use crate::blocks::token::{Span, Token};

/// Source text paired with its token stream; spans index into `source`.
#[derive(Debug, Clone, PartialEq)]
pub struct LexedSource {
    pub source: String,
    pub tokens: Vec<(Token, Span)>,
}

/// String → token stream. Fails with the lexer's fatal tier.
pub struct Tokenize;

impl Runnable<String, LexedSource> for Tokenize {
    fn run(&self, input: String) -> Result<LexedSource, TransformError> {
        let tokens =
            tokenize(&input).map_err(|e| TransformError::new("tokenize", e.to_string()))?;
        Ok(LexedSource {
            source: input,
            tokens,
        })
    }
}

/// Token stream → document plus error list, without the merge pass.
pub struct ParseRaw;

impl Runnable<LexedSource, ParseOutcome> for ParseRaw {
    fn run(&self, input: LexedSource) -> Result<ParseOutcome, TransformError> {
        let (document, errors) = crate::blocks::parsing::parser::Parser::new(
            &input.source,
            input.tokens,
            ParserOptions::default(),
        )
        .run();
        Ok(ParseOutcome { document, errors })
    }
}

/// Coalesce adjacent text siblings throughout the outcome's tree.
pub struct MergeText;

impl Runnable<ParseOutcome, ParseOutcome> for MergeText {
    fn run(&self, input: ParseOutcome) -> Result<ParseOutcome, TransformError> {
        Ok(ParseOutcome {
            document: merge_document(input.document),
            errors: input.errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_stage() {
        let lexed = Tokenize.run("ab cd".to_string()).unwrap();
        assert_eq!(lexed.source, "ab cd");
        assert_eq!(lexed.tokens.len(), 3);
    }

    #[test]
    fn test_stage_chain_matches_entry_point() {
        let source = ":::#note\nbody\n:::\n";
        let lexed = Tokenize.run(source.to_string()).unwrap();
        let raw = ParseRaw.run(lexed).unwrap();
        let merged = MergeText.run(raw).unwrap();

        let direct = crate::blocks::parsing::parse_document(source).unwrap();
        assert_eq!(merged, direct);
    }
}
