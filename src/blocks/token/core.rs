//! Token definitions for the Blocks format
//!
//! This module defines all the tokens that can be produced by the Blocks lexer.
//! The tokens are defined using the logos derive macro for efficient tokenization.
//!
//! Matching order is encoded through logos' longest-match rule plus explicit
//! priorities where patterns overlap:
//!
//!     - Escape sequences (backslash + special character) beat the lone backslash.
//!     - Runs of 3+ backticks / exclamation marks / colons are block delimiters
//!       and beat the single-character inline variants. Runs of exactly 2 carry
//!       no structural meaning and lex as plain Content.
//!     - Identifier beats Content on equal-length matches.
//!     - AnyChar is the single-character fallback with the lowest priority, so
//!       tokenization never fails on well-formed UTF-8 input.

use logos::Logos;

/// Byte range of a token in the source text.
pub type Span = std::ops::Range<usize>;

/// All possible tokens in the Blocks format
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Comment delimiters
    #[token("/*")]
    BlockCommentStart,
    #[token("*/")]
    BlockCommentEnd,
    #[token("//")]
    InlineCommentStart,

    // Block delimiters (3+ repeats, repeat count is significant)
    #[regex("`{3,}", |lex| lex.slice().len())]
    BlockCodeDelim(usize),
    #[regex("!{3,}", |lex| lex.slice().len())]
    BlockScriptDelim(usize),
    #[regex(":{3,}", |lex| lex.slice().len())]
    BlockGenericDelim(usize),

    // Inline delimiters (single character)
    #[token("`")]
    InlineCodeDelim,
    #[token("!")]
    InlineScriptDelim,
    #[token(":")]
    InlineGenericDelim,

    // Attribute punctuation
    #[token("#")]
    Hash,
    #[token(".")]
    Dot,
    #[token("%")]
    Percent,
    #[token("=")]
    Equals,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Backslash + special character; carries the bare character so escaped
    // delimiters read as literal text
    #[regex(r#"\\[\\`!:#.%={}/*"]"#, |lex| lex.slice().chars().nth(1).unwrap())]
    Escaped(char),

    #[regex(r"[A-Za-z_][A-Za-z0-9_-]*", |lex| lex.slice().to_owned(), priority = 4)]
    Identifier(String),

    // Double-quoted literal; quotes are stripped, simple escapes are kept raw
    #[regex(r#""(?:[^"\\]|\\.)*""#, |lex| strip_quotes(lex.slice()))]
    StringValue(String),

    #[regex(r"[ \t]+")]
    Whitespace,

    #[regex(r"\r\n|\n")]
    Newline,

    // Maximal run free of special characters. Runs of exactly two delimiter
    // characters have no structural meaning and fall through to Content.
    #[token("``", |lex| lex.slice().to_owned())]
    #[token("!!", |lex| lex.slice().to_owned())]
    #[token("::", |lex| lex.slice().to_owned())]
    #[regex(r#"[^ \t\r\n/*`!:#.%={}"\\]+"#, |lex| lex.slice().to_owned(), priority = 2)]
    Content(String),

    // Single-character fallback for anything unmatched above
    #[regex(r".", |lex| lex.slice().chars().next().unwrap(), priority = 0)]
    AnyChar(char),
}

fn strip_quotes(slice: &str) -> String {
    slice[1..slice.len() - 1].to_owned()
}

impl Token {
    /// Check if this token opens or closes a block-form construct
    pub fn is_block_delimiter(&self) -> bool {
        matches!(
            self,
            Token::BlockCommentStart
                | Token::BlockCommentEnd
                | Token::BlockCodeDelim(_)
                | Token::BlockScriptDelim(_)
                | Token::BlockGenericDelim(_)
        )
    }

    /// Check if this token is insignificant horizontal whitespace
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }
}
