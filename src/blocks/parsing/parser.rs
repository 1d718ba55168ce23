//! Recursive-descent parser core
//!
//!     The parser walks the token stream with an explicit cursor and an
//!     explicit stopping predicate per content loop; there is no parser
//!     framework underneath. The eight construct grammars share two
//!     parametrized routines: one for the verbatim family (comment, code,
//!     script) whose content is re-assembled from source images, and one for
//!     the recursive family (generic containers) whose content is a node
//!     sequence.
//!
//! Recovery
//!
//!     Malformed input never aborts parsing. Unclosed constructs close with
//!     the content collected so far, mismatched fence lengths close the node
//!     and record the disagreement, and stray attribute tokens are skipped.
//!     All of it lands in the error list next to the best-effort tree.
//!
//! Inline opener disambiguation
//!
//!     A single colon is only an opener when another single colon occurs
//!     among the remaining tokens of the current line before any block
//!     delimiter token; otherwise it is literal text. Backtick and
//!     exclamation openers use the same lookahead bounded by the end of the
//!     line only, since their content is opaque and may legitimately contain
//!     block delimiter characters. This is the line-bounded lookahead rule;
//!     the tests pin it.

use crate::blocks::ast::attributes::Attributes;
use crate::blocks::ast::elements::{
    CodeBlock, CodeInline, CommentBlock, CommentInline, Document, GenericBlock, GenericInline,
    Node, ScriptBlock, ScriptInline, Text,
};
use crate::blocks::ast::error::{ConstructKind, ParseError};
use crate::blocks::ast::range::{Location, Position, SourceLocation};
use crate::blocks::token::{Span, Token};

/// Default ceiling for generic container nesting.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 64;

/// Knobs for a parse run.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Maximum generic container nesting before the parser reports
    /// [`ParseError::NestingTooDeep`] instead of recursing further.
    pub max_nesting_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

/// Optional construct header: `#name` and `{...}` attributes.
struct Header {
    name: Option<String>,
    attributes: Option<Attributes>,
}

/// Verbatim-content block family selector.
#[derive(Clone, Copy)]
enum FencedKind {
    Code,
    Script,
}

impl FencedKind {
    fn construct(self) -> ConstructKind {
        match self {
            FencedKind::Code => ConstructKind::CodeBlock,
            FencedKind::Script => ConstructKind::ScriptBlock,
        }
    }
}

/// Verbatim-content inline family selector.
#[derive(Clone, Copy)]
enum InlineVerbatimKind {
    Code,
    Script,
}

impl InlineVerbatimKind {
    fn construct(self) -> ConstructKind {
        match self {
            InlineVerbatimKind::Code => ConstructKind::CodeInline,
            InlineVerbatimKind::Script => ConstructKind::ScriptInline,
        }
    }
}

/// Cursor-based parser over the lexed token stream.
///
/// One parse invocation allocates fresh state and touches nothing shared, so
/// concurrent parses of different inputs are independent.
pub(crate) struct Parser<'src> {
    source: &'src str,
    tokens: Vec<(Token, Span)>,
    pos: usize,
    locations: SourceLocation,
    errors: Vec<ParseError>,
    depth: usize,
    options: ParserOptions,
}

impl<'src> Parser<'src> {
    pub(crate) fn new(source: &'src str, tokens: Vec<(Token, Span)>, options: ParserOptions) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            locations: SourceLocation::new(source),
            errors: Vec::new(),
            depth: 0,
            options,
        }
    }

    /// Parse the whole token stream into a document plus its error list.
    pub(crate) fn run(mut self) -> (Document, Vec<ParseError>) {
        let mut children = Vec::new();
        while self.pos < self.tokens.len() {
            let node = self.block_level_node();
            children.push(node);
        }

        let end = self.locations.byte_to_position(self.source.len());
        let location = Location::new(Position::origin(), end);
        (Document::new(children).at(location), self.errors)
    }

    // ------------------------------------------------------------------
    // Cursor helpers
    // ------------------------------------------------------------------

    pub(super) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    pub(super) fn peek_at(&self, ahead: usize) -> Option<&Token> {
        self.tokens.get(self.pos + ahead).map(|(token, _)| token)
    }

    pub(super) fn bump(&mut self) -> Option<(Token, Span)> {
        let entry = self.tokens.get(self.pos).cloned();
        if entry.is_some() {
            self.pos += 1;
        }
        entry
    }

    pub(super) fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(Token::Whitespace)) {
            self.pos += 1;
        }
    }

    /// Position of the next unconsumed token (end of input when exhausted).
    pub(super) fn cursor_position(&self) -> Position {
        self.locations.byte_to_position(self.current_offset())
    }

    pub(super) fn push_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    fn current_offset(&self) -> usize {
        match self.tokens.get(self.pos) {
            Some((_, span)) => span.start,
            None => self.source.len(),
        }
    }

    /// Location from a recorded start offset to the end of the last consumed
    /// token.
    fn locate_from(&self, start_offset: usize) -> Location {
        let end_offset = if self.pos == 0 {
            start_offset
        } else {
            self.tokens[self.pos - 1].1.end.max(start_offset)
        };
        Location::new(
            self.locations.byte_to_position(start_offset),
            self.locations.byte_to_position(end_offset),
        )
    }

    /// Consume one token and return its exact character image.
    fn consume_image(&mut self) -> String {
        match self.bump() {
            Some((_, span)) => self.source[span].to_string(),
            None => String::new(),
        }
    }

    /// Scan the remaining tokens of the current line for an inline closer.
    fn closer_on_line<F>(&self, is_closer: F, stop_at_block_delimiters: bool) -> bool
    where
        F: Fn(&Token) -> bool,
    {
        for (token, _) in self.tokens[self.pos + 1..].iter() {
            if matches!(token, Token::Newline) {
                return false;
            }
            if is_closer(token) {
                return true;
            }
            if stop_at_block_delimiters && token.is_block_delimiter() {
                return false;
            }
        }
        false
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    fn block_level_node(&mut self) -> Node {
        match self.peek().cloned() {
            Some(Token::BlockCommentStart) => self.comment_block(),
            Some(Token::BlockCodeDelim(length)) => self.fenced_block(FencedKind::Code, length),
            Some(Token::BlockScriptDelim(length)) => self.fenced_block(FencedKind::Script, length),
            Some(Token::BlockGenericDelim(length)) => self.generic_block(length),
            _ => self.inline_or_text_node(),
        }
    }

    fn inline_or_text_node(&mut self) -> Node {
        match self.peek() {
            Some(Token::InlineCommentStart) => self.comment_inline(),
            Some(Token::InlineCodeDelim)
                if self.closer_on_line(|t| matches!(t, Token::InlineCodeDelim), false) =>
            {
                self.verbatim_inline(InlineVerbatimKind::Code)
            }
            Some(Token::InlineScriptDelim)
                if self.closer_on_line(|t| matches!(t, Token::InlineScriptDelim), false) =>
            {
                self.verbatim_inline(InlineVerbatimKind::Script)
            }
            Some(Token::InlineGenericDelim)
                if self.closer_on_line(|t| matches!(t, Token::InlineGenericDelim), true) =>
            {
                self.generic_inline()
            }
            _ => self.text_node(),
        }
    }

    // ------------------------------------------------------------------
    // Construct header
    // ------------------------------------------------------------------

    /// Parse the optional `#name` and `{...}` attributes after an opener.
    ///
    /// With `tentative` set, the whitespace skipped while looking for the
    /// header is rolled back when neither a name nor attributes follow, so
    /// it stays part of the content (comments and inline forms preserve
    /// their interior spacing this way).
    fn parse_header(&mut self, allow_attributes: bool, tentative: bool) -> Header {
        let start = self.pos;
        self.skip_whitespace();

        let mut name = None;
        if matches!(self.peek(), Some(Token::Hash)) {
            if let Some(Token::Identifier(ident)) = self.peek_at(1).cloned() {
                name = Some(ident);
                self.pos += 2;
                self.skip_whitespace();
            }
        }

        let mut attributes = None;
        if allow_attributes && matches!(self.peek(), Some(Token::LBrace)) {
            attributes = Some(self.parse_attributes());
            self.skip_whitespace();
        }

        if tentative && name.is_none() && attributes.is_none() {
            self.pos = start;
        }

        Header { name, attributes }
    }

    // ------------------------------------------------------------------
    // Block constructs
    // ------------------------------------------------------------------

    fn comment_block(&mut self) -> Node {
        let start_offset = self.current_offset();
        let open_position = self.cursor_position();
        self.bump(); // /*

        let header = self.parse_header(false, true);

        let mut content = String::new();
        loop {
            match self.peek() {
                None => {
                    self.push_error(ParseError::UnclosedConstruct {
                        kind: ConstructKind::CommentBlock,
                        open_position,
                    });
                    break;
                }
                Some(Token::BlockCommentEnd) => {
                    self.bump();
                    break;
                }
                Some(_) => {
                    let image = self.consume_image();
                    content.push_str(&image);
                }
            }
        }

        Node::CommentBlock(CommentBlock::new(header.name, content).at(self.locate_from(start_offset)))
    }

    fn fenced_block(&mut self, kind: FencedKind, open_length: usize) -> Node {
        let start_offset = self.current_offset();
        let open_position = self.cursor_position();
        self.bump(); // opening fence

        let header = self.parse_header(true, false);
        self.skip_whitespace();
        if matches!(self.peek(), Some(Token::Newline)) {
            self.bump();
        }

        let mut content = String::new();
        loop {
            match self.peek().cloned() {
                None => {
                    self.push_error(ParseError::UnclosedConstruct {
                        kind: kind.construct(),
                        open_position,
                    });
                    break;
                }
                Some(Token::BlockCodeDelim(close_length))
                    if matches!(kind, FencedKind::Code) =>
                {
                    let position = self.cursor_position();
                    self.bump();
                    if close_length != open_length {
                        self.push_error(ParseError::DelimiterLengthMismatch {
                            open_length,
                            close_length,
                            position,
                        });
                    }
                    break;
                }
                Some(Token::BlockScriptDelim(close_length))
                    if matches!(kind, FencedKind::Script) =>
                {
                    let position = self.cursor_position();
                    self.bump();
                    if close_length != open_length {
                        self.push_error(ParseError::DelimiterLengthMismatch {
                            open_length,
                            close_length,
                            position,
                        });
                    }
                    break;
                }
                Some(_) => {
                    let image = self.consume_image();
                    content.push_str(&image);
                }
            }
        }

        let location = self.locate_from(start_offset);
        match kind {
            FencedKind::Code => {
                Node::CodeBlock(CodeBlock::new(header.name, header.attributes, content).at(location))
            }
            FencedKind::Script => Node::ScriptBlock(
                ScriptBlock::new(header.name, header.attributes, content).at(location),
            ),
        }
    }

    fn generic_block(&mut self, open_length: usize) -> Node {
        if self.depth >= self.options.max_nesting_depth {
            let position = self.cursor_position();
            let limit = self.options.max_nesting_depth;
            self.push_error(ParseError::NestingTooDeep { position, limit });
            // The opener degrades to literal text instead of recursing.
            return self.text_node();
        }
        self.depth += 1;

        let start_offset = self.current_offset();
        let open_position = self.cursor_position();
        self.bump(); // opening fence

        let header = self.parse_header(true, false);
        self.skip_whitespace();
        if matches!(self.peek(), Some(Token::Newline)) {
            self.bump();
        }

        let mut content = Vec::new();
        loop {
            match self.peek().cloned() {
                None => {
                    self.push_error(ParseError::UnclosedConstruct {
                        kind: ConstructKind::GenericBlock,
                        open_position,
                    });
                    break;
                }
                Some(Token::BlockGenericDelim(close_length)) => {
                    if close_length == open_length {
                        self.bump();
                        break;
                    }
                    if close_length < open_length {
                        // A shorter run cannot open a nested container; it is
                        // consumed as a mismatched closer.
                        let position = self.cursor_position();
                        self.bump();
                        self.push_error(ParseError::DelimiterLengthMismatch {
                            open_length,
                            close_length,
                            position,
                        });
                        break;
                    }
                    content.push(self.generic_block(close_length));
                }
                Some(Token::BlockCommentStart) => content.push(self.comment_block()),
                Some(Token::BlockCodeDelim(length)) => {
                    content.push(self.fenced_block(FencedKind::Code, length))
                }
                Some(Token::BlockScriptDelim(length)) => {
                    content.push(self.fenced_block(FencedKind::Script, length))
                }
                Some(_) => content.push(self.inline_or_text_node()),
            }
        }

        self.depth -= 1;
        Node::GenericBlock(
            GenericBlock::new(header.name, header.attributes, open_length, content)
                .at(self.locate_from(start_offset)),
        )
    }

    // ------------------------------------------------------------------
    // Inline constructs
    // ------------------------------------------------------------------

    fn comment_inline(&mut self) -> Node {
        let start_offset = self.current_offset();
        self.bump(); // //

        let header = self.parse_header(false, true);

        let mut content = String::new();
        loop {
            match self.peek() {
                None => break,
                Some(Token::Newline) => {
                    // The terminating newline belongs to the comment but not
                    // to its content.
                    self.bump();
                    break;
                }
                Some(_) => {
                    let image = self.consume_image();
                    content.push_str(&image);
                }
            }
        }

        Node::CommentInline(
            CommentInline::new(header.name, content).at(self.locate_from(start_offset)),
        )
    }

    fn verbatim_inline(&mut self, kind: InlineVerbatimKind) -> Node {
        let start_offset = self.current_offset();
        let open_position = self.cursor_position();
        self.bump(); // opening delimiter

        let header = match kind {
            InlineVerbatimKind::Code => self.parse_header(true, true),
            // The inline script form is pure expression: no name, no
            // attributes.
            InlineVerbatimKind::Script => Header {
                name: None,
                attributes: None,
            },
        };

        let mut content = String::new();
        loop {
            match self.peek() {
                None | Some(Token::Newline) => {
                    self.push_error(ParseError::UnclosedConstruct {
                        kind: kind.construct(),
                        open_position,
                    });
                    break;
                }
                Some(Token::InlineCodeDelim) if matches!(kind, InlineVerbatimKind::Code) => {
                    self.bump();
                    break;
                }
                Some(Token::InlineScriptDelim) if matches!(kind, InlineVerbatimKind::Script) => {
                    self.bump();
                    break;
                }
                Some(_) => {
                    let image = self.consume_image();
                    content.push_str(&image);
                }
            }
        }

        let location = self.locate_from(start_offset);
        match kind {
            InlineVerbatimKind::Code => Node::CodeInline(
                CodeInline::new(header.name, header.attributes, content).at(location),
            ),
            InlineVerbatimKind::Script => {
                Node::ScriptInline(ScriptInline::new(content).at(location))
            }
        }
    }

    fn generic_inline(&mut self) -> Node {
        let start_offset = self.current_offset();
        let open_position = self.cursor_position();
        self.bump(); // :

        let header = self.parse_header(true, true);

        let mut content = Vec::new();
        loop {
            match self.peek() {
                None | Some(Token::Newline) => {
                    self.push_error(ParseError::UnclosedConstruct {
                        kind: ConstructKind::GenericInline,
                        open_position,
                    });
                    break;
                }
                Some(Token::InlineGenericDelim) => {
                    self.bump();
                    break;
                }
                Some(Token::InlineCodeDelim)
                    if self.closer_on_line(|t| matches!(t, Token::InlineCodeDelim), false) =>
                {
                    content.push(self.verbatim_inline(InlineVerbatimKind::Code))
                }
                Some(Token::InlineScriptDelim)
                    if self.closer_on_line(|t| matches!(t, Token::InlineScriptDelim), false) =>
                {
                    content.push(self.verbatim_inline(InlineVerbatimKind::Script))
                }
                // Blocks may not nest inside inline containers; block
                // delimiters and inline comment markers read as literal text.
                Some(_) => content.push(self.text_node()),
            }
        }

        Node::GenericInline(
            GenericInline::new(header.name, header.attributes, content)
                .at(self.locate_from(start_offset)),
        )
    }

    fn text_node(&mut self) -> Node {
        let start_offset = self.current_offset();
        let value = match self.bump() {
            Some((Token::Escaped(ch), _)) => ch.to_string(),
            Some((_, span)) => self.source[span].to_string(),
            None => String::new(),
        };
        Node::Text(Text::new(value).at(self.locate_from(start_offset)))
    }
}
