//! Recoverable parse error tier
//!
//! Parsing never aborts on malformed input: errors of this tier are
//! accumulated into a list alongside the best-effort tree. The presence of
//! errors means the tree is partial or degraded, never absent.
//!
//! The Display impls add human-readable hints (which delimiter looks
//! unterminated, what lengths disagreed); this is presentation only and
//! leaves the structured fields untouched. `render_with_context` additionally
//! shows a source excerpt around the offending position.

use super::range::Position;
use std::fmt;

/// The eight delimited construct kinds, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructKind {
    CommentBlock,
    CommentInline,
    CodeBlock,
    CodeInline,
    ScriptBlock,
    ScriptInline,
    GenericBlock,
    GenericInline,
}

impl ConstructKind {
    /// The closing delimiter an author would have to supply.
    pub fn closing_hint(&self) -> &'static str {
        match self {
            ConstructKind::CommentBlock => "*/",
            ConstructKind::CommentInline => "end of line",
            ConstructKind::CodeBlock => "a matching backtick fence",
            ConstructKind::CodeInline => "`",
            ConstructKind::ScriptBlock => "a matching !!! fence",
            ConstructKind::ScriptInline => "!",
            ConstructKind::GenericBlock => "a colon fence of the opening length",
            ConstructKind::GenericInline => ":",
        }
    }
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConstructKind::CommentBlock => "comment block",
            ConstructKind::CommentInline => "inline comment",
            ConstructKind::CodeBlock => "code block",
            ConstructKind::CodeInline => "inline code",
            ConstructKind::ScriptBlock => "script block",
            ConstructKind::ScriptInline => "inline script",
            ConstructKind::GenericBlock => "generic block",
            ConstructKind::GenericInline => "generic inline",
        };
        write!(f, "{}", name)
    }
}

/// Recoverable errors accumulated while parsing
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// End of input (or line, for inline constructs) reached before the
    /// closing delimiter was found
    UnclosedConstruct {
        kind: ConstructKind,
        open_position: Position,
    },
    /// A fenced construct closed with a delimiter of a different repeat count
    DelimiterLengthMismatch {
        open_length: usize,
        close_length: usize,
        position: Position,
    },
    /// A token inside an attribute annotation matched none of the attribute
    /// alternatives
    InvalidAttributeSyntax { position: Position },
    /// Generic container nesting exceeded the configured maximum depth
    NestingTooDeep { position: Position, limit: usize },
}

impl ParseError {
    /// The position the error anchors to in the source.
    pub fn position(&self) -> &Position {
        match self {
            ParseError::UnclosedConstruct { open_position, .. } => open_position,
            ParseError::DelimiterLengthMismatch { position, .. } => position,
            ParseError::InvalidAttributeSyntax { position } => position,
            ParseError::NestingTooDeep { position, .. } => position,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnclosedConstruct {
                kind,
                open_position,
            } => write!(
                f,
                "Unclosed {} opened at {}: expected {} before end of input",
                kind,
                open_position,
                kind.closing_hint()
            ),
            ParseError::DelimiterLengthMismatch {
                open_length,
                close_length,
                position,
            } => write!(
                f,
                "Delimiter length mismatch at {}: opened with {} characters but closed with {}",
                position, open_length, close_length
            ),
            ParseError::InvalidAttributeSyntax { position } => {
                write!(f, "Invalid attribute syntax at {}", position)
            }
            ParseError::NestingTooDeep { position, limit } => write!(
                f,
                "Generic containers nested deeper than the limit of {} at {}",
                limit, position
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Format source code context around an error position
///
/// Shows 2 lines before the error, the error line with a >> marker, and 2
/// lines after. All lines are numbered for easy reference.
pub fn format_source_context(source: &str, position: &Position) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let error_line = position.line.saturating_sub(1);

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();
    for line_num in start_line..end_line {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!(
            "{} {:3} | {}\n",
            marker,
            line_num + 1,
            lines[line_num]
        ));
    }

    context
}

/// Render an error together with its source excerpt.
///
/// Presentation helper for CLI-style consumers; the structured error stays
/// the source of truth.
pub fn render_with_context(error: &ParseError, source: &str) -> String {
    format!("{}\n\n{}", error, format_source_context(source, error.position()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unclosed() {
        let error = ParseError::UnclosedConstruct {
            kind: ConstructKind::CodeBlock,
            open_position: Position::new(1, 1, 0),
        };
        let message = error.to_string();
        assert!(message.contains("Unclosed code block"));
        assert!(message.contains("1:1"));
    }

    #[test]
    fn test_display_mismatch() {
        let error = ParseError::DelimiterLengthMismatch {
            open_length: 3,
            close_length: 4,
            position: Position::new(3, 1, 9),
        };
        let message = error.to_string();
        assert!(message.contains("opened with 3"));
        assert!(message.contains("closed with 4"));
    }

    #[test]
    fn test_format_source_context() {
        let source = "line 1\nline 2\nline 3\nerror line\nline 5\nline 6";
        let position = Position::new(4, 1, 21);

        let context = format_source_context(source, &position);
        assert!(context.contains("line 2"));
        assert!(context.contains(">>   4 | error line"));
        assert!(context.contains("line 6"));
    }

    #[test]
    fn test_render_with_context() {
        let source = ":::\ntext";
        let error = ParseError::UnclosedConstruct {
            kind: ConstructKind::GenericBlock,
            open_position: Position::new(1, 1, 0),
        };
        let rendered = render_with_context(&error, source);
        assert!(rendered.contains("Unclosed generic block"));
        assert!(rendered.contains(">>   1 | :::"));
    }
}
