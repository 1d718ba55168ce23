//! Position and location tracking for source code locations
//!
//! This module defines the data structures for representing positions and
//! locations in source code, as well as the utility for converting byte
//! offsets to line/column positions.
//!
//! ## Key Design
//!
//! - **Mandatory locations**: All AST nodes carry a required `location` field
//! - **1-based coordinates**: line and column both start at 1; `offset` is the
//!   0-based byte offset into the source
//! - **Efficient conversion**: O(log n) binary search over precomputed line
//!   starts for byte-to-position conversion

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source text: 1-based line and column plus byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// The position of the very first character of any source text.
    pub fn origin() -> Self {
        Self::new(1, 1, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::origin()
    }
}

/// A range in source text: start and end positions.
///
/// The end position is exclusive, pointing just past the last character of
/// the region, matching the byte spans the lexer produces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

impl Location {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Build the bounding box of two locations.
    pub fn covering(a: &Location, b: &Location) -> Location {
        Location {
            start: if a.start <= b.start { a.start } else { b.start },
            end: if a.end >= b.end { a.end } else { b.end },
        }
    }

    /// Check if a position falls inside this location.
    pub fn contains(&self, position: Position) -> bool {
        self.start.offset <= position.offset && position.offset < self.end.offset
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Provides fast conversion from byte offsets to line/column positions
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset to a 1-based line/column position.
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);
        let column = byte_offset - self.line_starts[line];
        Position::new(line + 1, column + 1, byte_offset)
    }

    /// Convert a byte span to a location.
    pub fn span_to_location(&self, span: &std::ops::Range<usize>) -> Location {
        Location::new(
            self.byte_to_position(span.start),
            self.byte_to_position(span.end),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_position_first_line() {
        let locs = SourceLocation::new("hello\nworld\n");
        assert_eq!(locs.byte_to_position(0), Position::new(1, 1, 0));
        assert_eq!(locs.byte_to_position(4), Position::new(1, 5, 4));
    }

    #[test]
    fn test_byte_to_position_after_newline() {
        let locs = SourceLocation::new("hello\nworld\n");
        assert_eq!(locs.byte_to_position(6), Position::new(2, 1, 6));
        assert_eq!(locs.byte_to_position(8), Position::new(2, 3, 8));
    }

    #[test]
    fn test_byte_to_position_at_end_of_input() {
        let locs = SourceLocation::new("ab\nc");
        assert_eq!(locs.byte_to_position(4), Position::new(2, 2, 4));
    }

    #[test]
    fn test_covering_orders_positions() {
        let locs = SourceLocation::new("one\ntwo\nthree\n");
        let first = locs.span_to_location(&(0..3));
        let second = locs.span_to_location(&(8..13));
        let combined = Location::covering(&second, &first);
        assert_eq!(combined.start, first.start);
        assert_eq!(combined.end, second.end);
    }

    #[test]
    fn test_contains() {
        let locs = SourceLocation::new("hello\n");
        let loc = locs.span_to_location(&(0..5));
        assert!(loc.contains(Position::new(1, 3, 2)));
        assert!(!loc.contains(Position::new(2, 1, 6)));
    }
}
