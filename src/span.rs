//! # Source Spans
//!
//! Every AST node records where it came from in the original SQL text as a
//! line/column span. Spans are immutable once created and are used only for
//! diagnostics; no semantic decision ever depends on them.
//!
//! Lines and columns are 1-based, matching what the lexer reports and what
//! editors display. A freshly synthesized node (one not produced from source
//! text) carries `Span::ZERO`.

use std::fmt;

/// A region of source text, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

impl Span {
    /// Span for synthesized nodes with no source location.
    pub const ZERO: Span = Span {
        start_line: 0,
        start_col: 0,
        end_line: 0,
        end_col: 0,
    };

    /// A single-point span.
    pub fn point(line: u32, col: u32) -> Span {
        Span {
            start_line: line,
            start_col: col,
            end_line: line,
            end_col: col,
        }
    }

    pub fn range(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Span {
        Span {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// The smallest span containing both `self` and `other`.
    pub fn covering(self, other: Span) -> Span {
        let (start_line, start_col) =
            if (other.start_line, other.start_col) < (self.start_line, self.start_col) {
                (other.start_line, other.start_col)
            } else {
                (self.start_line, self.start_col)
            };
        let (end_line, end_col) = if (other.end_line, other.end_col) > (self.end_line, self.end_col)
        {
            (other.end_line, other.end_col)
        } else {
            (self.end_line, self.end_col)
        };
        Span {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    pub fn line(&self) -> u32 {
        self.start_line
    }

    pub fn column(&self) -> u32 {
        self.start_col
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} column {}", self.start_line, self.start_col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_span_collapses_to_one_location() {
        let span = Span::point(3, 14);
        assert_eq!(span.line(), 3);
        assert_eq!(span.column(), 14);
        assert_eq!(span.end_line, 3);
        assert_eq!(span.end_col, 14);
    }

    #[test]
    fn covering_picks_outermost_bounds() {
        let a = Span::range(1, 5, 1, 9);
        let b = Span::range(1, 12, 2, 3);
        let c = a.covering(b);
        assert_eq!(c, Span::range(1, 5, 2, 3));
        assert_eq!(c, b.covering(a));
    }

    #[test]
    fn display_reports_start_position() {
        let span = Span::range(7, 2, 7, 20);
        assert_eq!(span.to_string(), "line 7 column 2");
    }
}
