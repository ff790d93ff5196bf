//! Offset to line/character mapping.
//!
//! Offsets are 0-based counts of Unicode scalar values (`char`) into the
//! document text. Lines are separated by `\n`; a `\r` before it is an ordinary
//! character on the line it ends.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{LintError, LintResult};

/// A 0-based (line, character) coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Position {
    /// Number of line breaks before the offset.
    pub line: usize,
    /// Characters since the most recent line break (or start of text).
    pub character: usize,
}

impl Position {
    /// Create a new position.
    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// A start/end pair of positions, `start <= end` in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Range {
    /// Inclusive start.
    pub start: Position,
    /// Exclusive end.
    pub end: Position,
}

impl Range {
    /// Create a new range.
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Returns `true` if start and end are on the same line.
    pub const fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }
}

/// Precomputed line starts for one version of a document's text.
///
/// Build once per scan and reuse it for every offset lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionIndex {
    /// Character offset at which each line begins. Always starts with `0`.
    line_starts: Vec<usize>,
    /// Total length of the text in characters.
    len: usize,
}

impl PositionIndex {
    /// Index `text`.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut len = 0;
        for ch in text.chars() {
            len += 1;
            if ch == '\n' {
                line_starts.push(len);
            }
        }
        Self { line_starts, len }
    }

    /// Length of the indexed text in characters.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the indexed text is empty.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Map a character offset to its position.
    ///
    /// `offset == len()` is the end-of-document position.
    pub fn position_at(&self, offset: usize) -> LintResult<Position> {
        if offset > self.len {
            return Err(LintError::OffsetOutOfBounds {
                offset,
                len: self.len,
            });
        }
        // line_starts[0] == 0 <= offset, so the partition point is at least 1.
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Ok(Position::new(line, offset - self.line_starts[line]))
    }

    /// Map a pair of character offsets to a range.
    pub fn range(&self, start: usize, end: usize) -> LintResult<Range> {
        Ok(Range::new(self.position_at(start)?, self.position_at(end)?))
    }
}
