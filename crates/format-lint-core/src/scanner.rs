//! Literal scanner for `format: '<value>'` occurrences.
//!
//! Matching is purely textual. The key is `format`, optionally followed by
//! whitespace, a colon, more optional whitespace, and a quoted literal. The
//! literal runs to the first quote character of *either* kind, so escapes are
//! not interpreted:
//!
//! - `format: 'it"s'` yields the value `it` and ends on the `"`.
//! - A line break inside the quotes is part of the value, so a match can span
//!   lines.
//! - The key is not word-bounded; `imageformat: 'x'` matches at `format`.
//!
//! An opening quote with no closing quote anywhere after it is not a match;
//! scanning continues past it.

use std::iter::FusedIterator;
use std::sync::LazyLock;

use regex::Regex;

/// `format`, colon, quoted literal. Group 1 is the literal content.
static FORMAT_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"format\s*:\s*['"]([^'"]*)['"]"#).expect("valid regex")
});

/// One occurrence of a `format` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatMatch<'a> {
    /// Content between the quotes.
    pub value: &'a str,
    /// Character offset of the `f` in `format`.
    pub start: usize,
    /// Character offset one past the closing quote.
    pub end: usize,
}

/// Lazy iterator over non-overlapping [`FormatMatch`]es, left to right.
///
/// Clone it (or call [`scan`] again) to restart from the beginning.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    text: &'a str,
    /// Byte offset where the next search starts.
    byte_pos: usize,
    /// Character offset corresponding to `byte_pos`.
    char_pos: usize,
}

/// Scan `text` for `format` literals.
pub fn scan(text: &str) -> Matches<'_> {
    Matches {
        text,
        byte_pos: 0,
        char_pos: 0,
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = FormatMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = FORMAT_LITERAL.captures_at(self.text, self.byte_pos)?;
        let whole = caps.get(0)?;
        let value = caps.get(1)?;

        // Advance the char cursor incrementally so a full scan stays O(n).
        let start = self.char_pos + self.text[self.byte_pos..whole.start()].chars().count();
        let end = start + whole.as_str().chars().count();

        self.byte_pos = whole.end();
        self.char_pos = end;

        Some(FormatMatch {
            value: value.as_str(),
            start,
            end,
        })
    }
}

impl FusedIterator for Matches<'_> {}
