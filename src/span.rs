//! Source spans: provenance of a token in the input text.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Half-open byte range `[start, end)` into the original input text.
///
/// Offsets are UTF-8 byte offsets, so `&text[span.start..span.end]` recovers
/// the surface text. Use [`SourceSpan::char_range`] for code-point offsets.
///
/// When one fused token is segmented, every resulting token carries the
/// fused token's span: a span denotes provenance, not a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
}

impl SourceSpan {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "empty span {}..{}", start, end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The text this span denotes, or `None` if it does not fit `text`.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.range())
    }

    /// The span as code-point offsets into `text`.
    pub fn char_range(&self, text: &str) -> Option<Range<usize>> {
        let prefix = text.get(..self.start)?;
        let body = self.slice(text)?;
        let start = prefix.chars().count();
        Some(start..start + body.chars().count())
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
