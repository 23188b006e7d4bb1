use crate::SourcePosition;

/// Represents a span of source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: Position of the first character of the source text
/// - `end_exclusive`: Position immediately after the last character
///
/// The `begin_*`/`end_*` accessors report the first and the last character
/// covered, so `end_column()` is inclusive. A zero-width span (such as the
/// end-of-input marker) reports its begin column as its end column.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub struct GraphQLSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl GraphQLSourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// A zero-width span at `pos`.
    pub fn empty_at(pos: SourcePosition) -> Self {
        Self::new(pos, pos)
    }

    /// Returns a span from the start of `self` to the end of `other`.
    pub fn to(&self, other: &GraphQLSourceSpan) -> Self {
        Self::new(self.start_inclusive, other.end_exclusive)
    }

    pub fn is_empty(&self) -> bool {
        self.start_inclusive.byte_offset() >= self.end_exclusive.byte_offset()
    }

    pub fn begin_line(&self) -> usize {
        self.start_inclusive.line()
    }

    pub fn begin_column(&self) -> usize {
        self.start_inclusive.column()
    }

    pub fn end_line(&self) -> usize {
        if self.is_empty() {
            self.start_inclusive.line()
        } else {
            self.end_exclusive.line()
        }
    }

    pub fn end_column(&self) -> usize {
        if self.is_empty() {
            self.start_inclusive.column()
        } else {
            // A token never ends on a line break, so the last character
            // sits on the same line as `end_exclusive`.
            self.end_exclusive.column().saturating_sub(1).max(1)
        }
    }

    /// The byte range this span covers within its source text.
    pub fn byte_range(&self) -> std::ops::Range<usize> {
        self.start_inclusive.byte_offset()..self.end_exclusive.byte_offset()
    }
}
