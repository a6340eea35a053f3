//! Byte ranges backing tokens while they move through the pipeline.

/// A byte range into the input being split.
///
/// Tokens are only ever joined with their live neighbours, so every span the
/// pipeline produces is a contiguous slice of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Joins two touching spans into the span covering both.
    pub fn join(self, other: Self) -> Self {
        debug_assert!(
            self.end == other.start || other.end == self.start,
            "joined spans must be adjacent: {self:?} and {other:?}"
        );
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Returns the text covered by the span.
    pub fn text(self, input: &str) -> &str {
        &input[self.start..self.end]
    }
}
