use core::ops::Range;
use serde::Serialize;

/// Byte range into the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn start(&self) -> usize {
        self.0.start
    }

    pub fn end(&self) -> usize {
        self.0.end
    }

    /// Join two spans into the smallest span covering both.
    pub fn merge(&self, other: &Span) -> Span {
        Span(self.0.start.min(other.0.start)..self.0.end.max(other.0.end))
    }

    /// Shift the span forward, mapping a chunk-relative span back into
    /// document coordinates.
    pub fn shifted(&self, by: usize) -> Span {
        Span(self.0.start + by..self.0.end + by)
    }
}
