// Chunk: docs/chunks/text_editor - Position markers that track edits

use std::ops::Range;

use textkit_interval::Interval;

/// A tagged half-open range of the editor's content that follows the text
/// as it is edited.
///
/// Committed edits move a marker's endpoints: an insertion before a marker
/// shifts it right, a deletion overlapping it clamps it to what survives.
/// Text inserted exactly at an endpoint is absorbed by an inclusive marker
/// and left outside an exclusive one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker<T = ()> {
    start: usize,
    end: usize,
    exclusive: bool,
    data: T,
}

impl<T> Marker<T> {
    /// An inclusive marker: insertions at either endpoint become part of
    /// the marked range.
    pub fn new(range: Range<usize>, data: T) -> Self {
        Self { start: range.start, end: range.end, exclusive: false, data }
    }

    /// An exclusive marker: insertions at either endpoint stay outside the
    /// marked range.
    pub fn exclusive(range: Range<usize>, data: T) -> Self {
        Self { start: range.start, end: range.end, exclusive: true, data }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// Rebuilds this marker at new endpoints, keeping its data and mode.
    pub(crate) fn relocated(&self, start: usize, end: usize) -> Self
    where
        T: Clone,
    {
        Self { start, end, exclusive: self.exclusive, data: self.data.clone() }
    }
}

impl<T> Interval for Marker<T> {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }
}
