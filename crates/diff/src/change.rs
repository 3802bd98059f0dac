// Chunk: docs/chunks/myers_diff - Change records produced by the edit-path search

use std::ops::Range;

/// The kind of edit a change record or delta describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Matching run present in both sequences.
    Equal,
    /// Elements present only in the target.
    Insert,
    /// Elements present only in the source.
    Delete,
    /// A source run replaced by a different target run.
    Change,
}

/// One edit between a source range and a target range.
///
/// Ranges are half-open element positions; for `Insert` the source range is
/// empty and for `Delete` the target range is empty. The diff engine emits
/// changes in ascending source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub kind: ChangeKind,
    pub source: Range<usize>,
    pub target: Range<usize>,
}

impl Change {
    pub fn new(kind: ChangeKind, source: Range<usize>, target: Range<usize>) -> Self {
        Self { kind, source, target }
    }
}
