// Chunk: docs/chunks/interval_tree - Interval trait and span primitives

use std::cmp::Ordering;

/// A half-open interval `[start, end)` over character positions.
///
/// Implementors supply the endpoints; ordering and overlap are defined by
/// the free functions in this module so every container agrees on them.
/// The trait is object-safe: tree lookups take `&dyn Interval` keys so a
/// caller can probe with a lightweight [`Span`] instead of building a full
/// value.
pub trait Interval {
    fn start(&self) -> usize;
    fn end(&self) -> usize;

    /// The number of positions the interval covers.
    fn length(&self) -> usize {
        self.end().saturating_sub(self.start())
    }
}

/// True when the two intervals share at least one position.
///
/// Half-open semantics: `[0, 2)` and `[2, 4)` touch but do not overlap, and
/// an empty interval overlaps nothing.
pub fn overlaps<A: Interval + ?Sized, B: Interval + ?Sized>(a: &A, b: &B) -> bool {
    a.start() < b.end() && b.start() < a.end()
}

/// True when the two intervals touch end to start without overlapping.
pub fn is_adjacent<A: Interval + ?Sized, B: Interval + ?Sized>(a: &A, b: &B) -> bool {
    a.end() == b.start() || b.end() == a.start()
}

/// Total order on intervals by `(start, end)`.
pub fn interval_cmp<A: Interval + ?Sized, B: Interval + ?Sized>(a: &A, b: &B) -> Ordering {
    a.start()
        .cmp(&b.start())
        .then(a.end().cmp(&b.end()))
}

/// A plain `(start, end)` pair, the minimal [`Interval`] implementor.
/// Containers use it internally as a query key and as the stored node key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} past end {}", start, end);
        Self { start, end }
    }

    /// A span covering the single position `at`.
    pub fn point(at: usize) -> Self {
        Self { start: at, end: at + 1 }
    }

    /// Copies the endpoints out of any interval.
    pub fn of<I: Interval + ?Sized>(interval: &I) -> Self {
        Self { start: interval.start(), end: interval.end() }
    }
}

impl Interval for Span {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }
}
