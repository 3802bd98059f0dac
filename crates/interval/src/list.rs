// Chunk: docs/chunks/interval_tree - Capability traits over interval containers

//! Capability traits abstracting over interval containers.
//!
//! Code that only queries (or only mutates) a container can take these
//! instead of a concrete tree type. Queries accept `&dyn Interval` keys so
//! callers probe with a [`Span`] without constructing a stored value.

use crate::interval::{Interval, Span};
use crate::set_tree::IntervalSetTree;
use crate::tree::IntervalTree;

/// Read-only interval queries.
pub trait IntervalList<T: Interval> {
    /// The number of stored values.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when a value is stored under exactly this `(start, end)` key.
    fn contains_interval(&self, key: &dyn Interval) -> bool;

    /// True when any stored value overlaps `key`.
    fn overlaps(&self, key: &dyn Interval) -> bool;

    /// The number of stored values overlapping `key`.
    fn overlap_count(&self, key: &dyn Interval) -> usize;

    /// The values overlapping `key`, in ascending key order.
    fn overlappers<'a>(&'a self, key: &dyn Interval) -> Box<dyn Iterator<Item = &'a T> + 'a>;
}

/// Mutation on top of [`IntervalList`].
pub trait MutableIntervalList<T: Interval>: IntervalList<T> {
    /// Adds a value. Returns `false` when the container already holds it
    /// (same key for a single-valued container, same key and equal value
    /// for a multi-valued one).
    fn insert(&mut self, value: T) -> bool;

    /// Removes everything stored under the given key. Returns how many
    /// values were removed.
    fn remove_interval(&mut self, key: &dyn Interval) -> usize;

    fn clear(&mut self);
}

/// Multi-valued access on top of [`IntervalList`].
pub trait IntervalSetList<T: Interval + PartialEq>: IntervalList<T> {
    /// All values stored under exactly the given key.
    fn get_all(&self, key: &dyn Interval) -> &[T];

    /// Removes one value, leaving any others sharing its key.
    fn remove_value(&mut self, value: &T) -> bool;
}

impl<T: Interval> IntervalList<T> for IntervalTree<T> {
    fn len(&self) -> usize {
        IntervalTree::len(self)
    }

    fn contains_interval(&self, key: &dyn Interval) -> bool {
        IntervalTree::contains_interval(self, key)
    }

    fn overlaps(&self, key: &dyn Interval) -> bool {
        IntervalTree::overlaps(self, key)
    }

    fn overlap_count(&self, key: &dyn Interval) -> usize {
        IntervalTree::overlap_count(self, key)
    }

    fn overlappers<'a>(&'a self, key: &dyn Interval) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        Box::new(IntervalTree::overlappers(self, key))
    }
}

impl<T: Interval> MutableIntervalList<T> for IntervalTree<T> {
    fn insert(&mut self, value: T) -> bool {
        IntervalTree::insert(self, value)
    }

    fn remove_interval(&mut self, key: &dyn Interval) -> usize {
        usize::from(IntervalTree::remove(self, key))
    }

    fn clear(&mut self) {
        IntervalTree::clear(self)
    }
}

impl<T: Interval + PartialEq> IntervalList<T> for IntervalSetTree<T> {
    fn len(&self) -> usize {
        IntervalSetTree::len(self)
    }

    fn contains_interval(&self, key: &dyn Interval) -> bool {
        IntervalSetTree::contains_interval(self, key)
    }

    fn overlaps(&self, key: &dyn Interval) -> bool {
        IntervalSetTree::overlaps(self, key)
    }

    fn overlap_count(&self, key: &dyn Interval) -> usize {
        IntervalSetTree::overlap_count(self, key)
    }

    fn overlappers<'a>(&'a self, key: &dyn Interval) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        Box::new(IntervalSetTree::overlappers(self, key))
    }
}

impl<T: Interval + PartialEq> MutableIntervalList<T> for IntervalSetTree<T> {
    fn insert(&mut self, value: T) -> bool {
        IntervalSetTree::insert(self, value)
    }

    fn remove_interval(&mut self, key: &dyn Interval) -> usize {
        IntervalSetTree::remove_at(self, key)
    }

    fn clear(&mut self) {
        IntervalSetTree::clear(self)
    }
}

impl<T: Interval + PartialEq> IntervalSetList<T> for IntervalSetTree<T> {
    fn get_all(&self, key: &dyn Interval) -> &[T] {
        IntervalSetTree::get_all(self, key)
    }

    fn remove_value(&mut self, value: &T) -> bool {
        IntervalSetTree::remove(self, value)
    }
}
