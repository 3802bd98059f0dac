// Chunk: docs/chunks/interval_tree - Multi-valued interval tree

//! An interval tree admitting multiple distinct values per `(start, end)`
//! key.
//!
//! Built as a thin layer over [`IntervalTree`]: each tree node stores a
//! bucket of values sharing one key, and `len` counts values rather than
//! nodes. A value leaves the tree when removed individually; its node
//! leaves only when the bucket empties.

use crate::interval::{Interval, Span};
use crate::tree::{IntervalTree, Overlappers};

#[derive(Debug)]
struct Bucket<T> {
    span: Span,
    values: Vec<T>,
}

impl<T> Interval for Bucket<T> {
    fn start(&self) -> usize {
        self.span.start
    }

    fn end(&self) -> usize {
        self.span.end
    }
}

/// An ordered multiset of intervals, grouped by `(start, end)` key, with
/// logarithmic overlap queries.
#[derive(Debug)]
pub struct IntervalSetTree<T> {
    tree: IntervalTree<Bucket<T>>,
    len: usize,
}

impl<T: Interval + PartialEq> Default for IntervalSetTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Interval + PartialEq> IntervalSetTree<T> {
    pub fn new() -> Self {
        Self { tree: IntervalTree::new(), len: 0 }
    }

    /// The number of stored values (not distinct keys).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.tree.clear();
        self.len = 0;
    }

    /// Adds a value under its own `(start, end)` key. Returns `false` when
    /// an equal value is already stored under that key.
    pub fn insert(&mut self, value: T) -> bool {
        let key = Span::of(&value);
        if let Some(bucket) = self.tree.get_mut(&key) {
            if bucket.values.contains(&value) {
                return false;
            }
            bucket.values.push(value);
            self.len += 1;
            return true;
        }
        self.tree.insert(Bucket { span: key, values: vec![value] });
        self.len += 1;
        true
    }

    /// Removes one value. The node stays while other values share its key.
    pub fn remove(&mut self, value: &T) -> bool {
        let key = Span::of(value);
        let Some(bucket) = self.tree.get_mut(&key) else {
            return false;
        };
        let Some(at) = bucket.values.iter().position(|v| v == value) else {
            return false;
        };
        bucket.values.remove(at);
        let emptied = bucket.values.is_empty();
        if emptied {
            self.tree.remove(&key);
        }
        self.len -= 1;
        true
    }

    /// Removes every value stored under the given key. Returns how many
    /// were removed.
    pub fn remove_at(&mut self, key: &dyn Interval) -> usize {
        let key = Span::of(key);
        let Some(bucket) = self.tree.get(&key) else {
            return 0;
        };
        let count = bucket.values.len();
        self.tree.remove(&key);
        self.len -= count;
        count
    }

    /// All values stored under exactly the given key.
    pub fn get_all(&self, key: &dyn Interval) -> &[T] {
        self.tree
            .get(&Span::of(key))
            .map(|bucket| bucket.values.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, value: &T) -> bool {
        self.get_all(&Span::of(value)).contains(value)
    }

    pub fn contains_interval(&self, key: &dyn Interval) -> bool {
        self.tree.contains_interval(&Span::of(key))
    }

    /// True when any stored value overlaps `key`.
    pub fn overlaps(&self, key: &dyn Interval) -> bool {
        self.tree.overlaps(key)
    }

    /// The number of stored values overlapping `key`.
    pub fn overlap_count(&self, key: &dyn Interval) -> usize {
        self.overlappers(key).count()
    }

    /// Iterates all values overlapping `key`, grouped by ascending key.
    pub fn overlappers(&self, key: &dyn Interval) -> SetOverlappers<'_, T> {
        SetOverlappers { buckets: self.tree.overlappers(key), current: [].iter() }
    }

    /// Iterates all values, grouped by ascending key; values within a key
    /// come out in insertion order.
    pub fn iter(&self) -> SetIter<'_, T> {
        SetIter { buckets: self.tree.iter(), current: [].iter() }
    }
}

impl<'a, T: Interval + PartialEq> IntoIterator for &'a IntervalSetTree<T> {
    type Item = &'a T;
    type IntoIter = SetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over all values of an [`IntervalSetTree`].
pub struct SetIter<'a, T> {
    buckets: crate::tree::Iter<'a, Bucket<T>>,
    current: std::slice::Iter<'a, T>,
}

impl<'a, T: Interval> Iterator for SetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(value) = self.current.next() {
                return Some(value);
            }
            self.current = self.buckets.next()?.values.iter();
        }
    }
}

/// Iterator over the values of an [`IntervalSetTree`] overlapping a query.
pub struct SetOverlappers<'a, T> {
    buckets: Overlappers<'a, Bucket<T>>,
    current: std::slice::Iter<'a, T>,
}

impl<'a, T: Interval> Iterator for SetOverlappers<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(value) = self.current.next() {
                return Some(value);
            }
            self.current = self.buckets.next()?.values.iter();
        }
    }
}

#[cfg(test)]
impl<T: Interval + PartialEq> IntervalSetTree<T> {
    pub(crate) fn check_invariants(&self) {
        self.tree.check_invariants();
        let counted: usize = self.tree.iter().map(|b| b.values.len()).sum();
        assert_eq!(self.len, counted, "value count disagrees with buckets");
        assert!(self.tree.iter().all(|b| !b.values.is_empty()), "empty bucket left behind");
    }
}
