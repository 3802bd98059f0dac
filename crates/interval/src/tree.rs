// Chunk: docs/chunks/interval_tree - Augmented red-black interval tree

//! A red-black tree of intervals augmented with subtree `max_end`.
//!
//! Nodes live in a `Vec` arena and link by index; slot 0 is reserved as the
//! shared nil sentinel (black, children and parent self-referential,
//! `max_end` 0), so child and parent accesses never branch on `Option`.
//! Freed slots go on a free list and are reused by later insertions.
//!
//! Each node caches the maximum interval end in its subtree. Overlap
//! queries prune any subtree whose `max_end` does not reach past the query
//! start, which keeps `overlappers` at O(log n + k).
//!
//! Keys are ordered by `(start, end)` and must be unique; [`IntervalSetTree`]
//! (in `set_tree`) layers duplicate handling on top.
//!
//! [`IntervalSetTree`]: crate::IntervalSetTree

use std::cmp::Ordering;

use crate::interval::{interval_cmp, overlaps, Interval, Span};

const NIL: usize = 0;

#[derive(Debug)]
struct Node<T> {
    item: Option<T>,
    parent: usize,
    left: usize,
    right: usize,
    red: bool,
    max_end: usize,
}

impl<T> Node<T> {
    fn nil() -> Self {
        Self { item: None, parent: NIL, left: NIL, right: NIL, red: false, max_end: 0 }
    }
}

/// An ordered set of intervals supporting logarithmic overlap queries.
#[derive(Debug)]
pub struct IntervalTree<T> {
    nodes: Vec<Node<T>>,
    root: usize,
    free: Vec<usize>,
    len: usize,
}

impl<T: Interval> Default for IntervalTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Interval> IntervalTree<T> {
    pub fn new() -> Self {
        Self { nodes: vec![Node::nil()], root: NIL, free: Vec::new(), len: 0 }
    }

    /// The number of stored intervals.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every interval.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(Node::nil());
        self.root = NIL;
        self.free.clear();
        self.len = 0;
    }

    /// Inserts an interval. Returns `false` without modifying the tree when
    /// an interval with the same `(start, end)` key is already present.
    pub fn insert(&mut self, item: T) -> bool {
        let end = item.end();
        let mut parent = NIL;
        let mut go_left = false;
        let mut cur = self.root;
        while cur != NIL {
            // An equal key further down carries this same end, so raising
            // max_end before the duplicate check cannot leave it stale.
            if end > self.nodes[cur].max_end {
                self.nodes[cur].max_end = end;
            }
            match interval_cmp(&item, self.item(cur)) {
                Ordering::Equal => return false,
                Ordering::Less => {
                    parent = cur;
                    go_left = true;
                    cur = self.nodes[cur].left;
                }
                Ordering::Greater => {
                    parent = cur;
                    go_left = false;
                    cur = self.nodes[cur].right;
                }
            }
        }
        self.attach(item, parent, go_left);
        true
    }

    /// Inserts an interval, swapping out and returning any present value
    /// with the same `(start, end)` key.
    pub fn replace(&mut self, item: T) -> Option<T> {
        let end = item.end();
        let mut parent = NIL;
        let mut go_left = false;
        let mut cur = self.root;
        while cur != NIL {
            if end > self.nodes[cur].max_end {
                self.nodes[cur].max_end = end;
            }
            match interval_cmp(&item, self.item(cur)) {
                Ordering::Equal => return self.nodes[cur].item.replace(item),
                Ordering::Less => {
                    parent = cur;
                    go_left = true;
                    cur = self.nodes[cur].left;
                }
                Ordering::Greater => {
                    parent = cur;
                    go_left = false;
                    cur = self.nodes[cur].right;
                }
            }
        }
        self.attach(item, parent, go_left);
        None
    }

    /// Removes the interval with the given key. Returns `false` when no
    /// such interval is stored.
    pub fn remove(&mut self, key: &dyn Interval) -> bool {
        let z = self.search(key);
        if z == NIL {
            return false;
        }
        self.delete_node(z);
        true
    }

    /// Removes the interval with the smallest key.
    pub fn remove_min(&mut self) -> bool {
        if self.root == NIL {
            return false;
        }
        let idx = self.subtree_minimum(self.root);
        self.delete_node(idx);
        true
    }

    /// Removes the interval with the largest key.
    pub fn remove_max(&mut self) -> bool {
        if self.root == NIL {
            return false;
        }
        let idx = self.subtree_maximum(self.root);
        self.delete_node(idx);
        true
    }

    /// Removes every interval overlapping `key`. Returns how many were
    /// removed.
    pub fn remove_overlappers(&mut self, key: &dyn Interval) -> usize {
        let doomed: Vec<Span> = self.overlappers(key).map(Span::of).collect();
        for span in &doomed {
            self.remove(span);
        }
        doomed.len()
    }

    /// Looks up the value stored under the given key.
    pub fn get(&self, key: &dyn Interval) -> Option<&T> {
        let idx = self.search(key);
        (idx != NIL).then(|| self.item(idx))
    }

    /// Mutable lookup. Callers must not change the value's endpoints; the
    /// set tree uses this to edit a node's bucket in place.
    pub(crate) fn get_mut(&mut self, key: &dyn Interval) -> Option<&mut T> {
        let idx = self.search(key);
        if idx == NIL {
            return None;
        }
        self.nodes[idx].item.as_mut()
    }

    pub fn contains_interval(&self, key: &dyn Interval) -> bool {
        self.search(key) != NIL
    }

    /// The interval with the smallest key.
    pub fn minimum(&self) -> Option<&T> {
        (self.root != NIL).then(|| self.item(self.subtree_minimum(self.root)))
    }

    /// The interval with the largest key.
    pub fn maximum(&self) -> Option<&T> {
        (self.root != NIL).then(|| self.item(self.subtree_maximum(self.root)))
    }

    /// The stored interval with the smallest key strictly greater than
    /// `key`. `key` itself need not be stored.
    pub fn successor(&self, key: &dyn Interval) -> Option<&T> {
        let mut candidate = NIL;
        let mut cur = self.root;
        while cur != NIL {
            if interval_cmp(key, self.item(cur)) == Ordering::Less {
                candidate = cur;
                cur = self.nodes[cur].left;
            } else {
                cur = self.nodes[cur].right;
            }
        }
        (candidate != NIL).then(|| self.item(candidate))
    }

    /// The stored interval with the largest key strictly less than `key`.
    pub fn predecessor(&self, key: &dyn Interval) -> Option<&T> {
        let mut candidate = NIL;
        let mut cur = self.root;
        while cur != NIL {
            if interval_cmp(key, self.item(cur)) == Ordering::Greater {
                candidate = cur;
                cur = self.nodes[cur].right;
            } else {
                cur = self.nodes[cur].left;
            }
        }
        (candidate != NIL).then(|| self.item(candidate))
    }

    /// True when any stored interval overlaps `key`.
    pub fn overlaps(&self, key: &dyn Interval) -> bool {
        self.any_overlapping(Span::of(key)) != NIL
    }

    /// The overlapping interval with the smallest key, if any.
    pub fn min_overlapper(&self, key: &dyn Interval) -> Option<&T> {
        let idx = self.minimum_overlapping_in(self.root, &Span::of(key));
        (idx != NIL).then(|| self.item(idx))
    }

    /// The number of stored intervals overlapping `key`.
    pub fn overlap_count(&self, key: &dyn Interval) -> usize {
        self.overlappers(key).count()
    }

    /// Iterates the intervals overlapping `key` in ascending key order.
    pub fn overlappers(&self, key: &dyn Interval) -> Overlappers<'_, T> {
        let query = Span::of(key);
        Overlappers { tree: self, next: self.minimum_overlapping_in(self.root, &query), query }
    }

    /// Iterates all intervals in ascending key order.
    pub fn iter(&self) -> Iter<'_, T> {
        let next = if self.root == NIL { NIL } else { self.subtree_minimum(self.root) };
        Iter { tree: self, next }
    }

    // ==================== arena plumbing ====================

    fn item(&self, idx: usize) -> &T {
        self.nodes[idx].item.as_ref().expect("nil sentinel carries no interval")
    }

    fn alloc(&mut self, item: T) -> usize {
        let max_end = item.end();
        let node =
            Node { item: Some(item), parent: NIL, left: NIL, right: NIL, red: true, max_end };
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) {
        self.nodes[idx] = Node::nil();
        self.free.push(idx);
    }

    fn search(&self, key: &dyn Interval) -> usize {
        let mut cur = self.root;
        while cur != NIL {
            match interval_cmp(key, self.item(cur)) {
                Ordering::Equal => return cur,
                Ordering::Less => cur = self.nodes[cur].left,
                Ordering::Greater => cur = self.nodes[cur].right,
            }
        }
        NIL
    }

    fn subtree_minimum(&self, mut idx: usize) -> usize {
        while self.nodes[idx].left != NIL {
            idx = self.nodes[idx].left;
        }
        idx
    }

    fn subtree_maximum(&self, mut idx: usize) -> usize {
        while self.nodes[idx].right != NIL {
            idx = self.nodes[idx].right;
        }
        idx
    }

    fn successor_index(&self, mut idx: usize) -> usize {
        if self.nodes[idx].right != NIL {
            return self.subtree_minimum(self.nodes[idx].right);
        }
        let mut parent = self.nodes[idx].parent;
        while parent != NIL && self.nodes[parent].right == idx {
            idx = parent;
            parent = self.nodes[parent].parent;
        }
        parent
    }

    // ==================== max_end maintenance ====================

    /// Recomputes one node's `max_end` from its interval and children.
    fn reset_max_end(&mut self, idx: usize) {
        if idx == NIL {
            return;
        }
        let left = self.nodes[idx].left;
        let right = self.nodes[idx].right;
        self.nodes[idx].max_end = self
            .item(idx)
            .end()
            .max(self.nodes[left].max_end)
            .max(self.nodes[right].max_end);
    }

    /// Recomputes `max_end` from `idx` up to the root.
    fn max_end_fixup(&mut self, mut idx: usize) {
        while idx != NIL {
            self.reset_max_end(idx);
            idx = self.nodes[idx].parent;
        }
    }

    // ==================== rotations ====================

    fn rotate_left(&mut self, x: usize) {
        let y = self.nodes[x].right;
        let y_left = self.nodes[y].left;
        self.nodes[x].right = y_left;
        if y_left != NIL {
            self.nodes[y_left].parent = x;
        }
        let x_parent = self.nodes[x].parent;
        self.nodes[y].parent = x_parent;
        if x_parent == NIL {
            self.root = y;
        } else if self.nodes[x_parent].left == x {
            self.nodes[x_parent].left = y;
        } else {
            self.nodes[x_parent].right = y;
        }
        self.nodes[y].left = x;
        self.nodes[x].parent = y;
        self.reset_max_end(x);
        self.reset_max_end(y);
    }

    fn rotate_right(&mut self, x: usize) {
        let y = self.nodes[x].left;
        let y_right = self.nodes[y].right;
        self.nodes[x].left = y_right;
        if y_right != NIL {
            self.nodes[y_right].parent = x;
        }
        let x_parent = self.nodes[x].parent;
        self.nodes[y].parent = x_parent;
        if x_parent == NIL {
            self.root = y;
        } else if self.nodes[x_parent].left == x {
            self.nodes[x_parent].left = y;
        } else {
            self.nodes[x_parent].right = y;
        }
        self.nodes[y].right = x;
        self.nodes[x].parent = y;
        self.reset_max_end(x);
        self.reset_max_end(y);
    }

    // ==================== insertion ====================

    fn attach(&mut self, item: T, parent: usize, go_left: bool) {
        let z = self.alloc(item);
        self.nodes[z].parent = parent;
        if parent == NIL {
            self.root = z;
        } else if go_left {
            self.nodes[parent].left = z;
        } else {
            self.nodes[parent].right = z;
        }
        self.len += 1;
        self.insert_fixup(z);
    }

    fn insert_fixup(&mut self, mut z: usize) {
        while self.nodes[self.nodes[z].parent].red {
            let parent = self.nodes[z].parent;
            let grand = self.nodes[parent].parent;
            if parent == self.nodes[grand].left {
                let uncle = self.nodes[grand].right;
                if self.nodes[uncle].red {
                    self.nodes[parent].red = false;
                    self.nodes[uncle].red = false;
                    self.nodes[grand].red = true;
                    z = grand;
                } else {
                    if z == self.nodes[parent].right {
                        z = parent;
                        self.rotate_left(z);
                    }
                    let parent = self.nodes[z].parent;
                    let grand = self.nodes[parent].parent;
                    self.nodes[parent].red = false;
                    self.nodes[grand].red = true;
                    self.rotate_right(grand);
                }
            } else {
                let uncle = self.nodes[grand].left;
                if self.nodes[uncle].red {
                    self.nodes[parent].red = false;
                    self.nodes[uncle].red = false;
                    self.nodes[grand].red = true;
                    z = grand;
                } else {
                    if z == self.nodes[parent].left {
                        z = parent;
                        self.rotate_right(z);
                    }
                    let parent = self.nodes[z].parent;
                    let grand = self.nodes[parent].parent;
                    self.nodes[parent].red = false;
                    self.nodes[grand].red = true;
                    self.rotate_left(grand);
                }
            }
        }
        let root = self.root;
        self.nodes[root].red = false;
    }

    // ==================== deletion ====================

    fn delete_node(&mut self, mut z: usize) {
        if self.nodes[z].left != NIL && self.nodes[z].right != NIL {
            // Move the successor's interval into z and delete the successor
            // node instead; z keeps its color and position.
            let successor = self.subtree_minimum(self.nodes[z].right);
            self.nodes[z].item = self.nodes[successor].item.take();
            self.max_end_fixup(z);
            z = successor;
        }

        // z now has at most one child; splice it out. The nil sentinel
        // temporarily records the parent so delete_fixup can climb from an
        // empty slot.
        let x = if self.nodes[z].left != NIL { self.nodes[z].left } else { self.nodes[z].right };
        let z_parent = self.nodes[z].parent;
        self.nodes[x].parent = z_parent;
        if z_parent == NIL {
            self.root = x;
        } else if self.nodes[z_parent].left == z {
            self.nodes[z_parent].left = x;
        } else {
            self.nodes[z_parent].right = x;
        }

        let removed_black = !self.nodes[z].red;
        self.release(z);
        self.max_end_fixup(z_parent);
        if removed_black {
            self.delete_fixup(x);
        }
        self.nodes[NIL].parent = NIL;
        self.len -= 1;
    }

    fn delete_fixup(&mut self, mut x: usize) {
        while x != self.root && !self.nodes[x].red {
            let parent = self.nodes[x].parent;
            if x == self.nodes[parent].left {
                let mut sibling = self.nodes[parent].right;
                if self.nodes[sibling].red {
                    self.nodes[sibling].red = false;
                    self.nodes[parent].red = true;
                    self.rotate_left(parent);
                    sibling = self.nodes[parent].right;
                }
                let s_left = self.nodes[sibling].left;
                let s_right = self.nodes[sibling].right;
                if !self.nodes[s_left].red && !self.nodes[s_right].red {
                    self.nodes[sibling].red = true;
                    x = parent;
                } else {
                    if !self.nodes[s_right].red {
                        self.nodes[s_left].red = false;
                        self.nodes[sibling].red = true;
                        self.rotate_right(sibling);
                        sibling = self.nodes[parent].right;
                    }
                    self.nodes[sibling].red = self.nodes[parent].red;
                    self.nodes[parent].red = false;
                    let s_right = self.nodes[sibling].right;
                    self.nodes[s_right].red = false;
                    self.rotate_left(parent);
                    x = self.root;
                }
            } else {
                let mut sibling = self.nodes[parent].left;
                if self.nodes[sibling].red {
                    self.nodes[sibling].red = false;
                    self.nodes[parent].red = true;
                    self.rotate_right(parent);
                    sibling = self.nodes[parent].left;
                }
                let s_left = self.nodes[sibling].left;
                let s_right = self.nodes[sibling].right;
                if !self.nodes[s_left].red && !self.nodes[s_right].red {
                    self.nodes[sibling].red = true;
                    x = parent;
                } else {
                    if !self.nodes[s_left].red {
                        self.nodes[s_right].red = false;
                        self.nodes[sibling].red = true;
                        self.rotate_left(sibling);
                        sibling = self.nodes[parent].left;
                    }
                    self.nodes[sibling].red = self.nodes[parent].red;
                    self.nodes[parent].red = false;
                    let s_left = self.nodes[sibling].left;
                    self.nodes[s_left].red = false;
                    self.rotate_right(parent);
                    x = self.root;
                }
            }
        }
        self.nodes[x].red = false;
    }

    // ==================== overlap search ====================

    /// Any node overlapping the query, or NIL.
    fn any_overlapping(&self, query: Span) -> usize {
        let mut cur = self.root;
        while cur != NIL && !overlaps(self.item(cur), &query) {
            let left = self.nodes[cur].left;
            cur = if left != NIL && self.nodes[left].max_end > query.start {
                left
            } else {
                self.nodes[cur].right
            };
        }
        cur
    }

    /// The overlapping node with the smallest key within the subtree at
    /// `root`, or NIL. Subtrees whose `max_end` does not reach past the
    /// query start are pruned.
    fn minimum_overlapping_in(&self, root: usize, query: &Span) -> usize {
        let mut result = NIL;
        let mut cur = root;
        if cur == NIL || self.nodes[cur].max_end <= query.start {
            return NIL;
        }
        loop {
            if overlaps(self.item(cur), query) {
                // Found one; an earlier overlapper can only be in the left
                // subtree.
                result = cur;
                let left = self.nodes[cur].left;
                if left == NIL || self.nodes[left].max_end <= query.start {
                    break;
                }
                cur = left;
            } else {
                let left = self.nodes[cur].left;
                if left != NIL && self.nodes[left].max_end > query.start {
                    cur = left;
                } else if self.item(cur).start() >= query.end {
                    // Everything to the right starts even later.
                    break;
                } else {
                    let right = self.nodes[cur].right;
                    if right == NIL || self.nodes[right].max_end <= query.start {
                        break;
                    }
                    cur = right;
                }
            }
        }
        result
    }

    /// The overlapping node with the smallest key greater than `idx`'s key,
    /// or NIL.
    fn next_overlapping(&self, mut idx: usize, query: &Span) -> usize {
        let mut result = NIL;
        if self.nodes[idx].right != NIL {
            result = self.minimum_overlapping_in(self.nodes[idx].right, query);
        }
        while result == NIL && self.nodes[idx].parent != NIL {
            let parent = self.nodes[idx].parent;
            if self.nodes[parent].left == idx {
                result = if overlaps(self.item(parent), query) {
                    parent
                } else {
                    self.minimum_overlapping_in(self.nodes[parent].right, query)
                };
            }
            idx = parent;
        }
        result
    }
}

impl<'a, T: Interval> IntoIterator for &'a IntervalTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over all stored intervals.
pub struct Iter<'a, T> {
    tree: &'a IntervalTree<T>,
    next: usize,
}

impl<'a, T: Interval> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.next == NIL {
            return None;
        }
        let idx = self.next;
        self.next = self.tree.successor_index(idx);
        Some(self.tree.item(idx))
    }
}

/// In-order iterator over the intervals overlapping a query.
pub struct Overlappers<'a, T> {
    tree: &'a IntervalTree<T>,
    query: Span,
    next: usize,
}

impl<'a, T: Interval> Iterator for Overlappers<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.next == NIL {
            return None;
        }
        let idx = self.next;
        self.next = self.tree.next_overlapping(idx, &self.query);
        Some(self.tree.item(idx))
    }
}

// ==================== consistency checks (test only) ====================

#[cfg(test)]
impl<T: Interval> IntervalTree<T> {
    pub(crate) fn check_invariants(&self) {
        assert!(self.is_bst(), "in-order traversal is not sorted");
        assert!(self.has_valid_red_coloring(), "red node with a red child, or red root");
        assert!(self.is_balanced(), "black heights differ between paths");
        assert!(self.has_consistent_max_ends(), "stale max_end");
    }

    fn is_bst(&self) -> bool {
        let items: Vec<&T> = self.iter().collect();
        items
            .windows(2)
            .all(|w| interval_cmp(w[0], w[1]) == Ordering::Less)
    }

    fn has_valid_red_coloring(&self) -> bool {
        if self.root != NIL && self.nodes[self.root].red {
            return false;
        }
        let mut stack = vec![self.root];
        while let Some(idx) = stack.pop() {
            if idx == NIL {
                continue;
            }
            let node = &self.nodes[idx];
            if node.red && (self.nodes[node.left].red || self.nodes[node.right].red) {
                return false;
            }
            stack.push(node.left);
            stack.push(node.right);
        }
        true
    }

    fn is_balanced(&self) -> bool {
        self.black_height(self.root).is_some()
    }

    fn black_height(&self, idx: usize) -> Option<usize> {
        if idx == NIL {
            return Some(1);
        }
        let left = self.black_height(self.nodes[idx].left)?;
        let right = self.black_height(self.nodes[idx].right)?;
        if left != right {
            return None;
        }
        Some(left + if self.nodes[idx].red { 0 } else { 1 })
    }

    fn has_consistent_max_ends(&self) -> bool {
        self.verify_max_end(self.root).is_some()
    }

    fn verify_max_end(&self, idx: usize) -> Option<usize> {
        if idx == NIL {
            return Some(0);
        }
        let left = self.verify_max_end(self.nodes[idx].left)?;
        let right = self.verify_max_end(self.nodes[idx].right)?;
        let expected = self.item(idx).end().max(left).max(right);
        (self.nodes[idx].max_end == expected).then_some(expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span_tree(spans: &[(usize, usize)]) -> IntervalTree<Span> {
        let mut tree = IntervalTree::new();
        for &(start, end) in spans {
            assert!(tree.insert(Span::new(start, end)));
        }
        tree
    }

    fn collected(iter: impl Iterator<Item = impl Interval>) -> Vec<(usize, usize)> {
        iter.map(|i| (i.start(), i.end())).collect()
    }

    // ==================== basic operations ====================

    #[test]
    fn insert_and_lookup() {
        let tree = span_tree(&[(5, 10), (1, 4), (8, 12)]);
        assert_eq!(tree.len(), 3);
        assert!(tree.contains_interval(&Span::new(5, 10)));
        assert!(!tree.contains_interval(&Span::new(5, 11)));
        assert_eq!(tree.get(&Span::new(1, 4)), Some(&Span::new(1, 4)));
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let mut tree = span_tree(&[(2, 6)]);
        assert!(!tree.insert(Span::new(2, 6)));
        assert_eq!(tree.len(), 1);
        tree.check_invariants();
    }

    #[test]
    fn same_start_different_end_are_distinct_keys() {
        let tree = span_tree(&[(2, 6), (2, 9)]);
        assert_eq!(tree.len(), 2);
        assert!(tree.contains_interval(&Span::new(2, 6)));
        assert!(tree.contains_interval(&Span::new(2, 9)));
    }

    #[test]
    fn replace_swaps_equal_key() {
        let mut tree: IntervalTree<Span> = IntervalTree::new();
        assert_eq!(tree.replace(Span::new(1, 5)), None);
        assert_eq!(tree.replace(Span::new(1, 5)), Some(Span::new(1, 5)));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn remove_present_and_absent() {
        let mut tree = span_tree(&[(1, 3), (4, 9), (2, 7)]);
        assert!(tree.remove(&Span::new(4, 9)));
        assert!(!tree.remove(&Span::new(4, 9)));
        assert_eq!(tree.len(), 2);
        assert!(!tree.contains_interval(&Span::new(4, 9)));
        tree.check_invariants();
    }

    #[test]
    fn remove_min_and_max() {
        let mut tree = span_tree(&[(3, 5), (1, 2), (7, 9)]);
        assert!(tree.remove_min());
        assert_eq!(tree.minimum(), Some(&Span::new(3, 5)));
        assert!(tree.remove_max());
        assert_eq!(tree.maximum(), Some(&Span::new(3, 5)));
        assert!(tree.remove_max());
        assert!(!tree.remove_max());
        assert!(tree.is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let mut tree = span_tree(&[(1, 2), (3, 4)]);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.iter().count(), 0);
        assert!(tree.insert(Span::new(1, 2)));
    }

    // ==================== ordering queries ====================

    #[test]
    fn iteration_is_in_key_order() {
        let tree = span_tree(&[(5, 6), (1, 9), (3, 4), (1, 2), (7, 8)]);
        assert_eq!(
            collected(tree.iter().copied()),
            vec![(1, 2), (1, 9), (3, 4), (5, 6), (7, 8)]
        );
    }

    #[test]
    fn successor_and_predecessor() {
        let tree = span_tree(&[(1, 2), (3, 4), (5, 6)]);
        assert_eq!(tree.successor(&Span::new(3, 4)), Some(&Span::new(5, 6)));
        assert_eq!(tree.successor(&Span::new(2, 10)), Some(&Span::new(3, 4)));
        assert_eq!(tree.successor(&Span::new(5, 6)), None);
        assert_eq!(tree.predecessor(&Span::new(3, 4)), Some(&Span::new(1, 2)));
        assert_eq!(tree.predecessor(&Span::new(1, 2)), None);
    }

    // ==================== overlap queries ====================

    #[test]
    fn overlappers_returns_every_intersecting_interval() {
        // All three of these overlap [3, 6).
        let tree = span_tree(&[(1, 4), (2, 9), (5, 8)]);
        assert_eq!(
            collected(tree.overlappers(&Span::new(3, 6)).copied()),
            vec![(1, 4), (2, 9), (5, 8)]
        );
        assert_eq!(tree.overlap_count(&Span::new(3, 6)), 3);
    }

    #[test]
    fn adjacent_intervals_do_not_overlap() {
        let tree = span_tree(&[(0, 3), (6, 9)]);
        assert_eq!(tree.overlappers(&Span::new(3, 6)).count(), 0);
        assert!(!tree.overlaps(&Span::new(3, 6)));
    }

    #[test]
    fn min_overlapper_is_the_earliest() {
        let tree = span_tree(&[(2, 9), (1, 4), (5, 8)]);
        assert_eq!(tree.min_overlapper(&Span::new(3, 6)), Some(&Span::new(1, 4)));
        assert_eq!(tree.min_overlapper(&Span::new(20, 30)), None);
    }

    #[test]
    fn remove_overlappers_leaves_the_rest() {
        let mut tree = span_tree(&[(1, 4), (2, 9), (5, 8), (10, 12)]);
        assert_eq!(tree.remove_overlappers(&Span::new(3, 6)), 3);
        assert_eq!(collected(tree.iter().copied()), vec![(10, 12)]);
        tree.check_invariants();
    }

    #[test]
    fn point_queries_via_span_point() {
        let tree = span_tree(&[(0, 5), (5, 10)]);
        assert_eq!(collected(tree.overlappers(&Span::point(4)).copied()), vec![(0, 5)]);
        assert_eq!(collected(tree.overlappers(&Span::point(5)).copied()), vec![(5, 10)]);
    }

    #[test]
    fn empty_query_overlaps_nothing() {
        let tree = span_tree(&[(0, 10)]);
        assert_eq!(tree.overlappers(&Span::new(5, 5)).count(), 0);
    }

    // ==================== randomized invariants ====================

    #[test]
    fn random_mutations_preserve_invariants_and_match_brute_force() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0x1e77);
        let mut tree: IntervalTree<Span> = IntervalTree::new();
        let mut model: Vec<Span> = Vec::new();

        for _ in 0..2000 {
            let start = rng.gen_range(0..100);
            let end = rng.gen_range(start..=100);
            let span = Span::new(start, end);

            if rng.gen_bool(0.6) {
                let inserted = tree.insert(span);
                assert_eq!(inserted, !model.contains(&span));
                if inserted {
                    model.push(span);
                }
            } else {
                let removed = tree.remove(&span);
                assert_eq!(removed, model.contains(&span));
                model.retain(|s| s != &span);
            }

            tree.check_invariants();
            assert_eq!(tree.len(), model.len());

            let q_start = rng.gen_range(0..100);
            let q_end = rng.gen_range(q_start..=100);
            let query = Span::new(q_start, q_end);
            let mut expected: Vec<Span> =
                model.iter().copied().filter(|s| overlaps(s, &query)).collect();
            expected.sort_by(|a, b| interval_cmp(a, b));
            let actual: Vec<Span> = tree.overlappers(&query).copied().collect();
            assert_eq!(actual, expected);
        }
    }
}
