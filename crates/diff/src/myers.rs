// Chunk: docs/chunks/myers_diff - Greedy shortest-edit-path search

//! Myers' greedy shortest-edit-path algorithm.
//!
//! The search keeps, for every diagonal `k = i - j`, the furthest-reaching
//! path node at the current edit distance `d`, extending each candidate
//! through its maximal run of equal elements (a "snake") before recording
//! it. The first diagonal to reach `(N, M)` terminates the search; walking
//! the `prev` links backward and collapsing snakes yields the edit script.
//!
//! Path nodes live in a flat arena and link by index, so the backward path
//! needs no reference counting and dead diagonals cost nothing to drop.
//!
//! Two element-access strategies share this one loop: [`diff_slices_by`]
//! compares elements of generic slices (with a caller-supplied equalizer),
//! and [`diff_chars`] compares flat character sequences for whole-buffer
//! text diffs.

use crate::change::{Change, ChangeKind};

/// A node in the edit-graph search.
///
/// `i`/`j` are positions in the source/target sequences; the bootstrap
/// sentinel carries `j == -1`, which is why the coordinates are signed.
#[derive(Debug, Clone, Copy)]
struct PathNode {
    i: isize,
    j: isize,
    snake: bool,
    bootstrap: bool,
    prev: Option<usize>,
}

/// Arena of path nodes addressed by index.
#[derive(Debug, Default)]
struct PathArena {
    nodes: Vec<PathNode>,
}

impl PathArena {
    /// Appends a node. Non-snake nodes chain to their previous snake (or
    /// bootstrap) rather than to intermediate non-snake hops, which keeps
    /// the backward walk in `build_revision` one hop per edit.
    fn push(&mut self, i: isize, j: isize, snake: bool, bootstrap: bool, prev: Option<usize>) -> usize {
        let prev = if snake {
            prev
        } else {
            prev.and_then(|p| self.previous_snake(p))
        };
        self.nodes.push(PathNode { i, j, snake, bootstrap, prev });
        self.nodes.len() - 1
    }

    /// Skips backward over non-snake nodes until a snake is found; the
    /// bootstrap sentinel terminates the path.
    fn previous_snake(&self, mut idx: usize) -> Option<usize> {
        loop {
            let node = &self.nodes[idx];
            if node.bootstrap {
                return None;
            }
            if node.snake {
                return Some(idx);
            }
            match node.prev {
                Some(p) => idx = p,
                None => return Some(idx),
            }
        }
    }
}

/// Element access for the edit-path search.
trait DiffInput {
    fn source_len(&self) -> usize;
    fn target_len(&self) -> usize;
    fn matches(&self, i: usize, j: usize) -> bool;
}

struct SliceInput<'a, T, F> {
    source: &'a [T],
    target: &'a [T],
    eq: F,
}

impl<T, F: Fn(&T, &T) -> bool> DiffInput for SliceInput<'_, T, F> {
    fn source_len(&self) -> usize {
        self.source.len()
    }

    fn target_len(&self) -> usize {
        self.target.len()
    }

    fn matches(&self, i: usize, j: usize) -> bool {
        (self.eq)(&self.source[i], &self.target[j])
    }
}

struct CharInput<'a> {
    source: &'a [char],
    target: &'a [char],
}

impl DiffInput for CharInput<'_> {
    fn source_len(&self) -> usize {
        self.source.len()
    }

    fn target_len(&self) -> usize {
        self.target.len()
    }

    fn matches(&self, i: usize, j: usize) -> bool {
        self.source[i] == self.target[j]
    }
}

/// Computes the change set between two slices using `==`.
pub fn diff_slices<T: PartialEq>(source: &[T], target: &[T]) -> Vec<Change> {
    diff_slices_by(source, target, |a, b| a == b)
}

/// Computes the change set between two slices with a custom equalizer.
pub fn diff_slices_by<T, F: Fn(&T, &T) -> bool>(source: &[T], target: &[T], eq: F) -> Vec<Change> {
    compute(&SliceInput { source, target, eq })
}

/// Computes the change set between two character sequences.
pub fn diff_chars(source: &[char], target: &[char]) -> Vec<Change> {
    compute(&CharInput { source, target })
}

fn compute(input: &impl DiffInput) -> Vec<Change> {
    let mut arena = PathArena::default();
    let end = build_path(input, &mut arena);
    build_revision(&arena, end)
}

/// Runs the greedy search and returns the arena index of the node that
/// reached `(N, M)`.
///
/// # Panics
///
/// Panics if no path is found after exhausting `d` up to `N + M`. That is
/// unreachable for finite sequences and indicates an implementation bug,
/// not a runtime condition.
fn build_path(input: &impl DiffInput, arena: &mut PathArena) -> usize {
    let n = input.source_len() as isize;
    let m = input.target_len() as isize;
    let max = n + m + 1;

    let size = (1 + 2 * max) as usize;
    let middle = size / 2;
    let mut diagonal: Vec<Option<usize>> = vec![None; size];
    diagonal[middle + 1] = Some(arena.push(0, -1, true, true, None));

    for d in 0..max {
        let mut k = -d;
        while k <= d {
            let k_middle = (middle as isize + k) as usize;
            let k_plus = k_middle + 1;
            let k_minus = k_middle - 1;

            let node_i = |slot: Option<usize>| -> isize {
                arena.nodes[slot.expect("myers: missing diagonal entry")].i
            };

            // Prefer extending from the k+1 diagonal (an insert) at the
            // lower boundary, otherwise take whichever predecessor reached
            // further through the source.
            let (prev, mut i) =
                if k == -d || (k != d && node_i(diagonal[k_minus]) < node_i(diagonal[k_plus])) {
                    (diagonal[k_plus], node_i(diagonal[k_plus]))
                } else {
                    (diagonal[k_minus], node_i(diagonal[k_minus]) + 1)
                };
            diagonal[k_minus] = None; // no longer reachable at this d

            let mut j = i - k;
            let mut node = arena.push(i, j, false, false, prev);

            // Greedily extend through the maximal equal run.
            while i < n && j < m && input.matches(i as usize, j as usize) {
                i += 1;
                j += 1;
            }
            if i != arena.nodes[node].i {
                node = arena.push(i, j, true, false, Some(node));
            }
            diagonal[k_middle] = Some(node);

            if i >= n && j >= m {
                return node;
            }
            k += 2;
        }
        diagonal[(middle as isize + d - 1) as usize] = None;
    }

    panic!("myers diff: no edit path found between finite sequences");
}

/// Walks the backward path from the terminal node, collapsing snakes and
/// classifying each remaining hop by which coordinate advanced. Changes are
/// returned in ascending source order.
fn build_revision(arena: &PathArena, end: usize) -> Vec<Change> {
    let mut changes = Vec::new();

    let mut path = if arena.nodes[end].snake {
        arena.nodes[end].prev
    } else {
        Some(end)
    };

    while let Some(idx) = path {
        let node = arena.nodes[idx];
        let Some(prev_idx) = node.prev else { break };
        let prev = arena.nodes[prev_idx];
        if prev.j < 0 {
            break;
        }
        debug_assert!(!node.snake, "bad diff path: found snake when looking for diff");

        let (i, j) = (node.i as usize, node.j as usize);
        let (i_anchor, j_anchor) = (prev.i as usize, prev.j as usize);
        let kind = if i_anchor == i && j_anchor != j {
            ChangeKind::Insert
        } else if i_anchor != i && j_anchor == j {
            ChangeKind::Delete
        } else {
            ChangeKind::Change
        };
        changes.push(Change::new(kind, i_anchor..i, j_anchor..j));

        path = if prev.snake { prev.prev } else { Some(prev_idx) };
    }

    changes.reverse();
    changes
}
