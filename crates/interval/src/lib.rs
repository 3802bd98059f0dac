// Chunk: docs/chunks/interval_tree - Crate root

//! Interval containers with logarithmic overlap queries.
//!
//! [`IntervalTree`] stores one value per `(start, end)` key;
//! [`IntervalSetTree`] admits multiple distinct values per key. Both are
//! red-black trees augmented with a subtree `max_end`, which prunes overlap
//! searches to O(log n + k). Intervals are half-open over `usize`
//! positions.
//!
//! ```
//! use textkit_interval::{IntervalTree, Span};
//!
//! let mut tree = IntervalTree::new();
//! tree.insert(Span::new(1, 4));
//! tree.insert(Span::new(2, 9));
//! tree.insert(Span::new(5, 8));
//! assert_eq!(tree.overlap_count(&Span::new(3, 6)), 3);
//! ```

mod interval;
mod list;
mod set_tree;
mod tree;

pub use interval::{interval_cmp, is_adjacent, overlaps, Interval, Span};
pub use list::{IntervalList, IntervalSetList, MutableIntervalList};
pub use set_tree::{IntervalSetTree, SetIter, SetOverlappers};
pub use tree::{IntervalTree, Iter, Overlappers};
