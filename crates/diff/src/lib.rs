// Chunk: docs/chunks/myers_diff - Crate root and high-level diff entry points

//! Sequence diffing and reversible patches.
//!
//! The engine computes a shortest edit script between two sequences with
//! Myers' greedy algorithm and packages it as a [`Patch`]: an ordered set of
//! verified, reversible [`Delta`]s. Applying a patch turns source content
//! into target content; restoring it turns target content back into source
//! content. Every delta checks the text it is about to touch first, so a
//! patch aimed at the wrong base fails with a [`PatchError`] instead of
//! silently corrupting it.
//!
//! Character sequences get a specialization, [`TextPatch`], whose deltas
//! apply directly to any [`MutableText`](textkit_buffer::MutableText)
//! implementor.
//!
//! ```
//! let patch = textkit_diff::diff_text("hello world", "hello, brave world");
//! assert_eq!(
//!     patch.apply_to_string("hello world").unwrap(),
//!     "hello, brave world",
//! );
//! ```

mod change;
mod chunk;
mod delta;
mod error;
mod myers;
mod patch;
mod text;

pub use change::{Change, ChangeKind};
pub use chunk::Chunk;
pub use delta::Delta;
pub use error::PatchError;
pub use myers::{diff_chars, diff_slices, diff_slices_by};
pub use patch::{generate_patch, Patch};
pub use text::{generate_text_patch, TextChunk, TextDelta, TextPatch};

/// Diffs two slices into a patch of the differing runs.
pub fn diff<T: Clone + PartialEq>(original: &[T], revised: &[T]) -> Patch<T> {
    let changes = diff_slices(original, revised);
    generate_patch(original, revised, &changes, false)
}

/// Like [`diff`], but the patch also materializes the equal runs between
/// edits, covering both sequences end to end.
pub fn diff_with_equals<T: Clone + PartialEq>(original: &[T], revised: &[T]) -> Patch<T> {
    let changes = diff_slices(original, revised);
    generate_patch(original, revised, &changes, true)
}

/// Diffs two slices with a caller-supplied equalizer.
///
/// The equalizer only steers the path search; the generated chunks still
/// copy the actual elements, so apply-side verification uses `==`.
pub fn diff_with<T: Clone, F: Fn(&T, &T) -> bool>(
    original: &[T],
    revised: &[T],
    eq: F,
) -> Patch<T> {
    let changes = diff_slices_by(original, revised, eq);
    generate_patch(original, revised, &changes, false)
}

/// Diffs two strings character by character into a [`TextPatch`].
pub fn diff_text(original: &str, revised: &str) -> TextPatch {
    let original: Vec<char> = original.chars().collect();
    let revised: Vec<char> = revised.chars().collect();
    diff_text_chars(&original, &revised)
}

/// Like [`diff_text`], but the patch also materializes the equal runs.
pub fn diff_text_with_equals(original: &str, revised: &str) -> TextPatch {
    let original: Vec<char> = original.chars().collect();
    let revised: Vec<char> = revised.chars().collect();
    let changes = diff_chars(&original, &revised);
    generate_text_patch(&original, &revised, &changes, true)
}

/// Diffs two character sequences into a [`TextPatch`].
pub fn diff_text_chars(original: &[char], revised: &[char]) -> TextPatch {
    let changes = diff_chars(original, revised);
    generate_text_patch(original, revised, &changes, false)
}

/// Diffs two strings line by line. Chunk positions are line numbers and
/// chunk items are whole lines without their terminators.
pub fn diff_lines(original: &str, revised: &str) -> Patch<String> {
    let original: Vec<String> = original.split('\n').map(str::to_string).collect();
    let revised: Vec<String> = revised.split('\n').map(str::to_string).collect();
    diff(&original, &revised)
}

/// Diffs two strings character by character, then joins each chunk's
/// characters into a single string per delta. Positions remain character
/// positions; the output is meant for display, not for reapplication to a
/// line sequence.
pub fn diff_inline(original: &str, revised: &str) -> Patch<String> {
    let original_chars: Vec<char> = original.chars().collect();
    let revised_chars: Vec<char> = revised.chars().collect();
    let changes = diff_chars(&original_chars, &revised_chars);

    let mut patch = Patch::new();
    for change in &changes {
        let source = Chunk::new(
            change.source.start,
            vec![original_chars[change.source.clone()].iter().collect()],
        );
        let target = Chunk::new(
            change.target.start,
            vec![revised_chars[change.target.clone()].iter().collect()],
        );
        patch.push_delta(match change.kind {
            ChangeKind::Equal => Delta::Equal { source, target },
            ChangeKind::Insert => Delta::Insert { source, target },
            ChangeKind::Delete => Delta::Delete { source, target },
            ChangeKind::Change => Delta::Change { source, target },
        });
    }
    patch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_diff_round_trips() {
        let a = vec![1, 2, 3, 4, 5];
        let b = vec![1, 9, 9, 4, 5, 6];
        let patch = diff(&a, &b);

        let mut seq = a.clone();
        patch.apply_to(&mut seq).unwrap();
        assert_eq!(seq, b);
        patch.restore(&mut seq).unwrap();
        assert_eq!(seq, a);
    }

    #[test]
    fn line_diff_positions_are_line_numbers() {
        let original = "fn main() {\n    println!(\"hi\");\n}\n";
        let revised = "fn main() {\n    println!(\"hello\");\n}\n";
        let patch = diff_lines(original, revised);
        assert_eq!(patch.len(), 1);
        let delta = &patch.deltas()[0];
        assert_eq!(delta.kind(), ChangeKind::Change);
        assert_eq!(delta.source().position, 1);
        assert_eq!(delta.source().items, vec!["    println!(\"hi\");".to_string()]);
        assert_eq!(delta.target().items, vec!["    println!(\"hello\");".to_string()]);
    }

    #[test]
    fn line_diff_round_trips() {
        let original = "a\nb\nc\nd";
        let revised = "a\nx\nc\nd\ne";
        let patch = diff_lines(original, revised);

        let mut lines: Vec<String> = original.split('\n').map(str::to_string).collect();
        patch.apply_to(&mut lines).unwrap();
        assert_eq!(lines.join("\n"), revised);
        patch.restore(&mut lines).unwrap();
        assert_eq!(lines.join("\n"), original);
    }

    #[test]
    fn inline_diff_compresses_chunks_to_strings() {
        let patch = diff_inline("the lazy dog", "the busy dog");
        assert_eq!(patch.len(), 1);
        let delta = &patch.deltas()[0];
        assert_eq!(delta.kind(), ChangeKind::Change);
        assert_eq!(delta.source().position, 4);
        assert_eq!(delta.source().items, vec!["laz".to_string()]);
        assert_eq!(delta.target().items, vec!["bus".to_string()]);
    }

    #[test]
    fn diff_with_equalizer_steers_the_path() {
        let a = vec!["A", "b", "C"];
        let b = vec!["a", "B", "c"];
        let patch = diff_with(&a, &b, |x, y| x.eq_ignore_ascii_case(y));
        assert!(patch.is_empty());
    }

    #[test]
    fn with_equals_covers_identical_inputs_with_one_delta() {
        let a = vec![1, 2, 3];
        let patch = diff_with_equals(&a, &a);
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.deltas()[0].kind(), ChangeKind::Equal);
        assert_eq!(patch.deltas()[0].source().items, vec![1, 2, 3]);
    }
}
