// Chunk: docs/chunks/patch_model - Positioned runs of elements

use std::fmt::Debug;
use std::ops::Range;

use crate::error::PatchError;

/// A run of elements anchored at a position in one side of a diff.
///
/// Each delta carries two of these: the source chunk holds the elements a
/// patch expects to find (and removes), the target chunk the elements it
/// writes. An empty chunk still carries a meaningful position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<T> {
    pub position: usize,
    pub items: Vec<T>,
}

impl<T> Chunk<T> {
    pub fn new(position: usize, items: Vec<T>) -> Self {
        Self { position, items }
    }

    /// The number of elements in the run.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// The half-open range this chunk occupies.
    pub fn range(&self) -> Range<usize> {
        self.position..self.position + self.items.len()
    }
}

impl<T: Clone> Chunk<T> {
    /// Builds a chunk by copying `range` out of `sequence`.
    pub fn from_range(sequence: &[T], range: Range<usize>) -> Self {
        Self {
            position: range.start,
            items: sequence[range].to_vec(),
        }
    }
}

impl<T: PartialEq + Debug> Chunk<T> {
    /// Checks that `target` actually contains this chunk's elements at this
    /// chunk's position, so a stale or misdirected patch fails loudly
    /// instead of corrupting the target.
    pub fn verify(&self, target: &[T]) -> Result<(), PatchError> {
        if self.position + self.items.len() > target.len() {
            return Err(PatchError::BadPosition {
                position: self.position,
                target_len: target.len(),
            });
        }
        for (offset, expected) in self.items.iter().enumerate() {
            let actual = &target[self.position + offset];
            if actual != expected {
                return Err(PatchError::ContentMismatch {
                    position: self.position + offset,
                    expected: format!("{:?}", expected),
                    actual: format!("{:?}", actual),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_range_copies_elements() {
        let seq = vec!['a', 'b', 'c', 'd'];
        let chunk = Chunk::from_range(&seq, 1..3);
        assert_eq!(chunk.position, 1);
        assert_eq!(chunk.items, vec!['b', 'c']);
        assert_eq!(chunk.range(), 1..3);
    }

    #[test]
    fn verify_accepts_matching_target() {
        let chunk = Chunk::new(1, vec!['b', 'c']);
        assert_eq!(chunk.verify(&['a', 'b', 'c', 'd']), Ok(()));
    }

    #[test]
    fn verify_rejects_position_past_end() {
        let chunk = Chunk::new(3, vec!['x', 'y']);
        assert_eq!(
            chunk.verify(&['a', 'b', 'c', 'd']),
            Err(PatchError::BadPosition { position: 3, target_len: 4 })
        );
    }

    #[test]
    fn verify_reports_first_mismatch() {
        let chunk = Chunk::new(1, vec!['b', 'c']);
        let err = chunk.verify(&['a', 'b', 'x', 'd']).unwrap_err();
        assert_eq!(
            err,
            PatchError::ContentMismatch {
                position: 2,
                expected: "'c'".to_string(),
                actual: "'x'".to_string(),
            }
        );
    }

    #[test]
    fn empty_chunk_at_end_verifies() {
        let chunk: Chunk<char> = Chunk::new(4, Vec::new());
        assert_eq!(chunk.verify(&['a', 'b', 'c', 'd']), Ok(()));
    }
}
