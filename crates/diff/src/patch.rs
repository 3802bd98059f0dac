// Chunk: docs/chunks/patch_model - Ordered delta containers

use std::fmt::Debug;

use crate::change::{Change, ChangeKind};
use crate::chunk::Chunk;
use crate::delta::Delta;
use crate::error::PatchError;

/// An ordered collection of deltas describing a source-to-target revision.
///
/// Deltas are kept sorted by source position. Application walks them in
/// descending position order so each edit leaves the positions of the
/// not-yet-applied deltas untouched; restore does the same against target
/// positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch<T> {
    deltas: Vec<Delta<T>>,
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Patch<T> {
    pub fn new() -> Self {
        Self { deltas: Vec::new() }
    }

    /// Inserts a delta, keeping the container sorted by source position.
    /// Deltas with equal positions keep their insertion order.
    pub fn push_delta(&mut self, delta: Delta<T>) {
        let at = self
            .deltas
            .partition_point(|d| d.source().position <= delta.source().position);
        self.deltas.insert(at, delta);
    }

    pub fn deltas(&self) -> &[Delta<T>] {
        &self.deltas
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }
}

impl<T: Clone + PartialEq + Debug> Patch<T> {
    /// Applies every delta to `sequence`, turning source content into
    /// target content.
    pub fn apply_to(&self, sequence: &mut Vec<T>) -> Result<(), PatchError> {
        for delta in self.deltas.iter().rev() {
            delta.apply_to(sequence)?;
        }
        Ok(())
    }

    /// Reverts every delta on `sequence`, turning target content back into
    /// source content.
    pub fn restore(&self, sequence: &mut Vec<T>) -> Result<(), PatchError> {
        for delta in self.deltas.iter().rev() {
            delta.restore(sequence)?;
        }
        Ok(())
    }
}

/// Builds a patch from the change records of a diff between `original` and
/// `revised`.
///
/// With `include_equals` the gaps between changes (and the tail) are
/// materialized as `Equal` deltas, which makes the patch self-describing:
/// its chunks cover both sequences end to end.
pub fn generate_patch<T: Clone>(
    original: &[T],
    revised: &[T],
    changes: &[Change],
    include_equals: bool,
) -> Patch<T> {
    let mut ordered: Vec<&Change> = changes.iter().collect();
    if include_equals {
        ordered.sort_by_key(|c| c.source.start);
    }

    let mut patch = Patch::new();
    let mut source_pos = 0;
    let mut target_pos = 0;

    for change in ordered {
        if include_equals && source_pos < change.source.start {
            patch.push_delta(Delta::Equal {
                source: Chunk::from_range(original, source_pos..change.source.start),
                target: Chunk::from_range(revised, target_pos..change.target.start),
            });
        }

        let source = Chunk::from_range(original, change.source.clone());
        let target = Chunk::from_range(revised, change.target.clone());
        patch.push_delta(match change.kind {
            ChangeKind::Equal => Delta::Equal { source, target },
            ChangeKind::Insert => Delta::Insert { source, target },
            ChangeKind::Delete => Delta::Delete { source, target },
            ChangeKind::Change => Delta::Change { source, target },
        });

        source_pos = change.source.end;
        target_pos = change.target.end;
    }

    if include_equals && source_pos < original.len() {
        patch.push_delta(Delta::Equal {
            source: Chunk::from_range(original, source_pos..original.len()),
            target: Chunk::from_range(revised, target_pos..revised.len()),
        });
    }

    patch
}
