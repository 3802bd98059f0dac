// Chunk: docs/chunks/patch_model - Reversible per-edit deltas

use std::fmt::Debug;

use crate::change::ChangeKind;
use crate::chunk::Chunk;
use crate::error::PatchError;

/// One reversible edit between a source chunk and a target chunk.
///
/// Applying a delta rewrites a target sequence forward (source content
/// becomes target content); restoring rewrites it backward. Both directions
/// verify the affected chunk first, so a delta never partially applies.
///
/// The variant fixes the shape: `Insert` carries an empty source chunk,
/// `Delete` an empty target chunk, and `Equal` two chunks with identical
/// content that apply as no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delta<T> {
    Equal { source: Chunk<T>, target: Chunk<T> },
    Insert { source: Chunk<T>, target: Chunk<T> },
    Delete { source: Chunk<T>, target: Chunk<T> },
    Change { source: Chunk<T>, target: Chunk<T> },
}

impl<T> Delta<T> {
    pub fn kind(&self) -> ChangeKind {
        match self {
            Delta::Equal { .. } => ChangeKind::Equal,
            Delta::Insert { .. } => ChangeKind::Insert,
            Delta::Delete { .. } => ChangeKind::Delete,
            Delta::Change { .. } => ChangeKind::Change,
        }
    }

    /// The chunk this delta expects in the unpatched sequence.
    pub fn source(&self) -> &Chunk<T> {
        match self {
            Delta::Equal { source, .. }
            | Delta::Insert { source, .. }
            | Delta::Delete { source, .. }
            | Delta::Change { source, .. } => source,
        }
    }

    /// The chunk this delta leaves in the patched sequence.
    pub fn target(&self) -> &Chunk<T> {
        match self {
            Delta::Equal { target, .. }
            | Delta::Insert { target, .. }
            | Delta::Delete { target, .. }
            | Delta::Change { target, .. } => target,
        }
    }
}

impl<T: Clone + PartialEq + Debug> Delta<T> {
    /// Applies this delta to `sequence`, verifying the source chunk first.
    pub fn apply_to(&self, sequence: &mut Vec<T>) -> Result<(), PatchError> {
        self.source().verify(sequence)?;
        match self {
            Delta::Equal { .. } => {}
            Delta::Insert { source, target } => {
                sequence.splice(
                    source.position..source.position,
                    target.items.iter().cloned(),
                );
            }
            Delta::Delete { source, .. } => {
                sequence.drain(source.range());
            }
            Delta::Change { source, target } => {
                sequence.splice(source.range(), target.items.iter().cloned());
            }
        }
        Ok(())
    }

    /// Reverts this delta on `sequence`, verifying the target chunk first.
    pub fn restore(&self, sequence: &mut Vec<T>) -> Result<(), PatchError> {
        self.target().verify(sequence)?;
        match self {
            Delta::Equal { .. } => {}
            Delta::Insert { target, .. } => {
                sequence.drain(target.range());
            }
            Delta::Delete { source, target } => {
                sequence.splice(
                    target.position..target.position,
                    source.items.iter().cloned(),
                );
            }
            Delta::Change { source, target } => {
                sequence.splice(target.range(), source.items.iter().cloned());
            }
        }
        Ok(())
    }
}
