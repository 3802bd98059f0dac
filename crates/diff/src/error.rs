// Chunk: docs/chunks/patch_model - Patch application errors

use textkit_buffer::BoundsError;

/// Why a patch could not be applied to (or reverted from) a target.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    /// A delta addresses a position past the end of the target.
    #[error("patch position {position} is out of bounds for target of length {target_len}")]
    BadPosition { position: usize, target_len: usize },

    /// The target's content at the delta position does not match what the
    /// patch was generated against.
    #[error("patch mismatch at position {position}: expected {expected:?}, found {actual:?}")]
    ContentMismatch {
        position: usize,
        expected: String,
        actual: String,
    },

    /// An underlying text operation rejected its indices.
    #[error(transparent)]
    Bounds(#[from] BoundsError),
}
