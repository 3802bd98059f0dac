// Chunk: docs/chunks/char_buffer - Bounds checking shared by buffers and views

use thiserror::Error;

/// An index or range fell outside a buffer's logical length.
///
/// These are programmer errors at the call site; the engine surfaces them
/// immediately and never tries to clamp or recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoundsError {
    /// A single index outside `[0, len)`.
    #[error("index {index} out of bounds for length {len}")]
    Index { index: usize, len: usize },

    /// A half-open range that is inverted or extends past `len`.
    #[error("range {start}..{end} out of bounds for length {len}")]
    Range { start: usize, end: usize, len: usize },
}

/// Checks that `index` addresses an existing character in `[0, len)`.
pub fn check_index(index: usize, len: usize) -> Result<(), BoundsError> {
    if index >= len {
        return Err(BoundsError::Index { index, len });
    }
    Ok(())
}

/// Checks that `start..end` is a well-formed half-open range within `len`.
///
/// `start == end == len` is allowed: an empty range at the end of the buffer
/// is how appends are expressed through `replace`.
pub fn check_range(start: usize, end: usize, len: usize) -> Result<(), BoundsError> {
    if start > end || end > len {
        return Err(BoundsError::Range { start, end, len });
    }
    Ok(())
}
