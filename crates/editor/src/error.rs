// Chunk: docs/chunks/text_editor - Editor-level errors

use textkit_buffer::BoundsError;
use textkit_diff::PatchError;

/// Why an editor operation failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// A snapshot from another editor was offered for restore.
    #[error("snapshot belongs to editor {snapshot_editor}, not editor {editor}")]
    ForeignSnapshot { snapshot_editor: u64, editor: u64 },

    /// An index or range fell outside the text.
    #[error(transparent)]
    Bounds(#[from] BoundsError),

    /// A supplied patch failed verification against the current content.
    #[error(transparent)]
    Patch(#[from] PatchError),
}
