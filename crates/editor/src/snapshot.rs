// Chunk: docs/chunks/text_editor - Immutable content snapshots

use std::sync::Arc;

use textkit_buffer::{BoundsError, CharBuffer, Text};

/// An immutable view of an editor's content at a point in time.
///
/// Creation is O(1): the snapshot shares the editor's buffer through an
/// `Arc`, and the editor copies on its next write. Snapshots are `Clone`
/// and `Send`, so observers can hold them across commits without pinning
/// the editor.
#[derive(Debug, Clone)]
pub struct Snapshot {
    editor_id: u64,
    revision: u64,
    content: Arc<CharBuffer>,
}

impl Snapshot {
    pub(crate) fn new(editor_id: u64, revision: u64, content: Arc<CharBuffer>) -> Self {
        Self { editor_id, revision, content }
    }

    /// The editor this snapshot was taken from.
    pub fn editor_id(&self) -> u64 {
        self.editor_id
    }

    /// The editor's revision counter at snapshot time.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn content(&self) -> &Arc<CharBuffer> {
        &self.content
    }

    /// The snapshot content as a contiguous char slice.
    pub fn as_chars(&self) -> &[char] {
        self.content.as_chars()
    }
}

impl Text for Snapshot {
    fn len(&self) -> usize {
        self.content.len()
    }

    fn char_at(&self, index: usize) -> Result<char, BoundsError> {
        self.content.char_at(index)
    }

    fn slice(&self, start: usize, end: usize) -> Result<String, BoundsError> {
        self.content.slice(start, end)
    }

    fn to_chars(&self) -> Vec<char> {
        self.content.to_chars()
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
