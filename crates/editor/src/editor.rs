// Chunk: docs/chunks/text_editor - The editor: content, markers, commits

use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_channel::Receiver;
use textkit_buffer::{check_range, BoundsError, CharBuffer, Text};
use textkit_diff::{diff_text_chars, ChangeKind, TextPatch};
use textkit_interval::{Interval, IntervalSetTree, SetIter, SetOverlappers, Span};

use crate::error::EditError;
use crate::events::{MutationBus, TextMutation};
use crate::marker::Marker;
use crate::session::EditSession;
use crate::snapshot::Snapshot;

static NEXT_EDITOR_ID: AtomicU64 = AtomicU64::new(1);

/// A text editor: content plus the bookkeeping that makes edits observable.
///
/// The content lives behind an `Arc` so snapshots are O(1); the first write
/// of an edit session copies the buffer if a snapshot still shares it.
/// Every committed edit is published to subscribers as a [`TextMutation`]
/// and moves the markers registered on the editor.
///
/// Edits go through [`EditSession`]s obtained from [`begin_edit`]; the
/// session borrows the editor mutably, so the type system already rules
/// out two concurrent sessions on one editor.
///
/// `M` is the payload carried by this editor's markers.
///
/// [`begin_edit`]: TextEditor::begin_edit
#[derive(Debug)]
pub struct TextEditor<M = ()> {
    pub(crate) id: u64,
    pub(crate) content: Arc<CharBuffer>,
    pub(crate) revision: u64,
    pub(crate) markers: IntervalSetTree<Marker<M>>,
    pub(crate) bus: MutationBus,
}

impl<M: Clone + PartialEq> Default for TextEditor<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Clone + PartialEq> TextEditor<M> {
    /// Creates an empty editor.
    pub fn new() -> Self {
        Self::from_str("")
    }

    /// Creates an editor holding the given text.
    pub fn from_str(text: &str) -> Self {
        Self {
            id: NEXT_EDITOR_ID.fetch_add(1, Ordering::Relaxed),
            content: Arc::new(CharBuffer::from_str(text)),
            revision: 0,
            markers: IntervalSetTree::new(),
            bus: MutationBus::new(),
        }
    }

    /// This editor's process-unique id. Snapshots carry it so a restore
    /// from the wrong editor is refused.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Counts committed edits. Bumped once per non-empty commit or restore.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Takes an O(1) snapshot of the current content.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.id, self.revision, Arc::clone(&self.content))
    }

    /// Registers a receiver for committed mutations. The receiver's queue
    /// is bounded; events beyond its capacity are dropped for that
    /// subscriber only.
    pub fn subscribe(&mut self) -> Receiver<TextMutation> {
        self.bus.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.bus.subscriber_count()
    }

    /// Opens an edit session over the whole content.
    pub fn begin_edit(&mut self) -> EditSession<'_, M> {
        let len = self.content.len();
        EditSession::new(self, 0, len)
    }

    /// Opens an edit session restricted to `range`; session indices are
    /// relative to `range.start`.
    pub fn begin_edit_range(&mut self, range: Range<usize>) -> Result<EditSession<'_, M>, EditError> {
        check_range(range.start, range.end, self.content.len())?;
        Ok(EditSession::new(self, range.start, range.end - range.start))
    }

    /// Applies a patch as a single committed edit. The patch is verified
    /// against the current content before anything changes.
    pub fn apply_patch(&mut self, patch: &TextPatch) -> Result<TextPatch, EditError> {
        let mut session = self.begin_edit();
        session.apply_patch(patch)?;
        Ok(session.commit())
    }

    /// Replaces the content with a snapshot's, committing the difference
    /// as a regular mutation. Only this editor's own snapshots are
    /// accepted.
    pub fn restore_to(&mut self, snapshot: &Snapshot) -> Result<TextPatch, EditError> {
        if snapshot.editor_id() != self.id {
            return Err(EditError::ForeignSnapshot {
                snapshot_editor: snapshot.editor_id(),
                editor: self.id,
            });
        }
        let before = self.snapshot();
        let patch = diff_text_chars(before.as_chars(), snapshot.as_chars());
        self.content = Arc::clone(snapshot.content());
        tracing::debug!(editor = self.id, to_revision = snapshot.revision(), "restoring snapshot");
        self.finish_commit(&patch, before);
        Ok(patch)
    }

    // ==================== markers ====================

    /// Registers a marker. Returns `false` when an equal marker is already
    /// registered.
    pub fn add_marker(&mut self, marker: Marker<M>) -> bool {
        self.markers.insert(marker)
    }

    /// Removes one previously registered marker.
    pub fn remove_marker(&mut self, marker: &Marker<M>) -> bool {
        self.markers.remove(marker)
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// All markers, in ascending range order.
    pub fn markers(&self) -> SetIter<'_, Marker<M>> {
        self.markers.iter()
    }

    /// The markers covering the given position.
    pub fn markers_at(&self, position: usize) -> SetOverlappers<'_, Marker<M>> {
        self.markers.overlappers(&Span::point(position))
    }

    /// The markers overlapping the given range.
    pub fn markers_overlapping(&self, range: Range<usize>) -> SetOverlappers<'_, Marker<M>> {
        self.markers.overlappers(&Span::new(range.start, range.end))
    }

    // ==================== commit plumbing ====================

    /// Closes out a committed edit: bumps the revision, moves markers, and
    /// publishes the mutation. Empty patches commit as no-ops.
    pub(crate) fn finish_commit(&mut self, patch: &TextPatch, before: Snapshot) {
        if patch.is_empty() {
            return;
        }
        self.revision += 1;
        self.adjust_markers(patch);
        let after = self.snapshot();
        tracing::debug!(
            editor = self.id,
            revision = self.revision,
            deltas = patch.len(),
            "committed edit"
        );
        self.bus.publish(&TextMutation { patch: patch.clone(), before, after });
    }

    fn adjust_markers(&mut self, patch: &TextPatch) {
        if self.markers.is_empty() {
            return;
        }
        let current: Vec<Marker<M>> = self.markers.iter().cloned().collect();
        self.markers.clear();
        for marker in current {
            let start = map_position(patch, marker.start(), marker.is_exclusive());
            let end = map_position(patch, marker.end(), !marker.is_exclusive());
            self.markers.insert(marker.relocated(start, end.max(start)));
        }
        tracing::trace!(editor = self.id, markers = self.markers.len(), "adjusted markers");
    }
}

impl<M> Text for TextEditor<M> {
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

impl<M> std::fmt::Display for TextEditor<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

/// Maps a pre-edit position through a committed patch.
///
/// Edits entirely before the position shift it by their length change; an
/// edit surrounding it clamps it into the replacement. `shift_at_point`
/// decides whether an insertion landing exactly on the position pushes it
/// right (the endpoint stays outside the insertion) or leaves it (the
/// insertion is absorbed).
fn map_position(patch: &TextPatch, position: usize, shift_at_point: bool) -> usize {
    let mut shift: isize = 0;
    for delta in patch.deltas() {
        if delta.kind() == ChangeKind::Equal {
            continue;
        }
        let at = delta.source().position;
        let removed = delta.source().size();
        let added = delta.target().size();
        if at > position {
            break;
        }
        if removed == 0 {
            if at < position || shift_at_point {
                shift += added as isize;
            }
        } else if position >= at + removed {
            shift += added as isize - removed as isize;
        } else {
            // Inside the replaced run: clamp to what the replacement keeps.
            let offset = (position - at).min(added);
            return (at as isize + shift + offset as isize) as usize;
        }
    }
    (position as isize + shift) as usize
}
