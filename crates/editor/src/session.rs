// Chunk: docs/chunks/text_editor - Scoped edit sessions

//! Scoped, committing edit access to an editor.
//!
//! A session mutably borrows its editor, so while it lives nothing else
//! can read or edit the content; the borrow checker enforces the
//! one-session-at-a-time rule. Commit happens on [`EditSession::commit`]
//! or, failing that, on drop, so an early return or panic still closes
//! the session and publishes what was edited.
//!
//! The committed patch is derived by diffing the pre-session snapshot
//! against the edited content, which collapses any number of session
//! operations into one minimal mutation event.

use std::sync::Arc;

use textkit_buffer::{check_index, check_range, BoundsError, MutableText, Text};
use textkit_diff::{diff_text_chars, TextPatch};

use crate::editor::TextEditor;
use crate::error::EditError;
use crate::snapshot::Snapshot;

/// An in-progress edit of a [`TextEditor`].
///
/// Implements [`MutableText`] over the session's window (the whole content
/// for [`begin_edit`], a sub-range for [`begin_edit_range`]); indices are
/// window-relative and the window tracks its own length changes.
///
/// [`begin_edit`]: TextEditor::begin_edit
/// [`begin_edit_range`]: TextEditor::begin_edit_range
#[derive(Debug)]
pub struct EditSession<'a, M: Clone + PartialEq> {
    editor: &'a mut TextEditor<M>,
    before: Snapshot,
    window_start: usize,
    window_len: usize,
    done: bool,
}

impl<'a, M: Clone + PartialEq> EditSession<'a, M> {
    pub(crate) fn new(editor: &'a mut TextEditor<M>, window_start: usize, window_len: usize) -> Self {
        let before = editor.snapshot();
        Self { editor, before, window_start, window_len, done: false }
    }

    /// The content snapshot taken when the session opened.
    pub fn before(&self) -> &Snapshot {
        &self.before
    }

    /// The window's starting position in the editor's content.
    pub fn window_start(&self) -> usize {
        self.window_start
    }

    /// Applies a patch through this session. Positions are
    /// window-relative. Each delta is verified before it mutates anything;
    /// a delta that fails verification stops the application there.
    pub fn apply_patch(&mut self, patch: &TextPatch) -> Result<(), EditError> {
        patch.apply_to(self)?;
        Ok(())
    }

    /// Commits the session: diffs the content against the opening snapshot
    /// and, if anything changed, publishes the mutation and moves markers.
    /// Returns the committed patch (empty when nothing changed).
    pub fn commit(mut self) -> TextPatch {
        self.finish()
    }

    fn finish(&mut self) -> TextPatch {
        if self.done {
            return TextPatch::new();
        }
        self.done = true;
        let patch = diff_text_chars(self.before.as_chars(), self.editor.content.as_chars());
        let before = self.before.clone();
        self.editor.finish_commit(&patch, before);
        patch
    }

    fn buffer_mut(&mut self) -> &mut textkit_buffer::CharBuffer {
        Arc::make_mut(&mut self.editor.content)
    }
}

impl<M: Clone + PartialEq> Drop for EditSession<'_, M> {
    fn drop(&mut self) {
        self.finish();
    }
}

impl<M: Clone + PartialEq> Text for EditSession<'_, M> {
    fn len(&self) -> usize {
        self.window_len
    }

    fn char_at(&self, index: usize) -> Result<char, BoundsError> {
        check_index(index, self.window_len)?;
        self.editor.content.char_at(index + self.window_start)
    }

    fn slice(&self, start: usize, end: usize) -> Result<String, BoundsError> {
        check_range(start, end, self.window_len)?;
        self.editor.content.slice(start + self.window_start, end + self.window_start)
    }
}

impl<M: Clone + PartialEq> MutableText for EditSession<'_, M> {
    fn set_char(&mut self, index: usize, ch: char) -> Result<(), BoundsError> {
        check_index(index, self.window_len)?;
        let at = index + self.window_start;
        self.buffer_mut().set_char(at, ch)
    }

    fn replace(&mut self, start: usize, end: usize, replacement: &str) -> Result<(), BoundsError> {
        check_range(start, end, self.window_len)?;
        let (from, to) = (start + self.window_start, end + self.window_start);
        self.buffer_mut().replace(from, to, replacement)?;
        self.window_len = self.window_len - (end - start) + replacement.chars().count();
        Ok(())
    }
}
