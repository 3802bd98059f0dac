// Chunk: docs/chunks/text_views - Synchronized offset and window views

//! Synchronized sub-views over a mutable text.
//!
//! A view holds a mutable borrow of its backing text plus a translation (and,
//! for [`WindowView`], a bound). Every operation translates indices and
//! delegates; there is no independent storage, so writes through a view are
//! immediately visible through the backing buffer and vice versa. The borrow
//! makes aliased mutation unrepresentable.

use crate::error::{check_index, check_range, BoundsError};
use crate::text::{MutableText, Text};

/// A view of a mutable text translated by a fixed offset.
///
/// Index `i` addresses `i + translation` in the backing text. The view's
/// length is `backing.len() - translation` and follows the backing text as
/// it grows or shrinks.
#[derive(Debug)]
pub struct OffsetView<'a, T: MutableText> {
    text: &'a mut T,
    translation: usize,
}

impl<'a, T: MutableText> OffsetView<'a, T> {
    pub(crate) fn new(text: &'a mut T, translation: usize) -> Self {
        Self { text, translation }
    }

    /// The translation applied to every index.
    pub fn translation(&self) -> usize {
        self.translation
    }
}

impl<T: MutableText> Text for OffsetView<'_, T> {
    fn len(&self) -> usize {
        self.text.len().saturating_sub(self.translation)
    }

    fn char_at(&self, index: usize) -> Result<char, BoundsError> {
        check_index(index, self.len())?;
        self.text.char_at(index + self.translation)
    }

    fn slice(&self, start: usize, end: usize) -> Result<String, BoundsError> {
        check_range(start, end, self.len())?;
        self.text.slice(start + self.translation, end + self.translation)
    }
}

impl<T: MutableText> MutableText for OffsetView<'_, T> {
    fn set_char(&mut self, index: usize, ch: char) -> Result<(), BoundsError> {
        check_index(index, self.len())?;
        self.text.set_char(index + self.translation, ch)
    }

    fn replace(&mut self, start: usize, end: usize, replacement: &str) -> Result<(), BoundsError> {
        check_range(start, end, self.len())?;
        self.text
            .replace(start + self.translation, end + self.translation, replacement)
    }
}

/// A view of a mutable text bounded to a window.
///
/// Index `i` addresses `start + i` in the backing text; indices at or past
/// the window length are rejected. The window length tracks length changes
/// made through this view, so a replace that grows the window keeps the
/// trailing characters addressable.
#[derive(Debug)]
pub struct WindowView<'a, T: MutableText> {
    text: &'a mut T,
    start: usize,
    len: usize,
}

impl<'a, T: MutableText> WindowView<'a, T> {
    pub(crate) fn new(text: &'a mut T, start: usize, len: usize) -> Self {
        Self { text, start, len }
    }

    /// The window's starting position in the backing text.
    pub fn start(&self) -> usize {
        self.start
    }
}

impl<T: MutableText> Text for WindowView<'_, T> {
    fn len(&self) -> usize {
        self.len
    }

    fn char_at(&self, index: usize) -> Result<char, BoundsError> {
        check_index(index, self.len)?;
        self.text.char_at(index + self.start)
    }

    fn slice(&self, start: usize, end: usize) -> Result<String, BoundsError> {
        check_range(start, end, self.len)?;
        self.text.slice(start + self.start, end + self.start)
    }
}

impl<T: MutableText> MutableText for WindowView<'_, T> {
    fn set_char(&mut self, index: usize, ch: char) -> Result<(), BoundsError> {
        check_index(index, self.len)?;
        self.text.set_char(index + self.start, ch)
    }

    fn replace(&mut self, start: usize, end: usize, replacement: &str) -> Result<(), BoundsError> {
        check_range(start, end, self.len)?;
        self.text
            .replace(start + self.start, end + self.start, replacement)?;
        self.len = self.len - (end - start) + replacement.chars().count();
        Ok(())
    }
}
