// Chunk: docs/chunks/char_buffer - Text and MutableText capability traits

//! Read and write capability traits over character sequences.
//!
//! [`Text`] is the read-only surface consumed by the diff engine and by
//! snapshot readers; [`MutableText`] adds the editing operations. All
//! positions are character indices, and all ranges are half-open.

use crate::error::{check_range, BoundsError};
use crate::view::{OffsetView, WindowView};

/// A read-only sequence of characters addressed by index.
pub trait Text {
    /// The number of characters in this text.
    fn len(&self) -> usize;

    /// The character at `index`, or a bounds error outside `[0, len)`.
    fn char_at(&self, index: usize) -> Result<char, BoundsError>;

    /// Returns true if this text contains no characters.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies the characters in `start..end` into a `String`.
    fn slice(&self, start: usize, end: usize) -> Result<String, BoundsError> {
        check_range(start, end, self.len())?;
        let mut out = String::with_capacity(end - start);
        for i in start..end {
            out.push(self.char_at(i)?);
        }
        Ok(out)
    }

    /// Copies the whole text into a `String`.
    fn to_text_string(&self) -> String {
        // len is checked, so slice cannot fail
        self.slice(0, self.len()).unwrap_or_default()
    }

    /// Copies the whole text into a `Vec<char>`.
    ///
    /// The diff engine indexes both sides of a comparison repeatedly, so it
    /// works over flat char slices rather than trait-object reads.
    fn to_chars(&self) -> Vec<char> {
        let mut out = Vec::with_capacity(self.len());
        for i in 0..self.len() {
            match self.char_at(i) {
                Ok(ch) => out.push(ch),
                Err(_) => break,
            }
        }
        out
    }
}

/// A text that can be modified in place.
///
/// `replace` is the one required primitive; insert/remove/append are
/// expressed through it so implementors only have to get the splice
/// arithmetic right once. Views (see [`MutableText::offset`] and
/// [`MutableText::limit_offset`]) translate indices and delegate to the
/// backing buffer; they carry no storage of their own.
pub trait MutableText: Text {
    /// Overwrites the character at `index` with `ch`.
    fn set_char(&mut self, index: usize, ch: char) -> Result<(), BoundsError>;

    /// Replaces the characters in `start..end` with `replacement`.
    ///
    /// The new length is `len - (end - start) + replacement.chars().count()`;
    /// every character outside `start..end` is preserved unchanged.
    fn replace(&mut self, start: usize, end: usize, replacement: &str) -> Result<(), BoundsError>;

    /// Inserts `text` before position `at` (`at == len` appends).
    fn insert(&mut self, at: usize, text: &str) -> Result<(), BoundsError> {
        self.replace(at, at, text)
    }

    /// Removes the characters in `start..end`.
    fn remove(&mut self, start: usize, end: usize) -> Result<(), BoundsError> {
        self.replace(start, end, "")
    }

    /// Appends `text` at the end of the buffer.
    fn append(&mut self, text: &str) -> Result<(), BoundsError> {
        let len = self.len();
        self.replace(len, len, text)
    }

    /// Appends a single character.
    fn push(&mut self, ch: char) -> Result<(), BoundsError> {
        let mut tmp = [0u8; 4];
        self.append(ch.encode_utf8(&mut tmp))
    }

    /// Overwrites `start..end` in place with characters taken from `text`
    /// starting at `text_offset`, without changing the length.
    fn overwrite(
        &mut self,
        start: usize,
        end: usize,
        text: &str,
        text_offset: usize,
    ) -> Result<(), BoundsError> {
        check_range(start, end, self.len())?;
        let needed = end - start;
        let mut taken = 0;
        for (i, ch) in text.chars().skip(text_offset).take(needed).enumerate() {
            self.set_char(start + i, ch)?;
            taken += 1;
        }
        if taken < needed {
            // The source text ran out before covering the whole range.
            return Err(BoundsError::Range {
                start: text_offset,
                end: text_offset + needed,
                len: text.chars().count(),
            });
        }
        Ok(())
    }

    /// Returns a synchronized view translated by `translation`.
    ///
    /// Index `i` through the view addresses index `i + translation` in this
    /// text; the view's length is `len - translation` and follows the
    /// backing buffer as it changes.
    fn offset(&mut self, translation: usize) -> OffsetView<'_, Self>
    where
        Self: Sized,
    {
        OffsetView::new(self, translation)
    }

    /// Returns a synchronized view bounded to `start..end`.
    ///
    /// Writes through the view mutate this text directly; the view's logical
    /// length tracks growth and shrinkage caused by its own `replace` calls.
    fn limit_offset(&mut self, start: usize, end: usize) -> Result<WindowView<'_, Self>, BoundsError>
    where
        Self: Sized,
    {
        check_range(start, end, self.len())?;
        Ok(WindowView::new(self, start, end - start))
    }
}

impl<T: Text + ?Sized> Text for &mut T {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn char_at(&self, index: usize) -> Result<char, BoundsError> {
        (**self).char_at(index)
    }
}

impl<T: MutableText + ?Sized> MutableText for &mut T {
    fn set_char(&mut self, index: usize, ch: char) -> Result<(), BoundsError> {
        (**self).set_char(index, ch)
    }

    fn replace(&mut self, start: usize, end: usize, replacement: &str) -> Result<(), BoundsError> {
        (**self).replace(start, end, replacement)
    }
}
