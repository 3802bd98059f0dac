// Chunk: docs/chunks/text_patch - Character-sequence patch specialization

//! Patches that apply directly to [`Text`] implementors.
//!
//! The generic [`Patch`](crate::Patch) rewrites a `Vec<T>`; editors hold
//! their content in buffer types instead, so this specialization speaks the
//! `Text`/`MutableText` traits. A [`TextDelta`] turns into a single
//! `insert`/`remove`/`replace` call against the buffer, which keeps the
//! suffix shuffling inside the buffer's own splice.

use textkit_buffer::{MutableText, Text};

use crate::change::{Change, ChangeKind};
use crate::error::PatchError;

/// A run of characters anchored at a position in one side of a text diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub position: usize,
    content: Vec<char>,
}

impl TextChunk {
    pub fn new(position: usize, content: &str) -> Self {
        Self { position, content: content.chars().collect() }
    }

    pub fn from_chars(position: usize, content: Vec<char>) -> Self {
        Self { position, content }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// One past the last position this chunk occupies.
    pub fn end(&self) -> usize {
        self.position + self.content.len()
    }

    pub fn content(&self) -> String {
        self.content.iter().collect()
    }

    /// Checks that `target` contains this chunk's characters at this
    /// chunk's position.
    pub fn verify<T: Text + ?Sized>(&self, target: &T) -> Result<(), PatchError> {
        if self.end() > target.len() {
            return Err(PatchError::BadPosition {
                position: self.position,
                target_len: target.len(),
            });
        }
        for (offset, &expected) in self.content.iter().enumerate() {
            let actual = target.char_at(self.position + offset)?;
            if actual != expected {
                return Err(PatchError::ContentMismatch {
                    position: self.position + offset,
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// One reversible text edit. Same shape as [`Delta`](crate::Delta), applied
/// through the `MutableText` trait instead of a `Vec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextDelta {
    Equal { source: TextChunk, target: TextChunk },
    Insert { source: TextChunk, target: TextChunk },
    Delete { source: TextChunk, target: TextChunk },
    Change { source: TextChunk, target: TextChunk },
}

impl TextDelta {
    pub fn kind(&self) -> ChangeKind {
        match self {
            TextDelta::Equal { .. } => ChangeKind::Equal,
            TextDelta::Insert { .. } => ChangeKind::Insert,
            TextDelta::Delete { .. } => ChangeKind::Delete,
            TextDelta::Change { .. } => ChangeKind::Change,
        }
    }

    pub fn source(&self) -> &TextChunk {
        match self {
            TextDelta::Equal { source, .. }
            | TextDelta::Insert { source, .. }
            | TextDelta::Delete { source, .. }
            | TextDelta::Change { source, .. } => source,
        }
    }

    pub fn target(&self) -> &TextChunk {
        match self {
            TextDelta::Equal { target, .. }
            | TextDelta::Insert { target, .. }
            | TextDelta::Delete { target, .. }
            | TextDelta::Change { target, .. } => target,
        }
    }

    /// Applies this delta to `text`, verifying the source chunk first.
    pub fn apply_to<T: MutableText + ?Sized>(&self, text: &mut T) -> Result<(), PatchError> {
        self.source().verify(text)?;
        match self {
            TextDelta::Equal { .. } => Ok(()),
            TextDelta::Insert { source, target } => {
                Ok(text.insert(source.position, &target.content())?)
            }
            TextDelta::Delete { source, .. } => {
                Ok(text.remove(source.position, source.end())?)
            }
            TextDelta::Change { source, target } => {
                Ok(text.replace(source.position, source.end(), &target.content())?)
            }
        }
    }

    /// Reverts this delta on `text`, verifying the target chunk first.
    pub fn restore<T: MutableText + ?Sized>(&self, text: &mut T) -> Result<(), PatchError> {
        self.target().verify(text)?;
        match self {
            TextDelta::Equal { .. } => Ok(()),
            TextDelta::Insert { target, .. } => {
                Ok(text.remove(target.position, target.end())?)
            }
            TextDelta::Delete { source, target } => {
                Ok(text.insert(target.position, &source.content())?)
            }
            TextDelta::Change { source, target } => {
                Ok(text.replace(target.position, target.end(), &source.content())?)
            }
        }
    }
}

/// An ordered collection of text deltas, kept sorted by source position and
/// applied in descending position order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextPatch {
    deltas: Vec<TextDelta>,
}

impl TextPatch {
    pub fn new() -> Self {
        Self { deltas: Vec::new() }
    }

    /// Inserts a delta, keeping the container sorted by source position.
    pub fn push_delta(&mut self, delta: TextDelta) {
        let at = self
            .deltas
            .partition_point(|d| d.source().position <= delta.source().position);
        self.deltas.insert(at, delta);
    }

    pub fn deltas(&self) -> &[TextDelta] {
        &self.deltas
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Applies every delta to `text`, turning source content into target
    /// content.
    pub fn apply_to<T: MutableText + ?Sized>(&self, text: &mut T) -> Result<(), PatchError> {
        for delta in self.deltas.iter().rev() {
            delta.apply_to(text)?;
        }
        Ok(())
    }

    /// Reverts every delta on `text`, turning target content back into
    /// source content.
    pub fn restore<T: MutableText + ?Sized>(&self, text: &mut T) -> Result<(), PatchError> {
        for delta in self.deltas.iter().rev() {
            delta.restore(text)?;
        }
        Ok(())
    }

    /// Convenience for applying to plain strings.
    pub fn apply_to_string(&self, text: &str) -> Result<String, PatchError> {
        let mut buffer = textkit_buffer::CharBuffer::from_str(text);
        self.apply_to(&mut buffer)?;
        Ok(buffer.to_string())
    }
}

/// Builds a text patch from the change records of a character diff.
pub fn generate_text_patch(
    original: &[char],
    revised: &[char],
    changes: &[Change],
    include_equals: bool,
) -> TextPatch {
    let mut ordered: Vec<&Change> = changes.iter().collect();
    if include_equals {
        ordered.sort_by_key(|c| c.source.start);
    }

    let mut patch = TextPatch::new();
    let mut source_pos = 0;
    let mut target_pos = 0;

    for change in ordered {
        if include_equals && source_pos < change.source.start {
            patch.push_delta(TextDelta::Equal {
                source: TextChunk::from_chars(
                    source_pos,
                    original[source_pos..change.source.start].to_vec(),
                ),
                target: TextChunk::from_chars(
                    target_pos,
                    revised[target_pos..change.target.start].to_vec(),
                ),
            });
        }

        let source = TextChunk::from_chars(
            change.source.start,
            original[change.source.clone()].to_vec(),
        );
        let target = TextChunk::from_chars(
            change.target.start,
            revised[change.target.clone()].to_vec(),
        );
        patch.push_delta(match change.kind {
            ChangeKind::Equal => TextDelta::Equal { source, target },
            ChangeKind::Insert => TextDelta::Insert { source, target },
            ChangeKind::Delete => TextDelta::Delete { source, target },
            ChangeKind::Change => TextDelta::Change { source, target },
        });

        source_pos = change.source.end;
        target_pos = change.target.end;
    }

    if include_equals && source_pos < original.len() {
        patch.push_delta(TextDelta::Equal {
            source: TextChunk::from_chars(source_pos, original[source_pos..].to_vec()),
            target: TextChunk::from_chars(target_pos, revised[target_pos..].to_vec()),
        });
    }

    patch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff_text;
    use textkit_buffer::CharBuffer;

    #[test]
    fn patch_applies_to_a_char_buffer() {
        let patch = diff_text("hello world", "hello there, world");
        let mut buf = CharBuffer::from_str("hello world");
        patch.apply_to(&mut buf).unwrap();
        assert_eq!(buf, "hello there, world");
        patch.restore(&mut buf).unwrap();
        assert_eq!(buf, "hello world");
    }

    #[test]
    fn apply_to_string_round_trip() {
        let patch = diff_text("abc def ghi", "abc xyz ghi");
        assert_eq!(patch.apply_to_string("abc def ghi").unwrap(), "abc xyz ghi");
    }

    #[test]
    fn verify_failure_leaves_text_untouched() {
        let patch = diff_text("abcd", "aXcd");
        let mut buf = CharBuffer::from_str("aQcd");
        let err = patch.apply_to(&mut buf).unwrap_err();
        assert!(matches!(err, PatchError::ContentMismatch { .. }));
        assert_eq!(buf, "aQcd");
    }

    #[test]
    fn chunk_verify_checks_bounds_before_content() {
        let chunk = TextChunk::new(3, "xy");
        let buf = CharBuffer::from_str("abcd");
        assert_eq!(
            chunk.verify(&buf),
            Err(PatchError::BadPosition { position: 3, target_len: 4 })
        );
    }

    #[test]
    fn insertion_at_end_of_text() {
        let patch = diff_text("hello", "hello world");
        assert_eq!(patch.apply_to_string("hello").unwrap(), "hello world");
    }

    #[test]
    fn deletion_to_empty() {
        let patch = diff_text("abc", "");
        assert_eq!(patch.apply_to_string("abc").unwrap(), "");
        let mut buf = CharBuffer::from_str("");
        patch.restore(&mut buf).unwrap();
        assert_eq!(buf, "abc");
    }
}
