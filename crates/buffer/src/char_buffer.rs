// Chunk: docs/chunks/char_buffer - Array-backed growable character storage

//! Array-backed character buffer.
//!
//! Storage is a flat `Vec<char>` used as raw capacity: slots beyond the
//! logical length hold `'\0'` filler and are never observable through the
//! API. Mutations move only the minimal prefix/suffix around the edited
//! range; a full reallocation happens only when the new length exceeds
//! capacity.

use crate::error::{check_index, check_range, BoundsError};
use crate::text::{MutableText, Text};

const DEFAULT_CAPACITY: usize = 16;
const DEFAULT_GROW_FACTOR: f32 = 2.0;
const GROWTH_MARGIN: usize = 16;
const MAX_LEN: usize = usize::MAX / 2;

/// A growable character buffer.
///
/// Indices are character positions, ranges are half-open. Capacity grows by
/// `grow_factor` (plus a small margin) whenever the logical length would
/// exceed it, and never shrinks.
#[derive(Debug, Clone)]
pub struct CharBuffer {
    /// Backing storage. `data.len()` is the capacity; slots at and beyond
    /// `len` are '\0' filler.
    data: Vec<char>,
    /// Logical length. Invariant: `len <= data.len()`.
    len: usize,
    /// Capacity multiplier applied on growth.
    grow_factor: f32,
}

impl CharBuffer {
    /// Creates an empty buffer with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty buffer with at least `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_growth(DEFAULT_GROW_FACTOR, capacity)
    }

    /// Creates an empty buffer with an explicit growth factor and capacity.
    ///
    /// Growth factors below 1.0 are treated as 1.0; the margin added on each
    /// growth keeps the buffer usable even then.
    pub fn with_growth(grow_factor: f32, capacity: usize) -> Self {
        Self {
            data: vec!['\0'; capacity.min(MAX_LEN)],
            len: 0,
            grow_factor: if grow_factor < 1.0 { 1.0 } else { grow_factor },
        }
    }

    /// Creates a buffer initialized with the given text.
    pub fn from_str(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        let mut data = chars;
        data.resize(len + GROWTH_MARGIN, '\0');
        Self { data, len, grow_factor: DEFAULT_GROW_FACTOR }
    }

    /// The current capacity in characters.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// The buffer content as a contiguous char slice.
    pub fn as_chars(&self) -> &[char] {
        &self.data[..self.len]
    }

    /// Capacity to allocate when `new_len` no longer fits.
    fn grown_capacity(&self, new_len: usize) -> usize {
        let scaled = (new_len as f32 * self.grow_factor) as usize;
        (scaled + GROWTH_MARGIN).min(MAX_LEN)
    }

    /// Core splice: replaces `start..end` with `replacement`, moving the
    /// suffix exactly once and reallocating only when capacity is exceeded.
    ///
    /// Bounds must already be checked by the caller.
    fn splice(&mut self, start: usize, end: usize, replacement: &[char]) {
        let new_len = self.len - (end - start) + replacement.len();

        if new_len > self.data.len() {
            // Grow: copy prefix and suffix straight into the new storage so
            // the suffix moves only once.
            let mut data = vec!['\0'; self.grown_capacity(new_len)];
            data[..start].copy_from_slice(&self.data[..start]);
            data[start + replacement.len()..new_len].copy_from_slice(&self.data[end..self.len]);
            self.data = data;
        } else if end != start + replacement.len() {
            // In place: shift the suffix to its final position.
            self.data.copy_within(end..self.len, start + replacement.len());
        }

        self.data[start..start + replacement.len()].copy_from_slice(replacement);
        self.len = new_len;
    }
}

impl Default for CharBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Text for CharBuffer {
    fn len(&self) -> usize {
        self.len
    }

    fn char_at(&self, index: usize) -> Result<char, BoundsError> {
        check_index(index, self.len)?;
        Ok(self.data[index])
    }

    fn slice(&self, start: usize, end: usize) -> Result<String, BoundsError> {
        check_range(start, end, self.len)?;
        Ok(self.data[start..end].iter().collect())
    }

    fn to_chars(&self) -> Vec<char> {
        self.as_chars().to_vec()
    }
}

impl MutableText for CharBuffer {
    fn set_char(&mut self, index: usize, ch: char) -> Result<(), BoundsError> {
        check_index(index, self.len)?;
        self.data[index] = ch;
        Ok(())
    }

    fn replace(&mut self, start: usize, end: usize, replacement: &str) -> Result<(), BoundsError> {
        check_range(start, end, self.len)?;
        let replacement: Vec<char> = replacement.chars().collect();
        self.splice(start, end, &replacement);
        Ok(())
    }
}

impl std::fmt::Display for CharBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in self.as_chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

impl PartialEq for CharBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_chars() == other.as_chars()
    }
}

impl Eq for CharBuffer {}

impl PartialEq<str> for CharBuffer {
    fn eq(&self, other: &str) -> bool {
        self.len == other.chars().count()
            && self.as_chars().iter().copied().eq(other.chars())
    }
}

impl PartialEq<&str> for CharBuffer {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_empty() {
        let buf = CharBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 16);
    }

    #[test]
    fn from_str_initializes_content() {
        let buf = CharBuffer::from_str("hello");
        assert_eq!(buf.len(), 5);
        assert_eq!(buf, "hello");
    }

    #[test]
    fn get_and_set() {
        let mut buf = CharBuffer::from_str("hello");
        assert_eq!(buf.char_at(0), Ok('h'));
        assert_eq!(buf.char_at(4), Ok('o'));
        buf.set_char(0, 'j').unwrap();
        assert_eq!(buf, "jello");
    }

    #[test]
    fn get_out_of_bounds() {
        let buf = CharBuffer::from_str("hi");
        assert_eq!(buf.char_at(2), Err(BoundsError::Index { index: 2, len: 2 }));
    }

    #[test]
    fn set_out_of_bounds() {
        let mut buf = CharBuffer::from_str("hi");
        assert_eq!(
            buf.set_char(2, 'x'),
            Err(BoundsError::Index { index: 2, len: 2 })
        );
    }

    #[test]
    fn append_grows_capacity() {
        let mut buf = CharBuffer::with_capacity(2);
        buf.append("abcdef").unwrap();
        assert_eq!(buf, "abcdef");
        assert!(buf.capacity() >= 6);
    }

    #[test]
    fn append_many_amortized() {
        let mut buf = CharBuffer::new();
        for i in 0..1000 {
            buf.push(char::from_u32('a' as u32 + (i % 26)).unwrap()).unwrap();
        }
        assert_eq!(buf.len(), 1000);
    }

    #[test]
    fn insert_in_middle() {
        let mut buf = CharBuffer::from_str("hello world");
        buf.insert(5, ",").unwrap();
        assert_eq!(buf, "hello, world");
    }

    #[test]
    fn remove_middle() {
        let mut buf = CharBuffer::from_str("hello, world");
        buf.remove(5, 6).unwrap();
        assert_eq!(buf, "hello world");
    }

    #[test]
    fn remove_everything() {
        let mut buf = CharBuffer::from_str("abc");
        buf.remove(0, 3).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf, "");
    }

    #[test]
    fn replace_same_length() {
        let mut buf = CharBuffer::from_str("abcdef");
        buf.replace(2, 4, "XY").unwrap();
        assert_eq!(buf, "abXYef");
    }

    #[test]
    fn replace_shrinks() {
        let mut buf = CharBuffer::from_str("abcdef");
        buf.replace(1, 5, "-").unwrap();
        assert_eq!(buf, "a-f");
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn replace_grows() {
        let mut buf = CharBuffer::from_str("ab");
        buf.replace(1, 1, "0123456789012345678901234567890").unwrap();
        assert_eq!(buf.len(), 33);
        assert_eq!(buf.char_at(0), Ok('a'));
        assert_eq!(buf.char_at(32), Ok('b'));
    }

    #[test]
    fn replace_computes_exact_new_length() {
        let mut buf = CharBuffer::from_str("hello world");
        buf.replace(0, 5, "goodbye").unwrap();
        assert_eq!(buf.len(), 11 - 5 + 7);
        assert_eq!(buf, "goodbye world");
    }

    #[test]
    fn replace_range_out_of_bounds() {
        let mut buf = CharBuffer::from_str("abc");
        assert_eq!(
            buf.replace(1, 4, "x"),
            Err(BoundsError::Range { start: 1, end: 4, len: 3 })
        );
        // Nothing was mutated on the error path.
        assert_eq!(buf, "abc");
    }

    #[test]
    fn slice_copies_range() {
        let buf = CharBuffer::from_str("hello world");
        assert_eq!(buf.slice(0, 5).unwrap(), "hello");
        assert_eq!(buf.slice(6, 11).unwrap(), "world");
        assert_eq!(buf.slice(3, 3).unwrap(), "");
    }

    #[test]
    fn multibyte_chars_count_as_one() {
        let mut buf = CharBuffer::from_str("aéb");
        assert_eq!(buf.len(), 3);
        buf.replace(1, 2, "\u{1F600}").unwrap();
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.char_at(1), Ok('\u{1F600}'));
    }

    #[test]
    fn capacity_never_shrinks() {
        let mut buf = CharBuffer::from_str("abcdefghij");
        let cap = buf.capacity();
        buf.remove(0, 10).unwrap();
        assert_eq!(buf.capacity(), cap);
    }

    // ==================== reference model ====================

    #[test]
    fn random_ops_match_vec_model() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0x7e57);
        let mut buf = CharBuffer::with_growth(1.5, 4);
        let mut model: Vec<char> = Vec::new();

        for _ in 0..2000 {
            match rng.gen_range(0..4) {
                0 => {
                    // insert a short string at a random position
                    let at = rng.gen_range(0..=model.len());
                    let n = rng.gen_range(0..4);
                    let text: String =
                        (0..n).map(|_| rng.gen_range(b'a'..=b'z') as char).collect();
                    buf.insert(at, &text).unwrap();
                    for (i, ch) in text.chars().enumerate() {
                        model.insert(at + i, ch);
                    }
                }
                1 if !model.is_empty() => {
                    let start = rng.gen_range(0..model.len());
                    let end = rng.gen_range(start..=model.len());
                    buf.remove(start, end).unwrap();
                    model.drain(start..end);
                }
                2 if !model.is_empty() => {
                    let start = rng.gen_range(0..model.len());
                    let end = rng.gen_range(start..=model.len());
                    let n = rng.gen_range(0..4);
                    let text: String =
                        (0..n).map(|_| rng.gen_range(b'a'..=b'z') as char).collect();
                    buf.replace(start, end, &text).unwrap();
                    model.splice(start..end, text.chars());
                }
                _ => {
                    let ch = rng.gen_range(b'a'..=b'z') as char;
                    buf.push(ch).unwrap();
                    model.push(ch);
                }
            }

            assert_eq!(buf.len(), model.len());
            assert_eq!(buf.as_chars(), model.as_slice());
        }
    }
}
