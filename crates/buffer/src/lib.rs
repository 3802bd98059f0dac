// Chunk: docs/chunks/char_buffer - Growable character buffer with synchronized views

//! textkit-buffer: character storage for the textkit editing engine.
//!
//! This crate provides the [`CharBuffer`] type, an array-backed growable
//! character buffer with amortized-O(1) append and O(n) arbitrary
//! insert/delete, plus the [`Text`]/[`MutableText`] capability traits that
//! the rest of the engine is written against.
//!
//! # Overview
//!
//! The main type is [`CharBuffer`], which provides:
//! - Bounds-checked character reads and writes
//! - Range replacement that moves only the minimal prefix/suffix
//! - Capacity growth by a configurable factor (never shrinks)
//! - Synchronized sub-views via [`MutableText::offset`] and
//!   [`MutableText::limit_offset`]
//!
//! # Example
//!
//! ```
//! use textkit_buffer::{CharBuffer, MutableText, Text};
//!
//! let mut buf = CharBuffer::from_str("hello");
//! buf.insert(5, " world").unwrap();
//! assert_eq!(buf.len(), 11);
//! assert_eq!(buf.to_string(), "hello world");
//!
//! // A window view translates indices into the backing buffer.
//! let mut view = buf.limit_offset(6, 11).unwrap();
//! view.set_char(0, 'W').unwrap();
//! assert_eq!(buf.to_string(), "hello World");
//! ```

mod char_buffer;
mod error;
mod text;
mod view;

pub use char_buffer::CharBuffer;
pub use error::{check_index, check_range, BoundsError};
pub use text::{MutableText, Text};
pub use view::{OffsetView, WindowView};
