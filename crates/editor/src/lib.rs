// Chunk: docs/chunks/text_editor - Crate root

//! A text editing engine built on snapshots, diffs, and markers.
//!
//! [`TextEditor`] owns a character buffer and makes every change to it
//! observable: edits happen inside a scoped [`EditSession`], and each
//! commit publishes a [`TextMutation`] carrying the reversible patch plus
//! snapshots of both sides. Markers registered on the editor follow the
//! text as it changes.
//!
//! ```
//! use textkit_editor::TextEditor;
//! use textkit_buffer::MutableText;
//!
//! let mut editor: TextEditor = TextEditor::from_str("hello");
//! let events = editor.subscribe();
//!
//! let mut session = editor.begin_edit();
//! session.insert(5, " world").unwrap();
//! session.commit();
//!
//! let mutation = events.try_recv().unwrap();
//! assert_eq!(mutation.patch.apply_to_string("hello").unwrap(), "hello world");
//! ```

mod editor;
mod error;
mod events;
mod marker;
mod session;
mod snapshot;

pub use editor::TextEditor;
pub use error::EditError;
pub use events::TextMutation;
pub use marker::Marker;
pub use session::EditSession;
pub use snapshot::Snapshot;
