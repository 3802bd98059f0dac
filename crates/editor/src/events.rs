// Chunk: docs/chunks/text_editor - Mutation event fan-out

//! Fan-out of committed mutations to subscribers.
//!
//! Each subscriber gets its own bounded channel. Publishing never blocks
//! the committing thread: a full subscriber queue drops that subscriber's
//! copy of the event, and a disconnected receiver prunes the subscriber on
//! the next publish.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use crate::snapshot::Snapshot;
use textkit_diff::TextPatch;

/// Queue depth per subscriber. Subscribers that fall further behind than
/// this start missing events.
const QUEUE_DEPTH: usize = 64;

/// A committed mutation: the patch that was applied and the content on
/// both sides of it.
///
/// `patch.apply_to` replays `before` into `after`; `patch.restore` undoes
/// it.
#[derive(Debug, Clone)]
pub struct TextMutation {
    pub patch: TextPatch,
    pub before: Snapshot,
    pub after: Snapshot,
}

#[derive(Debug, Default)]
pub(crate) struct MutationBus {
    subscribers: Vec<Sender<TextMutation>>,
}

impl MutationBus {
    pub(crate) fn new() -> Self {
        Self { subscribers: Vec::new() }
    }

    pub(crate) fn subscribe(&mut self) -> Receiver<TextMutation> {
        let (sender, receiver) = bounded(QUEUE_DEPTH);
        self.subscribers.push(sender);
        receiver
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub(crate) fn publish(&mut self, event: &TextMutation) {
        self.subscribers.retain(|sender| match sender.try_send(event.clone()) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                tracing::trace!("subscriber queue full, dropping mutation event");
                true
            }
            Err(TrySendError::Disconnected(_)) => false,
        });
    }
}
