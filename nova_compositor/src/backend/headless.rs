//! Input source for running without a display: replays queued events.

use std::collections::VecDeque;

use novade_compositor_core::{InputEvent, InputSource};

/// Replays a script of input events, one batch per poll.
///
/// Each batch is handed out by one [`InputSource::poll_input`] call. Once the
/// script is exhausted every poll returns nothing.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    batches: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a batch of events delivered together on a later poll.
    pub fn push_batch(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.batches.push_back(events.into_iter().collect());
    }

    /// Queues a single event as its own batch.
    pub fn push(&mut self, event: InputEvent) {
        self.push_batch([event]);
    }

    pub fn pending_batches(&self) -> usize {
        self.batches.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_input(&mut self) -> Vec<InputEvent> {
        self.batches.pop_front().unwrap_or_default()
    }
}
