//! Outbound event queue.

use super::event::CommentaryEvent;

/// FIFO of commentary events waiting to be picked up by the caller.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    queue: Vec<CommentaryEvent>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: CommentaryEvent) {
        self.queue.push(event);
    }

    /// Take every queued event, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = CommentaryEvent> + '_ {
        self.queue.drain(..)
    }

    /// Events queued so far, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[CommentaryEvent] {
        &self.queue
    }

    /// Most recently queued event.
    #[must_use]
    pub fn latest(&self) -> Option<&CommentaryEvent> {
        self.queue.last()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::CommentaryTrigger;

    #[test]
    fn test_drain_is_fifo_and_empties() {
        let mut queue = EventQueue::new();
        queue.push(CommentaryEvent::new(CommentaryTrigger::Welcome, "a"));
        queue.push(CommentaryEvent::new(CommentaryTrigger::AiWin, "b"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.latest().map(|e| e.trigger), Some(CommentaryTrigger::AiWin));

        let drained: Vec<_> = queue.drain().map(|e| e.trigger).collect();
        assert_eq!(drained, vec![CommentaryTrigger::Welcome, CommentaryTrigger::AiWin]);
        assert!(queue.is_empty());
    }
}
