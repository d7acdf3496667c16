//! Outbound events emitted by the whiteboard for the host to consume.

use std::collections::VecDeque;

use kurbo::Point;

use crate::elements::{Element, ElementId};

/// Notifications produced by whiteboard operations.
///
/// Events accumulate in an internal queue; the host drains them with
/// [`crate::Whiteboard::poll_event`] after each call into the board.
#[derive(Debug, Clone, PartialEq)]
pub enum WhiteboardEvent {
    /// A new element was committed to the board.
    ElementAdded(Element),
    /// An element was removed from the board.
    ElementDeleted(Element),
    /// The selected element changed (or was cleared).
    SelectionChanged(Option<ElementId>),
    /// An undo step was applied.
    UndoPerformed,
    /// A redo step was applied.
    RedoPerformed,
    /// The board was cleared.
    Cleared,
    /// A session was persisted to storage.
    SessionSaved { id: String },
    /// The text tool wants the host to open a text editor at the given
    /// canvas position.
    TextInputRequested { position: Point },
    /// The in-progress text edit was finalized or abandoned.
    TextInputDismissed,
}

/// FIFO queue of pending events.
#[derive(Debug, Default)]
pub struct EventQueue {
    queue: VecDeque<WhiteboardEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: WhiteboardEvent) {
        self.queue.push_back(event);
    }

    /// Pop the oldest pending event.
    pub fn poll(&mut self) -> Option<WhiteboardEvent> {
        self.queue.pop_front()
    }

    /// Take all pending events at once.
    pub fn drain(&mut self) -> Vec<WhiteboardEvent> {
        self.queue.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = EventQueue::new();
        queue.emit(WhiteboardEvent::UndoPerformed);
        queue.emit(WhiteboardEvent::RedoPerformed);

        assert_eq!(queue.poll(), Some(WhiteboardEvent::UndoPerformed));
        assert_eq!(queue.poll(), Some(WhiteboardEvent::RedoPerformed));
        assert_eq!(queue.poll(), None);
    }

    #[test]
    fn test_drain_empties_queue() {
        let mut queue = EventQueue::new();
        queue.emit(WhiteboardEvent::Cleared);
        queue.emit(WhiteboardEvent::SelectionChanged(None));

        let events = queue.drain();
        assert_eq!(events.len(), 2);
        assert!(queue.is_empty());
    }
}
