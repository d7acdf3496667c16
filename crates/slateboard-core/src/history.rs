//! Snapshot-based undo/redo history.

use crate::elements::Element;

/// A full copy of the board's element list at one point in time.
pub type Snapshot = Vec<Element>;

/// Maximum number of undo steps retained. Pushing beyond this drops the
/// oldest snapshot.
pub const MAX_HISTORY: usize = 50;

/// Undo/redo stacks of board snapshots.
///
/// A snapshot is pushed *before* a mutation is applied, so undoing
/// restores the pre-mutation state. Any fresh push invalidates the redo
/// stack.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pre-mutation snapshot. Clears the redo stack.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
        if self.undo_stack.len() > MAX_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Discard all redoable states without recording anything.
    pub fn clear_redo(&mut self) {
        self.redo_stack.clear();
    }

    /// Step back one state.
    ///
    /// `current` is the live board state, which moves onto the redo
    /// stack. Returns the snapshot to restore, or `None` if there is
    /// nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let snapshot = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(snapshot)
    }

    /// Step forward one previously undone state.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drop everything, e.g. after loading a session.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{BrushStroke, Element};

    fn snapshot_with(n: usize) -> Snapshot {
        (0..n).map(|_| Element::Brush(BrushStroke::new())).collect()
    }

    #[test]
    fn test_empty_history() {
        let mut history = History::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo(vec![]).is_none());
        assert!(history.redo(vec![]).is_none());
    }

    #[test]
    fn test_undo_returns_pushed_snapshot() {
        let mut history = History::new();
        history.push(snapshot_with(1));

        let restored = history.undo(snapshot_with(2)).unwrap();
        assert_eq!(restored.len(), 1);
        assert!(history.can_redo());
    }

    #[test]
    fn test_redo_after_undo() {
        let mut history = History::new();
        history.push(snapshot_with(0));

        let restored = history.undo(snapshot_with(1)).unwrap();
        assert_eq!(restored.len(), 0);

        let redone = history.redo(restored).unwrap();
        assert_eq!(redone.len(), 1);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_push_clears_redo() {
        let mut history = History::new();
        history.push(snapshot_with(0));
        history.undo(snapshot_with(1));
        assert!(history.can_redo());

        history.push(snapshot_with(2));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut history = History::new();
        for i in 0..(MAX_HISTORY + 10) {
            history.push(snapshot_with(i));
        }
        assert_eq!(history.undo_len(), MAX_HISTORY);

        // Walk all the way back: the deepest reachable state is the one
        // pushed after the dropped ones.
        let mut last = snapshot_with(0);
        while history.can_undo() {
            last = history.undo(last).unwrap();
        }
        assert_eq!(last.len(), 10);
    }

    #[test]
    fn test_undo_redo_conserves_states() {
        let mut history = History::new();
        history.push(snapshot_with(0));
        history.push(snapshot_with(1));
        let total = history.undo_len() + history.redo_len();

        history.undo(snapshot_with(2));
        assert_eq!(history.undo_len() + history.redo_len(), total);

        history.redo(snapshot_with(1));
        assert_eq!(history.undo_len() + history.redo_len(), total);
    }
}
