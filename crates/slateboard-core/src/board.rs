//! The board: an ordered collection of drawable elements.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::elements::{Element, ElementId};

/// Default hit-test tolerance in canvas units.
pub const HIT_TOLERANCE: f64 = 5.0;

/// An ordered collection of elements.
///
/// Elements are kept in insertion order, which doubles as paint order:
/// later elements render on top of earlier ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    elements: Vec<Element>,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element on top of the paint order.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Remove an element by id, returning it if present.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id() == id)?;
        Some(self.elements.remove(index))
    }

    /// Get a reference to an element by id.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Get a mutable reference to an element by id.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    /// Whether an element with the given id exists.
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.iter().any(|e| e.id() == id)
    }

    /// Iterate elements in paint order (bottom to top).
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Clone the current element list for the history stack.
    pub fn snapshot(&self) -> Vec<Element> {
        self.elements.clone()
    }

    /// Replace the element list with a previously taken snapshot.
    pub fn restore(&mut self, snapshot: Vec<Element>) {
        self.elements = snapshot;
    }

    /// Find the topmost element containing the given canvas point.
    ///
    /// Iterates in reverse paint order so elements drawn later win.
    pub fn element_at(&self, point: Point, tolerance: f64) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .find(|e| e.hit_test(point, tolerance))
            .map(|e| e.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{BrushStroke, Line, Rect};

    fn sample_line(start: Point, end: Point) -> Element {
        Element::Line(Line::new(start, end))
    }

    #[test]
    fn test_push_and_get() {
        let mut board = Board::new();
        let element = sample_line(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let id = element.id();
        board.push(element);

        assert_eq!(board.len(), 1);
        assert!(board.contains(id));
        assert!(board.get(id).is_some());
    }

    #[test]
    fn test_remove_returns_element() {
        let mut board = Board::new();
        let element = sample_line(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let id = element.id();
        board.push(element);

        let removed = board.remove(id);
        assert!(removed.is_some());
        assert_eq!(removed.unwrap().id(), id);
        assert!(board.is_empty());
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut board = Board::new();
        assert!(board.remove(uuid::Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_element_at_topmost_wins() {
        let mut board = Board::new();
        let bottom = Element::Rect(Rect::new(Point::new(0.0, 0.0), 100.0, 100.0));
        let top = Element::Rect(Rect::new(Point::new(0.0, 0.0), 100.0, 100.0));
        let top_id = top.id();
        board.push(bottom);
        board.push(top);

        let hit = board.element_at(Point::new(50.0, 0.0), HIT_TOLERANCE);
        assert_eq!(hit, Some(top_id));
    }

    #[test]
    fn test_element_at_miss() {
        let mut board = Board::new();
        board.push(sample_line(Point::new(0.0, 0.0), Point::new(10.0, 0.0)));
        assert!(board.element_at(Point::new(500.0, 500.0), HIT_TOLERANCE).is_none());
    }

    #[test]
    fn test_snapshot_restore() {
        let mut board = Board::new();
        board.push(Element::Brush(BrushStroke::new()));
        let snapshot = board.snapshot();

        board.clear();
        assert!(board.is_empty());

        board.restore(snapshot);
        assert_eq!(board.len(), 1);
    }
}
