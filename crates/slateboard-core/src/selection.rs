//! Single-element selection state and pointer target resolution.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::elements::ElementId;

/// Margin in canvas units around a selected element's bounds that still
/// counts as the selection overlay.
pub const OVERLAY_MARGIN: f64 = 8.0;

/// Tracks which element (if any) is currently selected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionState {
    selected: Option<ElementId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected element id, if any.
    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected == Some(id)
    }

    /// Select the given element. Returns true if the selection changed.
    pub fn select(&mut self, id: ElementId) -> bool {
        if self.selected == Some(id) {
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// Clear the selection. Returns true if anything was deselected.
    pub fn clear(&mut self) -> bool {
        if self.selected.is_none() {
            return false;
        }
        self.selected = None;
        true
    }
}

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// An element body was hit.
    Element(ElementId),
    /// The margin around the selected element, outside any element body.
    SelectionOverlay,
    /// Blank canvas.
    Empty,
}

/// Resolve what a canvas-space pointer press lands on.
///
/// The overlay around the selected element takes precedence over
/// elements underneath it, so clicking the handles area of a selection
/// is never misread as a hit on an occluded element.
pub fn resolve_target(
    board: &Board,
    selection: &SelectionState,
    point: Point,
    tolerance: f64,
) -> PointerTarget {
    if let Some(id) = board.element_at(point, tolerance) {
        return PointerTarget::Element(id);
    }

    if let Some(selected_id) = selection.selected() {
        if let Some(element) = board.get(selected_id) {
            let overlay = element.bounds().inflate(OVERLAY_MARGIN, OVERLAY_MARGIN);
            if overlay.contains(point) {
                return PointerTarget::SelectionOverlay;
            }
        }
    }

    PointerTarget::Empty
}
