//! Tool definitions and pointer dispatch.
//!
//! Each tool is a stateless handler implementing [`ToolHandler`]; the
//! active interaction's state lives in [`ToolState`] on the whiteboard.
//! [`handler_for`] is the single dispatch point mapping a [`ToolKind`]
//! to its handler.

mod brush;
mod eraser;
mod pan;
mod select;
mod shape;
mod text;

pub use brush::BrushTool;
pub use eraser::EraserTool;
pub use pan::PanTool;
pub use select::SelectTool;
pub use shape::{ShapeKind, ShapeTool};
pub use text::TextTool;

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::camera::Camera;
use crate::elements::{Element, Text};
use crate::events::{EventQueue, WhiteboardEvent};
use crate::history::History;
use crate::options::WhiteboardOptions;
use crate::selection::SelectionState;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Select,
    Pan,
    Brush,
    Line,
    Rect,
    Ellipse,
    Text,
    Eraser,
    Image,
}

impl ToolKind {
    /// Whether interactions with this tool can change the document.
    ///
    /// Pressing the pointer with a mutating tool invalidates the redo
    /// stack even if nothing ends up changing.
    pub fn mutates_document(&self) -> bool {
        !matches!(self, ToolKind::Pan)
    }
}

/// State of the current pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ToolState {
    /// No pointer is down.
    #[default]
    Idle,
    /// A press-drag interaction is in progress.
    Active {
        /// Canvas position of the initial press.
        origin: Point,
        /// Canvas position of the previous sample.
        last: Point,
        /// Canvas position of the latest sample.
        current: Point,
        /// Raw screen position of the latest sample, for tools that
        /// operate in screen space.
        last_raw: Point,
    },
}

impl ToolState {
    pub fn is_active(&self) -> bool {
        matches!(self, ToolState::Active { .. })
    }
}

/// Mutable view of the whiteboard handed to tool handlers.
///
/// Bundling the pieces keeps handler signatures stable and lets each
/// tool borrow only what it needs.
pub struct ToolContext<'a> {
    pub board: &'a mut Board,
    pub history: &'a mut History,
    pub selection: &'a mut SelectionState,
    pub camera: &'a mut Camera,
    /// Element under construction, not yet committed to the board.
    pub transient: &'a mut Option<Element>,
    /// Snapshot taken lazily at the first real mutation of a drag,
    /// pushed to history when the interaction ends.
    pub pending_snapshot: &'a mut Option<Vec<Element>>,
    pub events: &'a mut EventQueue,
    pub options: &'a WhiteboardOptions,
    /// Canvas position where the interaction started.
    pub origin: Point,
    /// Canvas position of the previous pointer sample.
    pub last: Point,
    /// Screen-space delta since the previous sample.
    pub raw_delta: Vec2,
}

impl ToolContext<'_> {
    /// Commit the transient element to the board as a single undo step.
    pub fn commit_transient(&mut self) {
        if let Some(element) = self.transient.take() {
            self.history.push(self.board.snapshot());
            self.board.push(element.clone());
            self.events.emit(WhiteboardEvent::ElementAdded(element));
        }
    }

    /// Finalize the in-progress text element.
    ///
    /// Empty text is discarded without touching the board or history.
    pub fn finalize_text(&mut self) {
        let Some(element) = self.transient.take() else {
            return;
        };
        match element {
            Element::Text(text) if !text.content().trim().is_empty() => {
                self.history.push(self.board.snapshot());
                let element = Element::Text(text);
                self.board.push(element.clone());
                self.events.emit(WhiteboardEvent::ElementAdded(element));
            }
            _ => {}
        }
        self.events.emit(WhiteboardEvent::TextInputDismissed);
    }

    /// Current transient as a mutable text element, if that is what it is.
    pub(crate) fn transient_text_mut(&mut self) -> Option<&mut Text> {
        match self.transient.as_mut() {
            Some(Element::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Remove an element from the board, recording a lazy snapshot and
    /// emitting the deletion event. Clears the selection if the removed
    /// element was selected.
    pub(crate) fn delete_element(&mut self, id: crate::elements::ElementId) {
        if self.pending_snapshot.is_none() {
            *self.pending_snapshot = Some(self.board.snapshot());
        }
        if let Some(removed) = self.board.remove(id) {
            if self.selection.is_selected(removed.id()) {
                self.selection.clear();
                self.events.emit(WhiteboardEvent::SelectionChanged(None));
            }
            self.events.emit(WhiteboardEvent::ElementDeleted(removed));
        }
    }

    /// Push the lazily taken snapshot, if any mutation happened.
    pub(crate) fn flush_pending_snapshot(&mut self) {
        if let Some(snapshot) = self.pending_snapshot.take() {
            self.history.push(snapshot);
        }
    }
}

/// Per-interaction hooks a tool implements.
///
/// All methods default to no-ops so tools only spell out the phases
/// they care about.
pub trait ToolHandler {
    /// Pointer pressed at `point` (canvas coordinates).
    fn start(&self, _ctx: &mut ToolContext<'_>, _point: Point) {}

    /// Pointer moved to `point` while pressed.
    fn drag(&self, _ctx: &mut ToolContext<'_>, _point: Point) {}

    /// Pointer released at `point`.
    fn end(&self, _ctx: &mut ToolContext<'_>, _point: Point) {}
}

static SELECT_TOOL: SelectTool = SelectTool;
static PAN_TOOL: PanTool = PanTool;
static BRUSH_TOOL: BrushTool = BrushTool;
static LINE_TOOL: ShapeTool = ShapeTool::new(ShapeKind::Line);
static RECT_TOOL: ShapeTool = ShapeTool::new(ShapeKind::Rect);
static ELLIPSE_TOOL: ShapeTool = ShapeTool::new(ShapeKind::Ellipse);
static TEXT_TOOL: TextTool = TextTool;
static ERASER_TOOL: EraserTool = EraserTool;

/// Look up the handler for a tool.
///
/// Returns `None` for tools that are not pointer-driven (image
/// placement goes through the async insertion path instead).
pub fn handler_for(kind: ToolKind) -> Option<&'static dyn ToolHandler> {
    match kind {
        ToolKind::Select => Some(&SELECT_TOOL),
        ToolKind::Pan => Some(&PAN_TOOL),
        ToolKind::Brush => Some(&BRUSH_TOOL),
        ToolKind::Line => Some(&LINE_TOOL),
        ToolKind::Rect => Some(&RECT_TOOL),
        ToolKind::Ellipse => Some(&ELLIPSE_TOOL),
        ToolKind::Text => Some(&TEXT_TOOL),
        ToolKind::Eraser => Some(&ERASER_TOOL),
        ToolKind::Image => None,
    }
}
