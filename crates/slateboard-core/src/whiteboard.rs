//! The whiteboard facade: input interpretation, history, and events.

use kurbo::{Point, Vec2};

use crate::board::Board;
use crate::camera::Camera;
use crate::elements::{Element, ElementId, Image};
use crate::events::{EventQueue, WhiteboardEvent};
use crate::history::History;
use crate::options::WhiteboardOptions;
use crate::selection::SelectionState;
use crate::snap::snap_to_grid;
use crate::storage::{BoxFuture, Storage, StorageResult};
use crate::tools::{ToolContext, ToolKind, ToolState, handler_for};

/// Decoded pixel data handed over by an [`ImageSource`].
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Raw encoded bytes (PNG, JPEG or WebP).
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Asynchronous provider of image data, e.g. a file picker or a
/// network fetch.
///
/// Resolving to `None` means the user cancelled; the board is left
/// untouched in that case.
pub trait ImageSource {
    fn acquire(&self) -> BoxFuture<'_, Option<DecodedImage>>;
}

/// An interactive drawing surface.
///
/// Raw pointer input goes in through [`pointer_down`], [`pointer_move`]
/// and [`pointer_up`]; the active tool interprets it, mutates the board
/// and pushes notifications onto an event queue the host drains with
/// [`poll_event`].
///
/// [`pointer_down`]: Whiteboard::pointer_down
/// [`pointer_move`]: Whiteboard::pointer_move
/// [`pointer_up`]: Whiteboard::pointer_up
/// [`poll_event`]: Whiteboard::poll_event
pub struct Whiteboard {
    board: Board,
    camera: Camera,
    history: History,
    selection: SelectionState,
    events: EventQueue,
    options: WhiteboardOptions,
    tool: ToolKind,
    state: ToolState,
    transient: Option<Element>,
    pending_snapshot: Option<Vec<Element>>,
}

impl Default for Whiteboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Whiteboard {
    pub fn new() -> Self {
        Self::with_options(WhiteboardOptions::default())
    }

    pub fn with_options(options: WhiteboardOptions) -> Self {
        Self {
            board: Board::new(),
            camera: Camera::new(),
            history: History::new(),
            selection: SelectionState::new(),
            events: EventQueue::new(),
            options,
            tool: ToolKind::default(),
            state: ToolState::Idle,
            transient: None,
            pending_snapshot: None,
        }
    }

    // --- input ---

    /// Pointer pressed at a raw screen position.
    pub fn pointer_down(&mut self, raw: Point) {
        let Some(handler) = handler_for(self.tool) else {
            return;
        };
        let canvas = self.to_canvas(raw);

        // A mutating interaction is beginning: whatever was redoable is
        // no longer reachable.
        if self.tool.mutates_document() {
            self.history.clear_redo();
        }

        self.state = ToolState::Active {
            origin: canvas,
            last: canvas,
            current: canvas,
            last_raw: raw,
        };

        let mut ctx = self.tool_context(canvas, canvas, Vec2::ZERO);
        handler.start(&mut ctx, canvas);
    }

    /// Pointer moved to a raw screen position while pressed.
    ///
    /// Ignored when no interaction is in progress, so stray move events
    /// before a press are harmless.
    pub fn pointer_move(&mut self, raw: Point) {
        let ToolState::Active {
            origin,
            current,
            last_raw,
            ..
        } = self.state
        else {
            return;
        };
        let Some(handler) = handler_for(self.tool) else {
            return;
        };

        let canvas = self.to_canvas(raw);
        let raw_delta = Vec2::new(raw.x - last_raw.x, raw.y - last_raw.y);

        self.state = ToolState::Active {
            origin,
            last: current,
            current: canvas,
            last_raw: raw,
        };

        let mut ctx = self.tool_context(origin, current, raw_delta);
        handler.drag(&mut ctx, canvas);
    }

    /// Pointer released at a raw screen position.
    pub fn pointer_up(&mut self, raw: Point) {
        let ToolState::Active {
            origin, current, ..
        } = self.state
        else {
            return;
        };
        let Some(handler) = handler_for(self.tool) else {
            return;
        };

        let canvas = self.to_canvas(raw);
        let mut ctx = self.tool_context(origin, current, Vec2::ZERO);
        handler.end(&mut ctx, canvas);

        self.state = ToolState::Idle;
    }

    /// Convert a raw screen position to canvas coordinates, applying
    /// grid snapping when enabled.
    pub fn to_canvas(&self, raw: Point) -> Point {
        let canvas = self.camera.screen_to_canvas(raw);
        if self.options.snap_to_grid {
            snap_to_grid(canvas, self.options.grid_size)
        } else {
            canvas
        }
    }

    fn tool_context(&mut self, origin: Point, last: Point, raw_delta: Vec2) -> ToolContext<'_> {
        ToolContext {
            board: &mut self.board,
            history: &mut self.history,
            selection: &mut self.selection,
            camera: &mut self.camera,
            transient: &mut self.transient,
            pending_snapshot: &mut self.pending_snapshot,
            events: &mut self.events,
            options: &self.options,
            origin,
            last,
            raw_delta,
        }
    }

    // --- tools ---

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Switch the active tool, cancelling any interaction in progress.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if tool == self.tool {
            return;
        }
        self.cancel_interaction();
        self.tool = tool;
    }

    /// Abort the current interaction.
    ///
    /// The transient element is discarded; mutations that already hit
    /// the board (eraser sweeps, selection moves) keep their pending
    /// undo snapshot.
    pub fn cancel_interaction(&mut self) {
        self.state = ToolState::Idle;
        if let Some(element) = self.transient.take() {
            if element.is_text() {
                self.events.emit(WhiteboardEvent::TextInputDismissed);
            }
        }
        if let Some(snapshot) = self.pending_snapshot.take() {
            self.history.push(snapshot);
        }
    }

    // --- history ---

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Step the board back one state. Returns false when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        let current = self.board.snapshot();
        let Some(snapshot) = self.history.undo(current) else {
            return false;
        };
        self.board.restore(snapshot);
        self.drop_stale_selection();
        self.events.emit(WhiteboardEvent::UndoPerformed);
        true
    }

    /// Step the board forward one previously undone state.
    pub fn redo(&mut self) -> bool {
        let current = self.board.snapshot();
        let Some(snapshot) = self.history.redo(current) else {
            return false;
        };
        self.board.restore(snapshot);
        self.drop_stale_selection();
        self.events.emit(WhiteboardEvent::RedoPerformed);
        true
    }

    /// Clear the selection if the selected element no longer exists.
    fn drop_stale_selection(&mut self) {
        if let Some(id) = self.selection.selected() {
            if !self.board.contains(id) && self.selection.clear() {
                self.events.emit(WhiteboardEvent::SelectionChanged(None));
            }
        }
    }

    // --- document operations ---

    /// Remove every element. Undoable as a single step.
    pub fn clear(&mut self) {
        self.history.push(self.board.snapshot());
        self.board.clear();
        if self.selection.clear() {
            self.events.emit(WhiteboardEvent::SelectionChanged(None));
        }
        self.events.emit(WhiteboardEvent::Cleared);
    }

    /// Add an element programmatically. Undoable as a single step.
    pub fn add_element(&mut self, element: Element) -> ElementId {
        let id = element.id();
        self.history.push(self.board.snapshot());
        self.board.push(element.clone());
        self.events.emit(WhiteboardEvent::ElementAdded(element));
        id
    }

    /// Remove an element by id. Returns false if it does not exist.
    pub fn remove_element(&mut self, id: ElementId) -> bool {
        if !self.board.contains(id) {
            return false;
        }
        self.history.push(self.board.snapshot());
        if let Some(removed) = self.board.remove(id) {
            if self.selection.is_selected(id) && self.selection.clear() {
                self.events.emit(WhiteboardEvent::SelectionChanged(None));
            }
            self.events.emit(WhiteboardEvent::ElementDeleted(removed));
        }
        true
    }

    // --- text editing ---

    /// Replace the content of the in-progress text element.
    pub fn update_text_content(&mut self, content: &str) {
        if let Some(Element::Text(text)) = self.transient.as_mut() {
            text.set_content(content);
        }
    }

    /// Finalize the in-progress text element.
    ///
    /// Non-empty text is committed as one undo step; empty text is
    /// discarded. Either way the host's editor is dismissed.
    pub fn finish_text_input(&mut self) {
        if self.transient.is_none() {
            return;
        }
        let mut ctx = self.tool_context(Point::ZERO, Point::ZERO, Vec2::ZERO);
        ctx.finalize_text();
    }

    /// Whether a text edit is currently open.
    pub fn is_editing_text(&self) -> bool {
        matches!(self.transient, Some(Element::Text(_)))
    }

    // --- images ---

    /// Acquire an image from the source and place it on the board.
    ///
    /// Resolves after the source does; a source returning `None`
    /// (cancellation) leaves the board untouched.
    pub async fn place_image(&mut self, source: &dyn ImageSource, position: Point) {
        let Some(decoded) = source.acquire().await else {
            return;
        };
        self.insert_image(position, decoded);
    }

    /// Insert decoded image data at the given canvas position.
    ///
    /// Positions are clamped so the image never starts off-canvas on
    /// the negative side.
    pub fn insert_image(&mut self, position: Point, decoded: DecodedImage) -> ElementId {
        let clamped = Point::new(position.x.max(0.0), position.y.max(0.0));
        let image = Image::new(clamped, &decoded.data, decoded.width, decoded.height);
        self.add_element(Element::Image(image))
    }

    // --- persistence ---

    /// Persist the current board under the given session id.
    pub async fn save_session(&mut self, storage: &dyn Storage, id: &str) -> StorageResult<()> {
        storage.save(id, &self.board).await?;
        self.events
            .emit(WhiteboardEvent::SessionSaved { id: id.to_string() });
        Ok(())
    }

    /// Replace the board with a previously saved session.
    ///
    /// History and selection are reset; the loaded state is the new
    /// baseline.
    pub async fn load_session(&mut self, storage: &dyn Storage, id: &str) -> StorageResult<()> {
        let board = storage.load(id).await?;
        log::info!("loaded session '{}' with {} elements", id, board.len());
        self.board = board;
        self.history.clear();
        self.state = ToolState::Idle;
        self.transient = None;
        self.pending_snapshot = None;
        if self.selection.clear() {
            self.events.emit(WhiteboardEvent::SelectionChanged(None));
        }
        Ok(())
    }

    // --- events & accessors ---

    /// Pop the oldest pending event.
    pub fn poll_event(&mut self) -> Option<WhiteboardEvent> {
        self.events.poll()
    }

    /// Take all pending events at once.
    pub fn drain_events(&mut self) -> Vec<WhiteboardEvent> {
        self.events.drain()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn selection(&self) -> Option<ElementId> {
        self.selection.selected()
    }

    pub fn options(&self) -> &WhiteboardOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut WhiteboardOptions {
        &mut self.options
    }
}
