//! Slateboard Core Library
//!
//! Platform-agnostic core for an interactive vector whiteboard: the
//! element model, tool interpretation of pointer input, undo/redo
//! history, selection, pan/zoom, and session persistence.

pub mod board;
pub mod camera;
pub mod elements;
pub mod events;
pub mod history;
pub mod options;
pub mod selection;
pub mod snap;
pub mod storage;
pub mod tools;
pub mod whiteboard;

pub use board::{Board, HIT_TOLERANCE};
pub use camera::Camera;
pub use elements::{
    BrushStroke, Drawable, Element, ElementId, ElementStyle, Ellipse, Image, ImageFormat, Line,
    LineCap, LineJoin, Polygon, Rect, SerializableColor, Text,
};
pub use events::WhiteboardEvent;
pub use history::{History, MAX_HISTORY};
pub use options::WhiteboardOptions;
pub use selection::{PointerTarget, SelectionState};
pub use snap::{DEFAULT_GRID_SIZE, snap_to_grid};
pub use storage::{Storage, StorageError, StorageResult};
pub use tools::{ToolKind, ToolState};
pub use whiteboard::{DecodedImage, ImageSource, Whiteboard};
