//! Pan tool.

use kurbo::Point;

use super::{ToolContext, ToolHandler};

/// Drags the camera instead of the document.
///
/// Panning works in screen space: the camera offset follows the raw
/// pointer delta so the canvas tracks the cursor exactly regardless of
/// zoom. The document and history are never touched.
pub struct PanTool;

impl ToolHandler for PanTool {
    fn drag(&self, ctx: &mut ToolContext<'_>, _point: Point) {
        ctx.camera.pan(ctx.raw_delta);
    }
}
