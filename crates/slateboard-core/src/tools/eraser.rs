//! Eraser tool.

use kurbo::Point;

use crate::board::HIT_TOLERANCE;

use super::{ToolContext, ToolHandler};

/// Deletes whole elements under the pointer.
///
/// Both the initial press and every drag sample erase; a sweep deleting
/// several elements still collapses into one undo step because the
/// snapshot is taken once, before the first deletion.
pub struct EraserTool;

impl EraserTool {
    fn erase_at(&self, ctx: &mut ToolContext<'_>, point: Point) {
        if let Some(id) = ctx.board.element_at(point, HIT_TOLERANCE) {
            ctx.delete_element(id);
        }
    }
}

impl ToolHandler for EraserTool {
    fn start(&self, ctx: &mut ToolContext<'_>, point: Point) {
        self.erase_at(ctx, point);
    }

    fn drag(&self, ctx: &mut ToolContext<'_>, point: Point) {
        self.erase_at(ctx, point);
    }

    fn end(&self, ctx: &mut ToolContext<'_>, _point: Point) {
        ctx.flush_pending_snapshot();
    }
}
