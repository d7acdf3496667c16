//! Selection and move tool.

use kurbo::{Point, Vec2};

use crate::board::HIT_TOLERANCE;
use crate::events::WhiteboardEvent;
use crate::selection::{PointerTarget, resolve_target};

use super::{ToolContext, ToolHandler};

/// Selects elements and drags the selected element around.
///
/// Pressing an element selects it; pressing blank canvas or the
/// selection overlay clears the selection. Dragging with a selection
/// moves the element; the whole drag is one undo step.
pub struct SelectTool;

impl ToolHandler for SelectTool {
    fn start(&self, ctx: &mut ToolContext<'_>, point: Point) {
        let target = resolve_target(ctx.board, ctx.selection, point, HIT_TOLERANCE);
        let changed = match target {
            PointerTarget::Element(id) => ctx.selection.select(id),
            PointerTarget::SelectionOverlay | PointerTarget::Empty => ctx.selection.clear(),
        };
        if changed {
            ctx.events
                .emit(WhiteboardEvent::SelectionChanged(ctx.selection.selected()));
        }
    }

    fn drag(&self, ctx: &mut ToolContext<'_>, point: Point) {
        let Some(id) = ctx.selection.selected() else {
            return;
        };
        if !ctx.board.contains(id) {
            return;
        }
        if ctx.pending_snapshot.is_none() {
            *ctx.pending_snapshot = Some(ctx.board.snapshot());
        }
        if let Some(element) = ctx.board.get_mut(id) {
            let delta = Vec2::new(point.x - ctx.last.x, point.y - ctx.last.y);
            element.translate(delta);
        }
    }

    fn end(&self, ctx: &mut ToolContext<'_>, _point: Point) {
        ctx.flush_pending_snapshot();
    }
}
