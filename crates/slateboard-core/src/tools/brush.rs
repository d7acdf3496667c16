//! Freehand brush tool.

use kurbo::Point;

use crate::elements::{BrushStroke, Element};

use super::{ToolContext, ToolHandler};

/// Draws freehand strokes as sequences of pointer samples.
///
/// The stroke starts empty; each drag sample appends one point, so the
/// point count mirrors the number of move samples received.
pub struct BrushTool;

impl ToolHandler for BrushTool {
    fn start(&self, ctx: &mut ToolContext<'_>, _point: Point) {
        *ctx.transient = Some(Element::Brush(BrushStroke::with_style(
            ctx.options.element_style(),
        )));
    }

    fn drag(&self, ctx: &mut ToolContext<'_>, point: Point) {
        if let Some(Element::Brush(stroke)) = ctx.transient.as_mut() {
            stroke.add_point(point);
        }
    }

    fn end(&self, ctx: &mut ToolContext<'_>, _point: Point) {
        ctx.commit_transient();
    }
}
