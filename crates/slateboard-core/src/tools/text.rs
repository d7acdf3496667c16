//! Text placement tool.

use kurbo::Point;

use crate::elements::{Element, Text};
use crate::events::WhiteboardEvent;

use super::{ToolContext, ToolHandler};

/// Places text elements.
///
/// A press while no edit is open creates an empty in-progress text
/// element and asks the host to show an editor. A press while an edit
/// is open finalizes that edit first; the user has to press again to
/// start a new one.
pub struct TextTool;

impl ToolHandler for TextTool {
    fn start(&self, ctx: &mut ToolContext<'_>, point: Point) {
        if ctx.transient.is_some() {
            ctx.finalize_text();
            return;
        }

        let mut text = Text::new(point, String::new());
        text.style = ctx.options.element_style();
        let text = text
            .with_font_size(ctx.options.font_size)
            .with_font_family(ctx.options.font_family.clone());
        *ctx.transient = Some(Element::Text(text));
        ctx.events
            .emit(WhiteboardEvent::TextInputRequested { position: point });
    }

    fn drag(&self, ctx: &mut ToolContext<'_>, point: Point) {
        // Dragging before releasing repositions the pending editor.
        if let Some(text) = ctx.transient_text_mut() {
            text.position = point;
        }
    }

    // Release is a no-op: the edit stays open until the host finishes
    // it or the next press finalizes it.
}
