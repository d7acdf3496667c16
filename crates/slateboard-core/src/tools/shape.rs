//! Two-point geometric shape tools (line, rectangle, ellipse).

use kurbo::Point;

use crate::elements::{Element, Ellipse, Line, Rect};

use super::{ToolContext, ToolHandler};

/// Which geometry a [`ShapeTool`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rect,
    Ellipse,
}

/// Press-drag-release shape tool.
///
/// The press anchors one corner (or endpoint); each drag sample rewrites
/// the opposite corner from the anchor kept in the interaction state, so
/// the preview always spans from the original press to the live pointer.
pub struct ShapeTool {
    kind: ShapeKind,
}

impl ShapeTool {
    pub const fn new(kind: ShapeKind) -> Self {
        Self { kind }
    }
}

impl ToolHandler for ShapeTool {
    fn start(&self, ctx: &mut ToolContext<'_>, point: Point) {
        let style = ctx.options.element_style();
        let mut element = match self.kind {
            ShapeKind::Line => Element::Line(Line::new(point, point)),
            ShapeKind::Rect => Element::Rect(Rect::from_corners(point, point)),
            ShapeKind::Ellipse => Element::Ellipse(Ellipse::from_corners(point, point)),
        };
        *element.style_mut() = style;
        *ctx.transient = Some(element);
    }

    fn drag(&self, ctx: &mut ToolContext<'_>, point: Point) {
        let origin = ctx.origin;
        match ctx.transient.as_mut() {
            Some(Element::Line(line)) => line.end = point,
            Some(Element::Rect(rect)) => rect.set_corners(origin, point),
            Some(Element::Ellipse(ellipse)) => ellipse.set_corners(origin, point),
            _ => {}
        }
    }

    fn end(&self, ctx: &mut ToolContext<'_>, _point: Point) {
        ctx.commit_transient();
    }
}
