//! Element definitions for the drawing surface.

mod brush;
mod ellipse;
mod image;
mod line;
mod polygon;
mod rect;
mod text;

pub use brush::BrushStroke;
pub use ellipse::Ellipse;
pub use image::{Image, ImageFormat};
pub use line::Line;
pub use polygon::Polygon;
pub use rect::Rect;
pub use text::Text;

use kurbo::{Point, Rect as KurboRect, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Line cap style for stroked paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Line join style for stroked paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Common style properties shared by all elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementStyle {
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Stroke width.
    pub stroke_width: f64,
    /// Fill color (None = no fill).
    pub fill_color: Option<SerializableColor>,
    /// Line cap style.
    #[serde(default)]
    pub line_cap: LineCap,
    /// Line join style.
    #[serde(default)]
    pub line_join: LineJoin,
    /// Overall opacity (0.0 = fully transparent, 1.0 = fully opaque).
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

fn default_opacity() -> f64 {
    1.0
}

impl ElementStyle {
    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }

    /// Get the stroke color with opacity applied.
    pub fn stroke_with_opacity(&self) -> Color {
        let color: Color = self.stroke_color.into();
        let rgba = color.to_rgba8();
        let alpha = (rgba.a as f64 * self.opacity) as u8;
        Color::from_rgba8(rgba.r, rgba.g, rgba.b, alpha)
    }

    /// Get the fill color as a peniko Color.
    pub fn fill(&self) -> Option<Color> {
        self.fill_color.map(|c| c.into())
    }

    /// Set the stroke color from a peniko Color.
    pub fn set_stroke(&mut self, color: Color) {
        self.stroke_color = color.into();
    }

    /// Set the fill color from a peniko Color.
    pub fn set_fill(&mut self, color: Option<Color>) {
        self.fill_color = color.map(|c| c.into());
    }
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            stroke_width: 2.0,
            fill_color: None,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
            opacity: 1.0,
        }
    }
}

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = Vec2::new(b.x - a.x, b.y - a.y);
    let pv = Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    ((point.x - proj.x).powi(2) + (point.y - proj.y).powi(2)).sqrt()
}

/// Minimum distance from a point to a polyline (sequence of connected segments).
pub fn point_to_polyline_dist(point: Point, points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|w| point_to_segment_dist(point, w[0], w[1]))
        .fold(f64::INFINITY, f64::min)
}

/// Common trait for all element geometries.
pub trait Drawable {
    /// Get the unique identifier.
    fn id(&self) -> ElementId;

    /// Get the bounding box in canvas coordinates.
    fn bounds(&self) -> KurboRect;

    /// Check if a point (in canvas coordinates) hits this element.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// Get the style.
    fn style(&self) -> &ElementStyle;

    /// Get mutable style.
    fn style_mut(&mut self) -> &mut ElementStyle;

    /// Move the element by a delta in canvas coordinates.
    fn translate(&mut self, delta: Vec2);
}

/// Enum wrapper for all element types.
///
/// Equality compares identifiers only: two handles to the same element are
/// equal even if one is a stale geometric snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Element {
    Brush(BrushStroke),
    Line(Line),
    Rect(Rect),
    Ellipse(Ellipse),
    Polygon(Polygon),
    Text(Text),
    Image(Image),
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Element {}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Brush(e) => e.id(),
            Element::Line(e) => e.id(),
            Element::Rect(e) => e.id(),
            Element::Ellipse(e) => e.id(),
            Element::Polygon(e) => e.id(),
            Element::Text(e) => e.id(),
            Element::Image(e) => e.id(),
        }
    }

    pub fn bounds(&self) -> KurboRect {
        match self {
            Element::Brush(e) => e.bounds(),
            Element::Line(e) => e.bounds(),
            Element::Rect(e) => e.bounds(),
            Element::Ellipse(e) => e.bounds(),
            Element::Polygon(e) => e.bounds(),
            Element::Text(e) => e.bounds(),
            Element::Image(e) => e.bounds(),
        }
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Element::Brush(e) => e.hit_test(point, tolerance),
            Element::Line(e) => e.hit_test(point, tolerance),
            Element::Rect(e) => e.hit_test(point, tolerance),
            Element::Ellipse(e) => e.hit_test(point, tolerance),
            Element::Polygon(e) => e.hit_test(point, tolerance),
            Element::Text(e) => e.hit_test(point, tolerance),
            Element::Image(e) => e.hit_test(point, tolerance),
        }
    }

    pub fn style(&self) -> &ElementStyle {
        match self {
            Element::Brush(e) => e.style(),
            Element::Line(e) => e.style(),
            Element::Rect(e) => e.style(),
            Element::Ellipse(e) => e.style(),
            Element::Polygon(e) => e.style(),
            Element::Text(e) => e.style(),
            Element::Image(e) => e.style(),
        }
    }

    pub fn style_mut(&mut self) -> &mut ElementStyle {
        match self {
            Element::Brush(e) => e.style_mut(),
            Element::Line(e) => e.style_mut(),
            Element::Rect(e) => e.style_mut(),
            Element::Ellipse(e) => e.style_mut(),
            Element::Polygon(e) => e.style_mut(),
            Element::Text(e) => e.style_mut(),
            Element::Image(e) => e.style_mut(),
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Element::Brush(e) => e.translate(delta),
            Element::Line(e) => e.translate(delta),
            Element::Rect(e) => e.translate(delta),
            Element::Ellipse(e) => e.translate(delta),
            Element::Polygon(e) => e.translate(delta),
            Element::Text(e) => e.translate(delta),
            Element::Image(e) => e.translate(delta),
        }
    }

    /// Check if this element is a text element.
    pub fn is_text(&self) -> bool {
        matches!(self, Element::Text(_))
    }

    /// Get the text element if this is one.
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Element::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Get the image element if this is one.
    pub fn as_image(&self) -> Option<&Image> {
        match self {
            Element::Image(i) => Some(i),
            _ => None,
        }
    }
}
