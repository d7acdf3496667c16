//! Rectangle element.

use super::{Drawable, ElementId, ElementStyle};
use kurbo::{Point, Rect as KurboRect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rect {
    pub(crate) id: ElementId,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
    /// Style properties.
    pub style: ElementStyle,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width,
            height,
            style: ElementStyle::default(),
        }
    }

    /// Create a rectangle from two corner points.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        let mut rect = Self::new(Point::ZERO, 0.0, 0.0);
        rect.set_corners(p1, p2);
        rect
    }

    /// Rebuild the geometry from two corner points, keeping id and style.
    pub fn set_corners(&mut self, p1: Point, p2: Point) {
        self.position = Point::new(p1.x.min(p2.x), p1.y.min(p2.y));
        self.width = (p2.x - p1.x).abs();
        self.height = (p2.y - p1.y).abs();
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> KurboRect {
        KurboRect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }
}

impl Drawable for Rect {
    fn id(&self) -> ElementId {
        self.id
    }

    fn bounds(&self) -> KurboRect {
        self.as_rect()
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let rect = self.as_rect();
        if self.style.fill_color.is_some() {
            // Filled: hit anywhere inside
            rect.inflate(tolerance, tolerance).contains(point)
        } else {
            // Outline only: hit on the border
            let outer = rect.inflate(
                tolerance + self.style.stroke_width / 2.0,
                tolerance + self.style.stroke_width / 2.0,
            );
            let inner = rect.inflate(
                -(tolerance + self.style.stroke_width / 2.0),
                -(tolerance + self.style.stroke_width / 2.0),
            );
            outer.contains(point) && !inner.contains(point)
        }
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ElementStyle {
        &mut self.style
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}
