//! Ellipse element.

use super::{Drawable, ElementId, ElementStyle};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-aligned ellipse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ellipse {
    pub(crate) id: ElementId,
    /// Center point.
    pub center: Point,
    /// Horizontal radius.
    pub radius_x: f64,
    /// Vertical radius.
    pub radius_y: f64,
    /// Style properties.
    pub style: ElementStyle,
}

impl Ellipse {
    /// Create a new ellipse.
    pub fn new(center: Point, radius_x: f64, radius_y: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius_x,
            radius_y,
            style: ElementStyle::default(),
        }
    }

    /// Create a circle.
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::new(center, radius, radius)
    }

    /// Create an ellipse inscribed in the rectangle spanned by two corners.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        let mut ellipse = Self::new(Point::ZERO, 0.0, 0.0);
        ellipse.set_corners(p1, p2);
        ellipse
    }

    /// Rebuild the geometry from two corner points, keeping id and style.
    pub fn set_corners(&mut self, p1: Point, p2: Point) {
        let rect = Rect::new(
            p1.x.min(p2.x),
            p1.y.min(p2.y),
            p1.x.max(p2.x),
            p1.y.max(p2.y),
        );
        self.center = rect.center();
        self.radius_x = rect.width() / 2.0;
        self.radius_y = rect.height() / 2.0;
    }
}

impl Drawable for Ellipse {
    fn id(&self) -> ElementId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius_x,
            self.center.y - self.radius_y,
            self.center.x + self.radius_x,
            self.center.y + self.radius_y,
        )
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let half_sw = self.style.stroke_width / 2.0;
        let dx_outer = (point.x - self.center.x) / (self.radius_x + tolerance + half_sw);
        let dy_outer = (point.y - self.center.y) / (self.radius_y + tolerance + half_sw);
        let in_outer = dx_outer * dx_outer + dy_outer * dy_outer <= 1.0;

        if self.style.fill_color.is_some() {
            return in_outer;
        }

        // Outline only: inside the outer ring but outside the inner ring
        let inner_rx = (self.radius_x - tolerance - half_sw).max(0.0);
        let inner_ry = (self.radius_y - tolerance - half_sw).max(0.0);
        if inner_rx <= f64::EPSILON || inner_ry <= f64::EPSILON {
            return in_outer;
        }
        let dx_inner = (point.x - self.center.x) / inner_rx;
        let dy_inner = (point.y - self.center.y) / inner_ry;
        let in_inner = dx_inner * dx_inner + dy_inner * dy_inner < 1.0;

        in_outer && !in_inner
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ElementStyle {
        &mut self.style
    }

    fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}
