//! Polygon element.

use super::{Drawable, ElementId, ElementStyle, point_to_segment_dist};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A closed polygon defined by its vertices in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polygon {
    pub(crate) id: ElementId,
    /// Vertices in winding order. The closing edge from the last vertex back
    /// to the first is implicit.
    pub vertices: Vec<Point>,
    /// Style properties.
    pub style: ElementStyle,
}

impl Polygon {
    /// Create a new polygon from vertices.
    pub fn new(vertices: Vec<Point>) -> Self {
        Self {
            id: Uuid::new_v4(),
            vertices,
            style: ElementStyle::default(),
        }
    }

    /// Even-odd point-in-polygon test.
    fn contains(&self, point: Point) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[j];
            if (a.y > point.y) != (b.y > point.y) {
                let x = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
                if point.x < x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Minimum distance from a point to the polygon outline (including the
    /// closing edge).
    fn outline_dist(&self, point: Point) -> f64 {
        let n = self.vertices.len();
        if n == 0 {
            return f64::INFINITY;
        }
        if n == 1 {
            let d = point - self.vertices[0];
            return d.hypot();
        }
        let mut dist = f64::INFINITY;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            dist = dist.min(point_to_segment_dist(point, a, b));
        }
        dist
    }
}

impl Drawable for Polygon {
    fn id(&self) -> ElementId {
        self.id
    }

    fn bounds(&self) -> Rect {
        if self.vertices.is_empty() {
            return Rect::ZERO;
        }
        let (min_x, max_x) = self.vertices.iter().fold((f64::MAX, f64::MIN), |(mn, mx), p| {
            (mn.min(p.x), mx.max(p.x))
        });
        let (min_y, max_y) = self.vertices.iter().fold((f64::MAX, f64::MIN), |(mn, mx), p| {
            (mn.min(p.y), mx.max(p.y))
        });
        Rect::new(min_x, min_y, max_x, max_y)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        if self.style.fill_color.is_some() && self.contains(point) {
            return true;
        }
        self.outline_dist(point) <= tolerance + self.style.stroke_width / 2.0
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ElementStyle {
        &mut self.style
    }

    fn translate(&mut self, delta: Vec2) {
        for vertex in &mut self.vertices {
            *vertex += delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::SerializableColor;

    fn unit_square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ]
    }

    #[test]
    fn test_bounds() {
        let poly = Polygon::new(unit_square());
        let bounds = poly.bounds();
        assert!((bounds.x1 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_filled() {
        let mut poly = Polygon::new(unit_square());
        poly.style.fill_color = Some(SerializableColor::black());
        assert!(poly.hit_test(Point::new(50.0, 50.0), 0.0));
        assert!(!poly.hit_test(Point::new(150.0, 50.0), 0.0));
    }

    #[test]
    fn test_hit_test_outline() {
        let poly = Polygon::new(unit_square());
        // Interior of an unfilled polygon is a miss
        assert!(!poly.hit_test(Point::new(50.0, 50.0), 2.0));
        // On an edge, including the implicit closing edge
        assert!(poly.hit_test(Point::new(50.0, 0.0), 2.0));
        assert!(poly.hit_test(Point::new(0.0, 50.0), 2.0));
    }

    #[test]
    fn test_translate() {
        let mut poly = Polygon::new(unit_square());
        poly.translate(Vec2::new(10.0, 20.0));
        assert!((poly.vertices[0].x - 10.0).abs() < f64::EPSILON);
        assert!((poly.vertices[0].y - 20.0).abs() < f64::EPSILON);
    }
}
