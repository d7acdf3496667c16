//! Freehand brush stroke element.

use super::{Drawable, ElementId, ElementStyle, point_to_segment_dist};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A freehand brush stroke (series of points in draw order).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrushStroke {
    pub(crate) id: ElementId,
    /// Points in the stroke path.
    pub points: Vec<Point>,
    /// Style properties.
    pub style: ElementStyle,
}

impl BrushStroke {
    /// Create a new empty brush stroke.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            points: Vec::new(),
            style: ElementStyle::default(),
        }
    }

    /// Create an empty brush stroke with the given style.
    pub fn with_style(style: ElementStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            points: Vec::new(),
            style,
        }
    }

    /// Create from existing points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            style: ElementStyle::default(),
        }
    }

    /// Add a point to the path.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for BrushStroke {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawable for BrushStroke {
    fn id(&self) -> ElementId {
        self.id
    }

    fn bounds(&self) -> Rect {
        if self.points.is_empty() {
            return Rect::ZERO;
        }

        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;

        for point in &self.points {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }

        Rect::new(min_x, min_y, max_x, max_y)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        if self.points.len() < 2 {
            if let Some(p) = self.points.first() {
                let dx = point.x - p.x;
                let dy = point.y - p.y;
                return (dx * dx + dy * dy).sqrt() <= tolerance + self.style.stroke_width / 2.0;
            }
            return false;
        }

        for window in self.points.windows(2) {
            let dist = point_to_segment_dist(point, window[0], window[1]);
            if dist <= tolerance + self.style.stroke_width / 2.0 {
                return true;
            }
        }

        false
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ElementStyle {
        &mut self.style
    }

    fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
    }
}
