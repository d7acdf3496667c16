//! Camera module for pan/zoom transforms.

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Camera manages the view transform for the drawing surface.
///
/// It handles panning (translation) and zooming (scaling) operations,
/// converting between raw screen coordinates and canvas coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// Current translation offset (pan), in screen coordinates.
    pub offset: Vec2,
    /// Current zoom factor (1.0 = 100%).
    pub zoom: f64,
    /// Minimum allowed zoom factor.
    pub min_zoom: f64,
    /// Maximum allowed zoom factor.
    pub max_zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
            min_zoom: 0.1,
            max_zoom: 10.0,
        }
    }
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the affine transform converting canvas to screen coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    /// Get the inverse transform for input handling.
    ///
    /// `canvas = (screen - offset) / zoom`
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.zoom) * Affine::translate(-self.offset)
    }

    /// Convert a raw screen point to canvas coordinates.
    pub fn screen_to_canvas(&self, screen_point: Point) -> Point {
        self.inverse_transform() * screen_point
    }

    /// Convert a canvas point to screen coordinates.
    pub fn canvas_to_screen(&self, canvas_point: Point) -> Point {
        self.transform() * canvas_point
    }

    /// Pan the camera by a delta in screen coordinates.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Set the zoom factor, clamped to the allowed range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Zoom the camera, keeping the given screen point fixed.
    pub fn zoom_at(&mut self, screen_point: Point, factor: f64) {
        let new_zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }

        let canvas_point = self.screen_to_canvas(screen_point);
        self.zoom = new_zoom;

        // Adjust offset so canvas_point stays at screen_point
        let new_screen = self.canvas_to_screen(canvas_point);
        self.offset += Vec2::new(
            screen_point.x - new_screen.x,
            screen_point.y - new_screen.y,
        );
    }

    /// Reset camera to default position and zoom.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.zoom = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera() {
        let camera = Camera::new();
        assert_eq!(camera.offset, Vec2::ZERO);
        assert!((camera.zoom - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_canvas_identity() {
        let camera = Camera::new();
        let screen = Point::new(100.0, 200.0);
        let canvas = camera.screen_to_canvas(screen);
        assert!((canvas.x - screen.x).abs() < f64::EPSILON);
        assert!((canvas.y - screen.y).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_canvas_with_offset() {
        let mut camera = Camera::new();
        camera.offset = Vec2::new(50.0, 100.0);
        let canvas = camera.screen_to_canvas(Point::new(100.0, 200.0));
        assert!((canvas.x - 50.0).abs() < f64::EPSILON);
        assert!((canvas.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_canvas_with_zoom() {
        let mut camera = Camera::new();
        camera.zoom = 2.0;
        let canvas = camera.screen_to_canvas(Point::new(100.0, 200.0));
        assert!((canvas.x - 50.0).abs() < f64::EPSILON);
        assert!((canvas.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roundtrip_conversion() {
        let mut camera = Camera::new();
        camera.offset = Vec2::new(30.0, -20.0);
        camera.zoom = 1.5;

        let original = Point::new(123.0, 456.0);
        let canvas = camera.screen_to_canvas(original);
        let back = camera.canvas_to_screen(canvas);

        assert!((back.x - original.x).abs() < 1e-10);
        assert!((back.y - original.y).abs() < 1e-10);
    }

    #[test]
    fn test_zoom_clamp() {
        let mut camera = Camera::new();
        camera.set_zoom(0.001);
        assert!((camera.zoom - camera.min_zoom).abs() < f64::EPSILON);

        camera.set_zoom(1000.0);
        assert!((camera.zoom - camera.max_zoom).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pan() {
        let mut camera = Camera::new();
        camera.pan(Vec2::new(10.0, 20.0));
        assert!((camera.offset.x - 10.0).abs() < f64::EPSILON);
        assert!((camera.offset.y - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zoom_at_keeps_anchor() {
        let mut camera = Camera::new();
        let anchor = Point::new(200.0, 150.0);
        let before = camera.screen_to_canvas(anchor);
        camera.zoom_at(anchor, 2.0);
        let after = camera.screen_to_canvas(anchor);
        assert!((before.x - after.x).abs() < 1e-9);
        assert!((before.y - after.y).abs() < 1e-9);
    }
}
