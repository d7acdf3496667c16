//! Text element.

use super::{Drawable, ElementId, ElementStyle};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A text element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    pub(crate) id: ElementId,
    /// Position (top-left corner of the text bounding box).
    pub position: Point,
    /// The text content.
    pub content: String,
    /// Font family name.
    pub font_family: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// Style properties.
    pub style: ElementStyle,
}

impl Text {
    /// Default font size.
    pub const DEFAULT_FONT_SIZE: f64 = 20.0;

    /// Minimum hit-test width so empty text stays clickable.
    const MIN_WIDTH: f64 = 20.0;

    /// Average character width as a fraction of the font size.
    const CHAR_WIDTH_FACTOR: f64 = 0.55;

    /// Create a new text element.
    pub fn new(position: Point, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            content,
            font_family: "sans-serif".to_string(),
            font_size: Self::DEFAULT_FONT_SIZE,
            style: ElementStyle::default(),
        }
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the text content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Get the text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Approximate width based on character count and font size.
    /// A rough estimate; actual width depends on the font.
    fn approximate_width(&self) -> f64 {
        let max_line_len = self
            .content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        max_line_len as f64 * self.font_size * Self::CHAR_WIDTH_FACTOR
    }

    /// Approximate height based on font size and number of lines.
    fn approximate_height(&self) -> f64 {
        let line_count = self.content.lines().count().max(1);
        let line_count = if self.content.ends_with('\n') {
            line_count + 1
        } else {
            line_count
        };
        // Line height is typically 1.2 * font_size
        line_count as f64 * self.font_size * 1.2
    }
}

impl Drawable for Text {
    fn id(&self) -> ElementId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let width = self.approximate_width().max(Self::MIN_WIDTH);
        let height = self.approximate_height();
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + width,
            self.position.y + height,
        )
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.bounds().inflate(tolerance, tolerance).contains(point)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_creation() {
        let text = Text::new(Point::new(100.0, 100.0), "Hello".to_string());
        assert_eq!(text.content(), "Hello");
        assert!((text.font_size - Text::DEFAULT_FONT_SIZE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_with_font_size() {
        let text = Text::new(Point::ZERO, "Test".to_string()).with_font_size(32.0);
        assert!((text.font_size - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test() {
        let text = Text::new(Point::new(100.0, 100.0), "Hello World".to_string());
        let bounds = text.bounds();
        let center = Point::new((bounds.x0 + bounds.x1) / 2.0, (bounds.y0 + bounds.y1) / 2.0);
        assert!(text.hit_test(center, 0.0));
        assert!(!text.hit_test(Point::new(0.0, 0.0), 0.0));
    }

    #[test]
    fn test_multiline_bounds() {
        let one = Text::new(Point::ZERO, "Hi".to_string());
        let two = Text::new(Point::ZERO, "Hi\nthere".to_string());
        assert!(two.bounds().height() > one.bounds().height());
    }
}
