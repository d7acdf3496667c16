//! Whiteboard-wide drawing options.

use serde::{Deserialize, Serialize};

use crate::elements::{ElementStyle, LineCap, LineJoin, SerializableColor, Text};
use crate::snap::DEFAULT_GRID_SIZE;

/// Options applied to newly created elements and to input handling.
///
/// Changing an option affects future elements only; existing elements
/// keep the style they were created with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhiteboardOptions {
    /// Stroke color for new elements.
    pub stroke_color: SerializableColor,
    /// Stroke width in canvas units.
    pub stroke_width: f64,
    /// Fill color for closed shapes, if any.
    pub fill: Option<SerializableColor>,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    /// Opacity for new elements, 0.0 to 1.0.
    pub opacity: f64,
    /// Font family for new text elements.
    pub font_family: String,
    /// Font size for new text elements.
    pub font_size: f64,
    /// Grid cell size used when snapping is enabled.
    pub grid_size: f64,
    /// Whether pointer input snaps to the grid.
    pub snap_to_grid: bool,
}

impl Default for WhiteboardOptions {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            stroke_width: 2.0,
            fill: None,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            opacity: 1.0,
            font_family: "sans-serif".to_string(),
            font_size: Text::DEFAULT_FONT_SIZE,
            grid_size: DEFAULT_GRID_SIZE,
            snap_to_grid: false,
        }
    }
}

impl WhiteboardOptions {
    /// Build the style applied to the next created element.
    pub fn element_style(&self) -> ElementStyle {
        ElementStyle {
            stroke_color: self.stroke_color,
            stroke_width: self.stroke_width,
            fill_color: self.fill,
            line_cap: self.line_cap,
            line_join: self.line_join,
            opacity: self.opacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = WhiteboardOptions::default();
        assert!((options.stroke_width - 2.0).abs() < f64::EPSILON);
        assert!(options.fill.is_none());
        assert!(!options.snap_to_grid);
    }

    #[test]
    fn test_element_style_carries_options() {
        let options = WhiteboardOptions {
            stroke_width: 7.0,
            fill: Some(SerializableColor::new(10, 20, 30, 255)),
            ..Default::default()
        };
        let style = options.element_style();
        assert!((style.stroke_width - 7.0).abs() < f64::EPSILON);
        assert!(style.fill_color.is_some());
    }
}
