//! Stroke definitions for lines and outlines.
//!
//! - [`StrokeDefinition`]: stroke color and width
//! - [`apply_stroke!`](crate::apply_stroke!): applies the stroke attributes to an SVG element
//!
//! ```
//! use fretty_core::draw::StrokeDefinition;
//! use fretty_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::new(Color::new("black").unwrap(), 2.0);
//! let line = svg_element::Line::new().set("x1", 0).set("x2", 10);
//! let line = fretty_core::apply_stroke!(line, &stroke);
//! ```

use crate::color::Color;

/// Stroke color and width shared by fret lines, string lines, mute and
/// open-string marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Default for StrokeDefinition {
    /// Black, 2 units wide.
    fn default() -> Self {
        Self::new(Color::default(), 2.0)
    }
}

/// Applies the stroke attributes of a [`StrokeDefinition`] to an SVG element.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    }};
}
