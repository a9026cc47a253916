//! Text rendering definitions for captions and marking labels.
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A renderable text element combining content with a [`TextDefinition`]
//!
//! ```
//! # use fretty_core::draw::{Drawable, Text, TextAnchor, TextDefinition};
//! # use fretty_core::geometry::Point;
//! let mut style = TextDefinition::new();
//! style.set_font_size(15.0);
//! style.set_anchor(TextAnchor::Middle);
//!
//! let text = Text::new(&style, "12");
//! let svg = text.render_to_svg(Point::new(50.0, 60.0)).to_string();
//! assert!(svg.contains(">12<"));
//! ```

use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, SvgNode},
    geometry::Point,
};

/// Horizontal anchoring of a text element relative to its position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the position.
    Start,
    /// Text is centred on the position.
    #[default]
    Middle,
}

impl TextAnchor {
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
        }
    }
}

/// Defines the visual style for text elements.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Arial"` |
/// | Font size | `15` |
/// | Bold | `false` |
/// | Color | `None` (SVG default, black) |
/// | Anchor | [`TextAnchor::Middle`] |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    bold: bool,
    color: Option<Color>,
    anchor: TextAnchor,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn set_anchor(&mut self, anchor: TextAnchor) {
        self.anchor = anchor;
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: String::from("Arial"),
            font_size: 15.0,
            bold: false,
            color: None,
            anchor: TextAnchor::default(),
        }
    }
}

/// A single line of text, vertically centred on its position.
///
/// Content is escaped by the SVG text node, so labels may contain markup
/// characters such as `<` or `&`.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }
}

impl Drawable for Text<'_> {
    fn render_to_svg(&self, position: Point) -> SvgNode {
        let weight = if self.definition.is_bold() {
            "bold"
        } else {
            "normal"
        };

        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", self.definition.anchor().to_svg_value())
            .set("dominant-baseline", "middle")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size())
            .set("font-weight", weight);

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        Box::new(rendered_text.add(SvgText::new(self.content)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_definition_defaults() {
        let definition = TextDefinition::new();
        assert_eq!(definition.font_family(), "Arial");
        assert_eq!(definition.font_size(), 15.0);
        assert!(!definition.is_bold());
        assert!(definition.color().is_none());
        assert_eq!(definition.anchor(), TextAnchor::Middle);
    }

    #[test]
    fn test_text_renders_style_attributes() {
        let mut definition = TextDefinition::new();
        definition.set_bold(true);
        definition.set_anchor(TextAnchor::Start);
        definition.set_color(Some(Color::new("white").unwrap()));

        let svg = Text::new(&definition, "Am")
            .render_to_svg(Point::new(20.0, 40.0))
            .to_string();

        assert!(svg.starts_with("<text"));
        assert!(svg.contains(r#"font-weight="bold""#));
        assert!(svg.contains(r#"text-anchor="start""#));
        assert!(svg.contains(r#"x="20""#));
        assert!(svg.contains(r#"y="40""#));
        assert!(svg.contains("fill=\""));
        assert!(svg.contains("Am"));
    }

    #[test]
    fn test_text_escapes_markup() {
        let definition = TextDefinition::new();
        let svg = Text::new(&definition, "A<B&C")
            .render_to_svg(Point::default())
            .to_string();

        assert!(svg.contains("&lt;"));
        assert!(svg.contains("&amp;"));
        assert!(!svg.contains("A<B"));
    }
}
