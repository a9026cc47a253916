//! Filled and outlined shapes: marking dots, marking squares, barre bars
//! and open-string rings.
//!
//! A [`Shape`] is always positioned by its centre.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, StrokeDefinition, SvgNode},
    geometry::{Point, Size},
};

/// The outline of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeDefinition {
    Circle { radius: f32 },
    Rectangle { size: Size },
}

impl ShapeDefinition {
    /// An axis-aligned square with sides of length `side`.
    pub fn square(side: f32) -> Self {
        Self::Rectangle {
            size: Size::square(side),
        }
    }
}

/// A shape with an optional fill and an optional outline stroke.
///
/// Without a fill the shape is drawn with `fill="none"`; without a stroke
/// the outline width is zero.
#[derive(Debug, Clone)]
pub struct Shape {
    definition: ShapeDefinition,
    fill: Option<Color>,
    stroke: Option<StrokeDefinition>,
}

impl Shape {
    pub fn new(definition: ShapeDefinition) -> Self {
        Self {
            definition,
            fill: None,
            stroke: None,
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

/// Applies the fill and stroke of a [`Shape`] to an SVG element.
macro_rules! paint {
    ($element:expr, $shape:expr) => {{
        let element = match $shape.fill {
            Some(fill) => $element
                .set("fill", fill.to_string())
                .set("fill-opacity", fill.alpha()),
            None => $element.set("fill", "none"),
        };

        match &$shape.stroke {
            Some(stroke) => crate::apply_stroke!(element, stroke),
            None => element.set("stroke-width", 0),
        }
    }};
}

impl Drawable for Shape {
    fn render_to_svg(&self, position: Point) -> SvgNode {
        match self.definition {
            ShapeDefinition::Circle { radius } => {
                let circle = svg_element::Circle::new()
                    .set("cx", position.x())
                    .set("cy", position.y())
                    .set("r", radius);
                Box::new(paint!(circle, self))
            }
            ShapeDefinition::Rectangle { size } => {
                let corner = size.min_point_around(position);
                let rect = svg_element::Rectangle::new()
                    .set("x", corner.x())
                    .set("y", corner.y())
                    .set("width", size.width())
                    .set("height", size.height());
                Box::new(paint!(rect, self))
            }
        }
    }
}
