//! Straight line segments and the X mark drawn for muted strings.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    draw::{Drawable, StrokeDefinition, SvgNode},
    geometry::Point,
};

/// A straight segment starting at the render position.
///
/// The segment ends at the render position offset by `delta`.
#[derive(Debug, Clone)]
pub struct Line {
    delta: Point,
    stroke: StrokeDefinition,
}

impl Line {
    pub fn new(delta: Point, stroke: StrokeDefinition) -> Self {
        Self { delta, stroke }
    }

    /// A line running `length` units to the right.
    pub fn horizontal(length: f32, stroke: StrokeDefinition) -> Self {
        Self::new(Point::new(length, 0.0), stroke)
    }

    /// A line running `length` units downward.
    pub fn vertical(length: f32, stroke: StrokeDefinition) -> Self {
        Self::new(Point::new(0.0, length), stroke)
    }
}

impl Drawable for Line {
    fn render_to_svg(&self, position: Point) -> SvgNode {
        let end = position.add_point(self.delta);
        let line = svg_element::Line::new()
            .set("x1", position.x())
            .set("y1", position.y())
            .set("x2", end.x())
            .set("y2", end.y());
        Box::new(apply_stroke!(line, &self.stroke))
    }
}

/// Two diagonal segments crossing at the render position.
#[derive(Debug, Clone)]
pub struct Cross {
    half_width: f32,
    stroke: StrokeDefinition,
}

impl Cross {
    pub fn new(half_width: f32, stroke: StrokeDefinition) -> Self {
        Self { half_width, stroke }
    }
}

impl Drawable for Cross {
    fn render_to_svg(&self, position: Point) -> SvgNode {
        let h = self.half_width;
        let falling = Line::new(Point::new(2.0 * h, 2.0 * h), self.stroke);
        let rising = Line::new(Point::new(2.0 * h, -2.0 * h), self.stroke);

        let group = svg_element::Group::new()
            .add(falling.render_to_svg(position.add_point(Point::new(-h, -h))))
            .add(rising.render_to_svg(position.add_point(Point::new(-h, h))));
        Box::new(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_line() {
        let svg = Line::vertical(120.0, StrokeDefinition::default())
            .render_to_svg(Point::new(20.0, 60.0))
            .to_string();

        assert!(svg.contains(r#"x1="20""#));
        assert!(svg.contains(r#"y1="60""#));
        assert!(svg.contains(r#"x2="20""#));
        assert!(svg.contains(r#"y2="180""#));
    }

    #[test]
    fn test_horizontal_line() {
        let svg = Line::horizontal(180.0, StrokeDefinition::default())
            .render_to_svg(Point::new(20.0, 60.0))
            .to_string();

        assert!(svg.contains(r#"x2="200""#));
        assert!(svg.contains(r#"y2="60""#));
    }

    #[test]
    fn test_cross_draws_two_diagonals() {
        let svg = Cross::new(10.0, StrokeDefinition::default())
            .render_to_svg(Point::new(20.0, 60.0))
            .to_string();

        assert_eq!(svg.matches("<line").count(), 2);
        // falling diagonal
        assert!(svg.contains(r#"x1="10""#));
        assert!(svg.contains(r#"y1="50""#));
        assert!(svg.contains(r#"y2="70""#));
        // rising diagonal starts below the centre
        assert!(svg.contains(r#"y1="70""#));
        assert!(svg.contains(r#"x2="30""#));
    }
}
