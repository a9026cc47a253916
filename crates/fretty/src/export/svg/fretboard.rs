//! SVG rendering of the fretboard grid, markings and string marks.

use log::trace;

use fretty_core::{
    draw::{Cross, Drawable, LayeredOutput, Line, RenderLayer, Shape, ShapeDefinition, Text},
    geometry::{Point, Size},
    semantic::{Diagram, Marking, MarkingShape},
};

use super::Svg;
use crate::config::LayoutConfig;

/// Relative size of mute crosses and open rings to the marking radius.
const STRING_MARK_SCALE: f32 = 0.7;

/// Coordinates of one diagram, derived from its content and the layout.
#[derive(Debug, Clone, Copy)]
pub(super) struct FretboardGeometry {
    width: f32,
    height: f32,
    margin: f32,
    fret_spacing: f32,
    string_spacing: f32,
    vertical_offset: f32,
    fret_count: usize,
}

impl FretboardGeometry {
    pub fn new(diagram: &Diagram, layout: &LayoutConfig) -> Self {
        let fret_count = diagram.fret_count();
        let margin = layout.margin();
        Self {
            width: fret_count as f32 * layout.fret_spacing() + 2.0 * margin,
            height: diagram.string_count() as f32 * layout.string_spacing() + 2.0 * margin,
            margin,
            fret_spacing: layout.fret_spacing(),
            string_spacing: layout.string_spacing(),
            vertical_offset: margin + layout.caption_height(),
            fret_count,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    fn fret_x(&self, fret: usize) -> f32 {
        fret as f32 * self.fret_spacing + self.margin
    }

    fn string_y(&self, string: usize) -> f32 {
        string as f32 * self.string_spacing + self.vertical_offset
    }

    /// Centre of the cell between fret lines `fret` and `fret + 1`.
    fn cell_center(&self, fret: usize, string: usize) -> Point {
        Point::new(
            self.fret_x(fret) + self.fret_spacing / 2.0,
            self.string_y(string),
        )
    }

    /// Where mute and open marks sit: on the nut, at the string's height.
    fn nut_point(&self, string: usize) -> Point {
        Point::new(self.margin, self.string_y(string))
    }
}

impl Svg {
    pub(super) fn render_caption(
        &self,
        diagram: &Diagram,
        geometry: &FretboardGeometry,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        if diagram.caption().is_empty() {
            return output;
        }

        let position = Point::new(
            geometry.margin,
            geometry.margin + self.layout.caption_height() / 2.0,
        );
        let text = Text::new(&self.caption_text, diagram.caption());
        output.add_to_layer(RenderLayer::Caption, text.render_to_svg(position));
        output
    }

    pub(super) fn render_grid(
        &self,
        diagram: &Diagram,
        geometry: &FretboardGeometry,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let fret_line = Line::vertical(
            geometry.height - geometry.margin - geometry.vertical_offset,
            self.line_stroke,
        );
        for fret in 0..=geometry.fret_count {
            let top = Point::new(geometry.fret_x(fret), geometry.vertical_offset);
            output.add_to_layer(RenderLayer::Frets, fret_line.render_to_svg(top));
        }

        let string_line = Line::horizontal(geometry.width - 2.0 * geometry.margin, self.line_stroke);
        for string in diagram.strings() {
            let start = Point::new(geometry.margin, geometry.string_y(string.index()));
            output.add_to_layer(RenderLayer::Strings, string_line.render_to_svg(start));
        }

        output
    }

    pub(super) fn render_barres(
        &self,
        diagram: &Diagram,
        geometry: &FretboardGeometry,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let radius = self.layout.marking_radius();

        for span in diagram.barre_spans() {
            let top = geometry.cell_center(span.fret(), span.first_string());
            let bottom = geometry.cell_center(span.fret(), span.last_string());
            trace!(
                fret = span.fret(),
                first = span.first_string(),
                last = span.last_string();
                "Barre span"
            );

            let size = Size::new(2.0 * radius, bottom.y() - top.y());
            let rect = Shape::new(ShapeDefinition::Rectangle { size }).with_fill(self.marking_fill);
            output.add_to_layer(RenderLayer::Barres, rect.render_to_svg(top.midpoint(bottom)));
        }

        output
    }

    pub(super) fn render_markings(
        &self,
        diagram: &Diagram,
        geometry: &FretboardGeometry,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        for marking in diagram.strings().iter().flat_map(|s| s.markings()) {
            let center = geometry.cell_center(marking.fret(), marking.string());
            let shape = Shape::new(self.marking_shape(marking)).with_fill(self.marking_fill);
            output.add_to_layer(RenderLayer::Markings, shape.render_to_svg(center));

            if marking.has_label() {
                let label = Text::new(&self.label_text, marking.label());
                output.add_to_layer(RenderLayer::Markings, label.render_to_svg(center));
            }
        }

        output
    }

    fn marking_shape(&self, marking: &Marking) -> ShapeDefinition {
        let radius = self.layout.marking_radius();
        match marking.shape() {
            MarkingShape::Round => ShapeDefinition::Circle { radius },
            MarkingShape::Square => ShapeDefinition::square(2.0 * radius),
        }
    }

    /// Mute crosses and open rings at the left end of each string.
    pub(super) fn render_string_marks(
        &self,
        diagram: &Diagram,
        geometry: &FretboardGeometry,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let mark_radius = self.layout.marking_radius() * STRING_MARK_SCALE;

        let cross = Cross::new(mark_radius, self.line_stroke);
        let ring =
            Shape::new(ShapeDefinition::Circle { radius: mark_radius }).with_stroke(self.line_stroke);

        for string in diagram.strings() {
            let position = geometry.nut_point(string.index());
            if string.is_muted() {
                output.add_to_layer(RenderLayer::Mutes, cross.render_to_svg(position));
            }
            if string.is_open() {
                output.add_to_layer(RenderLayer::OpenStrings, ring.render_to_svg(position));
            }
        }

        output
    }
}
