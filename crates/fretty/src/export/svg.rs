//! SVG export backend.
//!
//! [`SvgBuilder`] resolves the layout and style configuration once into an
//! [`Svg`] renderer, which can then render any number of diagrams. Each
//! render computes its geometry from scratch, so the renderer holds no
//! per-diagram state.

mod fretboard;

use log::{debug, info};
use svg::{Node, node::element::Element};

use fretty_core::{
    color::Color,
    draw::{LayeredOutput, StrokeDefinition, TextAnchor, TextDefinition},
    semantic::Diagram,
};

use crate::{
    FrettyError,
    config::{LayoutConfig, StyleConfig},
    export::RenderOptions,
};

use fretboard::FretboardGeometry;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// Builder for the [`Svg`] renderer.
///
/// # Examples
///
/// ```
/// # use fretty::config::{LayoutConfig, StyleConfig};
/// # use fretty::export::svg::SvgBuilder;
/// let svg = SvgBuilder::new(LayoutConfig::default())
///     .with_style(&StyleConfig::default())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SvgBuilder {
    layout: LayoutConfig,
    style: StyleConfig,
}

impl SvgBuilder {
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            layout,
            style: StyleConfig::default(),
        }
    }

    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.style = style.clone();
        self
    }

    /// Validates the configuration and resolves its colors.
    ///
    /// # Errors
    ///
    /// Returns [`FrettyError::Config`] for invalid layout values or colors.
    pub fn build(self) -> Result<Svg, FrettyError> {
        self.layout.validate().map_err(FrettyError::Config)?;
        self.style.validate().map_err(FrettyError::Config)?;

        let line_color = self.style.line_color().map_err(FrettyError::Config)?;
        let marking_color = self.style.marking_color().map_err(FrettyError::Config)?;
        let label_color = self.style.label_color().map_err(FrettyError::Config)?;

        let mut label_text = TextDefinition::new();
        label_text.set_font_family(self.style.font_family());
        label_text.set_font_size(self.layout.marking_radius());
        label_text.set_bold(true);
        label_text.set_color(Some(label_color));
        label_text.set_anchor(TextAnchor::Middle);

        let mut caption_text = TextDefinition::new();
        caption_text.set_font_family(self.style.font_family());
        caption_text.set_font_size(self.layout.caption_height());
        caption_text.set_color(Some(line_color));
        caption_text.set_anchor(TextAnchor::Start);

        Ok(Svg {
            layout: self.layout,
            line_stroke: StrokeDefinition::new(line_color, self.style.line_width()),
            marking_fill: marking_color,
            label_text,
            caption_text,
        })
    }
}

/// A configured fretboard renderer.
#[derive(Debug, Clone)]
pub struct Svg {
    layout: LayoutConfig,
    line_stroke: StrokeDefinition,
    marking_fill: Color,
    label_text: TextDefinition,
    caption_text: TextDefinition,
}

impl Svg {
    /// Renders `diagram` to SVG markup.
    pub fn render(&self, diagram: &Diagram, options: &RenderOptions) -> String {
        let geometry = FretboardGeometry::new(diagram, &self.layout);
        debug!(
            width = geometry.width(),
            height = geometry.height(),
            frets = diagram.fret_count(),
            strings = diagram.string_count();
            "Fretboard geometry computed"
        );

        let mut output = LayeredOutput::new();
        output.merge(self.render_caption(diagram, &geometry));
        output.merge(self.render_grid(diagram, &geometry));
        output.merge(self.render_barres(diagram, &geometry));
        output.merge(self.render_markings(diagram, &geometry));
        output.merge(self.render_string_marks(diagram, &geometry));

        let mut root = self.root_element(&geometry, options);
        for node in output.render() {
            root.append(node);
        }

        info!(embedded = options.is_embedded(); "SVG rendered");
        root.to_string()
    }

    fn root_element(&self, geometry: &FretboardGeometry, options: &RenderOptions) -> Element {
        let mut root = Element::new("svg");
        if !options.is_embedded() {
            root.assign("version", "1.1");
            root.assign("xmlns", SVG_NAMESPACE);
            root.assign("xmlns:xlink", XLINK_NAMESPACE);
            root.assign("preserveAspectRatio", "xMidYMid meet");
        }
        if let Some(width) = options.width() {
            root.assign("width", width);
        }
        if let Some(height) = options.height() {
            root.assign("height", height);
        }
        root.assign(
            "viewBox",
            format!("0 0 {} {}", geometry.width(), geometry.height()),
        );
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use fretty_core::semantic::{InstrumentString, Marking, MarkingShape};

    fn renderer() -> Svg {
        SvgBuilder::new(LayoutConfig::default()).build().unwrap()
    }

    fn chord() -> Diagram {
        Diagram::new(
            "C",
            vec![
                InstrumentString::new(0).with_fret_count(3).with_muted(true),
                InstrumentString::new(1)
                    .with_fret_count(3)
                    .with_markings(vec![Marking::new(2, 1, "3", MarkingShape::Round)]),
                InstrumentString::new(2)
                    .with_fret_count(3)
                    .with_markings(vec![Marking::new(1, 2, "2", MarkingShape::Square)]),
                InstrumentString::new(3).with_fret_count(3).with_open(true),
            ],
        )
    }

    #[test]
    fn test_standalone_root_attributes() {
        let svg = renderer().render(&chord(), &RenderOptions::new());

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"version="1.1""#));
        assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
        assert!(svg.contains(r#"xmlns:xlink="http://www.w3.org/1999/xlink""#));
        assert!(svg.contains(r#"preserveAspectRatio="xMidYMid meet""#));
        assert!(svg.contains(r#"viewBox="0 0 220 200""#));
        assert!(!svg.contains("width=\"220\""));
    }

    #[test]
    fn test_embedded_omits_declarations() {
        let options = RenderOptions::new().with_embedded(true);
        let svg = renderer().render(&chord(), &options);

        assert!(!svg.contains("xmlns"));
        assert!(!svg.contains("version="));
        assert!(svg.contains(r#"viewBox="0 0 220 200""#));
    }

    #[test]
    fn test_size_overrides() {
        let options = RenderOptions::new().with_width(110.0).with_height(100.0);
        let svg = renderer().render(&chord(), &options);

        assert!(svg.contains(r#"width="110""#));
        assert!(svg.contains(r#"height="100""#));
        assert!(svg.contains(r#"viewBox="0 0 220 200""#));
    }

    #[test]
    fn test_layers_in_order() {
        let svg = renderer().render(&chord(), &RenderOptions::new());
        let positions: Vec<usize> = [
            "caption",
            "frets",
            "strings",
            "markings",
            "mutes",
            "open-strings",
        ]
        .iter()
        .map(|layer| {
            svg.find(&format!(r#"data-layer="{layer}""#))
                .unwrap_or_else(|| panic!("missing layer {layer}"))
        })
        .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(!svg.contains(r#"data-layer="barres""#));
    }

    #[test]
    fn test_invalid_style_fails_build() {
        let style = StyleConfig::new("Arial", "black", "nope", "white", 2.0);
        let result = SvgBuilder::new(LayoutConfig::default())
            .with_style(&style)
            .build();
        assert!(matches!(result, Err(FrettyError::Config(_))));
    }
}
