//! Layer-based rendering system for SVG output.
//!
//! This module provides a type-safe layer system that allows the renderer
//! to specify which z-order layer each SVG element belongs to.
//!
//! # Example
//!
//! ```
//! # use fretty_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Circle, Line};
//!
//! let mut output = LayeredOutput::new();
//!
//! // Added out of order, rendered in layer order
//! output.add_to_layer(RenderLayer::Markings, Box::new(Circle::new()));
//! output.add_to_layer(RenderLayer::Frets, Box::new(Line::new()));
//!
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use std::collections::BTreeMap;

use log::trace;
use svg::node::element as svg_element;

pub type SvgNode = Box<dyn svg::Node>;

/// Z-order of the parts of a fretboard, bottom first.
///
/// The derived `Ord` follows declaration order, so markings always cover
/// the grid and barres, and string marks on the nut are drawn last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Start label above the grid
    Caption,
    /// Vertical fret lines
    Frets,
    /// Horizontal string lines
    Strings,
    /// Barre rectangles joining markings across strings
    Barres,
    /// Marking shapes and their labels
    Markings,
    /// X marks for muted strings
    Mutes,
    /// Rings for open strings
    OpenStrings,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Caption => "caption",
            Self::Frets => "frets",
            Self::Strings => "strings",
            Self::Barres => "barres",
            Self::Markings => "markings",
            Self::Mutes => "mutes",
            Self::OpenStrings => "open-strings",
        }
    }
}

/// SVG nodes bucketed by [`RenderLayer`].
///
/// Each renderer pass fills its own `LayeredOutput`; the passes are merged
/// and rendered once, so drawing order does not depend on pass order.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    layers: BTreeMap<RenderLayer, Vec<SvgNode>>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `node` to `layer`, after any nodes already there.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.layers.entry(layer).or_default().push(node);
    }

    /// Moves every node of `other` into this output, keeping per-layer order.
    pub fn merge(&mut self, other: LayeredOutput) {
        for (layer, nodes) in other.layers {
            self.layers.entry(layer).or_default().extend(nodes);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Renders one `<g data-layer="...">` per non-empty layer, bottom first.
    pub fn render(self) -> Vec<SvgNode> {
        self.layers
            .into_iter()
            .map(|(layer, nodes)| {
                trace!(layer = layer.name(), nodes = nodes.len(); "Rendering layer");
                let group = nodes
                    .into_iter()
                    .fold(svg_element::Group::new().set("data-layer", layer.name()), |group, node| {
                        group.add(node)
                    });
                Box::new(group) as SvgNode
            })
            .collect()
    }
}
