//! Drawing primitives for fretboard diagrams.
//!
//! Every primitive implements [`Drawable`], producing an SVG node at a given
//! position. The renderer places the produced nodes on a [`RenderLayer`] of a
//! [`LayeredOutput`] so that later layers draw on top of earlier ones.

mod layer;
mod line;
mod shape;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use line::{Cross, Line};
pub use shape::{Shape, ShapeDefinition};
pub use stroke::StrokeDefinition;
pub use text::{Text, TextAnchor, TextDefinition};

use crate::geometry::Point;

/// Something that can be rendered to an SVG node.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable with its reference point at `position`.
    fn render_to_svg(&self, position: Point) -> SvgNode;
}
