//! Export of parsed diagrams to markup.
//!
//! # Pipeline Position
//!
//! ```text
//! Notation lines
//!     ↓ parse
//! Semantic Model
//!     ↓ export (this module)
//! SVG markup
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]

pub mod svg;

/// Per-call output settings of the renderer.
///
/// `width` and `height` only set the root size attributes; the `viewBox`
/// always follows the diagram content. An embedded document omits the
/// declarations that a standalone SVG file needs.
///
/// # Examples
///
/// ```
/// # use fretty::RenderOptions;
/// let options = RenderOptions::new().with_width(300.0).with_embedded(true);
/// assert_eq!(options.width(), Some(300.0));
/// assert_eq!(options.height(), None);
/// assert!(options.is_embedded());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderOptions {
    width: Option<f32>,
    height: Option<f32>,
    embedded: bool,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets both size overrides at once, leaving unset values unchanged.
    pub fn with_size(mut self, width: Option<f32>, height: Option<f32>) -> Self {
        self.width = width.or(self.width);
        self.height = height.or(self.height);
        self
    }

    pub fn with_embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    pub fn width(&self) -> Option<f32> {
        self.width
    }

    pub fn height(&self) -> Option<f32> {
        self.height
    }

    pub fn is_embedded(&self) -> bool {
        self.embedded
    }
}
