//! Fretty - a guitar fretboard diagram generator.
//!
//! Turns a small plain-text notation into SVG fretboard diagrams, and
//! embeds those diagrams into XML or HTML documents in place of a custom
//! tag.
//!
//! ```text
//! C          <- caption
//! X-----     <- muted string
//! ---(3)     <- marking labelled "3" on the third fret
//! --(2)-
//! +-----     <- open string
//! -(1)--
//! +-----
//! ```

pub mod config;
pub mod embed;
pub mod export;
pub mod image;
pub mod raster;

mod error;

pub use fretty_core::{color, draw, geometry, semantic};

pub use error::FrettyError;
pub use export::RenderOptions;

use log::{debug, info, trace};

use config::AppConfig;
use export::svg::SvgBuilder;

/// Builder for parsing and rendering fretboard diagrams.
///
/// # Examples
///
/// ```
/// use fretty::{DiagramBuilder, RenderOptions, config::AppConfig};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Parse notation to the semantic model
/// let diagram = builder.parse("Am\n-(1)\n--(2)\n--(3)").expect("Failed to parse");
///
/// // Render the semantic model to SVG
/// let svg = builder
///     .render_svg(&diagram, &RenderOptions::default())
///     .expect("Failed to render");
/// assert!(svg.contains("viewBox=\"0 0 220 160\""));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse notation text into a semantic diagram.
    ///
    /// # Errors
    ///
    /// Returns [`FrettyError::Parse`] carrying every diagnostic of the
    /// input when any string line is malformed.
    pub fn parse(&self, source: &str) -> Result<semantic::Diagram, FrettyError> {
        info!("Parsing notation");

        let diagram = fretty_parser::parse(source)
            .map_err(|err| FrettyError::new_parse_error(err, source))?;

        debug!("Notation parsed successfully");
        trace!(diagram:?; "Parsed diagram");

        Ok(diagram)
    }

    /// Parse notation that is already split into lines.
    ///
    /// On failure, the error source is the lines joined with `\n`, which is
    /// what the diagnostic spans point into.
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<semantic::Diagram, FrettyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<S> = lines.into_iter().collect();
        info!(lines = lines.len(); "Parsing notation lines");

        fretty_parser::parse_lines(&lines).map_err(|err| {
            let src = lines
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join("\n");
            FrettyError::new_parse_error(err, src)
        })
    }

    /// Render a semantic diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`FrettyError::Config`] when the configured layout values or
    /// style colors are invalid.
    pub fn render_svg(
        &self,
        diagram: &semantic::Diagram,
        options: &RenderOptions,
    ) -> Result<String, FrettyError> {
        let svg = SvgBuilder::new(*self.config.layout())
            .with_style(self.config.style())
            .build()?;
        Ok(svg.render(diagram, options))
    }

    /// Parse raw notation lines and render them in one step.
    pub fn generate_svg<I, S>(&self, lines: I, options: &RenderOptions) -> Result<String, FrettyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let diagram = self.parse_lines(lines)?;
        self.render_svg(&diagram, options)
    }
}

/// Parse and render notation lines with the default configuration.
///
/// # Examples
///
/// ```
/// # use fretty::RenderOptions;
/// let svg = fretty::generate_svg(["5", "|--", "(3|-"], &RenderOptions::default()).unwrap();
/// assert!(svg.contains(r#"data-layer="barres""#));
/// ```
pub fn generate_svg<I, S>(lines: I, options: &RenderOptions) -> Result<String, FrettyError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DiagramBuilder::default().generate_svg(lines, options)
}
