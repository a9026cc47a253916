//! Configuration types for Fretty diagram rendering.
//!
//! All types implement [`serde::Deserialize`] with per-field defaults, so a
//! configuration file only needs to name the values it changes.
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style.
//! - [`LayoutConfig`] - Spacing constants of the fretboard grid.
//! - [`StyleConfig`] - Font, colors and line width.
//!
//! # Example
//!
//! ```
//! # use fretty::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.layout().fret_spacing(), 60.0);
//! ```

use serde::Deserialize;

use fretty_core::color::Color;

use crate::FrettyError;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    layout: LayoutConfig,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks every layout value and style color.
    ///
    /// # Errors
    ///
    /// Returns [`FrettyError::Config`] naming the first invalid setting.
    pub fn validate(&self) -> Result<(), FrettyError> {
        self.layout.validate().map_err(FrettyError::Config)?;
        self.style.validate().map_err(FrettyError::Config)
    }
}

/// Spacing constants of the fretboard grid, in SVG user units.
///
/// Every value must be positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Vertical distance between string lines.
    string_spacing: f32,
    /// Horizontal distance between fret lines.
    fret_spacing: f32,
    /// Blank border around the grid.
    margin: f32,
    /// Radius of round markings; half the side of square ones.
    marking_radius: f32,
    /// Height of the band reserved for the caption above the grid.
    caption_height: f32,
}

impl LayoutConfig {
    pub fn new(
        string_spacing: f32,
        fret_spacing: f32,
        margin: f32,
        marking_radius: f32,
        caption_height: f32,
    ) -> Self {
        Self {
            string_spacing,
            fret_spacing,
            margin,
            marking_radius,
            caption_height,
        }
    }

    pub fn string_spacing(&self) -> f32 {
        self.string_spacing
    }

    pub fn fret_spacing(&self) -> f32 {
        self.fret_spacing
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn marking_radius(&self) -> f32 {
        self.marking_radius
    }

    pub fn caption_height(&self) -> f32 {
        self.caption_height
    }

    /// Rejects non-positive or non-finite values.
    pub fn validate(&self) -> Result<(), String> {
        let values = [
            ("string_spacing", self.string_spacing),
            ("fret_spacing", self.fret_spacing),
            ("margin", self.margin),
            ("marking_radius", self.marking_radius),
            ("caption_height", self.caption_height),
        ];
        match values
            .iter()
            .find(|(_, value)| !value.is_finite() || *value <= 0.0)
        {
            Some((name, value)) => Err(format!(
                "layout.{name} must be a positive number, got {value}"
            )),
            None => Ok(()),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(40.0, 60.0, 20.0, 15.0, 40.0)
    }
}

/// Visual styling of rendered diagrams.
///
/// Colors are CSS color strings and are parsed when the renderer is built.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    font_family: String,
    line_color: String,
    marking_color: String,
    label_color: String,
    line_width: f32,
}

impl StyleConfig {
    pub fn new(
        font_family: impl Into<String>,
        line_color: impl Into<String>,
        marking_color: impl Into<String>,
        label_color: impl Into<String>,
        line_width: f32,
    ) -> Self {
        Self {
            font_family: font_family.into(),
            line_color: line_color.into(),
            marking_color: marking_color.into(),
            label_color: label_color.into(),
            line_width,
        }
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Color of fret lines, string lines, mute marks and open rings.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn line_color(&self) -> Result<Color, String> {
        parse_color("line_color", &self.line_color)
    }

    /// Fill of markings and barre rectangles.
    pub fn marking_color(&self) -> Result<Color, String> {
        parse_color("marking_color", &self.marking_color)
    }

    /// Fill of marking labels.
    pub fn label_color(&self) -> Result<Color, String> {
        parse_color("label_color", &self.label_color)
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    pub fn validate(&self) -> Result<(), String> {
        self.line_color()?;
        self.marking_color()?;
        self.label_color()?;
        if !self.line_width.is_finite() || self.line_width < 0.0 {
            return Err(format!(
                "style.line_width must be a non-negative number, got {}",
                self.line_width
            ));
        }
        Ok(())
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new("Arial", "black", "black", "white", 2.0)
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid style.{field} in config: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_values() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.string_spacing(), 40.0);
        assert_eq!(layout.fret_spacing(), 60.0);
        assert_eq!(layout.margin(), 20.0);
        assert_eq!(layout.marking_radius(), 15.0);
        assert_eq!(layout.caption_height(), 40.0);
    }

    #[test]
    fn test_layout_rejects_non_positive_values() {
        let err = LayoutConfig::new(40.0, 0.0, 20.0, 15.0, 40.0)
            .validate()
            .unwrap_err();
        assert!(err.contains("layout.fret_spacing"));

        assert!(
            LayoutConfig::new(40.0, 60.0, f32::NAN, 15.0, 40.0)
                .validate()
                .is_err()
        );
        assert!(
            LayoutConfig::new(-1.0, 60.0, 20.0, 15.0, 40.0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_invalid_style_color() {
        let style = StyleConfig::new("Arial", "not-a-color", "black", "white", 2.0);
        let err = style.line_color().unwrap_err();
        assert!(err.contains("style.line_color"));

        let config = AppConfig::new(LayoutConfig::default(), style);
        assert!(matches!(config.validate(), Err(FrettyError::Config(_))));
    }

    #[test]
    fn test_style_defaults_are_valid() {
        let style = StyleConfig::default();
        assert_eq!(style.font_family(), "Arial");
        assert_eq!(style.line_width(), 2.0);
        assert!(style.validate().is_ok());
    }
}
