//! CSS colors used for fretboard lines, markings and labels.
//!
//! [`Color`] accepts anything the `color` crate parses as CSS: names such as
//! `"white"`, hex notation and functional notation like `rgb(...)` or
//! `rgba(...)`. Style configuration values go through [`Color::new`], so
//! an invalid value is reported before anything is rendered.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A parsed CSS color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Parses a CSS color string.
    ///
    /// # Examples
    ///
    /// ```
    /// use fretty_core::color::Color;
    ///
    /// let marking = Color::new("#1f4e79").unwrap();
    /// let label = Color::new("white").unwrap();
    /// assert_ne!(marking, label);
    /// assert!(Color::new("fretboard-brown").is_err());
    /// ```
    pub fn new(css: &str) -> Result<Self, String> {
        DynamicColor::from_str(css)
            .map(|color| Self { color })
            .map_err(|err| format!("invalid color `{css}`: {err}"))
    }

    /// Opacity between 0.0 and 1.0, written as the `*-opacity` attribute.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Black, the default ink of grid lines and markings.
impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("`black` is a CSS color name")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}
