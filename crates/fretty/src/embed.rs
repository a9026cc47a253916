//! Embedding fretboard diagrams into XML and HTML documents.
//!
//! The [`Embedder`] streams a host document and copies it unchanged, except
//! for elements named after its tag (`<fretty>` by default). The text of
//! such an element is notation; the element is replaced with the rendered
//! SVG, or with an `<img>` reference when it carries an `image` attribute.
//!
//! ```xml
//! <p>Open C:</p>
//! <fretty width="120" image="c.png">
//!   C
//!   X-----
//!   ---(3)
//! </fretty>
//! ```

use std::{fmt, str::FromStr};

use log::{debug, info};
use quick_xml::{
    Reader, Writer,
    events::{BytesStart, BytesText, Event},
};

use crate::{DiagramBuilder, FrettyError, RenderOptions, image::ImageSink};

/// Tag name replaced by default.
pub const DEFAULT_TAG: &str = "fretty";

/// How the input of a run is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessorMode {
    /// Input is notation; output is a single SVG image.
    Svg,
    /// Input is a strict XML document; inline diagrams are standalone SVG.
    Xml,
    /// Input is HTML; inline diagrams are embedded SVG and tag matching is
    /// lenient.
    Html,
}

impl ProcessorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Xml => "xml",
            Self::Html => "html",
        }
    }

    /// Returns `true` for the modes that process host documents.
    pub fn is_document(&self) -> bool {
        !matches!(self, Self::Svg)
    }
}

impl FromStr for ProcessorMode {
    type Err = FrettyError;

    /// Parses `svg`, `xml` or `html`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "xml" => Ok(Self::Xml),
            "html" => Ok(Self::Html),
            _ => Err(FrettyError::UnknownProcessorMode(s.to_string())),
        }
    }
}

impl fmt::Display for ProcessorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings read from the attributes of one tag.
#[derive(Debug, Default)]
struct TagAttributes {
    width: Option<f32>,
    height: Option<f32>,
    image: Option<String>,
}

/// Replaces diagram tags in a document with rendered diagrams.
///
/// # Examples
///
/// ```
/// use fretty::{DiagramBuilder, FrettyError, embed::{Embedder, ProcessorMode}, image::ImageSink};
///
/// struct NoImages;
///
/// impl ImageSink for NoImages {
///     fn write_image(&self, _name: &str, _svg: &str) -> Result<(), FrettyError> {
///         Ok(())
///     }
/// }
///
/// let builder = DiagramBuilder::default();
/// let embedder = Embedder::new(&builder, ProcessorMode::Html, &NoImages);
/// let html = embedder.process("<p><fretty>Am\n-(1)</fretty></p>").unwrap();
///
/// assert!(html.starts_with("<p><svg"));
/// assert!(html.ends_with("</svg></p>"));
/// ```
pub struct Embedder<'a> {
    builder: &'a DiagramBuilder,
    mode: ProcessorMode,
    sink: &'a dyn ImageSink,
    tag: String,
}

impl<'a> Embedder<'a> {
    pub fn new(builder: &'a DiagramBuilder, mode: ProcessorMode, sink: &'a dyn ImageSink) -> Self {
        Self {
            builder,
            mode,
            sink,
            tag: DEFAULT_TAG.to_string(),
        }
    }

    /// Replace elements named `tag` instead of `fretty`.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Processes a whole document and returns the rewritten markup.
    ///
    /// # Errors
    ///
    /// - [`FrettyError::Embed`] for malformed documents, bad tag attributes
    ///   or when called in [`ProcessorMode::Svg`]
    /// - [`FrettyError::Parse`] when the notation of a tag is malformed
    /// - errors of the image sink
    pub fn process(&self, document: &str) -> Result<String, FrettyError> {
        if !self.mode.is_document() {
            return Err(FrettyError::Embed(format!(
                "processor mode `{}` does not embed into documents",
                self.mode
            )));
        }

        let mut reader = Reader::from_str(document);
        reader.check_end_names(self.mode == ProcessorMode::Xml);
        let mut writer = Writer::new(Vec::new());
        let mut replaced = 0usize;

        loop {
            match reader.read_event()? {
                Event::Eof => break,
                Event::Start(start) if self.is_tag(start.name().as_ref()) => {
                    let notation = self.read_notation(&mut reader)?;
                    self.replace(&mut writer, &start, &notation)?;
                    replaced += 1;
                }
                Event::Empty(start) if self.is_tag(start.name().as_ref()) => {
                    self.replace(&mut writer, &start, "")?;
                    replaced += 1;
                }
                event => writer.write_event(event)?,
            }
        }

        info!(
            mode:% = self.mode,
            tag = self.tag.as_str(),
            replaced = replaced;
            "Document processed"
        );
        String::from_utf8(writer.into_inner())
            .map_err(|err| FrettyError::Embed(format!("output is not UTF-8: {err}")))
    }

    fn is_tag(&self, name: &[u8]) -> bool {
        match self.mode {
            ProcessorMode::Html => name.eq_ignore_ascii_case(self.tag.as_bytes()),
            _ => name == self.tag.as_bytes(),
        }
    }

    /// Collects the unescaped text up to the closing tag.
    fn read_notation(&self, reader: &mut Reader<&[u8]>) -> Result<String, FrettyError> {
        let mut notation = String::new();
        loop {
            match reader.read_event()? {
                Event::Text(text) => notation.push_str(&text.unescape()?),
                Event::CData(data) => notation.push_str(&String::from_utf8_lossy(&data)),
                Event::Comment(_) => {}
                Event::End(end) if self.is_tag(end.name().as_ref()) => return Ok(notation),
                Event::Eof => {
                    return Err(FrettyError::Embed(format!(
                        "unclosed <{}> element",
                        self.tag
                    )));
                }
                other => {
                    return Err(FrettyError::Embed(format!(
                        "unexpected markup inside <{}>: {other:?}",
                        self.tag
                    )));
                }
            }
        }
    }

    fn read_attributes(&self, start: &BytesStart<'_>) -> Result<TagAttributes, FrettyError> {
        let mut attributes = TagAttributes::default();
        let parsed = match self.mode {
            ProcessorMode::Html => start.html_attributes(),
            _ => start.attributes(),
        };

        for attribute in parsed {
            let attribute = attribute.map_err(|err| FrettyError::Embed(err.to_string()))?;
            let value = attribute.unescape_value()?;
            match attribute.key.as_ref().to_ascii_lowercase().as_slice() {
                b"width" => attributes.width = Some(parse_dimension("width", &value)?),
                b"height" => attributes.height = Some(parse_dimension("height", &value)?),
                b"image" => attributes.image = Some(value.into_owned()),
                _ => {}
            }
        }
        Ok(attributes)
    }

    fn replace(
        &self,
        writer: &mut Writer<Vec<u8>>,
        start: &BytesStart<'_>,
        notation: &str,
    ) -> Result<(), FrettyError> {
        let attributes = self.read_attributes(start)?;
        let options = RenderOptions::new().with_size(attributes.width, attributes.height);

        // Strip the indentation of the element's text from every line.
        let lines = notation.lines().map(str::trim);

        match attributes.image {
            Some(name) => {
                let svg = self.builder.generate_svg(lines, &options)?;
                self.sink.write_image(&name, &svg)?;
                debug!(image = name.as_str(); "Tag replaced with image reference");

                let mut img = BytesStart::new("img");
                img.push_attribute(("src", name.as_str()));
                if let Some(width) = attributes.width {
                    img.push_attribute(("width", width.to_string().as_str()));
                }
                if let Some(height) = attributes.height {
                    img.push_attribute(("height", height.to_string().as_str()));
                }
                writer.write_event(Event::Empty(img))?;
            }
            None => {
                let options = options.with_embedded(self.mode == ProcessorMode::Html);
                let svg = self.builder.generate_svg(lines, &options)?;
                debug!(bytes = svg.len(); "Tag replaced with inline SVG");
                writer.write_event(Event::Text(BytesText::from_escaped(svg)))?;
            }
        }
        Ok(())
    }
}

fn parse_dimension(name: &str, value: &str) -> Result<f32, FrettyError> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|dimension| dimension.is_finite() && *dimension > 0.0)
        .ok_or_else(|| {
            FrettyError::Embed(format!(
                "attribute `{name}` must be a positive number, got `{value}`"
            ))
        })
}
