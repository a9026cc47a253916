//! Command-line argument definitions for the Fretty CLI.
//!
//! The processor mode decides what the input is: plain notation for `svg`,
//! or a document with `<fretty>` tags for `xml` and `html`.

use clap::Parser;

/// Command-line arguments for the Fretty diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input notation file or document
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Output file; printed to stdout when omitted. A `.png` name is rasterized.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Processor mode (svg, xml, html)
    #[arg(short, long, default_value = "svg")]
    pub mode: String,

    /// Explicit `width` attribute for the root svg element
    #[arg(long)]
    pub width: Option<f32>,

    /// Explicit `height` attribute for the root svg element
    #[arg(long)]
    pub height: Option<f32>,

    /// Omit the XML namespace declarations from the svg element
    #[arg(long)]
    pub embedded: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Arguments for rendering `input` with every option at its default.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: None,
            mode: "svg".to_string(),
            width: None,
            height: None,
            embedded: false,
            config: None,
            log_level: "info".to_string(),
        }
    }

    /// Where the result goes, for log messages: the output path or `stdout`.
    pub fn output_target(&self) -> &str {
        self.output.as_deref().unwrap_or("stdout")
    }
}
