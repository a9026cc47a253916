//! Fretty CLI library
//!
//! This module contains the core CLI logic: it resolves the processor mode,
//! loads the configuration and routes the input through the renderer or the
//! document embedder.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use log::{debug, info};

use fretty::{
    DiagramBuilder, FrettyError, RenderOptions,
    embed::{Embedder, ProcessorMode},
    image::FileImageSink,
    raster,
};

/// Run the Fretty CLI application
///
/// In `svg` mode the input is notation and the output is one diagram. In
/// `xml` and `html` modes the input is a document whose `<fretty>` tags
/// are replaced; referenced image files land next to the output.
///
/// # Errors
///
/// Returns `FrettyError` for:
/// - an unknown processor mode, before any input is read
/// - configuration loading or validation errors
/// - file I/O errors
/// - notation parse errors
/// - malformed documents and image conversion errors
pub fn run(args: &Args) -> Result<(), FrettyError> {
    let mode: ProcessorMode = args.mode.parse()?;

    info!(
        input_path = args.input,
        output_path:? = args.output,
        mode:% = mode;
        "Processing input"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let builder = DiagramBuilder::new(app_config);

    let source = fs::read_to_string(&args.input)?;

    match mode {
        ProcessorMode::Svg => render_notation(&builder, args, &source),
        ProcessorMode::Xml | ProcessorMode::Html => embed_document(&builder, args, mode, &source),
    }
}

fn render_notation(builder: &DiagramBuilder, args: &Args, source: &str) -> Result<(), FrettyError> {
    let diagram = builder.parse(source)?;

    let output = args.output.as_deref().map(Path::new);
    // Image files are always standalone documents.
    let embedded = args.embedded && !output.is_some_and(raster::is_png);
    let options = RenderOptions::default()
        .with_size(args.width, args.height)
        .with_embedded(embedded);
    let svg = builder.render_svg(&diagram, &options)?;

    match output {
        Some(path) => raster::write_image(path, &svg),
        None => print_output(&svg),
    }
}

fn embed_document(
    builder: &DiagramBuilder,
    args: &Args,
    mode: ProcessorMode,
    document: &str,
) -> Result<(), FrettyError> {
    let image_dir = args
        .output
        .as_deref()
        .and_then(|output| Path::new(output).parent())
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let sink = FileImageSink::new(image_dir);
    debug!(image_dir:? = sink.dir(); "Images referenced by tags are written here");

    let processed = Embedder::new(builder, mode, &sink).process(document)?;

    match &args.output {
        Some(path) => {
            fs::write(path, processed)?;
            info!(output_file = path.as_str(); "Document written");
            Ok(())
        }
        None => print_output(&processed),
    }
}

fn print_output(text: &str) -> Result<(), FrettyError> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}
