//! # Fretty Parser
//!
//! Parser for the Fretty fretboard notation. Turns notation text into the
//! semantic [`Diagram`] consumed by the renderer.
//!
//! ## Notation
//!
//! Blank lines are ignored. The first remaining line is the caption; each
//! following line describes one instrument string:
//!
//! - `-` is an empty fret cell
//! - `X` mutes the string, `+` marks it as played open; both fill a cell
//! - any other character is a one-character marking; `o` and `#` draw
//!   without a label, `#` as a square
//! - `(12)`, `[R>`, `{b3}` group a longer label; `[` draws a square
//! - a bare `|`, or `|` closing a group, marks a barre end point
//!
//! ## Usage
//!
//! ```
//! # use fretty_parser::{parse, ParseError};
//! fn main() -> Result<(), ParseError> {
//!     let diagram = parse("C\nX---\n---(3)\n--(2)\n-\n(1)\n-")?;
//!
//!     assert_eq!(diagram.caption(), "C");
//!     assert_eq!(diagram.string_count(), 6);
//!     assert!(diagram.strings()[0].is_muted());
//!     Ok(())
//! }
//! ```

pub mod error;
mod lexer;
mod parser;
#[cfg(test)]
mod parser_tests;
mod source;
mod span;
mod tokens;

pub use error::ParseError;
pub use span::Span;

use log::debug;

use fretty_core::semantic::Diagram;

use error::DiagnosticCollector;
use source::SourceLine;

/// Parse notation text into a diagram.
///
/// Lines may end in `\n` or `\r\n`. Diagnostic spans are byte offsets into
/// `source`.
///
/// # Errors
///
/// Returns a [`ParseError`] holding one diagnostic per malformed line when
/// any line fails. No partial diagram is returned.
pub fn parse(source: &str) -> Result<Diagram, ParseError> {
    build_diagram(source::lines_of(source))
}

/// Parse notation that is already split into lines.
///
/// Diagnostic spans are byte offsets into the lines joined with `\n`.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_lines<I, S>(lines: I) -> Result<Diagram, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<S> = lines.into_iter().collect();
    build_diagram(source::lines_joined(&lines))
}

fn build_diagram<'a>(lines: impl Iterator<Item = SourceLine<'a>>) -> Result<Diagram, ParseError> {
    let mut lines = lines.filter(|line| !line.is_blank());

    let Some(caption_line) = lines.next() else {
        debug!("Notation has no content");
        return Ok(Diagram::default());
    };

    let mut collector = DiagnosticCollector::new();
    let strings: Vec<_> = lines
        .enumerate()
        .filter_map(|(index, line)| parser::parse_string(index, &line, &mut collector))
        .collect();
    collector.finish()?;

    let diagram = Diagram::new(caption_line.text.trim(), strings);
    debug!(
        caption = diagram.caption(),
        strings = diagram.string_count(),
        frets = diagram.fret_count();
        "Notation parsed"
    );
    Ok(diagram)
}
