//! Line scanner turning the tokens of one string line into an
//! [`InstrumentString`].
//!
//! The scanner is an explicit state machine:
//!
//! ```text
//!            opener                       closer or `|`
//! Scanning ─────────▶ InGroup ─────────────────────────▶ Scanning
//!    │                   │
//!    │ stray closer      │ nested opener / end of line
//!    ▼                   ▼
//!  Failed              Failed
//! ```
//!
//! Whitespace is skipped in every state. Once `Failed`, the remaining
//! tokens of the line are ignored.

use std::mem;

use log::trace;

use fretty_core::semantic::{InstrumentString, Marking, MarkingShape};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    lexer,
    source::SourceLine,
    span::Span,
    tokens::{PositionedToken, Token},
};

/// Bare symbols that draw a marking without a label.
const LABELLESS_SYMBOLS: [char; 2] = ['o', '#'];

#[derive(Debug)]
struct OpenGroup {
    opener: char,
    span: Span,
    label: String,
}

#[derive(Debug)]
enum ScanState {
    Scanning,
    InGroup(OpenGroup),
    Failed(Diagnostic),
}

#[derive(Debug)]
struct LineScanner {
    index: usize,
    line_number: usize,
    fret: usize,
    markings: Vec<Marking>,
    is_muted: bool,
    is_open: bool,
    mute_span: Option<Span>,
    state: ScanState,
}

impl LineScanner {
    fn new(index: usize, line_number: usize) -> Self {
        Self {
            index,
            line_number,
            fret: 0,
            markings: Vec::new(),
            is_muted: false,
            is_open: false,
            mute_span: None,
            state: ScanState::Scanning,
        }
    }

    fn feed(&mut self, positioned: &PositionedToken) {
        if positioned.token == Token::Whitespace {
            return;
        }
        self.state = match mem::replace(&mut self.state, ScanState::Scanning) {
            ScanState::Scanning => self.scan(positioned),
            ScanState::InGroup(group) => self.extend_group(group, positioned),
            failed @ ScanState::Failed(_) => failed,
        };
    }

    fn scan(&mut self, positioned: &PositionedToken) -> ScanState {
        match positioned.token {
            Token::GroupOpen(opener) => {
                return ScanState::InGroup(OpenGroup {
                    opener,
                    span: positioned.span,
                    label: String::new(),
                });
            }
            Token::GroupClose(closer) => {
                return ScanState::Failed(self.unmatched_close(closer, positioned.span));
            }
            // `X` and `+` occupy a fret cell like a filler; the flags are idempotent.
            Token::Mute => {
                self.is_muted = true;
                self.mute_span.get_or_insert(positioned.span);
                self.fret += 1;
            }
            Token::Open => {
                self.is_open = true;
                self.fret += 1;
            }
            Token::Filler => self.fret += 1,
            Token::Barre => self.push_marking(String::new(), MarkingShape::Round, true),
            Token::Symbol(symbol) => {
                let label = if LABELLESS_SYMBOLS.contains(&symbol) {
                    String::new()
                } else {
                    symbol.to_string()
                };
                self.push_marking(label, MarkingShape::from_symbol(symbol), false);
            }
            Token::Whitespace => {}
        }
        ScanState::Scanning
    }

    fn extend_group(&mut self, mut group: OpenGroup, positioned: &PositionedToken) -> ScanState {
        match positioned.token {
            Token::GroupOpen(_) => ScanState::Failed(self.nested_group(&group, positioned.span)),
            Token::GroupClose(_) | Token::Barre => {
                let is_barre = positioned.token == Token::Barre;
                let shape = MarkingShape::from_symbol(group.opener);
                self.push_marking(group.label, shape, is_barre);
                ScanState::Scanning
            }
            token => {
                if let Some(c) = token.as_char() {
                    group.label.push(c);
                }
                ScanState::InGroup(group)
            }
        }
    }

    fn push_marking(&mut self, label: String, shape: MarkingShape, is_barre: bool) {
        self.markings
            .push(Marking::new(self.fret, self.index, label, shape).with_barre(is_barre));
        self.fret += 1;
    }

    fn unmatched_close(&self, closer: char, span: Span) -> Diagnostic {
        Diagnostic::error(format!(
            "unmatched `{closer}` on line {}",
            self.line_number
        ))
        .with_code(ErrorCode::E101)
        .with_label(span, "no marking group is open")
        .with_help(format!(
            "open a group before `{closer}` or remove it; a bare `|` marks a barre"
        ))
    }

    fn nested_group(&self, group: &OpenGroup, span: Span) -> Diagnostic {
        Diagnostic::error(format!(
            "nested marking group on line {}",
            self.line_number
        ))
        .with_code(ErrorCode::E102)
        .with_label(span, "nested group opened here")
        .with_secondary_label(group.span, "enclosing group opened here")
        .with_help("marking groups cannot be nested; close the enclosing group first")
    }

    fn unterminated_group(&self, group: &OpenGroup) -> Diagnostic {
        Diagnostic::error(format!(
            "unterminated marking group on line {}",
            self.line_number
        ))
        .with_code(ErrorCode::E100)
        .with_label(group.span, "group opened here but never closed")
        .with_help(format!(
            "close the group with `{}` or `|`",
            matching_closer(group.opener)
        ))
    }

    /// Ends the line, emitting its diagnostics into `collector`.
    fn finish(self, collector: &mut DiagnosticCollector) -> Option<InstrumentString> {
        match self.state {
            ScanState::Failed(diagnostic) => {
                collector.emit(diagnostic);
                None
            }
            ScanState::InGroup(ref group) => {
                collector.emit(self.unterminated_group(group));
                None
            }
            ScanState::Scanning => {
                if self.is_muted && self.is_open {
                    let span = self.mute_span.unwrap_or_default();
                    collector.emit(
                        Diagnostic::warning(format!(
                            "string on line {} is both muted and open",
                            self.line_number
                        ))
                        .with_code(ErrorCode::W200)
                        .with_label(span, "muted here"),
                    );
                }
                trace!(
                    string = self.index,
                    frets = self.fret,
                    markings = self.markings.len();
                    "String scanned"
                );
                Some(
                    InstrumentString::new(self.index)
                        .with_markings(self.markings)
                        .with_fret_count(self.fret)
                        .with_muted(self.is_muted)
                        .with_open(self.is_open),
                )
            }
        }
    }
}

fn matching_closer(opener: char) -> char {
    match opener {
        '[' => ']',
        '{' => '}',
        '<' => '>',
        _ => ')',
    }
}

/// Parse one string line into the row at `index`.
///
/// Returns `None` when the line has errors; they are emitted into
/// `collector` together with any warnings.
pub(crate) fn parse_string(
    index: usize,
    line: &SourceLine<'_>,
    collector: &mut DiagnosticCollector,
) -> Option<InstrumentString> {
    let tokens = match lexer::tokenize(line.text, line.offset, line.number) {
        Ok(tokens) => tokens,
        Err(err) => {
            collector.emit_all(err);
            return None;
        }
    };

    let mut scanner = LineScanner::new(index, line.number);
    for token in &tokens {
        scanner.feed(token);
    }
    scanner.finish(collector)
}
