//! Accumulates diagnostics across every line of the notation so that all
//! problems are reported at once.

use log::warn;

use crate::error::{Diagnostic, ParseError};

#[derive(Debug, Default)]
pub(crate) struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic. Errors mark the collection as failed.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Record every diagnostic of an already failed line.
    pub fn emit_all(&mut self, err: ParseError) {
        for diagnostic in err.into_diagnostics() {
            self.emit(diagnostic);
        }
    }

    /// Returns all diagnostics if any error was emitted.
    ///
    /// Warnings of a successful parse go to the log.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.has_errors {
            return Err(ParseError::new(self.diagnostics));
        }
        for diagnostic in &self.diagnostics {
            warn!(diagnostic:% = diagnostic; "Notation warning");
        }
        Ok(())
    }
}
