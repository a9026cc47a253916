//! The error returned when notation fails to parse.

use std::fmt;

use crate::error::Diagnostic;

/// One or more diagnostics collected while parsing a notation.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// All diagnostics, in source order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.diagnostics.first() {
            write!(f, "{first}")?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(vec![diagnostic])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_error_display_single() {
        let err = ParseError::from(
            Diagnostic::error("nested marking group on line 2").with_code(ErrorCode::E102),
        );
        assert_eq!(
            err.to_string(),
            "error[E102]: nested marking group on line 2"
        );
    }

    #[test]
    fn test_parse_error_display_counts_the_rest() {
        let err = ParseError::new(vec![
            Diagnostic::error("unmatched `]` on line 2"),
            Diagnostic::error("unmatched `)` on line 3"),
            Diagnostic::error("unmatched `>` on line 4"),
        ]);
        assert_eq!(err.to_string(), "error: unmatched `]` on line 2 (+2 more)");
    }
}
