//! Error codes for the Fretty diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Lexer errors
//! - `E1xx` - Line scanner errors
//! - `W2xx` - Warnings

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Lexer Errors (E0xx)
    // =========================================================================
    /// Unexpected character.
    ///
    /// A control character that cannot appear in the rendered markup.
    E001,

    // =========================================================================
    // Line Scanner Errors (E1xx)
    // =========================================================================
    /// Unterminated marking group.
    ///
    /// A group was opened with `(`, `[`, `{` or `<` and the line ended
    /// before a closing `)`, `]`, `}`, `>` or `|`.
    E100,

    /// Unmatched group close.
    ///
    /// `)`, `]`, `}` or `>` appeared outside of a marking group.
    E101,

    /// Nested marking group.
    ///
    /// A group opener appeared inside an open group. Groups do not nest.
    E102,

    // =========================================================================
    // Warnings (W2xx)
    // =========================================================================
    /// String marked both muted and open.
    ///
    /// Both marks are drawn on top of each other.
    W200,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::W200 => "W200",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unexpected character",
            ErrorCode::E100 => "unterminated marking group",
            ErrorCode::E101 => "unmatched group close",
            ErrorCode::E102 => "nested marking group",
            ErrorCode::W200 => "string both muted and open",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::W200.to_string(), "W200");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E100.description(), "unterminated marking group");
        assert_eq!(ErrorCode::E101.description(), "unmatched group close");
        assert_eq!(ErrorCode::E102.description(), "nested marking group");
    }
}
