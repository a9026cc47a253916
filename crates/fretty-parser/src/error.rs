//! Error and diagnostic system for the Fretty parser.
//!
//! - Error codes for documentation and searchability
//! - Labeled spans pointing into the notation source
//! - Severity levels
//! - Diagnostic collector for accumulating errors across lines
//!
//! A [`Diagnostic`] describes a single problem. Every line of the notation
//! is checked, and all diagnostics are returned together in a
//! [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use fretty_parser::error::{Diagnostic, ErrorCode};
//! # use fretty_parser::Span;
//!
//! let diag = Diagnostic::error("unterminated marking group on line 3")
//!     .with_code(ErrorCode::E100)
//!     .with_label(Span::new(14..15), "group opened here")
//!     .with_help("close the group with `)` or `|`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
