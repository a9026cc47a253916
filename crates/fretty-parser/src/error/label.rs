//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// A message attached to a span of the notation source.
///
/// Primary labels mark where the problem is; secondary labels add
/// context such as "group opened here".
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_label() {
        let label = Label::primary(Span::new(10..11), "group opened here");

        assert_eq!(label.span().start(), 10);
        assert_eq!(label.span().end(), 11);
        assert_eq!(label.message(), "group opened here");
        assert!(label.is_primary());
    }

    #[test]
    fn test_secondary_label() {
        let label = Label::secondary(Span::new(5..6), "enclosing group");

        assert!(!label.is_primary());
    }
}
