//! Unit tests for the line scanner.
//!
//! Each test scans a single string line and checks the resulting row or
//! the diagnostics it produced.

use fretty_core::semantic::{InstrumentString, MarkingShape};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    parser,
    source::SourceLine,
};

/// Scan `text` as the string line at index 0 on line 2.
fn scan(text: &str) -> (Option<InstrumentString>, Vec<Diagnostic>) {
    let line = SourceLine {
        number: 2,
        offset: 0,
        text,
    };
    let mut collector = DiagnosticCollector::new();
    let string = parser::parse_string(0, &line, &mut collector);
    let diagnostics = match collector.finish() {
        Ok(()) => Vec::new(),
        Err(err) => err.into_diagnostics(),
    };
    (string, diagnostics)
}

fn assert_scans(text: &str) -> InstrumentString {
    match scan(text) {
        (Some(string), diagnostics) if diagnostics.is_empty() => string,
        (_, diagnostics) => panic!("Expected `{text}` to scan, got {diagnostics:?}"),
    }
}

fn assert_fails_with(text: &str, code: ErrorCode) -> Diagnostic {
    let (string, diagnostics) = scan(text);
    assert!(string.is_none(), "Expected `{text}` to fail");
    assert_eq!(diagnostics.len(), 1, "{diagnostics:?}");
    let diagnostic = diagnostics.into_iter().next().unwrap();
    assert_eq!(diagnostic.code(), Some(code));
    diagnostic
}

#[test]
fn test_fillers_only() {
    let string = assert_scans("-----");
    assert_eq!(string.fret_count(), 5);
    assert!(string.markings().is_empty());
    assert!(!string.is_muted());
    assert!(!string.is_open());
}

#[test]
fn test_mute_and_open_take_a_fret_cell() {
    let string = assert_scans("X-+-");
    assert!(string.is_muted());
    assert!(string.is_open());
    assert_eq!(string.fret_count(), 4);
    assert!(string.markings().is_empty());
}

#[test]
fn test_marking_after_mute_sits_on_next_cell() {
    let string = assert_scans("X(3)+");
    assert_eq!(string.fret_count(), 3);
    assert_eq!(string.markings()[0].fret(), 1);
    assert_eq!(string.markings()[0].label(), "3");
}

#[test]
fn test_repeated_mute_is_idempotent() {
    let string = assert_scans("XX--X");
    assert!(string.is_muted());
    assert!(!string.is_open());
    assert_eq!(string.fret_count(), 5);
}

#[test]
fn test_single_character_markings() {
    let string = assert_scans("-1-R");
    let markings = string.markings();

    assert_eq!(string.fret_count(), 4);
    assert_eq!(markings.len(), 2);
    assert_eq!(markings[0].fret(), 1);
    assert_eq!(markings[0].label(), "1");
    assert_eq!(markings[1].fret(), 3);
    assert_eq!(markings[1].label(), "R");
    assert!(markings.iter().all(|m| m.shape() == MarkingShape::Round));
}

#[test]
fn test_labelless_symbols() {
    let string = assert_scans("o#|");
    let markings = string.markings();

    assert_eq!(markings.len(), 3);
    assert!(markings.iter().all(|m| !m.has_label()));
    assert_eq!(markings[0].shape(), MarkingShape::Round);
    assert_eq!(markings[1].shape(), MarkingShape::Square);
    assert!(!markings[1].is_barre());
    assert_eq!(markings[2].shape(), MarkingShape::Round);
    assert!(markings[2].is_barre());
}

#[test]
fn test_group_label_is_one_fret() {
    let string = assert_scans("(12)");
    assert_eq!(string.fret_count(), 1);
    assert_eq!(string.markings().len(), 1);
    assert_eq!(string.markings()[0].fret(), 0);
    assert_eq!(string.markings()[0].label(), "12");
    assert_eq!(string.markings()[0].shape(), MarkingShape::Round);
}

#[test]
fn test_square_group_and_mixed_closers() {
    let string = assert_scans("[R>{b3)<5]");
    let markings = string.markings();

    assert_eq!(markings.len(), 3);
    assert_eq!(markings[0].label(), "R");
    assert_eq!(markings[0].shape(), MarkingShape::Square);
    assert_eq!(markings[1].label(), "b3");
    assert_eq!(markings[1].shape(), MarkingShape::Round);
    assert_eq!(markings[2].label(), "5");
}

#[test]
fn test_group_keeps_special_characters_verbatim() {
    let string = assert_scans("(X+-o#)");
    assert_eq!(string.markings()[0].label(), "X+-o#");
    assert!(!string.is_muted());
    assert!(!string.is_open());
    assert_eq!(string.fret_count(), 1);
}

#[test]
fn test_whitespace_is_cosmetic() {
    let string = assert_scans(" - ( 1 2 ) - ");
    assert_eq!(string.fret_count(), 3);
    assert_eq!(string.markings()[0].label(), "12");
    assert_eq!(string.markings()[0].fret(), 1);
}

#[test]
fn test_barre_group() {
    let string = assert_scans("--(1|");
    let marking = &string.markings()[0];
    assert_eq!(marking.fret(), 2);
    assert_eq!(marking.label(), "1");
    assert!(marking.is_barre());
}

#[test]
fn test_unterminated_group() {
    let diagnostic = assert_fails_with("--(12", ErrorCode::E100);

    assert!(diagnostic.message().contains("line 2"));
    assert_eq!(diagnostic.labels()[0].span().to_range(), 2..3);
    assert_eq!(diagnostic.help(), Some("close the group with `)` or `|`"));
}

#[test]
fn test_unterminated_square_group_suggests_bracket() {
    let diagnostic = assert_fails_with("[R", ErrorCode::E100);
    assert_eq!(diagnostic.help(), Some("close the group with `]` or `|`"));
}

#[test]
fn test_stray_closer() {
    let diagnostic = assert_fails_with("-1)-", ErrorCode::E101);
    assert_eq!(diagnostic.message(), "unmatched `)` on line 2");
    assert_eq!(diagnostic.labels()[0].span().to_range(), 2..3);
}

#[test]
fn test_nested_group() {
    let diagnostic = assert_fails_with("(1(2))", ErrorCode::E102);

    assert_eq!(diagnostic.labels().len(), 2);
    assert_eq!(diagnostic.labels()[0].span().to_range(), 2..3);
    assert_eq!(diagnostic.labels()[1].span().to_range(), 0..1);
}

#[test]
fn test_failure_reports_first_problem_only() {
    // The stray `)` after the nesting error is not reported separately.
    assert_fails_with("((1))))", ErrorCode::E102);
}

#[test]
fn test_muted_and_open_warns_but_scans() {
    let (string, diagnostics) = scan("X+--");
    assert!(string.is_some());
    // Warnings never fail the collector.
    assert!(diagnostics.is_empty());
}
