//! Lexical analyzer for one line of fretboard notation.
//!
//! The public entry point is [`tokenize`], which keeps going after an
//! unexpected character so that every bad character of a line is reported.

use log::trace;
use winnow::{
    Parser as _,
    combinator::alt,
    error::ModalResult,
    stream::{LocatingSlice, Location, Stream},
    token::{any, one_of, take_while},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
    tokens::{GROUP_CLOSERS, GROUP_OPENERS, PositionedToken, Token},
};

type Input<'a> = LocatingSlice<&'a str>;

fn whitespace(input: &mut Input<'_>) -> ModalResult<Token> {
    take_while(1.., |c: char| c.is_whitespace())
        .value(Token::Whitespace)
        .parse_next(input)
}

fn group_open(input: &mut Input<'_>) -> ModalResult<Token> {
    one_of(GROUP_OPENERS).map(Token::GroupOpen).parse_next(input)
}

fn group_close(input: &mut Input<'_>) -> ModalResult<Token> {
    one_of(GROUP_CLOSERS).map(Token::GroupClose).parse_next(input)
}

fn single_char_token(input: &mut Input<'_>) -> ModalResult<Token> {
    alt((
        '|'.value(Token::Barre),
        'X'.value(Token::Mute),
        '+'.value(Token::Open),
        '-'.value(Token::Filler),
    ))
    .parse_next(input)
}

/// Any printable character not claimed by another token.
fn symbol(input: &mut Input<'_>) -> ModalResult<Token> {
    any.verify(|c: &char| !c.is_control())
        .map(Token::Symbol)
        .parse_next(input)
}

fn positioned_token(input: &mut Input<'_>) -> ModalResult<(Token, std::ops::Range<usize>)> {
    let start_pos = input.current_token_start();

    let token = alt((
        whitespace, // Must come before symbol; tabs are control characters
        group_open,
        group_close,
        single_char_token,
        symbol,
    ))
    .parse_next(input)?;

    let end_pos = input.current_token_start();
    Ok((token, start_pos..end_pos))
}

/// Accumulates tokens and diagnostics for one line.
struct Lexer {
    base_offset: usize,
    line_number: usize,
    tokens: Vec<PositionedToken>,
    diagnostics: DiagnosticCollector,
}

impl Lexer {
    fn new(base_offset: usize, line_number: usize) -> Self {
        Self {
            base_offset,
            line_number,
            tokens: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    fn span(&self, range: std::ops::Range<usize>) -> Span {
        Span::new(self.base_offset + range.start..self.base_offset + range.end)
    }

    fn tokenize(&mut self, mut input: Input<'_>) {
        while !input.is_empty() {
            match positioned_token(&mut input) {
                Ok((token, range)) => {
                    let span = self.span(range);
                    self.tokens.push(PositionedToken::new(token, span));
                }
                Err(_) => {
                    let error_pos = input.current_token_start();
                    let rejected = input.next_token();
                    let span = self.span(error_pos..input.current_token_start());
                    let diagnostic = self.unexpected_character(rejected, span);
                    self.diagnostics.emit(diagnostic);
                }
            }
        }
    }

    fn unexpected_character(&self, rejected: Option<char>, span: Span) -> Diagnostic {
        let message = match rejected {
            Some(c) => format!(
                "unexpected character `{}` on line {}",
                c.escape_unicode(),
                self.line_number
            ),
            None => format!("unexpected character on line {}", self.line_number),
        };
        Diagnostic::error(message)
            .with_code(ErrorCode::E001)
            .with_label(span, ErrorCode::E001.description())
            .with_help("remove control characters from the notation")
    }

    fn finish(self) -> Result<Vec<PositionedToken>, ParseError> {
        trace!(line = self.line_number, tokens = self.tokens.len(); "Line tokenized");
        self.diagnostics.finish().map(|()| self.tokens)
    }
}

/// Tokenize one line of notation.
///
/// `base_offset` is the byte offset of the line within the whole source;
/// every span of the result is shifted by it. `line_number` is one-based
/// and only used in diagnostic messages.
///
/// # Returns
///
/// - `Ok(tokens)` - Every character was recognized
/// - `Err(ParseError)` - One diagnostic per unexpected character
pub fn tokenize(
    line: &str,
    base_offset: usize,
    line_number: usize,
) -> Result<Vec<PositionedToken>, ParseError> {
    let mut lexer = Lexer::new(base_offset, line_number);
    lexer.tokenize(LocatingSlice::new(line));
    lexer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<Token> {
        tokenize(line, 0, 1)
            .unwrap()
            .into_iter()
            .map(|positioned| positioned.token)
            .collect()
    }

    #[test]
    fn test_single_tokens() {
        assert_eq!(kinds("("), vec![Token::GroupOpen('(')]);
        assert_eq!(kinds(">"), vec![Token::GroupClose('>')]);
        assert_eq!(kinds("|"), vec![Token::Barre]);
        assert_eq!(kinds("X"), vec![Token::Mute]);
        assert_eq!(kinds("+"), vec![Token::Open]);
        assert_eq!(kinds("-"), vec![Token::Filler]);
        assert_eq!(kinds("O"), vec![Token::Symbol('O')]);
        assert_eq!(kinds("o"), vec![Token::Symbol('o')]);
        assert_eq!(kinds("x"), vec![Token::Symbol('x')]);
    }

    #[test]
    fn test_whitespace_run_is_one_token() {
        assert_eq!(
            kinds("- \t -"),
            vec![Token::Filler, Token::Whitespace, Token::Filler]
        );
    }

    #[test]
    fn test_spans_are_shifted_by_base_offset() {
        let tokens = tokenize("-(1)", 10, 2).unwrap();
        let spans: Vec<_> = tokens.iter().map(|t| t.span.to_range()).collect();
        assert_eq!(spans, vec![10..11, 11..12, 12..13, 13..14]);
    }

    #[test]
    fn test_multibyte_symbol_span() {
        let tokens = tokenize("♯-", 0, 1).unwrap();
        assert_eq!(tokens[0].token, Token::Symbol('♯'));
        assert_eq!(tokens[0].span.to_range(), 0..'♯'.len_utf8());
        assert_eq!(tokens[1].span.start(), '♯'.len_utf8());
    }

    #[test]
    fn test_control_characters_are_all_reported() {
        let err = tokenize("-\u{7}-\u{1b}", 5, 3).unwrap_err();

        assert_eq!(err.diagnostics().len(), 2);
        let first = &err.diagnostics()[0];
        assert_eq!(first.code(), Some(ErrorCode::E001));
        assert!(first.message().contains("line 3"));
        assert_eq!(first.labels()[0].span().to_range(), 6..7);
        assert_eq!(err.diagnostics()[1].labels()[0].span().to_range(), 8..9);
    }
}
