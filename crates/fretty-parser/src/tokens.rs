//! Tokens of the fretboard notation.
//!
//! Every character of a string line maps to exactly one token, except runs
//! of whitespace which collapse into a single [`Token::Whitespace`].

use crate::span::Span;

/// Characters that open a marking group.
pub const GROUP_OPENERS: [char; 4] = ['(', '[', '{', '<'];

/// Characters that close a marking group without making it a barre.
pub const GROUP_CLOSERS: [char; 4] = [')', ']', '}', '>'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `(`, `[`, `{` or `<`.
    GroupOpen(char),
    /// `)`, `]`, `}` or `>`.
    GroupClose(char),
    /// `|`: a bare barre marking, or the closer of a barre group.
    Barre,
    /// `X`
    Mute,
    /// `+`
    Open,
    /// `-`: an empty fret cell.
    Filler,
    /// Any other printable character.
    Symbol(char),
    Whitespace,
}

impl Token {
    /// The source character this token stands for.
    ///
    /// Returns `None` for whitespace, which never becomes part of a label.
    pub fn as_char(&self) -> Option<char> {
        match *self {
            Token::GroupOpen(c) | Token::GroupClose(c) | Token::Symbol(c) => Some(c),
            Token::Barre => Some('|'),
            Token::Mute => Some('X'),
            Token::Open => Some('+'),
            Token::Filler => Some('-'),
            Token::Whitespace => None,
        }
    }
}

/// A token together with its location in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionedToken {
    pub token: Token,
    pub span: Span,
}

impl PositionedToken {
    pub fn new(token: Token, span: Span) -> Self {
        Self { token, span }
    }
}
