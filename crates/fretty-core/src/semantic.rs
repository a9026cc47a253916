//! Semantic fretboard model.
//!
//! These types are produced by the notation parser and consumed by the
//! renderer. They are immutable once built.
//!
//! # Pipeline Position
//!
//! ```text
//! Notation lines
//!     ↓ lexer + line scanner
//! Semantic Model (these types)
//!     ↓ renderer
//! SVG
//! ```

use std::fmt;

/// The drawn outline of a [`Marking`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MarkingShape {
    /// Filled circle.
    #[default]
    Round,
    /// Filled axis-aligned square.
    Square,
}

impl MarkingShape {
    /// Returns the shape selected by a group opener or bare symbol.
    ///
    /// `[` and `#` select [`MarkingShape::Square`]; everything else is round.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            '[' | '#' => Self::Square,
            _ => Self::Round,
        }
    }
}

impl fmt::Display for MarkingShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Round => write!(f, "round"),
            Self::Square => write!(f, "square"),
        }
    }
}

/// One annotated fret position on one string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marking {
    fret: usize,
    string: usize,
    label: String,
    shape: MarkingShape,
    is_barre: bool,
}

impl Marking {
    /// Creates a non-barre marking.
    pub fn new(fret: usize, string: usize, label: impl Into<String>, shape: MarkingShape) -> Self {
        Self {
            fret,
            string,
            label: label.into(),
            shape,
            is_barre: false,
        }
    }

    /// Sets whether this marking is a barre end point.
    pub fn with_barre(mut self, is_barre: bool) -> Self {
        self.is_barre = is_barre;
        self
    }

    /// Zero-based fret column.
    pub fn fret(&self) -> usize {
        self.fret
    }

    /// Zero-based string row.
    pub fn string(&self) -> usize {
        self.string
    }

    /// Display text; empty when the marking carries no label.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn has_label(&self) -> bool {
        !self.label.is_empty()
    }

    pub fn shape(&self) -> MarkingShape {
        self.shape
    }

    pub fn is_barre(&self) -> bool {
        self.is_barre
    }
}

/// One row of the diagram, corresponding to one instrument string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstrumentString {
    index: usize,
    markings: Vec<Marking>,
    fret_count: usize,
    is_muted: bool,
    is_open: bool,
}

impl InstrumentString {
    /// Creates an empty row at `index`.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    /// Sets the markings of this row, in left-to-right order.
    pub fn with_markings(mut self, markings: Vec<Marking>) -> Self {
        self.markings = markings;
        self
    }

    /// Sets the number of fret cells this row declares.
    pub fn with_fret_count(mut self, fret_count: usize) -> Self {
        self.fret_count = fret_count;
        self
    }

    pub fn with_muted(mut self, is_muted: bool) -> Self {
        self.is_muted = is_muted;
        self
    }

    pub fn with_open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn markings(&self) -> &[Marking] {
        &self.markings
    }

    pub fn fret_count(&self) -> usize {
        self.fret_count
    }

    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns the first marking placed at `fret`, if any.
    pub fn marking_at(&self, fret: usize) -> Option<&Marking> {
        self.markings.iter().find(|marking| marking.fret == fret)
    }
}

/// A barre indicator joining same-fret barre markings across strings.
///
/// Only the first and last qualifying strings are kept; any markings in
/// between are covered by the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarreSpan {
    fret: usize,
    first_string: usize,
    last_string: usize,
}

impl BarreSpan {
    pub fn fret(&self) -> usize {
        self.fret
    }

    pub fn first_string(&self) -> usize {
        self.first_string
    }

    pub fn last_string(&self) -> usize {
        self.last_string
    }
}

/// The full parsed fretboard: a caption and its rows.
///
/// # Examples
///
/// ```
/// # use fretty_core::semantic::{Diagram, InstrumentString};
/// let diagram = Diagram::new("C", vec![InstrumentString::new(0).with_fret_count(3)]);
/// assert_eq!(diagram.string_count(), 1);
/// assert_eq!(diagram.fret_count(), 3);
///
/// let empty = Diagram::new("", Vec::new());
/// assert_eq!(empty.fret_count(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagram {
    caption: String,
    strings: Vec<InstrumentString>,
}

impl Diagram {
    pub fn new(caption: impl Into<String>, strings: Vec<InstrumentString>) -> Self {
        Self {
            caption: caption.into(),
            strings,
        }
    }

    /// The start label shown above the grid (fret number or chord name).
    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn strings(&self) -> &[InstrumentString] {
        &self.strings
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    /// The widest row's fret count, or 0 when the diagram has no rows.
    pub fn fret_count(&self) -> usize {
        self.strings
            .iter()
            .map(InstrumentString::fret_count)
            .max()
            .unwrap_or(0)
    }

    /// Returns the first marking at (`fret`, `string`), if any.
    pub fn marking_at(&self, fret: usize, string: usize) -> Option<&Marking> {
        self.strings.get(string)?.marking_at(fret)
    }

    /// Collects one [`BarreSpan`] per fret column holding two or more
    /// barre markings, in fret order.
    pub fn barre_spans(&self) -> Vec<BarreSpan> {
        (0..self.fret_count())
            .filter_map(|fret| {
                let mut rows = self
                    .strings
                    .iter()
                    .filter(|string| string.marking_at(fret).is_some_and(Marking::is_barre))
                    .map(InstrumentString::index);
                let first = rows.next()?;
                let last = rows.last()?;
                Some(BarreSpan {
                    fret,
                    first_string: first,
                    last_string: last,
                })
            })
            .collect()
    }
}
