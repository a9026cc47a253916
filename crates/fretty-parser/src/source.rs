//! Splitting notation input into positioned lines.

/// One line of notation with its location in the whole input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SourceLine<'a> {
    /// One-based line number, counting blank lines.
    pub number: usize,
    /// Byte offset of the first character of `text`.
    pub offset: usize,
    /// Line content without its terminator.
    pub text: &'a str,
}

impl SourceLine<'_> {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Splits `source` on `\n`, stripping a trailing `\r` from each line.
pub(crate) fn lines_of(source: &str) -> impl Iterator<Item = SourceLine<'_>> {
    source
        .split_inclusive('\n')
        .scan(0, |offset, chunk| {
            let start = *offset;
            *offset += chunk.len();
            Some((start, chunk))
        })
        .enumerate()
        .map(|(index, (offset, chunk))| SourceLine {
            number: index + 1,
            offset,
            text: chunk.trim_end_matches(['\r', '\n']),
        })
}

/// Positions pre-split lines as if they were joined with `\n`.
pub(crate) fn lines_joined<'a, S: AsRef<str>>(
    lines: &'a [S],
) -> impl Iterator<Item = SourceLine<'a>> {
    lines
        .iter()
        .scan(0, |offset, line| {
            let text = line.as_ref();
            let start = *offset;
            *offset += text.len() + 1;
            Some((start, text))
        })
        .enumerate()
        .map(|(index, (offset, text))| SourceLine {
            number: index + 1,
            offset,
            text,
        })
}
