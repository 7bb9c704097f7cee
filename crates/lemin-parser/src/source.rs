//! Splitting source text into spanned lines.

use crate::Span;

/// One line of the source text, without its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'src> {
    text: &'src str,
    span: Span,
    number: usize,
}

impl<'src> SourceLine<'src> {
    /// Creates a line from its text, byte span, and 1-based line number.
    pub fn new(text: &'src str, span: Span, number: usize) -> Self {
        Self { text, span, number }
    }

    pub fn text(&self) -> &'src str {
        self.text
    }

    /// Byte range of the line text in the source.
    pub fn span(&self) -> Span {
        self.span
    }

    /// 1-based line number in the source.
    pub fn number(&self) -> usize {
        self.number
    }
}

/// Splits `source` into lines.
///
/// Both `\n` and `\r\n` terminate a line and are not part of the line text.
/// A trailing terminator does not produce an extra empty line.
///
/// # Examples
///
/// ```
/// use lemin_parser::source::split_lines;
///
/// let lines = split_lines("3\r\n##start\nhall 0 0");
/// let texts: Vec<_> = lines.iter().map(|line| line.text()).collect();
/// assert_eq!(texts, ["3", "##start", "hall 0 0"]);
/// assert_eq!(lines[2].span().start(), 12);
/// ```
pub fn split_lines(source: &str) -> Vec<SourceLine<'_>> {
    let mut lines = Vec::new();
    let mut offset = 0;

    for (index, raw) in source.split_inclusive('\n').enumerate() {
        let text = raw.strip_suffix('\n').unwrap_or(raw);
        let text = text.strip_suffix('\r').unwrap_or(text);
        lines.push(SourceLine::new(
            text,
            Span::new(offset..offset + text.len()),
            index + 1,
        ));
        offset += raw.len();
    }

    lines
}
