//! Comment removal.
//!
//! Any line starting with `#` is a comment, except the `##start` and `##end`
//! directives, which survive verbatim.

use crate::{line::Directive, source::SourceLine};

/// Marker that starts a comment line.
pub const COMMENT_MARKER: char = '#';

/// Returns `true` if the line is a comment that should be dropped.
pub fn is_comment(text: &str) -> bool {
    text.starts_with(COMMENT_MARKER) && Directive::parse(text).is_none()
}

/// Removes comment lines, keeping order and the two directives.
///
/// # Examples
///
/// ```
/// use lemin_parser::{comments::strip_comments, source::split_lines};
///
/// let lines = split_lines("line1\n#line2\n##end\nline3");
/// let kept: Vec<_> = strip_comments(&lines).iter().map(|l| l.text()).collect();
/// assert_eq!(kept, ["line1", "##end", "line3"]);
/// ```
pub fn strip_comments<'src>(lines: &[SourceLine<'src>]) -> Vec<SourceLine<'src>> {
    lines
        .iter()
        .filter(|line| !is_comment(line.text()))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::source::split_lines;

    fn strip(source: &str) -> Vec<&str> {
        strip_comments(&split_lines(source))
            .iter()
            .map(SourceLine::text)
            .collect()
    }

    #[test]
    fn test_strip_comments_table() {
        let cases = [
            ("line1\n#line2\n##end\nline3", vec!["line1", "##end", "line3"]),
            ("line1\n#line2\n##start\nline3", vec!["line1", "##start", "line3"]),
            ("#only\n##other\n#", vec![]),
            ("##start \nroom 1 1", vec!["room 1 1"]),
        ];

        for (source, expected) in cases {
            assert_eq!(strip(source), expected, "source: {source:?}");
        }
    }

    #[test]
    fn test_is_comment() {
        assert!(is_comment("# a comment"));
        assert!(is_comment("##begin"));
        assert!(!is_comment("##start"));
        assert!(!is_comment("##end"));
        assert!(!is_comment("room 0 0"));
        assert!(!is_comment(""));
    }

    proptest! {
        #[test]
        fn strip_is_identity_without_comments(
            lines in prop::collection::vec("[a-z0-9 -]{0,12}", 0..20)
        ) {
            let source = lines.join("\n");
            let split = split_lines(&source);
            let stripped = strip_comments(&split);
            prop_assert_eq!(stripped, split);
        }
    }
}
