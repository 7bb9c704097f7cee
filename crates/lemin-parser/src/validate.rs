//! Structural validation of the comment-free line sequence.
//!
//! ## Rules, in order
//!
//! 1. At least [`MIN_LINES`] lines
//! 2. The first line is a positive integer (the ant count)
//! 3. No line has more than one dash
//! 4. No line has more than two spaces
//! 5. No two lines are identical
//! 6. The last line is not a directive
//! 7. Each directive is followed by a room line, and both directives exist
//!
//! Rules 3 to 7 apply to the lines after the ant count. The first rule that
//! fails stops validation; every line that breaks that rule is reported.

use std::collections::{HashMap, hash_map::Entry};

use log::debug;

use crate::{
    Span,
    comments::COMMENT_MARKER,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    line::{self, Directive},
    source::SourceLine,
};

/// Ant count, two lines per special room, and one connection.
pub(crate) const MIN_LINES: usize = 6;

const MAX_DASHES: usize = 1;
const MAX_SPACES: usize = 2;

/// Lines that passed every structural rule.
#[derive(Debug)]
pub(crate) struct Validated<'src> {
    /// Number of ants, always positive.
    pub(crate) ants: u64,
    /// Lines after the ant count, comments removed.
    pub(crate) lines: Vec<SourceLine<'src>>,
}

/// Applies rules 1 to 7 to the comment-free lines.
pub(crate) fn validate<'src>(lines: &[SourceLine<'src>]) -> Result<Validated<'src>, ParseError> {
    let Some((count_line, rest)) = lines.split_first().filter(|_| lines.len() >= MIN_LINES) else {
        return Err(too_few_lines(lines).into());
    };

    let ants = ant_count(count_line)?;
    debug!(ants; "Ant count read");

    check_dashes(rest)?;
    check_spaces(rest)?;
    check_duplicates(rest)?;
    check_last_line(rest)?;
    check_directives(rest)?;

    debug!(lines = rest.len(); "Line structure validated");

    Ok(Validated {
        ants,
        lines: rest.to_vec(),
    })
}

fn covering_span(lines: &[SourceLine<'_>]) -> Option<Span> {
    let first = lines.first()?;
    let last = lines.last()?;
    Some(first.span().union(last.span()))
}

fn too_few_lines(lines: &[SourceLine<'_>]) -> Diagnostic {
    let diag = Diagnostic::error(format!(
        "expected at least {MIN_LINES} non-comment lines, found {}",
        lines.len()
    ))
    .with_code(ErrorCode::E001)
    .with_help(
        "a map needs the ant count, `##start` and its room, `##end` and its room, \
         and at least one connection",
    );

    match covering_span(lines) {
        Some(span) => diag.with_label(span, "not enough lines"),
        None => diag,
    }
}

fn ant_count(line: &SourceLine<'_>) -> Result<u64, Diagnostic> {
    let Some(count) = line::parse_integer(line.text()) else {
        return Err(Diagnostic::error(format!(
            "ant count `{}` is not an integer",
            line.text()
        ))
        .with_code(ErrorCode::E002)
        .with_label(line.span(), "expected a positive integer")
        .with_help("the first non-comment line is the number of ants"));
    };

    if count <= 0 {
        return Err(
            Diagnostic::error(format!("ant count must be positive, found {count}"))
                .with_code(ErrorCode::E003)
                .with_label(line.span(), "not a positive number"),
        );
    }

    Ok(count.unsigned_abs())
}

fn check_dashes(lines: &[SourceLine<'_>]) -> Result<(), ParseError> {
    let mut collector = DiagnosticCollector::new();

    for line in lines {
        let dashes = line.text().matches('-').count();
        if dashes > MAX_DASHES {
            collector.emit(
                Diagnostic::error(format!("line contains {dashes} dashes"))
                    .with_code(ErrorCode::E100)
                    .with_label(line.span(), "at most one dash is allowed")
                    .with_help("a connection is written `<room>-<room>`"),
            );
        }
    }

    collector.finish()
}

fn check_spaces(lines: &[SourceLine<'_>]) -> Result<(), ParseError> {
    let mut collector = DiagnosticCollector::new();

    for line in lines {
        let spaces = line.text().matches(' ').count();
        if spaces > MAX_SPACES {
            collector.emit(
                Diagnostic::error(format!("line contains {spaces} spaces"))
                    .with_code(ErrorCode::E101)
                    .with_label(line.span(), "at most two spaces are allowed")
                    .with_help("a room is written `<name> <x> <y>`"),
            );
        }
    }

    collector.finish()
}

fn check_duplicates(lines: &[SourceLine<'_>]) -> Result<(), ParseError> {
    let mut collector = DiagnosticCollector::new();
    let mut first_seen: HashMap<&str, Span> = HashMap::new();

    for line in lines {
        match first_seen.entry(line.text()) {
            Entry::Vacant(entry) => {
                entry.insert(line.span());
            }
            Entry::Occupied(entry) => {
                collector.emit(
                    Diagnostic::error(format!(
                        "line `{}` appears more than once",
                        line.text()
                    ))
                    .with_code(ErrorCode::E102)
                    .with_label(line.span(), "duplicate line")
                    .with_secondary_label(*entry.get(), "first written here")
                    .with_help("remove the repeated line"),
                );
            }
        }
    }

    collector.finish()
}

fn check_last_line(lines: &[SourceLine<'_>]) -> Result<(), ParseError> {
    match lines.last() {
        Some(last) if last.text().starts_with(COMMENT_MARKER) => Err(Diagnostic::error(format!(
            "input ends with `{}`",
            last.text()
        ))
        .with_code(ErrorCode::E103)
        .with_label(last.span(), "nothing follows this directive")
        .with_help("a directive must be followed by the room it introduces")
        .into()),
        _ => Ok(()),
    }
}

fn check_directives(lines: &[SourceLine<'_>]) -> Result<(), ParseError> {
    let mut collector = DiagnosticCollector::new();
    let mut found_start = false;
    let mut found_end = false;

    for (index, line) in lines.iter().enumerate() {
        let Some(directive) = Directive::parse(line.text()) else {
            continue;
        };
        match directive {
            Directive::Start => found_start = true,
            Directive::End => found_end = true,
        }

        let next = lines.get(index + 1);
        if next.and_then(|next| line::parse_room(next.text())).is_some() {
            continue;
        }

        let diag = Diagnostic::error(format!(
            "`{directive}` must be followed by the {} room definition",
            directive.room_role()
        ))
        .with_code(ErrorCode::E104)
        .with_help("write the room as `<name> <x> <y>` on the line after the directive");
        let diag = match next {
            Some(next) => diag
                .with_label(next.span(), "expected `<name> <x> <y>`")
                .with_secondary_label(line.span(), "directive here"),
            None => diag.with_label(line.span(), "directive here"),
        };
        collector.emit(diag);
    }

    for (found, directive) in [(found_start, Directive::Start), (found_end, Directive::End)] {
        if !found {
            collector.emit(
                Diagnostic::error(format!("missing `{directive}` directive"))
                    .with_code(ErrorCode::E105)
                    .with_help(format!(
                        "mark the {} room by writing `{directive}` on the line before it",
                        directive.room_role()
                    )),
            );
        }
    }

    collector.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{comments::strip_comments, source::split_lines};

    fn run(source: &str) -> Result<Validated<'_>, ParseError> {
        let lines = strip_comments(&split_lines(source));
        validate(&lines)
    }

    fn codes(source: &str) -> Vec<ErrorCode> {
        let err = run(source).expect_err("validation should fail");
        err.diagnostics().iter().filter_map(Diagnostic::code).collect()
    }

    #[test]
    fn test_valid_minimal() {
        let validated = run("2\n##start\nstart 0 0\n##end\nend 1 0\nstart-end").unwrap();

        assert_eq!(validated.ants, 2);
        assert_eq!(validated.lines.len(), 5);
        assert_eq!(validated.lines[0].text(), "##start");
    }

    #[test]
    fn test_too_few_lines() {
        assert_eq!(codes("2\n##start\nstart 0 0\n##end\nend 1 0"), [ErrorCode::E001]);
        assert_eq!(codes(""), [ErrorCode::E001]);
        // Comments do not count
        assert_eq!(
            codes("2\n#c\n##start\nstart 0 0\n##end\nend 1 0"),
            [ErrorCode::E001]
        );
    }

    #[test]
    fn test_ant_count() {
        assert_eq!(
            codes("two\n##start\nstart 0 0\n##end\nend 1 0\nstart-end"),
            [ErrorCode::E002]
        );
        assert_eq!(
            codes("0\n##start\nstart 0 0\n##end\nend 1 0\nstart-end"),
            [ErrorCode::E003]
        );
        assert_eq!(
            codes("-4\n##start\nstart 0 0\n##end\nend 1 0\nstart-end"),
            [ErrorCode::E003]
        );
        assert_eq!(
            run("+3\n##start\nstart 0 0\n##end\nend 1 0\nstart-end")
                .unwrap()
                .ants,
            3
        );
    }

    #[test]
    fn test_multiple_dashes_reported_per_line() {
        assert_eq!(
            codes("2\n##start\nstart 0 0\n##end\nend 1 0\na-b-c\nstart-end\nx--y"),
            [ErrorCode::E100, ErrorCode::E100]
        );
    }

    #[test]
    fn test_negative_coordinates_count_as_dashes() {
        assert_eq!(
            codes("2\n##start\nstart -1 -1\n##end\nend 1 0\nstart-end"),
            [ErrorCode::E100]
        );
    }

    #[test]
    fn test_too_many_spaces() {
        assert_eq!(
            codes("2\n##start\nstart 0 0 0\n##end\nend 1 0\nstart-end"),
            [ErrorCode::E101]
        );
    }

    #[test]
    fn test_dashes_checked_before_spaces() {
        assert_eq!(
            codes("2\n##start\nstart 0 0 0\n##end\nend 1 0\na-b-c"),
            [ErrorCode::E100]
        );
    }

    #[test]
    fn test_duplicate_lines() {
        let err = run("2\nroom1 0 0\n##start\nstart 0 1\n##end\nend 1 0\nroom1 0 0\nstart-end")
            .unwrap_err();

        assert_eq!(err.diagnostics().len(), 1);
        let diag = &err.diagnostics()[0];
        assert_eq!(diag.code(), Some(ErrorCode::E102));
        assert_eq!(diag.message(), "line `room1 0 0` appears more than once");
        assert_eq!(diag.labels().len(), 2);
        assert_eq!(diag.labels()[1].span(), Span::new(2..11));
    }

    #[test]
    fn test_duplicate_directive_is_duplicate_line() {
        assert_eq!(
            codes("2\n##start\nstart 0 0\n##start\nother 0 1\n##end\nend 1 0\nstart-end"),
            [ErrorCode::E102]
        );
    }

    #[test]
    fn test_trailing_directive() {
        assert_eq!(
            codes("2\n##start\nstart 0 0\nend 1 0\nstart-end\n##end"),
            [ErrorCode::E103]
        );
    }

    #[test]
    fn test_trailing_comment_is_stripped() {
        assert!(run("2\n##start\nstart 0 0\n##end\nend 1 0\nstart-end\n# done").is_ok());
    }

    #[test]
    fn test_directive_not_followed_by_room() {
        assert_eq!(
            codes("2\n##start\nstart-end\nstart 0 0\n##end\nend 1 0"),
            [ErrorCode::E104]
        );
        assert_eq!(
            codes("2\n##start\n##end\nstart 0 0\nend 1 0\nstart-end"),
            [ErrorCode::E104]
        );
    }

    #[test]
    fn test_missing_directives() {
        assert_eq!(
            codes("2\nstart 0 0\n##end\nend 1 0\nmid 3 3\nstart-end"),
            [ErrorCode::E105]
        );
        assert_eq!(
            codes("2\nstart 0 0\nend 1 0\nmid 3 3\nstart-end\nmid-end"),
            [ErrorCode::E105, ErrorCode::E105]
        );
    }
}
