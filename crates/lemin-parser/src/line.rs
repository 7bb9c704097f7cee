//! Line classification.
//!
//! Every non-comment line after the ant count is one of:
//!
//! - a directive: `##start` or `##end`
//! - a room: `<name> <x> <y>`, three tokens separated by single spaces, with
//!   integer coordinates
//! - a connection: `<name>-<name>`
//!
//! Anything else is [`LineKind::Invalid`]. The shapes are recognized with
//! winnow combinators over the line text; a line must be consumed entirely
//! to match.

use std::fmt;

use winnow::{
    Parser as _,
    ascii::digit1,
    combinator::{eof, opt, preceded, separated_pair, terminated},
    error::{ContextError, ErrMode},
    token::{one_of, take_till},
};

type Input<'src> = &'src str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// A directive marking the next line as a special room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Start,
    End,
}

impl Directive {
    /// Recognizes the exact directive text.
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "##start" => Some(Self::Start),
            "##end" => Some(Self::End),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "##start",
            Self::End => "##end",
        }
    }

    /// Human readable name of the room this directive introduces.
    pub fn room_role(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A room definition: `<name> <x> <y>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomLine<'src> {
    pub name: &'src str,
    pub x: i64,
    pub y: i64,
}

/// A connection between two rooms: `<from>-<to>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionLine<'src> {
    pub from: &'src str,
    pub to: &'src str,
}

/// The shape of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'src> {
    Directive(Directive),
    Room(RoomLine<'src>),
    Connection(ConnectionLine<'src>),
    Invalid,
}

/// Classifies a line.
///
/// The room shape is tried before the connection shape, so `a-b 1 2` is a
/// room named `a-b`.
///
/// # Examples
///
/// ```
/// use lemin_parser::line::{classify, ConnectionLine, Directive, LineKind, RoomLine};
///
/// assert_eq!(classify("##end"), LineKind::Directive(Directive::End));
/// assert_eq!(
///     classify("hall -4 12"),
///     LineKind::Room(RoomLine { name: "hall", x: -4, y: 12 })
/// );
/// assert_eq!(
///     classify("hall-kitchen"),
///     LineKind::Connection(ConnectionLine { from: "hall", to: "kitchen" })
/// );
/// assert_eq!(classify("hall 1"), LineKind::Invalid);
/// ```
pub fn classify(text: &str) -> LineKind<'_> {
    if let Some(directive) = Directive::parse(text) {
        return LineKind::Directive(directive);
    }
    if let Some(room) = parse_room(text) {
        return LineKind::Room(room);
    }
    if let Some(connection) = parse_connection(text) {
        return LineKind::Connection(connection);
    }
    LineKind::Invalid
}

/// Parses a room line, or returns `None` if the line is not room-shaped.
pub fn parse_room(text: &str) -> Option<RoomLine<'_>> {
    let mut input = text;
    room_line(&mut input).ok()
}

/// Parses a connection line, or returns `None` if the line is not
/// connection-shaped.
pub fn parse_connection(text: &str) -> Option<ConnectionLine<'_>> {
    let mut input = text;
    connection_line(&mut input).ok()
}

/// Parses a whole line as a base-10 integer with an optional sign.
///
/// Leading zeros are accepted; surrounding whitespace is not.
pub fn parse_integer(text: &str) -> Option<i64> {
    let mut input = text;
    whole_integer(&mut input).ok()
}

/// Signed decimal integer that fits in an `i64`.
fn integer(input: &mut Input<'_>) -> IResult<i64> {
    (opt(one_of(['+', '-'])), digit1)
        .take()
        .try_map(|digits: &str| digits.parse::<i64>())
        .parse_next(input)
}

fn whole_integer(input: &mut Input<'_>) -> IResult<i64> {
    terminated(integer, eof).parse_next(input)
}

/// Room name: one or more characters up to the next space.
fn room_name<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    take_till(1.., ' ').parse_next(input)
}

/// A coordinate preceded by exactly one space.
fn coordinate(input: &mut Input<'_>) -> IResult<i64> {
    preceded(' ', integer).parse_next(input)
}

fn room_line<'src>(input: &mut Input<'src>) -> IResult<RoomLine<'src>> {
    terminated((room_name, coordinate, coordinate), eof)
        .map(|(name, x, y)| RoomLine { name, x, y })
        .parse_next(input)
}

/// Connection endpoint: one or more characters up to the next dash or space.
fn endpoint<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    take_till(1.., ['-', ' ']).parse_next(input)
}

fn connection_line<'src>(input: &mut Input<'src>) -> IResult<ConnectionLine<'src>> {
    terminated(separated_pair(endpoint, '-', endpoint), eof)
        .map(|(from, to)| ConnectionLine { from, to })
        .parse_next(input)
}
