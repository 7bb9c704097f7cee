//! Graph construction from validated lines.
//!
//! Lines are sorted into the start room, the end room, plain rooms,
//! connections and malformed lines, then fed to a [`GraphBuilder`]. Three
//! rules are checked along the way, each one stopping the run if violated:
//!
//! 8. Room names and coordinates are unique
//! 9. Every other line is a connection between declared rooms
//! 10. Every room has at least one connection

use std::collections::HashMap;

use lemin_core::{
    graph::{AntColonyGraph, GraphBuilder, GraphError},
    room::RoomId,
};
use log::{debug, trace};

use crate::{
    ParseConfig, Span,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    line::{ConnectionLine, Directive, LineKind, RoomLine, classify},
    source::SourceLine,
    validate::Validated,
};

/// A classified line together with the source line it came from.
#[derive(Debug, Clone, Copy)]
struct Located<'src, T> {
    value: T,
    line: SourceLine<'src>,
}

impl<'src, T> Located<'src, T> {
    fn new(value: T, line: SourceLine<'src>) -> Self {
        Self { value, line }
    }

    fn span(&self) -> Span {
        self.line.span()
    }
}

impl Located<'_, ConnectionLine<'_>> {
    /// Span of the left-hand room name.
    fn from_span(&self) -> Span {
        let start = self.line.span().start();
        Span::new(start..start + self.value.from.len())
    }

    /// Span of the right-hand room name.
    fn to_span(&self) -> Span {
        let end = self.line.span().end();
        Span::new(end - self.value.to.len()..end)
    }
}

#[derive(Debug, Default)]
struct SortedLines<'src> {
    start: Option<Located<'src, RoomLine<'src>>>,
    end: Option<Located<'src, RoomLine<'src>>>,
    rooms: Vec<Located<'src, RoomLine<'src>>>,
    connections: Vec<Located<'src, ConnectionLine<'src>>>,
    invalid: Vec<SourceLine<'src>>,
}

/// Builds the colony graph, applying rules 8 to 10.
pub(crate) fn build_graph(
    validated: &Validated<'_>,
    config: &ParseConfig,
) -> Result<AntColonyGraph, ParseError> {
    let sorted = sort_lines(&validated.lines);
    debug!(
        rooms = sorted.rooms.len(),
        connections = sorted.connections.len();
        "Lines sorted"
    );

    let mut builder = GraphBuilder::new(validated.ants);

    let (start, end) = add_rooms(&mut builder, &sorted)?;
    builder.set_start(start);
    builder.set_end(end);

    add_connections(&mut builder, &sorted, config)?;

    let graph = builder.build().map_err(|err| {
        ParseError::from(Diagnostic::error(err.to_string()).with_code(ErrorCode::E105))
    })?;

    check_connected(&graph)?;

    Ok(graph)
}

fn sort_lines<'src>(lines: &[SourceLine<'src>]) -> SortedLines<'src> {
    let mut sorted = SortedLines::default();
    let mut pending: Option<Directive> = None;

    for &line in lines {
        let directive = pending.take();
        match classify(line.text()) {
            LineKind::Directive(next) => pending = Some(next),
            LineKind::Room(room) => {
                let located = Located::new(room, line);
                match directive {
                    Some(Directive::Start) => sorted.start = Some(located),
                    Some(Directive::End) => sorted.end = Some(located),
                    None => sorted.rooms.push(located),
                }
            }
            LineKind::Connection(connection) => {
                sorted.connections.push(Located::new(connection, line));
            }
            LineKind::Invalid => sorted.invalid.push(line),
        }
    }

    sorted
}

// =============================================================================
// Rooms
// =============================================================================

fn add_rooms(
    builder: &mut GraphBuilder,
    sorted: &SortedLines<'_>,
) -> Result<(RoomId, RoomId), ParseError> {
    let mut collector = DiagnosticCollector::new();

    for room in &sorted.rooms {
        add_room(builder, &mut collector, room);
    }
    let start = sorted
        .start
        .as_ref()
        .and_then(|room| add_room(builder, &mut collector, room));
    let end = sorted
        .end
        .as_ref()
        .and_then(|room| add_room(builder, &mut collector, room));

    collector.finish()?;

    match (start, end) {
        (Some(start), Some(end)) => Ok((start, end)),
        (None, _) => Err(missing_room(Directive::Start).into()),
        (_, None) => Err(missing_room(Directive::End).into()),
    }
}

fn add_room(
    builder: &mut GraphBuilder,
    collector: &mut DiagnosticCollector,
    room: &Located<'_, RoomLine<'_>>,
) -> Option<RoomId> {
    let RoomLine { name, x, y } = room.value;
    match builder.add_room(name, x, y, room.span()) {
        Ok(id) => Some(id),
        Err(err) => {
            collector.emit(room_conflict(builder, err, room.span()));
            None
        }
    }
}

fn room_conflict(builder: &GraphBuilder, err: GraphError, span: Span) -> Diagnostic {
    let first_span = |existing: RoomId| builder.room(existing).map(|room| room.span());

    let (diag, existing) = match &err {
        GraphError::DuplicateName { name, existing } => (
            Diagnostic::error(format!("room `{name}` is declared more than once"))
                .with_code(ErrorCode::E200)
                .with_label(span, "duplicate room name")
                .with_help("every room needs a unique name"),
            first_span(*existing),
        ),
        GraphError::DuplicateCoordinates { x, y, existing } => {
            let other = builder
                .room(*existing)
                .map(|room| room.name())
                .unwrap_or_default();
            (
                Diagnostic::error(format!(
                    "coordinates ({x},{y}) are already used by room `{other}`"
                ))
                .with_code(ErrorCode::E201)
                .with_label(span, "duplicate coordinates")
                .with_help("no two rooms may share a position"),
                first_span(*existing),
            )
        }
        _ => (Diagnostic::error(err.to_string()).with_label(span, "here"), None),
    };

    match existing {
        Some(first) => diag.with_secondary_label(first, "first declared here"),
        None => diag,
    }
}

fn missing_room(directive: Directive) -> Diagnostic {
    Diagnostic::error(format!("no room follows `{directive}`"))
        .with_code(ErrorCode::E105)
        .with_help(format!(
            "declare the {} room on the line after `{directive}`",
            directive.room_role()
        ))
}

// =============================================================================
// Connections
// =============================================================================

fn add_connections(
    builder: &mut GraphBuilder,
    sorted: &SortedLines<'_>,
    config: &ParseConfig,
) -> Result<(), ParseError> {
    let mut collector = DiagnosticCollector::new();

    for line in &sorted.invalid {
        collector.emit(
            Diagnostic::error(format!(
                "line `{}` is neither a room nor a connection",
                line.text()
            ))
            .with_code(ErrorCode::E106)
            .with_label(line.span(), "malformed line")
            .with_help("rooms are written `<name> <x> <y>`, connections `<room>-<room>`"),
        );
    }

    let mut declared: HashMap<(RoomId, RoomId), Span> = HashMap::new();

    for connection in &sorted.connections {
        let ConnectionLine { from, to } = connection.value;
        let from_id = resolve(builder, &mut collector, from, connection.from_span());
        let to_id = resolve(builder, &mut collector, to, connection.to_span());
        let (Some(from_id), Some(to_id)) = (from_id, to_id) else {
            continue;
        };

        if from_id == to_id {
            collector.emit(
                Diagnostic::warning(format!("room `{from}` is connected to itself"))
                    .with_label(connection.span(), "self connection"),
            );
        }

        if config.reject_reversed_connections {
            let key = (from_id.min(to_id), from_id.max(to_id));
            if let Some(&first) = declared.get(&key) {
                collector.emit(
                    Diagnostic::error(format!(
                        "rooms `{from}` and `{to}` are already connected"
                    ))
                    .with_code(ErrorCode::E203)
                    .with_label(connection.span(), "duplicate connection")
                    .with_secondary_label(first, "first connected here")
                    .with_help("a connection works in both directions; remove this line"),
                );
                continue;
            }
            declared.insert(key, connection.span());
        }

        if let Err(err) = builder.connect(from_id, to_id, connection.span()) {
            collector.emit(
                Diagnostic::error(err.to_string()).with_label(connection.span(), "here"),
            );
            continue;
        }
        trace!(from, to; "Rooms connected");
    }

    collector.finish()
}

fn resolve(
    builder: &GraphBuilder,
    collector: &mut DiagnosticCollector,
    name: &str,
    span: Span,
) -> Option<RoomId> {
    let id = builder.room_id(name);
    if id.is_none() {
        collector.emit(
            Diagnostic::error(format!("connection refers to undeclared room `{name}`"))
                .with_code(ErrorCode::E202)
                .with_label(span, "unknown room")
                .with_help(format!("declare `{name}` as `{name} <x> <y>` or fix the name")),
        );
    }
    id
}

// =============================================================================
// Connectivity
// =============================================================================

fn check_connected(graph: &AntColonyGraph) -> Result<(), ParseError> {
    let mut collector = DiagnosticCollector::new();

    for room in graph.rooms().filter(|room| room.degree() == 0) {
        collector.emit(
            Diagnostic::error(format!(
                "room \"{}\" is not connected to the anthill",
                room.name()
            ))
            .with_code(ErrorCode::E204)
            .with_label(room.span(), "no connection mentions this room")
            .with_help(format!("connect it with a line such as `{}-<room>`", room.name())),
        );
    }

    collector.finish()
}
