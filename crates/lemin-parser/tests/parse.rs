use lemin_parser::{
    ParseConfig, Span,
    error::{ErrorCode, ErrorKind, Severity},
    parse,
};

#[test]
fn test_simple_colony() {
    let source = "2\n##start\nstart 0 0\n##end\nend 1 0\nstart-end";

    let graph = parse(source, ParseConfig::default()).expect("Failed to parse");

    assert_eq!(graph.ants(), 2);
    assert_eq!(graph.rooms_count(), 2);
    assert_eq!(graph.start_room().name(), "start");
    assert_eq!(graph.end_room().name(), "end");
    assert_eq!(graph.connections().len(), 1);

    let start = graph.start_room();
    assert_eq!(start.coordinates(), (0, 0));
    assert_eq!(start.connections(), [graph.end()]);
    assert_eq!(graph.end_room().connections(), [graph.start()]);
}

#[test]
fn test_duplicate_room_line() {
    let source = "2\nroom1 0 0\n##start\nstart 0 1\n##end\nend 1 0\nroom1 0 0\nstart-end";

    let err = parse(source, ParseConfig::default()).expect_err("duplicate must fail");

    assert_eq!(err.kind(), ErrorKind::Format);
    let diag = &err.diagnostics()[0];
    assert_eq!(diag.severity(), Severity::Error);
    assert_eq!(diag.code(), Some(ErrorCode::E102));
}

#[test]
fn test_unresolved_reference() {
    let source = "2\n##start\na 0 0\n##end\nb 1 1\na-c";

    let err = parse(source, ParseConfig::default()).expect_err("unknown room must fail");

    assert_eq!(err.kind(), ErrorKind::UnresolvedReference);
    let diag = &err.diagnostics()[0];
    assert_eq!(diag.code(), Some(ErrorCode::E202));
    assert_eq!(diag.message(), "connection refers to undeclared room `c`");
    // Points at the name, not the whole line
    assert_eq!(diag.labels()[0].span(), Span::new(28..29));
    assert!(diag.help().is_some());
}

#[test]
fn test_disconnected_room() {
    let source = "2\n##start\na 0 0\n##end\nb 1 1\nc 2 2\na-b";

    let err = parse(source, ParseConfig::default()).expect_err("isolated room must fail");

    assert_eq!(err.kind(), ErrorKind::DisconnectedGraph);
    assert_eq!(err.diagnostics().len(), 1);
    assert_eq!(
        err.diagnostics()[0].message(),
        "room \"c\" is not connected to the anthill"
    );
    assert_eq!(
        err.to_string(),
        "error[E204]: room \"c\" is not connected to the anthill"
    );
}

#[test]
fn test_room_order_and_degrees() {
    let source = "\
4
##start
0 0 3
2 2 0
3 4 0
##end
1 8 3
0-2
2-3
3-1
";

    let graph = parse(source, ParseConfig::default()).expect("Failed to parse");

    let names: Vec<_> = graph.rooms().map(|room| room.name()).collect();
    assert_eq!(names, ["2", "3", "0", "1"]);
    assert!(graph.rooms().all(|room| room.degree() >= 1));
    assert_eq!(graph.room_by_name("2").map(|room| room.degree()), Some(2));
}

#[test]
fn test_comments_between_directive_and_room() {
    let source = "1\n##start\n# the entrance\nhome 0 0\n##end\ngoal 1 1\nhome-goal";

    let graph = parse(source, ParseConfig::default()).expect("Failed to parse");
    assert_eq!(graph.start_room().name(), "home");
}
