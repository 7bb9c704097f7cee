//! The ant-colony graph and its builder.
//!
//! This module provides the aggregate root of the lemin data model:
//!
//! - [`GraphBuilder`]: Accumulates rooms and connections, enforcing name and
//!   coordinate uniqueness as rooms are added
//! - [`AntColonyGraph`]: The finished graph with designated start and end rooms
//! - [`Connection`]: An undirected edge between two rooms
//!
//! Rooms are kept in an insertion-ordered map keyed by name, so lookups by
//! name are constant time and iteration follows construction order. A
//! [`RoomId`] is the position of a room in that order.

use std::collections::HashMap;

use indexmap::IndexMap;
use log::{debug, trace};
use thiserror::Error;

use crate::{
    room::{Room, RoomId},
    span::Span,
};

/// Errors raised while assembling a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("room `{name}` is declared more than once")]
    DuplicateName { name: String, existing: RoomId },

    #[error("coordinates ({x},{y}) are already used by another room")]
    DuplicateCoordinates { x: i64, y: i64, existing: RoomId },

    #[error("room {0} does not belong to this graph")]
    UnknownRoom(RoomId),

    #[error("no start room has been designated")]
    MissingStart,

    #[error("no end room has been designated")]
    MissingEnd,
}

/// An undirected edge between two rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    a: RoomId,
    b: RoomId,
    span: Span,
}

impl Connection {
    /// Both endpoints, in the order they were written.
    pub fn endpoints(&self) -> (RoomId, RoomId) {
        (self.a, self.b)
    }

    /// Location of the connection line in the source.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns `true` if the connection joins a room to itself.
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Incremental constructor for [`AntColonyGraph`].
///
/// # Examples
///
/// ```
/// use lemin_core::{graph::GraphBuilder, span::Span};
///
/// let mut builder = GraphBuilder::new(3);
/// let start = builder.add_room("start", 0, 0, Span::default()).unwrap();
/// let end = builder.add_room("end", 1, 0, Span::default()).unwrap();
/// builder.set_start(start);
/// builder.set_end(end);
/// builder.connect(start, end, Span::default()).unwrap();
///
/// let graph = builder.build().unwrap();
/// assert_eq!(graph.rooms_count(), 2);
/// assert_eq!(graph.room(end).connections(), &[start]);
/// ```
#[derive(Debug)]
pub struct GraphBuilder {
    ants: u64,
    rooms: IndexMap<String, Room>,
    coordinates: HashMap<(i64, i64), RoomId>,
    start: Option<RoomId>,
    end: Option<RoomId>,
    connections: Vec<Connection>,
}

impl GraphBuilder {
    /// Creates an empty builder for a colony of `ants` ants.
    pub fn new(ants: u64) -> Self {
        Self {
            ants,
            rooms: IndexMap::new(),
            coordinates: HashMap::new(),
            start: None,
            end: None,
            connections: Vec::new(),
        }
    }

    /// Adds a room and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateName`] if a room with the same name
    /// exists, or [`GraphError::DuplicateCoordinates`] if another room sits
    /// on the same `(x, y)`. The name check wins when both apply.
    pub fn add_room(
        &mut self,
        name: &str,
        x: i64,
        y: i64,
        span: Span,
    ) -> Result<RoomId, GraphError> {
        if let Some(index) = self.rooms.get_index_of(name) {
            return Err(GraphError::DuplicateName {
                name: name.to_string(),
                existing: RoomId::new(index),
            });
        }
        if let Some(&existing) = self.coordinates.get(&(x, y)) {
            return Err(GraphError::DuplicateCoordinates { x, y, existing });
        }

        let id = RoomId::new(self.rooms.len());
        self.rooms
            .insert(name.to_string(), Room::new(name, x, y, span));
        self.coordinates.insert((x, y), id);
        trace!(room = name, x, y, id = id.index(); "Room added");

        Ok(id)
    }

    /// Looks up a room id by exact name.
    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.rooms.get_index_of(name).map(RoomId::new)
    }

    /// Returns the room with the given id, if it belongs to this builder.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get_index(id.index()).map(|(_, room)| room)
    }

    /// Designates the start room.
    pub fn set_start(&mut self, id: RoomId) {
        self.start = Some(id);
    }

    /// Designates the end room.
    pub fn set_end(&mut self, id: RoomId) {
        self.end = Some(id);
    }

    /// Connects two rooms symmetrically.
    ///
    /// `a` gains `b` in its connection list and `b` gains `a`. A loop
    /// (`a == b`) therefore lists the room twice in its own connections.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownRoom`] if either id was not issued by
    /// this builder.
    pub fn connect(&mut self, a: RoomId, b: RoomId, span: Span) -> Result<(), GraphError> {
        for id in [a, b] {
            if id.index() >= self.rooms.len() {
                return Err(GraphError::UnknownRoom(id));
            }
        }

        self.rooms[a.index()].push_connection(b);
        self.rooms[b.index()].push_connection(a);
        self.connections.push(Connection { a, b, span });

        Ok(())
    }

    /// Finishes construction.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MissingStart`] or [`GraphError::MissingEnd`] if
    /// either special room was never designated.
    pub fn build(self) -> Result<AntColonyGraph, GraphError> {
        let start = self.start.ok_or(GraphError::MissingStart)?;
        let end = self.end.ok_or(GraphError::MissingEnd)?;

        debug!(
            rooms = self.rooms.len(),
            connections = self.connections.len(),
            ants = self.ants;
            "Graph assembled"
        );

        Ok(AntColonyGraph {
            ants: self.ants,
            rooms: self.rooms,
            start,
            end,
            connections: self.connections,
        })
    }
}

// =============================================================================
// Finished graph
// =============================================================================

/// An ant colony: rooms, their connections, the start and end rooms, and the
/// number of ants.
///
/// After construction only room distances can change, through
/// [`set_distance`](Self::set_distance) and
/// [`clear_distances`](Self::clear_distances).
#[derive(Debug, Clone)]
pub struct AntColonyGraph {
    ants: u64,
    rooms: IndexMap<String, Room>,
    start: RoomId,
    end: RoomId,
    connections: Vec<Connection>,
}

impl AntColonyGraph {
    /// Number of ants in the colony.
    pub fn ants(&self) -> u64 {
        self.ants
    }

    pub fn start(&self) -> RoomId {
        self.start
    }

    pub fn end(&self) -> RoomId {
        self.end
    }

    pub fn start_room(&self) -> &Room {
        self.room(self.start)
    }

    pub fn end_room(&self) -> &Room {
        self.room(self.end)
    }

    /// Returns the room with the given id.
    ///
    /// # Panics
    /// Panics if the id was issued by a different graph and is out of range.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    /// Looks up a room by exact name.
    pub fn room_by_name(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    /// Looks up a room id by exact name.
    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.rooms.get_index_of(name).map(RoomId::new)
    }

    /// Iterates rooms in construction order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Iterates room ids in construction order.
    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> + use<> {
        (0..self.rooms.len()).map(RoomId::new)
    }

    pub fn rooms_count(&self) -> usize {
        self.rooms.len()
    }

    /// All connections in the order they were applied.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Neighbors of a room in connection order.
    ///
    /// # Panics
    /// Panics under the same condition as [`room`](Self::room).
    pub fn neighbors(&self, id: RoomId) -> impl Iterator<Item = RoomId> + '_ {
        self.room(id).connections().iter().copied()
    }

    /// Records the distance of a room from the start room.
    ///
    /// # Panics
    /// Panics under the same condition as [`room`](Self::room).
    pub fn set_distance(&mut self, id: RoomId, distance: u32) {
        self.rooms[id.index()].set_distance(Some(distance));
    }

    /// Resets every room to the unlabeled state.
    pub fn clear_distances(&mut self) {
        for room in self.rooms.values_mut() {
            room.set_distance(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_room_builder() -> (GraphBuilder, RoomId, RoomId) {
        let mut builder = GraphBuilder::new(2);
        let start = builder.add_room("start", 0, 0, Span::new(0..9)).unwrap();
        let end = builder.add_room("end", 1, 0, Span::new(10..17)).unwrap();
        builder.set_start(start);
        builder.set_end(end);
        (builder, start, end)
    }

    #[test]
    fn test_add_room_rejects_duplicate_name() {
        let (mut builder, start, _) = two_room_builder();

        let err = builder.add_room("start", 5, 5, Span::default()).unwrap_err();
        assert_eq!(
            err,
            GraphError::DuplicateName {
                name: "start".to_string(),
                existing: start,
            }
        );
    }

    #[test]
    fn test_add_room_rejects_duplicate_coordinates() {
        let (mut builder, _, end) = two_room_builder();

        let err = builder.add_room("other", 1, 0, Span::default()).unwrap_err();
        assert_eq!(
            err,
            GraphError::DuplicateCoordinates {
                x: 1,
                y: 0,
                existing: end,
            }
        );
    }

    #[test]
    fn test_name_check_wins_over_coordinates() {
        let (mut builder, start, _) = two_room_builder();

        let err = builder.add_room("start", 1, 0, Span::default()).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateName { existing, .. } if existing == start));
    }

    #[test]
    fn test_connect_is_symmetric() {
        let (mut builder, start, end) = two_room_builder();
        builder.connect(start, end, Span::new(18..27)).unwrap();

        let graph = builder.build().unwrap();
        assert_eq!(graph.room(start).connections(), &[end]);
        assert_eq!(graph.room(end).connections(), &[start]);
        assert_eq!(graph.connections().len(), 1);
        assert_eq!(graph.connections()[0].endpoints(), (start, end));
        assert_eq!(graph.connections()[0].span(), Span::new(18..27));
    }

    #[test]
    fn test_connect_loop_lists_room_twice() {
        let (mut builder, start, _) = two_room_builder();
        builder.connect(start, start, Span::default()).unwrap();

        let graph = builder.build().unwrap();
        assert_eq!(graph.room(start).connections(), &[start, start]);
        assert!(graph.connections()[0].is_loop());
    }

    #[test]
    fn test_connect_rejects_foreign_id() {
        let (mut builder, start, _) = two_room_builder();
        let foreign = RoomId::new(42);

        let err = builder.connect(start, foreign, Span::default()).unwrap_err();
        assert_eq!(err, GraphError::UnknownRoom(foreign));
        assert!(builder.room(start).unwrap().connections().is_empty());
    }

    #[test]
    fn test_build_requires_start_and_end() {
        let mut builder = GraphBuilder::new(1);
        let only = builder.add_room("only", 0, 0, Span::default()).unwrap();
        builder.set_end(only);
        assert_eq!(builder.build().unwrap_err(), GraphError::MissingStart);

        let mut builder = GraphBuilder::new(1);
        let only = builder.add_room("only", 0, 0, Span::default()).unwrap();
        builder.set_start(only);
        assert_eq!(builder.build().unwrap_err(), GraphError::MissingEnd);
    }

    #[test]
    fn test_lookup_by_name_follows_construction_order() {
        let (mut builder, start, end) = two_room_builder();
        let middle = builder.add_room("middle", 2, 2, Span::default()).unwrap();
        let graph = builder.build().unwrap();

        assert_eq!(graph.room_id("start"), Some(start));
        assert_eq!(graph.room_id("end"), Some(end));
        assert_eq!(graph.room_id("middle"), Some(middle));
        assert_eq!(graph.room_id("missing"), None);
        assert_eq!(graph.room_by_name("middle").map(Room::x), Some(2));

        let names: Vec<_> = graph.rooms().map(Room::name).collect();
        assert_eq!(names, ["start", "end", "middle"]);
        let ids: Vec<_> = graph.room_ids().collect();
        assert_eq!(ids, [start, end, middle]);
    }

    #[test]
    fn test_distances_can_be_set_and_cleared() {
        let (builder, start, end) = two_room_builder();
        let mut graph = builder.build().unwrap();

        graph.set_distance(start, 0);
        graph.set_distance(end, 1);
        assert_eq!(graph.start_room().distance(), Some(0));
        assert_eq!(graph.end_room().distance(), Some(1));

        graph.clear_distances();
        assert!(graph.rooms().all(|room| room.distance().is_none()));
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    /// A room count and a list of connections between rooms of that count.
    fn edges_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
        (2usize..12).prop_flat_map(|rooms| {
            (
                Just(rooms),
                prop::collection::vec((0..rooms, 0..rooms), 0..30),
            )
        })
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Every connection shows up on both endpoints, and nothing else does.
    fn check_connections_are_symmetric(
        rooms: usize,
        edges: &[(usize, usize)],
    ) -> Result<(), TestCaseError> {
        let mut builder = GraphBuilder::new(1);
        let ids: Vec<RoomId> = (0..rooms)
            .map(|i| {
                builder
                    .add_room(&format!("r{i}"), i as i64, 0, Span::default())
                    .unwrap()
            })
            .collect();
        builder.set_start(ids[0]);
        builder.set_end(ids[rooms - 1]);
        for &(a, b) in edges {
            builder.connect(ids[a], ids[b], Span::default()).unwrap();
        }
        let graph = builder.build().unwrap();

        let total_degree: usize = graph.rooms().map(Room::degree).sum();
        prop_assert_eq!(total_degree, edges.len() * 2);

        for &(a, b) in edges {
            prop_assert!(graph.room(ids[a]).connections().contains(&ids[b]));
            prop_assert!(graph.room(ids[b]).connections().contains(&ids[a]));
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn connections_are_symmetric((rooms, edges) in edges_strategy()) {
            check_connections_are_symmetric(rooms, &edges)?;
        }
    }
}
