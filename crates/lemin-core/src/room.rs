//! Rooms: the nodes of an ant-colony graph.

use std::fmt;

use crate::span::Span;

/// Index of a room inside its [`AntColonyGraph`](crate::graph::AntColonyGraph).
///
/// Rooms are stored in construction order and never removed, so the index
/// stays valid for the lifetime of the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(usize);

impl RoomId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the position of the room in construction order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named room with integer coordinates.
///
/// Connections are stored as [`RoomId`]s in the order the connection lines
/// were applied. The distance is `None` until the room has been reached by
/// the distance labeler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    x: i64,
    y: i64,
    distance: Option<u32>,
    connections: Vec<RoomId>,
    span: Span,
}

impl Room {
    /// Creates an unconnected, unlabeled room.
    ///
    /// # Arguments
    ///
    /// * `name` - Unique room name
    /// * `x`, `y` - Room coordinates
    /// * `span` - Location of the declaring line in the source
    pub fn new(name: impl Into<String>, x: i64, y: i64, span: Span) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            distance: None,
            connections: Vec::new(),
            span,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    /// Returns the `(x, y)` coordinate pair.
    pub fn coordinates(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    /// Minimum number of edges from the start room, if reached.
    pub fn distance(&self) -> Option<u32> {
        self.distance
    }

    /// Connected rooms in insertion order.
    pub fn connections(&self) -> &[RoomId] {
        &self.connections
    }

    /// Number of connection endpoints attached to this room.
    pub fn degree(&self) -> usize {
        self.connections.len()
    }

    /// Location of the line that declared this room.
    pub fn span(&self) -> Span {
        self.span
    }

    pub(crate) fn push_connection(&mut self, other: RoomId) {
        self.connections.push(other);
    }

    pub(crate) fn set_distance(&mut self, distance: Option<u32>) {
        self.distance = distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_room_is_unlabeled_and_unconnected() {
        let room = Room::new("hall", -3, 7, Span::new(0..9));

        assert_eq!(room.name(), "hall");
        assert_eq!(room.coordinates(), (-3, 7));
        assert_eq!(room.distance(), None);
        assert!(room.connections().is_empty());
        assert_eq!(room.degree(), 0);
        assert_eq!(room.span(), Span::new(0..9));
    }

    #[test]
    fn test_room_id_display() {
        assert_eq!(RoomId::new(3).to_string(), "#3");
        assert_eq!(RoomId::new(3).index(), 3);
    }
}
