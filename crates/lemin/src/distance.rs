//! Breadth-first distance labeling.
//!
//! Each room is labeled with the number of connections on a shortest path
//! from the start room. Neighbors are visited in connection order, and a
//! room is expanded at most once.

use std::collections::VecDeque;

use log::{debug, trace};

use lemin_core::{graph::AntColonyGraph, room::RoomId};

/// Computes the distance of every room from the start room.
///
/// The result is indexed by [`RoomId::index`]. Rooms with no path from the
/// start room are `None`.
pub fn shortest_distances(graph: &AntColonyGraph) -> Vec<Option<u32>> {
    let mut distances = vec![None; graph.rooms_count()];
    let mut queue = VecDeque::new();

    distances[graph.start().index()] = Some(0);
    queue.push_back(graph.start());

    while let Some(current) = queue.pop_front() {
        let next = distances[current.index()].unwrap_or_default() + 1;
        for neighbor in graph.neighbors(current) {
            let slot = &mut distances[neighbor.index()];
            if slot.is_none() {
                *slot = Some(next);
                queue.push_back(neighbor);
            }
        }
    }

    distances
}

/// Labels every reachable room with its distance from the start room.
///
/// Previous labels are cleared first. Returns the rooms left unlabeled, in
/// construction order.
pub fn label_distances(graph: &mut AntColonyGraph) -> Vec<RoomId> {
    let distances = shortest_distances(graph);
    graph.clear_distances();

    let mut unreachable = Vec::new();
    for (id, distance) in graph.room_ids().zip(distances) {
        match distance {
            Some(distance) => {
                graph.set_distance(id, distance);
                trace!(room = graph.room(id).name(), distance; "Distance assigned");
            }
            None => unreachable.push(id),
        }
    }

    debug!(
        rooms = graph.rooms_count(),
        unreachable = unreachable.len();
        "Distances labeled"
    );
    unreachable
}
