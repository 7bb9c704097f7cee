//! Text report of a labeled colony.
//!
//! ```text
//! <input lines>
//!
//! Ant Hill:
//! Start Room: start
//! End Room: end
//! Number of Ants: 2
//! Rooms:
//! Name: start, Coordinates: (0,0), Distance: 0, Connections: [end]
//! Name: end, Coordinates: (1,0), Distance: 1, Connections: [start]
//! ```

use std::fmt;

use lemin_core::{graph::AntColonyGraph, room::Room};

/// A printable report; the input echo is optional.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    input: Option<&'a str>,
    graph: &'a AntColonyGraph,
}

impl<'a> Report<'a> {
    /// Report for `graph` with no input echo.
    pub fn new(graph: &'a AntColonyGraph) -> Self {
        Self { input: None, graph }
    }

    /// Echo `input` line by line before the summary.
    pub fn with_input(mut self, input: &'a str) -> Self {
        self.input = Some(input);
        self
    }

    fn fmt_room(&self, f: &mut fmt::Formatter<'_>, room: &Room) -> fmt::Result {
        write!(
            f,
            "Name: {}, Coordinates: ({},{}), Distance: ",
            room.name(),
            room.x(),
            room.y()
        )?;
        match room.distance() {
            Some(distance) => write!(f, "{distance}")?,
            None => f.write_str("-")?,
        }

        f.write_str(", Connections: [")?;
        for (index, &id) in room.connections().iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(self.graph.room(id).name())?;
        }
        writeln!(f, "]")
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(input) = self.input {
            let lines: Vec<&str> = input.lines().collect();
            writeln!(f, "{}\n", lines.join("\n"))?;
        }

        writeln!(f, "Ant Hill:")?;
        writeln!(f, "Start Room: {}", self.graph.start_room().name())?;
        writeln!(f, "End Room: {}", self.graph.end_room().name())?;
        writeln!(f, "Number of Ants: {}", self.graph.ants())?;
        writeln!(f, "Rooms:")?;
        for room in self.graph.rooms() {
            self.fmt_room(f, room)?;
        }
        Ok(())
    }
}
