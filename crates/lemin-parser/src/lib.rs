//! # Lemin Parser
//!
//! Parser and validator for lem-in ant-colony maps. This crate turns the map
//! text into an [`AntColonyGraph`], or reports every violation of the first
//! rule the map breaks.
//!
//! ## Usage
//!
//! ```
//! # use lemin_parser::{parse, ParseConfig, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = "2\n##start\nhome 0 0\n##end\ngoal 1 0\nhome-goal";
//!
//!     let graph = parse(source, ParseConfig::default())?;
//!     assert_eq!(graph.ants(), 2);
//!     Ok(())
//! }
//! ```

mod builder;
pub mod comments;
pub mod error;
pub mod line;
pub mod source;
mod validate;

pub use error::ParseError;
pub use lemin_core::span::Span;

use lemin_core::graph::AntColonyGraph;
use log::{debug, info};

/// Options for the graph-building rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    /// Reject `B-A` when `A-B` was already declared
    pub reject_reversed_connections: bool,
}

impl ParseConfig {
    /// Create a new ParseConfig
    pub fn new(reject_reversed_connections: bool) -> Self {
        Self {
            reject_reversed_connections,
        }
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Parse map text into an ant-colony graph.
///
/// This is the main entry point. It runs the pipeline:
///
/// 1. **Split** - Cut the source into spanned lines
/// 2. **Strip** - Drop comment lines, keeping `##start` and `##end`
/// 3. **Validate** - Check the line structure (rules 1 to 7)
/// 4. **Build** - Construct the graph (rules 8 to 10)
///
/// Room distances are left unset.
///
/// # Errors
///
/// Returns a [`ParseError`] holding one diagnostic per offending line of the
/// first rule that fails.
pub fn parse(source: &str, config: ParseConfig) -> Result<AntColonyGraph, ParseError> {
    info!(bytes = source.len(); "Parsing map");

    // Step 1: Split
    let lines = source::split_lines(source);

    // Step 2: Strip
    let lines = comments::strip_comments(&lines);
    debug!(lines = lines.len(); "Comments stripped");

    // Step 3: Validate
    let validated = validate::validate(&lines)?;

    // Step 4: Build
    let graph = builder::build_graph(&validated, &config)?;

    info!(
        rooms = graph.rooms_count(),
        connections = graph.connections().len();
        "Map parsed"
    );
    Ok(graph)
}
