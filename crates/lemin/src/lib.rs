//! lemin - Validate lem-in ant-colony maps.
//!
//! Parses a map, checks it against the format rules, labels every room with
//! its breadth-first distance from the start room, and renders a text
//! report of the colony.

pub mod config;
pub mod distance;
pub mod report;

mod error;

pub use lemin_core::{graph, room, span};
pub use lemin_parser::error as diagnostics;

pub use error::LeminError;

use log::{debug, info, trace};

use lemin_core::graph::AntColonyGraph;

use config::AppConfig;
use report::Report;

/// Builder for parsing, labeling, and reporting ant colonies.
///
/// # Examples
///
/// ```
/// use lemin::{ColonyBuilder, config::AppConfig};
///
/// let source = "2\n##start\nstart 0 0\n##end\nend 1 0\nstart-end";
///
/// let builder = ColonyBuilder::new(AppConfig::default());
///
/// // Parse and validate
/// let mut colony = builder.parse(source).expect("Failed to parse");
///
/// // Assign distances from the start room
/// builder.label_distances(&mut colony).expect("Unreachable room");
///
/// let report = builder.render_report(source, &colony);
/// assert!(report.contains("Number of Ants: 2"));
///
/// // Or do everything at once
/// let report = ColonyBuilder::default().process(source).expect("Failed");
/// ```
#[derive(Debug, Default)]
pub struct ColonyBuilder {
    config: AppConfig,
}

impl ColonyBuilder {
    /// Create a new colony builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse and validate map text into a colony graph.
    ///
    /// Room distances are left unset.
    ///
    /// # Errors
    ///
    /// Returns [`LeminError::Format`] with the diagnostics of the first rule
    /// the map violates.
    pub fn parse(&self, source: &str) -> Result<AntColonyGraph, LeminError> {
        info!("Parsing colony");

        let graph = lemin_parser::parse(source, self.config.validation().parse_config())
            .map_err(|err| LeminError::new_format_error(err, source))?;

        debug!(rooms = graph.rooms_count(); "Colony parsed successfully");
        trace!(graph:?; "Parsed colony");

        Ok(graph)
    }

    /// Label every room with its distance from the start room.
    ///
    /// # Errors
    ///
    /// Returns [`LeminError::Unreachable`] naming the first unreachable room
    /// when the configuration requires every room to be reachable.
    pub fn label_distances(&self, graph: &mut AntColonyGraph) -> Result<(), LeminError> {
        info!("Labeling distances");

        let unreachable = distance::label_distances(graph);
        if let Some(&first) = unreachable.first() {
            let name = graph.room(first).name().to_string();
            if self.config.validation().require_reachable() {
                return Err(LeminError::Unreachable(name));
            }
            debug!(room = name, count = unreachable.len(); "Unreachable rooms left unlabeled");
        }

        Ok(())
    }

    /// Render the text report of a labeled colony.
    ///
    /// `source` is echoed first when the configuration asks for it.
    pub fn render_report(&self, source: &str, graph: &AntColonyGraph) -> String {
        let report = Report::new(graph);
        let report = if self.config.report().echo_input() {
            report.with_input(source)
        } else {
            report
        };
        report.to_string()
    }

    /// Parse, label, and report in one step.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`parse`](Self::parse) or
    /// [`label_distances`](Self::label_distances).
    pub fn process(&self, source: &str) -> Result<String, LeminError> {
        let mut graph = self.parse(source)?;
        self.label_distances(&mut graph)?;

        info!("Rendering report");
        Ok(self.render_report(source, &graph))
    }
}
