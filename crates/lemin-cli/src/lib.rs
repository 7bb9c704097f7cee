//! CLI logic for the lemin map checker.
//!
//! Reads a map, validates it, labels distances, and prints the report. On
//! failure the caller prints [`failure_report`] and exits with status 1.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fmt::Write as _, fs, io::Write};

use log::info;

use lemin::{ColonyBuilder, LeminError};

/// First line printed for any rejected map.
pub const INVALID_DATA_FORMAT: &str = "ERROR: invalid data format";

/// Run the lemin CLI application
///
/// Loads the configuration, processes the input map, and writes the report
/// to `out`.
///
/// # Errors
///
/// Returns `LeminError` for:
/// - Configuration loading errors
/// - File I/O errors
/// - Map format errors
/// - Rooms unreachable from the start room
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), LeminError> {
    info!(input_path = args.input; "Processing map");

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = ColonyBuilder::new(app_config);
    let report = builder.process(&source)?;

    out.write_all(report.as_bytes())?;
    out.flush()?;

    info!(input_path = args.input; "Report written");

    Ok(())
}

/// Text printed to standard output when [`run`] fails.
///
/// A rejected map prints [`INVALID_DATA_FORMAT`] followed by one line per
/// violation. Other failures print `ERROR: <message>`.
pub fn failure_report(err: &LeminError) -> String {
    let mut text = String::new();

    match err {
        LeminError::Format { err, .. } => {
            let _ = writeln!(text, "{INVALID_DATA_FORMAT}");
            for diagnostic in err.diagnostics() {
                let _ = writeln!(text, "{}", diagnostic.message());
            }
        }
        LeminError::Unreachable(_) => {
            let _ = writeln!(text, "{INVALID_DATA_FORMAT}");
            let _ = writeln!(text, "{err}");
        }
        LeminError::Io(_) | LeminError::Config(_) => {
            let _ = writeln!(text, "ERROR: {err}");
        }
    }

    text
}
