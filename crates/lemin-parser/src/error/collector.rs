//! Collector for accumulating the diagnostics of one validation rule.
//!
//! Each rule reports every line that violates it, then the collector is
//! finished so the run stops before the next rule.

use log::warn;

use crate::error::{Diagnostic, ParseError};

/// A collector for accumulating diagnostics during one validation rule.
///
/// # Example
///
/// ```text
/// let mut collector = DiagnosticCollector::new();
///
/// collector.emit(
///     Diagnostic::error("line contains more than one dash")
///         .with_code(ErrorCode::E100)
///         .with_label(span1, "here")
/// );
///
/// // Stop here if anything was wrong
/// collector.finish()?;
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.errors.push(diagnostic);
        } else {
            self.warnings.push(diagnostic);
        }
    }

    /// Finish collection and return a result.
    ///
    /// Warnings are always logged and never part of the returned error.
    ///
    /// - If there are errors, returns `Err(ParseError)` with the errors only.
    /// - Otherwise returns `Ok(())`.
    pub fn finish(self) -> Result<(), ParseError> {
        for diagnostic in &self.warnings {
            warn!(diagnostic:%; "Accepted with warning");
        }

        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ParseError::new(self.errors))
        }
    }
}
