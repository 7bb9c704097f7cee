//! The core diagnostic type for the lemin error system.
//!
//! A [`Diagnostic`] represents a single error or warning with optional
//! error code, multiple labeled source spans, and help text.

use std::fmt;

use crate::{
    Span,
    error::{ErrorCode, Label, Severity},
};

/// A diagnostic message with source location information.
///
/// # Example
///
/// ```text
/// error[E202]: connection refers to undeclared room `c`
///    |
///  8 | a-c
///    | ^^^ room `c` is not declared
///    |
///    = help: declare the room as `c <x> <y>` before using it
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use lemin_parser::error::{Diagnostic, ErrorCode};
    /// # use lemin_parser::Span;
    ///
    /// let diag = Diagnostic::error("connection refers to undeclared room `c`")
    ///     .with_code(ErrorCode::E202)
    ///     .with_label(Span::new(30..33), "room `c` is not declared");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E001]: message" or "error: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::error("test error");

        assert!(diag.severity().is_error());
        assert_eq!(diag.message(), "test error");
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_warning() {
        let diag = Diagnostic::warning("room `a` is connected to itself");

        assert!(diag.severity().is_warning());
        assert_eq!(diag.to_string(), "warning: room `a` is connected to itself");
    }

    #[test]
    fn test_diagnostic_builder_chain() {
        let diag = Diagnostic::error("line `room1 0 0` appears more than once")
            .with_code(ErrorCode::E102)
            .with_label(Span::new(40..49), "duplicate line")
            .with_secondary_label(Span::new(12..21), "first written here")
            .with_help("remove the repeated line");

        assert_eq!(diag.code(), Some(ErrorCode::E102));
        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(diag.labels()[1].is_secondary());
        assert_eq!(diag.help(), Some("remove the repeated line"));
    }

    #[test]
    fn test_diagnostic_display_with_code() {
        let diag = Diagnostic::error("ant count must be positive").with_code(ErrorCode::E003);

        assert_eq!(diag.to_string(), "error[E003]: ant count must be positive");
    }

    #[test]
    fn test_diagnostic_display_without_code() {
        let diag = Diagnostic::error("something went wrong");

        assert_eq!(diag.to_string(), "error: something went wrong");
    }
}
