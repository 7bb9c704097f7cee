//! Labeled source spans for diagnostic messages.
//!
//! A label associates a message with a span in the source code,
//! providing context for where an error or warning occurred.

use crate::Span;

/// A labeled span in source code.
///
/// # Primary vs Secondary Labels
///
/// - **Primary labels** mark the offending line.
/// - **Secondary labels** point at related lines, such as the first
///   occurrence of a duplicated line or the directive a room belongs to.
///
/// # Example
///
/// ```text
/// error[E102]: line `room1 0 0` appears more than once
///    |
///  3 | room1 0 0
///    | --------- first written here
///  7 | room1 0 0
///    | ^^^^^^^^^ duplicate line
/// ```
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Check if this is a secondary label.
    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}
