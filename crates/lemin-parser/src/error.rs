//! Error and diagnostic system for the lemin parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Error categories matching the failure taxonomy (format, unresolved
//!   reference, disconnected graph)
//! - Multiple labeled spans for rich error context
//! - Severity levels
//! - Diagnostic collector for reporting every violation of one rule
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, multiple source
//! locations, and help text. The diagnostics of the first violated rule are
//! wrapped in [`ParseError`] and returned from [`parse`](crate::parse).
//!
//! # Example
//!
//! ```
//! # use lemin_parser::error::{Diagnostic, ErrorCode};
//! # use lemin_parser::Span;
//!
//! let span = Span::new(40..49);
//! let original_span = Span::new(12..21);
//!
//! let diag = Diagnostic::error("line `room1 0 0` appears more than once")
//!     .with_code(ErrorCode::E102)
//!     .with_label(span, "duplicate line")
//!     .with_secondary_label(original_span, "first written here")
//!     .with_help("remove the repeated line");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::{ErrorCode, ErrorKind};
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
