//! Error codes for the lemin diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Ant count errors
//! - `E1xx` - Line structure errors
//! - `E2xx` - Graph construction errors

use std::fmt;

/// Failure category of an error code.
///
/// Unresolved references are a special case of format errors; a room
/// without connections is reported as a disconnected graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input violates the line grammar or a structural rule.
    Format,

    /// A connection names a room that was never declared.
    UnresolvedReference,

    /// A room cannot be reached because it has no connections.
    DisconnectedGraph,
}

impl ErrorKind {
    /// Returns `true` for [`ErrorKind::Format`] and its
    /// [`ErrorKind::UnresolvedReference`] subtype.
    pub fn is_format(&self) -> bool {
        matches!(self, ErrorKind::Format | ErrorKind::UnresolvedReference)
    }
}

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Ant Count Errors (E0xx)
    // =========================================================================
    /// Too few lines.
    ///
    /// After comments are removed the input must have at least six lines:
    /// the ant count, two lines per special room, and one connection.
    E001,

    /// Ant count is not an integer.
    ///
    /// The first non-comment line must be a base-10 integer.
    E002,

    /// Ant count is not positive.
    E003,

    // =========================================================================
    // Line Structure Errors (E1xx)
    // =========================================================================
    /// More than one dash in a line.
    E100,

    /// More than two spaces in a line.
    E101,

    /// Duplicate line.
    ///
    /// Two non-comment lines are byte-for-byte identical.
    E102,

    /// Input ends with a directive.
    ///
    /// A `##start` or `##end` line must be followed by its room.
    E103,

    /// Directive not followed by a room.
    ///
    /// The line after `##start` or `##end` must have the form `<name> <x> <y>`.
    E104,

    /// Missing directive.
    ///
    /// Both `##start` and `##end` must be present.
    E105,

    /// Malformed line.
    ///
    /// The line is neither a room (`<name> <x> <y>`) nor a connection
    /// (`<name>-<name>`).
    E106,

    // =========================================================================
    // Graph Construction Errors (E2xx)
    // =========================================================================
    /// Duplicate room name.
    E200,

    /// Duplicate room coordinates.
    E201,

    /// Undefined room reference.
    ///
    /// A connection names a room that has not been declared.
    E202,

    /// Duplicate connection.
    ///
    /// The same pair of rooms is connected twice with the endpoints swapped.
    E203,

    /// Room without connections.
    E204,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Ant count errors
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            // Line structure errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E105 => "E105",
            ErrorCode::E106 => "E106",
            // Graph construction errors
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Ant count errors
            ErrorCode::E001 => "too few lines",
            ErrorCode::E002 => "ant count is not an integer",
            ErrorCode::E003 => "ant count is not positive",
            // Line structure errors
            ErrorCode::E100 => "too many dashes",
            ErrorCode::E101 => "too many spaces",
            ErrorCode::E102 => "duplicate line",
            ErrorCode::E103 => "trailing directive",
            ErrorCode::E104 => "directive without room",
            ErrorCode::E105 => "missing directive",
            ErrorCode::E106 => "malformed line",
            // Graph construction errors
            ErrorCode::E200 => "duplicate room name",
            ErrorCode::E201 => "duplicate coordinates",
            ErrorCode::E202 => "undefined room",
            ErrorCode::E203 => "duplicate connection",
            ErrorCode::E204 => "room without connections",
        }
    }

    /// Returns the failure category of this code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::E202 => ErrorKind::UnresolvedReference,
            ErrorCode::E204 => ErrorKind::DisconnectedGraph,
            _ => ErrorKind::Format,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
