//! Error codes for the Graphol diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Constructor shape errors (operands and parameters of a node)
//! - `E2xx` - Edge rule errors
//! - `E3xx` - Translation errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Constructor Shape Errors (E1xx)
    // =========================================================================
    /// Cyclic operand reference.
    ///
    /// A constructor node is, directly or transitively, an operand of itself.
    E100,

    /// Wrong number of operands.
    ///
    /// The node receives fewer or more input edges than its kind allows.
    E101,

    /// Operand of the wrong kind.
    ///
    /// An operand's expression kind is not accepted by the constructor, or
    /// the operands of a constructor disagree with each other.
    E102,

    /// Invalid constructor parameters.
    ///
    /// A restriction or facet parameter is inconsistent (e.g. `min > max`).
    E103,

    /// Constructor out of place.
    ///
    /// Role chains, property assertions, attribute range restrictions and
    /// role/attribute complements cannot feed another constructor, and every
    /// constructor must be consumed by some edge: an operator by an axiom or
    /// another operator, a role chain by an inclusion, a property assertion
    /// by a membership edge.
    E104,

    // =========================================================================
    // Edge Rule Errors (E2xx)
    // =========================================================================
    /// Self loop.
    E200,

    /// Misplaced edge modifier.
    ///
    /// `complete` is only meaningful on inclusion edges and `functional` on
    /// input edges.
    E201,

    /// Incompatible inclusion endpoints.
    ///
    /// An inclusion (or equivalence) connects expressions of different kinds,
    /// such as a concept and a role.
    E202,

    /// Invalid inclusion endpoint.
    ///
    /// The node may not appear at this end of an inclusion edge.
    E203,

    /// Input into a predicate node.
    ///
    /// Concepts, roles, attributes, individuals and value domains take no
    /// operands.
    E204,

    /// Invalid functional input.
    ///
    /// Functionality can only be asserted on a role or attribute entering a
    /// domain restriction, or inverse functionality on a role entering a
    /// range restriction.
    E205,

    /// Invalid instance-of edge.
    E206,

    /// Invalid membership edge.
    E207,

    /// Duplicate edge.
    ///
    /// Reported as a warning: the edge repeats an earlier edge.
    E208,

    // =========================================================================
    // Translation Errors (E3xx)
    // =========================================================================
    /// Missing label.
    ///
    /// A node whose meaning comes from its label has no label.
    E300,

    /// Unresolvable expression.
    ///
    /// A node could not be resolved to an OWL expression.
    E301,

    /// Invalid literal.
    ///
    /// An individual label looks like a literal but is not well formed.
    E302,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E101").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
            ErrorCode::E205 => "E205",
            ErrorCode::E206 => "E206",
            ErrorCode::E207 => "E207",
            ErrorCode::E208 => "E208",
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
            ErrorCode::E302 => "E302",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "cyclic operand reference",
            ErrorCode::E101 => "wrong number of operands",
            ErrorCode::E102 => "operand of the wrong kind",
            ErrorCode::E103 => "invalid constructor parameters",
            ErrorCode::E104 => "constructor out of place",
            ErrorCode::E200 => "self loop",
            ErrorCode::E201 => "misplaced edge modifier",
            ErrorCode::E202 => "incompatible inclusion endpoints",
            ErrorCode::E203 => "invalid inclusion endpoint",
            ErrorCode::E204 => "input into predicate node",
            ErrorCode::E205 => "invalid functional input",
            ErrorCode::E206 => "invalid instance-of edge",
            ErrorCode::E207 => "invalid membership edge",
            ErrorCode::E208 => "duplicate edge",
            ErrorCode::E300 => "missing label",
            ErrorCode::E301 => "unresolvable expression",
            ErrorCode::E302 => "invalid literal",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
