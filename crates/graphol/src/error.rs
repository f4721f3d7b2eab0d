//! Error and diagnostic system for Graphol exports.
//!
//! The main error type is [`GrapholError`]. Validation and translation
//! failures carry a [`Diagnostic`]: a message with an optional error code,
//! labels pointing at the offending nodes and edges, and help text.
//!
//! # Example
//!
//! ```
//! # use graphol::error::{Diagnostic, ErrorCode};
//! # use graphol_core::identifier::Id;
//!
//! let diag = Diagnostic::error("inclusion between a concept and a role")
//!     .with_code(ErrorCode::E202)
//!     .with_edge_label(Id::new("e3"), "offending edge")
//!     .with_secondary_node_label(Id::new("n0"), "concept expression")
//!     .with_secondary_node_label(Id::new("n1"), "role expression")
//!     .with_help("both ends of an inclusion must denote the same kind of expression");
//! ```

mod diagnostic;
mod error_code;
mod label;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use label::{Element, Label};

use std::io;

use thiserror::Error;

use graphol_core::DiagramError;

use crate::serialize;

/// The main error type for Graphol operations.
///
/// # Diagnostic Variants
///
/// `MalformedDiagram` and `UnresolvableExpression` carry a [`Diagnostic`]
/// whose labels reference diagram elements by id, so a front end can point
/// back at the offending nodes and edges.
#[derive(Debug, Error)]
pub enum GrapholError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Diagram error: {0}")]
    Diagram(#[from] DiagramError),

    #[error("Malformed diagram: {}", .0.message())]
    MalformedDiagram(Diagnostic),

    #[error("Unresolvable expression: {}", .0.message())]
    UnresolvableExpression(Diagnostic),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serialize::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GrapholError {
    /// The diagnostic attached to this error, if any.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::MalformedDiagram(diag) | Self::UnresolvableExpression(diag) => Some(diag),
            _ => None,
        }
    }
}
