//! Errors raised while building a diagram.

use thiserror::Error;

use crate::identifier::Id;

/// Structural errors detected while a [`Diagram`](crate::Diagram) is being
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    #[error("node `{0}` is defined more than once")]
    DuplicateNode(Id),

    #[error("edge `{0}` is defined more than once")]
    DuplicateEdge(Id),

    #[error("edge `{edge}` references missing node `{endpoint}`")]
    MissingEndpoint { edge: Id, endpoint: Id },

    #[error("node `{node}` is invalid: {reason}")]
    InvalidNode { node: Id, reason: String },
}
