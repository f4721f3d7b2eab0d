//! Graphol Core Types and Definitions
//!
//! This crate provides the graph model of Graphol ontology diagrams. It
//! includes:
//!
//! - **Identifiers**: String-interned node and edge identifiers ([`identifier::Id`])
//! - **Nodes**: The closed set of Graphol node kinds ([`node`] module)
//! - **Edges**: Typed connectors and their modifiers ([`edge`] module)
//! - **Diagram**: The graph owning nodes and edges ([`diagram::Diagram`])
//! - **Documents**: Deserializable diagram descriptions ([`document`] module)

pub mod diagram;
pub mod document;
pub mod edge;
pub mod identifier;
pub mod node;

mod error;

pub use diagram::Diagram;
pub use document::DiagramDocument;
pub use edge::{Edge, EdgeKey, EdgeKind};
pub use error::DiagramError;
pub use identifier::Id;
pub use node::{Facet, FacetKind, Node, NodeKind, Restriction};
