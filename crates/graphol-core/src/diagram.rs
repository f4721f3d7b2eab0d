//! The Graphol diagram graph.
//!
//! A [`Diagram`] owns its nodes and edges and keeps both in insertion order,
//! which is the order every later pass walks them in. Incoming and outgoing
//! edge indexes are maintained on insertion so that neighbourhood queries do
//! not rescan the edge list.
//!
//! Construction enforces the structural invariants of the model:
//! - node identifiers are unique,
//! - edge identifiers are unique,
//! - both endpoints of an edge exist in the diagram.

use std::collections::HashMap;

use indexmap::IndexMap;
use log::trace;

use crate::{
    edge::{Edge, EdgeKind},
    error::DiagramError,
    identifier::Id,
    node::Node,
};

/// Position of an edge in the diagram's edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct EdgeIndex(usize);

/// An ontology diagram: typed nodes joined by typed edges.
///
/// # Examples
///
/// ```
/// use graphol_core::{Diagram, Edge, EdgeKind, Id, Node, NodeKind};
///
/// let mut diagram = Diagram::new();
/// diagram.add_node(Node::new(Id::node(0), NodeKind::Concept).with_label("A"))?;
/// diagram.add_node(Node::new(Id::node(1), NodeKind::Concept).with_label("B"))?;
/// diagram.add_edge(Edge::new(Id::edge(0), EdgeKind::Inclusion, Id::node(0), Id::node(1)))?;
///
/// assert_eq!(diagram.nodes_count(), 2);
/// assert_eq!(diagram.outgoing(Id::node(0)).count(), 1);
/// # Ok::<(), graphol_core::DiagramError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    nodes: IndexMap<Id, Node>,
    edges: IndexMap<Id, Edge>,
    incoming_edges: HashMap<Id, Vec<EdgeIndex>>,
    outgoing_edges: HashMap<Id, Vec<EdgeIndex>>,
}

impl Diagram {
    /// Creates a new empty diagram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to the diagram.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::DuplicateNode`] if a node with the same
    /// identifier already exists.
    pub fn add_node(&mut self, node: Node) -> Result<Id, DiagramError> {
        let id = node.id();
        if self.nodes.contains_key(&id) {
            return Err(DiagramError::DuplicateNode(id));
        }
        trace!(node_id:% = id, kind = node.kind().name(); "Adding node");
        self.nodes.insert(id, node);
        Ok(id)
    }

    /// Adds a directed edge between two existing nodes.
    ///
    /// Updates both the edge storage and the incoming/outgoing edge indexes.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::DuplicateEdge`] if the edge identifier is
    /// taken, or [`DiagramError::MissingEndpoint`] if the source or target
    /// node does not exist.
    pub fn add_edge(&mut self, edge: Edge) -> Result<Id, DiagramError> {
        let id = edge.id();
        if self.edges.contains_key(&id) {
            return Err(DiagramError::DuplicateEdge(id));
        }
        for endpoint in [edge.source(), edge.target()] {
            if !self.nodes.contains_key(&endpoint) {
                return Err(DiagramError::MissingEndpoint { edge: id, endpoint });
            }
        }

        trace!(edge:% = edge; "Adding edge");
        let (idx, _) = self.edges.insert_full(id, edge);
        let idx = EdgeIndex(idx);
        self.outgoing_edges
            .entry(edge.source())
            .or_default()
            .push(idx);
        self.incoming_edges
            .entry(edge.target())
            .or_default()
            .push(idx);
        Ok(id)
    }

    /// Returns the node with the given ID, if it exists.
    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Returns the edge with the given ID, if it exists.
    pub fn edge(&self, id: Id) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Returns an iterator over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Returns an iterator over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Returns the total number of nodes in the diagram.
    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the total number of edges in the diagram.
    pub fn edges_count(&self) -> usize {
        self.edges.len()
    }

    /// Checks if a node with the given ID exists in the diagram.
    pub fn contains_node(&self, id: Id) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the edges entering the given node, in insertion order.
    ///
    /// Returns an empty iterator for unknown nodes.
    pub fn incoming(&self, id: Id) -> impl Iterator<Item = &Edge> {
        self.edges_at(self.incoming_edges.get(&id))
    }

    /// Returns the edges leaving the given node, in insertion order.
    ///
    /// Returns an empty iterator for unknown nodes.
    pub fn outgoing(&self, id: Id) -> impl Iterator<Item = &Edge> {
        self.edges_at(self.outgoing_edges.get(&id))
    }

    /// Returns the input edges of a constructor node.
    ///
    /// The insertion order of these edges is the operand order, which is
    /// significant for role chains and property assertions.
    pub fn inputs(&self, id: Id) -> impl Iterator<Item = &Edge> {
        self.incoming(id)
            .filter(|edge| edge.kind() == EdgeKind::Input)
    }

    fn edges_at<'a>(&'a self, indexes: Option<&'a Vec<EdgeIndex>>) -> impl Iterator<Item = &'a Edge> {
        indexes
            .into_iter()
            .flatten()
            .filter_map(|idx| self.edges.get_index(idx.0).map(|(_, edge)| edge))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    fn concept(idx: usize, label: &str) -> Node {
        Node::new(Id::node(idx), NodeKind::Concept).with_label(label)
    }

    #[test]
    fn test_diagram_new() {
        let diagram = Diagram::new();

        assert_eq!(diagram.nodes_count(), 0);
        assert_eq!(diagram.edges_count(), 0);
        assert_eq!(diagram.nodes().count(), 0);
    }

    #[test]
    fn test_add_node() {
        let mut diagram = Diagram::new();
        diagram.add_node(concept(0, "A")).unwrap();
        diagram.add_node(concept(1, "B")).unwrap();

        assert_eq!(diagram.nodes_count(), 2);
        assert!(diagram.contains_node(Id::node(0)));
        assert_eq!(diagram.node(Id::node(1)).unwrap().label(), Some("B"));
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut diagram = Diagram::new();
        diagram.add_node(concept(0, "A")).unwrap();

        let err = diagram.add_node(concept(0, "Other")).unwrap_err();
        assert_eq!(err, DiagramError::DuplicateNode(Id::node(0)));
        assert_eq!(diagram.node(Id::node(0)).unwrap().label(), Some("A"));
    }

    #[test]
    fn test_add_edge_requires_endpoints() {
        let mut diagram = Diagram::new();
        diagram.add_node(concept(0, "A")).unwrap();

        let err = diagram
            .add_edge(Edge::new(
                Id::edge(0),
                EdgeKind::Inclusion,
                Id::node(0),
                Id::node(9),
            ))
            .unwrap_err();

        assert_eq!(
            err,
            DiagramError::MissingEndpoint {
                edge: Id::edge(0),
                endpoint: Id::node(9),
            }
        );
        assert_eq!(diagram.edges_count(), 0);
    }

    #[test]
    fn test_duplicate_edge_rejected() {
        let mut diagram = Diagram::new();
        diagram.add_node(concept(0, "A")).unwrap();
        diagram.add_node(concept(1, "B")).unwrap();
        let edge = Edge::new(Id::edge(0), EdgeKind::Inclusion, Id::node(0), Id::node(1));
        diagram.add_edge(edge).unwrap();

        assert_eq!(
            diagram.add_edge(edge).unwrap_err(),
            DiagramError::DuplicateEdge(Id::edge(0))
        );
    }

    #[test]
    fn test_nodes_keep_insertion_order() {
        let mut diagram = Diagram::new();
        for (idx, label) in ["Z", "A", "M"].iter().enumerate() {
            diagram.add_node(concept(idx, label)).unwrap();
        }

        let labels: Vec<_> = diagram.nodes().filter_map(Node::label).collect();
        assert_eq!(labels, vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_incoming_and_outgoing() {
        // Diamond:
        //     top
        //    /   \
        //  left  right
        //    \   /
        //    bottom
        let mut diagram = Diagram::new();
        for (idx, label) in ["top", "left", "right", "bottom"].iter().enumerate() {
            diagram.add_node(concept(idx, label)).unwrap();
        }
        let links = [(0, 1), (0, 2), (1, 3), (2, 3)];
        for (idx, (source, target)) in links.iter().enumerate() {
            diagram
                .add_edge(Edge::new(
                    Id::edge(idx),
                    EdgeKind::Inclusion,
                    Id::node(*source),
                    Id::node(*target),
                ))
                .unwrap();
        }

        assert_eq!(diagram.outgoing(Id::node(0)).count(), 2);
        assert_eq!(diagram.incoming(Id::node(0)).count(), 0);
        let bottom_sources: Vec<_> = diagram
            .incoming(Id::node(3))
            .map(|edge| edge.source())
            .collect();
        assert_eq!(bottom_sources, vec![Id::node(1), Id::node(2)]);
    }

    #[test]
    fn test_inputs_filter_and_order() {
        let mut diagram = Diagram::new();
        diagram
            .add_node(Node::new(Id::node(0), NodeKind::Role).with_label("r"))
            .unwrap();
        diagram
            .add_node(Node::new(Id::node(1), NodeKind::Role).with_label("s"))
            .unwrap();
        diagram
            .add_node(Node::new(Id::node(2), NodeKind::RoleChain))
            .unwrap();
        diagram
            .add_node(Node::new(Id::node(3), NodeKind::Role).with_label("t"))
            .unwrap();

        diagram
            .add_edge(Edge::new(Id::edge(0), EdgeKind::Input, Id::node(1), Id::node(2)))
            .unwrap();
        diagram
            .add_edge(Edge::new(Id::edge(1), EdgeKind::Input, Id::node(0), Id::node(2)))
            .unwrap();
        diagram
            .add_edge(Edge::new(Id::edge(2), EdgeKind::Inclusion, Id::node(3), Id::node(2)))
            .unwrap();

        let operands: Vec<_> = diagram.inputs(Id::node(2)).map(|e| e.source()).collect();
        assert_eq!(operands, vec![Id::node(1), Id::node(0)]);
        assert_eq!(diagram.incoming(Id::node(2)).count(), 3);
    }

    #[test]
    fn test_unknown_node_has_no_edges() {
        let diagram = Diagram::new();

        assert_eq!(diagram.incoming(Id::new("missing")).count(), 0);
        assert_eq!(diagram.outgoing(Id::new("missing")).count(), 0);
    }

    #[test]
    fn test_self_loop_is_stored() {
        let mut diagram = Diagram::new();
        diagram.add_node(concept(0, "A")).unwrap();
        diagram
            .add_edge(Edge::new(Id::edge(0), EdgeKind::Inclusion, Id::node(0), Id::node(0)))
            .unwrap();

        assert_eq!(diagram.incoming(Id::node(0)).count(), 1);
        assert_eq!(diagram.outgoing(Id::node(0)).count(), 1);
    }
}
