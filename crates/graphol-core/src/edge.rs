//! Diagram edge types.

use std::fmt;

use crate::identifier::Id;

/// The kind of a Graphol edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Subsumption between two expressions; equivalence when `complete`.
    Inclusion,
    /// Operand link from an expression into a constructor node.
    Input,
    /// Typing of an individual by a concept expression.
    InstanceOf,
    /// Membership of a property assertion in a role or attribute.
    Membership,
}

impl EdgeKind {
    /// Human readable name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            EdgeKind::Inclusion => "inclusion",
            EdgeKind::Input => "input",
            EdgeKind::InstanceOf => "instance-of",
            EdgeKind::Membership => "membership",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The identity of an edge up to its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    kind: EdgeKind,
    source: Id,
    target: Id,
    complete: bool,
    functional: bool,
}

/// A directed, typed connector between two diagram nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    id: Id,
    kind: EdgeKind,
    source: Id,
    target: Id,
    complete: bool,
    functional: bool,
}

impl Edge {
    /// Create an edge without modifiers.
    pub fn new(id: Id, kind: EdgeKind, source: Id, target: Id) -> Self {
        Self {
            id,
            kind,
            source,
            target,
            complete: false,
            functional: false,
        }
    }

    /// Set the `complete` (equivalence) modifier.
    pub fn with_complete(mut self, complete: bool) -> Self {
        self.complete = complete;
        self
    }

    /// Set the `functional` modifier.
    pub fn with_functional(mut self, functional: bool) -> Self {
        self.functional = functional;
        self
    }

    /// Get the edge identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the edge kind.
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    /// Get the source node Id of this edge.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Get the target node Id of this edge.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Whether the edge expresses an equivalence rather than an inclusion.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Whether the edge asserts functionality of its source property.
    pub fn is_functional(&self) -> bool {
        self.functional
    }

    /// Everything but the id: two edges with the same key are duplicates.
    pub fn key(&self) -> EdgeKey {
        EdgeKey {
            kind: self.kind,
            source: self.source,
            target: self.target,
            complete: self.complete,
            functional: self.functional,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} edge {} ({} -> {})",
            self.kind, self.id, self.source, self.target
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_default_off() {
        let edge = Edge::new(Id::edge(0), EdgeKind::Inclusion, Id::node(0), Id::node(1));

        assert!(!edge.is_complete());
        assert!(!edge.is_functional());
    }

    #[test]
    fn test_key_ignores_id() {
        let first = Edge::new(Id::edge(0), EdgeKind::Inclusion, Id::node(0), Id::node(1));
        let second = Edge::new(Id::edge(1), EdgeKind::Inclusion, Id::node(0), Id::node(1));
        let complete = second.with_complete(true);

        assert_eq!(first.key(), second.key());
        assert_ne!(first.key(), complete.key());
    }

    #[test]
    fn test_display() {
        let edge = Edge::new(Id::new("e9"), EdgeKind::Input, Id::new("n1"), Id::new("n2"));
        assert_eq!(edge.to_string(), "input edge e9 (n1 -> n2)");
    }
}
