//! Serializable diagram documents.
//!
//! A [`DiagramDocument`] is the non-visual description of a diagram: node
//! identifiers, kinds, labels and parameters, and the edges between them.
//! It deserializes with [`serde`] (the CLI reads it from TOML) and is
//! converted into a [`Diagram`] with [`DiagramDocument::into_diagram`].
//!
//! ```toml
//! [[nodes]]
//! id = "n0"
//! kind = "concept"
//! label = "Person"
//!
//! [[nodes]]
//! id = "n1"
//! kind = "domain-restriction"
//! restriction = "cardinality"
//! min = 1
//!
//! [[edges]]
//! id = "e0"
//! kind = "inclusion"
//! source = "n0"
//! target = "n1"
//! ```

use log::debug;
use serde::Deserialize;

use crate::{
    diagram::Diagram,
    edge::{Edge, EdgeKind},
    error::DiagramError,
    identifier::Id,
    node::{Facet, FacetKind, Node, NodeKind, Restriction},
};

/// Node kind names accepted in documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKindName {
    Concept,
    Role,
    Attribute,
    Individual,
    ValueDomain,
    Complement,
    Union,
    Intersection,
    DisjointUnion,
    Enumeration,
    DomainRestriction,
    RangeRestriction,
    RoleChain,
    RoleInverse,
    ValueRestriction,
    PropertyAssertion,
}

/// Edge kind names accepted in documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeKindName {
    Inclusion,
    Input,
    InstanceOf,
    Membership,
}

impl From<EdgeKindName> for EdgeKind {
    fn from(name: EdgeKindName) -> Self {
        match name {
            EdgeKindName::Inclusion => EdgeKind::Inclusion,
            EdgeKindName::Input => EdgeKind::Input,
            EdgeKindName::InstanceOf => EdgeKind::InstanceOf,
            EdgeKindName::Membership => EdgeKind::Membership,
        }
    }
}

/// A facet entry of a value restriction node.
#[derive(Debug, Clone, Deserialize)]
pub struct FacetSpec {
    pub facet: String,
    pub value: String,
}

/// A node entry of a document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeSpec {
    pub id: String,
    pub kind: NodeKindName,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub restriction: Option<String>,
    #[serde(default)]
    pub min: Option<u32>,
    #[serde(default)]
    pub max: Option<u32>,
    #[serde(default)]
    pub facets: Vec<FacetSpec>,
}

/// An edge entry of a document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeSpec {
    pub id: String,
    pub kind: EdgeKindName,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub complete: bool,
    #[serde(default)]
    pub functional: bool,
}

/// A complete diagram document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagramDocument {
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl DiagramDocument {
    /// Build the diagram described by this document.
    ///
    /// Nodes and edges are inserted in document order.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::InvalidNode`] for unknown restriction or facet
    /// names and for parameters given to a node kind that does not take them,
    /// and the insertion errors of [`Diagram::add_node`] and
    /// [`Diagram::add_edge`].
    pub fn into_diagram(self) -> Result<Diagram, DiagramError> {
        let mut diagram = Diagram::new();

        for spec in self.nodes {
            diagram.add_node(spec.into_node()?)?;
        }

        for spec in self.edges {
            let edge = Edge::new(
                Id::new(&spec.id),
                spec.kind.into(),
                Id::new(&spec.source),
                Id::new(&spec.target),
            )
            .with_complete(spec.complete)
            .with_functional(spec.functional);
            diagram.add_edge(edge)?;
        }

        debug!(
            nodes = diagram.nodes_count(),
            edges = diagram.edges_count();
            "Diagram document loaded"
        );
        Ok(diagram)
    }
}

impl NodeSpec {
    fn into_node(self) -> Result<Node, DiagramError> {
        let id = Id::new(&self.id);
        let invalid = |reason: String| DiagramError::InvalidNode { node: id, reason };

        let takes_restriction = matches!(
            self.kind,
            NodeKindName::DomainRestriction | NodeKindName::RangeRestriction
        );
        if !takes_restriction
            && (self.restriction.is_some() || self.min.is_some() || self.max.is_some())
        {
            return Err(invalid(
                "only domain and range restrictions take restriction parameters".to_string(),
            ));
        }
        if self.kind != NodeKindName::ValueRestriction && !self.facets.is_empty() {
            return Err(invalid(
                "only value restrictions take facets".to_string(),
            ));
        }

        let kind = match self.kind {
            NodeKindName::Concept => NodeKind::Concept,
            NodeKindName::Role => NodeKind::Role,
            NodeKindName::Attribute => NodeKind::Attribute,
            NodeKindName::Individual => NodeKind::Individual,
            NodeKindName::ValueDomain => NodeKind::ValueDomain,
            NodeKindName::Complement => NodeKind::Complement,
            NodeKindName::Union => NodeKind::Union,
            NodeKindName::Intersection => NodeKind::Intersection,
            NodeKindName::DisjointUnion => NodeKind::DisjointUnion,
            NodeKindName::Enumeration => NodeKind::Enumeration,
            NodeKindName::DomainRestriction => {
                NodeKind::DomainRestriction(self.restriction(id)?)
            }
            NodeKindName::RangeRestriction => NodeKind::RangeRestriction(self.restriction(id)?),
            NodeKindName::RoleChain => NodeKind::RoleChain,
            NodeKindName::RoleInverse => NodeKind::RoleInverse,
            NodeKindName::ValueRestriction => {
                let facets = self
                    .facets
                    .iter()
                    .map(|spec| {
                        spec.facet
                            .parse::<FacetKind>()
                            .map(|kind| Facet::new(kind, spec.value.clone()))
                            .map_err(|err| invalid(format!("{err} `{}`", spec.facet)))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                NodeKind::ValueRestriction(facets)
            }
            NodeKindName::PropertyAssertion => NodeKind::PropertyAssertion,
        };

        let mut node = Node::new(id, kind);
        if let Some(label) = self.label {
            node = node.with_label(label);
        }
        if let Some(description) = self.description {
            node = node.with_description(description);
        }
        Ok(node)
    }

    /// Resolve the restriction parameters. Bounds imply a cardinality.
    fn restriction(&self, id: Id) -> Result<Restriction, DiagramError> {
        let has_bounds = self.min.is_some() || self.max.is_some();
        let restriction = match self.restriction.as_deref() {
            None if has_bounds => Restriction::Cardinality {
                min: None,
                max: None,
            },
            None => Restriction::default(),
            Some(name) => name.parse().map_err(|err: &str| DiagramError::InvalidNode {
                node: id,
                reason: format!("{err} `{name}`"),
            })?,
        };

        match restriction {
            Restriction::Cardinality { .. } => Ok(Restriction::Cardinality {
                min: self.min,
                max: self.max,
            }),
            _ if has_bounds => Err(DiagramError::InvalidNode {
                node: id,
                reason: format!("`{restriction}` restrictions do not take cardinality bounds"),
            }),
            other => Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> DiagramDocument {
        toml::from_str(source).expect("document should deserialize")
    }

    #[test]
    fn test_document_into_diagram() {
        let document = parse(
            r#"
            [[nodes]]
            id = "n0"
            kind = "concept"
            label = "Person"
            description = "A human being"

            [[nodes]]
            id = "n1"
            kind = "role"
            label = "hasParent"

            [[nodes]]
            id = "n2"
            kind = "domain-restriction"

            [[edges]]
            id = "e0"
            kind = "input"
            source = "n1"
            target = "n2"
            functional = true

            [[edges]]
            id = "e1"
            kind = "inclusion"
            source = "n0"
            target = "n2"
            "#,
        );

        let diagram = document.into_diagram().unwrap();
        assert_eq!(diagram.nodes_count(), 3);
        assert_eq!(diagram.edges_count(), 2);

        let person = diagram.node(Id::new("n0")).unwrap();
        assert_eq!(person.description(), Some("A human being"));
        assert_eq!(
            diagram.node(Id::new("n2")).unwrap().kind(),
            &NodeKind::DomainRestriction(Restriction::Exists)
        );
        assert!(diagram.edge(Id::new("e0")).unwrap().is_functional());
    }

    #[test]
    fn test_cardinality_bounds() {
        let document = parse(
            r#"
            [[nodes]]
            id = "n0"
            kind = "domain-restriction"
            min = 1
            max = 3
            "#,
        );

        let diagram = document.into_diagram().unwrap();
        assert_eq!(
            diagram.node(Id::new("n0")).unwrap().kind(),
            &NodeKind::DomainRestriction(Restriction::Cardinality {
                min: Some(1),
                max: Some(3),
            })
        );
    }

    #[test]
    fn test_facets() {
        let document = parse(
            r#"
            [[nodes]]
            id = "n0"
            kind = "value-restriction"
            facets = [{ facet = ">=", value = "18" }]
            "#,
        );

        let diagram = document.into_diagram().unwrap();
        match diagram.node(Id::new("n0")).unwrap().kind() {
            NodeKind::ValueRestriction(facets) => {
                assert_eq!(facets, &vec![Facet::new(FacetKind::MinInclusive, "18")]);
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_bounds_on_exists_rejected() {
        let document = parse(
            r#"
            [[nodes]]
            id = "n0"
            kind = "range-restriction"
            restriction = "exists"
            max = 1
            "#,
        );

        assert!(matches!(
            document.into_diagram(),
            Err(DiagramError::InvalidNode { .. })
        ));
    }

    #[test]
    fn test_restriction_on_concept_rejected() {
        let document = parse(
            r#"
            [[nodes]]
            id = "n0"
            kind = "concept"
            restriction = "forall"
            "#,
        );

        assert!(matches!(
            document.into_diagram(),
            Err(DiagramError::InvalidNode { .. })
        ));
    }

    #[test]
    fn test_unknown_restriction_rejected() {
        let document = parse(
            r#"
            [[nodes]]
            id = "n0"
            kind = "domain-restriction"
            restriction = "some"
            "#,
        );

        let err = document.into_diagram().unwrap_err();
        assert_eq!(
            err.to_string(),
            "node `n0` is invalid: Invalid restriction value `some`"
        );
    }

    #[test]
    fn test_missing_endpoint_rejected() {
        let document = parse(
            r#"
            [[nodes]]
            id = "n0"
            kind = "concept"

            [[edges]]
            id = "e0"
            kind = "instance-of"
            source = "n0"
            target = "n7"
            "#,
        );

        assert!(matches!(
            document.into_diagram(),
            Err(DiagramError::MissingEndpoint { .. })
        ));
    }

    #[test]
    fn test_unknown_kind_fails_to_deserialize() {
        let result: Result<DiagramDocument, _> = toml::from_str(
            r#"
            [[nodes]]
            id = "n0"
            kind = "hexagon"
            "#,
        );
        assert!(result.is_err());
    }
}
