//! Diagram node types.
//!
//! A Graphol node is a plain value: an identifier, a [`NodeKind`] and the
//! optional textual data the editor attaches to it. The kind is a closed
//! tagged variant; parameters such as the restriction of a domain
//! restriction live inside the variant that uses them.

use std::{fmt, str::FromStr};

use crate::identifier::Id;

/// The restriction a domain or range restriction node expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Restriction {
    /// Existential quantification (`exists`).
    #[default]
    Exists,
    /// Universal quantification (`forall`).
    Forall,
    /// Local reflexivity (`self`).
    SelfRestriction,
    /// Qualified cardinality with optional lower and upper bounds.
    Cardinality { min: Option<u32>, max: Option<u32> },
}

impl Restriction {
    /// Returns `true` for [`Restriction::Exists`].
    pub fn is_exists(&self) -> bool {
        matches!(self, Restriction::Exists)
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Restriction::Exists => write!(f, "exists"),
            Restriction::Forall => write!(f, "forall"),
            Restriction::SelfRestriction => write!(f, "self"),
            Restriction::Cardinality { min, max } => {
                let bound = |value: &Option<u32>| value.map_or("-".to_string(), |v| v.to_string());
                write!(f, "({}, {})", bound(min), bound(max))
            }
        }
    }
}

impl FromStr for Restriction {
    type Err = &'static str;

    /// Parses the name-only restrictions; cardinalities carry bounds and are
    /// built directly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exists" => Ok(Restriction::Exists),
            "forall" => Ok(Restriction::Forall),
            "self" => Ok(Restriction::SelfRestriction),
            "cardinality" => Ok(Restriction::Cardinality {
                min: None,
                max: None,
            }),
            _ => Err("Invalid restriction value"),
        }
    }
}

/// Constraining facets usable in a value restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetKind {
    Length,
    MinLength,
    MaxLength,
    Pattern,
    LangRange,
    MinInclusive,
    MinExclusive,
    MaxInclusive,
    MaxExclusive,
}

impl FacetKind {
    /// The `xsd`/`rdf` local name of the facet.
    pub fn local_name(&self) -> &'static str {
        match self {
            FacetKind::Length => "length",
            FacetKind::MinLength => "minLength",
            FacetKind::MaxLength => "maxLength",
            FacetKind::Pattern => "pattern",
            FacetKind::LangRange => "langRange",
            FacetKind::MinInclusive => "minInclusive",
            FacetKind::MinExclusive => "minExclusive",
            FacetKind::MaxInclusive => "maxInclusive",
            FacetKind::MaxExclusive => "maxExclusive",
        }
    }

    /// The symbol used for the facet by Manchester syntax.
    pub fn symbol(&self) -> &'static str {
        match self {
            FacetKind::Length => "length",
            FacetKind::MinLength => "minLength",
            FacetKind::MaxLength => "maxLength",
            FacetKind::Pattern => "pattern",
            FacetKind::LangRange => "langRange",
            FacetKind::MinInclusive => ">=",
            FacetKind::MinExclusive => ">",
            FacetKind::MaxInclusive => "<=",
            FacetKind::MaxExclusive => "<",
        }
    }
}

impl FromStr for FacetKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "length" => Ok(FacetKind::Length),
            "minLength" | "min-length" => Ok(FacetKind::MinLength),
            "maxLength" | "max-length" => Ok(FacetKind::MaxLength),
            "pattern" => Ok(FacetKind::Pattern),
            "langRange" | "lang-range" => Ok(FacetKind::LangRange),
            "minInclusive" | "min-inclusive" | ">=" => Ok(FacetKind::MinInclusive),
            "minExclusive" | "min-exclusive" | ">" => Ok(FacetKind::MinExclusive),
            "maxInclusive" | "max-inclusive" | "<=" => Ok(FacetKind::MaxInclusive),
            "maxExclusive" | "max-exclusive" | "<" => Ok(FacetKind::MaxExclusive),
            _ => Err("Invalid facet"),
        }
    }
}

/// A facet constraint with its lexical value, e.g. `minInclusive 18`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Facet {
    kind: FacetKind,
    value: String,
}

impl Facet {
    /// Create a facet constraint.
    pub fn new(kind: FacetKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Get the facet kind.
    pub fn kind(&self) -> FacetKind {
        self.kind
    }

    /// Get the lexical value constraining the facet.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The kind of a Graphol node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
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
    DomainRestriction(Restriction),
    RangeRestriction(Restriction),
    RoleChain,
    RoleInverse,
    ValueRestriction(Vec<Facet>),
    PropertyAssertion,
}

impl NodeKind {
    /// Human readable name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Concept => "concept",
            NodeKind::Role => "role",
            NodeKind::Attribute => "attribute",
            NodeKind::Individual => "individual",
            NodeKind::ValueDomain => "value domain",
            NodeKind::Complement => "complement",
            NodeKind::Union => "union",
            NodeKind::Intersection => "intersection",
            NodeKind::DisjointUnion => "disjoint union",
            NodeKind::Enumeration => "enumeration",
            NodeKind::DomainRestriction(_) => "domain restriction",
            NodeKind::RangeRestriction(_) => "range restriction",
            NodeKind::RoleChain => "role chain",
            NodeKind::RoleInverse => "role inverse",
            NodeKind::ValueRestriction(_) => "value restriction",
            NodeKind::PropertyAssertion => "property assertion",
        }
    }

    /// Returns `true` for nodes whose meaning comes from their label rather
    /// than from their inputs.
    pub fn is_predicate(&self) -> bool {
        matches!(
            self,
            NodeKind::Concept
                | NodeKind::Role
                | NodeKind::Attribute
                | NodeKind::Individual
                | NodeKind::ValueDomain
        )
    }

    /// Returns `true` for constructor nodes, the only nodes that accept
    /// input edges.
    pub fn is_constructor(&self) -> bool {
        !self.is_predicate()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A Graphol diagram node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: Id,
    kind: NodeKind,
    label: Option<String>,
    description: Option<String>,
}

impl Node {
    /// Create a node without label or description.
    pub fn new(id: Id, kind: NodeKind) -> Self {
        Self {
            id,
            kind,
            label: None,
            description: None,
        }
    }

    /// Set the label (class, property, individual or datatype name).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the free text description exported as an `rdfs:comment`.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Get the node identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Borrow the node kind.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The trimmed label, or `None` when the label is missing or blank.
    pub fn label(&self) -> Option<&str> {
        self.label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }

    /// The trimmed description, or `None` when missing or blank.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|description| !description.is_empty())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{} '{}' ({})", self.kind, label, self.id),
            None => write!(f, "{} ({})", self.kind, self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_trimmed() {
        let node = Node::new(Id::node(0), NodeKind::Concept).with_label("  Person ");
        assert_eq!(node.label(), Some("Person"));
    }

    #[test]
    fn test_blank_label_is_missing() {
        let node = Node::new(Id::node(0), NodeKind::Concept).with_label("   ");
        assert_eq!(node.label(), None);
        assert_eq!(node.description(), None);
    }

    #[test]
    fn test_display() {
        let labeled = Node::new(Id::new("n1"), NodeKind::Role).with_label("hasParent");
        let unlabeled = Node::new(Id::new("n2"), NodeKind::Union);

        assert_eq!(labeled.to_string(), "role 'hasParent' (n1)");
        assert_eq!(unlabeled.to_string(), "union (n2)");
    }

    #[test]
    fn test_constructor_classification() {
        assert!(NodeKind::Concept.is_predicate());
        assert!(NodeKind::ValueDomain.is_predicate());
        assert!(NodeKind::RoleChain.is_constructor());
        assert!(NodeKind::DomainRestriction(Restriction::Exists).is_constructor());
    }

    #[test]
    fn test_restriction_from_str() {
        assert_eq!("exists".parse(), Ok(Restriction::Exists));
        assert_eq!("self".parse(), Ok(Restriction::SelfRestriction));
        assert!("some".parse::<Restriction>().is_err());
    }

    #[test]
    fn test_restriction_display() {
        let card = Restriction::Cardinality {
            min: Some(1),
            max: None,
        };
        assert_eq!(card.to_string(), "(1, -)");
        assert_eq!(Restriction::Forall.to_string(), "forall");
    }

    #[test]
    fn test_facet_kind_aliases() {
        assert_eq!(">=".parse(), Ok(FacetKind::MinInclusive));
        assert_eq!("max-length".parse(), Ok(FacetKind::MaxLength));
        assert_eq!(FacetKind::MaxExclusive.local_name(), "maxExclusive");
    }
}
