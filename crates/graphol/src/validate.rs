//! Semantic validation of Graphol diagrams.
//!
//! Validation infers the [`Identity`] of every node (the kind of OWL
//! expression it denotes) and checks every edge against the Graphol rules.
//! It fails fast: the first violation is returned as
//! [`GrapholError::MalformedDiagram`].
//!
//! Checks run in a fixed order so that the same diagram always reports the
//! same violation:
//! 1. input edges must not form a cycle;
//! 2. every edge, in insertion order: modifiers and self loops, the identity
//!    of both endpoints, then the rule of the edge kind;
//! 3. every node, in insertion order, has its identity inferred;
//! 4. every constructor is consumed by some edge;
//! 5. duplicate edges are collected as warnings.
//!
//! The result is a [`ValidatedDiagram`], the only input the translator
//! accepts.

use std::{collections::HashMap, fmt};

use indexmap::IndexMap;
use log::{debug, info, trace};
use petgraph::{algo::toposort, graph::DiGraph};

use graphol_core::{Diagram, Edge, EdgeKey, EdgeKind, Id, Node, NodeKind, Restriction};

use crate::{
    GrapholError,
    error::{Diagnostic, ErrorCode},
    owl::Literal,
};

type Result<T> = std::result::Result<T, Diagnostic>;

/// The kind of expression a node denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identity {
    Concept,
    Role,
    Attribute,
    ValueDomain,
    Instance,
    Value,
    RoleInstance,
    AttributeInstance,
}

impl Identity {
    /// Human readable name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Identity::Concept => "concept",
            Identity::Role => "role",
            Identity::Attribute => "attribute",
            Identity::ValueDomain => "value domain",
            Identity::Instance => "instance",
            Identity::Value => "value",
            Identity::RoleInstance => "role instance",
            Identity::AttributeInstance => "attribute instance",
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A diagram that passed validation.
///
/// Carries the inferred identity of every node and the warnings collected
/// along the way.
#[derive(Debug)]
pub struct ValidatedDiagram<'a> {
    diagram: &'a Diagram,
    identities: HashMap<Id, Identity>,
    warnings: Vec<Diagnostic>,
}

impl<'a> ValidatedDiagram<'a> {
    /// The validated diagram.
    pub fn diagram(&self) -> &'a Diagram {
        self.diagram
    }

    /// The inferred identity of a node.
    pub fn identity(&self, id: Id) -> Option<Identity> {
        self.identities.get(&id).copied()
    }

    /// Non-fatal findings, in the order they were found.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }
}

/// Validates a diagram.
///
/// # Errors
///
/// Returns [`GrapholError::MalformedDiagram`] describing the first violated
/// rule, with labels on the offending edge and nodes.
pub fn validate(diagram: &Diagram) -> std::result::Result<ValidatedDiagram<'_>, GrapholError> {
    info!(
        nodes = diagram.nodes_count(),
        edges = diagram.edges_count();
        "Validating diagram"
    );

    let mut validator = Validator {
        diagram,
        identities: HashMap::new(),
    };
    validator.run().map_err(GrapholError::MalformedDiagram)?;

    let warnings = duplicate_edges(diagram);
    for warning in &warnings {
        debug!(warning:% = warning; "Validation warning");
    }

    debug!(
        identities = validator.identities.len(),
        warnings = warnings.len();
        "Diagram validated"
    );

    Ok(ValidatedDiagram {
        diagram,
        identities: validator.identities,
        warnings,
    })
}

struct Validator<'a> {
    diagram: &'a Diagram,
    identities: HashMap<Id, Identity>,
}

impl<'a> Validator<'a> {
    fn run(&mut self) -> Result<()> {
        check_operand_cycles(self.diagram)?;

        let diagram = self.diagram;
        for edge in diagram.edges() {
            trace!(edge:% = edge; "Checking edge");
            self.check_edge(edge)?;
        }
        for node in diagram.nodes() {
            self.identity(node.id())?;
        }
        for node in diagram.nodes() {
            self.check_consumed(node)?;
        }
        Ok(())
    }

    /// Rejects constructors that no edge turns into an axiom.
    fn check_consumed(&self, node: &Node) -> Result<()> {
        let diagram = self.diagram;
        let (consumed, help) = match node.kind() {
            NodeKind::PropertyAssertion => (
                diagram
                    .outgoing(node.id())
                    .any(|edge| edge.kind() == EdgeKind::Membership),
                "connect it to the asserted role or attribute with a membership edge",
            ),
            NodeKind::RoleChain => (
                diagram
                    .outgoing(node.id())
                    .any(|edge| edge.kind() == EdgeKind::Inclusion),
                "include it in a role",
            ),
            kind if kind.is_constructor() => (
                diagram.outgoing(node.id()).next().is_some()
                    || diagram
                        .incoming(node.id())
                        .any(|edge| edge.kind() != EdgeKind::Input),
                "use it in an inclusion, an instance-of or a membership edge, or as an operand",
            ),
            _ => return Ok(()),
        };
        if consumed {
            return Ok(());
        }
        Err(Diagnostic::error(format!("{node} does not take part in any axiom"))
            .with_code(ErrorCode::E104)
            .with_node_label(node.id(), "dangling constructor")
            .with_help(help))
    }

    fn node(&self, id: Id) -> Result<&'a Node> {
        self.diagram.node(id).ok_or_else(|| {
            Diagnostic::error(format!("node `{id}` is not part of the diagram"))
                .with_code(ErrorCode::E301)
        })
    }

    /// The source nodes of the input edges of `node`, in operand order.
    fn operands(&self, node: &Node) -> Vec<&'a Node> {
        let diagram = self.diagram;
        diagram
            .inputs(node.id())
            .filter_map(|edge| diagram.node(edge.source()))
            .collect()
    }

    /// Checks for a complement of a role or attribute.
    fn is_property_complement(&self, node: &Node) -> bool {
        matches!(node.kind(), NodeKind::Complement)
            && self
                .operands(node)
                .iter()
                .any(|operand| is_property_node(operand.kind()))
    }

    /// Checks for a range restriction over an attribute.
    fn is_attribute_range(&self, node: &Node) -> bool {
        matches!(node.kind(), NodeKind::RangeRestriction(_))
            && self
                .operands(node)
                .iter()
                .any(|operand| matches!(operand.kind(), NodeKind::Attribute))
    }

    /// Checks for nodes that cannot be the operand of another constructor.
    fn is_standalone(&self, node: &Node) -> bool {
        matches!(node.kind(), NodeKind::RoleChain | NodeKind::PropertyAssertion)
            || self.is_property_complement(node)
            || self.is_attribute_range(node)
    }

    fn identity(&mut self, id: Id) -> Result<Identity> {
        if let Some(identity) = self.identities.get(&id) {
            return Ok(*identity);
        }
        let node = self.node(id)?;
        let identity = self.infer(node)?;
        trace!(node_id:% = id, identity:% = identity; "Inferred identity");
        self.identities.insert(id, identity);
        Ok(identity)
    }

    fn infer(&mut self, node: &'a Node) -> Result<Identity> {
        let operands = self.operands(node);
        if let Some(operand) = operands.iter().find(|operand| self.is_standalone(operand)) {
            return Err(Diagnostic::error(format!(
                "{operand} cannot be the operand of {node}"
            ))
            .with_code(ErrorCode::E104)
            .with_node_label(operand.id(), "standalone expression")
            .with_secondary_node_label(node.id(), "used here")
            .with_help(
                "role chains, property assertions, attribute range restrictions and role or attribute complements cannot feed another constructor",
            ));
        }

        match node.kind() {
            NodeKind::Concept => Ok(Identity::Concept),
            NodeKind::Role => Ok(Identity::Role),
            NodeKind::Attribute => Ok(Identity::Attribute),
            NodeKind::ValueDomain => Ok(Identity::ValueDomain),
            NodeKind::Individual => match node.label() {
                Some(label) if Literal::is_literal_label(label) => Ok(Identity::Value),
                _ => Ok(Identity::Instance),
            },
            NodeKind::Complement => self.infer_complement(node, &operands),
            NodeKind::Union | NodeKind::Intersection => {
                expect_at_least(node, &operands, 2)?;
                self.same_identity(node, &operands, &[Identity::Concept, Identity::ValueDomain])
            }
            NodeKind::DisjointUnion => {
                expect_at_least(node, &operands, 2)?;
                self.same_identity(node, &operands, &[Identity::Concept])
            }
            NodeKind::Enumeration => {
                expect_at_least(node, &operands, 1)?;
                if let Some(operand) = operands
                    .iter()
                    .find(|operand| !matches!(operand.kind(), NodeKind::Individual))
                {
                    return Err(wrong_operand(node, operand, "individuals"));
                }
                match self.same_identity(node, &operands, &[Identity::Instance, Identity::Value])? {
                    Identity::Value => Ok(Identity::ValueDomain),
                    _ => Ok(Identity::Concept),
                }
            }
            NodeKind::DomainRestriction(restriction) => {
                self.infer_restriction(node, &operands, *restriction, false)
            }
            NodeKind::RangeRestriction(restriction) => {
                self.infer_restriction(node, &operands, *restriction, true)
            }
            NodeKind::RoleInverse => {
                expect_exactly(node, &operands, 1)?;
                expect_roles(node, &operands)?;
                Ok(Identity::Role)
            }
            NodeKind::RoleChain => {
                expect_at_least(node, &operands, 2)?;
                expect_roles(node, &operands)?;
                Ok(Identity::Role)
            }
            NodeKind::ValueRestriction(facets) => {
                expect_exactly(node, &operands, 1)?;
                if !matches!(operands[0].kind(), NodeKind::ValueDomain) {
                    return Err(wrong_operand(node, operands[0], "a value domain"));
                }
                if facets.is_empty() {
                    return Err(Diagnostic::error(format!("{node} has no facets"))
                        .with_code(ErrorCode::E103)
                        .with_node_label(node.id(), "value restriction without facets")
                        .with_help("add at least one facet, e.g. `minInclusive 0`"));
                }
                Ok(Identity::ValueDomain)
            }
            NodeKind::PropertyAssertion => {
                expect_exactly(node, &operands, 2)?;
                for operand in &operands {
                    if !matches!(operand.kind(), NodeKind::Individual) {
                        return Err(wrong_operand(node, operand, "two individuals"));
                    }
                }
                if self.identity(operands[0].id())? != Identity::Instance {
                    return Err(wrong_operand(node, operands[0], "an instance as first operand"));
                }
                match self.identity(operands[1].id())? {
                    Identity::Value => Ok(Identity::AttributeInstance),
                    _ => Ok(Identity::RoleInstance),
                }
            }
        }
    }

    fn infer_complement(&mut self, node: &Node, operands: &[&'a Node]) -> Result<Identity> {
        expect_exactly(node, operands, 1)?;
        let operand = operands[0];
        let identity = self.identity(operand.id())?;
        let accepted = match identity {
            Identity::Concept | Identity::ValueDomain => true,
            Identity::Role => is_role_node(operand.kind()),
            Identity::Attribute => matches!(operand.kind(), NodeKind::Attribute),
            _ => false,
        };
        if !accepted {
            return Err(wrong_operand(
                node,
                operand,
                "a concept, a value domain, a role or an attribute",
            ));
        }
        Ok(identity)
    }

    /// Checks that every operand has the same identity, one of `accepted`.
    fn same_identity(
        &mut self,
        node: &Node,
        operands: &[&'a Node],
        accepted: &[Identity],
    ) -> Result<Identity> {
        let mut common = None;
        for operand in operands {
            let identity = self.identity(operand.id())?;
            if !accepted.contains(&identity) {
                let names: Vec<_> = accepted.iter().map(|identity| plural(*identity)).collect();
                return Err(wrong_operand(node, operand, &names.join(" or ")));
            }
            match common {
                None => common = Some(identity),
                Some(first) if first != identity => {
                    return Err(Diagnostic::error(format!(
                        "{node} mixes {} and {} operands",
                        first, identity
                    ))
                    .with_code(ErrorCode::E102)
                    .with_node_label(node.id(), "mixed operands")
                    .with_secondary_node_label(operand.id(), format!("{identity} operand")));
                }
                Some(_) => {}
            }
        }
        common.ok_or_else(|| operand_count(node, "at least one operand", 0))
    }

    fn infer_restriction(
        &mut self,
        node: &Node,
        operands: &[&'a Node],
        restriction: Restriction,
        is_range: bool,
    ) -> Result<Identity> {
        let (properties, fillers): (Vec<&Node>, Vec<&Node>) = operands
            .iter()
            .copied()
            .partition(|operand| is_property_node(operand.kind()));

        let &[property] = properties.as_slice() else {
            return Err(operand_count(
                node,
                "exactly one role or attribute operand",
                properties.len(),
            ));
        };
        if fillers.len() > 1 {
            return Err(operand_count(node, "at most one filler", fillers.len()));
        }
        let filler = fillers.first().copied();
        let on_role = is_role_node(property.kind());

        match restriction {
            Restriction::SelfRestriction if !on_role || filler.is_some() => {
                return Err(invalid_parameters(
                    node,
                    "a self restriction applies to a role and takes no filler",
                ));
            }
            Restriction::Cardinality {
                min: None,
                max: None,
            } => {
                return Err(invalid_parameters(
                    node,
                    "a cardinality restriction needs at least one bound",
                ));
            }
            Restriction::Cardinality {
                min: Some(min),
                max: Some(max),
            } if min > max => {
                return Err(invalid_parameters(
                    node,
                    &format!("the lower bound {min} exceeds the upper bound {max}"),
                ));
            }
            _ => {}
        }

        if is_range && !on_role {
            if !restriction.is_exists() || filler.is_some() {
                return Err(invalid_parameters(
                    node,
                    "a range restriction over an attribute must be existential and take no filler",
                ));
            }
            return Ok(Identity::ValueDomain);
        }

        if let Some(filler) = filler {
            let expected = if on_role {
                Identity::Concept
            } else {
                Identity::ValueDomain
            };
            if self.identity(filler.id())? != expected {
                return Err(wrong_operand(node, filler, &format!("a {expected} filler")));
            }
        }
        Ok(Identity::Concept)
    }

    fn check_edge(&mut self, edge: &Edge) -> Result<()> {
        if edge.is_complete() && edge.kind() != EdgeKind::Inclusion {
            return Err(edge_error(
                edge,
                ErrorCode::E201,
                format!("{} edge `{}` cannot be complete", edge.kind(), edge.id()),
            )
            .with_help("only inclusion edges can express an equivalence"));
        }
        if edge.is_functional() && edge.kind() != EdgeKind::Input {
            return Err(edge_error(
                edge,
                ErrorCode::E201,
                format!("{} edge `{}` cannot be functional", edge.kind(), edge.id()),
            )
            .with_help("only input edges can express functionality"));
        }
        if edge.source() == edge.target() {
            return Err(edge_error(
                edge,
                ErrorCode::E200,
                format!("edge `{}` connects node `{}` to itself", edge.id(), edge.source()),
            ));
        }

        let source = self.node(edge.source())?;
        let target = self.node(edge.target())?;
        let source_identity = self.identity(source.id())?;
        let target_identity = self.identity(target.id())?;

        match edge.kind() {
            EdgeKind::Inclusion => {
                self.check_inclusion(edge, source, target, source_identity, target_identity)
            }
            EdgeKind::Input => self.check_input(edge, source, target),
            EdgeKind::InstanceOf => {
                if source_identity != Identity::Instance {
                    return Err(edge_error(
                        edge,
                        ErrorCode::E206,
                        format!("instance-of edge from {source}, expected a named individual"),
                    ));
                }
                if target_identity != Identity::Concept {
                    return Err(edge_error(
                        edge,
                        ErrorCode::E206,
                        format!("instance-of edge into {target}, expected a concept"),
                    ));
                }
                Ok(())
            }
            EdgeKind::Membership => {
                let accepted = match (source.kind(), source_identity) {
                    (NodeKind::PropertyAssertion, Identity::RoleInstance) => {
                        target_identity == Identity::Role
                            && !matches!(target.kind(), NodeKind::RoleChain)
                    }
                    (NodeKind::PropertyAssertion, Identity::AttributeInstance) => {
                        target_identity == Identity::Attribute
                    }
                    _ => false,
                };
                if !accepted {
                    return Err(edge_error(
                        edge,
                        ErrorCode::E207,
                        format!("membership edge from {source} into {target}"),
                    )
                    .with_help(
                        "a property assertion between instances belongs to a role, one between an instance and a value belongs to an attribute",
                    ));
                }
                Ok(())
            }
        }
    }

    fn check_inclusion(
        &self,
        edge: &Edge,
        source: &Node,
        target: &Node,
        source_identity: Identity,
        target_identity: Identity,
    ) -> Result<()> {
        let relation = if edge.is_complete() {
            "equivalence"
        } else {
            "inclusion"
        };
        let mismatch = || {
            edge_error(
                edge,
                ErrorCode::E202,
                format!(
                    "{relation} between {} and {}",
                    with_article(source_identity),
                    with_article(target_identity)
                ),
            )
            .with_help("both ends must denote the same kind of expression")
        };
        let misplaced = |message: String| edge_error(edge, ErrorCode::E203, message);

        for node in [source, target] {
            if matches!(
                node.kind(),
                NodeKind::Individual | NodeKind::PropertyAssertion
            ) {
                return Err(misplaced(format!("{node} cannot take part in an {relation}")));
            }
        }

        if matches!(target.kind(), NodeKind::RoleChain) {
            return Err(misplaced(format!(
                "{target} can only be the source of an inclusion"
            )));
        }
        if matches!(source.kind(), NodeKind::RoleChain) {
            if edge.is_complete() {
                return Err(misplaced(format!("{source} cannot take part in an equivalence")));
            }
            if target_identity != Identity::Role {
                return Err(mismatch());
            }
            if matches!(target.kind(), NodeKind::Complement) {
                return Err(misplaced(format!("{source} cannot be included in {target}")));
            }
            return Ok(());
        }

        if self.is_property_complement(source) {
            return Err(misplaced(format!(
                "{source} can only be the target of an inclusion"
            )));
        }
        if self.is_property_complement(target) {
            if edge.is_complete() {
                return Err(misplaced(format!("{target} cannot take part in an equivalence")));
            }
            if source_identity != target_identity {
                return Err(mismatch());
            }
            return Ok(());
        }

        if self.is_attribute_range(target) {
            return Err(misplaced(format!(
                "{target} can only be the source of an inclusion"
            )));
        }
        if self.is_attribute_range(source) {
            if edge.is_complete() {
                return Err(misplaced(format!("{source} cannot take part in an equivalence")));
            }
            if target_identity != Identity::ValueDomain {
                return Err(mismatch());
            }
            return Ok(());
        }

        if source_identity != target_identity {
            return Err(mismatch());
        }
        match source_identity {
            Identity::Concept | Identity::Role | Identity::Attribute => Ok(()),
            _ => Err(misplaced(format!(
                "{relation} between value domains must start from an attribute range restriction"
            ))),
        }
    }

    fn check_input(&self, edge: &Edge, source: &Node, target: &Node) -> Result<()> {
        if target.kind().is_predicate() {
            return Err(edge_error(
                edge,
                ErrorCode::E204,
                format!("input edge into {target}, which takes no operands"),
            ));
        }
        if self.is_standalone(source) {
            return Err(edge_error(
                edge,
                ErrorCode::E104,
                format!("{source} cannot be the operand of {target}"),
            ));
        }
        if edge.is_functional() {
            let accepted = match target.kind() {
                NodeKind::DomainRestriction(_) => is_property_node(source.kind()),
                NodeKind::RangeRestriction(_) => is_role_node(source.kind()),
                _ => false,
            };
            if !accepted {
                return Err(edge_error(
                    edge,
                    ErrorCode::E205,
                    format!("functional input from {source} into {target}"),
                )
                .with_help(
                    "functionality applies to a role or attribute entering a domain restriction, inverse functionality to a role entering a range restriction",
                ));
            }
        }
        Ok(())
    }
}

fn is_role_node(kind: &NodeKind) -> bool {
    matches!(kind, NodeKind::Role | NodeKind::RoleInverse)
}

fn is_property_node(kind: &NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::Role | NodeKind::RoleInverse | NodeKind::Attribute
    )
}

fn with_article(identity: Identity) -> String {
    let name = identity.name();
    match name.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => format!("an {name}"),
        _ => format!("a {name}"),
    }
}

fn plural(identity: Identity) -> String {
    format!("{}s", identity.name())
}

fn expect_exactly(node: &Node, operands: &[&Node], count: usize) -> Result<()> {
    if operands.len() != count {
        let expected = if count == 1 {
            "exactly one operand".to_string()
        } else {
            format!("exactly {count} operands")
        };
        return Err(operand_count(node, &expected, operands.len()));
    }
    Ok(())
}

fn expect_at_least(node: &Node, operands: &[&Node], count: usize) -> Result<()> {
    if operands.len() < count {
        let expected = if count == 1 {
            "at least one operand".to_string()
        } else {
            format!("at least {count} operands")
        };
        return Err(operand_count(node, &expected, operands.len()));
    }
    Ok(())
}

fn expect_roles(node: &Node, operands: &[&Node]) -> Result<()> {
    match operands.iter().find(|operand| !is_role_node(operand.kind())) {
        Some(operand) => Err(wrong_operand(node, operand, "roles")),
        None => Ok(()),
    }
}

fn operand_count(node: &Node, expected: &str, found: usize) -> Diagnostic {
    Diagnostic::error(format!("{node} expects {expected}, found {found}"))
        .with_code(ErrorCode::E101)
        .with_node_label(node.id(), format!("{} with {found} operand(s)", node.kind()))
}

fn wrong_operand(node: &Node, operand: &Node, expected: &str) -> Diagnostic {
    Diagnostic::error(format!("{node} expects {expected}, found {operand}"))
        .with_code(ErrorCode::E102)
        .with_node_label(node.id(), node.kind().name())
        .with_secondary_node_label(operand.id(), "operand")
}

fn invalid_parameters(node: &Node, reason: &str) -> Diagnostic {
    Diagnostic::error(format!("{node} is inconsistent: {reason}"))
        .with_code(ErrorCode::E103)
        .with_node_label(node.id(), node.kind().name())
}

fn edge_error(edge: &Edge, code: ErrorCode, message: String) -> Diagnostic {
    Diagnostic::error(message)
        .with_code(code)
        .with_edge_label(edge.id(), format!("offending {} edge", edge.kind()))
        .with_secondary_node_label(edge.source(), "source")
        .with_secondary_node_label(edge.target(), "target")
}

/// Rejects cycles among input edges.
fn check_operand_cycles(diagram: &Diagram) -> Result<()> {
    let mut graph = DiGraph::<Id, Id>::new();
    let mut indices = HashMap::new();
    for node in diagram.nodes() {
        indices.insert(node.id(), graph.add_node(node.id()));
    }
    // Self loops are reported by the edge checks.
    for edge in diagram
        .edges()
        .filter(|edge| edge.kind() == EdgeKind::Input && edge.source() != edge.target())
    {
        if let (Some(&source), Some(&target)) =
            (indices.get(&edge.source()), indices.get(&edge.target()))
        {
            graph.add_edge(source, target, edge.id());
        }
    }

    toposort(&graph, None).map(|_| ()).map_err(|cycle| {
        let id = graph[cycle.node_id()];
        Diagnostic::error(format!(
            "node `{id}` is, directly or transitively, an operand of itself"
        ))
        .with_code(ErrorCode::E100)
        .with_node_label(id, "part of an operand cycle")
        .with_help("constructor inputs must form an acyclic graph")
    })
}

/// Collects a warning for every edge that repeats an earlier one.
fn duplicate_edges(diagram: &Diagram) -> Vec<Diagnostic> {
    let mut groups: IndexMap<EdgeKey, Vec<Id>> = IndexMap::new();
    for edge in diagram.edges() {
        groups.entry(edge.key()).or_default().push(edge.id());
    }

    groups
        .values()
        .filter_map(|ids| ids.split_first())
        .flat_map(|(first, repeats)| {
            repeats.iter().map(move |id| {
                Diagnostic::warning(format!("edge `{id}` repeats edge `{first}`"))
                    .with_code(ErrorCode::E208)
                    .with_edge_label(*id, "duplicate edge")
                    .with_help("the duplicate contributes no new axiom")
            })
        })
        .collect()
}
