//! Translation of validated diagrams into OWL 2 axioms.
//!
//! Every node resolves to an [`Expression`] at most once: results are
//! memoized by node id, and composite expressions reuse the [`Rc`] of their
//! already resolved operands.
//!
//! Axioms are emitted in a fixed order:
//! 1. declarations of named entities, in node order;
//! 2. `DisjointClasses` for every disjoint union, in node order;
//! 3. one axiom per inclusion, instance-of, membership and functional input
//!    edge, in edge order;
//! 4. `rdfs:comment` annotations from node descriptions, in node order.
//!
//! Identical axioms are emitted once, at their first position.

use std::{
    collections::{HashMap, HashSet},
    rc::Rc,
};

use indexmap::IndexSet;
use log::{debug, info, trace};

use graphol_core::{Edge, EdgeKind, FacetKind, Id, Node, NodeKind, Restriction};

use crate::{
    GrapholError,
    config::OntologyConfig,
    error::{Diagnostic, ErrorCode},
    owl::{
        Axiom, ClassExpression, DataRange, Entity, Iri, IriBuilder, Literal,
        ObjectPropertyExpression, SubObjectProperty,
    },
    validate::{Identity, ValidatedDiagram},
};

type Result<T> = std::result::Result<T, Diagnostic>;

/// The OWL expression a node resolves to.
#[derive(Debug, Clone)]
enum Expression {
    Class(Rc<ClassExpression>),
    ObjectProperty(Rc<ObjectPropertyExpression>),
    DataProperty(Iri),
    DataRange(Rc<DataRange>),
    Individual(Iri),
    Literal(Literal),
    /// A role chain, only valid as the sub-property of an inclusion.
    PropertyChain(Vec<Rc<ObjectPropertyExpression>>),
    /// The complement of a role, only valid as the target of an inclusion or membership.
    ObjectPropertyComplement(Rc<ObjectPropertyExpression>),
    /// The complement of an attribute.
    DataPropertyComplement(Iri),
    /// The range of an attribute.
    DataPropertyRange(Iri),
    ObjectAssertion(Iri, Iri),
    DataAssertion(Iri, Literal),
}

impl Expression {
    fn name(&self) -> &'static str {
        match self {
            Expression::Class(_) => "class expression",
            Expression::ObjectProperty(_) => "object property expression",
            Expression::DataProperty(_) => "data property",
            Expression::DataRange(_) => "data range",
            Expression::Individual(_) => "individual",
            Expression::Literal(_) => "literal",
            Expression::PropertyChain(_) => "property chain",
            Expression::ObjectPropertyComplement(_) => "object property complement",
            Expression::DataPropertyComplement(_) => "data property complement",
            Expression::DataPropertyRange(_) => "data property range",
            Expression::ObjectAssertion(..) => "object property assertion",
            Expression::DataAssertion(..) => "data property assertion",
        }
    }
}

/// Translates a validated diagram into an ordered list of axioms.
///
/// # Errors
///
/// Returns [`GrapholError::UnresolvableExpression`] when a node cannot be
/// turned into an OWL expression, most commonly a named node without a
/// label.
pub fn translate(
    validated: &ValidatedDiagram<'_>,
    ontology: &OntologyConfig,
) -> std::result::Result<Vec<Axiom>, GrapholError> {
    info!(nodes = validated.diagram().nodes_count(); "Translating diagram");

    let mut translator = Translator::new(validated, ontology);
    let axioms = translator
        .run()
        .map_err(GrapholError::UnresolvableExpression)?;

    debug!(
        axioms = axioms.len(),
        resolved = translator.resolutions;
        "Diagram translated"
    );
    Ok(axioms)
}

struct Translator<'a> {
    diagram: &'a ValidatedDiagram<'a>,
    iris: IriBuilder,
    resolved: HashMap<Id, Expression>,
    in_progress: HashSet<Id>,
    resolutions: usize,
}

impl<'a> Translator<'a> {
    fn new(validated: &'a ValidatedDiagram<'a>, ontology: &OntologyConfig) -> Self {
        Self {
            diagram: validated,
            iris: IriBuilder::new(ontology),
            resolved: HashMap::new(),
            in_progress: HashSet::new(),
            resolutions: 0,
        }
    }

    fn run(&mut self) -> Result<Vec<Axiom>> {
        let diagram = self.diagram.diagram();
        let mut axioms = IndexSet::new();

        for node in diagram.nodes() {
            if let Some(entity) = self.entity(node)?
                && !entity.iri().is_builtin()
            {
                axioms.insert(Axiom::Declaration(entity));
            }
        }

        for node in diagram
            .nodes()
            .filter(|node| matches!(node.kind(), NodeKind::DisjointUnion))
        {
            let classes = self.operand_classes(node)?;
            axioms.insert(Axiom::DisjointClasses(classes));
        }

        for edge in diagram.edges() {
            let Some(axiom) = self.edge_axiom(edge)? else {
                continue;
            };
            trace!(edge_id:% = edge.id(), axiom = axiom.name(); "Translated edge");
            if !axioms.insert(axiom) {
                trace!(edge_id:% = edge.id(); "Skipping repeated axiom");
            }
        }

        let comment = Iri::rdfs("comment");
        for node in diagram.nodes() {
            let Some(description) = node.description() else {
                continue;
            };
            if let Some(entity) = self.entity(node)?
                && !entity.iri().is_builtin()
            {
                axioms.insert(Axiom::AnnotationAssertion(
                    comment.clone(),
                    entity,
                    Literal::string(description),
                ));
            }
        }

        Ok(axioms.into_iter().collect())
    }

    fn node(&self, id: Id) -> Result<&'a Node> {
        self.diagram.diagram().node(id).ok_or_else(|| {
            Diagnostic::error(format!("node `{id}` is not part of the diagram"))
                .with_code(ErrorCode::E301)
        })
    }

    fn operands(&self, node: &Node) -> Vec<&'a Node> {
        let diagram = self.diagram.diagram();
        diagram
            .inputs(node.id())
            .filter_map(|edge| diagram.node(edge.source()))
            .collect()
    }

    /// Splits restriction operands into the restricted property and the optional filler.
    fn property_and_filler(&self, node: &Node) -> Result<(&'a Node, Option<&'a Node>)> {
        let operands = self.operands(node);
        let property = operands
            .iter()
            .copied()
            .find(|operand| is_property_node(operand.kind()))
            .ok_or_else(|| unexpected(node, "a role or attribute operand"))?;
        let filler = operands
            .iter()
            .copied()
            .find(|operand| !is_property_node(operand.kind()));
        Ok((property, filler))
    }

    /// Resolves a node, reusing the memoized expression when there is one.
    fn resolve(&mut self, id: Id) -> Result<Expression> {
        if let Some(expression) = self.resolved.get(&id) {
            return Ok(expression.clone());
        }
        let node = self.node(id)?;
        if !self.in_progress.insert(id) {
            return Err(Diagnostic::error(format!(
                "{node} depends on its own expression"
            ))
            .with_code(ErrorCode::E301)
            .with_node_label(id, "cyclic operand"));
        }

        let expression = self.build(node);
        self.in_progress.remove(&id);
        let expression = expression?;

        trace!(node_id:% = id, expression = expression.name(); "Resolved node");
        self.resolutions += 1;
        self.resolved.insert(id, expression.clone());
        Ok(expression)
    }

    fn class(&mut self, node: &Node) -> Result<Rc<ClassExpression>> {
        match self.resolve(node.id())? {
            Expression::Class(class) => Ok(class),
            _ => Err(unexpected(node, "a class expression")),
        }
    }

    fn object_property(&mut self, node: &Node) -> Result<Rc<ObjectPropertyExpression>> {
        match self.resolve(node.id())? {
            Expression::ObjectProperty(property) => Ok(property),
            _ => Err(unexpected(node, "an object property expression")),
        }
    }

    fn data_property(&mut self, node: &Node) -> Result<Iri> {
        match self.resolve(node.id())? {
            Expression::DataProperty(property) => Ok(property),
            _ => Err(unexpected(node, "a data property")),
        }
    }

    fn data_range(&mut self, node: &Node) -> Result<Rc<DataRange>> {
        match self.resolve(node.id())? {
            Expression::DataRange(range) => Ok(range),
            _ => Err(unexpected(node, "a data range")),
        }
    }

    fn individual(&mut self, node: &Node) -> Result<Iri> {
        match self.resolve(node.id())? {
            Expression::Individual(individual) => Ok(individual),
            _ => Err(unexpected(node, "a named individual")),
        }
    }

    fn literal(&mut self, node: &Node) -> Result<Literal> {
        match self.resolve(node.id())? {
            Expression::Literal(literal) => Ok(literal),
            _ => Err(unexpected(node, "a literal")),
        }
    }

    fn operand_classes(&mut self, node: &Node) -> Result<Vec<Rc<ClassExpression>>> {
        self.operands(node)
            .into_iter()
            .map(|operand| self.class(operand))
            .collect()
    }

    fn operand_data_ranges(&mut self, node: &Node) -> Result<Vec<Rc<DataRange>>> {
        self.operands(node)
            .into_iter()
            .map(|operand| self.data_range(operand))
            .collect()
    }

    fn build(&mut self, node: &'a Node) -> Result<Expression> {
        match node.kind() {
            NodeKind::Concept => {
                let iri = self.iris.class(label(node)?);
                Ok(Expression::Class(Rc::new(ClassExpression::Class(iri))))
            }
            NodeKind::Role => {
                let iri = self.iris.object_property(label(node)?);
                Ok(Expression::ObjectProperty(Rc::new(
                    ObjectPropertyExpression::ObjectProperty(iri),
                )))
            }
            NodeKind::Attribute => Ok(Expression::DataProperty(
                self.iris.data_property(label(node)?),
            )),
            NodeKind::ValueDomain => {
                let iri = self.iris.datatype(label(node)?);
                Ok(Expression::DataRange(Rc::new(DataRange::Datatype(iri))))
            }
            NodeKind::Individual => {
                let label = label(node)?;
                if self.identity(node)? == Identity::Value {
                    let literal = Literal::parse(label, |name| self.iris.datatype(name))
                        .ok_or_else(|| {
                            Diagnostic::error(format!("{node} is not a well-formed literal"))
                                .with_code(ErrorCode::E302)
                                .with_node_label(node.id(), "malformed literal")
                                .with_help(
                                    "write values as \"text\", \"text\"^^datatype or \"text\"@lang",
                                )
                        })?;
                    Ok(Expression::Literal(literal))
                } else {
                    Ok(Expression::Individual(self.iris.individual(label)))
                }
            }
            NodeKind::Complement => {
                let operands = self.operands(node);
                let operand = single(node, &operands)?;
                match self.resolve(operand.id())? {
                    Expression::Class(class) => Ok(Expression::Class(Rc::new(
                        ClassExpression::ObjectComplementOf(class),
                    ))),
                    Expression::DataRange(range) => Ok(Expression::DataRange(Rc::new(
                        DataRange::DataComplementOf(range),
                    ))),
                    Expression::ObjectProperty(property) => {
                        Ok(Expression::ObjectPropertyComplement(property))
                    }
                    Expression::DataProperty(property) => {
                        Ok(Expression::DataPropertyComplement(property))
                    }
                    _ => Err(unexpected(operand, "a complementable expression")),
                }
            }
            NodeKind::Union | NodeKind::Intersection | NodeKind::DisjointUnion => {
                let is_intersection = matches!(node.kind(), NodeKind::Intersection);
                if self.identity(node)? == Identity::ValueDomain {
                    let ranges = self.operand_data_ranges(node)?;
                    let range = if is_intersection {
                        DataRange::DataIntersectionOf(ranges)
                    } else {
                        DataRange::DataUnionOf(ranges)
                    };
                    Ok(Expression::DataRange(Rc::new(range)))
                } else {
                    let classes = self.operand_classes(node)?;
                    let class = if is_intersection {
                        ClassExpression::ObjectIntersectionOf(classes)
                    } else {
                        ClassExpression::ObjectUnionOf(classes)
                    };
                    Ok(Expression::Class(Rc::new(class)))
                }
            }
            NodeKind::Enumeration => {
                let operands = self.operands(node);
                if self.identity(node)? == Identity::ValueDomain {
                    let literals = operands
                        .into_iter()
                        .map(|operand| self.literal(operand))
                        .collect::<Result<Vec<_>>>()?;
                    Ok(Expression::DataRange(Rc::new(DataRange::DataOneOf(literals))))
                } else {
                    let individuals = operands
                        .into_iter()
                        .map(|operand| self.individual(operand))
                        .collect::<Result<Vec<_>>>()?;
                    Ok(Expression::Class(Rc::new(ClassExpression::ObjectOneOf(
                        individuals,
                    ))))
                }
            }
            NodeKind::DomainRestriction(restriction) => {
                self.build_restriction(node, *restriction, false)
            }
            NodeKind::RangeRestriction(restriction) => {
                self.build_restriction(node, *restriction, true)
            }
            NodeKind::RoleInverse => {
                let operands = self.operands(node);
                let property = self.object_property(single(node, &operands)?)?;
                Ok(Expression::ObjectProperty(Rc::new(property.inverse())))
            }
            NodeKind::RoleChain => {
                let chain = self
                    .operands(node)
                    .into_iter()
                    .map(|operand| self.object_property(operand))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Expression::PropertyChain(chain))
            }
            NodeKind::ValueRestriction(facets) => {
                let operands = self.operands(node);
                let range = self.data_range(single(node, &operands)?)?;
                let DataRange::Datatype(datatype) = range.as_ref() else {
                    return Err(unexpected(node, "a named datatype operand"));
                };
                let restrictions = facets
                    .iter()
                    .map(|facet| {
                        let literal = Literal::parse(facet.value(), |name| self.iris.datatype(name))
                            .unwrap_or_else(|| Literal::Typed {
                                lexical: facet.value().trim().to_string(),
                                datatype: facet_datatype(facet.kind(), datatype),
                            });
                        (facet.kind(), literal)
                    })
                    .collect();
                Ok(Expression::DataRange(Rc::new(DataRange::DatatypeRestriction(
                    datatype.clone(),
                    restrictions,
                ))))
            }
            NodeKind::PropertyAssertion => {
                let operands = self.operands(node);
                let &[subject, object] = operands.as_slice() else {
                    return Err(unexpected(node, "exactly two operands"));
                };
                let subject = self.individual(subject)?;
                match self.resolve(object.id())? {
                    Expression::Individual(object) => {
                        Ok(Expression::ObjectAssertion(subject, object))
                    }
                    Expression::Literal(value) => Ok(Expression::DataAssertion(subject, value)),
                    _ => Err(unexpected(object, "an individual or a literal")),
                }
            }
        }
    }

    fn build_restriction(
        &mut self,
        node: &Node,
        restriction: Restriction,
        is_range: bool,
    ) -> Result<Expression> {
        let (property, filler) = self.property_and_filler(node)?;

        if matches!(property.kind(), NodeKind::Attribute) {
            let attribute = self.data_property(property)?;
            if is_range {
                return Ok(Expression::DataPropertyRange(attribute));
            }
            let range = match filler {
                Some(filler) => self.data_range(filler)?,
                None => Rc::new(DataRange::literal()),
            };
            let class = match restriction {
                Restriction::Exists => ClassExpression::DataSomeValuesFrom(attribute, range),
                Restriction::Forall => ClassExpression::DataAllValuesFrom(attribute, range),
                Restriction::Cardinality { min, max } => cardinality(node, min, max, |bound, n| {
                    match bound {
                        Bound::Min => ClassExpression::DataMinCardinality(n, attribute.clone(), range.clone()),
                        Bound::Max => ClassExpression::DataMaxCardinality(n, attribute.clone(), range.clone()),
                        Bound::Exact => ClassExpression::DataExactCardinality(n, attribute.clone(), range.clone()),
                    }
                })?,
                Restriction::SelfRestriction => {
                    return Err(unexpected(node, "a role operand for a self restriction"));
                }
            };
            return Ok(Expression::Class(Rc::new(class)));
        }

        let mut role = self.object_property(property)?;
        if is_range {
            role = Rc::new(role.inverse());
        }
        let filler = match filler {
            Some(filler) => self.class(filler)?,
            None => Rc::new(ClassExpression::thing()),
        };
        let class = match restriction {
            Restriction::Exists => ClassExpression::ObjectSomeValuesFrom(role, filler),
            Restriction::Forall => ClassExpression::ObjectAllValuesFrom(role, filler),
            Restriction::SelfRestriction => ClassExpression::ObjectHasSelf(role),
            Restriction::Cardinality { min, max } => cardinality(node, min, max, |bound, n| {
                match bound {
                    Bound::Min => ClassExpression::ObjectMinCardinality(n, role.clone(), filler.clone()),
                    Bound::Max => ClassExpression::ObjectMaxCardinality(n, role.clone(), filler.clone()),
                    Bound::Exact => ClassExpression::ObjectExactCardinality(n, role.clone(), filler.clone()),
                }
            })?,
        };
        Ok(Expression::Class(Rc::new(class)))
    }

    fn identity(&self, node: &Node) -> Result<Identity> {
        self.diagram.identity(node.id()).ok_or_else(|| {
            Diagnostic::error(format!("{node} has no inferred identity"))
                .with_code(ErrorCode::E301)
                .with_node_label(node.id(), "not validated")
        })
    }

    /// The entity a named node declares, if any.
    fn entity(&mut self, node: &Node) -> Result<Option<Entity>> {
        let entity = match node.kind() {
            NodeKind::Concept => match self.class(node)?.as_ref() {
                ClassExpression::Class(iri) => Entity::Class(iri.clone()),
                _ => return Ok(None),
            },
            NodeKind::Role => match self.object_property(node)?.as_named() {
                Some(iri) => Entity::ObjectProperty(iri.clone()),
                None => return Ok(None),
            },
            NodeKind::Attribute => Entity::DataProperty(self.data_property(node)?),
            NodeKind::ValueDomain => match self.data_range(node)?.as_ref() {
                DataRange::Datatype(iri) => Entity::Datatype(iri.clone()),
                _ => return Ok(None),
            },
            NodeKind::Individual => {
                if self.identity(node)? != Identity::Instance {
                    return Ok(None);
                }
                Entity::NamedIndividual(self.individual(node)?)
            }
            _ => return Ok(None),
        };
        Ok(Some(entity))
    }

    fn edge_axiom(&mut self, edge: &Edge) -> Result<Option<Axiom>> {
        let source = self.node(edge.source())?;
        let target = self.node(edge.target())?;

        match edge.kind() {
            EdgeKind::Inclusion => self.inclusion_axiom(edge, source, target).map(Some),
            EdgeKind::InstanceOf => {
                let class = self.class(target)?;
                let individual = self.individual(source)?;
                Ok(Some(Axiom::ClassAssertion(class, individual)))
            }
            EdgeKind::Membership => {
                let axiom = match (self.resolve(source.id())?, self.resolve(target.id())?) {
                    (Expression::ObjectAssertion(subject, object), Expression::ObjectProperty(role)) => {
                        Axiom::ObjectPropertyAssertion(role, subject, object)
                    }
                    (
                        Expression::ObjectAssertion(subject, object),
                        Expression::ObjectPropertyComplement(role),
                    ) => Axiom::NegativeObjectPropertyAssertion(role, subject, object),
                    (Expression::DataAssertion(subject, value), Expression::DataProperty(attribute)) => {
                        Axiom::DataPropertyAssertion(attribute, subject, value)
                    }
                    (
                        Expression::DataAssertion(subject, value),
                        Expression::DataPropertyComplement(attribute),
                    ) => Axiom::NegativeDataPropertyAssertion(attribute, subject, value),
                    _ => return Err(untranslatable(edge)),
                };
                Ok(Some(axiom))
            }
            EdgeKind::Input if edge.is_functional() => {
                let axiom = match (source.kind(), target.kind()) {
                    (NodeKind::Attribute, NodeKind::DomainRestriction(_)) => {
                        Axiom::FunctionalDataProperty(self.data_property(source)?)
                    }
                    (_, NodeKind::DomainRestriction(_)) => {
                        Axiom::FunctionalObjectProperty(self.object_property(source)?)
                    }
                    (_, NodeKind::RangeRestriction(_)) => {
                        Axiom::InverseFunctionalObjectProperty(self.object_property(source)?)
                    }
                    _ => return Err(untranslatable(edge)),
                };
                Ok(Some(axiom))
            }
            EdgeKind::Input => Ok(None),
        }
    }

    fn inclusion_axiom(&mut self, edge: &Edge, source: &'a Node, target: &'a Node) -> Result<Axiom> {
        let complete = edge.is_complete();
        if !complete && let Some(axiom) = self.domain_or_range_axiom(source, target)? {
            return Ok(axiom);
        }

        let axiom = match (self.resolve(source.id())?, self.resolve(target.id())?) {
            (Expression::Class(sub), Expression::Class(sup)) => {
                if !complete {
                    Axiom::SubClassOf(sub, sup)
                } else if let (Some(iri), NodeKind::DisjointUnion) =
                    (sub.as_named().cloned(), target.kind())
                {
                    Axiom::DisjointUnion(iri, self.operand_classes(target)?)
                } else {
                    Axiom::EquivalentClasses(vec![sub, sup])
                }
            }
            (Expression::ObjectProperty(sub), Expression::ObjectProperty(sup)) => {
                if complete {
                    Axiom::EquivalentObjectProperties(vec![sub, sup])
                } else {
                    Axiom::SubObjectPropertyOf(SubObjectProperty::Expression(sub), sup)
                }
            }
            (Expression::DataProperty(sub), Expression::DataProperty(sup)) => {
                if complete {
                    Axiom::EquivalentDataProperties(vec![sub, sup])
                } else {
                    Axiom::SubDataPropertyOf(sub, sup)
                }
            }
            (Expression::PropertyChain(chain), Expression::ObjectProperty(sup)) => {
                Axiom::SubObjectPropertyOf(SubObjectProperty::Chain(chain), sup)
            }
            (Expression::ObjectProperty(role), Expression::ObjectPropertyComplement(other)) => {
                Axiom::DisjointObjectProperties(vec![role, other])
            }
            (Expression::DataProperty(attribute), Expression::DataPropertyComplement(other)) => {
                Axiom::DisjointDataProperties(vec![attribute, other])
            }
            (Expression::DataPropertyRange(attribute), Expression::DataRange(range)) => {
                Axiom::DataPropertyRange(attribute, range)
            }
            _ => return Err(untranslatable(edge)),
        };
        Ok(axiom)
    }

    /// Domain and range axioms for an unqualified existential restriction
    /// included in a concept.
    fn domain_or_range_axiom(&mut self, source: &Node, target: &'a Node) -> Result<Option<Axiom>> {
        let is_range = match source.kind() {
            NodeKind::DomainRestriction(Restriction::Exists) => false,
            NodeKind::RangeRestriction(Restriction::Exists) => true,
            _ => return Ok(None),
        };
        let (property, filler) = self.property_and_filler(source)?;
        if filler.is_some() || self.identity(target)? != Identity::Concept {
            return Ok(None);
        }

        let class = self.class(target)?;
        let axiom = match (property.kind(), is_range) {
            (NodeKind::Attribute, false) => {
                Axiom::DataPropertyDomain(self.data_property(property)?, class)
            }
            (NodeKind::Attribute, true) => return Ok(None),
            (_, false) => Axiom::ObjectPropertyDomain(self.object_property(property)?, class),
            (_, true) => Axiom::ObjectPropertyRange(self.object_property(property)?, class),
        };
        Ok(Some(axiom))
    }
}

#[derive(Debug, Clone, Copy)]
enum Bound {
    Min,
    Max,
    Exact,
}

/// Builds a cardinality restriction; distinct bounds give the intersection
/// of a minimum and a maximum restriction.
fn cardinality(
    node: &Node,
    min: Option<u32>,
    max: Option<u32>,
    restrict: impl Fn(Bound, u32) -> ClassExpression,
) -> Result<ClassExpression> {
    match (min, max) {
        (Some(min), Some(max)) if min == max => Ok(restrict(Bound::Exact, min)),
        (Some(min), Some(max)) => Ok(ClassExpression::ObjectIntersectionOf(vec![
            Rc::new(restrict(Bound::Min, min)),
            Rc::new(restrict(Bound::Max, max)),
        ])),
        (Some(min), None) => Ok(restrict(Bound::Min, min)),
        (None, Some(max)) => Ok(restrict(Bound::Max, max)),
        (None, None) => Err(unexpected(node, "at least one cardinality bound")),
    }
}

/// The datatype of an unquoted facet value.
fn facet_datatype(facet: FacetKind, restricted: &Iri) -> Iri {
    match facet {
        FacetKind::Length | FacetKind::MinLength | FacetKind::MaxLength => {
            Iri::xsd("nonNegativeInteger")
        }
        FacetKind::Pattern | FacetKind::LangRange => Iri::xsd("string"),
        _ => restricted.clone(),
    }
}

fn is_property_node(kind: &NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::Role | NodeKind::RoleInverse | NodeKind::Attribute
    )
}

fn label(node: &Node) -> Result<&str> {
    node.label().ok_or_else(|| {
        Diagnostic::error(format!("{node} has no label"))
            .with_code(ErrorCode::E300)
            .with_node_label(node.id(), format!("unlabeled {}", node.kind()))
            .with_help("the label names the entity in the exported ontology")
    })
}

fn single<'n>(node: &Node, operands: &[&'n Node]) -> Result<&'n Node> {
    match operands {
        [operand] => Ok(*operand),
        _ => Err(unexpected(node, "exactly one operand")),
    }
}

fn unexpected(node: &Node, expected: &str) -> Diagnostic {
    Diagnostic::error(format!("{node} cannot be resolved, expected {expected}"))
        .with_code(ErrorCode::E301)
        .with_node_label(node.id(), node.kind().name())
}

fn untranslatable(edge: &Edge) -> Diagnostic {
    Diagnostic::error(format!("{edge} has no OWL counterpart"))
        .with_code(ErrorCode::E301)
        .with_edge_label(edge.id(), "untranslatable edge")
        .with_secondary_node_label(edge.source(), "source")
        .with_secondary_node_label(edge.target(), "target")
}
