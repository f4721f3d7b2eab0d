//! The axioms an export produces.

use std::rc::Rc;

use crate::owl::{
    ClassExpression as Class, DataRange, Entity, Iri, Literal,
    ObjectPropertyExpression as ObjectProperty,
};

/// The sub-property side of an object sub-property axiom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SubObjectProperty {
    Expression(Rc<ObjectProperty>),
    Chain(Vec<Rc<ObjectProperty>>),
}

/// An OWL 2 axiom.
///
/// This is the intermediate representation handed from the translator to
/// the serializers. Variants mirror the functional-syntax axioms of the same
/// name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Axiom {
    Declaration(Entity),

    SubClassOf(Rc<Class>, Rc<Class>),
    EquivalentClasses(Vec<Rc<Class>>),
    DisjointClasses(Vec<Rc<Class>>),
    DisjointUnion(Iri, Vec<Rc<Class>>),

    SubObjectPropertyOf(SubObjectProperty, Rc<ObjectProperty>),
    EquivalentObjectProperties(Vec<Rc<ObjectProperty>>),
    DisjointObjectProperties(Vec<Rc<ObjectProperty>>),
    ObjectPropertyDomain(Rc<ObjectProperty>, Rc<Class>),
    ObjectPropertyRange(Rc<ObjectProperty>, Rc<Class>),
    FunctionalObjectProperty(Rc<ObjectProperty>),
    InverseFunctionalObjectProperty(Rc<ObjectProperty>),

    SubDataPropertyOf(Iri, Iri),
    EquivalentDataProperties(Vec<Iri>),
    DisjointDataProperties(Vec<Iri>),
    DataPropertyDomain(Iri, Rc<Class>),
    DataPropertyRange(Iri, Rc<DataRange>),
    FunctionalDataProperty(Iri),

    ClassAssertion(Rc<Class>, Iri),
    ObjectPropertyAssertion(Rc<ObjectProperty>, Iri, Iri),
    NegativeObjectPropertyAssertion(Rc<ObjectProperty>, Iri, Iri),
    DataPropertyAssertion(Iri, Iri, Literal),
    NegativeDataPropertyAssertion(Iri, Iri, Literal),

    /// An annotation on an entity: property, subject, value.
    AnnotationAssertion(Iri, Entity, Literal),
}

impl Axiom {
    /// The functional-syntax name of the axiom.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Declaration(_) => "Declaration",
            Self::SubClassOf(..) => "SubClassOf",
            Self::EquivalentClasses(_) => "EquivalentClasses",
            Self::DisjointClasses(_) => "DisjointClasses",
            Self::DisjointUnion(..) => "DisjointUnion",
            Self::SubObjectPropertyOf(..) => "SubObjectPropertyOf",
            Self::EquivalentObjectProperties(_) => "EquivalentObjectProperties",
            Self::DisjointObjectProperties(_) => "DisjointObjectProperties",
            Self::ObjectPropertyDomain(..) => "ObjectPropertyDomain",
            Self::ObjectPropertyRange(..) => "ObjectPropertyRange",
            Self::FunctionalObjectProperty(_) => "FunctionalObjectProperty",
            Self::InverseFunctionalObjectProperty(_) => "InverseFunctionalObjectProperty",
            Self::SubDataPropertyOf(..) => "SubDataPropertyOf",
            Self::EquivalentDataProperties(_) => "EquivalentDataProperties",
            Self::DisjointDataProperties(_) => "DisjointDataProperties",
            Self::DataPropertyDomain(..) => "DataPropertyDomain",
            Self::DataPropertyRange(..) => "DataPropertyRange",
            Self::FunctionalDataProperty(_) => "FunctionalDataProperty",
            Self::ClassAssertion(..) => "ClassAssertion",
            Self::ObjectPropertyAssertion(..) => "ObjectPropertyAssertion",
            Self::NegativeObjectPropertyAssertion(..) => "NegativeObjectPropertyAssertion",
            Self::DataPropertyAssertion(..) => "DataPropertyAssertion",
            Self::NegativeDataPropertyAssertion(..) => "NegativeDataPropertyAssertion",
            Self::AnnotationAssertion(..) => "AnnotationAssertion",
        }
    }
}
