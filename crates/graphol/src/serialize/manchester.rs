//! OWL 2 Manchester syntax.
//!
//! Each axiom becomes a one-line frame keyed by its subject entity:
//!
//! ```text
//! Prefix: : <http://www.example.com/ontology#>
//! ...
//!
//! Ontology: <http://www.example.com/ontology>
//!
//! Class: :Student SubClassOf: :Person
//! ObjectProperty: :attends Domain: :Student
//! Individual: :mary Types: :Student
//! ```
//!
//! Manchester frames need a named subject. General class inclusions and
//! axioms about inverse properties have no frame and are rejected with
//! [`Error::Unsupported`].

use std::fmt::Write;

use log::trace;

use crate::{
    config::OntologyConfig,
    owl::{Axiom, ClassExpression, DataRange, Entity, ObjectPropertyExpression, SubObjectProperty},
    serialize::{Error, OwlSyntax, Serializer, prefixes, write_iri, write_literal},
};

/// Serializer for Manchester syntax.
#[derive(Debug, Default, Clone, Copy)]
pub struct Manchester;

impl Serializer for Manchester {
    fn serialize(&self, ontology: &OntologyConfig, axioms: &[Axiom]) -> Result<String, Error> {
        let mut out = String::new();
        for (prefix, namespace) in prefixes(ontology)? {
            writeln!(out, "Prefix: {prefix}: <{namespace}>")?;
        }
        writeln!(out)?;
        writeln!(out, "Ontology: <{}>", ontology.iri())?;
        writeln!(out)?;
        for axiom in axioms {
            let line = frame(axiom)?;
            trace!(line:%; "Writing frame");
            writeln!(out, "{line}")?;
        }
        Ok(out)
    }
}

fn unsupported(axiom: &Axiom, reason: &'static str) -> Error {
    Error::Unsupported {
        axiom: axiom.name(),
        syntax: OwlSyntax::Manchester,
        reason,
    }
}

/// The frame keyword of an entity; named individuals use `Individual:`.
fn keyword(entity: &Entity) -> &'static str {
    match entity {
        Entity::NamedIndividual(_) => "Individual",
        entity => entity.keyword(),
    }
}

/// Writes the named property a frame is keyed by.
fn subject(axiom: &Axiom, property: &ObjectPropertyExpression) -> Result<String, Error> {
    property
        .as_named()
        .ok_or_else(|| unsupported(axiom, "the property is an inverse"))
        .and_then(write_iri)
}

fn frame(axiom: &Axiom) -> Result<String, Error> {
    let text = match axiom {
        Axiom::Declaration(entity) => {
            format!("{}: {}", keyword(entity), write_iri(entity.iri())?)
        }
        Axiom::SubClassOf(sub, sup) => {
            let sub = sub
                .as_named()
                .ok_or_else(|| unsupported(axiom, "the subclass is not a named class"))?;
            format!("Class: {} SubClassOf: {}", write_iri(sub)?, class(sup)?)
        }
        Axiom::EquivalentClasses(classes) => {
            format!("EquivalentClasses: {}", list(classes, |c| class(c))?)
        }
        Axiom::DisjointClasses(classes) => {
            format!("DisjointClasses: {}", list(classes, |c| class(c))?)
        }
        Axiom::DisjointUnion(iri, classes) => format!(
            "Class: {} DisjointUnionOf: {}",
            write_iri(iri)?,
            list(classes, |c| class(c))?
        ),
        Axiom::SubObjectPropertyOf(SubObjectProperty::Expression(sub), sup) => format!(
            "ObjectProperty: {} SubPropertyOf: {}",
            subject(axiom, sub)?,
            object_property(sup)?
        ),
        Axiom::SubObjectPropertyOf(SubObjectProperty::Chain(chain), sup) => {
            let chain = chain
                .iter()
                .map(|p| object_property(p))
                .collect::<Result<Vec<_>, _>>()?;
            format!(
                "ObjectProperty: {} SubPropertyChain: {}",
                subject(axiom, sup)?,
                chain.join(" o ")
            )
        }
        Axiom::EquivalentObjectProperties(properties) => format!(
            "EquivalentProperties: {}",
            list(properties, |p| object_property(p))?
        ),
        Axiom::DisjointObjectProperties(properties) => format!(
            "DisjointProperties: {}",
            list(properties, |p| object_property(p))?
        ),
        Axiom::ObjectPropertyDomain(property, domain) => format!(
            "ObjectProperty: {} Domain: {}",
            subject(axiom, property)?,
            class(domain)?
        ),
        Axiom::ObjectPropertyRange(property, range) => format!(
            "ObjectProperty: {} Range: {}",
            subject(axiom, property)?,
            class(range)?
        ),
        Axiom::FunctionalObjectProperty(property) => format!(
            "ObjectProperty: {} Characteristics: Functional",
            subject(axiom, property)?
        ),
        Axiom::InverseFunctionalObjectProperty(property) => format!(
            "ObjectProperty: {} Characteristics: InverseFunctional",
            subject(axiom, property)?
        ),
        Axiom::SubDataPropertyOf(sub, sup) => format!(
            "DataProperty: {} SubPropertyOf: {}",
            write_iri(sub)?,
            write_iri(sup)?
        ),
        Axiom::EquivalentDataProperties(properties) => {
            format!("EquivalentProperties: {}", list(properties, write_iri)?)
        }
        Axiom::DisjointDataProperties(properties) => {
            format!("DisjointProperties: {}", list(properties, write_iri)?)
        }
        Axiom::DataPropertyDomain(property, domain) => format!(
            "DataProperty: {} Domain: {}",
            write_iri(property)?,
            class(domain)?
        ),
        Axiom::DataPropertyRange(property, range) => format!(
            "DataProperty: {} Range: {}",
            write_iri(property)?,
            data_range(range)?
        ),
        Axiom::FunctionalDataProperty(property) => format!(
            "DataProperty: {} Characteristics: Functional",
            write_iri(property)?
        ),
        Axiom::ClassAssertion(class_expr, individual) => format!(
            "Individual: {} Types: {}",
            write_iri(individual)?,
            class(class_expr)?
        ),
        Axiom::ObjectPropertyAssertion(property, source, target) => format!(
            "Individual: {} Facts: {} {}",
            write_iri(source)?,
            subject(axiom, property)?,
            write_iri(target)?
        ),
        Axiom::NegativeObjectPropertyAssertion(property, source, target) => format!(
            "Individual: {} Facts: not {} {}",
            write_iri(source)?,
            subject(axiom, property)?,
            write_iri(target)?
        ),
        Axiom::DataPropertyAssertion(property, subject, value) => format!(
            "Individual: {} Facts: {} {}",
            write_iri(subject)?,
            write_iri(property)?,
            write_literal(value)?
        ),
        Axiom::NegativeDataPropertyAssertion(property, subject, value) => format!(
            "Individual: {} Facts: not {} {}",
            write_iri(subject)?,
            write_iri(property)?,
            write_literal(value)?
        ),
        Axiom::AnnotationAssertion(property, subject, value) => format!(
            "{}: {} Annotations: {} {}",
            keyword(subject),
            write_iri(subject.iri())?,
            write_iri(property)?,
            write_literal(value)?
        ),
    };
    Ok(text)
}

fn list<T>(items: &[T], write: impl Fn(&T) -> Result<String, Error>) -> Result<String, Error> {
    join(items, ", ", write)
}

fn join<T>(
    items: &[T],
    separator: &str,
    write: impl Fn(&T) -> Result<String, Error>,
) -> Result<String, Error> {
    let written = items.iter().map(write).collect::<Result<Vec<_>, _>>()?;
    Ok(written.join(separator))
}

fn object_property(property: &ObjectPropertyExpression) -> Result<String, Error> {
    match property {
        ObjectPropertyExpression::ObjectProperty(iri) => write_iri(iri),
        ObjectPropertyExpression::ObjectInverseOf(iri) => Ok(format!("inverse {}", write_iri(iri)?)),
    }
}

/// Writes a class expression operand, parenthesized unless atomic.
fn class_operand(expression: &ClassExpression) -> Result<String, Error> {
    match expression {
        ClassExpression::Class(_) | ClassExpression::ObjectOneOf(_) => class(expression),
        _ => Ok(format!("({})", class(expression)?)),
    }
}

fn class(expression: &ClassExpression) -> Result<String, Error> {
    use ClassExpression as C;

    let text = match expression {
        C::Class(iri) => write_iri(iri)?,
        C::ObjectIntersectionOf(operands) => join(operands, " and ", |c| class_operand(c))?,
        C::ObjectUnionOf(operands) => join(operands, " or ", |c| class_operand(c))?,
        C::ObjectComplementOf(operand) => format!("not {}", class_operand(operand)?),
        C::ObjectOneOf(individuals) => format!("{{{}}}", list(individuals, write_iri)?),
        C::ObjectSomeValuesFrom(property, filler) => format!(
            "{} some {}",
            object_property(property)?,
            class_operand(filler)?
        ),
        C::ObjectAllValuesFrom(property, filler) => format!(
            "{} only {}",
            object_property(property)?,
            class_operand(filler)?
        ),
        C::ObjectHasSelf(property) => format!("{} Self", object_property(property)?),
        C::ObjectMinCardinality(n, property, filler) => format!(
            "{} min {n} {}",
            object_property(property)?,
            class_operand(filler)?
        ),
        C::ObjectMaxCardinality(n, property, filler) => format!(
            "{} max {n} {}",
            object_property(property)?,
            class_operand(filler)?
        ),
        C::ObjectExactCardinality(n, property, filler) => format!(
            "{} exactly {n} {}",
            object_property(property)?,
            class_operand(filler)?
        ),
        C::DataSomeValuesFrom(property, range) => format!(
            "{} some {}",
            write_iri(property)?,
            data_range_operand(range)?
        ),
        C::DataAllValuesFrom(property, range) => format!(
            "{} only {}",
            write_iri(property)?,
            data_range_operand(range)?
        ),
        C::DataMinCardinality(n, property, range) => format!(
            "{} min {n} {}",
            write_iri(property)?,
            data_range_operand(range)?
        ),
        C::DataMaxCardinality(n, property, range) => format!(
            "{} max {n} {}",
            write_iri(property)?,
            data_range_operand(range)?
        ),
        C::DataExactCardinality(n, property, range) => format!(
            "{} exactly {n} {}",
            write_iri(property)?,
            data_range_operand(range)?
        ),
    };
    Ok(text)
}

/// Writes a data range operand, parenthesized unless atomic.
fn data_range_operand(range: &DataRange) -> Result<String, Error> {
    match range {
        DataRange::Datatype(_) | DataRange::DataOneOf(_) | DataRange::DatatypeRestriction(..) => {
            data_range(range)
        }
        _ => Ok(format!("({})", data_range(range)?)),
    }
}

fn data_range(range: &DataRange) -> Result<String, Error> {
    let text = match range {
        DataRange::Datatype(iri) => write_iri(iri)?,
        DataRange::DataIntersectionOf(operands) => {
            join(operands, " and ", |r| data_range_operand(r))?
        }
        DataRange::DataUnionOf(operands) => join(operands, " or ", |r| data_range_operand(r))?,
        DataRange::DataComplementOf(operand) => format!("not {}", data_range_operand(operand)?),
        DataRange::DataOneOf(literals) => format!("{{{}}}", list(literals, write_literal)?),
        DataRange::DatatypeRestriction(datatype, facets) => {
            let facets = list(facets, |(facet, value)| {
                Ok(format!("{} {}", facet.symbol(), write_literal(value)?))
            })?;
            format!("{}[{facets}]", write_iri(datatype)?)
        }
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use graphol_core::FacetKind;

    use super::*;
    use crate::owl::{Iri, Literal};

    fn iri(local: &str) -> Iri {
        Iri::abbreviated("", local)
    }

    fn named(local: &str) -> Rc<ClassExpression> {
        Rc::new(ClassExpression::Class(iri(local)))
    }

    fn property(local: &str) -> Rc<ObjectPropertyExpression> {
        Rc::new(ObjectPropertyExpression::ObjectProperty(iri(local)))
    }

    #[test]
    fn test_document_layout() {
        let ontology = OntologyConfig::new("http://x/onto", "ex");
        let axioms = vec![Axiom::SubClassOf(
            Rc::new(ClassExpression::Class(Iri::abbreviated("ex", "A"))),
            Rc::new(ClassExpression::Class(Iri::abbreviated("ex", "B"))),
        )];

        let text = Manchester.serialize(&ontology, &axioms).unwrap();

        assert!(text.starts_with("Prefix: ex: <http://x/onto#>\n"));
        assert!(text.contains("Ontology: <http://x/onto>\n"));
        assert!(text.ends_with("Class: ex:A SubClassOf: ex:B\n"));
    }

    #[test]
    fn test_nested_class_expressions() {
        let expression = ClassExpression::ObjectIntersectionOf(vec![
            named("A"),
            Rc::new(ClassExpression::ObjectUnionOf(vec![named("B"), named("C")])),
            Rc::new(ClassExpression::ObjectSomeValuesFrom(
                Rc::new(property("r").inverse()),
                Rc::new(ClassExpression::ObjectComplementOf(named("D"))),
            )),
        ]);

        assert_eq!(
            class(&expression).unwrap(),
            ":A and (:B or :C) and (inverse :r some (not :D))"
        );
    }

    #[test]
    fn test_facets() {
        let range = DataRange::DatatypeRestriction(
            Iri::xsd("integer"),
            vec![
                (
                    FacetKind::MinInclusive,
                    Literal::Typed {
                        lexical: "18".to_string(),
                        datatype: Iri::xsd("integer"),
                    },
                ),
                (
                    FacetKind::MaxExclusive,
                    Literal::Typed {
                        lexical: "65".to_string(),
                        datatype: Iri::xsd("integer"),
                    },
                ),
            ],
        );

        assert_eq!(
            data_range(&range).unwrap(),
            "xsd:integer[>= \"18\"^^xsd:integer, < \"65\"^^xsd:integer]"
        );
    }

    #[test]
    fn test_nested_data_ranges() {
        let integer = Rc::new(DataRange::Datatype(Iri::xsd("integer")));
        let range = DataRange::DataUnionOf(vec![
            Rc::new(DataRange::DataIntersectionOf(vec![
                integer.clone(),
                Rc::new(DataRange::DataComplementOf(Rc::new(DataRange::Datatype(
                    Iri::xsd("int"),
                )))),
            ])),
            Rc::new(DataRange::Datatype(Iri::xsd("string"))),
        ]);

        assert_eq!(
            data_range(&range).unwrap(),
            "(xsd:integer and (not xsd:int)) or xsd:string"
        );
    }

    #[test]
    fn test_frames() {
        let chain = Axiom::SubObjectPropertyOf(
            SubObjectProperty::Chain(vec![property("r"), property("s")]),
            property("t"),
        );
        let negative =
            Axiom::NegativeObjectPropertyAssertion(property("r"), iri("a"), iri("b"));
        let annotation = Axiom::AnnotationAssertion(
            Iri::rdfs("comment"),
            Entity::NamedIndividual(iri("a")),
            Literal::string("note"),
        );

        assert_eq!(
            frame(&chain).unwrap(),
            "ObjectProperty: :t SubPropertyChain: :r o :s"
        );
        assert_eq!(frame(&negative).unwrap(), "Individual: :a Facts: not :r :b");
        assert_eq!(
            frame(&annotation).unwrap(),
            "Individual: :a Annotations: rdfs:comment \"note\""
        );
    }

    #[test]
    fn test_general_class_inclusion_is_unsupported() {
        let axiom = Axiom::SubClassOf(
            Rc::new(ClassExpression::ObjectComplementOf(named("A"))),
            named("B"),
        );

        assert!(matches!(
            frame(&axiom),
            Err(Error::Unsupported {
                axiom: "SubClassOf",
                ..
            })
        ));
    }

    #[test]
    fn test_inverse_domain_is_unsupported() {
        let axiom =
            Axiom::ObjectPropertyDomain(Rc::new(property("r").inverse()), named("A"));

        assert!(matches!(frame(&axiom), Err(Error::Unsupported { .. })));
    }
}
