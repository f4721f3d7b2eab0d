//! OWL 2 functional-style syntax.
//!
//! ```text
//! Prefix(:=<http://www.example.com/ontology#>)
//! Prefix(owl:=<http://www.w3.org/2002/07/owl#>)
//! ...
//!
//! Ontology(<http://www.example.com/ontology>
//! Declaration(Class(:Person))
//! SubClassOf(:Student :Person)
//! )
//! ```

use std::fmt::Write;

use log::trace;

use crate::{
    config::OntologyConfig,
    owl::{
        Axiom, ClassExpression, DataRange, Entity, Iri, ObjectPropertyExpression,
        SubObjectProperty,
    },
    serialize::{Error, Serializer, prefixes, write_iri, write_literal},
};

/// Serializer for functional-style syntax.
#[derive(Debug, Default, Clone, Copy)]
pub struct Functional;

impl Serializer for Functional {
    fn serialize(&self, ontology: &OntologyConfig, axioms: &[Axiom]) -> Result<String, Error> {
        let mut out = String::new();
        for (prefix, namespace) in prefixes(ontology)? {
            writeln!(out, "Prefix({prefix}:=<{namespace}>)")?;
        }
        writeln!(out)?;
        writeln!(out, "Ontology(<{}>", ontology.iri())?;
        for axiom in axioms {
            let line = axiom_text(axiom)?;
            trace!(line:%; "Writing axiom");
            writeln!(out, "{line}")?;
        }
        writeln!(out, ")")?;
        Ok(out)
    }
}

fn axiom_text(axiom: &Axiom) -> Result<String, Error> {
    let name = axiom.name();
    let args = match axiom {
        Axiom::Declaration(entity) => entity_text(entity)?,
        Axiom::SubClassOf(sub, sup) => format!("{} {}", class(sub)?, class(sup)?),
        Axiom::EquivalentClasses(classes) | Axiom::DisjointClasses(classes) => {
            list(classes, |c| class(c))?
        }
        Axiom::DisjointUnion(iri, classes) => {
            format!("{} {}", write_iri(iri)?, list(classes, |c| class(c))?)
        }
        Axiom::SubObjectPropertyOf(sub, sup) => {
            let sub = match sub {
                SubObjectProperty::Expression(property) => object_property(property)?,
                SubObjectProperty::Chain(chain) => format!(
                    "ObjectPropertyChain({})",
                    list(chain, |p| object_property(p))?
                ),
            };
            format!("{sub} {}", object_property(sup)?)
        }
        Axiom::EquivalentObjectProperties(properties)
        | Axiom::DisjointObjectProperties(properties) => {
            list(properties, |p| object_property(p))?
        }
        Axiom::ObjectPropertyDomain(property, class_expr)
        | Axiom::ObjectPropertyRange(property, class_expr) => {
            format!("{} {}", object_property(property)?, class(class_expr)?)
        }
        Axiom::FunctionalObjectProperty(property)
        | Axiom::InverseFunctionalObjectProperty(property) => object_property(property)?,
        Axiom::SubDataPropertyOf(sub, sup) => format!("{} {}", write_iri(sub)?, write_iri(sup)?),
        Axiom::EquivalentDataProperties(properties)
        | Axiom::DisjointDataProperties(properties) => list(properties, write_iri)?,
        Axiom::DataPropertyDomain(property, class_expr) => {
            format!("{} {}", write_iri(property)?, class(class_expr)?)
        }
        Axiom::DataPropertyRange(property, range) => {
            format!("{} {}", write_iri(property)?, data_range(range)?)
        }
        Axiom::FunctionalDataProperty(property) => write_iri(property)?,
        Axiom::ClassAssertion(class_expr, individual) => {
            format!("{} {}", class(class_expr)?, write_iri(individual)?)
        }
        Axiom::ObjectPropertyAssertion(property, subject, object)
        | Axiom::NegativeObjectPropertyAssertion(property, subject, object) => format!(
            "{} {} {}",
            object_property(property)?,
            write_iri(subject)?,
            write_iri(object)?
        ),
        Axiom::DataPropertyAssertion(property, subject, value)
        | Axiom::NegativeDataPropertyAssertion(property, subject, value) => format!(
            "{} {} {}",
            write_iri(property)?,
            write_iri(subject)?,
            write_literal(value)?
        ),
        Axiom::AnnotationAssertion(property, subject, value) => format!(
            "{} {} {}",
            write_iri(property)?,
            write_iri(subject.iri())?,
            write_literal(value)?
        ),
    };
    Ok(format!("{name}({args})"))
}

fn entity_text(entity: &Entity) -> Result<String, Error> {
    Ok(format!("{}({})", entity.keyword(), write_iri(entity.iri())?))
}

fn list<T>(items: &[T], write: impl Fn(&T) -> Result<String, Error>) -> Result<String, Error> {
    let written = items.iter().map(write).collect::<Result<Vec<_>, _>>()?;
    Ok(written.join(" "))
}

fn object_property(property: &ObjectPropertyExpression) -> Result<String, Error> {
    match property {
        ObjectPropertyExpression::ObjectProperty(iri) => write_iri(iri),
        ObjectPropertyExpression::ObjectInverseOf(iri) => {
            Ok(format!("ObjectInverseOf({})", write_iri(iri)?))
        }
    }
}

fn class(expression: &ClassExpression) -> Result<String, Error> {
    use ClassExpression as C;

    let text = match expression {
        C::Class(iri) => return write_iri(iri),
        C::ObjectIntersectionOf(operands) => {
            format!("ObjectIntersectionOf({})", list(operands, |c| class(c))?)
        }
        C::ObjectUnionOf(operands) => format!("ObjectUnionOf({})", list(operands, |c| class(c))?),
        C::ObjectComplementOf(operand) => format!("ObjectComplementOf({})", class(operand)?),
        C::ObjectOneOf(individuals) => format!("ObjectOneOf({})", list(individuals, write_iri)?),
        C::ObjectSomeValuesFrom(property, filler) => format!(
            "ObjectSomeValuesFrom({} {})",
            object_property(property)?,
            class(filler)?
        ),
        C::ObjectAllValuesFrom(property, filler) => format!(
            "ObjectAllValuesFrom({} {})",
            object_property(property)?,
            class(filler)?
        ),
        C::ObjectHasSelf(property) => format!("ObjectHasSelf({})", object_property(property)?),
        C::ObjectMinCardinality(n, property, filler) => format!(
            "ObjectMinCardinality({n} {} {})",
            object_property(property)?,
            class(filler)?
        ),
        C::ObjectMaxCardinality(n, property, filler) => format!(
            "ObjectMaxCardinality({n} {} {})",
            object_property(property)?,
            class(filler)?
        ),
        C::ObjectExactCardinality(n, property, filler) => format!(
            "ObjectExactCardinality({n} {} {})",
            object_property(property)?,
            class(filler)?
        ),
        C::DataSomeValuesFrom(property, range) => format!(
            "DataSomeValuesFrom({} {})",
            write_iri(property)?,
            data_range(range)?
        ),
        C::DataAllValuesFrom(property, range) => format!(
            "DataAllValuesFrom({} {})",
            write_iri(property)?,
            data_range(range)?
        ),
        C::DataMinCardinality(n, property, range) => format!(
            "DataMinCardinality({n} {} {})",
            write_iri(property)?,
            data_range(range)?
        ),
        C::DataMaxCardinality(n, property, range) => format!(
            "DataMaxCardinality({n} {} {})",
            write_iri(property)?,
            data_range(range)?
        ),
        C::DataExactCardinality(n, property, range) => format!(
            "DataExactCardinality({n} {} {})",
            write_iri(property)?,
            data_range(range)?
        ),
    };
    Ok(text)
}

fn data_range(range: &DataRange) -> Result<String, Error> {
    let text = match range {
        DataRange::Datatype(iri) => return write_iri(iri),
        DataRange::DataIntersectionOf(operands) => {
            format!("DataIntersectionOf({})", list(operands, |r| data_range(r))?)
        }
        DataRange::DataUnionOf(operands) => {
            format!("DataUnionOf({})", list(operands, |r| data_range(r))?)
        }
        DataRange::DataComplementOf(operand) => {
            format!("DataComplementOf({})", data_range(operand)?)
        }
        DataRange::DataOneOf(literals) => format!("DataOneOf({})", list(literals, write_literal)?),
        DataRange::DatatypeRestriction(datatype, facets) => {
            let facets = list(facets, |(facet, value)| {
                let facet: Iri = DataRange::facet_iri(*facet);
                Ok(format!("{} {}", write_iri(&facet)?, write_literal(value)?))
            })?;
            format!("DatatypeRestriction({} {facets})", write_iri(datatype)?)
        }
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use graphol_core::FacetKind;

    use super::*;
    use crate::owl::Literal;

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
        let ontology = OntologyConfig::new("http://x/", "");
        let axioms = vec![
            Axiom::Declaration(Entity::Class(iri("A"))),
            Axiom::SubClassOf(named("A"), named("B")),
        ];

        let text = Functional.serialize(&ontology, &axioms).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Prefix(:=<http://x/>)");
        assert_eq!(lines[1], "Prefix(owl:=<http://www.w3.org/2002/07/owl#>)");
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "Ontology(<http://x/>");
        assert_eq!(lines[8], "Declaration(Class(:A))");
        assert_eq!(lines[9], "SubClassOf(:A :B)");
        assert_eq!(lines[10], ")");
    }

    #[test]
    fn test_nested_class_expressions() {
        let expression = ClassExpression::ObjectIntersectionOf(vec![
            named("A"),
            Rc::new(ClassExpression::ObjectSomeValuesFrom(
                Rc::new(property("r").inverse()),
                Rc::new(ClassExpression::thing()),
            )),
            Rc::new(ClassExpression::ObjectComplementOf(named("B"))),
        ]);

        assert_eq!(
            class(&expression).unwrap(),
            "ObjectIntersectionOf(:A ObjectSomeValuesFrom(ObjectInverseOf(:r) owl:Thing) ObjectComplementOf(:B))"
        );
    }

    #[test]
    fn test_cardinality() {
        let expression = ClassExpression::ObjectMinCardinality(2, property("r"), named("A"));

        assert_eq!(class(&expression).unwrap(), "ObjectMinCardinality(2 :r :A)");
    }

    #[test]
    fn test_property_chain() {
        let axiom = Axiom::SubObjectPropertyOf(
            SubObjectProperty::Chain(vec![property("r"), property("s")]),
            property("t"),
        );

        assert_eq!(
            axiom_text(&axiom).unwrap(),
            "SubObjectPropertyOf(ObjectPropertyChain(:r :s) :t)"
        );
    }

    #[test]
    fn test_datatype_restriction() {
        let range = DataRange::DatatypeRestriction(
            Iri::xsd("integer"),
            vec![(
                FacetKind::MinInclusive,
                Literal::Typed {
                    lexical: "18".to_string(),
                    datatype: Iri::xsd("integer"),
                },
            )],
        );

        assert_eq!(
            data_range(&range).unwrap(),
            "DatatypeRestriction(xsd:integer xsd:minInclusive \"18\"^^xsd:integer)"
        );
    }

    #[test]
    fn test_annotation() {
        let axiom = Axiom::AnnotationAssertion(
            Iri::rdfs("comment"),
            Entity::Class(iri("A")),
            Literal::string("a \"quoted\" note"),
        );

        assert_eq!(
            axiom_text(&axiom).unwrap(),
            r#"AnnotationAssertion(rdfs:comment :A "a \"quoted\" note")"#
        );
    }

    #[test]
    fn test_negative_assertion() {
        let axiom = Axiom::NegativeObjectPropertyAssertion(property("r"), iri("a"), iri("b"));

        assert_eq!(
            axiom_text(&axiom).unwrap(),
            "NegativeObjectPropertyAssertion(:r :a :b)"
        );
    }
}
