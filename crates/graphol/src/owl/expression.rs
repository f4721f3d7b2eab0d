//! OWL 2 expressions produced from Graphol nodes.
//!
//! Composite expressions hold their operands behind [`Rc`], so an operand
//! resolved once is shared by every expression that uses it.

use std::rc::Rc;

use graphol_core::FacetKind;

use crate::owl::Iri;

/// An object property expression.
///
/// Nested inversions are simplified away, so an inverse always wraps a named
/// property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectPropertyExpression {
    ObjectProperty(Iri),
    ObjectInverseOf(Iri),
}

impl ObjectPropertyExpression {
    /// The inverse of this expression.
    pub fn inverse(&self) -> Self {
        match self {
            Self::ObjectProperty(iri) => Self::ObjectInverseOf(iri.clone()),
            Self::ObjectInverseOf(iri) => Self::ObjectProperty(iri.clone()),
        }
    }

    /// The named property, if this expression is not an inverse.
    pub fn as_named(&self) -> Option<&Iri> {
        match self {
            Self::ObjectProperty(iri) => Some(iri),
            Self::ObjectInverseOf(_) => None,
        }
    }
}

/// A class expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassExpression {
    Class(Iri),
    ObjectIntersectionOf(Vec<Rc<ClassExpression>>),
    ObjectUnionOf(Vec<Rc<ClassExpression>>),
    ObjectComplementOf(Rc<ClassExpression>),
    ObjectOneOf(Vec<Iri>),
    ObjectSomeValuesFrom(Rc<ObjectPropertyExpression>, Rc<ClassExpression>),
    ObjectAllValuesFrom(Rc<ObjectPropertyExpression>, Rc<ClassExpression>),
    ObjectHasSelf(Rc<ObjectPropertyExpression>),
    ObjectMinCardinality(u32, Rc<ObjectPropertyExpression>, Rc<ClassExpression>),
    ObjectMaxCardinality(u32, Rc<ObjectPropertyExpression>, Rc<ClassExpression>),
    ObjectExactCardinality(u32, Rc<ObjectPropertyExpression>, Rc<ClassExpression>),
    DataSomeValuesFrom(Iri, Rc<DataRange>),
    DataAllValuesFrom(Iri, Rc<DataRange>),
    DataMinCardinality(u32, Iri, Rc<DataRange>),
    DataMaxCardinality(u32, Iri, Rc<DataRange>),
    DataExactCardinality(u32, Iri, Rc<DataRange>),
}

impl ClassExpression {
    /// `owl:Thing`.
    pub fn thing() -> Self {
        Self::Class(Iri::owl("Thing"))
    }

    /// The class IRI, if this is a named class.
    pub fn as_named(&self) -> Option<&Iri> {
        match self {
            Self::Class(iri) => Some(iri),
            _ => None,
        }
    }
}

/// A data range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataRange {
    Datatype(Iri),
    DataIntersectionOf(Vec<Rc<DataRange>>),
    DataUnionOf(Vec<Rc<DataRange>>),
    DataComplementOf(Rc<DataRange>),
    DataOneOf(Vec<Literal>),
    DatatypeRestriction(Iri, Vec<(FacetKind, Literal)>),
}

impl DataRange {
    /// `rdfs:Literal`.
    pub fn literal() -> Self {
        Self::Datatype(Iri::rdfs("Literal"))
    }

    /// The IRI of a constraining facet.
    ///
    /// `langRange` lives in the `rdf:` namespace, every other facet in `xsd:`.
    pub fn facet_iri(facet: FacetKind) -> Iri {
        match facet {
            FacetKind::LangRange => Iri::abbreviated("rdf", facet.local_name()),
            _ => Iri::xsd(facet.local_name()),
        }
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Typed { lexical: String, datatype: Iri },
    Tagged { lexical: String, lang: String },
}

impl Literal {
    /// A plain `xsd:string` literal.
    pub fn string(lexical: impl Into<String>) -> Self {
        Self::Typed {
            lexical: lexical.into(),
            datatype: Iri::xsd("string"),
        }
    }

    /// The lexical form.
    pub fn lexical(&self) -> &str {
        match self {
            Self::Typed { lexical, .. } | Self::Tagged { lexical, .. } => lexical,
        }
    }

    /// Checks whether an individual's label denotes a literal value.
    ///
    /// Literal labels start with a double quote: `"42"^^xsd:integer`,
    /// `"Rome"@it`, `"plain"`.
    pub fn is_literal_label(label: &str) -> bool {
        label.trim_start().starts_with('"')
    }

    /// Parses a literal label.
    ///
    /// Inside the quotes `\"` and `\\` are escapes. The closing quote may be
    /// followed by `^^datatype` (resolved through `datatype`) or `@lang`.
    /// Returns `None` when the label is not a well-formed literal.
    pub fn parse(label: &str, datatype: impl FnOnce(&str) -> Iri) -> Option<Self> {
        let body = label.trim().strip_prefix('"')?;

        let mut lexical = String::new();
        let mut chars = body.char_indices();
        let rest = loop {
            match chars.next()? {
                (_, '\\') => match chars.next()? {
                    (_, c @ ('"' | '\\')) => lexical.push(c),
                    (_, c) => {
                        lexical.push('\\');
                        lexical.push(c);
                    }
                },
                (idx, '"') => break &body[idx + 1..],
                (_, c) => lexical.push(c),
            }
        };

        if rest.is_empty() {
            return Some(Self::string(lexical));
        }
        if let Some(name) = rest.strip_prefix("^^") {
            if name.trim().is_empty() {
                return None;
            }
            return Some(Self::Typed {
                lexical,
                datatype: datatype(name),
            });
        }
        let lang = rest.strip_prefix('@')?;
        let well_formed = !lang.is_empty()
            && lang.split('-').all(|part| {
                !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric())
            });
        well_formed.then(|| Self::Tagged {
            lexical,
            lang: lang.to_string(),
        })
    }
}

/// A named entity, the subject of declarations and annotations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Entity {
    Class(Iri),
    ObjectProperty(Iri),
    DataProperty(Iri),
    NamedIndividual(Iri),
    Datatype(Iri),
}

impl Entity {
    /// The IRI of the entity.
    pub fn iri(&self) -> &Iri {
        match self {
            Self::Class(iri)
            | Self::ObjectProperty(iri)
            | Self::DataProperty(iri)
            | Self::NamedIndividual(iri)
            | Self::Datatype(iri) => iri,
        }
    }

    /// The OWL keyword of the entity type (e.g. `ObjectProperty`).
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class(_) => "Class",
            Self::ObjectProperty(_) => "ObjectProperty",
            Self::DataProperty(_) => "DataProperty",
            Self::NamedIndividual(_) => "NamedIndividual",
            Self::Datatype(_) => "Datatype",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(label: &str) -> Option<Literal> {
        Literal::parse(label, |name| Iri::abbreviated("xsd", name.split(':').last().unwrap_or(name)))
    }

    #[test]
    fn test_is_literal_label() {
        assert!(Literal::is_literal_label("\"42\""));
        assert!(Literal::is_literal_label("  \"x\"@en"));
        assert!(!Literal::is_literal_label("Rome"));
    }

    #[test]
    fn test_parse_plain_literal() {
        assert_eq!(parse("\"hello\""), Some(Literal::string("hello")));
        assert_eq!(
            parse(r#""say \"hi\"""#),
            Some(Literal::string("say \"hi\""))
        );
    }

    #[test]
    fn test_parse_typed_literal() {
        assert_eq!(
            parse("\"42\"^^xsd:integer"),
            Some(Literal::Typed {
                lexical: "42".to_string(),
                datatype: Iri::xsd("integer"),
            })
        );
    }

    #[test]
    fn test_parse_tagged_literal() {
        assert_eq!(
            parse("\"Roma\"@it"),
            Some(Literal::Tagged {
                lexical: "Roma".to_string(),
                lang: "it".to_string(),
            })
        );
        assert_eq!(parse("\"Roma\"@en-GB").map(|l| l.lexical().to_string()), Some("Roma".to_string()));
    }

    #[test]
    fn test_parse_malformed_literal() {
        assert_eq!(parse("\"unterminated"), None);
        assert_eq!(parse("\"x\"^^"), None);
        assert_eq!(parse("\"x\"@"), None);
        assert_eq!(parse("\"x\" trailing"), None);
        assert_eq!(parse("bare"), None);
    }

    #[test]
    fn test_inverse_simplifies() {
        let r = ObjectPropertyExpression::ObjectProperty(Iri::abbreviated("", "r"));

        assert_eq!(r.inverse().inverse(), r);
        assert!(r.inverse().as_named().is_none());
    }
}
