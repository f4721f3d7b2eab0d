//! IRIs and the rules that derive them from node labels.

use std::fmt;

use crate::config::OntologyConfig;

/// Well-known prefixes and the namespaces they are bound to.
pub const WELL_KNOWN_PREFIXES: [(&str, &str); 5] = [
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("xml", "http://www.w3.org/XML/1998/namespace"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
];

/// XML Schema datatypes that a value-domain label may name without prefix.
const XSD_DATATYPES: [&str; 28] = [
    "anyURI",
    "base64Binary",
    "boolean",
    "byte",
    "dateTime",
    "dateTimeStamp",
    "decimal",
    "double",
    "float",
    "hexBinary",
    "int",
    "integer",
    "language",
    "long",
    "Name",
    "NCName",
    "negativeInteger",
    "NMTOKEN",
    "nonNegativeInteger",
    "nonPositiveInteger",
    "normalizedString",
    "positiveInteger",
    "short",
    "string",
    "token",
    "unsignedByte",
    "unsignedInt",
    "unsignedLong",
];

/// An IRI, either written in full or abbreviated with a prefix.
///
/// The empty prefix is the ontology's default prefix, written `:local`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Iri {
    Full(String),
    Abbreviated { prefix: String, local: String },
}

impl Iri {
    /// Creates an abbreviated IRI.
    pub fn abbreviated(prefix: impl Into<String>, local: impl Into<String>) -> Self {
        Self::Abbreviated {
            prefix: prefix.into(),
            local: local.into(),
        }
    }

    /// An IRI in the `owl:` namespace.
    pub fn owl(local: &str) -> Self {
        Self::abbreviated("owl", local)
    }

    /// An IRI in the `rdfs:` namespace.
    pub fn rdfs(local: &str) -> Self {
        Self::abbreviated("rdfs", local)
    }

    /// An IRI in the `xsd:` namespace.
    pub fn xsd(local: &str) -> Self {
        Self::abbreviated("xsd", local)
    }

    /// Checks whether the IRI belongs to one of the well-known vocabularies.
    ///
    /// Built-in entities such as `owl:Thing` or `xsd:string` are never
    /// declared by an export.
    pub fn is_builtin(&self) -> bool {
        match self {
            Self::Abbreviated { prefix, .. } => is_well_known_prefix(prefix),
            Self::Full(iri) => WELL_KNOWN_PREFIXES
                .iter()
                .any(|(_, namespace)| iri.starts_with(namespace)),
        }
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full(iri) => write!(f, "<{iri}>"),
            Self::Abbreviated { prefix, local } => write!(f, "{prefix}:{local}"),
        }
    }
}

/// Checks whether `prefix` is one of the well-known prefixes.
pub fn is_well_known_prefix(prefix: &str) -> bool {
    WELL_KNOWN_PREFIXES.iter().any(|(name, _)| *name == prefix)
}

/// Derives entity IRIs from node labels.
///
/// Resolution rules, in order:
/// - `TOP` and `BOTTOM` name the top and bottom entity of the node's kind;
/// - a label with a well-known prefix, or with the ontology prefix, keeps it;
/// - an absolute IRI (`scheme://...`) is kept in full;
/// - anything else becomes a local name under the ontology prefix, with
///   whitespace runs replaced by `_` and other unsafe characters
///   percent-encoded.
#[derive(Debug, Clone)]
pub struct IriBuilder {
    prefix: String,
}

impl IriBuilder {
    /// Creates a builder for the given ontology.
    pub fn new(ontology: &OntologyConfig) -> Self {
        Self {
            prefix: ontology.prefix().to_string(),
        }
    }

    /// The IRI of a class.
    pub fn class(&self, label: &str) -> Iri {
        match label.trim() {
            "TOP" => Iri::owl("Thing"),
            "BOTTOM" => Iri::owl("Nothing"),
            label => self.entity(label),
        }
    }

    /// The IRI of an object property.
    pub fn object_property(&self, label: &str) -> Iri {
        match label.trim() {
            "TOP" => Iri::owl("topObjectProperty"),
            "BOTTOM" => Iri::owl("bottomObjectProperty"),
            label => self.entity(label),
        }
    }

    /// The IRI of a data property.
    pub fn data_property(&self, label: &str) -> Iri {
        match label.trim() {
            "TOP" => Iri::owl("topDataProperty"),
            "BOTTOM" => Iri::owl("bottomDataProperty"),
            label => self.entity(label),
        }
    }

    /// The IRI of a datatype.
    ///
    /// Unprefixed XML Schema datatype names resolve to the `xsd:` namespace
    /// and `Literal` (or `TOP`) to `rdfs:Literal`.
    pub fn datatype(&self, label: &str) -> Iri {
        match label.trim() {
            "TOP" | "Literal" => Iri::rdfs("Literal"),
            label if XSD_DATATYPES.contains(&label) => Iri::xsd(label),
            label => self.entity(label),
        }
    }

    /// The IRI of a named individual.
    pub fn individual(&self, label: &str) -> Iri {
        self.entity(label.trim())
    }

    fn entity(&self, label: &str) -> Iri {
        if is_absolute_iri(label) {
            return Iri::Full(label.to_string());
        }
        if let Some((prefix, local)) = label.split_once(':')
            && (is_well_known_prefix(prefix) || prefix == self.prefix)
            && !local.is_empty()
        {
            return Iri::abbreviated(prefix, encode_local_name(local));
        }
        Iri::abbreviated(self.prefix.clone(), encode_local_name(label))
    }
}

/// Checks for a `scheme://` IRI.
fn is_absolute_iri(label: &str) -> bool {
    let Some((scheme, _)) = label.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Turns a label into a local name safe to write after a prefix.
///
/// Whitespace runs become a single `_`. Characters outside `[A-Za-z0-9_.-]`
/// are percent-encoded byte by byte, as are a leading `-` or `.` and a
/// trailing `.`.
pub fn encode_local_name(label: &str) -> String {
    let words: Vec<&str> = label.split_whitespace().collect();
    let joined = words.join("_");
    let last = joined.chars().count().saturating_sub(1);

    let mut encoded = String::with_capacity(joined.len());
    for (pos, c) in joined.chars().enumerate() {
        let safe = match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '_' => true,
            '-' => pos != 0,
            '.' => pos != 0 && pos != last,
            _ => false,
        };
        if safe {
            encoded.push(c);
        } else {
            let mut buf = [0; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                encoded.push_str(&format!("%{byte:02X}"));
            }
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder(prefix: &str) -> IriBuilder {
        IriBuilder::new(&OntologyConfig::new("http://x/", prefix))
    }

    #[test]
    fn test_plain_label() {
        let iri = builder("").class("Person");

        assert_eq!(iri, Iri::abbreviated("", "Person"));
        assert_eq!(iri.to_string(), ":Person");
    }

    #[test]
    fn test_top_and_bottom() {
        let builder = builder("");

        assert_eq!(builder.class("TOP"), Iri::owl("Thing"));
        assert_eq!(builder.class("BOTTOM"), Iri::owl("Nothing"));
        assert_eq!(builder.object_property("TOP"), Iri::owl("topObjectProperty"));
        assert_eq!(builder.data_property("BOTTOM"), Iri::owl("bottomDataProperty"));
        assert_eq!(builder.datatype("TOP"), Iri::rdfs("Literal"));
        assert_eq!(builder.class("owl:Thing"), Iri::owl("Thing"));
    }

    #[test]
    fn test_well_known_and_ontology_prefixes() {
        let builder = builder("ex");

        assert_eq!(builder.datatype("xsd:integer"), Iri::xsd("integer"));
        assert_eq!(builder.class("ex:Person"), Iri::abbreviated("ex", "Person"));
        assert_eq!(builder.class("foo:Bar"), Iri::abbreviated("ex", "foo%3ABar"));
    }

    #[test]
    fn test_unprefixed_datatypes() {
        let builder = builder("");

        assert_eq!(builder.datatype("string"), Iri::xsd("string"));
        assert_eq!(builder.datatype("Literal"), Iri::rdfs("Literal"));
        assert_eq!(builder.datatype("Money"), Iri::abbreviated("", "Money"));
    }

    #[test]
    fn test_absolute_iri() {
        let iri = builder("").class("http://purl.org/Thing");

        assert_eq!(iri, Iri::Full("http://purl.org/Thing".to_string()));
        assert_eq!(iri.to_string(), "<http://purl.org/Thing>");
    }

    #[test]
    fn test_encode_local_name() {
        assert_eq!(encode_local_name("has  parent\nof"), "has_parent_of");
        assert_eq!(encode_local_name("a/b"), "a%2Fb");
        assert_eq!(encode_local_name("caffè"), "caff%C3%A8");
        assert_eq!(encode_local_name("-x."), "%2Dx%2E");
        assert_eq!(encode_local_name("x-y.z"), "x-y.z");
    }

    #[test]
    fn test_builtin() {
        assert!(Iri::owl("Thing").is_builtin());
        assert!(Iri::Full("http://www.w3.org/2001/XMLSchema#int".to_string()).is_builtin());
        assert!(!Iri::abbreviated("", "A").is_builtin());
    }
}
