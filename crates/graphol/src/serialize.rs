//! OWL text serialization.
//!
//! This is the last stage of the export pipeline:
//!
//! ```text
//! Diagram
//!     ↓ validate
//! ValidatedDiagram
//!     ↓ translate
//! Vec<Axiom>
//!     ↓ serialize (this module)
//! OWL text
//! ```
//!
//! # Available Syntaxes
//!
//! - [`OwlSyntax::Functional`] - OWL 2 functional-style syntax via [`functional::Functional`]
//! - [`OwlSyntax::Manchester`] - Manchester syntax via [`manchester::Manchester`]
//!
//! Both write the prefix declarations and the ontology IRI first, then one
//! line per axiom, in input order.

pub mod functional;
pub mod manchester;

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    config::OntologyConfig,
    owl::{Axiom, Iri, Literal, WELL_KNOWN_PREFIXES, is_well_known_prefix},
};

/// An OWL textual syntax.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwlSyntax {
    /// OWL 2 functional-style syntax (default)
    #[default]
    Functional,
    /// OWL 2 Manchester syntax
    Manchester,
}

impl FromStr for OwlSyntax {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "functional" => Ok(Self::Functional),
            "manchester" => Ok(Self::Manchester),
            _ => Err("Unsupported OWL syntax"),
        }
    }
}

impl From<OwlSyntax> for &'static str {
    fn from(val: OwlSyntax) -> Self {
        match val {
            OwlSyntax::Functional => "functional",
            OwlSyntax::Manchester => "manchester",
        }
    }
}

impl Display for OwlSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Errors that can occur while writing OWL text.
///
/// Converted into [`GrapholError::Serialization`] at the crate boundary.
///
/// [`GrapholError::Serialization`]: crate::GrapholError::Serialization
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid ontology IRI `{0}`")]
    InvalidOntologyIri(String),

    #[error("invalid ontology prefix `{0}`")]
    InvalidPrefix(String),

    #[error("IRI `{0}` cannot be written between angle brackets")]
    InvalidIri(String),

    #[error("{axiom} cannot be written in {syntax} syntax: {reason}")]
    Unsupported {
        axiom: &'static str,
        syntax: OwlSyntax,
        reason: &'static str,
    },

    #[error("formatting failed: {0}")]
    Fmt(#[from] fmt::Error),
}

/// A writer for one OWL syntax.
pub trait Serializer {
    /// Writes the ontology header followed by every axiom.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] when the header is invalid or an axiom has no
    /// rendering in the target syntax.
    fn serialize(&self, ontology: &OntologyConfig, axioms: &[Axiom]) -> Result<String, Error>;
}

/// Serializes axioms in the requested syntax.
///
/// # Errors
///
/// See [`Serializer::serialize`].
pub fn serialize(
    axioms: &[Axiom],
    ontology: &OntologyConfig,
    syntax: OwlSyntax,
) -> Result<String, Error> {
    match syntax {
        OwlSyntax::Functional => functional::Functional.serialize(ontology, axioms),
        OwlSyntax::Manchester => manchester::Manchester.serialize(ontology, axioms),
    }
}

/// The prefix declarations of an ontology, ontology prefix first.
///
/// # Errors
///
/// Returns [`Error::InvalidOntologyIri`] or [`Error::InvalidPrefix`] when the
/// ontology header cannot be written.
fn prefixes(ontology: &OntologyConfig) -> Result<Vec<(String, String)>, Error> {
    let iri = ontology.iri();
    if iri.is_empty() || has_forbidden_chars(iri) {
        return Err(Error::InvalidOntologyIri(iri.to_string()));
    }
    let prefix = ontology.prefix();
    if !is_valid_prefix(prefix) || is_well_known_prefix(prefix) {
        return Err(Error::InvalidPrefix(prefix.to_string()));
    }

    let mut prefixes = vec![(prefix.to_string(), ontology.namespace())];
    prefixes.extend(
        WELL_KNOWN_PREFIXES
            .iter()
            .map(|(name, namespace)| (name.to_string(), namespace.to_string())),
    );
    Ok(prefixes)
}

/// Writes an IRI, abbreviated or between angle brackets.
fn write_iri(iri: &Iri) -> Result<String, Error> {
    match iri {
        Iri::Full(full) if has_forbidden_chars(full) => Err(Error::InvalidIri(full.clone())),
        iri => Ok(iri.to_string()),
    }
}

/// Writes a literal; `xsd:string` literals are written without datatype.
fn write_literal(literal: &Literal) -> Result<String, Error> {
    match literal {
        Literal::Typed { lexical, datatype } if *datatype == Iri::xsd("string") => {
            Ok(quote(lexical))
        }
        Literal::Typed { lexical, datatype } => {
            Ok(format!("{}^^{}", quote(lexical), write_iri(datatype)?))
        }
        Literal::Tagged { lexical, lang } => Ok(format!("{}@{lang}", quote(lexical))),
    }
}

fn quote(lexical: &str) -> String {
    let mut quoted = String::with_capacity(lexical.len() + 2);
    quoted.push('"');
    for c in lexical.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Characters that may not appear inside `<...>`.
fn has_forbidden_chars(iri: &str) -> bool {
    iri.chars().any(|c| {
        c <= ' ' || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\')
    })
}

/// An empty prefix, or a letter followed by letters, digits, `_`, `-` or `.`
/// not ending with `.`.
fn is_valid_prefix(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    match chars.next() {
        None => true,
        Some(first) => {
            first.is_alphabetic()
                && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
                && !prefix.ends_with('.')
        }
    }
}
