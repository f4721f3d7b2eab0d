//! Configuration types for Graphol exports.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file.
//!
//! # Overview
//!
//! - [`ExportConfig`] - Top-level export configuration: ontology header and output syntax.
//! - [`OntologyConfig`] - The ontology IRI and the prefix bound to its namespace.
//!
//! # Example
//!
//! ```
//! # use graphol::config::ExportConfig;
//! # use graphol::serialize::OwlSyntax;
//! let config = ExportConfig::default();
//! assert_eq!(config.ontology().iri(), "http://www.example.com/ontology");
//! assert_eq!(config.syntax(), OwlSyntax::Functional);
//! ```

use serde::Deserialize;

use crate::serialize::OwlSyntax;

const DEFAULT_ONTOLOGY_IRI: &str = "http://www.example.com/ontology";

/// Top-level export configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Ontology header section.
    #[serde(default)]
    ontology: OntologyConfig,

    /// Output syntax.
    #[serde(default)]
    syntax: OwlSyntax,
}

impl ExportConfig {
    /// Creates a new [`ExportConfig`].
    pub fn new(ontology: OntologyConfig, syntax: OwlSyntax) -> Self {
        Self { ontology, syntax }
    }

    /// Returns the ontology configuration.
    pub fn ontology(&self) -> &OntologyConfig {
        &self.ontology
    }

    /// Returns the output syntax.
    pub fn syntax(&self) -> OwlSyntax {
        self.syntax
    }

    /// Replaces the ontology IRI.
    pub fn with_iri(mut self, iri: impl Into<String>) -> Self {
        self.ontology.iri = iri.into();
        self
    }

    /// Replaces the ontology prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.ontology.prefix = prefix.into();
        self
    }

    /// Replaces the output syntax.
    pub fn with_syntax(mut self, syntax: OwlSyntax) -> Self {
        self.syntax = syntax;
        self
    }
}

/// The ontology being exported.
///
/// The prefix is the short name bound to the ontology namespace. An empty
/// prefix (or `":"`) is the default prefix, written `:` in the output.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OntologyConfig {
    #[serde(default = "default_iri")]
    iri: String,

    #[serde(default)]
    prefix: String,
}

impl OntologyConfig {
    /// Creates a new [`OntologyConfig`].
    ///
    /// A trailing `:` on the prefix is dropped, so `"ex:"` and `"ex"` name
    /// the same prefix.
    pub fn new(iri: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            iri: iri.into(),
            prefix: prefix.into(),
        }
    }

    /// The ontology IRI, trimmed.
    pub fn iri(&self) -> &str {
        self.iri.trim()
    }

    /// The ontology prefix without its trailing colon; empty for the default prefix.
    pub fn prefix(&self) -> &str {
        let prefix = self.prefix.trim();
        prefix.strip_suffix(':').unwrap_or(prefix)
    }

    /// The namespace that entity names are appended to.
    ///
    /// The ontology IRI itself when it ends with `/` or `#`, otherwise the IRI
    /// followed by `#`.
    pub fn namespace(&self) -> String {
        let iri = self.iri();
        if iri.ends_with('/') || iri.ends_with('#') {
            iri.to_string()
        } else {
            format!("{iri}#")
        }
    }
}

impl Default for OntologyConfig {
    fn default() -> Self {
        Self {
            iri: default_iri(),
            prefix: String::new(),
        }
    }
}

fn default_iri() -> String {
    DEFAULT_ONTOLOGY_IRI.to_string()
}
