//! Graphol - OWL 2 export for Graphol ontology diagrams.
//!
//! Validation, translation, and serialization of Graphol diagrams. A diagram
//! built with [`graphol_core`] is checked against the Graphol grammar,
//! translated into OWL 2 axioms, and written as functional-style or
//! Manchester syntax.

pub mod config;
pub mod error;
pub mod owl;
pub mod serialize;
pub mod translate;
pub mod validate;

pub use graphol_core::{diagram, document, edge, identifier, node};

pub use error::GrapholError;

use log::{debug, info, trace};

use graphol_core::Diagram;

use config::ExportConfig;
use owl::Axiom;
use validate::ValidatedDiagram;

/// Exporter turning Graphol diagrams into OWL text.
///
/// Each stage of the pipeline is exposed on its own, so callers can stop
/// after validation or inspect the axioms before they are serialized.
///
/// # Examples
///
/// ```rust
/// use graphol::{OwlExporter, config::ExportConfig};
/// use graphol::diagram::Diagram;
/// use graphol::edge::{Edge, EdgeKind};
/// use graphol::identifier::Id;
/// use graphol::node::{Node, NodeKind};
///
/// let mut diagram = Diagram::new();
/// diagram.add_node(Node::new(Id::new("n0"), NodeKind::Concept).with_label("Student")).unwrap();
/// diagram.add_node(Node::new(Id::new("n1"), NodeKind::Concept).with_label("Person")).unwrap();
/// diagram
///     .add_edge(Edge::new(Id::new("e0"), EdgeKind::Inclusion, Id::new("n0"), Id::new("n1")))
///     .unwrap();
///
/// let config = ExportConfig::default().with_iri("http://x/").with_prefix("");
/// let exporter = OwlExporter::new(config);
///
/// let owl = exporter.export(&diagram).expect("Failed to export");
/// assert!(owl.contains("SubClassOf(:Student :Person)"));
/// ```
#[derive(Debug, Default)]
pub struct OwlExporter {
    config: ExportConfig,
}

impl OwlExporter {
    /// Create a new exporter with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Ontology header and output syntax
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// The configuration of this exporter.
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Check a diagram against the Graphol grammar.
    ///
    /// # Errors
    ///
    /// Returns [`GrapholError::MalformedDiagram`] for the first violation
    /// found.
    pub fn validate<'a>(&self, diagram: &'a Diagram) -> Result<ValidatedDiagram<'a>, GrapholError> {
        validate::validate(diagram)
    }

    /// Translate a validated diagram into OWL axioms.
    ///
    /// # Errors
    ///
    /// Returns [`GrapholError::UnresolvableExpression`] when a node cannot be
    /// expressed in OWL.
    pub fn translate(&self, validated: &ValidatedDiagram<'_>) -> Result<Vec<Axiom>, GrapholError> {
        translate::translate(validated, self.config.ontology())
    }

    /// Write axioms in the configured syntax.
    ///
    /// # Errors
    ///
    /// Returns [`GrapholError::Serialization`] when the ontology header is
    /// invalid or an axiom cannot be written in the configured syntax.
    pub fn serialize(&self, axioms: &[Axiom]) -> Result<String, GrapholError> {
        let syntax = self.config.syntax();
        info!(syntax:%, axioms = axioms.len(); "Serializing ontology");

        let text = serialize::serialize(axioms, self.config.ontology(), syntax)?;

        debug!(bytes = text.len(); "Ontology serialized");
        Ok(text)
    }

    /// Run the whole pipeline: validate, translate, and serialize.
    ///
    /// # Errors
    ///
    /// Returns the first error of any stage. Nothing is produced for a
    /// diagram that fails validation.
    pub fn export(&self, diagram: &Diagram) -> Result<String, GrapholError> {
        info!(
            nodes = diagram.nodes_count(),
            edges = diagram.edges_count();
            "Exporting diagram"
        );

        let validated = self.validate(diagram)?;
        let axioms = self.translate(&validated)?;
        trace!(axioms:?; "Translated axioms");

        let text = self.serialize(&axioms)?;
        info!("Diagram exported successfully");
        Ok(text)
    }
}
