//! CLI logic for the Graphol exporter.
//!
//! Reads a TOML diagram document, exports it through [`OwlExporter`] and
//! writes the ontology to the output file.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};
use thiserror::Error;

use graphol::{GrapholError, OwlExporter};
use graphol_core::{Diagram, DiagramDocument};

use error_adapter::{render, warning_reportables};

/// Errors of a CLI run.
///
/// Errors found in the input document keep its source text, so they can be
/// rendered against it.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Graphol(#[from] GrapholError),

    #[error("Invalid diagram document: {}", .err.message())]
    Document { err: toml::de::Error, src: String },

    #[error("{err}")]
    Diagram { err: GrapholError, src: String },
}

/// Run the Graphol CLI application
///
/// This function processes the input document through the export pipeline
/// and writes the resulting ontology to the output file.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed documents and diagrams
/// - Translation and serialization errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let config = config::load_config(args.config.as_ref())?;
    let config = config::apply_overrides(config, args);

    let source = fs::read_to_string(&args.input).map_err(GrapholError::from)?;

    let document: DiagramDocument = match toml::from_str(&source) {
        Ok(document) => document,
        Err(err) => return Err(CliError::Document { err, src: source }),
    };
    let diagram = match document.into_diagram() {
        Ok(diagram) => diagram,
        Err(err) => {
            return Err(CliError::Diagram {
                err: err.into(),
                src: source,
            });
        }
    };

    let exporter = OwlExporter::new(config);
    let owl = match export(&exporter, &diagram, &source) {
        Ok(owl) => owl,
        Err(err) => return Err(CliError::Diagram { err, src: source }),
    };

    fs::write(&args.output, owl).map_err(GrapholError::from)?;

    info!(output_file = args.output; "Ontology exported successfully");

    Ok(())
}

/// Export stage by stage, rendering validation warnings against the document.
fn export(exporter: &OwlExporter, diagram: &Diagram, src: &str) -> Result<String, GrapholError> {
    let validated = exporter.validate(diagram)?;
    for reportable in warning_reportables(validated.warnings(), src) {
        warn!("{}", render(&reportable));
    }

    let axioms = exporter.translate(&validated)?;
    exporter.serialize(&axioms)
}
