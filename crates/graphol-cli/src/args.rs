//! Command-line argument definitions for the Graphol CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the ontology header, the output syntax and logging verbosity.

use clap::Parser;

use graphol::serialize::OwlSyntax;

/// Command-line arguments for the Graphol exporter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram document (TOML)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output OWL file
    #[arg(short, long, default_value = "out.owl")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output syntax (functional, manchester); overrides the configuration
    #[arg(long)]
    pub syntax: Option<OwlSyntax>,

    /// Ontology IRI; overrides the configuration
    #[arg(long)]
    pub iri: Option<String>,

    /// Prefix bound to the ontology namespace; overrides the configuration
    #[arg(long)]
    pub prefix: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
