//! Error adapter for converting CLI errors to miette diagnostics.
//!
//! This module provides the bridge between the library's error types and
//! miette's rich diagnostic formatting used in the CLI.
//!
//! # Source Spans
//!
//! Library diagnostics label diagram elements by id, not by position. The
//! adapter maps each label back to the `id = "..."` line of the element in
//! the input document, looking in the `[[nodes]]` tables for nodes and in
//! the `[[edges]]` tables for edges.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use graphol::{
    GrapholError,
    error::{Diagnostic, Element},
};

use crate::CliError;

/// Adapter for a single graphol diagnostic.
///
/// This adapter wraps a single [`Diagnostic`] together with the document it
/// refers to and implements [`MietteDiagnostic`].
pub struct DiagnosticAdapter<'a> {
    /// The wrapped diagnostic
    diag: &'a Diagnostic,
    /// Document source for displaying snippets
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        if self.diag.severity().is_warning() {
            Some(miette::Severity::Warning)
        } else {
            Some(miette::Severity::Error)
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().filter_map(|label| {
            let span = element_span(self.src, label.element())?;
            let message = Some(label.message().to_string());
            if label.is_primary() {
                Some(LabeledSpan::new_primary_with_span(message, span))
            } else {
                Some(LabeledSpan::new_with_span(message, span))
            }
        })))
    }
}

/// Adapter for documents that are not valid TOML or do not describe a
/// diagram.
pub struct DocumentAdapter<'a> {
    err: &'a toml::de::Error,
    src: &'a str,
}

impl fmt::Debug for DocumentAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for DocumentAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid diagram document: {}", self.err.message())
    }
}

impl std::error::Error for DocumentAdapter<'_> {}

impl MietteDiagnostic for DocumentAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("graphol::document"))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.err.span()?;
        let label = LabeledSpan::new_primary_with_span(
            Some("here".to_string()),
            SourceSpan::new(span.start.into(), span.len()),
        );
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for [`GrapholError`] values without a document to point into.
///
/// This adapter handles errors that don't have rich diagnostic information,
/// such as I/O errors, configuration errors and serialization errors.
pub struct ErrorAdapter<'a>(pub &'a GrapholError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            GrapholError::Io(_) => "graphol::io",
            GrapholError::Diagram(_) => "graphol::diagram",
            GrapholError::MalformedDiagram(_) => "graphol::validate",
            GrapholError::UnresolvableExpression(_) => "graphol::translate",
            GrapholError::Serialization(_) => "graphol::serialize",
            GrapholError::Config(_) => "graphol::config",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A diagnostic pointing at diagram elements.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A document that could not be read as a diagram.
    Document(DocumentAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Document(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) | Reportable::Document(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Document(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn severity(&self) -> Option<miette::Severity> {
        match self {
            Reportable::Diagnostic(d) => d.severity(),
            Reportable::Document(d) => d.severity(),
            Reportable::Error(e) => e.severity(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Document(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Document(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Document(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Locate the `id = "..."` line of a diagram element in the document.
fn element_span(src: &str, element: Element) -> Option<SourceSpan> {
    let table = match element {
        Element::Node(_) => "[[nodes]]",
        Element::Edge(_) => "[[edges]]",
    };
    let id = element.id().to_string();

    let mut section = "";
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            section = trimmed;
        } else if section == table && is_id_line(trimmed, &id) {
            let start = offset + (line.len() - line.trim_start().len());
            return Some(SourceSpan::new(start.into(), trimmed.len()));
        }
        offset += line.len();
    }
    None
}

fn is_id_line(line: &str, id: &str) -> bool {
    line.strip_prefix("id")
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('='))
        .map(str::trim)
        .and_then(|value| value.strip_prefix('"'))
        .and_then(|value| value.strip_suffix('"'))
        .is_some_and(|value| value == id)
}

/// Wrap validation warnings so they render against the input document.
pub fn warning_reportables<'a>(warnings: &'a [Diagnostic], src: &'a str) -> Vec<Reportable<'a>> {
    warnings
        .iter()
        .map(|warning| Reportable::Diagnostic(DiagnosticAdapter::new(warning, src)))
        .collect()
}

/// Render a reportable with miette's graphical handler.
pub fn render(reportable: &Reportable<'_>) -> String {
    let reporter = miette::GraphicalReportHandler::new();
    let mut writer = String::new();
    reporter
        .render_report(&mut writer, reportable)
        .expect("Writing to String buffer is infallible");
    writer
}

/// Convert a [`CliError`] into a list of reportable errors.
///
/// Diagnostics of errors found in the input document are rendered against
/// it; every other error is reported on its own.
pub fn to_reportables(err: &CliError) -> Vec<Reportable<'_>> {
    let reportable = match err {
        CliError::Diagram { err, src } => match err.diagnostic() {
            Some(diag) => Reportable::Diagnostic(DiagnosticAdapter::new(diag, src)),
            None => Reportable::Error(ErrorAdapter(err)),
        },
        CliError::Document { err, src } => Reportable::Document(DocumentAdapter { err, src }),
        CliError::Graphol(err) => Reportable::Error(ErrorAdapter(err)),
    };
    vec![reportable]
}

#[cfg(test)]
mod tests {
    use graphol::error::ErrorCode;
    use graphol_core::Id;

    use super::*;

    const DOCUMENT: &str = r#"[[nodes]]
id = "n0"
kind = "concept"
label = "A"

[[nodes]]
id = "n1"
kind = "role"
label = "r"

[[edges]]
id = "n0"
kind = "inclusion"
source = "n0"
target = "n1"
"#;

    #[test]
    fn test_element_span_finds_node() {
        let span = element_span(DOCUMENT, Element::Node(Id::new("n1"))).unwrap();

        let start = span.offset();
        assert_eq!(&DOCUMENT[start..start + span.len()], "id = \"n1\"");
    }

    #[test]
    fn test_element_span_respects_tables() {
        let node = element_span(DOCUMENT, Element::Node(Id::new("n0"))).unwrap();
        let edge = element_span(DOCUMENT, Element::Edge(Id::new("n0"))).unwrap();

        assert!(node.offset() < edge.offset());
        assert!(DOCUMENT[..edge.offset()].contains("[[edges]]"));
    }

    #[test]
    fn test_element_span_missing() {
        assert!(element_span(DOCUMENT, Element::Node(Id::new("n9"))).is_none());
    }

    #[test]
    fn test_diagram_diagnostic() {
        let diag = Diagnostic::error("inclusion between a concept and a role")
            .with_code(ErrorCode::E202)
            .with_edge_label(Id::new("n0"), "offending edge")
            .with_secondary_node_label(Id::new("n0"), "concept")
            .with_help("both ends must have the same kind");
        let err = CliError::Diagram {
            err: GrapholError::MalformedDiagram(diag),
            src: DOCUMENT.to_string(),
        };

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Diagnostic(d) => {
                assert_eq!(d.to_string(), "inclusion between a concept and a role");
                assert_eq!(d.code().map(|c| c.to_string()), Some("E202".to_string()));
                assert_eq!(d.labels().map(Iterator::count), Some(2));
            }
            other => panic!("Expected Diagnostic, got {other:?}"),
        }
    }

    #[test]
    fn test_warnings_render_as_warnings() {
        let warnings = vec![
            Diagnostic::warning("edge `e1` repeats edge `e0`")
                .with_code(ErrorCode::E208)
                .with_edge_label(Id::new("n0"), "duplicate edge"),
        ];

        let reportables = warning_reportables(&warnings, DOCUMENT);
        assert_eq!(reportables.len(), 1);
        assert_eq!(
            reportables[0].severity(),
            Some(miette::Severity::Warning)
        );
        assert_eq!(reportables[0].labels().map(Iterator::count), Some(1));

        let rendered = render(&reportables[0]);
        assert!(rendered.contains("E208"), "{rendered}");
        assert!(rendered.contains("edge `e1` repeats edge `e0`"), "{rendered}");
    }

    #[test]
    fn test_non_diagnostic_error() {
        let err = CliError::Graphol(GrapholError::Config("bad".to_string()));

        let reportables = to_reportables(&err);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(
                    e.code().map(|c| c.to_string()),
                    Some("graphol::config".to_string())
                );
            }
            other => panic!("Expected Error, got {other:?}"),
        }
    }

    #[test]
    fn test_document_error() {
        let src = "[[nodes]]\nid = \n";
        let err = toml::from_str::<graphol_core::DiagramDocument>(src).unwrap_err();
        let err = CliError::Document {
            err,
            src: src.to_string(),
        };

        let reportables = to_reportables(&err);
        assert!(matches!(reportables[0], Reportable::Document(_)));
        assert!(reportables[0].to_string().starts_with("Invalid diagram document"));
    }
}
