//! The core diagnostic type for the Graphol error system.
//!
//! A [`Diagnostic`] represents a single error or warning with optional
//! error code, labeled diagram elements, and help text.

use std::fmt;

use graphol_core::identifier::Id;

use crate::error::{
    error_code::ErrorCode,
    label::{Element, Label},
};

/// Whether a diagnostic stops the export. Warnings are only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

/// A rich diagnostic message pointing at diagram elements.
///
/// # Example
///
/// ```text
/// error[E202]: inclusion between a concept and a role
///   = edge `e3`: offending edge
///   = node `n0`: concept expression
///   = node `n1`: role expression
///   = help: both ends of an inclusion must denote the same kind of expression
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use graphol::error::{Diagnostic, ErrorCode};
    /// # use graphol_core::identifier::Id;
    ///
    /// let diag = Diagnostic::error("node `n0` has no label")
    ///     .with_code(ErrorCode::E300)
    ///     .with_node_label(Id::new("n0"), "unlabeled concept")
    ///     .with_help("give the node a label");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label pointing at a node.
    pub fn with_node_label(mut self, node: Id, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(Element::Node(node), message));
        self
    }

    /// Add a primary label pointing at an edge.
    pub fn with_edge_label(mut self, edge: Id, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(Element::Edge(edge), message));
        self
    }

    /// Add a secondary label pointing at a node.
    pub fn with_secondary_node_label(mut self, node: Id, message: impl Into<String>) -> Self {
        self.labels
            .push(Label::secondary(Element::Node(node), message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// The element of the first primary label, if any.
    pub fn primary_element(&self) -> Option<Element> {
        self.labels
            .iter()
            .find(|label| label.is_primary())
            .map(Label::element)
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E001]: message" or "warning: message"
        match self.severity {
            Severity::Error => write!(f, "error")?,
            Severity::Warning => write!(f, "warning")?,
        }
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::new(Severity::Error, "test error");

        assert_eq!(diag.severity(), Severity::Error);
        assert!(!diag.severity().is_warning());
        assert_eq!(diag.message(), "test error");
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
        assert!(diag.primary_element().is_none());
    }

    #[test]
    fn test_diagnostic_with_labels() {
        let diag = Diagnostic::error("inclusion between a concept and a role")
            .with_secondary_node_label(Id::new("n0"), "concept expression")
            .with_edge_label(Id::new("e3"), "offending edge");

        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_secondary());
        assert!(diag.labels()[1].is_primary());
        assert_eq!(diag.primary_element(), Some(Element::Edge(Id::new("e3"))));
    }

    #[test]
    fn test_diagnostic_display_with_code() {
        let diag = Diagnostic::error("node `n0` has no label").with_code(ErrorCode::E300);

        assert_eq!(diag.to_string(), "error[E300]: node `n0` has no label");
    }

    #[test]
    fn test_diagnostic_display_without_code() {
        let diag = Diagnostic::warning("edge `e1` repeats edge `e0`");

        assert_eq!(diag.to_string(), "warning: edge `e1` repeats edge `e0`");
    }

    #[test]
    fn test_diagnostic_builder_chain() {
        let diag = Diagnostic::error("role chain `n4` has a single operand")
            .with_code(ErrorCode::E101)
            .with_node_label(Id::new("n4"), "role chain")
            .with_help("a role chain composes at least two roles");

        assert_eq!(diag.severity(), Severity::Error);
        assert_eq!(diag.code(), Some(ErrorCode::E101));
        assert_eq!(diag.labels().len(), 1);
        assert_eq!(
            diag.help(),
            Some("a role chain composes at least two roles")
        );
    }
}
