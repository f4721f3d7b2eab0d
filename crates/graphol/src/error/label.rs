//! Labeled diagram elements for diagnostic messages.
//!
//! A label associates a message with a node or an edge of the diagram,
//! telling the user where a problem occurred.

use std::fmt;

use graphol_core::identifier::Id;

/// The diagram element a label points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Node(Id),
    Edge(Id),
}

impl Element {
    /// Get the identifier of the element.
    pub fn id(&self) -> Id {
        match self {
            Element::Node(id) | Element::Edge(id) => *id,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Node(id) => write!(f, "node `{id}`"),
            Element::Edge(id) => write!(f, "edge `{id}`"),
        }
    }
}

/// A labeled diagram element.
///
/// # Primary vs Secondary Labels
///
/// - **Primary labels** mark the element that violates the rule.
/// - **Secondary labels** point at related elements, such as the endpoints
///   of an offending edge.
#[derive(Debug, Clone)]
pub struct Label {
    element: Element,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(element: Element, message: impl Into<String>) -> Self {
        Self {
            element,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub fn secondary(element: Element, message: impl Into<String>) -> Self {
        Self {
            element,
            message: message.into(),
            is_primary: false,
        }
    }

    /// Get the element this label applies to.
    pub fn element(&self) -> Element {
        self.element
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Check if this is a secondary label.
    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_label() {
        let label = Label::primary(Element::Edge(Id::new("e0")), "offending edge");

        assert_eq!(label.element(), Element::Edge(Id::new("e0")));
        assert_eq!(label.message(), "offending edge");
        assert!(label.is_primary());
        assert!(!label.is_secondary());
    }

    #[test]
    fn test_secondary_label() {
        let label = Label::secondary(Element::Node(Id::new("n1")), "role expression");

        assert_eq!(label.element().id(), Id::new("n1"));
        assert!(label.is_secondary());
    }

    #[test]
    fn test_element_display() {
        assert_eq!(Element::Node(Id::new("n4")).to_string(), "node `n4`");
        assert_eq!(Element::Edge(Id::new("e2")).to_string(), "edge `e2`");
    }
}
