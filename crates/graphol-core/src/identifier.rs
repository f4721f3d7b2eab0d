//! Identifier management using string interning for diagram nodes and edges
//!
//! This module provides the [`Id`] type. Every node and edge of a Graphol
//! diagram is addressed by an [`Id`]; the translator memoizes resolved
//! expressions keyed by it, so it has to be cheap to copy, hash and compare.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Acquire the interner, recovering the guard if a previous holder panicked.
///
/// Interning never leaves the table in a partially updated state, so a
/// poisoned lock is still safe to use.
fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Interned identifier of a diagram node or edge.
///
/// # Examples
///
/// ```
/// use graphol_core::identifier::Id;
///
/// let concept = Id::new("n0");
/// assert_eq!(concept, Id::node(0));
/// assert_eq!(Id::edge(3), "e3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphol_core::identifier::Id;
    ///
    /// let id = Id::new("n12");
    /// assert_eq!(id.to_string(), "n12");
    /// ```
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Creates the conventional identifier of the `idx`-th node (`n{idx}`).
    pub fn node(idx: usize) -> Self {
        Self::new(&format!("n{idx}"))
    }

    /// Creates the conventional identifier of the `idx`-th edge (`e{idx}`).
    pub fn edge(idx: usize) -> Self {
        Self::new(&format!("e{idx}"))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        // Symbols are only ever created by this interner.
        let value = interner.resolve(self.0).unwrap_or_default();
        write!(f, "{value}")
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "n0"`
    fn eq(&self, other: &str) -> bool {
        interner().resolve(self.0) == Some(other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("n0");
        let id2 = Id::new("n0");
        let id3 = Id::new("n1");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "n0");
    }

    #[test]
    fn test_node_and_edge_conventions() {
        assert_eq!(Id::node(4), "n4");
        assert_eq!(Id::edge(4), "e4");
        assert_ne!(Id::node(4), Id::edge(4));
    }

    #[test]
    fn test_display_trait() {
        let id = Id::new("concept_node");
        assert_eq!(format!("{id}"), "concept_node");
    }

    #[test]
    fn test_from_trait() {
        let id: Id = "e7".into();
        assert_eq!(id, Id::edge(7));
    }

    #[test]
    fn test_hash_and_eq() {
        let mut map = HashMap::new();
        map.insert(Id::new("key1"), "value1");
        map.insert(Id::new("key2"), "value2");

        assert_eq!(map.get(&Id::new("key1")), Some(&"value1"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_partial_eq_str() {
        let id = Id::new("n3");

        assert!(id == "n3");
        assert!(id != "n33");

        let empty = Id::new("");
        assert!(empty == "");
    }

    proptest! {
        #[test]
        fn prop_interning_round_trips(name in "\\PC{0,24}") {
            let id = Id::new(&name);
            prop_assert_eq!(id.to_string(), name.clone());
            prop_assert_eq!(id, Id::new(&name));
        }
    }
}
