//! The OWL 2 model that diagrams are translated into.
//!
//! - [`Iri`] and [`IriBuilder`] - entity names and how labels become names.
//! - [`ClassExpression`], [`ObjectPropertyExpression`], [`DataRange`],
//!   [`Literal`] - the expressions Graphol constructors map to.
//! - [`Axiom`] - the ordered output of the translator.

mod axiom;
mod expression;
mod iri;

pub use axiom::{Axiom, SubObjectProperty};
pub use expression::{ClassExpression, DataRange, Entity, Literal, ObjectPropertyExpression};
pub use iri::{Iri, IriBuilder, WELL_KNOWN_PREFIXES, encode_local_name, is_well_known_prefix};
