//! Card system: card values and the canonical catalog.
//!
//! ## Key Types
//!
//! - `Card`: Immutable (kind, category, power) value
//! - `CardKind`: Attack, Defence or Utility
//! - `Category`: Thematic category, each bound to one kind
//! - `Catalog`: Canonical card per category, source of the deck

pub mod catalog;
pub mod definition;

pub use catalog::Catalog;
pub use definition::{Card, CardKind, Category};
