//! Deck manager: catalog duplication, shuffling, drawing and dealing.

pub mod manager;

pub use manager::{build_catalog, deal_initial, draw, fresh_deck, shuffle};
