//! Card resolution: targeting legality and effect application.
//!
//! - `targeting`: which slots a card may be played on
//! - `resolver`: attack/defence/utility resolution, defence absorption,
//!   and the direct damage/heal hooks

pub mod resolver;
pub mod targeting;

pub use resolver::{absorb, damage_slot, heal_slot, play_card, return_card_to_hand, Absorption};
pub use targeting::{legal_targets, target_side, validate_target};
