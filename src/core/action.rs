//! Action representation.
//!
//! Every command the UI (or a policy) can issue is an `Action`:
//! - "End turn" = no arguments
//! - "Draw" = no arguments, the acting player is implied
//! - "Play card X at slot S of player P" = card + optional target

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::cards::Card;

/// A server slot on one side of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    /// Owner of the slot.
    pub player: Player,
    /// Slot index, `0..SLOT_COUNT`.
    pub slot: usize,
}

impl Target {
    #[must_use]
    pub const fn new(player: Player, slot: usize) -> Self {
        Self { player, slot }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} server {}", self.player, self.slot + 1)
    }
}

/// A complete game action by the current player.
///
/// ## Example
///
/// ```
/// use netwar_ccg::cards::{Card, Category};
/// use netwar_ccg::core::{Action, Player, Target};
///
/// let attack = Action::play(
///     Card::new(Category::Botnet, 5),
///     Some(Target::new(Player::Player2, 0)),
/// );
/// assert!(attack.spends_move());
/// assert!(!Action::EndTurn.spends_move());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw the top card of the deck.
    Draw,
    /// Play a card from hand.
    Play {
        card: Card,
        target: Option<Target>,
    },
    /// Hand the turn to the opponent.
    EndTurn,
}

impl Action {
    #[must_use]
    pub const fn play(card: Card, target: Option<Target>) -> Self {
        Action::Play { card, target }
    }

    /// Whether this action consumes one unit of the move budget.
    #[must_use]
    pub const fn spends_move(&self) -> bool {
        matches!(self, Action::Draw | Action::Play { .. })
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay/debugging and for the UI's history view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: Player,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: Player, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
