//! Rejection reasons for illegal actions.
//!
//! Illegal actions are expected and frequent: the core answers them with
//! an `ActionError` and leaves the state untouched. The UI turns the
//! reason into a message.

use thiserror::Error;

use super::action::Target;
use super::player::Player;
use crate::cards::Card;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("The game is already over.")]
    GameOver,
    #[error("It is not {0}'s turn.")]
    NotYourTurn(Player),
    #[error("No moves remaining this turn.")]
    NoMovesRemaining,
    #[error("Hand is full.")]
    HandFull,
    #[error("The deck is empty.")]
    DeckEmpty,
    #[error("There is no server slot {0}.")]
    InvalidSlot(usize),
    #[error("{0} needs a target slot.")]
    MissingTarget(Card),
    #[error("{card} cannot target {target}.")]
    IllegalTarget { card: Card, target: Target },
    #[error("{0} is destroyed.")]
    SlotDestroyed(Target),
    #[error("{card} is not in {player}'s hand.")]
    CardNotInHand { player: Player, card: Card },
}
