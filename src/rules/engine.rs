//! Rules engine trait.
//!
//! The engine defines:
//! - What actions are legal
//! - How actions turn one state into the next
//! - Win/loss conditions

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionError, GameState, Player, RulesConfig};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Equal standing at the end (no winner).
    Tie,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{p} wins!"),
            GameResult::Tie => f.write_str("It's a tie!"),
        }
    }
}

/// Rules engine trait.
///
/// Policies and the session drive the game exclusively through this
/// trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Empty once the game is over
/// - `apply_action`: Pure; on `Err` the input state stands unchanged
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    /// Get the rule configuration.
    fn config(&self) -> &RulesConfig;

    /// Enumerate every action the current player may take.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply an action by the current player.
    fn apply_action(&self, state: &GameState, action: &Action) -> Result<GameState, ActionError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    /// Whether `action` would be accepted in `state`.
    ///
    /// A play of a card the current player does not hold is simply not
    /// legal here; only `apply_action` treats it as a caller bug.
    fn is_legal(&self, state: &GameState, action: &Action) -> bool {
        if let Action::Play { card, .. } = action {
            if !state.hand(state.current_player).contains(card) {
                return false;
            }
        }
        self.apply_action(state, action).is_ok()
    }
}
