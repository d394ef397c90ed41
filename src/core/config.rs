//! Rule configuration.
//!
//! `RulesConfig` carries every numeric rule of the game. The defaults are
//! the standard rules; tests and tools tweak them through the `with_*`
//! builder methods and must call `validate` before use.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of server slots each player defends.
pub const SLOT_COUNT: usize = 4;

/// Invalid rule configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("slots_per_player must be 4, got {0}")]
    SlotCount(usize),
    #[error("max_spv must be at least 1")]
    ZeroSpv,
    #[error("moves_per_turn must be at least 1")]
    ZeroMoves,
    #[error("max_hand_size must be at least 1")]
    ZeroHandSize,
    #[error("initial_hand_size {initial} exceeds max_hand_size {max}")]
    InitialHandTooLarge { initial: usize, max: usize },
    #[error("copies_per_card must be at least 1")]
    ZeroCopies,
}

/// Numeric rules of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Server slots per player. Fixed by the board layout.
    pub slots_per_player: usize,

    /// Full health of a server slot.
    pub max_spv: u8,

    /// Move budget granted at the start of every turn.
    pub moves_per_turn: u8,

    /// Hard hand cap enforced when drawing.
    pub max_hand_size: usize,

    /// Cards dealt to each player at game start.
    pub initial_hand_size: usize,

    /// Copies of each catalog card in the deck.
    pub copies_per_card: usize,

    /// Pacing delay before a computer-controlled player acts.
    pub opponent_delay_ms: u64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            slots_per_player: SLOT_COUNT,
            max_spv: 5,
            moves_per_turn: 3,
            max_hand_size: 7,
            initial_hand_size: 3,
            copies_per_card: 2,
            opponent_delay_ms: 800,
        }
    }
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_spv(mut self, spv: u8) -> Self {
        self.max_spv = spv;
        self
    }

    pub fn with_moves_per_turn(mut self, moves: u8) -> Self {
        self.moves_per_turn = moves;
        self
    }

    pub fn with_max_hand_size(mut self, size: usize) -> Self {
        self.max_hand_size = size;
        self
    }

    pub fn with_initial_hand_size(mut self, size: usize) -> Self {
        self.initial_hand_size = size;
        self
    }

    pub fn with_copies_per_card(mut self, copies: usize) -> Self {
        self.copies_per_card = copies;
        self
    }

    pub fn with_opponent_delay_ms(mut self, delay: u64) -> Self {
        self.opponent_delay_ms = delay;
        self
    }

    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slots_per_player != SLOT_COUNT {
            return Err(ConfigError::SlotCount(self.slots_per_player));
        }
        if self.max_spv == 0 {
            return Err(ConfigError::ZeroSpv);
        }
        if self.moves_per_turn == 0 {
            return Err(ConfigError::ZeroMoves);
        }
        if self.max_hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }
        if self.initial_hand_size > self.max_hand_size {
            return Err(ConfigError::InitialHandTooLarge {
                initial: self.initial_hand_size,
                max: self.max_hand_size,
            });
        }
        if self.copies_per_card == 0 {
            return Err(ConfigError::ZeroCopies);
        }
        Ok(())
    }
}
