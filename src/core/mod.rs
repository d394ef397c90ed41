//! Core engine types: players, state, actions, errors, RNG, configuration.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord, Target};
pub use config::{ConfigError, RulesConfig, SLOT_COUNT};
pub use error::ActionError;
pub use player::{Player, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{Board, DefenceLayer, GameState, Hand};
