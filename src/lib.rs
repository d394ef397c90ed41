//! # netwar-ccg
//!
//! Rules engine for a two-player server-defence card game.
//!
//! Each player guards four server slots. Attack cards damage the
//! opponent's slots, defence cards sit in a layer over your own slots and
//! absorb damage, utility cards restore health to your live slots. A turn
//! is a budget of moves; drawing or playing a card spends one.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: every rule function takes a
//!    `&GameState` and returns a new one. A rejected command returns an
//!    error and the caller keeps the old snapshot.
//!
//! 2. **Persistent Data Structures**: the deck, discard and history use
//!    `im-rs`, so a snapshot clone is cheap.
//!
//! 3. **Deterministic**: all randomness flows through a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: players, state, actions, errors, RNG, configuration
//! - `cards`: card values and the catalog
//! - `deck`: building, shuffling, drawing and dealing
//! - `rules`: `RulesEngine` trait, turn control, win evaluation
//! - `effects`: targeting and card resolution
//! - `games`: the server-defence game itself
//! - `policy`: computer opponents and their pacing
//! - `session`: the command/query surface a UI drives

pub mod cards;
pub mod core;
pub mod deck;
pub mod effects;
pub mod games;
pub mod policy;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionError, ActionRecord, Board, ConfigError, DefenceLayer, GameRng, GameRngState,
    GameState, Hand, Player, PlayerMap, RulesConfig, Target, SLOT_COUNT,
};

pub use crate::cards::{Card, CardKind, Catalog, Category};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::games::netwar::{ServerGame, ServerGameBuilder};

pub use crate::policy::{GreedyOpponent, OpponentPacer, OpponentPolicy, UniformOpponent};

pub use crate::session::{ActionLog, Controller, GameSession};
