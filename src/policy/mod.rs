//! Automated players.
//!
//! Policies are trait-based so the session can plug in any of them:
//! - `OpponentPolicy`: choose the current player's next action
//! - `GreedyOpponent`: deterministic priority heuristic
//! - `UniformOpponent`: random legal action
//! - `OpponentPacer`: fixed delay before an automated move

pub mod opponent;
pub mod pacing;

pub use opponent::{GreedyOpponent, OpponentPolicy, UniformOpponent};
pub use pacing::OpponentPacer;
