//! Rules: the engine trait, turn/move control and end-of-game evaluation.
//!
//! - `engine`: `RulesEngine` trait and `GameResult`
//! - `turn`: move budget, drawing, turn rollover
//! - `victory`: server destruction and deck exhaustion

pub mod engine;
pub mod turn;
pub mod victory;

pub use engine::{GameResult, RulesEngine};
