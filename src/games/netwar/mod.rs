//! Server-defence card game.
//!
//! - Each player defends 4 server slots with 5 SPV each
//! - Attack cards hit opponent slots, defence cards absorb damage,
//!   utility cards heal your own live slots
//! - 3 moves per turn; drawing or playing a card costs a move
//! - Lose all 4 slots and you lose; if the deck runs out with no attack
//!   cards left in hand, the larger total SPV wins

mod game;

pub use game::{ServerGame, ServerGameBuilder};
