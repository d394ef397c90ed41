//! Rolling human-readable action log.
//!
//! Purely cosmetic: the UI shows the last few lines under the board.

use std::collections::VecDeque;

use crate::cards::CardKind;
use crate::core::{Action, GameState, Player};

/// Lines kept in the log.
pub const LOG_CAPACITY: usize = 5;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionLog {
    lines: VecDeque<String>,
}

impl ActionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line, dropping the oldest beyond capacity.
    pub fn push(&mut self, line: impl Into<String>) {
        if self.lines.len() == LOG_CAPACITY {
            self.lines.pop_front();
        }
        self.lines.push_back(line.into());
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }
}

/// Describe an accepted action given the states around it.
#[must_use]
pub fn describe(actor: Player, action: &Action, before: &GameState, after: &GameState) -> String {
    match action {
        Action::Draw => format!("{actor} draws a card"),
        Action::EndTurn => format!("Turn {}: {}'s turn", after.turn, after.current_player),
        Action::Play { card, target } => {
            let Some(target) = target else {
                return format!("{actor} plays {card}");
            };
            let slot = target.slot;
            let lost = before.spv(target.player)[slot].saturating_sub(after.spv(target.player)[slot]);
            match card.kind() {
                CardKind::Attack => format!(
                    "{actor} attacks {target} with {} for {lost} damage",
                    card.category()
                ),
                CardKind::Defence => format!("{actor} deploys {} on {target}", card.category()),
                CardKind::Utility => {
                    let healed = after.spv(target.player)[slot]
                        .saturating_sub(before.spv(target.player)[slot]);
                    format!("{actor} restores {healed} on {target} with {}", card.category())
                }
            }
        }
    }
}
