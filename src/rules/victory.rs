//! Win/end condition evaluation.
//!
//! Two ways to end a game:
//! - every slot of a player is destroyed: the other player wins
//! - the deck is empty and neither hand holds an attack card: the
//!   player with the larger total SPV wins, equal totals tie

use tracing::info;

use crate::core::{GameState, Player};

use super::engine::GameResult;

/// Result the state would end with, if any. Ignores `game_over`.
#[must_use]
pub fn verdict(state: &GameState) -> Option<GameResult> {
    let p1_down = state.board(Player::Player1).all_destroyed();
    let p2_down = state.board(Player::Player2).all_destroyed();

    match (p1_down, p2_down) {
        (true, true) => return Some(GameResult::Tie),
        (true, false) => return Some(GameResult::Winner(Player::Player2)),
        (false, true) => return Some(GameResult::Winner(Player::Player1)),
        (false, false) => {}
    }

    if state.deck.is_empty() && !state.any_attack_in_hands() {
        let p1 = state.board(Player::Player1).spv_total();
        let p2 = state.board(Player::Player2).spv_total();
        return Some(match p1.cmp(&p2) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::Player1),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Player2),
            std::cmp::Ordering::Equal => GameResult::Tie,
        });
    }

    None
}

/// Mark the game over if an end condition holds.
///
/// A finished game is left untouched.
pub fn evaluate(state: &mut GameState) {
    if state.game_over {
        return;
    }
    if let Some(result) = verdict(state) {
        state.game_over = true;
        state.result = Some(result);
        info!(turn = state.turn, %result, "game over");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Category};
    use crate::core::{PlayerMap, RulesConfig};
    use im::Vector;

    fn state_with(deck: Vec<Card>, p1: &[Card], p2: &[Card]) -> GameState {
        let hands = PlayerMap::new(|p| match p {
            Player::Player1 => p1.iter().copied().collect(),
            Player::Player2 => p2.iter().copied().collect(),
        });
        GameState::new(&RulesConfig::default(), Vector::from(deck), hands)
    }

    #[test]
    fn test_fresh_state_continues() {
        let state = state_with(vec![Card::new(Category::Patch, 2)], &[], &[]);
        assert_eq!(verdict(&state), None);
    }

    #[test]
    fn test_all_slots_destroyed_loses() {
        let mut state = state_with(vec![Card::new(Category::Patch, 2)], &[], &[]);
        state.boards[Player::Player1].spv = [0, 0, 0, 0];

        evaluate(&mut state);

        assert!(state.game_over);
        assert_eq!(state.result, Some(GameResult::Winner(Player::Player2)));
    }

    #[test]
    fn test_three_slots_destroyed_continues() {
        let mut state = state_with(vec![Card::new(Category::Patch, 2)], &[], &[]);
        state.boards[Player::Player2].spv = [0, 0, 1, 0];

        evaluate(&mut state);

        assert!(!state.game_over);
    }

    #[test]
    fn test_exhaustion_higher_total_wins() {
        let mut state = state_with(vec![], &[Card::new(Category::Vpn, 3)], &[]);
        state.boards[Player::Player1].spv = [5, 5, 4, 0]; // 14
        state.boards[Player::Player2].spv = [3, 3, 3, 0]; // 9

        evaluate(&mut state);

        assert!(state.game_over);
        assert_eq!(state.winner(), Some(Player::Player1));
    }

    #[test]
    fn test_exhaustion_equal_totals_tie() {
        let mut state = state_with(vec![], &[], &[]);
        state.boards[Player::Player1].spv = [5, 0, 5, 0];
        state.boards[Player::Player2].spv = [0, 5, 0, 5];

        evaluate(&mut state);

        assert!(state.game_over);
        assert_eq!(state.result, Some(GameResult::Tie));
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_exhaustion_waits_for_attack_cards() {
        let state = state_with(vec![], &[], &[Card::new(Category::Trojan, 3)]);
        assert_eq!(verdict(&state), None);
    }

    #[test]
    fn test_non_empty_deck_blocks_exhaustion() {
        let state = state_with(vec![Card::new(Category::Shield, 2)], &[], &[]);
        assert_eq!(verdict(&state), None);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut state = state_with(vec![], &[], &[]);
        state.boards[Player::Player2].spv = [0, 0, 0, 0];
        evaluate(&mut state);
        let first = state.clone();

        // A later change must not rewrite the recorded result.
        state.boards[Player::Player1].spv = [0, 0, 0, 0];
        evaluate(&mut state);

        assert_eq!(state.result, first.result);
        assert_eq!(state.result, Some(GameResult::Winner(Player::Player1)));
    }
}
