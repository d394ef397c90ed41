//! Turn and move budget control.
//!
//! State machine over `(current_player, moves_remaining)`:
//! - a turn starts with the full budget
//! - drawing or playing spends one move
//! - when the budget hits zero (or the player ends the turn) the turn
//!   passes to the opponent with a fresh budget

use tracing::debug;

use crate::core::{Action, ActionError, GameState, Player, RulesConfig};

use super::victory;

/// Check that the current player may spend a move.
pub fn ensure_move_available(state: &GameState) -> Result<(), ActionError> {
    if state.game_over {
        return Err(ActionError::GameOver);
    }
    if state.moves_remaining == 0 {
        return Err(ActionError::NoMovesRemaining);
    }
    Ok(())
}

/// Consume one move.
pub fn spend_move(state: &mut GameState) {
    debug_assert!(state.moves_remaining > 0, "spent a move with an empty budget");
    state.moves_remaining = state.moves_remaining.saturating_sub(1);
}

/// Pass the turn: swap players, bump the turn counter, refill moves.
pub fn rollover(state: &mut GameState, config: &RulesConfig) {
    state.current_player = state.current_player.opponent();
    state.turn += 1;
    state.moves_remaining = config.moves_per_turn;
    state.action_sequence = 0;
    debug!(turn = state.turn, player = %state.current_player, "turn passed");
}

/// Close out an accepted move-spending action.
///
/// Runs the win evaluator, then rolls the turn over if that action used
/// the last move and the game goes on.
pub fn finish_move(state: &mut GameState, config: &RulesConfig) {
    victory::evaluate(state);
    if state.moves_remaining == 0 && !state.game_over {
        rollover(state, config);
    }
}

/// Check whether `player` may draw right now.
pub fn check_draw(state: &GameState, player: Player, config: &RulesConfig) -> Result<(), ActionError> {
    if state.game_over {
        return Err(ActionError::GameOver);
    }
    if !state.is_turn_of(player) {
        return Err(ActionError::NotYourTurn(player));
    }
    ensure_move_available(state)?;
    if state.deck.is_empty() {
        return Err(ActionError::DeckEmpty);
    }
    if state.hand(player).len() >= config.max_hand_size {
        return Err(ActionError::HandFull);
    }
    Ok(())
}

/// Move the top card of the deck to the back of `player`'s hand.
pub fn draw_card(
    state: &GameState,
    player: Player,
    config: &RulesConfig,
) -> Result<GameState, ActionError> {
    check_draw(state, player, config)?;

    let mut next = state.clone();
    let card = next.deck.pop_front().ok_or(ActionError::DeckEmpty)?;
    next.add_to_hand(player, card);
    spend_move(&mut next);
    next.record_action(player, Action::Draw);
    debug!(%player, %card, deck = next.deck.len(), "drew card");

    finish_move(&mut next, config);
    Ok(next)
}

/// End the current turn voluntarily.
///
/// There is no phase lock: ending twice in a row advances twice.
pub fn end_turn(state: &GameState, config: &RulesConfig) -> Result<GameState, ActionError> {
    if state.game_over {
        return Err(ActionError::GameOver);
    }

    let mut next = state.clone();
    let player = next.current_player;
    next.record_action(player, Action::EndTurn);
    rollover(&mut next, config);
    victory::evaluate(&mut next);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Category};
    use crate::core::{Hand, PlayerMap};
    use im::Vector;

    fn config() -> RulesConfig {
        RulesConfig::default()
    }

    fn state_with_deck(n: usize) -> GameState {
        let deck: Vector<Card> = (0..n).map(|_| Card::new(Category::Backup, 3)).collect();
        GameState::new(&config(), deck, PlayerMap::with_default())
    }

    #[test]
    fn test_draw_moves_front_card_to_hand_back() {
        let mut state = state_with_deck(0);
        state.deck = vec![Card::new(Category::Malware, 2), Card::new(Category::Vpn, 3)].into();
        state.hands[Player::Player1].push(Card::new(Category::Patch, 2));

        let next = draw_card(&state, Player::Player1, &config()).unwrap();

        assert_eq!(
            next.hand(Player::Player1),
            &[Card::new(Category::Patch, 2), Card::new(Category::Malware, 2)]
        );
        assert_eq!(next.deck_len(), 1);
        assert_eq!(next.moves_remaining, 2);
        assert_eq!(next.history.len(), 1);
    }

    #[test]
    fn test_draw_wrong_turn_rejected() {
        let state = state_with_deck(5);
        assert_eq!(
            draw_card(&state, Player::Player2, &config()),
            Err(ActionError::NotYourTurn(Player::Player2))
        );
    }

    #[test]
    fn test_draw_empty_deck_rejected() {
        let mut state = state_with_deck(0);
        // Keep an attack in hand so the empty deck alone doesn't end the game.
        state.hands[Player::Player2].push(Card::new(Category::Botnet, 5));

        assert_eq!(
            draw_card(&state, Player::Player1, &config()),
            Err(ActionError::DeckEmpty)
        );
    }

    #[test]
    fn test_draw_full_hand_rejected() {
        let mut state = state_with_deck(5);
        let full: Hand = (0..7).map(|_| Card::new(Category::Scanner, 1)).collect();
        state.hands[Player::Player1] = full;

        assert_eq!(
            draw_card(&state, Player::Player1, &config()),
            Err(ActionError::HandFull)
        );
    }

    #[test]
    fn test_draw_without_moves_rejected() {
        let mut state = state_with_deck(5);
        state.moves_remaining = 0;

        assert_eq!(
            draw_card(&state, Player::Player1, &config()),
            Err(ActionError::NoMovesRemaining)
        );
    }

    #[test]
    fn test_third_draw_rolls_turn_over_once() {
        let mut state = state_with_deck(10);
        for _ in 0..3 {
            state = draw_card(&state, Player::Player1, &config()).unwrap();
        }

        assert_eq!(state.current_player, Player::Player2);
        assert_eq!(state.turn, 2);
        assert_eq!(state.moves_remaining, 3);
        assert_eq!(state.hand(Player::Player1).len(), 3);
    }

    #[test]
    fn test_end_turn_alternates_and_repeats() {
        let state = state_with_deck(3);

        let once = end_turn(&state, &config()).unwrap();
        assert_eq!(once.current_player, Player::Player2);
        assert_eq!(once.turn, 2);
        assert_eq!(once.moves_remaining, 3);

        let twice = end_turn(&once, &config()).unwrap();
        assert_eq!(twice.current_player, Player::Player1);
        assert_eq!(twice.turn, 3);
    }

    #[test]
    fn test_end_turn_resets_partial_budget() {
        let state = state_with_deck(3);
        let drawn = draw_card(&state, Player::Player1, &config()).unwrap();
        assert_eq!(drawn.moves_remaining, 2);

        let passed = end_turn(&drawn, &config()).unwrap();
        assert_eq!(passed.moves_remaining, 3);
    }

    #[test]
    fn test_end_turn_after_game_over_rejected() {
        let mut state = state_with_deck(3);
        state.game_over = true;

        assert_eq!(end_turn(&state, &config()), Err(ActionError::GameOver));
        assert_eq!(
            draw_card(&state, Player::Player1, &config()),
            Err(ActionError::GameOver)
        );
    }

    #[test]
    fn test_drawing_last_card_can_end_game() {
        let mut state = state_with_deck(1);
        state.boards[Player::Player2].spv = [1, 1, 1, 1];

        let next = draw_card(&state, Player::Player1, &config()).unwrap();

        assert!(next.game_over);
        assert_eq!(next.winner(), Some(Player::Player1));
        // No rollover once the game is over.
        assert_eq!(next.current_player, Player::Player1);
    }
}
