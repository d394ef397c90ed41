//! Opponent policies: how a computer-controlled player picks its move.
//!
//! - `GreedyOpponent`: fixed priority list, fully deterministic
//! - `UniformOpponent`: uniform over legal actions

use crate::cards::{Card, CardKind};
use crate::core::{Action, GameRng, GameState, Player, RulesConfig, Target, SLOT_COUNT};
use crate::rules::RulesEngine;

/// Policy for choosing the next action of the current player.
pub trait OpponentPolicy<E: RulesEngine> {
    /// Choose an action for the current player.
    ///
    /// Returns `None` if no legal actions exist.
    fn choose_action(&self, engine: &E, state: &GameState, rng: &mut GameRng) -> Option<Action>;
}

/// Greedy priority heuristic.
///
/// In order of preference:
/// 1. defence card into the first empty defence layer of a live slot
/// 2. utility card on the weakest damaged live slot of your own
/// 3. strongest attack card on the opponent's weakest live slot
/// 4. draw, if the hand has room and the deck has cards
/// 5. end the turn
///
/// Ties between slots go to the lowest index.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyOpponent;

impl GreedyOpponent {
    /// Pick the action for the current player of `state`.
    #[must_use]
    pub fn decide(&self, state: &GameState, config: &RulesConfig) -> Action {
        if state.game_over || state.moves_remaining == 0 {
            return Action::EndTurn;
        }

        let me = state.current_player;
        let hand = state.hand(me);

        self.defend(state, me, hand)
            .or_else(|| self.repair(state, me, hand, config))
            .or_else(|| self.strike(state, me, hand))
            .or_else(|| {
                (hand.len() < config.max_hand_size && !state.deck.is_empty()).then_some(Action::Draw)
            })
            .unwrap_or(Action::EndTurn)
    }

    fn defend(&self, state: &GameState, me: Player, hand: &[Card]) -> Option<Action> {
        let card = first_of_kind(hand, CardKind::Defence)?;
        let board = state.board(me);
        let slot = (0..SLOT_COUNT)
            .find(|&s| board.defence[s].card.is_none() && !board.is_destroyed(s))?;
        Some(Action::play(card, Some(Target::new(me, slot))))
    }

    fn repair(
        &self,
        state: &GameState,
        me: Player,
        hand: &[Card],
        config: &RulesConfig,
    ) -> Option<Action> {
        let card = first_of_kind(hand, CardKind::Utility)?;
        let spv = state.spv(me);
        let slot = weakest_slot(&spv, |v| v > 0 && v < config.max_spv)?;
        Some(Action::play(card, Some(Target::new(me, slot))))
    }

    fn strike(&self, state: &GameState, me: Player, hand: &[Card]) -> Option<Action> {
        // max_by_key keeps the last maximum; reverse so the first in hand order wins.
        let card = hand
            .iter()
            .rev()
            .filter(|c| c.is_attack())
            .max_by_key(|c| c.power())
            .copied()?;
        let foe = me.opponent();
        let slot = weakest_slot(&state.spv(foe), |v| v > 0)?;
        Some(Action::play(card, Some(Target::new(foe, slot))))
    }
}

fn first_of_kind(hand: &[Card], kind: CardKind) -> Option<Card> {
    hand.iter().find(|c| c.kind() == kind).copied()
}

/// Lowest-SPV slot among those passing `eligible`; lowest index on ties.
fn weakest_slot(spv: &[u8; SLOT_COUNT], eligible: impl Fn(u8) -> bool) -> Option<usize> {
    (0..SLOT_COUNT)
        .filter(|&s| eligible(spv[s]))
        .min_by_key(|&s| (spv[s], s))
}

impl<E: RulesEngine> OpponentPolicy<E> for GreedyOpponent {
    fn choose_action(&self, engine: &E, state: &GameState, _rng: &mut GameRng) -> Option<Action> {
        if state.game_over {
            return None;
        }
        Some(self.decide(state, engine.config()))
    }
}

/// Uniform random opponent policy.
///
/// Selects uniformly from legal actions.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformOpponent;

impl<E: RulesEngine> OpponentPolicy<E> for UniformOpponent {
    fn choose_action(&self, engine: &E, state: &GameState, rng: &mut GameRng) -> Option<Action> {
        let actions = engine.legal_actions(state);
        rng.choose(&actions).copied()
    }
}
