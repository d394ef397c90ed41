//! Card resolution - applying a played card to the game state.
//!
//! `play_card` is the single entry point for cards. It validates, takes
//! the card out of hand, spends the move and dispatches on the card kind.
//! The debug hooks (`damage_slot`, `heal_slot`, `return_card_to_hand`)
//! skip the card and move rules but still clamp health and run the win
//! evaluator.

use tracing::debug;

use crate::cards::{Card, CardKind};
use crate::core::{
    Action, ActionError, Board, DefenceLayer, GameState, Player, RulesConfig, Target, SLOT_COUNT,
};
use crate::rules::{turn, victory};

use super::targeting::validate_target;

/// How an attack split between a defence layer and the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Absorption {
    /// Damage soaked by the defence layer.
    pub absorbed: u8,
    /// Damage that reached the server's SPV.
    pub carried: u8,
    /// Defence card knocked out of the layer.
    pub destroyed: Option<Card>,
}

/// Run `damage` through a defence layer.
///
/// A live layer with health `h` soaks everything when `damage < h`;
/// otherwise it breaks and `damage - h` carries through.
#[must_use]
pub fn absorb(layer: &mut DefenceLayer, damage: u8) -> Absorption {
    if !layer.is_live() {
        return Absorption {
            absorbed: 0,
            carried: damage,
            destroyed: None,
        };
    }

    let health = layer.health;
    if damage >= health {
        Absorption {
            absorbed: health,
            carried: damage - health,
            destroyed: layer.take(),
        }
    } else {
        layer.health -= damage;
        Absorption {
            absorbed: damage,
            carried: 0,
            destroyed: None,
        }
    }
}

/// Subtract from a slot's SPV, flooring at zero.
fn apply_damage(board: &mut Board, slot: usize, amount: u32) {
    let spv = u32::from(board.spv[slot]).saturating_sub(amount);
    // spv never grows here, so it still fits in u8.
    board.spv[slot] = spv as u8;
}

/// Add to a slot's SPV, capping at `max_spv`. Returns the amount healed.
fn apply_heal(board: &mut Board, slot: usize, amount: u32, max_spv: u8) -> u8 {
    let current = board.spv[slot];
    let room = max_spv.saturating_sub(current);
    let healed = amount.min(u32::from(room)) as u8;
    board.spv[slot] = current + healed;
    debug_assert!(board.spv[slot] <= max_spv, "SPV above maximum");
    healed
}

/// Play `card` from the current player's hand.
///
/// ## Errors
///
/// Every rejection leaves `state` as it was. `CardNotInHand` is a caller
/// bug and trips a debug assertion before being returned.
pub fn play_card(
    state: &GameState,
    card: Card,
    target: Option<Target>,
    config: &RulesConfig,
) -> Result<GameState, ActionError> {
    turn::ensure_move_available(state)?;

    let actor = state.current_player;
    let in_hand = state.hand(actor).contains(&card);
    debug_assert!(in_hand, "{card} played but not in {actor}'s hand");
    if !in_hand {
        return Err(ActionError::CardNotInHand {
            player: actor,
            card,
        });
    }

    let target = validate_target(state, actor, card, target)?;

    let mut next = state.clone();
    next.remove_from_hand(actor, card);
    turn::spend_move(&mut next);

    match card.kind() {
        CardKind::Attack => resolve_attack(&mut next, card, target),
        CardKind::Defence => place_defence(&mut next, actor, card, target),
        CardKind::Utility => resolve_heal(&mut next, card, target, config),
    }

    next.scores[actor] += u32::from(card.power());
    next.record_action(actor, Action::play(card, Some(target)));

    turn::finish_move(&mut next, config);
    Ok(next)
}

fn resolve_attack(state: &mut GameState, card: Card, target: Target) {
    let board = &mut state.boards[target.player];
    let outcome = absorb(&mut board.defence[target.slot], card.power());
    apply_damage(board, target.slot, u32::from(outcome.carried));
    let spv = board.spv[target.slot];

    if let Some(broken) = outcome.destroyed {
        state.discard.push_back(broken);
    }
    state.discard.push_back(card);

    debug!(
        %card,
        %target,
        absorbed = outcome.absorbed,
        carried = outcome.carried,
        spv,
        "attack resolved"
    );
}

fn place_defence(state: &mut GameState, actor: Player, card: Card, target: Target) {
    let replaced = state.boards[target.player].defence[target.slot].take();
    if let Some(old) = replaced {
        state.add_to_hand(actor, old);
    }
    state.boards[target.player].defence[target.slot] = DefenceLayer::holding(card);

    debug!(%card, %target, replaced = ?replaced, "defence placed");
}

fn resolve_heal(state: &mut GameState, card: Card, target: Target, config: &RulesConfig) {
    let board = &mut state.boards[target.player];
    let healed = apply_heal(board, target.slot, u32::from(card.power()), config.max_spv);
    state.discard.push_back(card);

    debug!(%card, %target, healed, "utility resolved");
}

fn check_slot(state: &GameState, slot: usize) -> Result<(), ActionError> {
    if state.game_over {
        return Err(ActionError::GameOver);
    }
    if slot >= SLOT_COUNT {
        return Err(ActionError::InvalidSlot(slot));
    }
    Ok(())
}

/// Debug hook: damage a slot directly, ignoring defences, hands and moves.
pub fn damage_slot(
    state: &GameState,
    player: Player,
    slot: usize,
    amount: u32,
) -> Result<GameState, ActionError> {
    check_slot(state, slot)?;

    let mut next = state.clone();
    apply_damage(&mut next.boards[player], slot, amount);
    debug!(%player, slot, amount, spv = next.boards[player].spv[slot], "slot damaged");

    victory::evaluate(&mut next);
    Ok(next)
}

/// Debug hook: heal a live slot directly, ignoring hands and moves.
///
/// Destroyed slots stay destroyed.
pub fn heal_slot(
    state: &GameState,
    player: Player,
    slot: usize,
    amount: u32,
    config: &RulesConfig,
) -> Result<GameState, ActionError> {
    check_slot(state, slot)?;
    if state.board(player).is_destroyed(slot) {
        return Err(ActionError::SlotDestroyed(Target::new(player, slot)));
    }

    let mut next = state.clone();
    let healed = apply_heal(&mut next.boards[player], slot, amount, config.max_spv);
    debug!(%player, slot, healed, "slot healed");

    victory::evaluate(&mut next);
    Ok(next)
}

/// Put a card back into a player's hand, respecting the hand cap.
pub fn return_card_to_hand(
    state: &GameState,
    player: Player,
    card: Card,
    config: &RulesConfig,
) -> Result<GameState, ActionError> {
    if state.game_over {
        return Err(ActionError::GameOver);
    }
    if state.hand(player).len() >= config.max_hand_size {
        return Err(ActionError::HandFull);
    }

    let mut next = state.clone();
    next.add_to_hand(player, card);
    debug!(%player, %card, "card returned to hand");

    victory::evaluate(&mut next);
    Ok(next)
}
