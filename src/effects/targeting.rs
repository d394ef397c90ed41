//! Target legality for played cards.
//!
//! The UI validates drops too, but the core never trusts it:
//!
//! | Kind    | Side        | Destroyed slot |
//! |---------|-------------|----------------|
//! | Attack  | opponent    | allowed        |
//! | Defence | own         | rejected       |
//! | Utility | own         | rejected       |

use crate::cards::{Card, CardKind};
use crate::core::{ActionError, GameState, Player, Target, SLOT_COUNT};

/// Which side of the board a card kind may target.
#[must_use]
pub fn target_side(kind: CardKind, actor: Player) -> Player {
    match kind {
        CardKind::Attack => actor.opponent(),
        CardKind::Defence | CardKind::Utility => actor,
    }
}

/// Validate the target of `card` played by `actor`.
///
/// Returns the target on success.
pub fn validate_target(
    state: &GameState,
    actor: Player,
    card: Card,
    target: Option<Target>,
) -> Result<Target, ActionError> {
    let target = target.ok_or(ActionError::MissingTarget(card))?;

    if target.slot >= SLOT_COUNT {
        return Err(ActionError::InvalidSlot(target.slot));
    }
    if target.player != target_side(card.kind(), actor) {
        return Err(ActionError::IllegalTarget { card, target });
    }
    if !card.is_attack() && state.board(target.player).is_destroyed(target.slot) {
        return Err(ActionError::SlotDestroyed(target));
    }

    Ok(target)
}

/// Every slot `card` may legally target when played by `actor`.
#[must_use]
pub fn legal_targets(state: &GameState, actor: Player, card: Card) -> Vec<Target> {
    let side = target_side(card.kind(), actor);
    (0..SLOT_COUNT)
        .map(|slot| Target::new(side, slot))
        .filter(|&t| validate_target(state, actor, card, Some(t)).is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Category;
    use crate::core::{PlayerMap, RulesConfig};
    use im::Vector;

    fn fresh() -> GameState {
        GameState::new(&RulesConfig::default(), Vector::new(), PlayerMap::with_default())
    }

    const ATTACK: Card = Card::new(Category::Ddos, 3);
    const DEFENCE: Card = Card::new(Category::Firewall, 3);
    const UTILITY: Card = Card::new(Category::Patch, 2);

    #[test]
    fn test_attack_only_opponent() {
        let state = fresh();
        let actor = Player::Player1;

        assert!(validate_target(&state, actor, ATTACK, Some(Target::new(Player::Player2, 0))).is_ok());
        assert_eq!(
            validate_target(&state, actor, ATTACK, Some(Target::new(Player::Player1, 0))),
            Err(ActionError::IllegalTarget {
                card: ATTACK,
                target: Target::new(Player::Player1, 0)
            })
        );
    }

    #[test]
    fn test_heal_and_defence_only_self() {
        let state = fresh();
        let actor = Player::Player2;

        for card in [DEFENCE, UTILITY] {
            assert!(validate_target(&state, actor, card, Some(Target::new(Player::Player2, 3))).is_ok());
            assert!(matches!(
                validate_target(&state, actor, card, Some(Target::new(Player::Player1, 3))),
                Err(ActionError::IllegalTarget { .. })
            ));
        }
    }

    #[test]
    fn test_missing_and_out_of_range() {
        let state = fresh();

        assert_eq!(
            validate_target(&state, Player::Player1, ATTACK, None),
            Err(ActionError::MissingTarget(ATTACK))
        );
        assert_eq!(
            validate_target(&state, Player::Player1, ATTACK, Some(Target::new(Player::Player2, 4))),
            Err(ActionError::InvalidSlot(4))
        );
    }

    #[test]
    fn test_destroyed_slot_rules() {
        let mut state = fresh();
        state.boards[Player::Player1].spv[2] = 0;
        state.boards[Player::Player2].spv[2] = 0;
        let own = Target::new(Player::Player1, 2);

        assert_eq!(
            validate_target(&state, Player::Player1, UTILITY, Some(own)),
            Err(ActionError::SlotDestroyed(own))
        );
        assert_eq!(
            validate_target(&state, Player::Player1, DEFENCE, Some(own)),
            Err(ActionError::SlotDestroyed(own))
        );
        assert!(validate_target(&state, Player::Player1, ATTACK, Some(Target::new(Player::Player2, 2))).is_ok());
    }

    #[test]
    fn test_legal_targets() {
        let mut state = fresh();
        state.boards[Player::Player1].spv[0] = 0;

        let heal = legal_targets(&state, Player::Player1, UTILITY);
        assert_eq!(
            heal,
            vec![
                Target::new(Player::Player1, 1),
                Target::new(Player::Player1, 2),
                Target::new(Player::Player1, 3),
            ]
        );

        let attack = legal_targets(&state, Player::Player1, ATTACK);
        assert_eq!(attack.len(), 4);
        assert!(attack.iter().all(|t| t.player == Player::Player2));
    }
}
