//! Server-defence game implementation.

use rustc_hash::FxHashSet;
use tracing::info;

use crate::cards::{Card, Catalog};
use crate::core::{
    Action, ActionError, ConfigError, GameRng, GameState, Player, PlayerMap, RulesConfig, Target,
};
use crate::deck;
use crate::effects::{self, legal_targets};
use crate::rules::{turn, victory, GameResult, RulesEngine};

/// The two-player server-defence game.
#[derive(Clone, Debug)]
pub struct ServerGame {
    config: RulesConfig,
    catalog: Catalog,
}

/// Builder for creating a ServerGame.
#[derive(Clone, Debug, Default)]
pub struct ServerGameBuilder {
    config: RulesConfig,
    catalog: Option<Catalog>,
}

impl ServerGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the standard catalog.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Validate the configuration and build the game.
    pub fn build(self) -> Result<ServerGame, ConfigError> {
        self.config.validate()?;
        Ok(ServerGame {
            config: self.config,
            catalog: self.catalog.unwrap_or_else(Catalog::standard),
        })
    }
}

impl ServerGame {
    /// The standard game with default rules.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            config: RulesConfig::default(),
            catalog: Catalog::standard(),
        }
    }

    /// Get the card catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Shuffle a fresh deck, deal both hands, and set up the opening state.
    pub fn new_game(&self, rng: &mut GameRng) -> GameState {
        let full = deck::fresh_deck(&self.catalog, self.config.copies_per_card, rng);
        let (first, second, remaining) = deck::deal_initial(&full, self.config.initial_hand_size);
        let hands = PlayerMap::new(|p| match p {
            Player::Player1 => first.clone(),
            Player::Player2 => second.clone(),
        });

        let mut state = GameState::new(&self.config, remaining, hands);
        // A degenerate catalog can be over before the first move.
        victory::evaluate(&mut state);

        info!(seed = rng.seed(), deck = state.deck_len(), "new game");
        state
    }

    /// Draw for `player`; see [`turn::draw_card`].
    pub fn draw_card(&self, state: &GameState, player: Player) -> Result<GameState, ActionError> {
        turn::draw_card(state, player, &self.config)
    }

    /// Play a card for the current player; see [`effects::play_card`].
    pub fn play_card(
        &self,
        state: &GameState,
        card: Card,
        target: Option<Target>,
    ) -> Result<GameState, ActionError> {
        effects::play_card(state, card, target, &self.config)
    }

    /// End the current player's turn.
    pub fn end_turn(&self, state: &GameState) -> Result<GameState, ActionError> {
        turn::end_turn(state, &self.config)
    }
}

impl RulesEngine for ServerGame {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        if state.game_over {
            return vec![];
        }

        let player = state.current_player;
        let mut actions = Vec::new();

        if state.moves_remaining > 0 {
            if turn::check_draw(state, player, &self.config).is_ok() {
                actions.push(Action::Draw);
            }

            // Identical cards are interchangeable; offer each once.
            let mut seen = FxHashSet::default();
            for &card in state.hand(player) {
                if !seen.insert(card) {
                    continue;
                }
                for target in legal_targets(state, player, card) {
                    actions.push(Action::play(card, Some(target)));
                }
            }
        }

        actions.push(Action::EndTurn);
        actions
    }

    fn apply_action(&self, state: &GameState, action: &Action) -> Result<GameState, ActionError> {
        match *action {
            Action::Draw => self.draw_card(state, state.current_player),
            Action::Play { card, target } => self.play_card(state, card, target),
            Action::EndTurn => self.end_turn(state),
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if state.game_over {
            state.result
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;

    #[test]
    fn test_new_game_deals_and_conserves_cards() {
        let game = ServerGame::standard();
        let state = game.new_game(&mut GameRng::new(42));

        assert_eq!(state.hand(Player::Player1).len(), 3);
        assert_eq!(state.hand(Player::Player2).len(), 3);
        assert_eq!(state.deck_len(), 50 - 6);
        assert_eq!(state.current_player, Player::Player1);
        assert_eq!(state.moves_remaining, 3);
        assert_eq!(state.turn, 1);
        assert!(!state.game_over);

        let mut all = state.all_cards();
        let mut expected = deck::build_catalog(game.catalog(), 2);
        all.sort();
        expected.sort();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_builder_validates() {
        let bad = RulesConfig::new().with_moves_per_turn(0);
        assert_eq!(
            ServerGameBuilder::new().config(bad).build().unwrap_err(),
            ConfigError::ZeroMoves
        );

        let game = ServerGameBuilder::new()
            .config(RulesConfig::new().with_initial_hand_size(5))
            .build()
            .unwrap();
        let state = game.new_game(&mut GameRng::new(1));
        assert_eq!(state.hand(Player::Player1).len(), 5);
    }

    #[test]
    fn test_legal_actions_are_all_legal() {
        let game = ServerGame::standard();
        let state = game.new_game(&mut GameRng::new(7));

        let actions = game.legal_actions(&state);
        assert!(actions.contains(&Action::Draw));
        assert!(actions.contains(&Action::EndTurn));
        for action in &actions {
            assert!(game.is_legal(&state, action), "{action:?} rejected");
        }
    }

    #[test]
    fn test_card_not_in_hand_is_not_legal() {
        let game = ServerGame::standard();
        let state = game.new_game(&mut GameRng::new(1));
        let hand = state.hand(Player::Player1);
        let absent = *game.catalog().iter().find(|c| !hand.contains(c)).unwrap();

        assert!(!game.is_legal(&state, &Action::play(absent, None)));
        assert!(!game.is_legal(
            &state,
            &Action::play(absent, Some(Target::new(Player::Player1, 0)))
        ));
    }

    #[test]
    fn test_legal_attack_targets_only_opponent() {
        let game = ServerGame::standard();
        let state = game.new_game(&mut GameRng::new(3));

        for action in game.legal_actions(&state) {
            if let Action::Play {
                card,
                target: Some(Target { player, .. }),
            } = action
            {
                match card.kind() {
                    CardKind::Attack => assert_eq!(player, Player::Player2),
                    _ => assert_eq!(player, Player::Player1),
                }
            }
        }
    }

    #[test]
    fn test_finished_game_has_no_actions() {
        let game = ServerGame::standard();
        let mut state = game.new_game(&mut GameRng::new(3));
        state.boards[Player::Player2].spv = [0, 0, 0, 0];
        victory::evaluate(&mut state);

        assert!(game.legal_actions(&state).is_empty());
        assert_eq!(
            game.is_terminal(&state),
            Some(GameResult::Winner(Player::Player1))
        );
        assert_eq!(game.apply_action(&state, &Action::EndTurn), Err(ActionError::GameOver));
    }

    #[test]
    fn test_apply_action_dispatch() {
        let game = ServerGame::standard();
        let state = game.new_game(&mut GameRng::new(11));

        let drawn = game.apply_action(&state, &Action::Draw).unwrap();
        assert_eq!(drawn.hand(Player::Player1).len(), 4);

        let passed = game.apply_action(&drawn, &Action::EndTurn).unwrap();
        assert_eq!(passed.current_player, Player::Player2);
    }
}
