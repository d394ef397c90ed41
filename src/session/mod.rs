//! Game session: the command/query surface the UI talks to.
//!
//! The session owns the only mutable reference to the game. Every
//! command applies a pure rule function to the current snapshot and
//! either swaps in the new snapshot or, when the rules reject the
//! command, keeps the old one and remembers why. Every command returns
//! the current snapshot.
//!
//! ## Example
//!
//! ```
//! use netwar_ccg::core::{Player, RulesConfig};
//! use netwar_ccg::session::GameSession;
//!
//! let mut session = GameSession::new(RulesConfig::default(), 42).unwrap();
//!
//! // Player 2 may not draw on player 1's turn: nothing changes.
//! let before = session.state().clone();
//! session.draw_card(Player::Player2);
//! assert_eq!(session.state(), &before);
//! assert!(session.last_rejection().is_some());
//!
//! session.draw_card(Player::Player1);
//! assert_eq!(session.state().moves_remaining, 2);
//! ```

pub mod log;

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::cards::Card;
use crate::core::{
    Action, ActionError, ConfigError, GameRng, GameRngState, GameState, Player, PlayerMap,
    RulesConfig, Target,
};
use crate::effects;
use crate::games::netwar::{ServerGame, ServerGameBuilder};
use crate::policy::{GreedyOpponent, OpponentPacer, OpponentPolicy};
use crate::rules::RulesEngine;

pub use log::{ActionLog, LOG_CAPACITY};

/// Who drives a seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Controller {
    #[default]
    Human,
    Computer,
}

/// A running game plus everything the UI needs around it.
pub struct GameSession {
    game: ServerGame,
    state: GameState,
    rng: GameRng,
    log: ActionLog,
    last_rejection: Option<ActionError>,
    controllers: PlayerMap<Controller>,
    policy: Box<dyn OpponentPolicy<ServerGame>>,
    pacer: OpponentPacer,
}

impl GameSession {
    /// Validate `config`, shuffle, deal and start a game.
    pub fn new(config: RulesConfig, seed: u64) -> Result<Self, ConfigError> {
        let game = ServerGameBuilder::new().config(config).build()?;
        Ok(Self::with_game(game, seed))
    }

    /// Start a session around an already built game.
    #[must_use]
    pub fn with_game(game: ServerGame, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let state = game.new_game(&mut rng);
        let delay = Duration::from_millis(game.config().opponent_delay_ms);

        let mut log = ActionLog::new();
        log.push("New game started!");

        Self {
            game,
            state,
            rng,
            log,
            last_rejection: None,
            controllers: PlayerMap::with_default(),
            policy: Box::new(GreedyOpponent),
            pacer: OpponentPacer::new(delay),
        }
    }

    /// Hand `player`'s seat to the computer.
    pub fn set_controller(&mut self, player: Player, controller: Controller) {
        self.controllers[player] = controller;
    }

    /// Replace the policy used for computer-controlled seats.
    pub fn set_policy(&mut self, policy: Box<dyn OpponentPolicy<ServerGame>>) {
        self.policy = policy;
    }

    // === Queries ===

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn game(&self) -> &ServerGame {
        &self.game
    }

    #[must_use]
    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    /// Why the most recent command was rejected, if it was.
    #[must_use]
    pub fn last_rejection(&self) -> Option<&ActionError> {
        self.last_rejection.as_ref()
    }

    #[must_use]
    pub fn controller(&self, player: Player) -> Controller {
        self.controllers[player]
    }

    /// RNG position, for reproducing the next reset.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Commands ===

    /// Throw the current game away and deal a new one.
    ///
    /// The RNG carries on from where it was, so each reset deals
    /// differently while the session as a whole stays reproducible.
    pub fn reset(&mut self) -> &GameState {
        self.state = self.game.new_game(&mut self.rng);
        self.last_rejection = None;
        self.pacer.cancel();
        self.log.clear();
        self.log.push("New game started!");
        info!("game reset");
        &self.state
    }

    pub fn draw_card(&mut self, player: Player) -> &GameState {
        let result = self.game.draw_card(&self.state, player);
        self.commit(player, Action::Draw, result)
    }

    pub fn play_card(&mut self, card: Card, target: Option<Target>) -> &GameState {
        let actor = self.state.current_player;
        let result = self.game.play_card(&self.state, card, target);
        self.commit(actor, Action::play(card, target), result)
    }

    pub fn end_turn(&mut self) -> &GameState {
        let actor = self.state.current_player;
        let result = self.game.end_turn(&self.state);
        self.commit(actor, Action::EndTurn, result)
    }

    /// Apply any action as the current player.
    pub fn apply(&mut self, action: Action) -> &GameState {
        let actor = self.state.current_player;
        let result = self.game.apply_action(&self.state, &action);
        self.commit(actor, action, result)
    }

    /// Debug hook: damage a slot directly.
    pub fn damage_slot(&mut self, player: Player, slot: usize, amount: u32) -> &GameState {
        let result = effects::damage_slot(&self.state, player, slot, amount);
        self.commit_hook(format!("{player} server {} takes {amount} damage", slot + 1), result)
    }

    /// Debug hook: heal a live slot directly.
    pub fn heal_slot(&mut self, player: Player, slot: usize, amount: u32) -> &GameState {
        let result = effects::heal_slot(&self.state, player, slot, amount, self.game.config());
        self.commit_hook(format!("{player} server {} heals {amount}", slot + 1), result)
    }

    /// Put a card into a player's hand.
    pub fn return_card_to_hand(&mut self, player: Player, card: Card) -> &GameState {
        let result = effects::return_card_to_hand(&self.state, player, card, self.game.config());
        self.commit_hook(format!("{card} returns to {player}'s hand"), result)
    }

    // === Automated seats ===

    /// Whether the seat to move is computer-controlled and may act.
    #[must_use]
    pub fn computer_to_move(&self) -> bool {
        !self.state.game_over && self.controllers[self.state.current_player] == Controller::Computer
    }

    /// Advance the pacing clock.
    ///
    /// When a computer seat is to move, the first tick starts the delay
    /// and the first tick after it elapses plays one action. Returns
    /// whether an action was taken.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.computer_to_move() {
            self.pacer.cancel();
            return false;
        }

        self.pacer.schedule(now);
        if !self.pacer.is_due(now) {
            return false;
        }
        self.pacer.cancel();
        self.step_computer()
    }

    /// Play one computer action right away, ignoring the delay.
    pub fn step_computer(&mut self) -> bool {
        if !self.computer_to_move() {
            return false;
        }
        let Some(action) = self.policy.choose_action(&self.game, &self.state, &mut self.rng) else {
            return false;
        };
        self.apply(action);
        self.last_rejection.is_none()
    }

    /// Let the computer play out its whole turn with no delay.
    ///
    /// Returns the number of actions taken.
    pub fn run_opponent_turn(&mut self) -> usize {
        let seat = self.state.current_player;
        let turn = self.state.turn;
        let mut taken = 0;

        while self.computer_to_move()
            && self.state.current_player == seat
            && self.state.turn == turn
        {
            if !self.step_computer() {
                // A policy that proposes an illegal move would loop forever.
                self.end_turn();
                taken += 1;
                break;
            }
            taken += 1;
        }
        taken
    }

    // === Internals ===

    fn commit(
        &mut self,
        actor: Player,
        action: Action,
        result: Result<GameState, ActionError>,
    ) -> &GameState {
        match result {
            Ok(next) => {
                let line = log::describe(actor, &action, &self.state, &next);
                self.accept(line, next);
            }
            Err(err) => self.reject(actor, err),
        }
        &self.state
    }

    fn commit_hook(&mut self, line: String, result: Result<GameState, ActionError>) -> &GameState {
        let actor = self.state.current_player;
        match result {
            Ok(next) => self.accept(line, next),
            Err(err) => self.reject(actor, err),
        }
        &self.state
    }

    fn accept(&mut self, line: String, next: GameState) {
        let was_over = self.state.game_over;
        self.log.push(line);
        self.state = next;
        self.last_rejection = None;

        if !was_over && self.state.game_over {
            if let Some(result) = self.state.result {
                self.log.push(result.to_string());
            }
        }
    }

    fn reject(&mut self, actor: Player, err: ActionError) {
        warn!(player = %actor, reason = %err, "action rejected");
        self.last_rejection = Some(err);
    }
}
