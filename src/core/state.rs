//! Game state: the single aggregate every rule reads and rewrites.
//!
//! ## GameState
//!
//! - Turn progression: current player, turn number, move budget
//! - Per-player boards: server health (SPV) and defence layers
//! - Hands, deck and discard pile
//! - Scores, result and action history
//!
//! The state is a value. Rules take `&GameState` and hand back a new
//! one, so every snapshot the UI holds stays valid. Deck, discard and
//! history use `im` persistent vectors and hands are inline `SmallVec`s,
//! which keeps those clones cheap.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::ActionRecord;
use super::config::{RulesConfig, SLOT_COUNT};
use super::player::{Player, PlayerMap};
use crate::cards::Card;
use crate::rules::GameResult;

/// A player's hand. Inline storage covers the standard 7-card cap.
pub type Hand = SmallVec<[Card; 7]>;

/// Defence layer of one server slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenceLayer {
    /// The defence card occupying the layer.
    pub card: Option<Card>,
    /// Remaining absorption. Starts at the card's power.
    pub health: u8,
}

impl DefenceLayer {
    /// A freshly placed defence card.
    #[must_use]
    pub fn holding(card: Card) -> Self {
        Self {
            card: Some(card),
            health: card.power(),
        }
    }

    /// Whether the layer still absorbs damage.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.card.is_some() && self.health > 0
    }

    /// Empty the layer, returning the card that was in it.
    pub fn take(&mut self) -> Option<Card> {
        self.health = 0;
        self.card.take()
    }
}

/// One player's four server slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Server Protection Value per slot.
    pub spv: [u8; SLOT_COUNT],
    /// Defence layer per slot.
    pub defence: [DefenceLayer; SLOT_COUNT],
}

impl Board {
    /// A board with every slot at full health and no defences.
    #[must_use]
    pub fn new(max_spv: u8) -> Self {
        Self {
            spv: [max_spv; SLOT_COUNT],
            defence: [DefenceLayer::default(); SLOT_COUNT],
        }
    }

    /// Whether a slot has been reduced to zero.
    ///
    /// Slots past the end of the board are never destroyed.
    #[must_use]
    pub fn is_destroyed(&self, slot: usize) -> bool {
        self.spv.get(slot).is_some_and(|&v| v == 0)
    }

    /// Whether every slot has been reduced to zero.
    #[must_use]
    pub fn all_destroyed(&self) -> bool {
        self.spv.iter().all(|&v| v == 0)
    }

    /// Sum of all slot health.
    #[must_use]
    pub fn spv_total(&self) -> u32 {
        self.spv.iter().map(|&v| u32::from(v)).sum()
    }

    /// Cards sitting in defence layers.
    pub fn defence_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.defence.iter().filter_map(|layer| layer.card)
    }
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Game Progression ===
    /// Player whose turn it is.
    pub current_player: Player,

    /// Turn number (starts at 1).
    pub turn: u32,

    /// Moves left in the current turn.
    pub moves_remaining: u8,

    /// Action sequence within turn.
    pub action_sequence: u32,

    // === Board ===
    pub boards: PlayerMap<Board>,

    // === Cards ===
    pub hands: PlayerMap<Hand>,

    /// Draw pile; the front is the top.
    pub deck: Vector<Card>,

    /// Spent attack/utility cards and destroyed defences.
    pub discard: Vector<Card>,

    // === Scoring & Result ===
    /// Cosmetic score: total power of cards played.
    pub scores: PlayerMap<u32>,

    pub game_over: bool,

    /// `None` while the game runs.
    pub result: Option<GameResult>,

    /// Every accepted action, in order.
    pub history: Vector<ActionRecord>,
}

impl GameState {
    /// Create the opening state from an already dealt deck and hands.
    ///
    /// ## Defaults
    ///
    /// - `current_player`: Player 1
    /// - `turn`: 1
    /// - `moves_remaining`: the configured budget
    /// - every slot at `max_spv`, no defences
    #[must_use]
    pub fn new(config: &RulesConfig, deck: Vector<Card>, hands: PlayerMap<Hand>) -> Self {
        Self {
            current_player: Player::Player1,
            turn: 1,
            moves_remaining: config.moves_per_turn,
            action_sequence: 0,
            boards: PlayerMap::new(|_| Board::new(config.max_spv)),
            hands,
            deck,
            discard: Vector::new(),
            scores: PlayerMap::with_value(0),
            game_over: false,
            result: None,
            history: Vector::new(),
        }
    }

    /// Get a player's hand.
    #[must_use]
    pub fn hand(&self, player: Player) -> &[Card] {
        &self.hands[player]
    }

    /// Get a player's board.
    #[must_use]
    pub fn board(&self, player: Player) -> &Board {
        &self.boards[player]
    }

    /// Server health of one player's slots.
    #[must_use]
    pub fn spv(&self, player: Player) -> [u8; SLOT_COUNT] {
        self.boards[player].spv
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Whether it is `player`'s turn.
    #[must_use]
    pub fn is_turn_of(&self, player: Player) -> bool {
        self.current_player == player
    }

    /// The winning player, if the game ended with one.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.result {
            Some(GameResult::Winner(p)) => Some(p),
            _ => None,
        }
    }

    /// Whether either hand holds an attack card.
    #[must_use]
    pub fn any_attack_in_hands(&self) -> bool {
        Player::all().any(|p| self.hands[p].iter().any(Card::is_attack))
    }

    // === Hands ===

    /// Add a card to the back of a player's hand.
    pub fn add_to_hand(&mut self, player: Player, card: Card) {
        self.hands[player].push(card);
    }

    /// Remove the first card in hand order equal to `card`.
    ///
    /// Returns true if the card was found and removed.
    pub fn remove_from_hand(&mut self, player: Player, card: Card) -> bool {
        let hand = &mut self.hands[player];
        if let Some(pos) = hand.iter().position(|c| *c == card) {
            hand.remove(pos);
            true
        } else {
            false
        }
    }

    // === Action History ===

    /// Record an accepted action in history.
    pub fn record_action(&mut self, player: Player, action: crate::core::Action) {
        let sequence = self.next_sequence();
        self.history
            .push_back(ActionRecord::new(player, action, self.turn, sequence));
    }

    /// Get the next action sequence number and increment.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.action_sequence;
        self.action_sequence += 1;
        seq
    }

    // === Card Accounting ===

    /// Every card currently in the game, wherever it sits.
    ///
    /// Cards move between zones but are never created or destroyed, so
    /// this multiset is constant over a game.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.deck.iter().copied().collect();
        cards.extend(self.discard.iter().copied());
        for player in Player::all() {
            cards.extend(self.hands[player].iter().copied());
            cards.extend(self.boards[player].defence_cards());
        }
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Category;
    use crate::core::Action;

    fn hand(cards: &[Card]) -> Hand {
        cards.iter().copied().collect()
    }

    fn sample_state() -> GameState {
        let deck: Vector<Card> = vec![
            Card::new(Category::Patch, 2),
            Card::new(Category::Trojan, 3),
        ]
        .into();
        let hands = PlayerMap::new(|p| match p {
            Player::Player1 => hand(&[Card::new(Category::Firewall, 3)]),
            Player::Player2 => hand(&[Card::new(Category::Malware, 2)]),
        });
        GameState::new(&RulesConfig::default(), deck, hands)
    }

    #[test]
    fn test_new_state_defaults() {
        let state = sample_state();

        assert_eq!(state.current_player, Player::Player1);
        assert_eq!(state.turn, 1);
        assert_eq!(state.moves_remaining, 3);
        assert_eq!(state.spv(Player::Player1), [5, 5, 5, 5]);
        assert_eq!(state.spv(Player::Player2), [5, 5, 5, 5]);
        assert!(!state.game_over);
        assert_eq!(state.result, None);
        assert_eq!(state.deck_len(), 2);
    }

    #[test]
    fn test_remove_from_hand_first_match() {
        let mut state = sample_state();
        let patch = Card::new(Category::Patch, 2);
        let vpn = Card::new(Category::Vpn, 3);
        state.hands[Player::Player1] = hand(&[patch, vpn, patch]);

        assert!(state.remove_from_hand(Player::Player1, patch));
        assert_eq!(state.hand(Player::Player1), &[vpn, patch]);

        assert!(!state.remove_from_hand(Player::Player1, Card::new(Category::Patch, 1)));
        assert_eq!(state.hand(Player::Player1).len(), 2);
    }

    #[test]
    fn test_defence_layer_lifecycle() {
        let mut layer = DefenceLayer::holding(Card::new(Category::Sandbox, 5));
        assert!(layer.is_live());
        assert_eq!(layer.health, 5);

        let taken = layer.take();
        assert_eq!(taken, Some(Card::new(Category::Sandbox, 5)));
        assert!(!layer.is_live());
        assert_eq!(layer.health, 0);
        assert_eq!(layer, DefenceLayer::default());
    }

    #[test]
    fn test_board_totals() {
        let mut board = Board::new(5);
        assert_eq!(board.spv_total(), 20);
        assert!(!board.all_destroyed());

        board.spv = [0, 0, 0, 0];
        assert!(board.all_destroyed());
        assert!(board.is_destroyed(2));
        assert!(!board.is_destroyed(4));
        assert!(!board.is_destroyed(usize::MAX));
    }

    #[test]
    fn test_all_cards_counts_every_zone() {
        let mut state = sample_state();
        state.boards[Player::Player1].defence[1] =
            DefenceLayer::holding(Card::new(Category::Vpn, 3));
        state.discard.push_back(Card::new(Category::Phishing, 2));

        assert_eq!(state.all_cards().len(), 6);
    }

    #[test]
    fn test_any_attack_in_hands() {
        let mut state = sample_state();
        assert!(state.any_attack_in_hands());

        state.hands[Player::Player2].clear();
        assert!(!state.any_attack_in_hands());
    }

    #[test]
    fn test_record_action_sequences() {
        let mut state = sample_state();
        state.record_action(Player::Player1, Action::Draw);
        state.record_action(Player::Player1, Action::EndTurn);

        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[0].sequence, 0);
        assert_eq!(state.history[1].sequence, 1);
        assert_eq!(state.history[1].turn, 1);
    }

    #[test]
    fn test_state_serialization() {
        let state = sample_state();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
