//! Deck construction, shuffling and dealing.
//!
//! All functions are pure over their inputs apart from the RNG: decks go
//! in, new decks come out. Drawing never fails; asking for more cards
//! than remain yields what is left and an empty deck.

use im::Vector;
use tracing::debug;

use crate::cards::{Card, Catalog};
use crate::core::{GameRng, Hand};

/// Unshuffled deck: every catalog card repeated `copies` times.
///
/// Copies of the same card sit next to each other, in catalog order.
///
/// ```
/// use netwar_ccg::cards::Catalog;
/// use netwar_ccg::deck::build_catalog;
///
/// let cards = build_catalog(&Catalog::standard(), 2);
/// assert_eq!(cards.len(), 50);
/// assert_eq!(cards[0], cards[1]);
/// ```
#[must_use]
pub fn build_catalog(catalog: &Catalog, copies: usize) -> Vec<Card> {
    catalog
        .iter()
        .flat_map(|&card| std::iter::repeat(card).take(copies))
        .collect()
}

/// Return a uniformly shuffled permutation of `cards`.
#[must_use]
pub fn shuffle(mut cards: Vec<Card>, rng: &mut GameRng) -> Vec<Card> {
    rng.shuffle(&mut cards);
    cards
}

/// Take up to `n` cards from the top (front) of `deck`.
///
/// Returns `(drawn, remaining)` with `drawn ++ remaining == deck`.
///
/// ```
/// use im::Vector;
/// use netwar_ccg::cards::{Card, Category};
/// use netwar_ccg::deck::draw;
///
/// let deck: Vector<Card> = vec![
///     Card::new(Category::Patch, 2),
///     Card::new(Category::Vpn, 3),
/// ]
/// .into();
///
/// let (drawn, remaining) = draw(&deck, 5);
/// assert_eq!(drawn.len(), 2);
/// assert!(remaining.is_empty());
/// ```
#[must_use]
pub fn draw(deck: &Vector<Card>, n: usize) -> (Vector<Card>, Vector<Card>) {
    let n = n.min(deck.len());
    deck.clone().split_at(n)
}

/// Deal `hand_size` cards to player 1, then `hand_size` to player 2.
///
/// Both hands come off the same deck, so no card is dealt twice.
#[must_use]
pub fn deal_initial(deck: &Vector<Card>, hand_size: usize) -> (Hand, Hand, Vector<Card>) {
    let (first, rest) = draw(deck, hand_size);
    let (second, remaining) = draw(&rest, hand_size);
    debug!(
        hand_size,
        remaining = remaining.len(),
        "dealt opening hands"
    );
    (
        first.into_iter().collect(),
        second.into_iter().collect(),
        remaining,
    )
}

/// Build and shuffle a complete deck from a catalog.
#[must_use]
pub fn fresh_deck(catalog: &Catalog, copies: usize, rng: &mut GameRng) -> Vector<Card> {
    shuffle(build_catalog(catalog, copies), rng).into()
}
