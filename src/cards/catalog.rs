//! Card catalog: the canonical card of every category.
//!
//! The deck is built by copying each catalog card a fixed number of
//! times. The catalog keeps insertion order so the unshuffled deck is
//! deterministic, and indexes cards by category for lookup.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardKind, Category};

/// Canonical card list of the standard game.
const STANDARD_CARDS: [Card; 25] = [
    Card::new(Category::Malware, 2),
    Card::new(Category::Phishing, 2),
    Card::new(Category::Ransomware, 4),
    Card::new(Category::Ddos, 3),
    Card::new(Category::SqlInjection, 3),
    Card::new(Category::ZeroDay, 6),
    Card::new(Category::Botnet, 5),
    Card::new(Category::Trojan, 3),
    Card::new(Category::ManInTheMiddle, 4),
    Card::new(Category::Firewall, 3),
    Card::new(Category::Antivirus, 2),
    Card::new(Category::IntrusionDetection, 4),
    Card::new(Category::Encryption, 3),
    Card::new(Category::Honeypot, 2),
    Card::new(Category::AccessControl, 2),
    Card::new(Category::Vpn, 3),
    Card::new(Category::Sandbox, 5),
    Card::new(Category::Patch, 2),
    Card::new(Category::Backup, 3),
    Card::new(Category::IncidentResponse, 4),
    Card::new(Category::SecurityAudit, 1),
    Card::new(Category::Scanner, 1),
    Card::new(Category::Database, 2),
    Card::new(Category::Shield, 2),
    Card::new(Category::Recovery, 5),
];

/// Catalog of canonical cards.
///
/// ## Example
///
/// ```
/// use netwar_ccg::cards::{Catalog, Category};
///
/// let catalog = Catalog::standard();
///
/// let sandbox = catalog.get(Category::Sandbox).unwrap();
/// assert_eq!(sandbox.power(), 5);
/// assert_eq!(catalog.len(), 25);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: Vec<Card>,
    by_category: FxHashMap<Category, usize>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard 25-card catalog.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for card in STANDARD_CARDS {
            catalog.register(card);
        }
        catalog
    }

    /// Register a canonical card.
    ///
    /// Panics if the category already has a canonical card.
    pub fn register(&mut self, card: Card) {
        if self.by_category.contains_key(&card.category()) {
            panic!("Category {:?} already registered", card.category());
        }
        self.by_category.insert(card.category(), self.cards.len());
        self.cards.push(card);
    }

    /// Get the canonical card of a category.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<&Card> {
        self.by_category.get(&category).map(|&i| &self.cards[i])
    }

    /// Get the number of canonical cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over canonical cards in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Canonical cards of one kind.
    pub fn of_kind(&self, kind: CardKind) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.kind() == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_covers_every_category_once() {
        let catalog = Catalog::standard();

        assert_eq!(catalog.len(), Category::ALL.len());
        for category in Category::ALL {
            let card = catalog.get(category).expect("category missing");
            assert_eq!(card.category(), category);
        }
    }

    #[test]
    fn test_standard_powers_are_playable() {
        let catalog = Catalog::standard();

        // Defence health starts at power; a zero-power defence would be dead on arrival.
        assert!(catalog.of_kind(CardKind::Defence).all(|c| c.power() > 0));
        assert!(catalog.of_kind(CardKind::Attack).all(|c| c.power() > 0));
    }

    #[test]
    fn test_of_kind_partitions_catalog() {
        let catalog = Catalog::standard();

        let total: usize = [CardKind::Attack, CardKind::Defence, CardKind::Utility]
            .iter()
            .map(|&k| catalog.of_kind(k).count())
            .sum();
        assert_eq!(total, catalog.len());
    }

    #[test]
    fn test_register_custom() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());

        catalog.register(Card::new(Category::Botnet, 1));
        assert_eq!(catalog.get(Category::Botnet), Some(&Card::new(Category::Botnet, 1)));
        assert_eq!(catalog.get(Category::Firewall), None);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_category_panics() {
        let mut catalog = Catalog::new();
        catalog.register(Card::new(Category::Patch, 1));
        catalog.register(Card::new(Category::Patch, 2));
    }
}
