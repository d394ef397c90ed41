//! Card values.
//!
//! A `Card` is a plain immutable value: its kind, its category and its
//! power. Two cards with the same triple are interchangeable; there is no
//! per-instance identity.

use serde::{Deserialize, Serialize};

/// What a card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardKind {
    /// Damages an opponent's server slot.
    Attack,
    /// Occupies one of your own defence layers and absorbs damage.
    Defence,
    /// Restores health on one of your own live server slots.
    Utility,
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardKind::Attack => "Attack",
            CardKind::Defence => "Defence",
            CardKind::Utility => "Utility",
        };
        f.write_str(name)
    }
}

/// Thematic category. Every category belongs to exactly one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    // Attack
    Malware,
    Phishing,
    Ransomware,
    Ddos,
    SqlInjection,
    ZeroDay,
    Botnet,
    Trojan,
    ManInTheMiddle,
    // Defence
    Firewall,
    Antivirus,
    IntrusionDetection,
    Encryption,
    Honeypot,
    AccessControl,
    Vpn,
    Sandbox,
    // Utility
    Patch,
    Backup,
    IncidentResponse,
    SecurityAudit,
    Scanner,
    Database,
    Shield,
    Recovery,
}

impl Category {
    /// Every category, grouped by kind.
    pub const ALL: [Category; 25] = [
        Category::Malware,
        Category::Phishing,
        Category::Ransomware,
        Category::Ddos,
        Category::SqlInjection,
        Category::ZeroDay,
        Category::Botnet,
        Category::Trojan,
        Category::ManInTheMiddle,
        Category::Firewall,
        Category::Antivirus,
        Category::IntrusionDetection,
        Category::Encryption,
        Category::Honeypot,
        Category::AccessControl,
        Category::Vpn,
        Category::Sandbox,
        Category::Patch,
        Category::Backup,
        Category::IncidentResponse,
        Category::SecurityAudit,
        Category::Scanner,
        Category::Database,
        Category::Shield,
        Category::Recovery,
    ];

    /// The kind this category plays as.
    #[must_use]
    pub const fn kind(self) -> CardKind {
        use Category::*;
        match self {
            Malware | Phishing | Ransomware | Ddos | SqlInjection | ZeroDay | Botnet | Trojan
            | ManInTheMiddle => CardKind::Attack,
            Firewall | Antivirus | IntrusionDetection | Encryption | Honeypot | AccessControl
            | Vpn | Sandbox => CardKind::Defence,
            Patch | Backup | IncidentResponse | SecurityAudit | Scanner | Database | Shield
            | Recovery => CardKind::Utility,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        use Category::*;
        match self {
            Malware => "Malware",
            Phishing => "Phishing",
            Ransomware => "Ransomware",
            Ddos => "DDoS",
            SqlInjection => "SQL Injection",
            ZeroDay => "Zero-Day Exploit",
            Botnet => "Botnet",
            Trojan => "Trojan",
            ManInTheMiddle => "Man-in-the-Middle",
            Firewall => "Firewall",
            Antivirus => "Antivirus",
            IntrusionDetection => "Intrusion Detection",
            Encryption => "Encryption",
            Honeypot => "Honeypot",
            AccessControl => "Access Control",
            Vpn => "VPN",
            Sandbox => "Sandbox",
            Patch => "Patch",
            Backup => "Backup",
            IncidentResponse => "Incident Response",
            SecurityAudit => "Security Audit",
            Scanner => "Scanner",
            Database => "Database",
            Shield => "Shield",
            Recovery => "Recovery",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A playable card.
///
/// ## Example
///
/// ```
/// use netwar_ccg::cards::{Card, CardKind, Category};
///
/// let card = Card::new(Category::Ransomware, 4);
///
/// assert_eq!(card.kind(), CardKind::Attack);
/// assert_eq!(card.power(), 4);
/// assert_eq!(card.to_string(), "Ransomware (Attack 4)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    kind: CardKind,
    category: Category,
    power: u8,
}

impl Card {
    /// Create a card. The kind follows from the category.
    #[must_use]
    pub const fn new(category: Category, power: u8) -> Self {
        Self {
            kind: category.kind(),
            category,
            power,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> CardKind {
        self.kind
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub const fn power(&self) -> u8 {
        self.power
    }

    #[must_use]
    pub fn is_attack(&self) -> bool {
        self.kind == CardKind::Attack
    }

    #[must_use]
    pub fn is_defence(&self) -> bool {
        self.kind == CardKind::Defence
    }

    #[must_use]
    pub fn is_utility(&self) -> bool {
        self.kind == CardKind::Utility
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} {})", self.category, self.kind, self.power)
    }
}
