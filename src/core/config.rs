//! Deck rules and editor configuration.
//!
//! - `Zone`: The five places a card can live in a deck
//! - `DeckRules`: Capacities and limits (40-card main deck, 8 side slots, ...)
//! - `TransferConfig`: Drag/drop and tap-gesture tuning
//!
//! Defaults match the constructed-deck format. Games or tests that need
//! other limits override them through the builder methods.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A deck zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// The 39 (plus champion) main-deck cards.
    MainDeck,
    /// Fixed-size side deck.
    SideDeck,
    /// Chosen champion, the implicit 40th main-deck card.
    Champion,
    /// Legend slot.
    Legend,
    /// Battlefield slots.
    Battlefields,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::MainDeck => "main deck",
            Zone::SideDeck => "side deck",
            Zone::Champion => "champion slot",
            Zone::Legend => "legend slot",
            Zone::Battlefields => "battlefields",
        };
        f.write_str(name)
    }
}

/// Capacities and copy limits for a deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRules {
    /// Main-deck size including the champion.
    pub main_deck_size: usize,

    /// Number of side-deck slots.
    pub side_deck_slots: usize,

    /// Number of battlefield slots.
    pub battlefield_slots: usize,

    /// Copies of one base card allowed across main deck, champion and side deck.
    pub max_copies: usize,

    /// Runes split between the two legend colors.
    pub rune_total: u32,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            main_deck_size: 40,
            side_deck_slots: 8,
            battlefield_slots: 3,
            max_copies: 3,
            rune_total: 12,
        }
    }
}

impl DeckRules {
    /// Set the main-deck size (champion included).
    #[must_use]
    pub fn with_main_deck_size(mut self, size: usize) -> Self {
        self.main_deck_size = size;
        self
    }

    /// Set the number of side-deck slots.
    #[must_use]
    pub fn with_side_deck_slots(mut self, slots: usize) -> Self {
        self.side_deck_slots = slots;
        self
    }

    /// Set the number of battlefield slots.
    #[must_use]
    pub fn with_battlefield_slots(mut self, slots: usize) -> Self {
        self.battlefield_slots = slots;
        self
    }

    /// Set the copy limit.
    #[must_use]
    pub fn with_max_copies(mut self, copies: usize) -> Self {
        self.max_copies = copies;
        self
    }

    /// Longest flat card list a deck under these rules can produce:
    /// legend, main deck, battlefields, runes and side deck.
    #[must_use]
    pub fn max_flat_len(&self) -> usize {
        1 + self.main_deck_size + self.battlefield_slots + self.rune_total as usize + self.side_deck_slots
    }

    /// Set the rune total. Must be even so a two-color split starts level.
    #[must_use]
    pub fn with_rune_total(mut self, total: u32) -> Self {
        assert!(total % 2 == 0, "Rune total must be even");
        self.rune_total = total;
        self
    }
}

/// Drag/drop and gesture configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferConfig {
    /// Drop a main-deck card outside every zone to delete it.
    ///
    /// Cards from every other origin are restored instead.
    pub discard_main_deck_on_miss: bool,

    /// Window in which consecutive taps on one card upgrade to a
    /// double or triple tap.
    pub tap_window: Duration,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            discard_main_deck_on_miss: true,
            tap_window: Duration::from_millis(300),
        }
    }
}

impl TransferConfig {
    /// Restore main-deck cards dropped outside any zone instead of deleting them.
    #[must_use]
    pub fn restore_on_miss(mut self) -> Self {
        self.discard_main_deck_on_miss = false;
        self
    }

    /// Set the tap detection window.
    #[must_use]
    pub fn with_tap_window(mut self, window: Duration) -> Self {
        self.tap_window = window;
        self
    }
}
