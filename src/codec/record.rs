//! Saved deck records and hydration.
//!
//! `DeckRecord` is the shape exchanged with the save/load boundary. Its
//! identifiers stay text so that one bad entry in a stored deck becomes a
//! diagnostic instead of failing the whole load.
//!
//! Hydration runs inside a `LoadTransaction`. Rune printings depend on the
//! legend, which must be resolved through the catalog first, so the
//! transaction holds them as pending values and applies them once the
//! legend is in place. The transaction is consumed by `resolve`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::flat::ImportDiagnostic;
use crate::cards::{CardCatalog, CardIdentifier};
use crate::core::{DeckRules, Result};
use crate::zones::{DeckState, RuneSlot};

fn default_rune_count() -> u32 {
    DeckRules::default().rune_total / 2
}

/// Persisted deck shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckRecord {
    #[serde(default)]
    pub main_deck: Vec<String>,
    #[serde(default)]
    pub chosen_champion: Option<String>,
    /// Compacted; `null` entries are tolerated on load.
    #[serde(default)]
    pub side_deck: Vec<Option<String>>,
    #[serde(default)]
    pub battlefields: Vec<String>,
    #[serde(default = "default_rune_count")]
    pub rune_a_count: u32,
    #[serde(default = "default_rune_count")]
    pub rune_b_count: u32,
    #[serde(default)]
    pub rune_a_variant_index: usize,
    #[serde(default)]
    pub rune_b_variant_index: usize,
    #[serde(default)]
    pub legend_card: Option<String>,
}

impl DeckRecord {
    /// Snapshot a deck.
    #[must_use]
    pub fn from_deck(deck: &DeckState) -> Self {
        let runes = deck.runes();
        Self {
            main_deck: deck.main_deck().iter().map(ToString::to_string).collect(),
            chosen_champion: deck.champion().map(ToString::to_string),
            side_deck: deck.side_deck().iter().map(|s| s.as_ref().map(ToString::to_string)).collect(),
            battlefields: deck.battlefields().iter().map(ToString::to_string).collect(),
            rune_a_count: runes.count(RuneSlot::A),
            rune_b_count: runes.count(RuneSlot::B),
            rune_a_variant_index: runes.variant(RuneSlot::A),
            rune_b_variant_index: runes.variant(RuneSlot::B),
            legend_card: deck.legend().map(ToString::to_string),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<&DeckState> for DeckRecord {
    fn from(deck: &DeckState) -> Self {
        Self::from_deck(deck)
    }
}

impl DeckState {
    /// Snapshot this deck for saving.
    #[must_use]
    pub fn to_record(&self) -> DeckRecord {
        DeckRecord::from_deck(self)
    }
}

/// A hydrated deck and the record entries that could not be restored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HydratedDeck {
    pub state: DeckState,
    pub diagnostics: Vec<ImportDiagnostic>,
}

/// One in-progress load of a saved deck.
#[derive(Clone, Debug)]
pub struct LoadTransaction {
    record: DeckRecord,
    rules: DeckRules,
    pending_rune_variants: [usize; 2],
}

impl LoadTransaction {
    /// Start loading `record` under the standard rules.
    #[must_use]
    pub fn begin(record: DeckRecord) -> Self {
        Self::with_rules(record, DeckRules::default())
    }

    #[must_use]
    pub fn with_rules(record: DeckRecord, rules: DeckRules) -> Self {
        let pending_rune_variants = [record.rune_a_variant_index, record.rune_b_variant_index];
        Self {
            record,
            rules,
            pending_rune_variants,
        }
    }

    /// Rune printings waiting for the legend to resolve.
    #[must_use]
    pub fn pending_rune_variants(&self) -> [usize; 2] {
        self.pending_rune_variants
    }

    /// Rebuild the deck through the guarded operations.
    ///
    /// The legend goes first so the runes know their colors, then the
    /// champion, main deck, battlefields and side deck. Rune counts that
    /// don't add up are repaired and pending printings are clamped.
    #[must_use]
    pub fn resolve(self, catalog: &dyn CardCatalog) -> HydratedDeck {
        let Self {
            record,
            rules,
            pending_rune_variants,
        } = self;
        let mut deck = DeckState::with_rules(rules);
        let mut diagnostics = Vec::new();

        let mut restore = |text: &str, apply: &mut dyn FnMut(CardIdentifier) -> Result<()>| {
            if let Err(reason) = CardIdentifier::parse(text).and_then(|card| apply(card)) {
                warn!(card = %text, %reason, "could not restore saved card");
                diagnostics.push(ImportDiagnostic {
                    token: text.to_string(),
                    reason,
                });
            }
        };

        if let Some(legend) = &record.legend_card {
            restore(legend, &mut |card| deck.set_legend(card, catalog).map(|_| ()));
        }
        if let Some(champion) = &record.chosen_champion {
            restore(champion, &mut |card| deck.set_champion(card, catalog).map(|_| ()));
        }
        for card in &record.main_deck {
            restore(card, &mut |card| deck.add_to_main_deck(card, catalog).map(|_| ()));
        }
        for card in &record.battlefields {
            restore(card, &mut |card| deck.add_battlefield(card, catalog).map(|_| ()));
        }
        for card in record.side_deck.iter().flatten() {
            restore(card, &mut |card| deck.add_to_side_deck(card, catalog).map(|_| ()));
        }

        deck.load_rune_counts(record.rune_a_count, record.rune_b_count);
        for (slot, variant) in [RuneSlot::A, RuneSlot::B].into_iter().zip(pending_rune_variants) {
            deck.set_rune_variant(slot, variant, catalog);
        }

        debug!(skipped = diagnostics.len(), "hydrated saved deck");
        HydratedDeck {
            state: deck,
            diagnostics,
        }
    }
}
