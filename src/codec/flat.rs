//! Flat card list, the canonical order behind every deck code.
//!
//! Order: legend, champion, main deck, battlefields, rune A repeated
//! `count(A)` times, rune B repeated `count(B)` times, side deck.
//!
//! Reading a list back is positional. Each phase consumes cards until one
//! belongs to a later phase:
//!
//! 1. Legend: the first card, if it is a Legend
//! 2. Main deck: everything up to the first Battlefield or Rune
//! 3. Battlefields: up to the battlefield slot count
//! 4. Runes: up to the rune total, split by the legend's colors
//! 5. Side deck: the rest
//!
//! Unknown or unplaceable cards are skipped with a diagnostic.

use std::fmt;

use tracing::{debug, warn};

use crate::cards::{CardCatalog, CardIdentifier, CardType, Color};
use crate::core::{DeckError, DeckRules, Result, Zone};
use crate::zones::{DeckState, RuneSlot};

/// A token or card the importer skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportDiagnostic {
    /// The offending token as it appeared in the input.
    pub token: String,
    pub reason: DeckError,
}

impl fmt::Display for ImportDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipped {}: {}", self.token, self.reason)
    }
}

/// A decoded deck plus everything that was skipped on the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportOutcome {
    pub state: DeckState,
    pub diagnostics: Vec<ImportDiagnostic>,
}

/// Serialize a deck into canonical order.
///
/// Runes are written as repeated cards, so a rune slot with a count of 0
/// writes nothing and its chosen printing is not carried. Reading the list
/// back gives that slot the default printing.
#[must_use]
pub fn to_flat_list(deck: &DeckState) -> Vec<CardIdentifier> {
    let mut list = Vec::with_capacity(deck.main_deck_total() + deck.battlefields().len() + 20);
    list.extend(deck.legend().cloned());
    list.extend(deck.champion().cloned());
    list.extend(deck.main_deck().iter().cloned());
    list.extend(deck.battlefields().iter().cloned());

    let runes = deck.runes();
    for slot in [RuneSlot::A, RuneSlot::B] {
        if let Some(rune) = runes.rune_card(slot) {
            list.extend(std::iter::repeat(rune).take(runes.count(slot) as usize));
        }
    }

    list.extend(deck.side_deck_cards().cloned());
    list
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Phase {
    Legend,
    MainDeck,
    Battlefields,
    Runes,
    SideDeck,
}

/// Rebuild a deck from a flat list with the standard rules.
pub fn from_flat_list(list: &[CardIdentifier], catalog: &dyn CardCatalog) -> Result<ImportOutcome> {
    from_flat_list_with_rules(list, catalog, DeckRules::default())
}

/// Rebuild a deck from a flat list.
///
/// Fails with `ImportFormatInvalid` only when no card resolved.
pub fn from_flat_list_with_rules(
    list: &[CardIdentifier],
    catalog: &dyn CardCatalog,
    rules: DeckRules,
) -> Result<ImportOutcome> {
    let mut deck = DeckState::with_rules(rules);
    let mut diagnostics = Vec::new();
    let mut skip = |card: &CardIdentifier, reason: DeckError| {
        warn!(card = %card, %reason, "skipped card during import");
        diagnostics.push(ImportDiagnostic {
            token: card.to_string(),
            reason,
        });
    };

    let mut phase = Phase::Legend;
    let mut resolved = 0usize;
    let mut rune_counts = [0u32; 2];
    let mut rune_variants: [Option<usize>; 2] = [None, None];
    let mut legend_colors: Vec<Color> = Vec::new();

    for card in list {
        let Some(meta) = catalog.get_card_by_base_id(card.base_id()) else {
            skip(card, DeckError::UnknownCard(card.base_id().to_string()));
            continue;
        };
        resolved += 1;

        // Advance past every phase this card cannot belong to.
        phase = match (phase, meta.card_type) {
            (Phase::Legend, CardType::Legend) => Phase::Legend,
            (Phase::Legend | Phase::MainDeck, CardType::Battlefield) => Phase::Battlefields,
            (Phase::Legend | Phase::MainDeck | Phase::Battlefields, CardType::Rune) => Phase::Runes,
            (Phase::Legend, _) => Phase::MainDeck,
            (Phase::Battlefields, CardType::Battlefield) => Phase::Battlefields,
            (Phase::Battlefields | Phase::Runes, _) if meta.card_type != CardType::Rune => Phase::SideDeck,
            (current, _) => current,
        };

        let placed = match phase {
            Phase::Legend => {
                let result = deck.set_legend(card.clone(), catalog).map(|_| ());
                legend_colors = meta.colors.to_vec();
                phase = Phase::MainDeck;
                result
            }
            Phase::MainDeck => deck.add_to_main_deck(card.clone(), catalog).map(|_| ()),
            Phase::Battlefields => deck.add_battlefield(card.clone(), catalog).map(|_| ()),
            Phase::Runes => place_rune(
                card,
                &legend_colors,
                deck.rules().rune_total,
                &mut rune_counts,
                &mut rune_variants,
            ),
            Phase::SideDeck => deck.add_to_side_deck(card.clone(), catalog).map(|_| ()),
        };
        if let Err(reason) = placed {
            skip(card, reason);
        }
    }

    if resolved == 0 {
        return Err(DeckError::ImportFormatInvalid("no known card in the deck code".to_string()));
    }

    if deck.legend().is_some() {
        deck.load_rune_counts(rune_counts[0], rune_counts[1]);
        for (slot, variant) in [RuneSlot::A, RuneSlot::B].into_iter().zip(rune_variants) {
            if let Some(variant) = variant {
                deck.set_rune_variant(slot, variant, catalog);
            }
        }
    }

    debug!(cards = list.len(), skipped = diagnostics.len(), "imported flat list");
    Ok(ImportOutcome { state: deck, diagnostics })
}

/// Count one rune toward the legend color it belongs to.
///
/// Runes are reported against the legend slot, which owns the split.
fn place_rune(
    card: &CardIdentifier,
    legend_colors: &[Color],
    rune_total: u32,
    counts: &mut [u32; 2],
    variants: &mut [Option<usize>; 2],
) -> Result<()> {
    let slot = Color::for_rune(card.base_id())
        .and_then(|color| legend_colors.iter().take(2).position(|&c| c == color))
        .ok_or_else(|| DeckError::WrongCardType {
            card: card.to_string(),
            zone: Zone::Legend,
        })?;

    if counts[0] + counts[1] >= rune_total {
        return Err(DeckError::ZoneFull { zone: Zone::Legend });
    }
    counts[slot] += 1;
    variants[slot].get_or_insert(card.variant_index());
    Ok(())
}
