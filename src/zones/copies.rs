//! Copy-limit enforcement.
//!
//! The main deck, the champion slot and the side deck share one pool:
//! a base card may appear at most `max_copies` times across them,
//! whatever printings are used. The legend and battlefields sit outside
//! the pool and runes are not counted at all.

use rustc_hash::FxHashMap;

use super::deck::DeckState;
use crate::cards::CardIdentifier;
use crate::core::{DeckError, Result, Zone};

/// Occurrences of `base_id` across main deck, champion and side deck.
#[must_use]
pub fn count_copies(base_id: &str, deck: &DeckState) -> usize {
    pooled_cards(deck).filter(|c| c.base_id() == base_id).count()
}

/// Occurrences of every pooled base id.
#[must_use]
pub fn copy_counts(deck: &DeckState) -> FxHashMap<&str, usize> {
    let mut counts = FxHashMap::default();
    for card in pooled_cards(deck) {
        *counts.entry(card.base_id()).or_insert(0) += 1;
    }
    counts
}

/// Cards that count toward the copy limit.
pub fn pooled_cards(deck: &DeckState) -> impl Iterator<Item = &CardIdentifier> {
    deck.main_deck()
        .iter()
        .chain(deck.champion())
        .chain(deck.side_deck_cards())
}

/// Whether `zone` has room for one more card.
#[must_use]
pub fn has_capacity(deck: &DeckState, zone: Zone) -> bool {
    let rules = deck.rules();
    match zone {
        Zone::MainDeck => deck.main_deck_total() < rules.main_deck_size,
        Zone::Champion => deck.champion().is_none() && deck.main_deck_total() < rules.main_deck_size,
        Zone::SideDeck => deck.side_deck_count() < rules.side_deck_slots,
        Zone::Legend => deck.legend().is_none(),
        Zone::Battlefields => deck.battlefields().len() < rules.battlefield_slots,
    }
}

/// Gate one insertion of `card` into `zone`.
///
/// Capacity is checked before the copy limit, so a full zone reports
/// `ZoneFull` even when the card is also at its limit.
pub fn check_insertion(deck: &DeckState, card: &CardIdentifier, zone: Zone) -> Result<()> {
    if !has_capacity(deck, zone) {
        return Err(DeckError::ZoneFull { zone });
    }

    if matches!(zone, Zone::MainDeck | Zone::Champion | Zone::SideDeck) {
        let limit = deck.rules().max_copies;
        if count_copies(card.base_id(), deck) + 1 > limit {
            return Err(DeckError::CopyLimitExceeded {
                base_id: card.base_id().to_string(),
                limit,
            });
        }
    }

    Ok(())
}
