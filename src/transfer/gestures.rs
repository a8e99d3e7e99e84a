//! Click and tap gestures.
//!
//! These skip the drag cycle and call the deck's guarded operations
//! directly, so champion auto-substitution and the copy limit apply to
//! them the same way.
//!
//! | Deck slot gesture            | Action                                  |
//! |------------------------------|-----------------------------------------|
//! | Shift+click                  | Move between main deck and side deck    |
//! | Right click / double tap     | Remove                                  |
//! | Shift+right click / triple   | Add another copy to the same zone       |
//! | Middle or ctrl click         | Open printing choices                   |
//!
//! | Search result gesture        | Action                                  |
//! |------------------------------|-----------------------------------------|
//! | Right click / double tap     | Add to the deck (legend, field or main) |
//! | Shift+right click / triple   | Add to the side deck                    |

use tracing::debug;

use super::taps::TapGesture;
use crate::cards::{CardCatalog, CardIdentifier, CardType};
use crate::core::{DeckError, Result, Zone};
use crate::zones::{DeckState, Placement, RuneSlot};

/// Pointer or touch gesture on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Click,
    ShiftClick,
    RightClick,
    ShiftRightClick,
    /// Middle click or ctrl+click.
    VariantClick,
    Tap(TapGesture),
}

/// A printing the player can pick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantChoice {
    pub variant_index: usize,
    pub name: String,
    pub image: Option<String>,
}

/// What a gesture did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The gesture has no action here.
    Ignored,
    Removed(CardIdentifier),
    Placed(Placement),
    /// Printing choices for the card; nothing changed yet.
    Variants(Vec<VariantChoice>),
}

/// Routes gestures to deck operations, honoring read-only mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureRouter {
    read_only: bool,
}

impl GestureRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn read_only() -> Self {
        Self { read_only: true }
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Handle a gesture on a placed card.
    ///
    /// Opening printing choices is allowed in read-only mode; every other
    /// action is refused there.
    pub fn on_slot(
        &self,
        deck: &mut DeckState,
        zone: Zone,
        index: usize,
        gesture: Gesture,
        catalog: &dyn CardCatalog,
    ) -> Result<GestureOutcome> {
        if gesture == Gesture::VariantClick {
            return Ok(variant_choices(deck, zone, index, catalog).map_or(GestureOutcome::Ignored, GestureOutcome::Variants));
        }
        if self.read_only && gesture != Gesture::Click && gesture != Gesture::Tap(TapGesture::Single) {
            return Err(DeckError::ReadOnly);
        }

        match gesture {
            Gesture::ShiftClick => move_between_decks(deck, zone, index, catalog).map(placed_or_ignored),
            Gesture::RightClick | Gesture::Tap(TapGesture::Double) => Ok(deck
                .remove_from_zone(zone, index, catalog)
                .map_or(GestureOutcome::Ignored, GestureOutcome::Removed)),
            Gesture::ShiftRightClick | Gesture::Tap(TapGesture::Triple) => {
                add_copy(deck, zone, index, catalog).map(placed_or_ignored)
            }
            Gesture::Click | Gesture::Tap(TapGesture::Single) | Gesture::VariantClick => Ok(GestureOutcome::Ignored),
        }
    }

    /// Handle a gesture on a search result.
    pub fn on_search_result(
        &self,
        deck: &mut DeckState,
        card: CardIdentifier,
        gesture: Gesture,
        catalog: &dyn CardCatalog,
    ) -> Result<GestureOutcome> {
        let to_side = match gesture {
            Gesture::RightClick | Gesture::Tap(TapGesture::Double) => false,
            Gesture::ShiftRightClick | Gesture::Tap(TapGesture::Triple) => true,
            _ => return Ok(GestureOutcome::Ignored),
        };
        if self.read_only {
            return Err(DeckError::ReadOnly);
        }

        let placed = if to_side {
            deck.add_to_side_deck(card, catalog)?
        } else {
            add_from_search(deck, card, catalog)?
        };
        Ok(GestureOutcome::Placed(placed))
    }

    /// Swap the printing of a placed card.
    pub fn apply_variant(
        &self,
        deck: &mut DeckState,
        zone: Zone,
        index: usize,
        variant_index: usize,
        catalog: &dyn CardCatalog,
    ) -> Result<Option<CardIdentifier>> {
        if self.read_only {
            return Err(DeckError::ReadOnly);
        }
        deck.set_variant(zone, index, variant_index, catalog)
    }
}

fn placed_or_ignored(placed: Option<Placement>) -> GestureOutcome {
    placed.map_or(GestureOutcome::Ignored, GestureOutcome::Placed)
}

/// Add a search result where its type belongs: legends to the legend slot,
/// battlefields to the battlefields, everything else to the main deck.
pub fn add_from_search(deck: &mut DeckState, card: CardIdentifier, catalog: &dyn CardCatalog) -> Result<Placement> {
    let card_type = catalog
        .get_card_by_base_id(card.base_id())
        .map(|meta| meta.card_type)
        .ok_or_else(|| DeckError::UnknownCard(card.base_id().to_string()))?;

    match card_type {
        CardType::Legend => deck.set_legend(card, catalog).map(|_| Placement::Legend),
        CardType::Battlefield => deck.add_battlefield(card, catalog).map(Placement::Battlefield),
        _ => deck.add_to_main_deck(card, catalog),
    }
}

/// Move a card between the main deck and the side deck.
///
/// The champion moves to the side deck. The move either completes or
/// leaves the deck untouched. `None` for an empty slot.
pub fn move_between_decks(
    deck: &mut DeckState,
    zone: Zone,
    index: usize,
    catalog: &dyn CardCatalog,
) -> Result<Option<Placement>> {
    let destination = match zone {
        Zone::MainDeck | Zone::Champion => Zone::SideDeck,
        Zone::SideDeck => Zone::MainDeck,
        Zone::Legend | Zone::Battlefields => {
            let card = deck.card_at(zone, index).map(ToString::to_string).unwrap_or_default();
            return Err(DeckError::WrongCardType { card, zone: Zone::SideDeck });
        }
    };

    let mut next = deck.clone();
    let Some(card) = next.take_card(zone, index) else {
        return Ok(None);
    };
    // Moving the champion out must not put it straight back.
    let substitute = zone != Zone::Champion;
    let placed = next.insert_deck_card(destination, usize::MAX, card.clone(), catalog, substitute)?;
    next.settle(catalog);

    debug!(card = %card, from = %zone, to = %destination, "moved card");
    *deck = next;
    Ok(Some(placed))
}

/// Add another copy of a placed card to the zone it sits in.
///
/// A copy of the champion goes to the main deck. `None` for an empty slot.
pub fn add_copy(deck: &mut DeckState, zone: Zone, index: usize, catalog: &dyn CardCatalog) -> Result<Option<Placement>> {
    let Some(card) = deck.card_at(zone, index).cloned() else {
        return Ok(None);
    };
    let placed = match zone {
        Zone::MainDeck | Zone::Champion => deck.add_to_main_deck(card, catalog),
        Zone::SideDeck => deck.add_to_side_deck(card, catalog),
        Zone::Battlefields => deck.add_battlefield(card, catalog).map(Placement::Battlefield),
        Zone::Legend => Err(DeckError::ZoneFull { zone }),
    }?;
    Ok(Some(placed))
}

/// Printings available for a placed card.
#[must_use]
pub fn variant_choices(deck: &DeckState, zone: Zone, index: usize, catalog: &dyn CardCatalog) -> Option<Vec<VariantChoice>> {
    let card = deck.card_at(zone, index)?;
    choices_for(card.base_id(), catalog)
}

/// Printings available for a rune slot's rune.
#[must_use]
pub fn rune_variant_choices(deck: &DeckState, slot: RuneSlot, catalog: &dyn CardCatalog) -> Option<Vec<VariantChoice>> {
    let rune = deck.runes().rune_card(slot)?;
    choices_for(rune.base_id(), catalog)
}

fn choices_for(base_id: &str, catalog: &dyn CardCatalog) -> Option<Vec<VariantChoice>> {
    let meta = catalog.get_card_by_base_id(base_id)?;
    Some(
        meta.variants
            .iter()
            .enumerate()
            .map(|(variant_index, name)| VariantChoice {
                variant_index,
                name: name.clone(),
                image: meta.image_for(variant_index).map(str::to_string),
            })
            .collect(),
    )
}
