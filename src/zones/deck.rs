//! The deck zone model.
//!
//! `DeckState` owns the five zones of a deck under construction and only
//! changes them through guarded operations. Every public mutation either
//! commits a state satisfying the deck invariants or returns an error and
//! leaves the deck untouched:
//!
//! - main deck plus champion never exceeds `main_deck_size`
//! - the side deck is always `side_deck_slots` long with its cards packed
//!   at the front
//! - battlefields never exceed `battlefield_slots` and hold no exact duplicate
//! - the legend slot only holds a Legend, the champion slot only a Champion
//! - no base card appears more than `max_copies` times across main deck,
//!   champion and side deck
//! - rune counts sum to `rune_total`
//!
//! ## Champion auto-substitution
//!
//! Inserting a Champion-super card into the main or side deck while the
//! champion slot is empty puts it in the champion slot instead. When the
//! champion slot is vacated, the first Champion in the main deck is
//! promoted into it (`auto_fill_champion`).

use tracing::debug;

use super::copies;
use super::runes::{RuneSlot, RuneSplit};
use crate::cards::{CardCatalog, CardIdentifier, CardMetadata, CardType};
use crate::core::{DeckError, DeckRules, Result, Zone};

/// Where an inserted card ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    MainDeck(usize),
    SideDeck(usize),
    Champion,
    Legend,
    Battlefield(usize),
}

/// What happened to the card a slot replacement pushed out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Displaced {
    /// Returned to the end of the main deck.
    ReturnedToMainDeck(CardIdentifier),
    /// No room or copies left; the card left the deck.
    Discarded(CardIdentifier),
}

/// A deck under construction.
///
/// ## Example
///
/// ```
/// use rift_deck::cards::{CardIdentifier, CardMetadata, CardRegistry, CardSuper, CardType};
/// use rift_deck::zones::{DeckState, Placement};
///
/// let mut catalog = CardRegistry::new();
/// catalog.register(
///     CardMetadata::new("OGN-030", "Jinx", CardType::Unit).with_super(CardSuper::Champion),
/// );
///
/// let mut deck = DeckState::new();
/// let placed = deck.add_to_main_deck(CardIdentifier::base("OGN-030"), &catalog).unwrap();
///
/// // The first champion fills the empty champion slot.
/// assert_eq!(placed, Placement::Champion);
/// assert!(deck.main_deck().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckState {
    rules: DeckRules,
    champion: Option<CardIdentifier>,
    main_deck: Vec<CardIdentifier>,
    side_deck: Vec<Option<CardIdentifier>>,
    battlefields: Vec<CardIdentifier>,
    legend: Option<CardIdentifier>,
    runes: RuneSplit,
}

impl Default for DeckState {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup<'c>(catalog: &'c dyn CardCatalog, card: &CardIdentifier) -> Result<&'c CardMetadata> {
    catalog
        .get_card_by_base_id(card.base_id())
        .ok_or_else(|| DeckError::UnknownCard(card.base_id().to_string()))
}

impl DeckState {
    /// Empty deck with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(DeckRules::default())
    }

    /// Empty deck with custom rules.
    #[must_use]
    pub fn with_rules(rules: DeckRules) -> Self {
        Self {
            champion: None,
            main_deck: Vec::new(),
            side_deck: vec![None; rules.side_deck_slots],
            battlefields: Vec::new(),
            legend: None,
            runes: RuneSplit::new(rules.rune_total),
            rules,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn rules(&self) -> &DeckRules {
        &self.rules
    }

    #[must_use]
    pub fn champion(&self) -> Option<&CardIdentifier> {
        self.champion.as_ref()
    }

    /// Main-deck cards in order, champion excluded.
    #[must_use]
    pub fn main_deck(&self) -> &[CardIdentifier] {
        &self.main_deck
    }

    /// All side-deck slots, empty slots at the tail.
    #[must_use]
    pub fn side_deck(&self) -> &[Option<CardIdentifier>] {
        &self.side_deck
    }

    /// Occupied side-deck slots in order.
    pub fn side_deck_cards(&self) -> impl Iterator<Item = &CardIdentifier> {
        self.side_deck.iter().flatten()
    }

    #[must_use]
    pub fn battlefields(&self) -> &[CardIdentifier] {
        &self.battlefields
    }

    #[must_use]
    pub fn legend(&self) -> Option<&CardIdentifier> {
        self.legend.as_ref()
    }

    #[must_use]
    pub fn runes(&self) -> &RuneSplit {
        &self.runes
    }

    /// Main-deck size counting the champion.
    #[must_use]
    pub fn main_deck_total(&self) -> usize {
        self.main_deck.len() + usize::from(self.champion.is_some())
    }

    /// Number of occupied side-deck slots.
    #[must_use]
    pub fn side_deck_count(&self) -> usize {
        self.side_deck.iter().filter(|s| s.is_some()).count()
    }

    /// Card at a zone position, if any.
    #[must_use]
    pub fn card_at(&self, zone: Zone, index: usize) -> Option<&CardIdentifier> {
        match zone {
            Zone::MainDeck => self.main_deck.get(index),
            Zone::SideDeck => self.side_deck.get(index).and_then(Option::as_ref),
            Zone::Champion => self.champion.as_ref(),
            Zone::Legend => self.legend.as_ref(),
            Zone::Battlefields => self.battlefields.get(index),
        }
    }

    /// Whether the deck holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.champion.is_none()
            && self.legend.is_none()
            && self.main_deck.is_empty()
            && self.battlefields.is_empty()
            && self.side_deck_count() == 0
    }

    // === Guarded insertion ===

    /// Append a card to the main deck.
    ///
    /// Champions go to an empty champion slot instead.
    pub fn add_to_main_deck(&mut self, card: CardIdentifier, catalog: &dyn CardCatalog) -> Result<Placement> {
        self.insert_deck_card(Zone::MainDeck, usize::MAX, card, catalog, true)
    }

    /// Insert a card into the main deck at `index` (clamped to the end).
    pub fn insert_into_main_deck(
        &mut self,
        index: usize,
        card: CardIdentifier,
        catalog: &dyn CardCatalog,
    ) -> Result<Placement> {
        self.insert_deck_card(Zone::MainDeck, index, card, catalog, true)
    }

    /// Put a card in the first free side-deck slot.
    ///
    /// Champions go to an empty champion slot instead.
    pub fn add_to_side_deck(&mut self, card: CardIdentifier, catalog: &dyn CardCatalog) -> Result<Placement> {
        self.insert_deck_card(Zone::SideDeck, usize::MAX, card, catalog, true)
    }

    /// Insert a card at a side-deck slot, shifting later cards right.
    pub fn insert_into_side_deck(
        &mut self,
        index: usize,
        card: CardIdentifier,
        catalog: &dyn CardCatalog,
    ) -> Result<Placement> {
        self.insert_deck_card(Zone::SideDeck, index, card, catalog, true)
    }

    /// Shared main/side insertion path.
    ///
    /// `substitute` enables champion auto-substitution; only a drag that
    /// itself vacated the champion slot turns it off.
    pub(crate) fn insert_deck_card(
        &mut self,
        zone: Zone,
        index: usize,
        card: CardIdentifier,
        catalog: &dyn CardCatalog,
        substitute: bool,
    ) -> Result<Placement> {
        let meta = lookup(catalog, &card)?;
        if !meta.card_type.is_deckable() {
            return Err(DeckError::WrongCardType {
                card: card.to_string(),
                zone,
            });
        }

        let to_champion = substitute && self.champion.is_none() && meta.is_champion();
        let destination = if to_champion { Zone::Champion } else { zone };
        copies::check_insertion(self, &card, destination)?;

        debug!(card = %card, zone = %destination, "inserted card");
        Ok(self.place(destination, index, card))
    }

    /// Put `card` in the legend slot.
    ///
    /// A replaced legend goes back to the main deck when there is room and
    /// copies to spare; otherwise it leaves the deck. This includes another
    /// printing of the same legend. The rune split is
    /// re-derived from the new legend's colors.
    pub fn set_legend(&mut self, card: CardIdentifier, catalog: &dyn CardCatalog) -> Result<Option<Displaced>> {
        let meta = lookup(catalog, &card)?;
        if meta.card_type != CardType::Legend {
            return Err(DeckError::WrongCardType {
                card: card.to_string(),
                zone: Zone::Legend,
            });
        }

        if self.legend.as_ref() == Some(&card) {
            return Ok(None);
        }

        let previous = self.legend.replace(card.clone());
        let displaced = previous.map(|old| self.return_to_main_deck(old));

        self.runes.attune(&meta.colors, self.rules.rune_total, catalog);
        debug!(legend = %card, ?displaced, "set legend");
        Ok(displaced)
    }

    /// Put `card` in the champion slot.
    ///
    /// A replaced champion goes back to the main deck when there is room
    /// and copies to spare; otherwise it leaves the deck. Re-selecting the
    /// exact same card is a no-op; to change the printing in place use
    /// `set_variant`.
    pub fn set_champion(&mut self, card: CardIdentifier, catalog: &dyn CardCatalog) -> Result<Option<Displaced>> {
        let meta = lookup(catalog, &card)?;
        if !meta.is_champion() {
            return Err(DeckError::WrongCardType {
                card: card.to_string(),
                zone: Zone::Champion,
            });
        }

        if self.champion.as_ref() == Some(&card) {
            return Ok(None);
        }

        let mut next = self.clone();
        let previous = next.champion.take();
        copies::check_insertion(&next, &card, Zone::Champion)?;
        next.champion = Some(card.clone());
        let displaced = previous.map(|old| next.return_to_main_deck(old));

        *self = next;
        debug!(champion = %card, ?displaced, "set champion");
        Ok(displaced)
    }

    /// Append a battlefield.
    pub fn add_battlefield(&mut self, card: CardIdentifier, catalog: &dyn CardCatalog) -> Result<usize> {
        self.insert_battlefield(usize::MAX, card, catalog)
    }

    /// Insert a battlefield at `index` (clamped to the end).
    pub fn insert_battlefield(&mut self, index: usize, card: CardIdentifier, catalog: &dyn CardCatalog) -> Result<usize> {
        let meta = lookup(catalog, &card)?;
        if meta.card_type != CardType::Battlefield {
            return Err(DeckError::WrongCardType {
                card: card.to_string(),
                zone: Zone::Battlefields,
            });
        }
        if self.battlefields.contains(&card) {
            return Err(DeckError::DuplicateInZone { card: card.to_string() });
        }
        copies::check_insertion(self, &card, Zone::Battlefields)?;

        let index = index.min(self.battlefields.len());
        debug!(battlefield = %card, index, "added battlefield");
        self.battlefields.insert(index, card);
        Ok(index)
    }

    // === Removal ===

    /// Remove the card at a zone position.
    ///
    /// Never fails: an empty or out-of-range slot returns `None`. Removing
    /// the champion promotes the next main-deck champion; removing the
    /// legend detaches the runes from its colors.
    pub fn remove_from_zone(&mut self, zone: Zone, index: usize, catalog: &dyn CardCatalog) -> Option<CardIdentifier> {
        let removed = self.take_card(zone, index)?;
        debug!(card = %removed, %zone, index, "removed card");
        self.settle(catalog);
        Some(removed)
    }

    /// Empty every zone. Rune counts and printings go back to defaults.
    pub fn clear(&mut self) {
        *self = Self::with_rules(self.rules.clone());
    }

    // === Runes and printings ===

    /// Move one rune into `slot` from the other slot.
    pub fn click_rune(&mut self, slot: RuneSlot) -> bool {
        self.runes.click(slot)
    }

    /// Choose a rune printing (clamped). Returns the stored index.
    pub fn set_rune_variant(&mut self, slot: RuneSlot, variant_index: usize, catalog: &dyn CardCatalog) -> usize {
        self.runes.set_variant(slot, variant_index, catalog)
    }

    /// Swap the printing of a placed card, keeping its zone and position.
    ///
    /// The index is clamped to the card's printing list. Returns the new
    /// identifier, or `None` for an empty slot.
    pub fn set_variant(
        &mut self,
        zone: Zone,
        index: usize,
        variant_index: usize,
        catalog: &dyn CardCatalog,
    ) -> Result<Option<CardIdentifier>> {
        let Some(current) = self.card_at(zone, index) else {
            return Ok(None);
        };
        let meta = lookup(catalog, current)?;
        let updated = current.with_variant(meta.clamp_variant(variant_index));

        if zone == Zone::Battlefields
            && self.battlefields.iter().enumerate().any(|(i, b)| i != index && *b == updated)
        {
            return Err(DeckError::DuplicateInZone { card: updated.to_string() });
        }

        let slot = match zone {
            Zone::MainDeck => &mut self.main_deck[index],
            Zone::Battlefields => &mut self.battlefields[index],
            Zone::SideDeck => match self.side_deck[index].as_mut() {
                Some(card) => card,
                None => return Ok(None),
            },
            Zone::Champion => match self.champion.as_mut() {
                Some(card) => card,
                None => return Ok(None),
            },
            Zone::Legend => match self.legend.as_mut() {
                Some(card) => card,
                None => return Ok(None),
            },
        };
        *slot = updated.clone();
        Ok(Some(updated))
    }

    // === Hydration support ===

    /// Restore rune counts from a saved or imported deck.
    pub(crate) fn load_rune_counts(&mut self, a: u32, b: u32) {
        self.runes.load_counts(a, b, self.rules.rune_total);
    }

    // === Raw zone access for the transfer engine ===

    /// Remove a card without running post-conditions.
    pub(crate) fn take_card(&mut self, zone: Zone, index: usize) -> Option<CardIdentifier> {
        match zone {
            Zone::MainDeck => (index < self.main_deck.len()).then(|| self.main_deck.remove(index)),
            Zone::SideDeck => {
                let mut filled = self.side_filled();
                if index >= filled.len() {
                    return None;
                }
                let card = filled.remove(index);
                self.set_side_filled(filled);
                Some(card)
            }
            Zone::Champion => self.champion.take(),
            Zone::Legend => self.legend.take(),
            Zone::Battlefields => (index < self.battlefields.len()).then(|| self.battlefields.remove(index)),
        }
    }

    /// Put a card back where it was taken from, bypassing the guards.
    ///
    /// Only valid for a card this deck just gave up through `take_card`.
    pub(crate) fn restore_card(&mut self, zone: Zone, index: usize, card: CardIdentifier) {
        self.place(zone, index, card);
    }

    /// Post-conditions after a slot may have been vacated.
    pub(crate) fn settle(&mut self, catalog: &dyn CardCatalog) {
        self.fill_champion_slot(catalog);
        if self.legend.is_none() {
            self.runes.detach();
        }
    }

    /// Promote the first main-deck champion into an empty champion slot.
    ///
    /// Returns whether a card was promoted.
    pub(crate) fn fill_champion_slot(&mut self, catalog: &dyn CardCatalog) -> bool {
        if self.champion.is_some() {
            return false;
        }
        let found = self.main_deck.iter().position(|card| {
            catalog
                .get_card_by_base_id(card.base_id())
                .is_some_and(CardMetadata::is_champion)
        });
        match found {
            Some(index) => {
                let card = self.main_deck.remove(index);
                debug!(champion = %card, "promoted champion from main deck");
                self.champion = Some(card);
                true
            }
            None => false,
        }
    }

    /// Zone and position of the first card in `zone` that matches `card`
    /// exactly.
    #[must_use]
    pub fn position_of(&self, zone: Zone, card: &CardIdentifier) -> Option<usize> {
        match zone {
            Zone::MainDeck => self.main_deck.iter().position(|c| c == card),
            Zone::SideDeck => self.side_deck.iter().position(|c| c.as_ref() == Some(card)),
            Zone::Champion => (self.champion.as_ref() == Some(card)).then_some(0),
            Zone::Legend => (self.legend.as_ref() == Some(card)).then_some(0),
            Zone::Battlefields => self.battlefields.iter().position(|c| c == card),
        }
    }

    // === Invariants ===

    /// Describe every broken deck invariant. Empty when the deck is sound.
    #[must_use]
    pub fn invariant_violations(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let rules = &self.rules;

        if self.main_deck_total() > rules.main_deck_size {
            problems.push(format!("main deck holds {} cards", self.main_deck_total()));
        }
        if self.side_deck.len() != rules.side_deck_slots {
            problems.push(format!("side deck has {} slots", self.side_deck.len()));
        }
        if let Some(gap) = self.side_deck.iter().position(Option::is_none) {
            if self.side_deck[gap..].iter().any(Option::is_some) {
                problems.push("side deck is not compacted".to_string());
            }
        }
        if self.battlefields.len() > rules.battlefield_slots {
            problems.push(format!("{} battlefields", self.battlefields.len()));
        }
        for (i, field) in self.battlefields.iter().enumerate() {
            if self.battlefields[..i].contains(field) {
                problems.push(format!("battlefield {field} appears twice"));
            }
        }
        for (base_id, count) in copies::copy_counts(self) {
            if count > rules.max_copies {
                problems.push(format!("{base_id} has {count} copies"));
            }
        }
        if self.legend.is_some() && self.runes.total() != rules.rune_total {
            problems.push(format!("rune counts sum to {}", self.runes.total()));
        }

        problems
    }

    // === Internals ===

    fn place(&mut self, zone: Zone, index: usize, card: CardIdentifier) -> Placement {
        match zone {
            Zone::MainDeck => {
                let i = index.min(self.main_deck.len());
                self.main_deck.insert(i, card);
                Placement::MainDeck(i)
            }
            Zone::SideDeck => {
                let mut filled = self.side_filled();
                let i = index.min(filled.len());
                filled.insert(i, card);
                self.set_side_filled(filled);
                Placement::SideDeck(i)
            }
            Zone::Champion => {
                self.champion = Some(card);
                Placement::Champion
            }
            Zone::Legend => {
                self.legend = Some(card);
                Placement::Legend
            }
            Zone::Battlefields => {
                let i = index.min(self.battlefields.len());
                self.battlefields.insert(i, card);
                Placement::Battlefield(i)
            }
        }
    }

    fn return_to_main_deck(&mut self, card: CardIdentifier) -> Displaced {
        if copies::check_insertion(self, &card, Zone::MainDeck).is_ok() {
            self.main_deck.push(card.clone());
            Displaced::ReturnedToMainDeck(card)
        } else {
            Displaced::Discarded(card)
        }
    }

    fn side_filled(&self) -> Vec<CardIdentifier> {
        self.side_deck.iter().flatten().cloned().collect()
    }

    fn set_side_filled(&mut self, filled: Vec<CardIdentifier>) {
        let slots = self.rules.side_deck_slots;
        self.side_deck = filled.into_iter().map(Some).collect();
        self.side_deck.resize(slots.max(self.side_deck.len()), None);
    }
}

/// Promote the first main-deck champion into an empty champion slot.
///
/// Every operation that can vacate the champion slot runs this as its
/// post-condition.
#[must_use]
pub fn auto_fill_champion(mut state: DeckState, catalog: &dyn CardCatalog) -> DeckState {
    state.fill_champion_slot(catalog);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardRegistry, CardSuper, Color};

    fn catalog() -> CardRegistry {
        let mut registry = CardRegistry::new();
        for n in 1..=20 {
            registry.register(CardMetadata::new(format!("OGN-{n:03}"), format!("Unit {n}"), CardType::Unit));
        }
        registry.register(
            CardMetadata::new("OGN-030", "Jinx", CardType::Unit)
                .with_super(CardSuper::Champion)
                .with_tags(["Jinx"]),
        );
        registry.register(
            CardMetadata::new("OGN-031", "Vi", CardType::Unit)
                .with_super(CardSuper::Champion)
                .with_tags(["Vi"]),
        );
        registry.register(
            CardMetadata::new("OGN-251", "Jinx Legend", CardType::Legend)
                .with_colors([Color::Fury, Color::Chaos]),
        );
        registry.register(
            CardMetadata::new("OGN-252", "Vi Legend", CardType::Legend)
                .with_colors([Color::Order, Color::Body]),
        );
        registry.register(
            CardMetadata::new("OGN-290", "Field", CardType::Battlefield).with_variants(["OGN-290", "OGN-290a"]),
        );
        registry.register(CardMetadata::new("OGN-291", "Field 2", CardType::Battlefield));
        registry.register(CardMetadata::new("OGN-292", "Field 3", CardType::Battlefield));
        registry.register(CardMetadata::new("OGN-293", "Field 4", CardType::Battlefield));
        registry.register(CardMetadata::new("OGN-007", "Fury Rune", CardType::Rune));
        registry
    }

    fn id(base: &str) -> CardIdentifier {
        CardIdentifier::base(base)
    }

    fn fill_main(deck: &mut DeckState, catalog: &CardRegistry, total: usize) {
        let mut n = 1;
        while deck.main_deck_total() < total {
            let card = id(&format!("OGN-{n:03}"));
            if deck.add_to_main_deck(card, catalog).is_err() {
                n += 1;
            }
        }
    }

    #[test]
    fn test_new_deck_shape() {
        let deck = DeckState::new();
        assert_eq!(deck.side_deck().len(), 8);
        assert_eq!(deck.side_deck_count(), 0);
        assert_eq!(deck.runes().total(), 12);
        assert!(deck.is_empty());
        assert!(deck.invariant_violations().is_empty());
    }

    #[test]
    fn test_champion_auto_substitution() {
        let catalog = catalog();
        let mut deck = DeckState::new();

        assert_eq!(deck.add_to_main_deck(id("OGN-030"), &catalog).unwrap(), Placement::Champion);
        // Slot is taken now, so the next champion lands in the main deck.
        assert_eq!(deck.add_to_main_deck(id("OGN-031"), &catalog).unwrap(), Placement::MainDeck(0));
        assert_eq!(deck.champion(), Some(&id("OGN-030")));
    }

    #[test]
    fn test_side_deck_substitutes_champion() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        assert_eq!(deck.add_to_side_deck(id("OGN-030"), &catalog).unwrap(), Placement::Champion);
        assert_eq!(deck.side_deck_count(), 0);
    }

    #[test]
    fn test_main_deck_full() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        deck.add_to_main_deck(id("OGN-030"), &catalog).unwrap();
        fill_main(&mut deck, &catalog, 40);
        assert_eq!(deck.main_deck().len(), 39);

        let before = deck.clone();
        let err = deck.add_to_main_deck(id("OGN-020"), &catalog).unwrap_err();
        assert!(matches!(err, DeckError::ZoneFull { zone: Zone::MainDeck }));
        assert_eq!(deck, before);
    }

    #[test]
    fn test_main_deck_rejects_battlefield_and_rune() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        assert!(matches!(
            deck.add_to_main_deck(id("OGN-290"), &catalog),
            Err(DeckError::WrongCardType { zone: Zone::MainDeck, .. })
        ));
        assert!(matches!(
            deck.add_to_side_deck(id("OGN-007"), &catalog),
            Err(DeckError::WrongCardType { zone: Zone::SideDeck, .. })
        ));
        assert!(matches!(
            deck.add_to_main_deck(id("XYZ-001"), &catalog),
            Err(DeckError::UnknownCard(_))
        ));
    }

    #[test]
    fn test_side_deck_full_and_compaction() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        for n in 1..=8 {
            deck.add_to_side_deck(id(&format!("OGN-{n:03}")), &catalog).unwrap();
        }
        assert!(matches!(
            deck.add_to_side_deck(id("OGN-009"), &catalog),
            Err(DeckError::ZoneFull { zone: Zone::SideDeck })
        ));

        assert_eq!(deck.remove_from_zone(Zone::SideDeck, 0, &catalog), Some(id("OGN-001")));
        assert_eq!(deck.side_deck().len(), 8);
        assert_eq!(deck.side_deck()[0], Some(id("OGN-002")));
        assert_eq!(deck.side_deck()[7], None);
        assert!(deck.invariant_violations().is_empty());
    }

    #[test]
    fn test_side_deck_insert_shifts() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        deck.add_to_side_deck(id("OGN-001"), &catalog).unwrap();
        deck.add_to_side_deck(id("OGN-002"), &catalog).unwrap();

        // Index past the packed prefix lands right after it.
        assert_eq!(deck.insert_into_side_deck(6, id("OGN-003"), &catalog).unwrap(), Placement::SideDeck(2));
        assert_eq!(deck.insert_into_side_deck(0, id("OGN-004"), &catalog).unwrap(), Placement::SideDeck(0));

        let cards: Vec<_> = deck.side_deck_cards().cloned().collect();
        assert_eq!(cards, vec![id("OGN-004"), id("OGN-001"), id("OGN-002"), id("OGN-003")]);
    }

    #[test]
    fn test_set_legend_returns_previous() {
        let catalog = catalog();
        let mut deck = DeckState::new();

        assert_eq!(deck.set_legend(id("OGN-251"), &catalog).unwrap(), None);
        let displaced = deck.set_legend(id("OGN-252"), &catalog).unwrap();
        assert_eq!(displaced, Some(Displaced::ReturnedToMainDeck(id("OGN-251"))));
        assert_eq!(deck.main_deck(), &[id("OGN-251")]);
        assert_eq!(deck.runes().color(RuneSlot::A), Some(Color::Order));
    }

    #[test]
    fn test_set_legend_discards_past_copy_limit() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        deck.set_legend(id("OGN-251"), &catalog).unwrap();
        for _ in 0..3 {
            deck.add_to_main_deck(id("OGN-251"), &catalog).unwrap();
        }

        let displaced = deck.set_legend(id("OGN-252"), &catalog).unwrap();
        assert_eq!(displaced, Some(Displaced::Discarded(id("OGN-251"))));
        assert_eq!(copies::count_copies("OGN-251", &deck), 3);
    }

    #[test]
    fn test_set_legend_wrong_type() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        assert!(matches!(
            deck.set_legend(id("OGN-290"), &catalog),
            Err(DeckError::WrongCardType { zone: Zone::Legend, .. })
        ));
        assert!(deck.legend().is_none());
    }

    #[test]
    fn test_set_champion_swaps() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        deck.set_champion(id("OGN-030"), &catalog).unwrap();

        let displaced = deck.set_champion(id("OGN-031"), &catalog).unwrap();
        assert_eq!(displaced, Some(Displaced::ReturnedToMainDeck(id("OGN-030"))));
        assert_eq!(deck.champion(), Some(&id("OGN-031")));

        assert!(matches!(
            deck.set_champion(id("OGN-001"), &catalog),
            Err(DeckError::WrongCardType { zone: Zone::Champion, .. })
        ));
    }

    #[test]
    fn test_set_champion_discards_when_full() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        deck.set_champion(id("OGN-030"), &catalog).unwrap();
        fill_main(&mut deck, &catalog, 40);

        let displaced = deck.set_champion(id("OGN-031"), &catalog).unwrap();
        assert_eq!(displaced, Some(Displaced::Discarded(id("OGN-030"))));
        assert_eq!(deck.main_deck_total(), 40);
    }

    #[test]
    fn test_set_champion_other_printing_keeps_old_copy() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        deck.set_champion(id("OGN-030"), &catalog).unwrap();

        let displaced = deck.set_champion(CardIdentifier::new("OGN-030", 1), &catalog).unwrap();
        assert_eq!(displaced, Some(Displaced::ReturnedToMainDeck(id("OGN-030"))));
        assert_eq!(deck.champion(), Some(&CardIdentifier::new("OGN-030", 1)));
        assert_eq!(deck.main_deck(), &[id("OGN-030")]);
        assert_eq!(copies::count_copies("OGN-030", &deck), 2);
    }

    #[test]
    fn test_set_champion_same_card_is_noop() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        deck.set_champion(id("OGN-030"), &catalog).unwrap();
        let before = deck.clone();

        assert_eq!(deck.set_champion(id("OGN-030"), &catalog).unwrap(), None);
        assert_eq!(deck, before);
    }

    #[test]
    fn test_set_champion_other_printing_at_copy_limit() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        deck.set_champion(id("OGN-030"), &catalog).unwrap();
        deck.add_to_main_deck(CardIdentifier::new("OGN-030", 1), &catalog).unwrap();
        deck.add_to_main_deck(CardIdentifier::new("OGN-030", 1), &catalog).unwrap();

        // Three copies already: the new printing takes the slot, the old one cannot stay.
        let displaced = deck.set_champion(CardIdentifier::new("OGN-030", 1), &catalog).unwrap();
        assert_eq!(displaced, Some(Displaced::Discarded(id("OGN-030"))));
        assert_eq!(copies::count_copies("OGN-030", &deck), 3);
    }

    #[test]
    fn test_battlefields() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        deck.add_battlefield(id("OGN-290"), &catalog).unwrap();

        assert!(matches!(
            deck.add_battlefield(id("OGN-290"), &catalog),
            Err(DeckError::DuplicateInZone { .. })
        ));
        // Another printing of the same field is a different identifier.
        deck.add_battlefield(CardIdentifier::new("OGN-290", 1), &catalog).unwrap();
        deck.add_battlefield(id("OGN-291"), &catalog).unwrap();

        assert!(matches!(
            deck.add_battlefield(id("OGN-292"), &catalog),
            Err(DeckError::ZoneFull { zone: Zone::Battlefields })
        ));
        assert!(matches!(
            deck.add_battlefield(id("OGN-001"), &catalog),
            Err(DeckError::WrongCardType { .. })
        ));
    }

    #[test]
    fn test_remove_champion_auto_fills() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        deck.add_to_main_deck(id("OGN-030"), &catalog).unwrap();
        deck.add_to_main_deck(id("OGN-001"), &catalog).unwrap();
        deck.add_to_main_deck(id("OGN-031"), &catalog).unwrap();

        assert_eq!(deck.remove_from_zone(Zone::Champion, 0, &catalog), Some(id("OGN-030")));
        assert_eq!(deck.champion(), Some(&id("OGN-031")));
        assert_eq!(deck.main_deck(), &[id("OGN-001")]);
    }

    #[test]
    fn test_auto_fill_pure() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        deck.restore_card(Zone::MainDeck, 0, id("OGN-001"));
        deck.restore_card(Zone::MainDeck, 1, id("OGN-031"));

        let filled = auto_fill_champion(deck.clone(), &catalog);
        assert_eq!(filled.champion(), Some(&id("OGN-031")));
        assert_eq!(filled.main_deck(), &[id("OGN-001")]);
        // Input untouched.
        assert!(deck.champion().is_none());

        let unchanged = auto_fill_champion(filled.clone(), &catalog);
        assert_eq!(unchanged, filled);
    }

    #[test]
    fn test_remove_out_of_range() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        assert_eq!(deck.remove_from_zone(Zone::MainDeck, 3, &catalog), None);
        assert_eq!(deck.remove_from_zone(Zone::Champion, 0, &catalog), None);
    }

    #[test]
    fn test_remove_legend_detaches_runes() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        deck.set_legend(id("OGN-251"), &catalog).unwrap();
        assert_eq!(deck.runes().rune_card(RuneSlot::A), Some(id("OGN-007")));

        deck.remove_from_zone(Zone::Legend, 0, &catalog);
        assert_eq!(deck.runes().rune_card(RuneSlot::A), None);
        assert_eq!(deck.runes().total(), 12);
    }

    #[test]
    fn test_set_variant() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        deck.add_battlefield(id("OGN-290"), &catalog).unwrap();

        let updated = deck.set_variant(Zone::Battlefields, 0, 5, &catalog).unwrap();
        assert_eq!(updated, Some(CardIdentifier::new("OGN-290", 1)));
        assert_eq!(deck.battlefields()[0], CardIdentifier::new("OGN-290", 1));

        deck.add_battlefield(id("OGN-290"), &catalog).unwrap();
        assert!(matches!(
            deck.set_variant(Zone::Battlefields, 1, 1, &catalog),
            Err(DeckError::DuplicateInZone { .. })
        ));
        assert_eq!(deck.set_variant(Zone::SideDeck, 0, 1, &catalog).unwrap(), None);
    }

    #[test]
    fn test_clear_keeps_rules() {
        let catalog = catalog();
        let rules = DeckRules::default().with_side_deck_slots(4);
        let mut deck = DeckState::with_rules(rules.clone());
        deck.add_to_side_deck(id("OGN-001"), &catalog).unwrap();
        deck.clear();
        assert!(deck.is_empty());
        assert_eq!(deck.rules(), &rules);
        assert_eq!(deck.side_deck().len(), 4);
    }
}
