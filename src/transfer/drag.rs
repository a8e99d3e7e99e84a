//! Drag/drop state machine.
//!
//! A drag takes its card out of the origin zone on pointer-down and
//! resolves it on pointer-up. Pointer-move only updates the cursor. Every
//! pointer-up commits a consistent deck: either the drop succeeds as a
//! whole, or the card goes back to where it came from.
//!
//! | Drop                                   | Result                                  |
//! |----------------------------------------|-----------------------------------------|
//! | Target accepts the card                | Inserted at the drop index              |
//! | Main/side deck target full             | Occupant swapped into the origin        |
//! | Target rejects the card                | Card restored to its origin             |
//! | Outside every zone                     | Restored (main-deck origin: discarded)  |
//! | Search result rejected anywhere        | In-flight copy dropped                  |

use tracing::{debug, warn};

use super::layout::{DropTarget, Point, ZoneLayout};
use crate::cards::{CardCatalog, CardIdentifier};
use crate::core::{DeckError, Result, TransferConfig, Zone};
use crate::zones::{DeckState, Placement};

/// Where a dragged card came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragSource {
    Champion,
    Legend,
    SideDeck(usize),
    Battlefield(usize),
    MainDeck(usize),
    /// A search result; the card was never in the deck.
    Search,
}

impl DragSource {
    /// Origin zone, `None` for search results.
    #[must_use]
    pub fn zone(self) -> Option<Zone> {
        match self {
            DragSource::Champion => Some(Zone::Champion),
            DragSource::Legend => Some(Zone::Legend),
            DragSource::SideDeck(_) => Some(Zone::SideDeck),
            DragSource::Battlefield(_) => Some(Zone::Battlefields),
            DragSource::MainDeck(_) => Some(Zone::MainDeck),
            DragSource::Search => None,
        }
    }

    /// Position within the origin zone.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            DragSource::SideDeck(i) | DragSource::Battlefield(i) | DragSource::MainDeck(i) => i,
            DragSource::Champion | DragSource::Legend | DragSource::Search => 0,
        }
    }
}

/// Engine state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        card: CardIdentifier,
        source: DragSource,
        cursor: Point,
    },
}

/// Result of a pointer-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing was in flight.
    Idle,
    /// The card was placed.
    Placed(Placement),
    /// The card was placed and the target's occupant moved to the origin.
    Swapped { placed: Placement, evicted: CardIdentifier },
    /// The card went back to its origin. `reason` is `None` for a miss.
    Restored { reason: Option<DeckError> },
    /// The card left the deck (main-deck miss or rejected search drop).
    Discarded { reason: Option<DeckError> },
}

impl DropOutcome {
    /// Whether the deck changed shape.
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, DropOutcome::Placed(_) | DropOutcome::Swapped { .. })
    }
}

/// Drag/drop engine for one deck view.
///
/// ## Example
///
/// ```
/// use rift_deck::cards::{CardIdentifier, CardMetadata, CardRegistry, CardType};
/// use rift_deck::transfer::{DragEngine, DragSource, DropOutcome, DropTarget, Point};
/// use rift_deck::zones::{DeckState, Placement};
///
/// let mut catalog = CardRegistry::new();
/// catalog.register(CardMetadata::new("OGN-001", "Scorcher", CardType::Unit));
///
/// let mut deck = DeckState::new();
/// deck.add_to_main_deck(CardIdentifier::base("OGN-001"), &catalog).unwrap();
///
/// let mut engine = DragEngine::new();
/// engine.pointer_down(&mut deck, DragSource::MainDeck(0), Point::default()).unwrap();
/// assert!(deck.main_deck().is_empty());
///
/// let outcome = engine.drop_on(&mut deck, DropTarget::SideDeckSlot(0), &catalog);
/// assert_eq!(outcome, DropOutcome::Placed(Placement::SideDeck(0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DragEngine {
    state: DragState,
    read_only: bool,
    config: TransferConfig,
}

impl DragEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: TransferConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// The in-flight card and its cursor.
    #[must_use]
    pub fn in_flight(&self) -> Option<(&CardIdentifier, Point)> {
        match &self.state {
            DragState::Dragging { card, cursor, .. } => Some((card, *cursor)),
            DragState::Idle => None,
        }
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Toggle read-only mode. An in-flight drag still resolves, always by
    /// restoring its card.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Start dragging the card at `source`, taking it out of the deck.
    ///
    /// Returns `false` for an empty slot or while another drag is in
    /// flight.
    pub fn pointer_down(&mut self, deck: &mut DeckState, source: DragSource, cursor: Point) -> Result<bool> {
        if self.read_only {
            return Err(DeckError::ReadOnly);
        }
        if self.is_dragging() {
            return Ok(false);
        }
        let Some(zone) = source.zone() else {
            return Ok(false);
        };
        let Some(card) = deck.take_card(zone, source.index()) else {
            return Ok(false);
        };

        debug!(card = %card, ?source, "drag started");
        self.state = DragState::Dragging { card, source, cursor };
        Ok(true)
    }

    /// Start dragging a copy of a search result.
    pub fn pointer_down_search(&mut self, card: CardIdentifier, cursor: Point) -> Result<bool> {
        if self.read_only {
            return Err(DeckError::ReadOnly);
        }
        if self.is_dragging() {
            return Ok(false);
        }
        debug!(card = %card, "drag started from search");
        self.state = DragState::Dragging {
            card,
            source: DragSource::Search,
            cursor,
        };
        Ok(true)
    }

    /// Track the pointer. Never touches the deck.
    pub fn pointer_move(&mut self, position: Point) {
        if let DragState::Dragging { cursor, .. } = &mut self.state {
            *cursor = position;
        }
    }

    /// Resolve the drop at `position` through `layout`.
    pub fn pointer_up(
        &mut self,
        deck: &mut DeckState,
        layout: &ZoneLayout,
        position: Point,
        catalog: &dyn CardCatalog,
    ) -> DropOutcome {
        self.drop_on(deck, layout.hit_test(position), catalog)
    }

    /// Resolve the drop on an already hit-tested target.
    pub fn drop_on(&mut self, deck: &mut DeckState, target: DropTarget, catalog: &dyn CardCatalog) -> DropOutcome {
        let DragState::Dragging { card, source, .. } = std::mem::take(&mut self.state) else {
            return DropOutcome::Idle;
        };

        let outcome = if self.read_only {
            Self::give_back(deck, card, source, Some(DeckError::ReadOnly))
        } else {
            match target.zone() {
                None => self.miss(deck, card, source),
                Some(zone) => Self::resolve(deck, card, source, zone, target, catalog),
            }
        };

        deck.settle(catalog);
        debug!(?target, ?outcome, "drop resolved");
        outcome
    }

    /// Abandon the drag (component teardown), restoring the card.
    pub fn cancel(&mut self, deck: &mut DeckState, catalog: &dyn CardCatalog) {
        if let DragState::Dragging { card, source, .. } = std::mem::take(&mut self.state) {
            Self::give_back(deck, card, source, None);
            deck.settle(catalog);
        }
    }

    fn miss(&self, deck: &mut DeckState, card: CardIdentifier, source: DragSource) -> DropOutcome {
        if matches!(source, DragSource::MainDeck(_)) && self.config.discard_main_deck_on_miss {
            debug!(card = %card, "main-deck card dropped outside the deck");
            return DropOutcome::Discarded { reason: None };
        }
        Self::give_back(deck, card, source, None)
    }

    fn give_back(deck: &mut DeckState, card: CardIdentifier, source: DragSource, reason: Option<DeckError>) -> DropOutcome {
        match source.zone() {
            Some(zone) => {
                deck.restore_card(zone, source.index(), card);
                DropOutcome::Restored { reason }
            }
            None => DropOutcome::Discarded { reason },
        }
    }

    fn resolve(
        deck: &mut DeckState,
        card: CardIdentifier,
        source: DragSource,
        zone: Zone,
        target: DropTarget,
        catalog: &dyn CardCatalog,
    ) -> DropOutcome {
        let mut next = deck.clone();
        let substitute = source != DragSource::Champion;
        let result = match Self::place(&mut next, zone, target.index(), card.clone(), substitute, catalog) {
            Err(DeckError::ZoneFull { .. })
                if matches!(target, DropTarget::MainDeckSlot(_) | DropTarget::SideDeckSlot(_))
                    && source.zone() != Some(zone) =>
            {
                Self::swap(&mut next, zone, target.index(), card.clone(), source, catalog)
            }
            other => other.map(DropOutcome::Placed),
        };

        match result {
            Ok(outcome) => {
                *deck = next;
                outcome
            }
            Err(reason) => {
                warn!(card = %card, %reason, "drop rejected");
                Self::give_back(deck, card, source, Some(reason))
            }
        }
    }

    /// Guarded insertion into any zone.
    fn place(
        deck: &mut DeckState,
        zone: Zone,
        index: usize,
        card: CardIdentifier,
        substitute: bool,
        catalog: &dyn CardCatalog,
    ) -> Result<Placement> {
        match zone {
            Zone::MainDeck | Zone::SideDeck => deck.insert_deck_card(zone, index, card, catalog, substitute),
            Zone::Champion => deck.set_champion(card, catalog).map(|_| Placement::Champion),
            Zone::Legend => deck.set_legend(card, catalog).map(|_| Placement::Legend),
            Zone::Battlefields => deck.insert_battlefield(index, card, catalog).map(Placement::Battlefield),
        }
    }

    /// Evict the occupant at `index` into the origin, then place `card`.
    fn swap(
        deck: &mut DeckState,
        zone: Zone,
        index: usize,
        card: CardIdentifier,
        source: DragSource,
        catalog: &dyn CardCatalog,
    ) -> Result<DropOutcome> {
        let full = DeckError::ZoneFull { zone };
        let Some(origin) = source.zone() else {
            return Err(full);
        };
        let Some(evicted) = deck.take_card(zone, index) else {
            return Err(full);
        };

        Self::place(deck, origin, source.index(), evicted.clone(), true, catalog)?;
        let placed = Self::place(deck, zone, index, card, source != DragSource::Champion, catalog)?;

        debug!(evicted = %evicted, %origin, "swapped into origin");
        Ok(DropOutcome::Swapped { placed, evicted })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardMetadata, CardRegistry, CardSuper, CardType};

    fn catalog() -> CardRegistry {
        let mut registry = CardRegistry::new();
        for n in 1..=20 {
            registry.register(CardMetadata::new(format!("OGN-{n:03}"), format!("Unit {n}"), CardType::Unit));
        }
        registry.register(CardMetadata::new("OGN-030", "Jinx", CardType::Unit).with_super(CardSuper::Champion));
        registry.register(CardMetadata::new("OGN-251", "Legend", CardType::Legend));
        registry.register(CardMetadata::new("OGN-290", "Field", CardType::Battlefield));
        registry
    }

    fn id(base: &str) -> CardIdentifier {
        CardIdentifier::base(base)
    }

    #[test]
    fn test_idle_drop() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        let mut engine = DragEngine::new();
        assert_eq!(engine.drop_on(&mut deck, DropTarget::GridArea, &catalog), DropOutcome::Idle);
    }

    #[test]
    fn test_empty_slot_does_not_start() {
        let mut deck = DeckState::new();
        let mut engine = DragEngine::new();
        assert!(!engine.pointer_down(&mut deck, DragSource::MainDeck(0), Point::default()).unwrap());
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_move_only_updates_cursor() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        deck.add_to_main_deck(id("OGN-001"), &catalog).unwrap();

        let mut engine = DragEngine::new();
        engine.pointer_down(&mut deck, DragSource::MainDeck(0), Point::default()).unwrap();
        let snapshot = deck.clone();
        engine.pointer_move(Point::new(40.0, 12.0));

        assert_eq!(deck, snapshot);
        assert_eq!(engine.in_flight().map(|(_, p)| p), Some(Point::new(40.0, 12.0)));
    }

    #[test]
    fn test_wrong_type_restores() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        deck.add_battlefield(id("OGN-290"), &catalog).unwrap();

        let mut engine = DragEngine::new();
        engine.pointer_down(&mut deck, DragSource::Battlefield(0), Point::default()).unwrap();
        let outcome = engine.drop_on(&mut deck, DropTarget::LegendSlot, &catalog);

        assert!(matches!(
            outcome,
            DropOutcome::Restored { reason: Some(DeckError::WrongCardType { .. }) }
        ));
        assert_eq!(deck.battlefields(), &[id("OGN-290")]);
        assert!(deck.legend().is_none());
    }

    #[test]
    fn test_search_rejection_discards() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        let mut engine = DragEngine::new();
        engine.pointer_down_search(id("OGN-290"), Point::default()).unwrap();

        let outcome = engine.drop_on(&mut deck, DropTarget::MainDeckSlot(0), &catalog);
        assert!(matches!(outcome, DropOutcome::Discarded { reason: Some(_) }));
        assert!(deck.is_empty());
    }

    #[test]
    fn test_read_only_refuses_and_restores() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        deck.add_to_main_deck(id("OGN-001"), &catalog).unwrap();

        let mut engine = DragEngine::new();
        engine.pointer_down(&mut deck, DragSource::MainDeck(0), Point::default()).unwrap();
        engine.set_read_only(true);

        let outcome = engine.drop_on(&mut deck, DropTarget::SideDeckSlot(0), &catalog);
        assert_eq!(outcome, DropOutcome::Restored { reason: Some(DeckError::ReadOnly) });
        assert_eq!(deck.main_deck(), &[id("OGN-001")]);

        assert!(matches!(
            engine.pointer_down(&mut deck, DragSource::MainDeck(0), Point::default()),
            Err(DeckError::ReadOnly)
        ));
    }

    #[test]
    fn test_cancel_restores() {
        let catalog = catalog();
        let mut deck = DeckState::new();
        deck.add_to_side_deck(id("OGN-001"), &catalog).unwrap();
        deck.add_to_side_deck(id("OGN-002"), &catalog).unwrap();

        let mut engine = DragEngine::new();
        engine.pointer_down(&mut deck, DragSource::SideDeck(0), Point::default()).unwrap();
        engine.cancel(&mut deck, &catalog);

        let cards: Vec<_> = deck.side_deck_cards().cloned().collect();
        assert_eq!(cards, vec![id("OGN-001"), id("OGN-002")]);
        assert!(!engine.is_dragging());
    }
}
