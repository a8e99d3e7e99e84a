//! # rift-deck
//!
//! Deck composition engine for a trading-card deckbuilder: the zone model,
//! drag/drop transfers, legality validation and deck codes.
//!
//! ## Design Principles
//!
//! 1. **Guarded Mutation**: `DeckState` only changes through operations
//!    that check capacity, card type and the copy limit first. A rejected
//!    operation leaves the deck exactly as it was.
//!
//! 2. **Catalog as a Seam**: The engine never owns card data. Everything
//!    that needs a card's type, colors or printings asks a `CardCatalog`.
//!
//! 3. **One Wire Order**: Plain codes, compact codes and their round trips
//!    all go through the same flat list.
//!
//! ## Modules
//!
//! - `core`: Deck rules, editor configuration, zones and errors
//! - `cards`: Card identifiers, metadata and the catalog
//! - `zones`: The deck model, copy limits and the rune split
//! - `transfer`: Drag/drop state machine and click/tap gestures
//! - `rules`: Deck legality validation
//! - `codec`: Deck codes, flat lists and saved records
//! - `search`: Catalog search for the card browser

pub mod core;
pub mod cards;
pub mod zones;
pub mod transfer;
pub mod rules;
pub mod codec;
pub mod search;

// Re-export commonly used types
pub use crate::core::{DeckError, DeckRules, Result, TransferConfig, Zone};

pub use crate::cards::{CardCatalog, CardIdentifier, CardMetadata, CardRegistry, CardSuper, CardType, Color};

pub use crate::zones::{auto_fill_champion, DeckState, Displaced, Placement, RuneSlot};

pub use crate::transfer::{DragEngine, DragSource, DropOutcome, DropTarget, GestureRouter, TapTracker, ZoneLayout};

pub use crate::rules::{validate, ValidationReport};

pub use crate::codec::{export_deck, import_deck, DeckCode, DeckRecord, ImportOutcome, LoadTransaction};

pub use crate::search::{search, CardQuery};
