//! Deck zones.
//!
//! A deck has five zones: main deck, side deck, champion slot, legend slot
//! and battlefields. Runes are derived from the legend rather than stored
//! as cards.
//!
//! ## Key Types
//!
//! - `DeckState`: The zones plus rune split, changed only by guarded operations
//! - `Placement`: Where an inserted card actually landed
//! - `Displaced`: Fate of a card pushed out of a single-card slot
//! - `RuneSplit`: Rune counts and printings attached to the legend's colors

pub mod copies;
pub mod deck;
pub mod runes;

pub use copies::{check_insertion, count_copies};
pub use deck::{auto_fill_champion, DeckState, Displaced, Placement};
pub use runes::{RuneSlot, RuneSplit};

pub use crate::core::Zone;
