//! Deck serialization.
//!
//! ## Key Types
//!
//! - `DeckCode`: Plain and compact text forms of a deck
//! - `ImportOutcome`: Decoded deck plus skipped-token diagnostics
//! - `DeckRecord`: Save/load shape with camelCase fields
//! - `LoadTransaction`: Hydrates a `DeckRecord` into a `DeckState`
//!
//! Every form goes through the flat list (`to_flat_list` / `from_flat_list`),
//! whose order is the wire format.

pub mod compact;
pub mod deck_code;
pub mod flat;
pub mod record;

pub use compact::{
    decode_compact, decode_run_length, encode_compact, encode_run_length, sniff_format, CodeFormat, ExpandedCode,
};
pub use deck_code::{export_deck, import_deck, DeckCode};
pub use flat::{from_flat_list, from_flat_list_with_rules, to_flat_list, ImportDiagnostic, ImportOutcome};
pub use record::{DeckRecord, HydratedDeck, LoadTransaction};
