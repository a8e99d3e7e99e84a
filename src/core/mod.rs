//! Core types shared by every other module: deck rules, zones, errors.

pub mod config;
pub mod error;

pub use config::{DeckRules, TransferConfig, Zone};
pub use error::{DeckError, Result};
