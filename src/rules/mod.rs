//! Deck legality rules.
//!
//! The validator is a pure function of the deck and the catalog. It never
//! mutates the deck and reports every broken rule in one pass.

pub mod validator;

pub use validator::{validate, validate_against, DeckRule, RuleCheck, ValidationReport};
