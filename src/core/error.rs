//! Error taxonomy for deck mutations, identifier parsing and import.
//!
//! Every variant is a local, recoverable condition: a failed operation
//! leaves the deck exactly as it was and hands the reason back to the
//! caller, who turns it into a transient notification.

use thiserror::Error;

use super::config::Zone;

/// Errors raised by the deck engine.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum DeckError {
    /// Destination zone has no free slot.
    #[error("{zone} is full")]
    ZoneFull { zone: Zone },

    /// Adding the card would push its base id past the copy limit.
    #[error("max copies: {base_id} is limited to {limit} copies")]
    CopyLimitExceeded { base_id: String, limit: usize },

    /// The zone does not accept this kind of card.
    #[error("{card} cannot be placed in {zone}")]
    WrongCardType { card: String, zone: Zone },

    /// The exact identifier is already present in a zone that forbids duplicates.
    #[error("{card} is already in the battlefields")]
    DuplicateInZone { card: String },

    /// The text is not a card identifier.
    #[error("malformed card identifier: {0:?}")]
    MalformedIdentifier(String),

    /// The identifier parsed but the catalog has no such card.
    #[error("unknown card: {0}")]
    UnknownCard(String),

    /// A deck code yielded no usable card.
    #[error("invalid deck code: {0}")]
    ImportFormatInvalid(String),

    /// The identifier cannot be represented in the compact code.
    #[error("{0} does not fit the compact deck code")]
    NumberOutOfRange(String),

    /// The editor is read-only.
    #[error("deck is read-only")]
    ReadOnly,

    /// A catalog file or saved deck could not be parsed.
    #[error("malformed JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for DeckError {
    fn from(err: serde_json::Error) -> Self {
        DeckError::Json(err.to_string())
    }
}

impl DeckError {
    /// Whether the error came from a rejected zone mutation rather than
    /// from decoding.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            DeckError::ZoneFull { .. }
                | DeckError::CopyLimitExceeded { .. }
                | DeckError::WrongCardType { .. }
                | DeckError::DuplicateInZone { .. }
                | DeckError::ReadOnly
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_zone() {
        let err = DeckError::ZoneFull { zone: Zone::SideDeck };
        assert_eq!(err.to_string(), "side deck is full");

        let err = DeckError::CopyLimitExceeded {
            base_id: "OGN-010".to_string(),
            limit: 3,
        };
        assert!(err.to_string().starts_with("max copies"));
    }

    #[test]
    fn test_rejection_classification() {
        assert!(DeckError::ReadOnly.is_rejection());
        assert!(DeckError::DuplicateInZone { card: "OGN-300-1".into() }.is_rejection());
        assert!(!DeckError::UnknownCard("OGN-999".into()).is_rejection());
        assert!(!DeckError::MalformedIdentifier("??".into()).is_rejection());
    }
}
