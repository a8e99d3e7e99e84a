//! Composite card identifiers.
//!
//! A card in a deck is named by its base id (`SET-NUMBER`, e.g. `OGN-249`)
//! plus the printing it uses. The canonical text form appends the 1-based
//! printing number: `OGN-249-1` is the default printing, `OGN-249-3` the
//! third. Parsing also accepts the bare base id, which means printing 1.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::{DeckError, Result};

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]+-\d+)(?:-(\d+))?$").expect("identifier pattern"));

/// A card base id plus the printing it uses.
///
/// ## Example
///
/// ```
/// use rift_deck::cards::CardIdentifier;
///
/// let id: CardIdentifier = "OGN-249-2".parse().unwrap();
/// assert_eq!(id.base_id(), "OGN-249");
/// assert_eq!(id.variant_index(), 1);
/// assert_eq!(id.to_string(), "OGN-249-2");
///
/// let bare: CardIdentifier = "OGN-249".parse().unwrap();
/// assert_eq!(bare.variant_index(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardIdentifier {
    base_id: String,
    variant_index: usize,
}

impl CardIdentifier {
    /// Build an identifier from a base id and a 0-based printing index.
    #[must_use]
    pub fn new(base_id: impl Into<String>, variant_index: usize) -> Self {
        Self {
            base_id: base_id.into(),
            variant_index,
        }
    }

    /// Identifier for the default printing.
    #[must_use]
    pub fn base(base_id: impl Into<String>) -> Self {
        Self::new(base_id, 0)
    }

    /// Parse `SET-NUM` or `SET-NUM-N`.
    pub fn parse(text: &str) -> Result<Self> {
        let caps = IDENTIFIER
            .captures(text.trim())
            .ok_or_else(|| DeckError::MalformedIdentifier(text.to_string()))?;

        let base_id = caps[1].to_string();
        let variant_index = match caps.get(2) {
            None => 0,
            Some(m) => {
                let number: usize = m
                    .as_str()
                    .parse()
                    .map_err(|_| DeckError::MalformedIdentifier(text.to_string()))?;
                // Printings are 1-based on the wire.
                number
                    .checked_sub(1)
                    .ok_or_else(|| DeckError::MalformedIdentifier(text.to_string()))?
            }
        };

        Ok(Self { base_id, variant_index })
    }

    /// The `SET-NUMBER` part.
    #[must_use]
    pub fn base_id(&self) -> &str {
        &self.base_id
    }

    /// 0-based printing index.
    #[must_use]
    pub fn variant_index(&self) -> usize {
        self.variant_index
    }

    /// Same card, another printing.
    #[must_use]
    pub fn with_variant(&self, variant_index: usize) -> Self {
        Self::new(self.base_id.clone(), variant_index)
    }

    /// Set code (`OGN` in `OGN-249`).
    #[must_use]
    pub fn set_code(&self) -> &str {
        self.base_id.split('-').next().unwrap_or_default()
    }

    /// Collector number text (`249` in `OGN-249`).
    #[must_use]
    pub fn number(&self) -> &str {
        self.base_id.split('-').nth(1).unwrap_or_default()
    }

    /// Whether both identifiers name the same base card.
    #[must_use]
    pub fn same_card(&self, other: &CardIdentifier) -> bool {
        self.base_id == other.base_id
    }
}

impl std::fmt::Display for CardIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.base_id, self.variant_index + 1)
    }
}

impl FromStr for CardIdentifier {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CardIdentifier {
    type Error = DeckError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CardIdentifier> for String {
    fn from(id: CardIdentifier) -> Self {
        id.to_string()
    }
}
