//! Card catalog for metadata lookup.
//!
//! The engine only ever asks one question of the catalog: "what is the
//! card with this base id?". `CardCatalog` is that seam. `CardRegistry`
//! is the in-memory implementation, loadable from the simplified card file
//! produced by the card-extraction script.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::{info, warn};

use super::definition::{CardMetadata, CardSuper, CardType, Color};
use crate::core::Result;

/// Read-only card lookup by base id.
///
/// An absent card is always treated as "unknown card", never a crash.
pub trait CardCatalog {
    /// Metadata for `base_id` (`SET-NUMBER`).
    fn get_card_by_base_id(&self, base_id: &str) -> Option<&CardMetadata>;
}

/// In-memory catalog.
///
/// ## Example
///
/// ```
/// use rift_deck::cards::{CardCatalog, CardMetadata, CardRegistry, CardType};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardMetadata::new("OGN-001", "Blazing Scorcher", CardType::Unit));
///
/// let found = registry.get_card_by_base_id("OGN-001").unwrap();
/// assert_eq!(found.name, "Blazing Scorcher");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<String, CardMetadata>,
}

/// One entry of the simplified card file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCard {
    name: Option<String>,
    description: Option<String>,
    variant_number: Option<String>,
    #[serde(default)]
    variants: Vec<String>,
    #[serde(default)]
    variant_images: Vec<String>,
    #[serde(rename = "type")]
    card_type: Option<String>,
    #[serde(rename = "super")]
    super_type: Option<String>,
    energy: Option<u32>,
    power: Option<u32>,
    might: Option<u32>,
    #[serde(default)]
    colors: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    release_date: Option<String>,
}

impl RawCard {
    fn into_metadata(self) -> Option<CardMetadata> {
        let base_id = self.variant_number?;

        let colors = self
            .colors
            .iter()
            .filter_map(|name| {
                let color = Color::from_name(name);
                if color.is_none() {
                    warn!(card = %base_id, color = %name, "ignoring unknown color");
                }
                color
            })
            .collect();

        let variants = if self.variants.is_empty() {
            vec![base_id.clone()]
        } else {
            self.variants
        };

        Some(CardMetadata {
            name: self.name.unwrap_or_else(|| base_id.clone()),
            description: self.description,
            card_type: self
                .card_type
                .as_deref()
                .map_or(CardType::Other, CardType::from_name),
            super_type: self.super_type.as_deref().map(CardSuper::from_name),
            colors,
            tags: self.tags,
            energy: self.energy,
            power: self.power,
            might: self.might,
            variants,
            variant_images: self.variant_images,
            release_date: self.release_date.filter(|d| !d.is_empty()),
            base_id,
        })
    }
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the simplified card file (a JSON array of card objects).
    ///
    /// Cards without a `variantNumber` cannot be addressed by a deck and
    /// are skipped.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<RawCard> = serde_json::from_str(json)?;
        let total = raw.len();

        let mut registry = Self::new();
        for card in raw {
            let name = card.name.clone();
            match card.into_metadata() {
                Some(meta) => registry.register(meta),
                None => warn!(name = ?name, "skipping card without a variant number"),
            }
        }

        info!(loaded = registry.len(), total, "loaded card catalog");
        Ok(registry)
    }

    /// Register a card, replacing any previous card with the same base id.
    pub fn register(&mut self, card: CardMetadata) {
        if let Some(previous) = self.cards.insert(card.base_id.clone(), card) {
            warn!(card = %previous.base_id, "replaced duplicate catalog entry");
        }
    }

    /// Get card metadata by base id.
    #[must_use]
    pub fn get(&self, base_id: &str) -> Option<&CardMetadata> {
        self.cards.get(base_id)
    }

    /// Check if a base id is registered.
    #[must_use]
    pub fn contains(&self, base_id: &str) -> bool {
        self.cards.contains_key(base_id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &CardMetadata> {
        self.cards.values()
    }
}

impl CardCatalog for CardRegistry {
    fn get_card_by_base_id(&self, base_id: &str) -> Option<&CardMetadata> {
        self.get(base_id)
    }
}
