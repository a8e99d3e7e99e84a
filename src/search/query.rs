//! Catalog search filters.
//!
//! A `CardQuery` is a conjunction of optional filters, built up with
//! `with_*` methods. An empty query matches every card.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::cards::{CardMetadata, CardRegistry, CardSuper, CardType, Color};

/// Search filters for the card browser.
///
/// ## Example
///
/// ```
/// use rift_deck::cards::{CardMetadata, CardRegistry, CardType, Color};
/// use rift_deck::search::{search, CardQuery};
///
/// let mut catalog = CardRegistry::new();
/// catalog.register(
///     CardMetadata::new("OGN-001", "Blazing Scorcher", CardType::Unit)
///         .with_colors([Color::Fury])
///         .with_stats(Some(5), None, Some(5)),
/// );
/// catalog.register(CardMetadata::new("OGN-002", "Calm Rune", CardType::Rune));
///
/// let query = CardQuery::new().with_text("scorch").with_energy(4..=6);
/// let found = search(&catalog, &query);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].base_id, "OGN-001");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardQuery {
    /// Case-insensitive substring of the name or rules text.
    pub text: Option<String>,
    /// The card must carry at least one of these colors.
    pub colors: Vec<Color>,
    pub card_type: Option<CardType>,
    pub super_type: Option<CardSuper>,
    pub energy: RangeInclusive<u32>,
    pub might: RangeInclusive<u32>,
    pub power: RangeInclusive<u32>,
}

impl Default for CardQuery {
    fn default() -> Self {
        Self {
            text: None,
            colors: Vec::new(),
            card_type: None,
            super_type: None,
            energy: 0..=12,
            might: 0..=10,
            power: 0..=4,
        }
    }
}

impl CardQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = (!text.trim().is_empty()).then_some(text);
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_type(mut self, card_type: CardType) -> Self {
        self.card_type = Some(card_type);
        self
    }

    #[must_use]
    pub fn with_super(mut self, super_type: CardSuper) -> Self {
        self.super_type = Some(super_type);
        self
    }

    #[must_use]
    pub fn with_energy(mut self, range: RangeInclusive<u32>) -> Self {
        self.energy = range;
        self
    }

    #[must_use]
    pub fn with_might(mut self, range: RangeInclusive<u32>) -> Self {
        self.might = range;
        self
    }

    #[must_use]
    pub fn with_power(mut self, range: RangeInclusive<u32>) -> Self {
        self.power = range;
        self
    }

    /// Whether `card` passes every filter.
    #[must_use]
    pub fn matches(&self, card: &CardMetadata) -> bool {
        if let Some(text) = &self.text {
            let needle = text.trim().to_lowercase();
            let in_name = card.name.to_lowercase().contains(&needle);
            let in_text = card
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
            if !in_name && !in_text {
                return false;
            }
        }

        if !self.colors.is_empty() && !card.colors.iter().any(|c| self.colors.contains(c)) {
            return false;
        }
        if self.card_type.is_some_and(|t| t != card.card_type) {
            return false;
        }
        if self.super_type.is_some() && self.super_type != card.super_type {
            return false;
        }

        // Stats only filter cards that have them.
        let in_range = |stat: Option<u32>, range: &RangeInclusive<u32>| stat.is_none_or(|v| range.contains(&v));
        in_range(card.energy, &self.energy) && in_range(card.might, &self.might) && in_range(card.power, &self.power)
    }
}

/// Cards matching `query`, oldest release first, then by base id.
///
/// Cards without a release date come last.
#[must_use]
pub fn search<'a>(catalog: &'a CardRegistry, query: &CardQuery) -> Vec<&'a CardMetadata> {
    let mut found: Vec<&CardMetadata> = catalog.iter().filter(|card| query.matches(card)).collect();
    found.sort_by(|a, b| {
        let date = |c: &CardMetadata| (c.release_date.is_none(), c.release_date.clone());
        date(a).cmp(&date(b)).then_with(|| a.base_id.cmp(&b.base_id))
    });
    found
}
