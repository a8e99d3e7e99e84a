//! Card metadata - static catalog data.
//!
//! `CardMetadata` holds the unchanging properties of a base card: its
//! type, colors, tags, stats and the list of printings. Which printing a
//! deck uses is part of the `CardIdentifier`, not the metadata.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Unit,
    Spell,
    Legend,
    Battlefield,
    Gear,
    Rune,
    /// Any type the catalog carries that the deck rules don't distinguish.
    Other,
}

impl CardType {
    /// Map catalog text to a type.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Unit" => CardType::Unit,
            "Spell" => CardType::Spell,
            "Legend" => CardType::Legend,
            "Battlefield" => CardType::Battlefield,
            "Gear" => CardType::Gear,
            "Rune" => CardType::Rune,
            _ => CardType::Other,
        }
    }

    /// Cards that can sit in the main or side deck.
    #[must_use]
    pub fn is_deckable(self) -> bool {
        !matches!(self, CardType::Battlefield | CardType::Rune)
    }
}

/// Super type (the line above the card type).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSuper {
    Champion,
    Token,
    Signature,
    Basic,
    Other,
}

impl CardSuper {
    /// Map catalog text to a super type.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Champion" => CardSuper::Champion,
            "Token" => CardSuper::Token,
            "Signature" => CardSuper::Signature,
            "Basic" => CardSuper::Basic,
            _ => CardSuper::Other,
        }
    }
}

/// Domain color. Every legend carries up to two, and each color has one rune.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Mind,
    Order,
    Body,
    Calm,
    Chaos,
    Fury,
}

impl Color {
    /// All colors in catalog order.
    pub const ALL: [Color; 6] = [
        Color::Mind,
        Color::Order,
        Color::Body,
        Color::Calm,
        Color::Chaos,
        Color::Fury,
    ];

    /// Map catalog text to a color.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Color::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Catalog name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Color::Mind => "Mind",
            Color::Order => "Order",
            Color::Body => "Body",
            Color::Calm => "Calm",
            Color::Chaos => "Chaos",
            Color::Fury => "Fury",
        }
    }

    /// Base id of this color's rune card.
    #[must_use]
    pub fn rune_base_id(self) -> &'static str {
        match self {
            Color::Mind => "OGN-089",
            Color::Order => "OGN-214",
            Color::Body => "OGN-126",
            Color::Calm => "OGN-042",
            Color::Chaos => "OGN-166",
            Color::Fury => "OGN-007",
        }
    }

    /// Reverse of `rune_base_id`.
    #[must_use]
    pub fn for_rune(base_id: &str) -> Option<Self> {
        Color::ALL.into_iter().find(|c| c.rune_base_id() == base_id)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Card colors. At most two in practice.
pub type Colors = SmallVec<[Color; 2]>;

/// Static card data keyed by base id.
///
/// ## Example
///
/// ```
/// use rift_deck::cards::{CardMetadata, CardType, CardSuper, Color};
///
/// let jinx = CardMetadata::new("OGN-030", "Jinx, Loose Cannon", CardType::Unit)
///     .with_super(CardSuper::Champion)
///     .with_colors([Color::Fury])
///     .with_tags(["Jinx"]);
///
/// assert!(jinx.is_champion());
/// assert!(jinx.has_tag("Jinx"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardMetadata {
    /// `SET-NUMBER` of the default printing.
    pub base_id: String,

    /// Card name.
    pub name: String,

    /// Rules text.
    pub description: Option<String>,

    pub card_type: CardType,

    pub super_type: Option<CardSuper>,

    /// Ordered colors (legends use the order to assign runes A and B).
    pub colors: Colors,

    /// Tags (champion and legend names, factions, ...).
    pub tags: Vec<String>,

    pub energy: Option<u32>,
    pub power: Option<u32>,
    pub might: Option<u32>,

    /// Printing names, default printing first.
    pub variants: Vec<String>,

    /// Image URL per printing, same order as `variants`.
    pub variant_images: Vec<String>,

    /// Release date of the default printing's set (ISO-8601 text).
    pub release_date: Option<String>,
}

impl CardMetadata {
    /// Create metadata with a single printing named after the base id.
    #[must_use]
    pub fn new(base_id: impl Into<String>, name: impl Into<String>, card_type: CardType) -> Self {
        let base_id = base_id.into();
        Self {
            variants: vec![base_id.clone()],
            variant_images: Vec::new(),
            base_id,
            name: name.into(),
            description: None,
            card_type,
            super_type: None,
            colors: Colors::new(),
            tags: Vec::new(),
            energy: None,
            power: None,
            might: None,
            release_date: None,
        }
    }

    #[must_use]
    pub fn with_super(mut self, super_type: CardSuper) -> Self {
        self.super_type = Some(super_type);
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the printing list.
    #[must_use]
    pub fn with_variants<S: Into<String>>(mut self, variants: impl IntoIterator<Item = S>) -> Self {
        self.variants = variants.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_stats(mut self, energy: Option<u32>, power: Option<u32>, might: Option<u32>) -> Self {
        self.energy = energy;
        self.power = power;
        self.might = might;
        self
    }

    #[must_use]
    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = Some(date.into());
        self
    }

    /// Super type is Champion.
    #[must_use]
    pub fn is_champion(&self) -> bool {
        self.super_type == Some(CardSuper::Champion)
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether any tag is shared with `other`.
    #[must_use]
    pub fn shares_tag(&self, other: &CardMetadata) -> bool {
        self.tags.iter().any(|t| other.has_tag(t))
    }

    /// Highest valid printing index.
    #[must_use]
    pub fn max_variant_index(&self) -> usize {
        self.variants.len().saturating_sub(1)
    }

    /// Clamp a printing index into this card's printing list.
    #[must_use]
    pub fn clamp_variant(&self, variant_index: usize) -> usize {
        variant_index.min(self.max_variant_index())
    }

    /// Image URL of a printing, if the catalog has one.
    #[must_use]
    pub fn image_for(&self, variant_index: usize) -> Option<&str> {
        self.variant_images
            .get(variant_index)
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }
}
