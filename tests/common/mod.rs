//! Shared fixture catalog and deck builders for integration tests.

#![allow(dead_code)]

use rift_deck::cards::{CardIdentifier, CardMetadata, CardRegistry, CardSuper, CardType, Color};
use rift_deck::zones::DeckState;

/// A slice of the catalog as the card-extraction script writes it.
pub const CATALOG_JSON: &str = r#"[
    {
        "name": "Jinx, Loose Cannon",
        "description": "When you play a spell, ready me.",
        "variantNumber": "OGN-251",
        "variants": ["OGN-251", "OGN-251a"],
        "variantImages": ["https://cdn/OGN-251.webp", "https://cdn/OGN-251a.webp"],
        "type": "Legend",
        "super": null,
        "colors": ["Fury", "Chaos"],
        "tags": ["Jinx"],
        "releaseDate": "2025-10-31"
    },
    {
        "name": "Garen, Might of Demacia",
        "variantNumber": "OGN-001",
        "type": "Legend",
        "colors": ["Order", "Body"],
        "tags": ["Garen"],
        "releaseDate": "2025-10-31"
    },
    {
        "name": "Yasuo, Unforgiven",
        "variantNumber": "OGN-260",
        "type": "Legend",
        "colors": ["Calm"],
        "tags": ["Yasuo"],
        "releaseDate": "2025-10-31"
    },
    {
        "name": "Jinx, Demolitionist",
        "variantNumber": "OGN-030",
        "variants": ["OGN-030", "OGN-030a"],
        "type": "Unit",
        "super": "Champion",
        "energy": 3,
        "might": 4,
        "colors": ["Fury"],
        "tags": ["Jinx"],
        "releaseDate": "2025-10-31"
    },
    {
        "name": "Garen, Commander",
        "variantNumber": "OGN-032",
        "type": "Unit",
        "super": "Champion",
        "energy": 5,
        "might": 5,
        "colors": ["Order"],
        "tags": ["Garen"],
        "releaseDate": "2025-10-31"
    },
    {
        "name": "Vi, Enforcer",
        "variantNumber": "OGN-034",
        "type": "Unit",
        "super": "Champion",
        "colors": ["Chaos"],
        "tags": ["Vi"]
    },
    {
        "name": "Nameless Draft Card"
    }
]"#;

/// Fury and Chaos units `OGN-101` through `OGN-120`.
pub fn unit_id(n: usize) -> CardIdentifier {
    CardIdentifier::base(format!("OGN-{:03}", 100 + n))
}

/// Battlefield `OGN-29n`.
pub fn battlefield_id(n: usize) -> CardIdentifier {
    CardIdentifier::base(format!("OGN-{:03}", 290 + n))
}

pub fn id(text: &str) -> CardIdentifier {
    text.parse().expect("fixture identifier")
}

/// The JSON slice plus units, off-color cards, battlefields and every rune.
pub fn catalog() -> CardRegistry {
    let mut registry = CardRegistry::from_json(CATALOG_JSON).expect("fixture catalog");

    for n in 1..=20 {
        let color = if n % 2 == 0 { Color::Chaos } else { Color::Fury };
        registry.register(
            CardMetadata::new(unit_id(n).base_id(), format!("Unit {n}"), CardType::Unit)
                .with_colors([color])
                .with_stats(Some((n % 8) as u32), Some((n % 4) as u32), Some((n % 6) as u32))
                .with_variants([format!("OGN-{:03}", 100 + n), format!("OGN-{:03}a", 100 + n)])
                .with_release_date("2025-10-31"),
        );
    }

    registry.register(CardMetadata::new("OGN-140", "Calm Monk", CardType::Unit).with_colors([Color::Calm]));
    registry.register(CardMetadata::new("OGN-141", "Training Dummy", CardType::Gear));
    registry.register(CardMetadata::new("OGN-142", "Poro Token", CardType::Unit).with_super(CardSuper::Token));
    registry.register(
        CardMetadata::new("OGN-247", "Scrapheap", CardType::Gear)
            .with_variants(["OGN-247", "OGN-247a", "OGN-247b"]),
    );

    for n in 0..4 {
        let base = battlefield_id(n);
        registry.register(
            CardMetadata::new(base.base_id(), format!("Battlefield {n}"), CardType::Battlefield)
                .with_variants([base.base_id().to_string(), format!("{}a", base.base_id())]),
        );
    }

    for color in Color::ALL {
        let base = color.rune_base_id();
        registry.register(
            CardMetadata::new(base, format!("{color} Rune"), CardType::Rune)
                .with_variants([base.to_string(), format!("{base}a"), format!("{base}b")]),
        );
    }

    registry
}

/// A legal Jinx deck: legend, champion, 39 main-deck cards, 3 battlefields
/// and two side-deck cards.
pub fn legal_deck(catalog: &CardRegistry) -> DeckState {
    let mut deck = DeckState::new();
    deck.set_legend(id("OGN-251"), catalog).expect("legend");
    deck.add_to_main_deck(id("OGN-030"), catalog).expect("champion");
    for n in 1..=13 {
        for _ in 0..3 {
            deck.add_to_main_deck(unit_id(n), catalog).expect("main deck");
        }
    }
    for n in 0..3 {
        deck.add_battlefield(battlefield_id(n), catalog).expect("battlefield");
    }
    deck.add_to_side_deck(unit_id(14), catalog).expect("side deck");
    deck.add_to_side_deck(unit_id(15), catalog).expect("side deck");
    deck
}
