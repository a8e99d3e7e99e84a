//! Deck code, flat list and saved record tests.

mod common;

use common::{catalog, id, legal_deck, unit_id};
use rift_deck::codec::{
    decode_compact, encode_compact, export_deck, from_flat_list, import_deck, sniff_format, to_flat_list, CodeFormat,
    DeckRecord, LoadTransaction,
};
use rift_deck::core::{DeckError, Zone};
use rift_deck::zones::{DeckState, RuneSlot};

/// Test the documented compact example in both directions.
#[test]
fn test_compact_example() {
    assert_eq!(encode_compact(&id("OGN-247-2")).unwrap(), "02472");
    assert_eq!(decode_compact("02472").unwrap().to_string(), "OGN-247-2");
    assert_eq!(decode_compact("0247").unwrap(), id("OGN-247-1"));
}

/// Test format sniffing on both code forms.
#[test]
fn test_sniff_format() {
    assert_eq!(sniff_format("OGN-251-1 OGN-030-1"), CodeFormat::Plain);
    assert_eq!(sniff_format("0251-0030-0101x3"), CodeFormat::Compact);
}

/// Test the canonical flat order of the legal deck.
#[test]
fn test_flat_list_order() {
    let catalog = catalog();
    let deck = legal_deck(&catalog);
    let list = to_flat_list(&deck);

    assert_eq!(list.len(), 1 + 40 + 3 + 12 + 2);
    assert_eq!(list[0], id("OGN-251"));
    assert_eq!(list[1], id("OGN-030"));
    assert_eq!(list[2], unit_id(1));
    assert_eq!(list[41], common::battlefield_id(0));
    assert!(list[44..50].iter().all(|c| *c == id("OGN-007")));
    assert!(list[50..56].iter().all(|c| *c == id("OGN-166")));
    assert_eq!(&list[56..], &[unit_id(14), unit_id(15)]);
}

/// Test that both exported forms import back to the same deck.
#[test]
fn test_export_import_round_trip() {
    let catalog = catalog();
    let mut deck = legal_deck(&catalog);
    deck.click_rune(RuneSlot::B);
    deck.set_rune_variant(RuneSlot::A, 1, &catalog);
    deck.set_variant(Zone::MainDeck, 2, 1, &catalog).unwrap();

    let code = export_deck(&deck);
    assert!(code.plain.starts_with("OGN-251-1 OGN-030-1 OGN-101-1"));
    assert!(code.compact.starts_with("0251-0030-0101x2-01012-0102x3-"));
    assert!(code.compact.contains("00072x5-0166x7"));

    for text in [&code.plain, &code.compact] {
        let outcome = import_deck(text, &catalog).unwrap();
        assert!(outcome.diagnostics.is_empty(), "{:?}", outcome.diagnostics);
        assert_eq!(outcome.state, deck);
    }
}

/// Test that bad tokens and unknown cards become diagnostics.
#[test]
fn test_import_diagnostics() {
    let catalog = catalog();
    let outcome = import_deck("OGN-251-1 OGN-101-1 OGN-999-1 garbage OGN-101-2", &catalog).unwrap();

    let reasons: Vec<&DeckError> = outcome.diagnostics.iter().map(|d| &d.reason).collect();
    assert_eq!(
        reasons,
        vec![
            &DeckError::MalformedIdentifier("garbage".to_string()),
            &DeckError::UnknownCard("OGN-999".to_string()),
        ]
    );
    assert_eq!(outcome.diagnostics[0].to_string(), "skipped garbage: malformed card identifier: \"garbage\"");
    assert_eq!(outcome.state.legend(), Some(&id("OGN-251")));
    assert_eq!(outcome.state.main_deck(), &[unit_id(1), unit_id(1).with_variant(1)]);
}

/// Test that a code with nothing usable fails the import.
#[test]
fn test_import_nothing_usable() {
    let catalog = catalog();
    assert!(matches!(import_deck("", &catalog), Err(DeckError::ImportFormatInvalid(_))));
    assert!(matches!(
        import_deck("hello world", &catalog),
        Err(DeckError::ImportFormatInvalid(_))
    ));
    assert!(matches!(
        import_deck("OGN-900-1 OGN-901-1", &catalog),
        Err(DeckError::ImportFormatInvalid(_))
    ));
}

/// Test that imports run through the guarded operations.
#[test]
fn test_import_applies_deck_rules() {
    let catalog = catalog();
    let outcome = import_deck("OGN-101-1 OGN-101-1 OGN-101-2 OGN-101-1 OGN-030-1", &catalog).unwrap();

    assert_eq!(outcome.state.main_deck().len(), 3);
    assert_eq!(outcome.state.champion(), Some(&id("OGN-030")));
    assert_eq!(outcome.diagnostics.len(), 1);
    assert!(matches!(outcome.diagnostics[0].reason, DeckError::CopyLimitExceeded { .. }));
}

/// Test that runes outside the legend's colors are reported.
#[test]
fn test_import_off_color_rune() {
    let catalog = catalog();
    let list = vec![id("OGN-251"), unit_id(1), id("OGN-007"), id("OGN-042"), id("OGN-166")];
    let outcome = from_flat_list(&list, &catalog).unwrap();

    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.diagnostics[0].token, "OGN-042-1");
    // Counts that don't reach the total are rebalanced.
    assert_eq!(outcome.state.runes().total(), 12);
}

/// Test the record JSON shape and the load transaction round trip.
#[test]
fn test_record_round_trip() {
    let catalog = catalog();
    let mut deck = legal_deck(&catalog);
    deck.set_rune_variant(RuneSlot::A, 2, &catalog);
    deck.click_rune(RuneSlot::A);

    let json = deck.to_record().to_json().unwrap();
    assert!(json.contains("\"legendCard\":\"OGN-251-1\""));
    assert!(json.contains("\"chosenChampion\":\"OGN-030-1\""));
    assert!(json.contains("\"runeAVariantIndex\":2"));
    assert!(json.contains("\"runeACount\":7"));

    let record = DeckRecord::from_json(&json).unwrap();
    let load = LoadTransaction::begin(record);
    assert_eq!(load.pending_rune_variants(), [2, 0]);

    let hydrated = load.resolve(&catalog);
    assert!(hydrated.diagnostics.is_empty());
    assert_eq!(hydrated.state, deck);
}

/// Test that a partly broken record loads what it can.
#[test]
fn test_record_with_bad_entries() {
    let catalog = catalog();
    let json = r#"{
        "mainDeck": ["OGN-101-1", "bogus", "OGN-999-1"],
        "sideDeck": ["OGN-102-1", null],
        "legendCard": "OGN-251-2",
        "runeAVariantIndex": 9
    }"#;

    let hydrated = LoadTransaction::begin(DeckRecord::from_json(json).unwrap()).resolve(&catalog);

    assert_eq!(hydrated.diagnostics.len(), 2);
    assert_eq!(hydrated.diagnostics[0].token, "bogus");
    let deck = hydrated.state;
    assert_eq!(deck.legend(), Some(&id("OGN-251-2")));
    assert_eq!(deck.main_deck(), &[unit_id(1)]);
    assert_eq!(deck.side_deck()[0], Some(unit_id(2)));
    assert_eq!(deck.runes().count(RuneSlot::A), 6);
    assert_eq!(deck.runes().variant(RuneSlot::A), 2);
}

/// Test malformed record JSON surfaces as an error.
#[test]
fn test_record_bad_json() {
    assert!(matches!(DeckRecord::from_json("{ not json"), Err(DeckError::Json(_))));
}

/// Test that an empty deck exports empty codes.
#[test]
fn test_empty_export() {
    let code = export_deck(&DeckState::new());
    assert_eq!(code.plain, "");
    assert_eq!(code.compact, "");
}
