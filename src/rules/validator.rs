//! Deck legality checks.
//!
//! `validate` runs every rule in a fixed order and never stops at the
//! first failure, so the player sees all problems at once. Each rule
//! contributes one message, prefixed with `✓` when it passes and `✗`
//! when it fails.

use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardMetadata, CardType, Color};
use crate::core::DeckRules;
use crate::zones::copies::{copy_counts, pooled_cards};
use crate::zones::DeckState;

const PASS: &str = "✓";
const FAIL: &str = "✗";

/// The legality rules, in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckRule {
    Legend,
    Battlefields,
    MainDeckSize,
    ColorIdentity,
    ChampionMatchesLegend,
    CopyLimit,
}

impl DeckRule {
    pub const ALL: [DeckRule; 6] = [
        DeckRule::Legend,
        DeckRule::Battlefields,
        DeckRule::MainDeckSize,
        DeckRule::ColorIdentity,
        DeckRule::ChampionMatchesLegend,
        DeckRule::CopyLimit,
    ];
}

/// Outcome of one rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCheck {
    pub rule: DeckRule,
    pub passed: bool,
    pub message: String,
}

/// Validator output handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    /// One self-describing message per rule, in rule order.
    pub messages: Vec<String>,
    #[serde(skip)]
    pub checks: Vec<RuleCheck>,
}

impl ValidationReport {
    /// Result for a single rule.
    #[must_use]
    pub fn check(&self, rule: DeckRule) -> Option<&RuleCheck> {
        self.checks.iter().find(|c| c.rule == rule)
    }

    /// Rules that failed.
    pub fn failures(&self) -> impl Iterator<Item = &RuleCheck> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// Check a deck against the rules it was built under.
///
/// Pure: the same deck and catalog always give the same report.
#[must_use]
pub fn validate(deck: &DeckState, catalog: &dyn CardCatalog) -> ValidationReport {
    validate_against(deck, catalog, deck.rules())
}

/// Check a deck against another set of rules, e.g. a deck edited under
/// house rules checked for the constructed format.
#[must_use]
pub fn validate_against(deck: &DeckState, catalog: &dyn CardCatalog, rules: &DeckRules) -> ValidationReport {
    let legend = deck
        .legend()
        .and_then(|id| catalog.get_card_by_base_id(id.base_id()));

    let checks: Vec<RuleCheck> = DeckRule::ALL
        .into_iter()
        .map(|rule| {
            let (passed, text) = match rule {
                DeckRule::Legend => check_legend(deck),
                DeckRule::Battlefields => check_battlefields(deck, rules),
                DeckRule::MainDeckSize => check_main_deck(deck, rules),
                DeckRule::ColorIdentity => check_colors(deck, legend, catalog),
                DeckRule::ChampionMatchesLegend => check_champion(deck, legend, catalog),
                DeckRule::CopyLimit => check_copies(deck, rules),
            };
            let mark = if passed { PASS } else { FAIL };
            RuleCheck {
                rule,
                passed,
                message: format!("{mark} {text}"),
            }
        })
        .collect();

    ValidationReport {
        is_valid: checks.iter().all(|c| c.passed),
        messages: checks.iter().map(|c| c.message.clone()).collect(),
        checks,
    }
}

fn check_legend(deck: &DeckState) -> (bool, String) {
    match deck.legend() {
        Some(legend) => (true, format!("Legend selected ({legend})")),
        None => (false, "No legend selected".to_string()),
    }
}

fn check_battlefields(deck: &DeckState, rules: &DeckRules) -> (bool, String) {
    let want = rules.battlefield_slots;
    let have = deck.battlefields().len();
    (have == want, format!("Battlefields: {have}/{want}"))
}

fn check_main_deck(deck: &DeckState, rules: &DeckRules) -> (bool, String) {
    let want = rules.main_deck_size;
    let have = deck.main_deck_total();
    (have == want, format!("Main deck: {have}/{want} cards (champion included)"))
}

fn check_colors(deck: &DeckState, legend: Option<&CardMetadata>, catalog: &dyn CardCatalog) -> (bool, String) {
    let allowed: &[Color] = legend.map(|l| l.colors.as_slice()).unwrap_or_default();

    let mut offenders: Vec<String> = Vec::new();
    for card in pooled_cards(deck) {
        // Unknown cards are the catalog's problem, not a color violation.
        let Some(meta) = catalog.get_card_by_base_id(card.base_id()) else {
            continue;
        };
        if matches!(meta.card_type, CardType::Rune | CardType::Legend | CardType::Battlefield) {
            continue;
        }
        if meta.colors.iter().any(|c| !allowed.contains(c)) && !offenders.contains(&meta.name) {
            offenders.push(meta.name.clone());
        }
    }

    if offenders.is_empty() {
        (true, "All cards match the legend's colors".to_string())
    } else {
        (false, format!("Cards outside the legend's colors: {}", offenders.join(", ")))
    }
}

fn check_champion(deck: &DeckState, legend: Option<&CardMetadata>, catalog: &dyn CardCatalog) -> (bool, String) {
    let Some(champion) = deck.champion() else {
        return (false, "No champion chosen".to_string());
    };
    let Some(meta) = catalog.get_card_by_base_id(champion.base_id()) else {
        return (false, format!("Champion {champion} is not in the catalog"));
    };
    match legend {
        Some(legend) if meta.shares_tag(legend) => (true, format!("Champion {} matches the legend", meta.name)),
        Some(legend) => (false, format!("Champion {} does not match legend {}", meta.name, legend.name)),
        None => (false, format!("Champion {} has no legend to match", meta.name)),
    }
}

fn check_copies(deck: &DeckState, rules: &DeckRules) -> (bool, String) {
    let limit = rules.max_copies;
    let mut over: Vec<(&str, usize)> = copy_counts(deck)
        .into_iter()
        .filter(|&(_, count)| count > limit)
        .collect();
    over.sort_unstable();

    if over.is_empty() {
        (true, format!("No card exceeds {limit} copies"))
    } else {
        let listed: Vec<String> = over.iter().map(|(id, n)| format!("{id} ({n})")).collect();
        (false, format!("Too many copies: {}", listed.join(", ")))
    }
}
