//! Shareable deck codes.
//!
//! Export always produces both forms: the plain space-separated list used
//! by Tabletop Simulator and the compact form used in share URLs. Import
//! sniffs which one it was given.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::compact::{decode_compact, decode_run_length, encode_compact, encode_run_length, sniff_format, CodeFormat};
use super::flat::{from_flat_list, to_flat_list, ImportDiagnostic, ImportOutcome};
use crate::cards::{CardCatalog, CardIdentifier};
use crate::core::{DeckError, DeckRules, Result};
use crate::zones::DeckState;

/// Both text forms of one deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCode {
    /// Space-separated `SET-NUM-N` identifiers.
    pub plain: String,
    /// Run-length encoded compact tokens, or the plain form when some
    /// card has no compact encoding.
    pub compact: String,
}

/// Export a deck in both code forms.
///
/// ## Example
///
/// ```
/// use rift_deck::cards::{CardIdentifier, CardMetadata, CardRegistry, CardType};
/// use rift_deck::codec::export_deck;
/// use rift_deck::zones::DeckState;
///
/// let mut catalog = CardRegistry::new();
/// catalog.register(CardMetadata::new("OGN-247", "Scrapheap", CardType::Gear).with_variants(["a", "b"]));
///
/// let mut deck = DeckState::new();
/// deck.add_to_main_deck(CardIdentifier::new("OGN-247", 1), &catalog).unwrap();
/// deck.add_to_main_deck(CardIdentifier::new("OGN-247", 1), &catalog).unwrap();
///
/// let code = export_deck(&deck);
/// assert_eq!(code.plain, "OGN-247-2 OGN-247-2");
/// assert_eq!(code.compact, "02472x2");
/// ```
#[must_use]
pub fn export_deck(deck: &DeckState) -> DeckCode {
    let list = to_flat_list(deck);
    let plain = list.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");

    let compact = match list.iter().map(encode_compact).collect::<Result<Vec<_>>>() {
        Ok(tokens) => encode_run_length(&tokens),
        Err(err) => {
            warn!(%err, "deck has no compact code, falling back to the plain form");
            plain.clone()
        }
    };

    debug!(cards = list.len(), "exported deck code");
    DeckCode { plain, compact }
}

/// Decode a deck code of either form.
///
/// Malformed tokens or segments, oversized runs and unknown cards are
/// reported in the diagnostics. Fails with `ImportFormatInvalid` when
/// nothing usable remains.
pub fn import_deck(code: &str, catalog: &dyn CardCatalog) -> Result<ImportOutcome> {
    let mut diagnostics = Vec::new();
    let mut cards = Vec::new();

    let format = sniff_format(code);
    let tokens: Vec<String> = match format {
        CodeFormat::Plain => code.split_whitespace().map(str::to_string).collect(),
        CodeFormat::Compact => {
            let expanded = decode_run_length(code, DeckRules::default().max_flat_len());
            diagnostics.extend(expanded.skipped);
            expanded.tokens
        }
    };

    for token in tokens {
        let parsed = match format {
            CodeFormat::Plain => CardIdentifier::parse(&token),
            CodeFormat::Compact => decode_compact(&token),
        };
        match parsed {
            Ok(card) => cards.push(card),
            Err(reason) => {
                warn!(%token, %reason, "skipped token during import");
                diagnostics.push(ImportDiagnostic { token, reason });
            }
        }
    }

    if cards.is_empty() {
        return Err(DeckError::ImportFormatInvalid(format!("no card identifier in {code:?}")));
    }

    let mut outcome = from_flat_list(&cards, catalog)?;
    diagnostics.append(&mut outcome.diagnostics);
    outcome.diagnostics = diagnostics;
    Ok(outcome)
}
