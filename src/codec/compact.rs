//! Compact URL form of card identifiers.
//!
//! Each identifier becomes a set digit, the 3-digit collector number and,
//! for non-default printings, the 1-based printing number:
//! `OGN-247-2` is `02472`, `OGN-247-1` is `0247`. Sets without a digit keep
//! their letters (`XYZ-012-1` is `XYZ012`). A deck is a `-`-joined list of
//! such tokens, with runs of identical tokens collapsed to `CODExN`.

use std::sync::LazyLock;

use regex::Regex;

use tracing::warn;

use super::flat::ImportDiagnostic;
use crate::cards::CardIdentifier;
use crate::core::{DeckError, Result};

/// Set codes with a one-digit abbreviation.
const SET_DIGITS: [(&str, char); 4] = [("OGN", '0'), ("OGS", '1'), ("SFD", '2'), ("ARC", '9')];

static COMPACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d|[A-Z]+)(\d{3})(\d{1,2})?$").expect("compact pattern"));

static PLAIN_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]+-\d+").expect("plain pattern"));

static RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9A-Z]+)(?:x(\d+))?$").expect("run pattern"));

/// Deck code flavour, decided before decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeFormat {
    /// Space-separated full identifiers.
    Plain,
    /// Run-length encoded compact tokens.
    Compact,
}

/// Decide which decoder a deck code needs.
///
/// Any `SET-NUMBER` fragment marks the plain form.
#[must_use]
pub fn sniff_format(code: &str) -> CodeFormat {
    if PLAIN_MARKER.is_match(code) {
        CodeFormat::Plain
    } else {
        CodeFormat::Compact
    }
}

fn set_digit(set_code: &str) -> Option<char> {
    SET_DIGITS.iter().find(|(set, _)| *set == set_code).map(|&(_, d)| d)
}

fn set_for_digit(digit: &str) -> Option<&'static str> {
    SET_DIGITS
        .iter()
        .find(|(_, d)| digit.len() == 1 && digit.starts_with(*d))
        .map(|&(set, _)| set)
}

/// Encode one identifier.
///
/// Fails with `NumberOutOfRange` when the collector number needs more than
/// three digits or the printing number more than two.
pub fn encode_compact(id: &CardIdentifier) -> Result<String> {
    let out_of_range = || DeckError::NumberOutOfRange(id.to_string());

    let number: u32 = id.number().parse().map_err(|_| out_of_range())?;
    if number > 999 {
        return Err(out_of_range());
    }

    let mut code = match set_digit(id.set_code()) {
        Some(digit) => digit.to_string(),
        None => id.set_code().to_string(),
    };
    code.push_str(&format!("{number:03}"));

    if id.variant_index() > 0 {
        let printing = id.variant_index() + 1;
        if printing > 99 {
            return Err(out_of_range());
        }
        code.push_str(&printing.to_string());
    }
    Ok(code)
}

/// Decode one compact token.
pub fn decode_compact(token: &str) -> Result<CardIdentifier> {
    let malformed = || DeckError::MalformedIdentifier(token.to_string());
    let caps = COMPACT.captures(token).ok_or_else(malformed)?;

    let prefix = &caps[1];
    let set = if prefix.chars().all(|c| c.is_ascii_digit()) {
        set_for_digit(prefix).ok_or_else(malformed)?
    } else {
        prefix
    };
    let base_id = format!("{set}-{}", &caps[2]);

    let variant_index = match caps.get(3) {
        None => 0,
        Some(m) => {
            let printing: usize = m.as_str().parse().map_err(|_| malformed())?;
            printing.checked_sub(1).ok_or_else(malformed)?
        }
    };
    Ok(CardIdentifier::new(base_id, variant_index))
}

/// Collapse runs of identical tokens into `CODExN` and join with `-`.
#[must_use]
pub fn encode_run_length<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut iter = tokens.iter().map(AsRef::as_ref).peekable();

    while let Some(token) = iter.next() {
        let mut count = 1;
        while iter.peek() == Some(&token) {
            iter.next();
            count += 1;
        }
        if count == 1 {
            parts.push(token.to_string());
        } else {
            parts.push(format!("{token}x{count}"));
        }
    }
    parts.join("-")
}

/// A compact code expanded into tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandedCode {
    /// Tokens in code order, runs repeated.
    pub tokens: Vec<String>,
    /// Segments that could not be expanded.
    pub skipped: Vec<ImportDiagnostic>,
}

/// Expand a run-length encoded code back into tokens.
///
/// Empty segments are ignored. A segment that is not `CODE` or `CODExN`
/// (N at least 1) is skipped as a malformed identifier. A run that would
/// take the code past `limit` tokens is skipped too, so a short code can
/// never expand into more cards than a deck holds.
#[must_use]
pub fn decode_run_length(code: &str, limit: usize) -> ExpandedCode {
    let mut expanded = ExpandedCode::default();
    for segment in code.trim().split('-').filter(|s| !s.is_empty()) {
        match decode_segment(segment) {
            Ok((_, count)) if count > limit.saturating_sub(expanded.tokens.len()) => {
                let reason = DeckError::ImportFormatInvalid(format!("run of {count} exceeds {limit} cards"));
                warn!(%segment, %reason, "skipped segment");
                expanded.skipped.push(ImportDiagnostic {
                    token: segment.to_string(),
                    reason,
                });
            }
            Ok((token, count)) => {
                expanded.tokens.extend(std::iter::repeat(token.to_string()).take(count));
            }
            Err(reason) => {
                warn!(%segment, %reason, "skipped segment");
                expanded.skipped.push(ImportDiagnostic {
                    token: segment.to_string(),
                    reason,
                });
            }
        }
    }
    expanded
}

/// Split one `CODE` or `CODExN` segment into its token and count.
fn decode_segment(segment: &str) -> Result<(&str, usize)> {
    let malformed = || DeckError::MalformedIdentifier(segment.to_string());
    let caps = RUN.captures(segment).ok_or_else(malformed)?;
    let count: usize = match caps.get(2) {
        None => 1,
        Some(m) => m.as_str().parse().map_err(|_| malformed())?,
    };
    if count == 0 {
        return Err(malformed());
    }
    let token = caps.get(1).map_or(segment, |m| m.as_str());
    Ok((token, count))
}
