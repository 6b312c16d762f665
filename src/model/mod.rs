//! Display model and normalization.
//!
//! Turns the loosely shaped backend payloads into the fixed five-field
//! summary the page renders. Every field always ends up populated: a value
//! that cannot be read as a finite number becomes 0, a missing name becomes
//! the "Survivor" placeholder.

use serde::Serialize;
use serde_json::Value;

use crate::api::types::{Collection, LegacyProfile, PlayerStats};


/// Size of the card catalog shown as the collected denominator.
pub const CARD_CATALOG_SIZE: u64 = 127;
/// Maximum total copies shown as the owned denominator.
pub const CARD_COPY_CAP: u64 = 250;

/// Name rendered when the backend does not supply one.
pub const FALLBACK_PLAYER_NAME: &str = "Survivor";
/// Name region text while a load is in flight.
pub const LOADING_TEXT: &str = "Loading...";
/// Non-name region text while a load is in flight.
pub const PLACEHOLDER_TEXT: &str = "–";
/// Terminal name text when no identity could be resolved.
pub const MSG_NO_IDENTITY: &str = "❌ No token or user id provided.";
/// Terminal name text when the legacy profile fetch fails.
pub const MSG_LOAD_FAILED: &str = "⚠️ Failed to load.";

/// The five rendered strings. Built once per load; there is no re-render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayModel {
    pub name: String,
    pub coins: String,
    pub cards_collected: String,
    pub cards_owned: String,
    pub win_loss: String,
}

impl DisplayModel {
    /// Placeholders shown between page-ready and the first (only) render.
    pub fn loading() -> Self {
        Self {
            name: LOADING_TEXT.to_string(),
            coins: PLACEHOLDER_TEXT.to_string(),
            cards_collected: PLACEHOLDER_TEXT.to_string(),
            cards_owned: PLACEHOLDER_TEXT.to_string(),
            win_loss: PLACEHOLDER_TEXT.to_string(),
        }
    }

    /// Terminal failure state: the message lands in the name region and
    /// the other regions keep their loading placeholder.
    pub fn failed(message: &str) -> Self {
        Self {
            name: message.to_string(),
            ..Self::loading()
        }
    }
}

/// First non-null candidate wins; later candidates are never consulted.
fn first_present<'a>(candidates: &[Option<&'a Value>]) -> Option<&'a Value> {
    candidates
        .iter()
        .copied()
        .flatten()
        .find(|v| !v.is_null())
}

/// Read a JSON value as a finite number. Strings parse numerically (an
/// empty string counts as 0, matching the backend's older clients), bools
/// count as 0/1, everything else is not a number.
fn as_finite_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Ordered numeric extraction: take the first present candidate, then
/// coerce. A present-but-unreadable value yields `None` so the caller can
/// fall through to its next source.
fn extract_number(candidates: &[Option<&Value>]) -> Option<f64> {
    first_present(candidates).and_then(as_finite_number)
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Render a count the way the page does: integral values without a
/// fractional part, anything else as-is.
fn fmt_count(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 9e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Unique-vs-total counts derived by scanning a collection ledger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectionTotals {
    /// Cards held in at least one copy.
    pub unique: u64,
    /// Sum of all copy counts.
    pub total: f64,
}

/// Scan a ledger in either shape. Entries whose quantity cannot be read
/// count as zero copies.
pub fn collection_totals(collection: &Collection) -> CollectionTotals {
    let mut unique = 0u64;
    let mut total = 0f64;
    match collection {
        Collection::Cards(cards) => {
            for card in cards {
                let q = extract_number(&[card.owned.as_ref(), card.quantity.as_ref()])
                    .unwrap_or(0.0);
                if q > 0.0 {
                    unique += 1;
                }
                total += q;
            }
        }
        Collection::Quantities(map) => {
            for v in map.values() {
                let q = as_finite_number(v).unwrap_or(0.0);
                if q > 0.0 {
                    unique += 1;
                }
                total += q;
            }
        }
    }
    CollectionTotals { unique, total }
}

/// Normalize the token-path payloads into a display model.
///
/// Counts already present on the stats payload win; the collection ledger
/// is only scanned for whichever of collected/owned is still missing.
pub fn normalize(stats: Option<&PlayerStats>, collection: Option<&Collection>) -> DisplayModel {
    let name = stats
        .and_then(|s| {
            non_empty(&s.name)
                .or_else(|| non_empty(&s.discord_name))
                .or_else(|| non_empty(&s.username))
        })
        .unwrap_or(FALLBACK_PLAYER_NAME)
        .to_string();

    let coins = stats
        .and_then(|s| extract_number(&[s.coins.as_ref(), s.balance.as_ref()]))
        .unwrap_or(0.0);

    let mut collected =
        stats.and_then(|s| extract_number(&[s.cards.as_ref(), s.collected.as_ref()]));
    let mut owned =
        stats.and_then(|s| extract_number(&[s.owned.as_ref(), s.cards_owned.as_ref()]));

    if collected.is_none() || owned.is_none() {
        if let Some(ledger) = collection {
            let totals = collection_totals(ledger);
            collected.get_or_insert(totals.unique as f64);
            owned.get_or_insert(totals.total);
        }
    }

    let wins = stats
        .and_then(|s| extract_number(&[s.duels_won.as_ref(), s.wins.as_ref()]))
        .unwrap_or(0.0);
    let losses = stats
        .and_then(|s| extract_number(&[s.duels_lost.as_ref(), s.losses.as_ref()]))
        .unwrap_or(0.0);

    DisplayModel {
        name,
        coins: fmt_count(coins),
        cards_collected: format!("{} / {}", fmt_count(collected.unwrap_or(0.0)), CARD_CATALOG_SIZE),
        cards_owned: format!("{} / {}", fmt_count(owned.unwrap_or(0.0)), CARD_COPY_CAP),
        win_loss: format!("{} / {}", fmt_count(wins), fmt_count(losses)),
    }
}

/// Normalize the legacy `/user/{id}` profile. Same coercion rules, with
/// the older field names preferred.
pub fn normalize_legacy(profile: &LegacyProfile) -> DisplayModel {
    let name = non_empty(&profile.name)
        .unwrap_or(FALLBACK_PLAYER_NAME)
        .to_string();

    let coins = extract_number(&[profile.coins.as_ref()]).unwrap_or(0.0);
    let collected = extract_number(&[
        profile.cards_collected.as_ref(),
        profile.collected.as_ref(),
    ])
    .unwrap_or(0.0);
    let owned =
        extract_number(&[profile.cards_owned.as_ref(), profile.owned.as_ref()]).unwrap_or(0.0);
    let wins = extract_number(&[profile.duels_won.as_ref(), profile.wins.as_ref()]).unwrap_or(0.0);
    let losses =
        extract_number(&[profile.duels_lost.as_ref(), profile.losses.as_ref()]).unwrap_or(0.0);

    DisplayModel {
        name,
        coins: fmt_count(coins),
        cards_collected: format!("{} / {}", fmt_count(collected), CARD_CATALOG_SIZE),
        cards_owned: format!("{} / {}", fmt_count(owned), CARD_COPY_CAP),
        win_loss: format!("{} / {}", fmt_count(wins), fmt_count(losses)),
    }
}
