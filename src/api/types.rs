//! Response models for the Survivor backend.
//!
//! The backend has grown several shapes for the same data, so every field
//! is optional and numeric fields come in as raw `Value`s; the `model`
//! module owns coercion and precedence.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(test)]
mod tests;

/// Player stats from `/me/{token}/stats`. Field presence is never
/// guaranteed; several fields have older synonyms.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerStats {
    pub name: Option<String>,
    #[serde(rename = "discordName")]
    pub discord_name: Option<String>,
    pub username: Option<String>,
    pub coins: Option<Value>,
    pub balance: Option<Value>,
    pub cards: Option<Value>,
    pub collected: Option<Value>,
    pub owned: Option<Value>,
    #[serde(rename = "cardsOwned")]
    pub cards_owned: Option<Value>,
    #[serde(rename = "duelsWon")]
    pub duels_won: Option<Value>,
    pub wins: Option<Value>,
    #[serde(rename = "duelsLost")]
    pub duels_lost: Option<Value>,
    pub losses: Option<Value>,
}

/// One entry of the list-shaped collection ledger.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CollectionCard {
    #[serde(rename = "cardId", alias = "card_id")]
    pub card_id: Option<String>,
    pub owned: Option<Value>,
    pub quantity: Option<Value>,
}

/// Owned-card ledger from `/me/{token}/collection`.
///
/// The backend returns either an ordered list of card records or a map
/// from card id to quantity; both carry the same information.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Collection {
    Cards(Vec<CollectionCard>),
    Quantities(BTreeMap<String, Value>),
}

/// Combined profile from the legacy `/user/{id}` endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LegacyProfile {
    pub name: Option<String>,
    pub coins: Option<Value>,
    #[serde(rename = "cardsCollected")]
    pub cards_collected: Option<Value>,
    pub collected: Option<Value>,
    #[serde(rename = "cardsOwned")]
    pub cards_owned: Option<Value>,
    pub owned: Option<Value>,
    #[serde(rename = "duelsWon")]
    pub duels_won: Option<Value>,
    pub wins: Option<Value>,
    #[serde(rename = "duelsLost")]
    pub duels_lost: Option<Value>,
    pub losses: Option<Value>,
}
