//! Unit tests for backend response models

use super::*;
use serde_json::json;

#[test]
fn test_player_stats_deserialization_wire_names() {
    let payload = json!({
        "name": "Kira",
        "discordName": "kira#1234",
        "coins": 150,
        "cardsOwned": 12,
        "duelsWon": 3,
        "duelsLost": 1
    });

    let stats: PlayerStats = serde_json::from_value(payload).unwrap();
    assert_eq!(stats.name.as_deref(), Some("Kira"));
    assert_eq!(stats.discord_name.as_deref(), Some("kira#1234"));
    assert_eq!(stats.coins, Some(json!(150)));
    assert_eq!(stats.cards_owned, Some(json!(12)));
    assert_eq!(stats.duels_won, Some(json!(3)));
    assert_eq!(stats.duels_lost, Some(json!(1)));
    assert!(stats.balance.is_none());
}

#[test]
fn test_player_stats_deserialization_empty_object() {
    let stats: PlayerStats = serde_json::from_value(json!({})).unwrap();
    assert!(stats.name.is_none());
    assert!(stats.coins.is_none());
    assert!(stats.wins.is_none());
}

#[test]
fn test_player_stats_keeps_malformed_values_raw() {
    let stats: PlayerStats =
        serde_json::from_value(json!({"coins": "150", "owned": [1, 2]})).unwrap();
    assert_eq!(stats.coins, Some(json!("150")));
    assert_eq!(stats.owned, Some(json!([1, 2])));
}

#[test]
fn test_collection_deserialization_list_shape() {
    let payload = json!([
        {"cardId": "001", "owned": 2},
        {"card_id": "002", "quantity": 1}
    ]);

    let collection: Collection = serde_json::from_value(payload).unwrap();
    match collection {
        Collection::Cards(cards) => {
            assert_eq!(cards.len(), 2);
            assert_eq!(cards[0].card_id.as_deref(), Some("001"));
            assert_eq!(cards[0].owned, Some(json!(2)));
            assert_eq!(cards[1].card_id.as_deref(), Some("002"));
            assert_eq!(cards[1].quantity, Some(json!(1)));
        }
        Collection::Quantities(_) => panic!("expected list shape"),
    }
}

#[test]
fn test_collection_deserialization_map_shape() {
    let payload = json!({"001": 2, "002": 0});

    let collection: Collection = serde_json::from_value(payload).unwrap();
    match collection {
        Collection::Quantities(map) => {
            assert_eq!(map.len(), 2);
            assert_eq!(map.get("001"), Some(&json!(2)));
            assert_eq!(map.get("002"), Some(&json!(0)));
        }
        Collection::Cards(_) => panic!("expected map shape"),
    }
}

#[test]
fn test_collection_deserialization_empty_object_is_map() {
    let collection: Collection = serde_json::from_value(json!({})).unwrap();
    assert!(matches!(collection, Collection::Quantities(map) if map.is_empty()));
}

#[test]
fn test_legacy_profile_deserialization() {
    let payload = json!({
        "name": "Old Kira",
        "coins": 20,
        "cardsCollected": 11,
        "cardsOwned": 30,
        "duelsWon": 4,
        "duelsLost": 2
    });

    let profile: LegacyProfile = serde_json::from_value(payload).unwrap();
    assert_eq!(profile.name.as_deref(), Some("Old Kira"));
    assert_eq!(profile.cards_collected, Some(json!(11)));
    assert_eq!(profile.cards_owned, Some(json!(30)));
    assert_eq!(profile.duels_won, Some(json!(4)));
    assert_eq!(profile.duels_lost, Some(json!(2)));
}

#[test]
fn test_legacy_profile_rejects_non_object() {
    assert!(serde_json::from_value::<LegacyProfile>(json!([1, 2])).is_err());
}
