//! Entity models and the collections they live in

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A paginated collection of the API
///
/// Card and set collections share the same query mechanics, they only
/// differ in their path, envelope key and entity type.
pub trait Resource: Send + Sync + 'static {
    /// Entity decoded from each page
    type Entity: DeserializeOwned + Serialize + Debug + Send;

    /// Path below the base URL, e.g. `cards`
    const PATH: &'static str;

    /// Key of the entity array in the response envelope
    const ROOT_KEY: &'static str;
}

/// The card collection
#[derive(Debug, Clone, Copy)]
pub struct Cards;

impl Resource for Cards {
    type Entity = Card;
    const PATH: &'static str = "cards";
    const ROOT_KEY: &'static str = "cards";
}

/// The set collection
#[derive(Debug, Clone, Copy)]
pub struct Sets;

impl Resource for Sets {
    type Entity = Set;
    const PATH: &'static str = "sets";
    const ROOT_KEY: &'static str = "sets";
}

/// A single card printing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    pub id: String,
    pub name: String,
    /// Names of all faces for split, flip and double-faced cards
    pub names: Vec<String>,
    pub mana_cost: Option<String>,
    pub cmc: f64,
    pub colors: Vec<String>,
    pub color_identity: Vec<String>,
    #[serde(rename = "type")]
    pub type_line: String,
    pub supertypes: Vec<String>,
    pub types: Vec<String>,
    pub subtypes: Vec<String>,
    pub rarity: String,
    pub set: String,
    pub set_name: String,
    pub text: Option<String>,
    pub flavor: Option<String>,
    pub artist: String,
    pub number: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub loyalty: Option<String>,
    pub layout: String,
    #[serde(rename = "multiverseid")]
    pub multiverse_id: Option<String>,
    pub image_url: Option<String>,
    pub printings: Vec<String>,
    pub original_text: Option<String>,
    pub original_type: Option<String>,
    pub foreign_names: Vec<ForeignName>,
    pub legalities: Vec<Legality>,
}

/// A card name in another language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForeignName {
    pub name: String,
    pub language: String,
    pub text: Option<String>,
    pub flavor: Option<String>,
    #[serde(rename = "multiverseid")]
    pub multiverse_id: Option<u64>,
}

/// Legality of a card in one format
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Legality {
    pub format: String,
    pub legality: String,
}

/// A card set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Set {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub set_type: String,
    pub border: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub block: Option<String>,
    pub gatherer_code: Option<String>,
    pub old_code: Option<String>,
    pub magic_cards_info_code: Option<String>,
    pub mkm_id: Option<u64>,
    pub mkm_name: Option<String>,
    pub online_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_card_from_api_shape() {
        let card: Card = serde_json::from_value(json!({
            "id": "9d91ef4896ab4c1a5611d4d06971fc8026dd2f3f",
            "name": "Archangel Avacyn",
            "manaCost": "{3}{W}{W}",
            "cmc": 5,
            "colors": ["White"],
            "colorIdentity": ["W"],
            "type": "Legendary Creature — Angel",
            "supertypes": ["Legendary"],
            "types": ["Creature"],
            "subtypes": ["Angel"],
            "rarity": "Mythic Rare",
            "set": "SOI",
            "setName": "Shadows over Innistrad",
            "power": "4",
            "toughness": "4",
            "multiverseid": "409741",
            "legalities": [{"format": "Commander", "legality": "Legal"}]
        }))
        .unwrap();

        assert_eq!(card.name, "Archangel Avacyn");
        assert_eq!(card.mana_cost.as_deref(), Some("{3}{W}{W}"));
        assert!((card.cmc - 5.0).abs() < f64::EPSILON);
        assert_eq!(card.type_line, "Legendary Creature — Angel");
        assert_eq!(card.multiverse_id.as_deref(), Some("409741"));
        assert_eq!(card.legalities[0].format, "Commander");
        assert!(card.loyalty.is_none());
        assert!(card.foreign_names.is_empty());
    }

    #[test]
    fn test_set_from_api_shape() {
        let set: Set = serde_json::from_value(json!({
            "code": "KTK",
            "name": "Khans of Tarkir",
            "type": "expansion",
            "border": "black",
            "releaseDate": "2014-09-26",
            "block": "Khans of Tarkir",
            "onlineOnly": false
        }))
        .unwrap();

        assert_eq!(set.code, "KTK");
        assert_eq!(set.set_type, "expansion");
        assert_eq!(set.release_date, NaiveDate::from_ymd_opt(2014, 9, 26));
        assert!(!set.online_only);
    }

    #[test]
    fn test_resource_paths() {
        assert_eq!(Cards::PATH, "cards");
        assert_eq!(Sets::ROOT_KEY, "sets");
    }
}
