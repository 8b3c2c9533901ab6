use serde_json::{Value, json};

use crate::config::Config;

/// Test utilities for creating mock configuration and upstream payloads
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Config whose three base URLs all point at one mock server
    pub fn config_for(server_uri: &str) -> Config {
        Config {
            ninja_base_url: server_uri.to_string(),
            api_base_url: server_uri.to_string(),
            web_base_url: server_uri.to_string(),
            ..Config::default()
        }
    }

    /// Same as [`TestDataBuilder::config_for`] with a session id set
    pub fn config_with_session(server_uri: &str, session_id: &str) -> Config {
        Config {
            session_id: Some(session_id.to_string()),
            ..Self::config_for(server_uri)
        }
    }

    /// Item overview body with one currency line carrying every declared field
    pub fn item_overview_json() -> Value {
        json!({
            "lines": [
                {
                    "id": 22,
                    "name": "Exalted Orb",
                    "icon": "https://web.poecdn.com/image/Art/2DItems/Currency/CurrencyAddModToRare.png",
                    "baseType": "Exalted Orb",
                    "itemClass": 5,
                    "levelRequired": 0,
                    "links": 0,
                    "mapTier": 0,
                    "gemLevel": 0,
                    "gemQuality": 0,
                    "variant": null,
                    "corrupted": false,
                    "sparkline": {"data": [0.0, 1.2, null, 3.4], "totalChange": 3.4},
                    "lowConfidenceSparkline": {"data": [0.0], "totalChange": 0.0},
                    "implicitModifiers": [],
                    "explicitModifiers": [
                        {"text": "Augments a rare item with a new random modifier", "optional": false}
                    ],
                    "flavourText": "",
                    "chaosValue": 12.5,
                    "exaltedValue": 1.0,
                    "divineValue": 0.07,
                    "count": 40,
                    "detailsId": "exalted-orb",
                    "listingCount": 812
                }
            ],
            "language": {"name": "en", "translations": {}}
        })
    }

    /// Item history body
    pub fn item_history_json() -> Value {
        json!([
            {"time": "2024-07-26T00:00:00Z", "value": 11.0, "count": 35},
            {"time": "2024-07-27T00:00:00Z", "value": 12.5, "count": 40}
        ])
    }

    /// Character list body
    pub fn characters_json() -> Value {
        json!([
            {
                "name": "RipperJack",
                "league": "Standard",
                "classId": 1,
                "ascendancyClass": 2,
                "class": "Berserker",
                "level": 94,
                "experience": 2400000000u64,
                "lastActive": true
            },
            {
                "name": "ZapLord",
                "league": "Hardcore",
                "classId": 3,
                "ascendancyClass": 1,
                "class": "Elementalist",
                "level": 71,
                "experience": 190000000u64,
                "expired": true
            }
        ])
    }

    /// One equipped item with sockets, a socketed gem and properties
    pub fn item_json() -> Value {
        json!({
            "id": "f3a1c0b2",
            "name": "Kaom's Heart",
            "typeLine": "Glorious Plate",
            "baseType": "Glorious Plate",
            "icon": "https://web.poecdn.com/image/Art/2DItems/Armours/BodyArmours/KaomsHeart.png",
            "league": "Standard",
            "w": 2,
            "h": 3,
            "ilvl": 84,
            "frameType": 3,
            "identified": true,
            "corrupted": false,
            "verified": false,
            "inventoryId": "BodyArmour",
            "x": 0,
            "y": 0,
            "sockets": [
                {"group": 0, "attr": "S", "sColour": "R"}
            ],
            "socketedItems": [
                {
                    "name": "",
                    "typeLine": "Cyclone",
                    "icon": "https://web.poecdn.com/image/Art/2DItems/Gems/Cyclone.png",
                    "w": 1,
                    "h": 1,
                    "ilvl": 0,
                    "frameType": 4,
                    "identified": true,
                    "socket": 0,
                    "colour": "S"
                }
            ],
            "properties": [
                {"name": "Armour", "values": [["553", 1]], "displayMode": 0, "type": 16}
            ],
            "requirements": [
                {"name": "Level", "values": [["68", 0]], "displayMode": 0}
            ],
            "implicitMods": [],
            "explicitMods": ["+500 to maximum Life"],
            "craftedMods": [],
            "enchantMods": [],
            "flavourText": ["The warrior who fears will fall."]
        })
    }

    /// Inventory snapshot body
    pub fn items_json() -> Value {
        json!({
            "items": [Self::item_json()],
            "character": {
                "name": "RipperJack",
                "league": "Standard",
                "classId": 1,
                "ascendancyClass": 2,
                "class": "Berserker",
                "level": 94,
                "experience": 2400000000u64
            }
        })
    }

    /// Passive tree body
    pub fn passive_skills_json() -> Value {
        json!({
            "hashes": [4367, 6230, 7388],
            "hashes_ex": [11420],
            "mastery_effects": {"4367": 48385},
            "items": [],
            "jewel_data": {"26725": {"type": "JewelPassiveTreeExpansionLarge", "radius": 0}}
        })
    }

    /// Season list body
    pub fn seasons_json() -> Value {
        json!([
            {
                "id": "Season13",
                "description": "Race Season 13",
                "url": "https://www.pathofexile.com/seasons/13",
                "startAt": "2016-06-03T20:00:00Z",
                "endAt": "2016-08-26T20:00:00Z"
            },
            {
                "id": "Season14",
                "description": null,
                "url": null,
                "startAt": "2016-09-02T20:00:00Z",
                "endAt": null
            }
        ])
    }

    /// Season player history body
    pub fn player_history_json() -> Value {
        json!({
            "total": 1,
            "entries": [
                {
                    "rank": 17,
                    "dead": false,
                    "online": true,
                    "character": {
                        "id": "c0ffee",
                        "name": "RaceRipper",
                        "level": 88,
                        "class": "Raider",
                        "experience": 1100000000u64
                    },
                    "account": {
                        "name": "some_account",
                        "realm": "pc",
                        "challenges": {"total": 12}
                    }
                }
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_for_points_everything_at_server() {
        let config = TestDataBuilder::config_for("http://127.0.0.1:4000");
        assert_eq!(config.ninja_base_url, "http://127.0.0.1:4000");
        assert_eq!(config.api_base_url, "http://127.0.0.1:4000");
        assert_eq!(config.web_base_url, "http://127.0.0.1:4000");
        assert!(config.session_id.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_with_session() {
        let config = TestDataBuilder::config_with_session("http://127.0.0.1:4000", "abc");
        assert_eq!(config.session_id.as_deref(), Some("abc"));
    }
}
