//! Request-side option records and enums.
//!
//! Every options record implements [`QueryOptions`], which yields only the
//! keys that are actually set. [`crate::api::build_url`] merges them with the
//! explicit parameters of each endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Source of optional query parameters for [`crate::api::build_url`].
pub trait QueryOptions {
    /// Key/value pairs for every option that is set, in a stable order.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Platform selector for vendor API calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Realm {
    #[default]
    Pc,
    Xbox,
    Sony,
}

impl Realm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Realm::Pc => "pc",
            Realm::Xbox => "xbox",
            Realm::Sony => "sony",
        }
    }
}

impl fmt::Display for Realm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Realm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pc" => Ok(Realm::Pc),
            "xbox" => Ok(Realm::Xbox),
            "sony" | "playstation" => Ok(Realm::Sony),
            other => Err(format!("unknown realm '{other}' (expected pc, xbox or sony)")),
        }
    }
}

/// Response language of the economy aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    En,
    Pt,
    Ru,
    Th,
    Ge,
    Fr,
    Es,
    Ko,
}

impl LanguageCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Pt => "pt",
            LanguageCode::Ru => "ru",
            LanguageCode::Th => "th",
            LanguageCode::Ge => "ge",
            LanguageCode::Fr => "fr",
            LanguageCode::Es => "es",
            LanguageCode::Ko => "ko",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALL: [LanguageCode; 8] = [
            LanguageCode::En,
            LanguageCode::Pt,
            LanguageCode::Ru,
            LanguageCode::Th,
            LanguageCode::Ge,
            LanguageCode::Fr,
            LanguageCode::Es,
            LanguageCode::Ko,
        ];
        ALL.into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown language code '{s}'"))
    }
}

/// Item categories served by the item overview and history endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Currency,
    Fragment,
    Oil,
    Incubator,
    Scarab,
    Fossil,
    Resonator,
    Essence,
    DivinationCard,
    SkillGem,
    BaseType,
    HelmetEnchant,
    UniqueMap,
    Map,
    UniqueJewel,
    UniqueFlask,
    UniqueWeapon,
    UniqueArmour,
    UniqueAccessory,
    Beast,
    Vial,
    DeliriumOrb,
    Invitation,
    ClusterJewel,
    Artifact,
}

impl ItemType {
    pub const ALL: [ItemType; 25] = [
        ItemType::Currency,
        ItemType::Fragment,
        ItemType::Oil,
        ItemType::Incubator,
        ItemType::Scarab,
        ItemType::Fossil,
        ItemType::Resonator,
        ItemType::Essence,
        ItemType::DivinationCard,
        ItemType::SkillGem,
        ItemType::BaseType,
        ItemType::HelmetEnchant,
        ItemType::UniqueMap,
        ItemType::Map,
        ItemType::UniqueJewel,
        ItemType::UniqueFlask,
        ItemType::UniqueWeapon,
        ItemType::UniqueArmour,
        ItemType::UniqueAccessory,
        ItemType::Beast,
        ItemType::Vial,
        ItemType::DeliriumOrb,
        ItemType::Invitation,
        ItemType::ClusterJewel,
        ItemType::Artifact,
    ];

    /// Wire name, as used in the `type` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Currency => "Currency",
            ItemType::Fragment => "Fragment",
            ItemType::Oil => "Oil",
            ItemType::Incubator => "Incubator",
            ItemType::Scarab => "Scarab",
            ItemType::Fossil => "Fossil",
            ItemType::Resonator => "Resonator",
            ItemType::Essence => "Essence",
            ItemType::DivinationCard => "DivinationCard",
            ItemType::SkillGem => "SkillGem",
            ItemType::BaseType => "BaseType",
            ItemType::HelmetEnchant => "HelmetEnchant",
            ItemType::UniqueMap => "UniqueMap",
            ItemType::Map => "Map",
            ItemType::UniqueJewel => "UniqueJewel",
            ItemType::UniqueFlask => "UniqueFlask",
            ItemType::UniqueWeapon => "UniqueWeapon",
            ItemType::UniqueArmour => "UniqueArmour",
            ItemType::UniqueAccessory => "UniqueAccessory",
            ItemType::Beast => "Beast",
            ItemType::Vial => "Vial",
            ItemType::DeliriumOrb => "DeliriumOrb",
            ItemType::Invitation => "Invitation",
            ItemType::ClusterJewel => "ClusterJewel",
            ItemType::Artifact => "Artifact",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown item type '{s}'"))
    }
}

/// Options shared by the character-window endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RealmOptions {
    pub realm: Option<Realm>,
}

impl RealmOptions {
    pub fn new(realm: Realm) -> Self {
        Self { realm: Some(realm) }
    }
}

impl QueryOptions for RealmOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.realm
            .map(|realm| ("realm", realm.as_str().to_string()))
            .into_iter()
            .collect()
    }
}

/// Options for the season list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonOptions {
    pub realm: Option<Realm>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl QueryOptions for SeasonOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        paged_pairs(self.realm, self.limit, self.offset)
    }
}

/// Options for a player's season history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerHistoryOptions {
    pub realm: Option<Realm>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl QueryOptions for PlayerHistoryOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        paged_pairs(self.realm, self.limit, self.offset)
    }
}

fn paged_pairs(
    realm: Option<Realm>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::with_capacity(3);
    if let Some(realm) = realm {
        pairs.push(("realm", realm.as_str().to_string()));
    }
    if let Some(limit) = limit {
        pairs.push(("limit", limit.to_string()));
    }
    if let Some(offset) = offset {
        pairs.push(("offset", offset.to_string()));
    }
    pairs
}
