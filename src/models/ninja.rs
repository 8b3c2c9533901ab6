use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response of the item overview endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCollection {
    pub lines: Vec<ItemLine>,
    #[serde(default)]
    pub language: Option<Language>,
}

impl ItemCollection {
    /// Looks an item up by its exact name
    pub fn find_by_name(&self, name: &str) -> Option<&ItemLine> {
        self.lines.iter().find(|line| line.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    #[serde(default)]
    pub translations: HashMap<String, String>,
}

/// One priced item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemLine {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(rename = "baseType", default)]
    pub base_type: Option<String>,
    #[serde(rename = "itemClass", default)]
    pub item_class: Option<u32>,
    #[serde(rename = "levelRequired", default)]
    pub level_required: Option<u32>,
    #[serde(default)]
    pub links: Option<u32>,
    #[serde(rename = "mapTier", default)]
    pub map_tier: Option<u32>,
    #[serde(rename = "gemLevel", default)]
    pub gem_level: Option<u32>,
    #[serde(rename = "gemQuality", default)]
    pub gem_quality: Option<u32>,
    #[serde(default)]
    pub variant: Option<String>,
    #[serde(default)]
    pub corrupted: Option<bool>,
    #[serde(default)]
    pub sparkline: Option<Sparkline>,
    #[serde(rename = "lowConfidenceSparkline", default)]
    pub low_confidence_sparkline: Option<Sparkline>,
    #[serde(rename = "implicitModifiers", default)]
    pub implicit_modifiers: Vec<Modifier>,
    #[serde(rename = "explicitModifiers", default)]
    pub explicit_modifiers: Vec<Modifier>,
    #[serde(rename = "flavourText", default)]
    pub flavour_text: Option<String>,
    #[serde(rename = "chaosValue")]
    pub chaos_value: f64,
    #[serde(rename = "exaltedValue", default)]
    pub exalted_value: Option<f64>,
    #[serde(rename = "divineValue", default)]
    pub divine_value: Option<f64>,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(rename = "detailsId")]
    pub details_id: String,
    #[serde(rename = "listingCount", default)]
    pub listing_count: Option<u32>,
}

/// Seven-day price trend. Days without data are `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sparkline {
    #[serde(default)]
    pub data: Vec<Option<f64>>,
    #[serde(rename = "totalChange")]
    pub total_change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub text: String,
    #[serde(default)]
    pub optional: bool,
}

/// One point of the item history endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub time: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}
