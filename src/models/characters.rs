use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Character summary as listed by `get-characters`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub league: String,
    #[serde(rename = "classId")]
    pub class_id: u32,
    #[serde(rename = "ascendancyClass")]
    pub ascendancy_class: u32,
    pub class: String,
    pub level: u32,
    #[serde(default)]
    pub experience: u64,
    #[serde(rename = "lastActive", default, skip_serializing_if = "Option::is_none")]
    pub last_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expired: Option<bool>,
}

/// Inventory snapshot returned by `get-items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Items {
    pub items: Vec<Item>,
    pub character: Character,
}

impl Items {
    /// Items equipped or stored in the given inventory slot (e.g. `"Helm"`, `"MainInventory"`)
    pub fn in_inventory<'a>(
        &'a self,
        inventory_id: &'a str,
    ) -> impl Iterator<Item = &'a Item> + 'a {
        self.items
            .iter()
            .filter(move |item| item.inventory_id.as_deref() == Some(inventory_id))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "typeLine")]
    pub type_line: String,
    #[serde(rename = "baseType", default)]
    pub base_type: Option<String>,
    pub icon: String,
    #[serde(default)]
    pub league: Option<String>,
    pub w: u32,
    pub h: u32,
    #[serde(default)]
    pub ilvl: u32,
    #[serde(rename = "frameType", default)]
    pub frame_type: u32,
    #[serde(default)]
    pub identified: bool,
    #[serde(default)]
    pub corrupted: Option<bool>,
    #[serde(default)]
    pub verified: Option<bool>,
    #[serde(rename = "inventoryId", default)]
    pub inventory_id: Option<String>,
    #[serde(default)]
    pub x: Option<u32>,
    #[serde(default)]
    pub y: Option<u32>,
    /// Socket index when this item sits inside another item
    #[serde(default)]
    pub socket: Option<u32>,
    #[serde(default)]
    pub colour: Option<String>,
    #[serde(default)]
    pub sockets: Vec<ItemSocket>,
    #[serde(rename = "socketedItems", default)]
    pub socketed_items: Vec<Item>,
    #[serde(default)]
    pub properties: Vec<ItemProperty>,
    #[serde(default)]
    pub requirements: Vec<ItemProperty>,
    #[serde(rename = "implicitMods", default)]
    pub implicit_mods: Vec<String>,
    #[serde(rename = "explicitMods", default)]
    pub explicit_mods: Vec<String>,
    #[serde(rename = "craftedMods", default)]
    pub crafted_mods: Vec<String>,
    #[serde(rename = "enchantMods", default)]
    pub enchant_mods: Vec<String>,
    #[serde(rename = "flavourText", default)]
    pub flavour_text: Vec<String>,
}

impl Item {
    /// Largest group of linked sockets
    pub fn max_links(&self) -> usize {
        let mut groups: HashMap<u32, usize> = HashMap::new();
        for socket in &self.sockets {
            *groups.entry(socket.group).or_default() += 1;
        }
        groups.into_values().max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSocket {
    pub group: u32,
    /// `"S"`/`"D"`/`"I"`/`"G"` for gem sockets, `false` or `"A"` for abyssal ones
    #[serde(default)]
    pub attr: serde_json::Value,
    #[serde(rename = "sColour")]
    pub s_colour: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemProperty {
    pub name: String,
    /// `(value, value_type)` pairs
    #[serde(default)]
    pub values: Vec<(String, u32)>,
    #[serde(rename = "displayMode", default)]
    pub display_mode: u32,
    #[serde(rename = "type", default)]
    pub kind: Option<u32>,
}

/// Passive tree allocation returned by `get-passive-skills`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassiveSkills {
    pub hashes: Vec<u32>,
    #[serde(default)]
    pub hashes_ex: Vec<u32>,
    /// Mastery node hash to effect hash. Sent as `{}` or `[]` depending on the league.
    #[serde(default)]
    pub mastery_effects: serde_json::Value,
    /// Jewels socketed into the tree
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub jewel_data: HashMap<String, serde_json::Value>,
}

impl PassiveSkills {
    /// Number of allocated nodes, cluster jewel nodes included
    pub fn allocated_count(&self) -> usize {
        self.hashes.len() + self.hashes_ex.len()
    }
}
