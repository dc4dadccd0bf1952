use std::{collections::HashMap, ops::RangeInclusive};

use serde::Deserialize;

use crate::Variation;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: u32,
    pub name: String,
    pub display_name: String,
    /// `null` for unbreakable blocks such as bedrock.
    #[serde(default)]
    pub hardness: Option<f64>,
    #[serde(default = "crate::default_stack_size")]
    pub stack_size: u32,
    #[serde(default)]
    pub diggable: bool,
    #[serde(default)]
    pub bounding_box: BoundingBox,
    #[serde(default)]
    pub material: Option<String>,
    /// Item ids of the tools that harvest this block without the time penalty.
    #[serde(default)]
    pub harvest_tools: Option<HashMap<u32, bool>>,
    #[serde(default)]
    pub variations: Option<Vec<Variation>>,
    #[serde(default)]
    pub states: Option<Vec<BlockStateProperty>>,
    #[serde(default)]
    pub drops: Vec<BlockDrop>,
    #[serde(default)]
    pub transparent: bool,
    #[serde(default)]
    pub emit_light: u8,
    #[serde(default)]
    pub filter_light: u8,
    #[serde(default)]
    pub min_state_id: Option<u32>,
    #[serde(default)]
    pub max_state_id: Option<u32>,
    #[serde(default)]
    pub default_state: Option<u32>,
}

impl Block {
    /// All block state ids of this block, when the table carries them.
    pub fn state_ids(&self) -> Option<RangeInclusive<u32>> {
        match (self.min_state_id, self.max_state_id) {
            (Some(min), Some(max)) if min <= max => Some(min..=max),
            _ => None,
        }
    }

    /// Whether breaking with `item_id` in hand yields drops. Blocks without a
    /// `harvestTools` list drop with any tool or none.
    pub fn can_harvest(&self, item_id: Option<u32>) -> bool {
        let Some(tools) = &self.harvest_tools else {
            return true;
        };
        item_id.is_some_and(|id| tools.get(&id).copied().unwrap_or(false))
    }
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BoundingBox {
    #[default]
    Block,
    Empty,
}

/// One property of a flattened block, e.g. `facing` or `waterlogged`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct BlockStateProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: BlockStateKind,
    #[serde(default)]
    pub values: Option<Vec<serde_json::Value>>,
    pub num_values: u32,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BlockStateKind {
    Enum,
    Bool,
    Int,
}

/// Either a bare item id or a drop with a count range.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum BlockDrop {
    Id(u32),
    Ranged {
        #[serde(default, rename = "minCount")]
        min_count: Option<f64>,
        #[serde(default, rename = "maxCount")]
        max_count: Option<f64>,
        drop: DropTarget,
    },
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum DropTarget {
    Id(u32),
    WithMetadata { id: u32, metadata: u32 },
}

impl BlockDrop {
    pub fn item_id(&self) -> u32 {
        match self {
            Self::Id(id) => *id,
            Self::Ranged { drop, .. } => match drop {
                DropTarget::Id(id) | DropTarget::WithMetadata { id, .. } => *id,
            },
        }
    }

    /// Minimum and maximum count. `minCount` defaults to 1 and `maxCount` to `minCount`.
    pub fn count_range(&self) -> (f64, f64) {
        match self {
            Self::Id(_) => (1.0, 1.0),
            Self::Ranged {
                min_count,
                max_count,
                ..
            } => {
                let min = min_count.unwrap_or(1.0);
                (min, max_count.unwrap_or(min))
            }
        }
    }
}
