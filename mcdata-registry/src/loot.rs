use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct BlockLootEntry {
    pub block: String,
    pub drops: Vec<BlockItemDrop>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlockItemDrop {
    pub item: String,
    /// Percent chance, 0 to 100.
    pub drop_chance: f64,
    pub stack_size_range: Vec<Option<f64>>,
    #[serde(default)]
    pub block_age: Option<u32>,
    #[serde(default)]
    pub silk_touch: Option<bool>,
    #[serde(default)]
    pub no_silk_touch: Option<bool>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct EntityLootEntry {
    pub entity: String,
    pub drops: Vec<EntityItemDrop>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntityItemDrop {
    pub item: String,
    pub drop_chance: f64,
    pub stack_size_range: Vec<Option<f64>>,
    #[serde(default)]
    pub player_kill: Option<bool>,
}

/// `[min]` or `[min, max]`; a missing max means exactly `min`.
fn min_max(range: &[Option<f64>]) -> Option<(f64, f64)> {
    let min = (*range.first()?)?;
    let max = range.get(1).copied().flatten().unwrap_or(min);
    Some((min, max))
}

impl BlockItemDrop {
    pub fn stack_size(&self) -> Option<(f64, f64)> {
        min_max(&self.stack_size_range)
    }
}

impl EntityItemDrop {
    pub fn stack_size(&self) -> Option<(f64, f64)> {
        min_max(&self.stack_size_range)
    }
}

#[cfg(test)]
mod test {
    use super::{BlockLootEntry, EntityLootEntry};

    #[test]
    fn block_loot_conditions() {
        let entry: BlockLootEntry = serde_json::from_str(
            r#"{
                "block": "grass_block",
                "drops": [
                    { "item": "grass_block", "dropChance": 1, "stackSizeRange": [1], "silkTouch": true },
                    { "item": "dirt", "dropChance": 1, "stackSizeRange": [1, 1], "noSilkTouch": true }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(entry.drops[0].silk_touch, Some(true));
        assert_eq!(entry.drops[0].stack_size(), Some((1.0, 1.0)));
        assert_eq!(entry.drops[1].no_silk_touch, Some(true));
    }

    #[test]
    fn entity_loot_range() {
        let entry: EntityLootEntry = serde_json::from_str(
            r#"{
                "entity": "zombie",
                "drops": [
                    { "item": "rotten_flesh", "dropChance": 1, "stackSizeRange": [0, 2] },
                    { "item": "iron_ingot", "dropChance": 0.025, "stackSizeRange": [1], "playerKill": true }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(entry.drops[0].stack_size(), Some((0.0, 2.0)));
        assert_eq!(entry.drops[1].player_kill, Some(true));
    }
}
