use std::ops::Range;

use serde::{Deserialize, Deserializer};

/// Inventory layout of a container screen.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    /// e.g. `minecraft:furnace`; old tables use bare numbers, kept as their decimal string.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slots: Vec<WindowSlot>,
    #[serde(default)]
    pub properties: Vec<String>,
    #[serde(default)]
    pub opened_with: Vec<WindowOpener>,
}

/// A named slot, or a named run of `size` slots starting at `index`.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WindowSlot {
    pub name: String,
    pub index: u32,
    #[serde(default)]
    pub size: Option<u32>,
}

impl WindowSlot {
    pub fn range(&self) -> Range<u32> {
        self.index..self.index.saturating_add(self.size.unwrap_or(1))
    }
}

/// Something that opens a window when used.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowOpener {
    #[serde(rename = "type")]
    pub kind: OpenerKind,
    pub id: u32,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OpenerKind {
    Item,
    Entity,
    Block,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WindowId {
        Name(String),
        Number(u64),
    }

    Ok(match WindowId::deserialize(deserializer)? {
        WindowId::Name(name) => name,
        WindowId::Number(number) => number.to_string(),
    })
}

impl Window {
    pub fn slot(&self, name: &str) -> Option<&WindowSlot> {
        self.slots.iter().find(|slot| slot.name == name)
    }

    /// Slot indices covered by the named slot or range.
    pub fn slot_range(&self, name: &str) -> Option<Range<u32>> {
        self.slot(name).map(WindowSlot::range)
    }

    /// Total number of window slots, i.e. one past the highest slot index.
    pub fn slot_count(&self) -> u32 {
        self.slots
            .iter()
            .map(|slot| slot.range().end)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod test {
    use super::{OpenerKind, Window};

    #[test]
    fn furnace_layout() {
        let window: Window = serde_json::from_str(
            r#"{
                "id": "minecraft:furnace",
                "name": "Furnace",
                "slots": [
                    { "name": "ingredient", "index": 0 },
                    { "name": "fuel", "index": 1 },
                    { "name": "output", "index": 2 },
                    { "name": "inventory", "index": 3, "size": 36 }
                ],
                "properties": ["fireIcon", "maxFuel", "progressArrow", "maxProgress"],
                "openedWith": [{ "type": "block", "id": 61 }, { "type": "block", "id": 62 }]
            }"#,
        )
        .unwrap();

        assert_eq!(window.slot_range("fuel"), Some(1..2));
        assert_eq!(window.slot_range("inventory"), Some(3..39));
        assert_eq!(window.slot_range("hotbar"), None);
        assert_eq!(window.slot_count(), 39);
        assert_eq!(window.opened_with[1].kind, OpenerKind::Block);
        assert_eq!(window.opened_with[1].id, 62);
    }

    #[test]
    fn numeric_id() {
        let window: Window =
            serde_json::from_str(r#"{ "id": 3, "name": "Dispenser" }"#).unwrap();
        assert_eq!(window.id, "3");
        assert!(window.slots.is_empty());
        assert_eq!(window.slot_count(), 0);
    }

    #[test]
    fn oversized_slot_range() {
        let window: Window = serde_json::from_str(
            r#"{
                "id": "minecraft:generic_9x3",
                "name": "Chest",
                "slots": [{ "name": "storage", "index": 4294967290, "size": 27 }]
            }"#,
        )
        .unwrap();
        assert_eq!(window.slot_range("storage"), Some(4_294_967_290..u32::MAX));
        assert_eq!(window.slot_count(), u32::MAX);
    }
}
