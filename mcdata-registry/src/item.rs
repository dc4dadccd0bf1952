use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub display_name: String,
    #[serde(default = "crate::default_stack_size")]
    pub stack_size: u32,
    #[serde(default)]
    pub variations: Option<Vec<Variation>>,
    /// `null` in the tables for items that cannot be damaged.
    #[serde(default)]
    pub durability: Option<u32>,
    #[serde(default)]
    pub max_durability: Option<u32>,
}

/// A metadata variant of a pre-flattening block or item, e.g. the colours of wool.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
    pub metadata: u32,
    pub display_name: String,
}

impl Item {
    pub fn variation(&self, metadata: u32) -> Option<&Variation> {
        self.variations
            .as_deref()?
            .iter()
            .find(|variation| variation.metadata == metadata)
    }
}
