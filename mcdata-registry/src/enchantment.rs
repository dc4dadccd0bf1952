use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Enchantment {
    pub id: u32,
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub max_level: Option<u32>,
}
