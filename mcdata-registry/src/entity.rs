use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: u32,
    /// Id used by older item metadata, e.g. spawn eggs.
    #[serde(default)]
    pub internal_id: Option<u32>,
    pub name: String,
    pub display_name: String,
    /// `mob`, `object`, and on newer versions finer categories like `hostile`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Entity {
    pub fn is_mob(&self) -> bool {
        self.kind == "mob"
    }

    pub fn is_object(&self) -> bool {
        self.kind == "object"
    }
}
