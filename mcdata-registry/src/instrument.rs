use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Instrument {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sound: Option<String>,
}
