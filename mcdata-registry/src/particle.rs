use serde::Deserialize;

/// Both fields are optional in the tables; entries missing one are only
/// reachable through the ordered list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Particle {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
}
