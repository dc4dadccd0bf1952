use serde::Deserialize;

use crate::Variation;

/// Item fields plus the nutrition values.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub id: u32,
    pub name: String,
    pub display_name: String,
    #[serde(default = "crate::default_stack_size")]
    pub stack_size: u32,
    pub food_points: f64,
    pub saturation: f64,
    #[serde(default)]
    pub effective_quality: f64,
    #[serde(default)]
    pub saturation_ratio: f64,
    #[serde(default)]
    pub variations: Option<Vec<Variation>>,
}
