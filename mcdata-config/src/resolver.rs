use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct ResolverConfig {
    /// Search older major versions when the requested major version has no
    /// shipped dataset at or before the requested release.
    pub cross_major_fallback: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            cross_major_fallback: true,
        }
    }
}
