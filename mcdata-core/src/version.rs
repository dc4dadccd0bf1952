use serde::{Deserialize, Serialize};

/// Release metadata, as found in `protocolVersions.json` and in the
/// per-dataset `version.json`. Which fields are present depends on the
/// platform and on the age of the release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    /// Protocol number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minecraft_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses_netty: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_type: Option<String>,
}

impl Version {
    /// Minimal entry for a dataset key that the protocol list does not know.
    pub fn named(minecraft_version: impl Into<String>) -> Self {
        Self {
            minecraft_version: Some(minecraft_version.into()),
            ..Default::default()
        }
    }

    /// Entries without the flag count as modern.
    pub fn uses_netty(&self) -> bool {
        self.uses_netty.unwrap_or(true)
    }
}
