use mcdata_core::Platform;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Unknown version {0}")]
    UnknownVersion(String),
    #[error("Version {0} has no dataset, and no earlier version has one either")]
    UnsupportedVersion(String),
    #[error("Invalid version list for {platform}: {detail}")]
    Catalog { platform: Platform, detail: String },
}
