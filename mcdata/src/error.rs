use std::path::PathBuf;

use mcdata_core::{Family, Platform};
use mcdata_versions::VersionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error(transparent)]
    Version(#[from] VersionError),
    #[error("No {family} data for {platform} {version}")]
    MissingData {
        family: Family,
        platform: Platform,
        version: String,
    },
    #[error("No schema shipped for {0}")]
    MissingSchema(Family),
    #[error("Failed to parse {family}: {detail}")]
    Parse { family: String, detail: String },
    #[error("No item or block with the key {0}")]
    NotFound(String),
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DataError {
    pub(crate) fn parse(family: impl ToString, err: impl ToString) -> Self {
        Self::Parse {
            family: family.to_string(),
            detail: err.to_string(),
        }
    }
}
