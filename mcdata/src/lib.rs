//! Versioned access to the minecraft-data tables.
//!
//! ```no_run
//! let data = mcdata::request("1.16.5")?;
//! let stone = data.blocks().by_name("stone");
//! # Ok::<(), mcdata::DataError>(())
//! ```

use std::sync::OnceLock;

use mcdata_config::DATA_CONFIG;

mod builder;
mod cache;
mod error;
mod index;
mod logging;
mod minecraft;
mod provider;
mod store;

pub use builder::IndexBuilder;
pub use cache::DataCache;
pub use error::DataError;
pub use index::Index;
pub use logging::init_logger;
pub use minecraft::{McData, MinecraftData};
pub use provider::{FsDataProvider, MemoryDataProvider, RawDataProvider};
pub use store::{IndexedData, ItemOrBlock};

pub use mcdata_config as config;
pub use mcdata_core::{Family, Platform, Version};
pub use mcdata_registry as registry;
pub use mcdata_versions::{
    DataKey, ResolvedVersion, VersionCatalog, VersionError, VersionId, VersionRequest,
};

static MC_DATA: OnceLock<McData> = OnceLock::new();

/// The process-wide [`McData`] over the configured data root, opened on first use.
pub fn global() -> Result<&'static McData, DataError> {
    if let Some(data) = MC_DATA.get() {
        return Ok(data);
    }
    let data = McData::from_config(&DATA_CONFIG)?;
    Ok(MC_DATA.get_or_init(|| data))
}

/// [`McData::request`] on the process-wide instance.
pub fn request(version: impl Into<VersionRequest>) -> Result<MinecraftData, DataError> {
    global()?.request(version)
}
