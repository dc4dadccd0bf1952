use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    ops::Deref,
    path::PathBuf,
    sync::Arc,
};

use log::debug;
use mcdata_config::{DataConfiguration, ResolverConfig};
use mcdata_core::{Family, Platform, Version};
use mcdata_versions::{ResolvedVersion, VersionCatalog, VersionRequest, VersionResolver};
use serde_json::Value;

use crate::{DataCache, DataError, FsDataProvider, IndexBuilder, IndexedData, RawDataProvider};

/// Entry point: resolves requested versions against the catalog and hands
/// out indexed datasets, building each one at most once.
pub struct McData {
    provider: Box<dyn RawDataProvider>,
    catalog: VersionCatalog,
    cache: DataCache,
    preferred_platform: Platform,
    resolver: ResolverConfig,
}

impl McData {
    pub fn new(provider: impl RawDataProvider + 'static) -> Result<Self, DataError> {
        let catalog = provider.catalog()?;
        Ok(Self {
            provider: Box::new(provider),
            catalog,
            cache: DataCache::new(),
            preferred_platform: Platform::default(),
            resolver: ResolverConfig::default(),
        })
    }

    /// Opens a minecraft-data tree rooted at `data_root`.
    pub fn open(data_root: impl Into<PathBuf>) -> Result<Self, DataError> {
        Self::new(FsDataProvider::open(data_root)?)
    }

    pub fn from_config(config: &DataConfiguration) -> Result<Self, DataError> {
        Ok(Self::open(config.data_path.clone())?
            .prefer(config.default_platform)
            .with_resolver(config.resolver))
    }

    /// Platform picked when a protocol number exists on several platforms.
    #[must_use]
    pub fn prefer(mut self, platform: Platform) -> Self {
        self.preferred_platform = platform;
        self
    }

    #[must_use]
    pub fn with_resolver(mut self, resolver: ResolverConfig) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn resolve(&self, version: impl Into<VersionRequest>) -> Result<ResolvedVersion, DataError> {
        Ok(VersionResolver::new(&self.catalog)
            .prefer(self.preferred_platform)
            .cross_major_fallback(self.resolver.cross_major_fallback)
            .resolve(&version.into())?)
    }

    /// Indexed data for `version`: a version name such as `"1.16.4"` or
    /// `"bedrock_1.17.10"`, a protocol number, or a [`VersionRequest`].
    pub fn request(&self, version: impl Into<VersionRequest>) -> Result<MinecraftData, DataError> {
        let resolved = self.resolve(version)?;
        let store = self.cache.get_or_try_build(&resolved.key, || {
            debug!("Building {} for {}", resolved.key, resolved.request);
            IndexBuilder::new(self.provider.as_ref(), &resolved.key).build(&resolved.data)
        })?;
        Ok(MinecraftData { resolved, store })
    }

    pub fn catalog(&self) -> &VersionCatalog {
        &self.catalog
    }

    pub fn cache(&self) -> &DataCache {
        &self.cache
    }

    pub fn versions(&self) -> Vec<&Version> {
        self.catalog.versions()
    }

    pub fn versions_by_minecraft_version(&self) -> BTreeMap<Platform, HashMap<&str, &Version>> {
        self.catalog.versions_by_minecraft_version()
    }

    pub fn pre_netty_versions_by_protocol_version(&self) -> BTreeMap<Platform, HashMap<u32, &Version>> {
        self.catalog.pre_netty_versions_by_protocol_version()
    }

    pub fn post_netty_versions_by_protocol_version(&self) -> BTreeMap<Platform, HashMap<u32, &Version>> {
        self.catalog.post_netty_versions_by_protocol_version()
    }

    pub fn supported_versions(&self) -> BTreeMap<Platform, Vec<&str>> {
        self.catalog.supported_versions()
    }

    /// The JSON schema of a family, as shipped.
    pub fn schema(&self, family: Family) -> Result<Value, DataError> {
        self.provider.load_schema(family)
    }
}

/// A dataset as handed to one caller. Derefs to the shared [`IndexedData`]
/// and remembers which version was asked for.
#[derive(Clone)]
pub struct MinecraftData {
    resolved: ResolvedVersion,
    store: Arc<IndexedData>,
}

impl MinecraftData {
    /// Catalog entry of the requested version. Differs from
    /// [`IndexedData::version`] when the request fell back to an older dataset.
    pub fn requested_version(&self) -> &Version {
        &self.resolved.requested
    }

    pub fn resolution(&self) -> &ResolvedVersion {
        &self.resolved
    }

    pub fn is_fallback(&self) -> bool {
        self.resolved.is_fallback()
    }

    pub fn store(&self) -> &Arc<IndexedData> {
        &self.store
    }

    /// Whether both handles share one cached store.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.store, &b.store)
    }
}

impl Deref for MinecraftData {
    type Target = IndexedData;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

impl fmt::Debug for MinecraftData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinecraftData")
            .field("requested", &self.resolved.requested.minecraft_version)
            .field("data", &self.store.key())
            .finish()
    }
}
