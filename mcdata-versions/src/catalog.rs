use std::collections::{BTreeMap, HashMap, HashSet};

use log::debug;
use mcdata_core::{Platform, Version};

use crate::VersionError;

/// Versions of one platform, oldest first, plus the keys that have data.
#[derive(Debug, Clone, Default)]
pub struct PlatformCatalog {
    versions: Vec<Version>,
    by_minecraft_version: HashMap<String, usize>,
    supported: HashSet<String>,
}

impl PlatformCatalog {
    /// `newest_first` is the protocol-version list in its shipped order.
    /// Supported keys the list does not know are placed before every listed
    /// version, in the order given.
    pub fn new(newest_first: Vec<Version>, supported: impl IntoIterator<Item = String>) -> Self {
        let supported: Vec<String> = supported.into_iter().collect();

        let mut listed = Vec::with_capacity(newest_first.len());
        let mut seen = HashSet::new();
        for version in newest_first.into_iter().rev() {
            let Some(name) = version.minecraft_version.clone() else {
                debug!("Skipping version entry without minecraftVersion: {version:?}");
                continue;
            };
            if seen.insert(name) {
                listed.push(version);
            }
        }

        let mut versions: Vec<Version> = supported
            .iter()
            .filter(|key| !seen.contains(key.as_str()))
            .map(|key| Version::named(key.as_str()))
            .collect();
        versions.extend(listed);

        let by_minecraft_version = versions
            .iter()
            .enumerate()
            .filter_map(|(index, version)| {
                version
                    .minecraft_version
                    .clone()
                    .map(|name| (name, index))
            })
            .collect();

        Self {
            versions,
            by_minecraft_version,
            supported: supported.into_iter().collect(),
        }
    }

    /// Oldest first.
    pub fn versions(&self) -> &[Version] {
        &self.versions
    }

    pub fn index_of(&self, minecraft_version: &str) -> Option<usize> {
        self.by_minecraft_version.get(minecraft_version).copied()
    }

    pub fn get(&self, minecraft_version: &str) -> Option<&Version> {
        self.index_of(minecraft_version).map(|index| &self.versions[index])
    }

    pub fn is_supported(&self, minecraft_version: &str) -> bool {
        self.supported.contains(minecraft_version)
    }

    /// Every entry carries a `minecraftVersion`; `new` drops those that don't.
    pub(crate) fn name_at(&self, index: usize) -> &str {
        self.versions[index]
            .minecraft_version
            .as_deref()
            .unwrap_or_default()
    }

    /// Whether the entry at `index` has a shipped dataset.
    pub(crate) fn is_supported_at(&self, index: usize) -> bool {
        self.versions[index]
            .minecraft_version
            .as_deref()
            .is_some_and(|name| self.is_supported(name))
    }

    /// Supported keys, oldest first.
    pub fn supported(&self) -> Vec<&str> {
        self.versions
            .iter()
            .filter_map(|version| version.minecraft_version.as_deref())
            .filter(|name| self.is_supported(name))
            .collect()
    }

    /// Protocol number to version, restricted to one side of the netty
    /// transition. Where several releases share a number the newest wins.
    pub fn by_protocol(&self, netty: bool) -> HashMap<u32, &Version> {
        let mut map = HashMap::new();
        for version in self.versions.iter().rev() {
            if version.uses_netty() != netty {
                continue;
            }
            if let Some(protocol) = version.version {
                map.entry(protocol).or_insert(version);
            }
        }
        map
    }
}

/// Every known version of every platform. Built once, then read-only.
#[derive(Debug, Clone, Default)]
pub struct VersionCatalog {
    platforms: BTreeMap<Platform, PlatformCatalog>,
}

impl VersionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, platform: Platform, catalog: PlatformCatalog) {
        self.platforms.insert(platform, catalog);
    }

    /// Reads a `protocolVersions.json` document for `platform`.
    pub fn insert_json(
        &mut self,
        platform: Platform,
        protocol_versions: &str,
        supported: impl IntoIterator<Item = String>,
    ) -> Result<(), VersionError> {
        let newest_first: Vec<Version> =
            serde_json::from_str(protocol_versions).map_err(|err| VersionError::Catalog {
                platform,
                detail: err.to_string(),
            })?;
        self.insert(platform, PlatformCatalog::new(newest_first, supported));
        Ok(())
    }

    pub fn platform(&self, platform: Platform) -> Option<&PlatformCatalog> {
        self.platforms.get(&platform)
    }

    pub fn platforms(&self) -> impl Iterator<Item = (Platform, &PlatformCatalog)> {
        self.platforms.iter().map(|(platform, catalog)| (*platform, catalog))
    }

    /// Oldest first; empty for a platform without a catalog.
    pub fn all_versions(&self, platform: Platform) -> &[Version] {
        self.platform(platform)
            .map(PlatformCatalog::versions)
            .unwrap_or_default()
    }

    pub fn is_supported(&self, platform: Platform, minecraft_version: &str) -> bool {
        self.platform(platform)
            .is_some_and(|catalog| catalog.is_supported(minecraft_version))
    }

    pub fn metadata_for(&self, platform: Platform, minecraft_version: &str) -> Option<&Version> {
        self.platform(platform)?.get(minecraft_version)
    }

    /// All platforms' versions in one list, each platform oldest first.
    pub fn versions(&self) -> Vec<&Version> {
        self.platforms
            .values()
            .flat_map(|catalog| catalog.versions())
            .collect()
    }

    pub fn versions_by_minecraft_version(&self) -> BTreeMap<Platform, HashMap<&str, &Version>> {
        self.platforms
            .iter()
            .map(|(platform, catalog)| {
                let map = catalog
                    .versions()
                    .iter()
                    .filter_map(|version| Some((version.minecraft_version.as_deref()?, version)))
                    .collect();
                (*platform, map)
            })
            .collect()
    }

    pub fn pre_netty_versions_by_protocol_version(&self) -> BTreeMap<Platform, HashMap<u32, &Version>> {
        self.platforms
            .iter()
            .map(|(platform, catalog)| (*platform, catalog.by_protocol(false)))
            .collect()
    }

    pub fn post_netty_versions_by_protocol_version(
        &self,
    ) -> BTreeMap<Platform, HashMap<u32, &Version>> {
        self.platforms
            .iter()
            .map(|(platform, catalog)| (*platform, catalog.by_protocol(true)))
            .collect()
    }

    pub fn supported_versions(&self) -> BTreeMap<Platform, Vec<&str>> {
        self.platforms
            .iter()
            .map(|(platform, catalog)| (*platform, catalog.supported()))
            .collect()
    }
}
