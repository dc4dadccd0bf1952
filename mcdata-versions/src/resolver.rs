use std::fmt;

use log::{debug, warn};
use mcdata_core::{Platform, Version};

use crate::{PlatformCatalog, VersionCatalog, VersionError, VersionId, VersionRequest};

/// Identifies one shipped dataset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DataKey {
    pub platform: Platform,
    pub version: String,
}

impl fmt::Display for DataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.platform, self.version)
    }
}

/// Outcome of resolving a request: the release that was asked for and the
/// dataset that will serve it. They differ whenever a fallback happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedVersion {
    pub platform: Platform,
    pub request: VersionRequest,
    /// Catalog entry the request matched.
    pub requested: Version,
    /// Catalog entry of the dataset that will be used.
    pub data: Version,
    pub key: DataKey,
}

impl ResolvedVersion {
    pub fn is_fallback(&self) -> bool {
        self.requested.minecraft_version != self.data.minecraft_version
    }
}

/// Maps requests onto shipped datasets:
///
/// 1. locate the catalog entry the request names,
/// 2. use it directly if it has data,
/// 3. otherwise take the nearest older release of the same major version
///    that has data,
/// 4. otherwise, if enabled, the nearest older release of any major version.
pub struct VersionResolver<'a> {
    catalog: &'a VersionCatalog,
    preferred: Platform,
    cross_major_fallback: bool,
}

impl<'a> VersionResolver<'a> {
    pub fn new(catalog: &'a VersionCatalog) -> Self {
        Self {
            catalog,
            preferred: Platform::Pc,
            cross_major_fallback: true,
        }
    }

    /// Platform that wins protocol-number ties when the request has no hint.
    #[must_use]
    pub fn prefer(mut self, platform: Platform) -> Self {
        self.preferred = platform;
        self
    }

    #[must_use]
    pub fn cross_major_fallback(mut self, enabled: bool) -> Self {
        self.cross_major_fallback = enabled;
        self
    }

    pub fn resolve(&self, request: &VersionRequest) -> Result<ResolvedVersion, VersionError> {
        let (platform, catalog, index) = self
            .locate(request)
            .ok_or_else(|| VersionError::UnknownVersion(request.to_string()))?;

        let data_index = self
            .dataset_for(catalog, index)
            .ok_or_else(|| VersionError::UnsupportedVersion(request.to_string()))?;

        let requested = catalog.versions()[index].clone();
        let data = catalog.versions()[data_index].clone();
        let key = DataKey {
            platform,
            version: catalog.name_at(data_index).to_string(),
        };

        if data_index != index {
            debug!(
                "{request} resolved to {} without a dataset, using {key}",
                catalog.name_at(index)
            );
        }

        Ok(ResolvedVersion {
            platform,
            request: request.clone(),
            requested,
            data,
            key,
        })
    }

    /// Hint first, then the preferred platform, then the rest.
    fn platform_order(&self, hint: Option<Platform>) -> Vec<Platform> {
        let mut order = Vec::with_capacity(Platform::ALL.len());
        for platform in hint
            .into_iter()
            .chain([self.preferred])
            .chain(Platform::ALL)
        {
            if !order.contains(&platform) {
                order.push(platform);
            }
        }
        order
    }

    fn locate(&self, request: &VersionRequest) -> Option<(Platform, &'a PlatformCatalog, usize)> {
        let catalogs: Vec<(Platform, &'a PlatformCatalog)> = match (&request.id, request.platform)
        {
            // an explicit prefix on a version name pins the platform
            (VersionId::Named(_), Some(platform)) => {
                vec![(platform, self.catalog.platform(platform)?)]
            }
            (_, hint) => self
                .platform_order(hint)
                .into_iter()
                .filter_map(|platform| Some((platform, self.catalog.platform(platform)?)))
                .collect(),
        };

        match &request.id {
            VersionId::Named(name) => catalogs
                .iter()
                .find_map(|(platform, catalog)| {
                    Some((*platform, *catalog, catalog.index_of(name)?))
                })
                .or_else(|| {
                    // a bare major version means its newest release
                    catalogs.iter().find_map(|(platform, catalog)| {
                        let index = catalog
                            .versions()
                            .iter()
                            .rposition(|version| version.major_version.as_deref() == Some(name.as_str()))?;
                        Some((*platform, *catalog, index))
                    })
                }),
            VersionId::Protocol(protocol) => catalogs.iter().find_map(|(platform, catalog)| {
                let index = catalog.versions().iter().rposition(|version| {
                    version.version == Some(*protocol) && !(request.pre_netty && version.uses_netty())
                })?;
                Some((*platform, *catalog, index))
            }),
        }
    }

    fn dataset_for(&self, catalog: &PlatformCatalog, index: usize) -> Option<usize> {
        if catalog.is_supported_at(index) {
            return Some(index);
        }

        let versions = catalog.versions();
        if let Some(major) = versions[index].major_version.as_deref() {
            let same_major = (0..index).rev().find(|&earlier| {
                versions[earlier].major_version.as_deref() == Some(major)
                    && catalog.is_supported_at(earlier)
            });
            if same_major.is_some() {
                return same_major;
            }
        }

        if !self.cross_major_fallback {
            return None;
        }
        let earlier = (0..index).rev().find(|&earlier| catalog.is_supported_at(earlier))?;
        warn!(
            "No {} dataset within major version {}, falling back to {}",
            catalog.name_at(index),
            versions[index].major_version.as_deref().unwrap_or("?"),
            catalog.name_at(earlier)
        );
        Some(earlier)
    }
}
