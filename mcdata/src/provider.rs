use std::{
    collections::{BTreeMap, HashMap},
    fs, io,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use log::{debug, warn};
use mcdata_core::{Family, Platform};
use mcdata_versions::{DataKey, PlatformCatalog, VersionCatalog};
use serde_json::Value;

use crate::DataError;

/// Source of the raw JSON tables.
///
/// Implementations only hand out documents; indexing happens in
/// [`IndexBuilder`](crate::IndexBuilder).
pub trait RawDataProvider: Send + Sync {
    /// Every known version per platform plus the keys that ship data.
    fn catalog(&self) -> Result<VersionCatalog, DataError>;

    /// Whether the dataset declares a table for `family`.
    fn provides(&self, family: Family, key: &DataKey) -> bool;

    /// The raw table. Fails with [`DataError::MissingData`] when the dataset
    /// has none.
    fn load_family(&self, family: Family, key: &DataKey) -> Result<Value, DataError>;

    fn load_schema(&self, family: Family) -> Result<Value, DataError>;
}

/// `dataPaths.json`: platform -> version -> family -> directory.
type Manifest = BTreeMap<Platform, IndexMap<String, HashMap<String, String>>>;

/// Reads a minecraft-data checkout:
///
/// ```text
/// <root>/dataPaths.json
/// <root>/<pc|bedrock>/common/protocolVersions.json
/// <root>/<path from dataPaths>/<family>.json
/// <root>/schemas/<family>_schema.json
/// ```
pub struct FsDataProvider {
    root: PathBuf,
    manifest: Manifest,
}

impl FsDataProvider {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, DataError> {
        let root = root.into();
        let manifest = read_json(&root.join("dataPaths.json"))?
            .ok_or_else(|| DataError::Io {
                path: root.join("dataPaths.json"),
                source: io::ErrorKind::NotFound.into(),
            })?;
        let manifest: Manifest =
            serde_json::from_value(manifest).map_err(|err| DataError::parse("dataPaths.json", err))?;

        for (platform, versions) in &manifest {
            debug!("{platform}: {} datasets under {}", versions.len(), root.display());
        }
        Ok(Self { root, manifest })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn family_path(&self, family: Family, key: &DataKey) -> Option<PathBuf> {
        let dir = self
            .manifest
            .get(&key.platform)?
            .get(&key.version)?
            .get(family.key())?;
        Some(self.root.join(dir).join(format!("{}.json", family.file_stem())))
    }
}

impl RawDataProvider for FsDataProvider {
    fn catalog(&self) -> Result<VersionCatalog, DataError> {
        let mut catalog = VersionCatalog::new();
        for (platform, versions) in &self.manifest {
            let supported = versions.keys().cloned();
            let path = self
                .root
                .join(platform.data_dir())
                .join("common")
                .join("protocolVersions.json");

            match fs::read_to_string(&path) {
                Ok(json) => catalog.insert_json(*platform, &json, supported)?,
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    warn!("No protocol versions for {platform} at {path:?}, only shipped versions are known");
                    catalog.insert(*platform, PlatformCatalog::new(Vec::new(), supported));
                }
                Err(source) => return Err(DataError::Io { path, source }),
            }
        }
        Ok(catalog)
    }

    fn provides(&self, family: Family, key: &DataKey) -> bool {
        self.family_path(family, key).is_some()
    }

    fn load_family(&self, family: Family, key: &DataKey) -> Result<Value, DataError> {
        let missing = || DataError::MissingData {
            family,
            platform: key.platform,
            version: key.version.clone(),
        };
        let path = self.family_path(family, key).ok_or_else(missing)?;
        read_json(&path)?.ok_or_else(missing)
    }

    fn load_schema(&self, family: Family) -> Result<Value, DataError> {
        let path = self
            .root
            .join("schemas")
            .join(format!("{}_schema.json", family.key()));
        read_json(&path)?.ok_or(DataError::MissingSchema(family))
    }
}

/// `Ok(None)` when the file does not exist.
fn read_json(path: &Path) -> Result<Option<Value>, DataError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(DataError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|err| DataError::parse(path.display(), err))
}

/// Tables held in memory, e.g. embedded with `include_str!`.
#[derive(Default)]
pub struct MemoryDataProvider {
    catalog: VersionCatalog,
    tables: HashMap<(DataKey, Family), Value>,
    schemas: HashMap<Family, Value>,
}

impl MemoryDataProvider {
    pub fn new(catalog: VersionCatalog) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_table(mut self, key: DataKey, family: Family, table: Value) -> Self {
        self.tables.insert((key, family), table);
        self
    }

    #[must_use]
    pub fn with_schema(mut self, family: Family, schema: Value) -> Self {
        self.schemas.insert(family, schema);
        self
    }
}

impl RawDataProvider for MemoryDataProvider {
    fn catalog(&self) -> Result<VersionCatalog, DataError> {
        Ok(self.catalog.clone())
    }

    fn provides(&self, family: Family, key: &DataKey) -> bool {
        self.tables.contains_key(&(key.clone(), family))
    }

    fn load_family(&self, family: Family, key: &DataKey) -> Result<Value, DataError> {
        self.tables
            .get(&(key.clone(), family))
            .cloned()
            .ok_or_else(|| DataError::MissingData {
                family,
                platform: key.platform,
                version: key.version.clone(),
            })
    }

    fn load_schema(&self, family: Family) -> Result<Value, DataError> {
        self.schemas
            .get(&family)
            .cloned()
            .ok_or(DataError::MissingSchema(family))
    }
}
