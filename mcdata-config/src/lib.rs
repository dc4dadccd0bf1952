use log::warn;
use logging::LoggingConfig;
use mcdata_core::Platform;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

pub mod logging;
mod resolver;

pub use resolver::ResolverConfig;

/// Environment variable pointing at an alternative configuration file.
pub const CONFIG_PATH_ENV: &str = "MCDATA_CONFIG";

pub static DATA_CONFIG: LazyLock<DataConfiguration> = LazyLock::new(DataConfiguration::load);

/// Where the data tables live and how versions get resolved against them.
///
/// Every field has a default, so a missing or partial `mcdata.toml` is fine.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct DataConfiguration {
    /// Root of the data tree, the directory holding `dataPaths.json`.
    pub data_path: PathBuf,
    /// Platform preferred when a protocol number exists on several platforms
    /// and the request carries no hint.
    pub default_platform: Platform,
    pub resolver: ResolverConfig,
    pub logging: LoggingConfig,
}

impl Default for DataConfiguration {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data"),
            default_platform: Platform::Pc,
            resolver: ResolverConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

pub trait LoadTomlConfiguration {
    fn load() -> Self
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let path = Self::get_path();

        let config = if path.exists() {
            let file_content = fs::read_to_string(&path)
                .unwrap_or_else(|_| panic!("Couldn't read configuration file at {:?}", path));

            Self::parse(&file_content).unwrap_or_else(|err| {
                panic!(
                    "Couldn't parse config at {:?}. Reason: {}. Fix or delete the file to fall back to the defaults",
                    path,
                    err.message()
                )
            })
        } else {
            warn!(
                "No configuration file at {:?}, using default configuration",
                path
            );
            Self::default()
        };

        config.validate();
        config
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error>
    where
        Self: Sized + DeserializeOwned,
    {
        toml::from_str(content)
    }

    fn get_path() -> PathBuf;

    fn validate(&self);
}

impl LoadTomlConfiguration for DataConfiguration {
    fn get_path() -> PathBuf {
        env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| Path::new("mcdata.toml").to_path_buf())
    }

    fn validate(&self) {
        assert!(
            !self.data_path.as_os_str().is_empty(),
            "data_path must not be empty"
        );
    }
}
