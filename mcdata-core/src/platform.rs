use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq)]
pub struct ParsePlatformError;

/// Edition a dataset belongs to. `pe` covers every Bedrock release.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[default]
    #[serde(rename = "pc")]
    Pc,
    #[serde(rename = "pe", alias = "bedrock")]
    Pe,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Pc, Platform::Pe];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pc => "pc",
            Self::Pe => "pe",
        }
    }

    /// Directory the platform's tables live under in a minecraft-data tree.
    pub fn data_dir(&self) -> &'static str {
        match self {
            Self::Pc => "pc",
            Self::Pe => "bedrock",
        }
    }

    /// Splits a `pc_1.8` / `bedrock_1.17.10` style prefix off a version string.
    pub fn split_prefixed(input: &str) -> (Option<Platform>, &str) {
        match input.split_once('_') {
            Some((prefix, rest)) => match prefix.parse() {
                Ok(platform) => (Some(platform), rest),
                Err(_) => (None, input),
            },
            None => (None, input),
        }
    }
}

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pc" => Ok(Self::Pc),
            "pe" | "bedrock" => Ok(Self::Pe),
            _ => Err(ParsePlatformError),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::Platform;

    #[test]
    fn prefix_split() {
        assert_eq!(
            Platform::split_prefixed("pc_1.8"),
            (Some(Platform::Pc), "1.8")
        );
        assert_eq!(
            Platform::split_prefixed("bedrock_1.17.10"),
            (Some(Platform::Pe), "1.17.10")
        );
        assert_eq!(Platform::split_prefixed("1.8"), (None, "1.8"));
        // underscores that are not platform prefixes stay part of the version
        assert_eq!(
            Platform::split_prefixed("15w40b_pre"),
            (None, "15w40b_pre")
        );
    }
}
