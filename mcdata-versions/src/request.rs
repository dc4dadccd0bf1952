use std::fmt;

use mcdata_core::Platform;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum VersionId {
    /// A protocol number.
    Protocol(u32),
    /// A `minecraftVersion` such as `1.16.5`, or a major version such as `1.16`.
    Named(String),
}

/// What a caller asked for, before resolution.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VersionRequest {
    pub id: VersionId,
    pub platform: Option<Platform>,
    /// Match protocol numbers against pre-netty releases only.
    pub pre_netty: bool,
}

impl VersionRequest {
    pub fn protocol(protocol: u32) -> Self {
        Self {
            id: VersionId::Protocol(protocol),
            platform: None,
            pre_netty: false,
        }
    }

    /// Parses an optional `pc_` / `pe_` / `bedrock_` prefix as the platform.
    pub fn named(version: &str) -> Self {
        let (platform, version) = Platform::split_prefixed(version);
        Self {
            id: VersionId::Named(version.to_string()),
            platform,
            pre_netty: false,
        }
    }

    #[must_use]
    pub fn on(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    #[must_use]
    pub fn pre_netty(mut self) -> Self {
        self.pre_netty = true;
        self
    }
}

impl From<u32> for VersionRequest {
    fn from(protocol: u32) -> Self {
        Self::protocol(protocol)
    }
}

/// Lets untyped literals through, as in `request(754)`. A negative number is
/// kept as a name that no catalog knows, so it fails to resolve.
impl From<i32> for VersionRequest {
    fn from(protocol: i32) -> Self {
        u32::try_from(protocol).map_or_else(|_| Self::named(&protocol.to_string()), Self::protocol)
    }
}

impl From<&str> for VersionRequest {
    fn from(version: &str) -> Self {
        Self::named(version)
    }
}

impl From<String> for VersionRequest {
    fn from(version: String) -> Self {
        Self::named(&version)
    }
}

impl From<&String> for VersionRequest {
    fn from(version: &String) -> Self {
        Self::named(version)
    }
}

impl fmt::Display for VersionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(platform) = self.platform {
            write!(f, "{platform}_")?;
        }
        match &self.id {
            VersionId::Protocol(protocol) => write!(f, "protocol {protocol}"),
            VersionId::Named(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod test {
    use mcdata_core::Platform;

    use super::{VersionId, VersionRequest};

    #[test]
    fn from_inputs() {
        let request = VersionRequest::from("bedrock_1.17.10");
        assert_eq!(request.platform, Some(Platform::Pe));
        assert_eq!(request.id, VersionId::Named("1.17.10".to_string()));
        assert_eq!(request.to_string(), "pe_1.17.10");

        let request = VersionRequest::from(47u32).on(Platform::Pc);
        assert_eq!(request.id, VersionId::Protocol(47));
        assert_eq!(request.to_string(), "pc_protocol 47");
        assert!(!request.pre_netty);
        assert!(request.pre_netty().pre_netty);

        assert_eq!(VersionRequest::from(754).id, VersionId::Protocol(754));
        let negative = VersionRequest::from(-1);
        assert_eq!(negative.id, VersionId::Named("-1".to_string()));
        assert_eq!(negative.platform, None);
    }
}
