//! Known versions per platform and the policy that maps a requested version
//! onto a dataset that actually ships.

mod catalog;
mod error;
mod request;
mod resolver;

pub use catalog::{PlatformCatalog, VersionCatalog};
pub use error::VersionError;
pub use request::{VersionId, VersionRequest};
pub use resolver::{DataKey, ResolvedVersion, VersionResolver};
