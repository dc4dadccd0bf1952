pub mod family;
pub mod platform;
pub mod version;

pub use family::Family;
pub use platform::Platform;
pub use version::Version;
