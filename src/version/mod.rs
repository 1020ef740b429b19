//! Installation version checks.
//!
//! Before touching any service, the controller confirms that the installed
//! YugabyteDB Anywhere version is the one this binary was built for.

mod check;
mod metadata;

pub use check::{ControllerVersion, VersionCheck, VersionSource};
pub use metadata::{MetadataFile, VersionMetadata};

/// Release version embedded in this binary at compile time.
pub const CONTROLLER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build number embedded at compile time from `YBA_BUILD_NUMBER`, if set.
pub const CONTROLLER_BUILD: Option<&str> = option_env!("YBA_BUILD_NUMBER");

/// Render a version as `<number>` or `<number>-b<build>`.
pub(crate) fn format_version(number: &str, build: Option<&str>) -> String {
    match build {
        Some(build) => format!("{}-b{}", number, build),
        None => number.to_string(),
    }
}

/// Normalize an optional build number; blank values count as absent.
pub(crate) fn normalize_build(build: Option<&str>) -> Option<&str> {
    build.map(str::trim).filter(|b| !b.is_empty())
}
