//! Version pre-check run before every lifecycle command.

use std::fmt;

use tracing::{debug, error};

use crate::error::CtlError;

use super::metadata::VersionMetadata;
use super::{format_version, normalize_build, CONTROLLER_BUILD, CONTROLLER_VERSION};

/// Where the installed platform version is read from.
pub trait VersionSource {
    fn installed_version(&self) -> Result<VersionMetadata, CtlError>;
}

/// Version this controller was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerVersion {
    number: String,
    build: Option<String>,
}

impl ControllerVersion {
    pub fn new(number: impl Into<String>, build: Option<&str>) -> Self {
        Self {
            number: number.into(),
            build: normalize_build(build).map(str::to_string),
        }
    }

    /// Version compiled into this binary.
    pub fn embedded() -> Self {
        Self::new(CONTROLLER_VERSION, CONTROLLER_BUILD)
    }

    /// Whether `installed` is the installation this controller belongs to.
    ///
    /// Release numbers must be equal. Build numbers are compared only when
    /// the controller carries one; a binary built without a build number
    /// accepts any build of its release.
    pub fn matches(&self, installed: &VersionMetadata) -> bool {
        if installed.version_number.trim() != self.number {
            return false;
        }
        match &self.build {
            Some(build) => installed.build() == Some(build.as_str()),
            None => true,
        }
    }
}

impl fmt::Display for ControllerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_version(&self.number, self.build.as_deref()))
    }
}

/// Compares the installed version against the controller version.
pub struct VersionCheck {
    source: Box<dyn VersionSource>,
    controller_version: ControllerVersion,
    skip: bool,
}

impl VersionCheck {
    pub fn new(
        source: Box<dyn VersionSource>,
        controller_version: ControllerVersion,
        skip: bool,
    ) -> Self {
        Self {
            source,
            controller_version,
            skip,
        }
    }

    /// Verify the installation before running `verb`.
    ///
    /// When skipped, the source is never consulted.
    pub fn verify(&self, verb: &'static str) -> Result<(), CtlError> {
        if self.skip {
            debug!(verb, "Version checks skipped");
            return Ok(());
        }

        let installed = self
            .source
            .installed_version()
            .map_err(|e| CtlError::Precondition {
                verb,
                detail: e.to_string(),
            })?;

        if !self.controller_version.matches(&installed) {
            error!(
                installed = %installed.version(),
                expected = %self.controller_version,
                "Installed version does not match controller version"
            );
            return Err(CtlError::VersionMismatch {
                installed: installed.version(),
                expected: self.controller_version.to_string(),
            });
        }

        debug!(version = %installed.version(), "Installed version matches");
        Ok(())
    }
}
