//! Installed version metadata written by the installer.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::CtlError;

use super::check::VersionSource;
use super::{format_version, normalize_build};

/// Contents of `version_metadata.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionMetadata {
    pub version_number: String,
    #[serde(default)]
    pub build_number: Option<String>,
}

impl VersionMetadata {
    pub fn new(version_number: impl Into<String>, build_number: Option<&str>) -> Self {
        Self {
            version_number: version_number.into(),
            build_number: build_number.map(str::to_string),
        }
    }

    /// Recorded build number, ignoring blank values.
    pub fn build(&self) -> Option<&str> {
        normalize_build(self.build_number.as_deref())
    }

    /// Full version string, `<version_number>-b<build_number>` when a build is recorded.
    pub fn version(&self) -> String {
        format_version(self.version_number.trim(), self.build())
    }
}

/// Version metadata stored on disk.
#[derive(Debug, Clone)]
pub struct MetadataFile {
    path: PathBuf,
}

impl MetadataFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the metadata file.
    pub fn load(&self) -> Result<VersionMetadata, CtlError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| CtlError::Metadata {
            message: format!(
                "failed to read version metadata '{}': {}",
                self.path.display(),
                e
            ),
        })?;

        let metadata: VersionMetadata =
            serde_json::from_str(&content).map_err(|e| CtlError::Metadata {
                message: format!(
                    "failed to parse version metadata '{}': {}",
                    self.path.display(),
                    e
                ),
            })?;
        if metadata.version_number.trim().is_empty() {
            return Err(CtlError::Metadata {
                message: format!(
                    "version metadata '{}' has an empty version_number",
                    self.path.display()
                ),
            });
        }

        debug!(path = %self.path.display(), version = %metadata.version(), "Loaded version metadata");
        Ok(metadata)
    }
}

impl VersionSource for MetadataFile {
    fn installed_version(&self) -> Result<VersionMetadata, CtlError> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_metadata(dir: &TempDir, content: &str) -> MetadataFile {
        let path = dir.path().join("version_metadata.json");
        std::fs::write(&path, content).unwrap();
        MetadataFile::new(path)
    }

    #[test]
    fn test_version_without_build() {
        let dir = TempDir::new().unwrap();
        let file = write_metadata(&dir, r#"{"version_number": "2.20.0"}"#);
        let installed = file.installed_version().unwrap();
        assert_eq!(installed.version(), "2.20.0");
        assert_eq!(installed.build(), None);
    }

    #[test]
    fn test_version_with_build() {
        let dir = TempDir::new().unwrap();
        let file = write_metadata(
            &dir,
            r#"{"version_number": "2.20.0.0", "build_number": "50"}"#,
        );
        let installed = file.installed_version().unwrap();
        assert_eq!(installed.version(), "2.20.0.0-b50");
        assert_eq!(installed.build(), Some("50"));
    }

    #[test]
    fn test_blank_build_is_ignored() {
        let metadata = VersionMetadata::new("2.20.0", Some(" "));
        assert_eq!(metadata.build(), None);
        assert_eq!(metadata.version(), "2.20.0");
    }

    #[test]
    fn test_missing_file() {
        let file = MetadataFile::new("/nonexistent/version_metadata.json");
        let err = file.installed_version().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/version_metadata.json"));
    }

    #[test]
    fn test_malformed_json() {
        let dir = TempDir::new().unwrap();
        let file = write_metadata(&dir, "not json");
        let err = file.installed_version().unwrap_err();
        assert!(err.to_string().contains("failed to parse version metadata"));
    }

    #[test]
    fn test_empty_version_number() {
        let dir = TempDir::new().unwrap();
        let file = write_metadata(&dir, r#"{"version_number": ""}"#);
        assert!(matches!(file.installed_version(), Err(CtlError::Metadata { .. })));
    }
}
