//! Configuration settings for yba-ctl.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::CtlError;

/// Default location of the controller configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "/opt/yba-ctl/yba-ctl.toml";

/// Accepted log levels, for both the config file and `--log-level`.
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Main configuration structure for the controller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub installation: InstallationConfig,
    #[serde(default)]
    pub systemd: SystemdConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Installation layout configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct InstallationConfig {
    /// Root directory of the YugabyteDB Anywhere installation.
    #[serde(default = "default_install_root")]
    pub root: PathBuf,
    /// Explicit path to the installed version metadata.
    ///
    /// When unset, the file is looked up under the active software directory.
    pub metadata_file: Option<PathBuf>,
}

/// Systemd configuration for the managed services.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemdConfig {
    /// Use the per-user systemd instance (`systemctl --user`).
    #[serde(default)]
    pub user_mode: bool,
    /// Timeout for a single systemctl invocation, in seconds.
    #[serde(default = "default_systemd_timeout")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub units: UnitsConfig,
}

/// Systemd unit names for each managed service.
#[derive(Debug, Clone, Deserialize)]
pub struct UnitsConfig {
    #[serde(default = "default_postgres_unit")]
    pub postgres: String,
    #[serde(default = "default_prometheus_unit")]
    pub prometheus: String,
    #[serde(default = "default_platform_unit")]
    pub yb_platform: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format ("pretty" or "json").
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_install_root() -> PathBuf {
    PathBuf::from("/opt/yugabyte")
}

fn default_systemd_timeout() -> u64 {
    120
}

fn default_postgres_unit() -> String {
    "postgres.service".to_string()
}

fn default_prometheus_unit() -> String {
    "prometheus.service".to_string()
}

fn default_platform_unit() -> String {
    "yb-platform.service".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for InstallationConfig {
    fn default() -> Self {
        Self {
            root: default_install_root(),
            metadata_file: None,
        }
    }
}

impl Default for SystemdConfig {
    fn default() -> Self {
        Self {
            user_mode: false,
            timeout_seconds: default_systemd_timeout(),
            units: UnitsConfig::default(),
        }
    }
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            postgres: default_postgres_unit(),
            prometheus: default_prometheus_unit(),
            yb_platform: default_platform_unit(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl InstallationConfig {
    /// Path of the version metadata written by the installer.
    pub fn metadata_path(&self) -> PathBuf {
        match &self.metadata_file {
            Some(path) => path.clone(),
            None => self
                .root
                .join("software")
                .join("active")
                .join("yba_installer")
                .join("version_metadata.json"),
        }
    }
}

impl Settings {
    /// Load settings from a TOML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CtlError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CtlError::Config {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;

        Self::from_toml(&content).map_err(|e| match e {
            CtlError::Config { message } => CtlError::Config {
                message: format!("{} ({})", message, path.display()),
            },
            other => other,
        })
    }

    /// Load settings, falling back to defaults when the file does not exist.
    ///
    /// Only used for the default config location; an explicitly requested
    /// file must exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, CtlError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, CtlError> {
        let settings: Settings = toml::from_str(content).map_err(|e| CtlError::Config {
            message: format!("Failed to parse config: {}", e),
        })?;

        settings.validate()?;

        Ok(settings)
    }

    /// Validate the settings.
    fn validate(&self) -> Result<(), CtlError> {
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(CtlError::Config {
                message: format!(
                    "Invalid log level '{}'. Valid levels: {:?}",
                    self.logging.level, LOG_LEVELS
                ),
            });
        }

        let valid_formats = ["pretty", "json"];
        if !valid_formats.contains(&self.logging.format.to_lowercase().as_str()) {
            return Err(CtlError::Config {
                message: format!(
                    "Invalid log format '{}'. Valid formats: {:?}",
                    self.logging.format, valid_formats
                ),
            });
        }

        if self.systemd.timeout_seconds == 0 {
            return Err(CtlError::Config {
                message: "systemd.timeout_seconds must be greater than zero".to_string(),
            });
        }

        let units = &self.systemd.units;
        for (key, unit) in [
            ("postgres", &units.postgres),
            ("prometheus", &units.prometheus),
            ("yb_platform", &units.yb_platform),
        ] {
            if unit.trim().is_empty() {
                return Err(CtlError::Config {
                    message: format!("systemd.units.{} cannot be empty", key),
                });
            }
        }

        Ok(())
    }
}
