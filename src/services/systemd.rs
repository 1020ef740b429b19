//! Systemd unit control.
//!
//! Thin wrapper around `systemctl` shared by all built-in services.

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::SystemdConfig;
use crate::error::CtlError;
use crate::executor::SubprocessBuilder;

const SYSTEMCTL: &str = "systemctl";

/// A systemd unit driven through `systemctl`.
#[derive(Debug, Clone)]
pub struct SystemdUnit {
    unit: String,
    user_mode: bool,
    timeout: Duration,
}

impl SystemdUnit {
    pub fn new(unit: impl Into<String>, user_mode: bool, timeout: Duration) -> Self {
        Self {
            unit: unit.into(),
            user_mode,
            timeout,
        }
    }

    /// Build a unit using the shared systemd settings.
    pub fn from_config(unit: &str, config: &SystemdConfig) -> Self {
        Self::new(
            unit,
            config.user_mode,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn start(&self) -> Result<(), CtlError> {
        self.run("start")
    }

    pub fn stop(&self) -> Result<(), CtlError> {
        self.run("stop")
    }

    pub fn restart(&self) -> Result<(), CtlError> {
        self.run("restart")
    }

    fn command(&self, action: &str) -> SubprocessBuilder {
        let mut builder = SubprocessBuilder::new(SYSTEMCTL);
        if self.user_mode {
            builder = builder.arg("--user");
        }
        builder
            .args([action, self.unit.as_str()])
            .timeout(self.timeout)
    }

    fn run(&self, action: &str) -> Result<(), CtlError> {
        let command = self.command(action);
        debug!(unit = %self.unit, action, command = %command.command_line(), "Running systemctl");

        let result = command.run()?;
        if !result.success {
            let detail = result.failure_detail();
            warn!(unit = %self.unit, action, detail = %detail, "systemctl reported failure");
            return Err(CtlError::Service {
                message: format!("systemctl {} {} failed: {}", action, self.unit, detail),
            });
        }

        Ok(())
    }
}
