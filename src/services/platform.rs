//! YugabyteDB Anywhere service controller.

use crate::config::SystemdConfig;
use crate::error::CtlError;

use super::name::ServiceName;
use super::systemd::SystemdUnit;
use super::traits::ServiceController;

/// The YugabyteDB Anywhere platform application.
pub struct PlatformService {
    unit: SystemdUnit,
}

impl PlatformService {
    pub fn new(unit: SystemdUnit) -> Self {
        Self { unit }
    }

    pub fn from_config(config: &SystemdConfig) -> Self {
        Self::new(SystemdUnit::from_config(&config.units.yb_platform, config))
    }
}

impl ServiceController for PlatformService {
    fn name(&self) -> ServiceName {
        ServiceName::YbPlatform
    }

    fn display_name(&self) -> &'static str {
        "YugabyteDB Anywhere"
    }

    fn start(&self) -> Result<(), CtlError> {
        self.unit.start()
    }

    fn stop(&self) -> Result<(), CtlError> {
        self.unit.stop()
    }

    fn restart(&self) -> Result<(), CtlError> {
        self.unit.restart()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_service() {
        let service = PlatformService::from_config(&SystemdConfig::default());
        assert_eq!(service.name(), ServiceName::YbPlatform);
        assert_eq!(service.display_name(), "YugabyteDB Anywhere");
        assert_eq!(service.unit.unit(), "yb-platform.service");
    }
}
