//! Prometheus service controller.

use crate::config::SystemdConfig;
use crate::error::CtlError;

use super::name::ServiceName;
use super::systemd::SystemdUnit;
use super::traits::ServiceController;

/// Prometheus metrics collector.
pub struct PrometheusService {
    unit: SystemdUnit,
}

impl PrometheusService {
    pub fn new(unit: SystemdUnit) -> Self {
        Self { unit }
    }

    pub fn from_config(config: &SystemdConfig) -> Self {
        Self::new(SystemdUnit::from_config(&config.units.prometheus, config))
    }
}

impl ServiceController for PrometheusService {
    fn name(&self) -> ServiceName {
        ServiceName::Prometheus
    }

    fn display_name(&self) -> &'static str {
        "Prometheus"
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
