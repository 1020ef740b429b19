//! PostgreSQL service controller.

use crate::config::SystemdConfig;
use crate::error::CtlError;

use super::name::ServiceName;
use super::systemd::SystemdUnit;
use super::traits::ServiceController;

/// PostgreSQL database holding the platform's metadata.
pub struct PostgresService {
    unit: SystemdUnit,
}

impl PostgresService {
    pub fn new(unit: SystemdUnit) -> Self {
        Self { unit }
    }

    pub fn from_config(config: &SystemdConfig) -> Self {
        Self::new(SystemdUnit::from_config(&config.units.postgres, config))
    }
}

impl ServiceController for PostgresService {
    fn name(&self) -> ServiceName {
        ServiceName::Postgres
    }

    fn display_name(&self) -> &'static str {
        "PostgreSQL"
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
