//! Service registry.
//!
//! Maps each service name to its controller and exposes the canonical order.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::Settings;
use crate::error::CtlError;

use super::name::ServiceName;
use super::platform::PlatformService;
use super::postgres::PostgresService;
use super::prometheus::PrometheusService;
use super::traits::ServiceController;

/// Registry of the controllers for every managed service.
///
/// Holds exactly one controller per entry of [`ServiceName::ORDER`] and is
/// immutable once built.
#[derive(Clone)]
pub struct ServiceRegistry {
    services: HashMap<ServiceName, Arc<dyn ServiceController>>,
}

impl ServiceRegistry {
    /// Build a registry from a set of controllers.
    ///
    /// Fails if a service is registered twice or any service is missing.
    pub fn new(controllers: Vec<Arc<dyn ServiceController>>) -> Result<Self, CtlError> {
        let mut services = HashMap::with_capacity(controllers.len());

        for controller in controllers {
            let name = controller.name();
            debug!(service = %name, "Registering service");
            if services.insert(name, controller).is_some() {
                return Err(CtlError::Config {
                    message: format!("Service '{}' registered more than once", name),
                });
            }
        }

        let missing: Vec<&str> = ServiceName::ORDER
            .iter()
            .filter(|name| !services.contains_key(*name))
            .map(ServiceName::as_str)
            .collect();
        if !missing.is_empty() {
            return Err(CtlError::Config {
                message: format!("No controller registered for: {}", missing.join(", ")),
            });
        }

        info!(count = services.len(), "Service registry initialized");

        Ok(Self { services })
    }

    /// Create the registry of systemd-backed services described by `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self, CtlError> {
        let systemd = &settings.systemd;
        Self::new(vec![
            Arc::new(PostgresService::from_config(systemd)),
            Arc::new(PrometheusService::from_config(systemd)),
            Arc::new(PlatformService::from_config(systemd)),
        ])
    }

    /// Get the controller for a service.
    pub fn get(&self, name: ServiceName) -> Result<Arc<dyn ServiceController>, CtlError> {
        self.services
            .get(&name)
            .cloned()
            .ok_or_else(|| CtlError::UnregisteredService {
                service: name.to_string(),
            })
    }

    /// Controllers in canonical order.
    pub fn in_order(&self) -> impl Iterator<Item = Arc<dyn ServiceController>> + '_ {
        ServiceName::ORDER
            .iter()
            .filter_map(|name| self.services.get(name).cloned())
    }
}
