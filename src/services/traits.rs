//! Service controller trait.
//!
//! Defines the lifecycle interface for managed services.

use crate::error::CtlError;

use super::name::ServiceName;

/// Lifecycle control for one managed service.
///
/// Implementations own everything about the running process (units, ports,
/// data directories). Callers only sequence the operations.
///
/// # Example
///
/// ```ignore
/// pub struct PrometheusService {
///     unit: SystemdUnit,
/// }
///
/// impl ServiceController for PrometheusService {
///     fn name(&self) -> ServiceName { ServiceName::Prometheus }
///     fn start(&self) -> Result<(), CtlError> { self.unit.start() }
///     fn stop(&self) -> Result<(), CtlError> { self.unit.stop() }
///     fn restart(&self) -> Result<(), CtlError> { self.unit.restart() }
/// }
/// ```
pub trait ServiceController: Send + Sync {
    /// Which service this controller manages.
    ///
    /// Must be unique within a registry.
    fn name(&self) -> ServiceName;

    /// Human-readable display name (e.g., "PostgreSQL").
    fn display_name(&self) -> &'static str {
        self.name().as_str()
    }

    /// Bring the service to the running state.
    fn start(&self) -> Result<(), CtlError>;

    /// Bring the service to the stopped state.
    fn stop(&self) -> Result<(), CtlError>;

    /// Stop then start the service.
    fn restart(&self) -> Result<(), CtlError>;
}
