//! Managed services.
//!
//! Contains the service controllers and the service registry.
//!
//! ## Adding a New Service
//!
//! 1. Add a variant to `ServiceName` and place it in `ServiceName::ORDER`
//! 2. Create a controller implementing the `ServiceController` trait
//! 3. Register it in `ServiceRegistry::from_settings()`

mod name;
mod platform;
mod postgres;
mod prometheus;
mod registry;
mod systemd;
mod traits;

pub use name::ServiceName;
pub use platform::PlatformService;
pub use postgres::PostgresService;
pub use prometheus::PrometheusService;
pub use registry::ServiceRegistry;
pub use systemd::SystemdUnit;
pub use traits::ServiceController;
