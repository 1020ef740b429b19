//! Command dispatcher.
//!
//! Runs a lifecycle verb against one service or all of them, after the
//! installation version check.

use tracing::{debug, info, warn};

use crate::error::CtlError;
use crate::services::{ServiceController, ServiceName, ServiceRegistry};
use crate::version::VersionCheck;

use super::verb::Verb;

/// Dispatches lifecycle verbs to registered service controllers.
pub struct Dispatcher {
    registry: ServiceRegistry,
    version_check: VersionCheck,
}

impl Dispatcher {
    pub fn new(registry: ServiceRegistry, version_check: VersionCheck) -> Self {
        Self {
            registry,
            version_check,
        }
    }

    /// Run `verb` against `target`, or every service in canonical order when `None`.
    ///
    /// The version check always runs first. In the all-services form the first
    /// failure ends the command; services later in the order are not attempted
    /// and earlier ones are left as they are.
    pub fn run(&self, verb: Verb, target: Option<ServiceName>) -> Result<(), CtlError> {
        self.version_check.verify(verb.as_str())?;

        match target {
            Some(name) => {
                let service = self.registry.get(name)?;
                apply(verb, service.as_ref())
            }
            None => {
                for service in self.registry.in_order() {
                    apply(verb, service.as_ref())?;
                }
                info!(verb = %verb, "All services completed");
                Ok(())
            }
        }
    }
}

fn apply(verb: Verb, service: &dyn ServiceController) -> Result<(), CtlError> {
    let name = service.name();
    debug!(verb = %verb, service = %name, "Applying lifecycle operation");

    verb.apply(service).map_err(|e| {
        warn!(verb = %verb, service = %name, error = %e, "Lifecycle operation failed");
        CtlError::ServiceOperation {
            verb: verb.as_str(),
            service: name.to_string(),
            detail: e.to_string(),
        }
    })?;

    info!(
        verb = %verb,
        service = %name,
        display_name = service.display_name(),
        "Lifecycle operation succeeded"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::version::{ControllerVersion, VersionMetadata, VersionSource};

    type CallLog = Arc<Mutex<Vec<String>>>;

    struct RecordingService {
        name: ServiceName,
        calls: CallLog,
        fail_with: Option<&'static str>,
    }

    impl RecordingService {
        fn record(&self, op: &str) -> Result<(), CtlError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("{}.{}", self.name, op));
            match self.fail_with {
                Some(message) => Err(CtlError::Service {
                    message: message.to_string(),
                }),
                None => Ok(()),
            }
        }
    }

    impl ServiceController for RecordingService {
        fn name(&self) -> ServiceName {
            self.name
        }

        fn start(&self) -> Result<(), CtlError> {
            self.record("start")
        }

        fn stop(&self) -> Result<(), CtlError> {
            self.record("stop")
        }

        fn restart(&self) -> Result<(), CtlError> {
            self.record("restart")
        }
    }

    struct StaticVersion(&'static str);

    impl VersionSource for StaticVersion {
        fn installed_version(&self) -> Result<VersionMetadata, CtlError> {
            Ok(VersionMetadata::new(self.0, None))
        }
    }

    fn dispatcher(
        installed: &'static str,
        failing: Option<(ServiceName, &'static str)>,
    ) -> (Dispatcher, CallLog) {
        let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
        let controllers = ServiceName::ORDER
            .iter()
            .map(|&name| {
                Arc::new(RecordingService {
                    name,
                    calls: Arc::clone(&calls),
                    fail_with: failing.filter(|(n, _)| *n == name).map(|(_, m)| m),
                }) as Arc<dyn ServiceController>
            })
            .collect();
        let registry = ServiceRegistry::new(controllers).unwrap();
        let check = VersionCheck::new(
            Box::new(StaticVersion(installed)),
            ControllerVersion::new("2.20.0", None),
            false,
        );
        (Dispatcher::new(registry, check), calls)
    }

    #[test]
    fn test_all_services_in_order() {
        let (dispatcher, calls) = dispatcher("2.20.0", None);
        dispatcher.run(Verb::Stop, None).unwrap();
        assert_eq!(
            *calls.lock().unwrap(),
            vec!["postgres.stop", "prometheus.stop", "yb-platform.stop"]
        );
    }

    #[test]
    fn test_single_service() {
        let (dispatcher, calls) = dispatcher("2.20.0", None);
        dispatcher
            .run(Verb::Restart, Some(ServiceName::YbPlatform))
            .unwrap();
        assert_eq!(*calls.lock().unwrap(), vec!["yb-platform.restart"]);
    }

    #[test]
    fn test_stops_at_first_failure() {
        let (dispatcher, calls) =
            dispatcher("2.20.0", Some((ServiceName::Prometheus, "port in use")));
        let err = dispatcher.run(Verb::Start, None).unwrap_err();
        assert_eq!(err.to_string(), "Failed to start prometheus: port in use");
        assert_eq!(
            *calls.lock().unwrap(),
            vec!["postgres.start", "prometheus.start"]
        );
    }

    #[test]
    fn test_version_mismatch_blocks_all_calls() {
        let (dispatcher, calls) = dispatcher("2.19.0", None);
        let err = dispatcher
            .run(Verb::Start, Some(ServiceName::Postgres))
            .unwrap_err();
        assert!(matches!(err, CtlError::VersionMismatch { .. }));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_verb_strings() {
        assert_eq!(Verb::Start.to_string(), "start");
        assert_eq!(Verb::Stop.as_str(), "stop");
        assert_eq!(Verb::Restart.as_str(), "restart");
    }
}
