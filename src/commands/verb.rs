//! Lifecycle verbs.

use std::fmt;

use crate::error::CtlError;
use crate::services::ServiceController;

/// A lifecycle operation that can be applied to services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Start,
    Stop,
    Restart,
}

impl Verb {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Verb::Start => "start",
            Verb::Stop => "stop",
            Verb::Restart => "restart",
        }
    }

    /// Invoke the matching lifecycle method on `service`.
    pub fn apply(&self, service: &dyn ServiceController) -> Result<(), CtlError> {
        match self {
            Verb::Start => service.start(),
            Verb::Stop => service.stop(),
            Verb::Restart => service.restart(),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
