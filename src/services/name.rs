//! Service names and the canonical ordering.

use std::fmt;

use clap::ValueEnum;

/// A service managed by yba-ctl.
///
/// The set is closed: only these services can be addressed from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum ServiceName {
    #[value(name = "postgres")]
    Postgres,
    #[value(name = "prometheus")]
    Prometheus,
    #[value(name = "yb-platform")]
    YbPlatform,
}

impl ServiceName {
    /// Canonical order used when a command targets every service.
    ///
    /// Start, stop and restart all walk this order front to back.
    pub const ORDER: [ServiceName; 3] = [
        ServiceName::Postgres,
        ServiceName::Prometheus,
        ServiceName::YbPlatform,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ServiceName::Postgres => "postgres",
            ServiceName::Prometheus => "prometheus",
            ServiceName::YbPlatform => "yb-platform",
        }
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
