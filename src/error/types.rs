//! Error types for yba-ctl.

use thiserror::Error;

/// Main error type for the controller.
#[derive(Error, Debug)]
pub enum CtlError {
    /// Configuration-related errors.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Installation metadata is missing or malformed.
    #[error("Installation metadata error: {message}")]
    Metadata { message: String },

    /// Installation metadata could not be loaded before a lifecycle command.
    #[error("Cannot {verb}: {detail}")]
    Precondition { verb: &'static str, detail: String },

    /// The installed platform version differs from the one this binary was built for.
    #[error("yba-ctl version does not match the installed YugabyteDB Anywhere version")]
    VersionMismatch { installed: String, expected: String },

    /// A service controller reported a failed lifecycle operation.
    #[error("Failed to {verb} {service}: {detail}")]
    ServiceOperation {
        verb: &'static str,
        service: String,
        detail: String,
    },

    /// Failure reported by a service controller itself.
    #[error("{message}")]
    Service { message: String },

    /// A service name passed validation but has no registered controller.
    #[error("No controller registered for service '{service}'")]
    UnregisteredService { service: String },

    /// Subprocess execution errors.
    #[error("Command error: {kind}")]
    Command { kind: CommandErrorKind },
}

/// Subprocess error kinds.
#[derive(Error, Debug)]
pub enum CommandErrorKind {
    #[error("Command execution failed: {message}")]
    ExecutionFailed { message: String },

    #[error("Command timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },
}

/// Result type alias for controller operations.
pub type CtlResult<T> = Result<T, CtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_message_is_verb_specific() {
        let err = CtlError::Precondition {
            verb: "stop",
            detail: "metadata missing".to_string(),
        };
        assert_eq!(err.to_string(), "Cannot stop: metadata missing");
    }

    #[test]
    fn test_version_mismatch_message() {
        let err = CtlError::VersionMismatch {
            installed: "2.19.0".to_string(),
            expected: "2.20.0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "yba-ctl version does not match the installed YugabyteDB Anywhere version"
        );
    }

    #[test]
    fn test_service_operation_message() {
        let err = CtlError::ServiceOperation {
            verb: "restart",
            service: "postgres".to_string(),
            detail: "pg_ctl timeout".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to restart postgres: pg_ctl timeout");
    }
}
