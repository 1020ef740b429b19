//! Subprocess spawning with timeout enforcement.
//!
//! Commands are exec'd directly (no shell), their stdout/stderr captured,
//! and the child killed if it outlives the configured timeout.

use std::io::{self, Read};
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::error::{CommandErrorKind, CtlError};

use super::output::sanitize_output;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Result of a subprocess execution.
#[derive(Debug, Clone)]
pub struct SubprocessResult {
    /// Whether the command exited with status 0.
    pub success: bool,
    /// The exit code, if the process was not killed by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl SubprocessResult {
    /// Short description of why the command failed.
    ///
    /// Prefers stderr; falls back to the exit code when stderr is empty.
    pub fn failure_detail(&self) -> String {
        let stderr = sanitize_output(&self.stderr, 5);
        if !stderr.is_empty() {
            return stderr;
        }
        match self.exit_code {
            Some(code) => format!("exited with status {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Builder for subprocess execution.
#[derive(Debug, Clone)]
pub struct SubprocessBuilder {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl SubprocessBuilder {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Add arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.args.push(arg.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Program and arguments as a single display string.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Execute the command and wait for completion.
    ///
    /// Output is drained on reader threads while the child runs, so a chatty
    /// process cannot stall on a full pipe. A process exceeding the timeout is
    /// killed and reaped, and a timeout error is returned.
    pub fn run(self) -> Result<SubprocessResult, CtlError> {
        debug!(
            program = %self.program,
            args = ?self.args,
            timeout_secs = self.timeout.as_secs(),
            "Executing subprocess"
        );

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| CtlError::Command {
                kind: CommandErrorKind::ExecutionFailed {
                    message: format!("Failed to spawn {}: {}", self.program, e),
                },
            })?;

        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let start = Instant::now();
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if start.elapsed() > self.timeout => {
                    warn!(
                        command = %self.command_line(),
                        timeout_secs = self.timeout.as_secs(),
                        "Process timed out, killing"
                    );
                    if let Err(e) = child.kill() {
                        warn!(error = %e, "Failed to kill timed-out process");
                    }
                    let _ = child.wait();
                    // Reader threads are left to finish on their own; a surviving
                    // grandchild may still hold the pipes open.
                    return Err(CtlError::Command {
                        kind: CommandErrorKind::Timeout {
                            timeout_secs: self.timeout.as_secs(),
                        },
                    });
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    return Err(CtlError::Command {
                        kind: CommandErrorKind::ExecutionFailed {
                            message: format!("Failed to check status of {}: {}", self.program, e),
                        },
                    });
                }
            }
        };

        let result = SubprocessResult {
            success: status.success(),
            exit_code: status.code(),
            stdout: self.collect(stdout, "stdout")?,
            stderr: self.collect(stderr, "stderr")?,
        };
        debug!(
            success = result.success,
            exit_code = ?result.exit_code,
            duration_ms = start.elapsed().as_millis() as u64,
            "Subprocess completed"
        );
        Ok(result)
    }

    fn collect(&self, reader: Option<Reader>, stream: &str) -> Result<String, CtlError> {
        let Some(handle) = reader else {
            return Ok(String::new());
        };
        let bytes = handle
            .join()
            .map_err(|_| CtlError::Command {
                kind: CommandErrorKind::ExecutionFailed {
                    message: format!("{} reader for {} panicked", stream, self.program),
                },
            })?
            .map_err(|e| CtlError::Command {
                kind: CommandErrorKind::ExecutionFailed {
                    message: format!("Failed to read {} of {}: {}", stream, self.program, e),
                },
            })?;
        Ok(String::from_utf8_lossy(&bytes).to_string())
    }
}

type Reader = JoinHandle<io::Result<Vec<u8>>>;

/// Read a child pipe to the end on its own thread.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<Reader> {
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            pipe.read_to_end(&mut buf)?;
            Ok(buf)
        })
    })
}
