//! Subprocess execution.
//!
//! Runs external tools (systemctl) without a shell, bounded by a timeout.

mod output;
mod subprocess;

pub use output::sanitize_output;
pub use subprocess::{SubprocessBuilder, SubprocessResult};
