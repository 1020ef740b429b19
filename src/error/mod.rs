//! Error types for yba-ctl.
//!
//! Provides a unified error handling system using thiserror.

mod types;

pub use types::*;
