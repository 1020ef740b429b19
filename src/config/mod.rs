//! Configuration module for yba-ctl.
//!
//! Handles loading and validating controller configuration from TOML files.

mod settings;

pub use settings::*;
