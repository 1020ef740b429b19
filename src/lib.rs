//! yba-ctl Library
//!
//! Starts, stops and restarts the services of a YugabyteDB Anywhere
//! installation, guarded by an installed version check.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod executor;
pub mod services;
pub mod version;
