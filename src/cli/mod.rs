//! Command-line interface.
//!
//! Argument parsing and validation happen here, before any version check or
//! service operation.

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};

use crate::commands::{Dispatcher, Verb};
use crate::config::{Settings, DEFAULT_CONFIG_PATH, LOG_LEVELS};
use crate::error::CtlResult;
use crate::services::{ServiceName, ServiceRegistry};
use crate::version::{ControllerVersion, MetadataFile, VersionCheck};

const START_LONG: &str = "\
The start command can be invoked to start any service that is required for the
running of YugabyteDB Anywhere. Can be invoked without any arguments to start all
services, or invoked with a specific service name to start only that service.
Valid service names: postgres, prometheus, yb-platform";

const STOP_LONG: &str = "\
The stop command can be invoked to stop any service that is required for the
running of YugabyteDB Anywhere. Can be invoked without any arguments to stop all
services, or invoked with a specific service name to stop only that service.
Valid service names: postgres, prometheus, yb-platform";

const RESTART_LONG: &str = "\
The restart command can be invoked to restart any service that is required for the
running of YugabyteDB Anywhere. Can be invoked without any arguments to restart all
services, or invoked with a specific service name to restart only that service.
Valid service names: postgres, prometheus, yb-platform";

/// Controller for the services of a YugabyteDB Anywhere installation.
#[derive(Debug, Parser)]
#[command(name = "yba-ctl", version)]
pub struct Cli {
    /// Skip the installed version check before running a command.
    #[arg(long, global = true)]
    pub skip_version_checks: bool,

    /// Path to the yba-ctl configuration file.
    #[arg(long, global = true, env = "YBA_CTL_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level. Overrides the config file.
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        ignore_case = true,
        value_parser = PossibleValuesParser::new(LOG_LEVELS)
    )]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// The start command is used to start service(s) required for your YugabyteDB Anywhere installation.
    #[command(long_about = START_LONG)]
    Start(ServiceArgs),

    /// The stop command is used to stop service(s) required for your YugabyteDB Anywhere installation.
    #[command(long_about = STOP_LONG)]
    Stop(ServiceArgs),

    /// The restart command is used to restart service(s) required for your YugabyteDB Anywhere installation.
    #[command(long_about = RESTART_LONG)]
    Restart(ServiceArgs),
}

/// Optional single service target.
#[derive(Debug, Args)]
pub struct ServiceArgs {
    /// Service to operate on. All services when omitted.
    #[arg(value_enum, value_name = "SERVICE_NAME")]
    pub service: Option<ServiceName>,
}

impl Cli {
    /// Verb and target service selected on the command line.
    pub fn invocation(&self) -> (Verb, Option<ServiceName>) {
        match &self.command {
            CliCommand::Start(args) => (Verb::Start, args.service),
            CliCommand::Stop(args) => (Verb::Stop, args.service),
            CliCommand::Restart(args) => (Verb::Restart, args.service),
        }
    }

    /// Load settings from `--config`, or from the default location if present.
    pub fn load_settings(&self) -> CtlResult<Settings> {
        match &self.config {
            Some(path) => Settings::load(path),
            None => Settings::load_or_default(DEFAULT_CONFIG_PATH),
        }
    }

    /// Build the production dispatcher and run the selected command.
    pub fn execute(&self, settings: &Settings) -> CtlResult<()> {
        let registry = ServiceRegistry::from_settings(settings)?;
        let version_check = VersionCheck::new(
            Box::new(MetadataFile::new(settings.installation.metadata_path())),
            ControllerVersion::embedded(),
            self.skip_version_checks,
        );

        let (verb, target) = self.invocation();
        Dispatcher::new(registry, version_check).run(verb, target)
    }
}
