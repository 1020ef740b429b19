//! yba-ctl - controller for the services of a YugabyteDB Anywhere installation.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use yba_ctl::cli::Cli;
use yba_ctl::config::Settings;
use yba_ctl::version::ControllerVersion;

fn main() -> ExitCode {
    // Usage errors exit here with clap's status code and usage text.
    let cli = Cli::parse();

    let settings = match cli.load_settings() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&settings, cli.log_level.as_deref()) {
        eprintln!("Error initializing logging: {}", e);
        return ExitCode::FAILURE;
    }

    debug!(
        version = %ControllerVersion::embedded(),
        command = ?cli.command,
        "Starting yba-ctl"
    );

    match cli.execute(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "Command failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging to stderr.
///
/// `RUST_LOG` takes precedence, then `--log-level`, then the config file.
fn init_logging(
    settings: &Settings,
    level_override: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = level_override.unwrap_or(&settings.logging.level);
            EnvFilter::try_new(level.to_lowercase())?
        }
    };

    match settings.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()?;
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()?;
        }
    }

    Ok(())
}
