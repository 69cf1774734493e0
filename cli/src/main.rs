//! Waggle CLI - lifecycle control for the waggle host monitoring agent

#![cfg_attr(test, allow(clippy::expect_used))]

use std::process::ExitCode;

use clap::Parser;

use waggle_cli::app::AppContext;
use waggle_cli::cli::{Cli, Command};
use waggle_cli::commands;
use waggle_common::AgentConfig;

/// Exit code for configuration failures, distinct from ordinary errors so
/// init scripts can tell "bad config" from "operation failed".
const CONFIG_EXIT: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // `version` needs no configuration at all.
    if matches!(cli.command, Some(Command::Version)) {
        commands::version::run();
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(CONFIG_EXIT);
        }
    };

    let app = match AppContext::new(&cli, config) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match commands::dispatch(cli.command, &app).await {
        Ok(code) => code,
        Err(err) => {
            app.output.error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

/// Load and validate the config file, honoring CLI overrides and `--update`.
fn load_config(cli: &Cli) -> Result<AgentConfig, waggle_common::ConfigError> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(waggle_common::default_config_path);
    let config = AgentConfig::load(&path, &cli.overrides())?;
    if cli.update {
        config.persist()?;
    }
    Ok(config)
}
