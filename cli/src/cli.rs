//! CLI argument parsing with clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use waggle_common::ConfigOverrides;

/// Lifecycle control for the waggle host monitoring agent
///
/// Without a command, runs the agent in the foreground until it receives a
/// shutdown signal.
#[derive(Parser)]
#[command(name = "waggle", version, propagate_version = true)]
pub struct Cli {
    /// Enable debug output (and, on Windows, a visible window for
    /// elevated relaunches)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to the agent config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Persist command-line values back into the config file
    #[arg(long, global = true)]
    pub update: bool,

    /// Override the configured account
    #[arg(long, global = true, value_name = "NAME")]
    pub account: Option<String>,

    /// Override the configured API access token
    #[arg(long, global = true, value_name = "TOKEN")]
    pub access_token: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    /// Launch the agent as a detached background process
    Start,

    /// Stop the running agent
    Stop,

    /// Stop the running agent, then start a fresh one
    Restart,

    /// Report whether the agent is running
    Status,

    /// Show version
    Version,
}

impl Cli {
    /// Config-field overrides carried on the command line.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            account: self.account.clone(),
            access_token: self.access_token.clone(),
        }
    }
}
