//! Application context — unified state passed to every command handler.
//!
//! Bundles the output sink, the validated config, and the platform
//! adapters. The per-platform probe and elevator are chosen here, once, at
//! startup; command handlers and services only ever see the port traits.

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::domain::LaunchDescriptor;
use crate::infra::{DetachedExec, FilePidStore, PlatformElevator, PlatformProbe, SignalWorker};
use crate::output::OutputContext;
use waggle_common::AgentConfig;

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output sink (colors, quiet, debug level).
    pub output: OutputContext,
    /// Validated agent configuration.
    pub config: AgentConfig,
    /// Whether `--debug` was passed on the original invocation.
    pub debug: bool,
    /// PID record at its resolved per-platform path.
    pub pid_store: FilePidStore,
    /// Platform process probe.
    pub probe: PlatformProbe,
    /// Platform privilege elevator.
    pub elevator: PlatformElevator,
    /// Detached relauncher used by `start`.
    pub launcher: DetachedExec,
    /// Worker supervisor boundary for the foreground run.
    pub worker: SignalWorker,
    /// This invocation's executable + argument vector, captured once.
    pub launch: LaunchDescriptor,
}

impl AppContext {
    /// Construct the context from parsed CLI flags and a validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if the current executable path cannot be resolved.
    pub fn new(cli: &Cli, config: AgentConfig) -> Result<Self> {
        let pid_path =
            waggle_common::resolve_pid_path(config.pid_file.as_deref(), &config.source);
        let output = OutputContext::new(cli.no_color, cli.quiet, cli.debug);
        output.debug(&format!("PID record at {}", pid_path.display()));

        let launch = LaunchDescriptor::from_env()
            .context("cannot resolve the current executable path")?;

        Ok(Self {
            output,
            config,
            debug: cli.debug,
            pid_store: FilePidStore::with_path(pid_path),
            probe: PlatformProbe::default(),
            elevator: PlatformElevator::default(),
            launcher: DetachedExec,
            worker: SignalWorker,
            launch,
        })
    }
}
