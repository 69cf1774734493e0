//! Worker supervisor adapter.
//!
//! The monitoring engine proper lives outside this crate; this adapter is
//! the boundary the controller hands control to. It holds the process alive
//! for the worker's lifetime and returns on an intentional shutdown signal.

use anyhow::Result;

use crate::application::ports::WorkerSupervisor;
use waggle_common::AgentConfig;

/// Supervisor that blocks until the process receives a shutdown signal
/// (SIGINT/SIGTERM on unix, Ctrl-C on Windows).
#[derive(Debug, Default, Clone, Copy)]
pub struct SignalWorker;

impl WorkerSupervisor for SignalWorker {
    async fn run(&self, _config: &AgentConfig) -> Result<()> {
        wait_for_shutdown().await
    }
}

#[cfg(unix)]
async fn wait_for_shutdown() -> Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut term = signal(SignalKind::terminate())?;
    let mut int = signal(SignalKind::interrupt())?;
    tokio::select! {
        _ = term.recv() => {}
        _ = int.recv() => {}
    }
    Ok(())
}

#[cfg(not(unix))]
async fn wait_for_shutdown() -> Result<()> {
    tokio::signal::ctrl_c().await?;
    Ok(())
}
