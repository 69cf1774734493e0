//! Agent lifecycle state machine: status, start, stop, restart, foreground run.
//!
//! Each command runs to completion or failure within a single invocation;
//! there is no internal concurrency here. The one piece of local failure
//! recovery is the escalation retry inside [`stop`]: an access-denied stop
//! is retried at most once, through the privilege elevator, in a sibling
//! process. Everything else propagates.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::time::Instant;

use crate::application::ports::{
    DetachedLauncher, PidStore, PrivilegeElevator, ProcessProbe, StopSignal, WorkerSupervisor,
};
use crate::domain::{AgentState, LaunchDescriptor, LifecycleError, SignalError, StoreError};
use waggle_common::AgentConfig;

/// How long a stop waits for the target to exit gracefully before the
/// SIGKILL fallback, and how often it polls in between.
#[derive(Debug, Clone, Copy)]
pub struct StopTiming {
    pub term_timeout: Duration,
    pub poll: Duration,
}

impl Default for StopTiming {
    fn default() -> Self {
        Self {
            term_timeout: Duration::from_secs(20),
            poll: Duration::from_millis(500),
        }
    }
}

/// How a completed stop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    /// The target process is gone and the PID record has been cleared.
    Stopped { pid: u32 },
    /// An elevated sibling process was launched and now owns the stop.
    /// The caller must exit immediately without error — and without
    /// touching the PID record, whose lifetime the sibling now owns.
    Elevated,
}

/// How a completed restart ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartOutcome {
    Restarted { pid: u32 },
    /// The stop phase handed off to an elevated sibling, which re-runs the
    /// whole original command line and will perform both phases.
    Elevated,
}

/// Derive the current agent state. Read-only: never mutates the record.
///
/// # Errors
///
/// Returns an error if the PID record exists but cannot be read.
pub fn status(store: &impl PidStore, probe: &impl ProcessProbe) -> Result<AgentState, StoreError> {
    Ok(match store.read()? {
        None => AgentState::NotRunning,
        Some(pid) if probe.is_alive(pid) => AgentState::Running(pid),
        Some(pid) => AgentState::Stale(pid),
    })
}

/// Launch the agent as a detached process and record its pid.
///
/// A stale record (pid on file, process gone) does not block a start; a
/// confirmed-live instance does. The pid is recorded only after the spawn
/// is confirmed.
///
/// # Errors
///
/// Returns [`LifecycleError::AlreadyRunning`] when a live instance exists,
/// or a launch/storage failure.
pub fn start(
    store: &impl PidStore,
    probe: &impl ProcessProbe,
    launcher: &impl DetachedLauncher,
    launch: &LaunchDescriptor,
) -> Result<u32, LifecycleError> {
    if let Some(pid) = store.read()? {
        if probe.is_alive(pid) {
            return Err(LifecycleError::AlreadyRunning(pid));
        }
    }
    let pid = launcher
        .spawn_detached(&launch.foreground())
        .map_err(LifecycleError::Launch)?;
    store.write(pid)?;
    Ok(pid)
}

/// Stop the recorded agent process, escalating privileges at most once.
///
/// The stop is graceful-then-forceful: an interrupt, a bounded wait for the
/// process to exit, then a kill. A target that is already gone counts as
/// stopped. When any signal attempt is denied for lack of privilege, the
/// elevator is given one chance to relaunch this invocation elevated; if it
/// confirms a sibling, the caller exits and the sibling finishes the job.
/// If elevation is unsupported or declined, the original access-denied
/// failure is the one reported.
///
/// # Errors
///
/// Returns [`LifecycleError::NotRunning`] when no PID record exists,
/// [`LifecycleError::AccessDenied`] when escalation was not available, or
/// the underlying signal/elevation/storage failure.
pub async fn stop(
    store: &impl PidStore,
    probe: &impl ProcessProbe,
    elevator: &impl PrivilegeElevator,
    launch: &LaunchDescriptor,
    show_window: bool,
    timing: StopTiming,
) -> Result<StopOutcome, LifecycleError> {
    let pid = store.read()?.ok_or(LifecycleError::NotRunning)?;

    match terminate(probe, pid, timing).await {
        Ok(()) => {
            store.clear()?;
            Ok(StopOutcome::Stopped { pid })
        }
        Err(err) if err.is_access_denied() => match elevator.try_elevate(launch, show_window) {
            Ok(true) => Ok(StopOutcome::Elevated),
            Ok(false) => Err(LifecycleError::AccessDenied { pid }),
            Err(elevation) => Err(LifecycleError::Elevation(elevation)),
        },
        Err(err) => Err(LifecycleError::Signal(err)),
    }
}

/// Stop, then start. If the stop phase fails terminally the start is never
/// attempted; if it handed off to an elevated sibling, the sibling re-runs
/// the full restart.
///
/// # Errors
///
/// Propagates stop-phase and start-phase failures unchanged.
pub async fn restart(
    store: &impl PidStore,
    probe: &impl ProcessProbe,
    elevator: &impl PrivilegeElevator,
    launcher: &impl DetachedLauncher,
    launch: &LaunchDescriptor,
    show_window: bool,
    timing: StopTiming,
) -> Result<RestartOutcome, LifecycleError> {
    match stop(store, probe, elevator, launch, show_window, timing).await? {
        StopOutcome::Elevated => Ok(RestartOutcome::Elevated),
        StopOutcome::Stopped { .. } => {
            let pid = start(store, probe, launcher, launch)?;
            Ok(RestartOutcome::Restarted { pid })
        }
    }
}

/// Run the agent in the foreground: record our own pid, hand control to the
/// worker supervisor, and clear the record on a confirmed normal return.
///
/// An error escaping the worker leaves the record in place so a crashed
/// agent's pid stays discoverable for diagnosis.
///
/// # Errors
///
/// Propagates storage failures and any error escaping the worker.
pub async fn run_foreground(
    store: &impl PidStore,
    worker: &impl WorkerSupervisor,
    config: &AgentConfig,
) -> Result<()> {
    store.write(std::process::id())?;
    worker.run(config).await.context("monitoring worker failed")?;
    store.clear()?;
    Ok(())
}

/// Graceful-then-forceful termination of `pid`.
///
/// A target that disappears at any point is success. Access-denied from any
/// signal attempt propagates for the caller's escalation decision.
async fn terminate(
    probe: &impl ProcessProbe,
    pid: u32,
    timing: StopTiming,
) -> Result<(), SignalError> {
    match probe.signal(pid, StopSignal::Interrupt) {
        Ok(()) => {}
        Err(SignalError::NotFound { .. }) => return Ok(()),
        Err(err) => return Err(err),
    }

    let deadline = Instant::now() + timing.term_timeout;
    loop {
        if !probe.is_alive(pid) {
            return Ok(());
        }
        if Instant::now() >= deadline {
            break;
        }
        tokio::time::sleep(timing.poll).await;
    }

    match probe.signal(pid, StopSignal::Kill) {
        Ok(()) | Err(SignalError::NotFound { .. }) => Ok(()),
        Err(err) => Err(err),
    }
}
