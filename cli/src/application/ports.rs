//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! Platform-conditional behavior — signal permissions on unix, UAC on
//! Windows — lives entirely behind these traits, selected once at startup;
//! the lifecycle controller never branches on the platform itself.
//!
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use anyhow::Result;

use crate::domain::{ElevationError, LaunchDescriptor, SignalError, StoreError};
use waggle_common::AgentConfig;

// ── Value Types ───────────────────────────────────────────────────────────────

/// Which signal a stop attempt delivers.
///
/// On platforms without signals the probe maps both to forced termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopSignal {
    /// Polite shutdown request (SIGINT).
    Interrupt,
    /// Non-ignorable kill (SIGKILL), the fallback after the graceful window.
    Kill,
}

// ── PID record ────────────────────────────────────────────────────────────────

/// Durable storage for the running instance's process id.
///
/// Exclusively owned by the lifecycle controller; nothing else writes it.
pub trait PidStore {
    /// Record `pid`, overwriting any prior value. Creates the backing file
    /// (and parents) if absent. I/O failures always propagate.
    fn write(&self, pid: u32) -> Result<(), StoreError>;

    /// The last recorded pid, or `None` when no record exists. A record
    /// that exists but cannot be read or parsed is an error, not `None`.
    fn read(&self) -> Result<Option<u32>, StoreError>;

    /// Remove the record. A missing record is not an error.
    fn clear(&self) -> Result<(), StoreError>;
}

// ── Process probe ─────────────────────────────────────────────────────────────

/// Liveness checks and signal delivery for a target process.
pub trait ProcessProbe {
    /// Whether a process with `pid` exists. "Permission denied" means the
    /// process exists; "no such process" maps to `false`, never an error.
    fn is_alive(&self, pid: u32) -> bool;

    /// Deliver `signal` to `pid`, classifying any failure.
    ///
    /// # Errors
    ///
    /// Returns a [`SignalError`] whose variant the controller uses to decide
    /// between escalation, success-despite-absence, and terminal failure.
    fn signal(&self, pid: u32, signal: StopSignal) -> Result<(), SignalError>;
}

// ── Privilege elevator ────────────────────────────────────────────────────────

/// Re-executes the current program as a higher-privilege principal.
pub trait PrivilegeElevator {
    /// Attempt to relaunch `launch` elevated. Returns `true` only when a new
    /// elevated process was confirmed launched; `false` when elevation is
    /// unsupported, unnecessary (already elevated), or declined by the user.
    /// `show_window` controls whether the relaunched process gets a visible
    /// window, where the platform has such a notion.
    ///
    /// # Errors
    ///
    /// Returns an error only when the platform supports elevation but the
    /// attempt itself failed for a reason other than user refusal.
    fn try_elevate(
        &self,
        launch: &LaunchDescriptor,
        show_window: bool,
    ) -> Result<bool, ElevationError>;
}

// ── Detached launcher ─────────────────────────────────────────────────────────

/// Spawns a fully detached copy of the program.
pub trait DetachedLauncher {
    /// Spawn `launch` detached from the current session and return the new
    /// process id. Returning `Ok` means the child was confirmed spawned —
    /// the controller records the pid only after this.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn spawn_detached(&self, launch: &LaunchDescriptor) -> Result<u32, std::io::Error>;
}

// ── Worker supervisor boundary ────────────────────────────────────────────────

/// The monitoring engine's entry point.
///
/// The controller's job ends at invoking `run` with the PID recorded; `run`
/// returns only on intentional shutdown. An error escaping it is logged as
/// an uncaught critical failure by the surrounding process and deliberately
/// leaves the PID record in place.
#[allow(async_fn_in_trait)]
pub trait WorkerSupervisor {
    /// Block for the worker's entire lifetime.
    async fn run(&self, config: &AgentConfig) -> Result<()>;
}
