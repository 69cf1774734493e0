//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error`. The lifecycle controller
//! resolves exactly one failure locally — an access-denied stop retried
//! through elevation — and every other variant propagates to the top level.

use std::path::PathBuf;

use thiserror::Error;

// ── Signal delivery ───────────────────────────────────────────────────────────

/// Classified outcome of signaling a target process.
///
/// The classification drives the escalation protocol: only `AccessDenied`
/// may trigger an elevation retry; `NotFound` is success for a stop; `Io`
/// is terminal.
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("permission denied signaling process {pid}")]
    AccessDenied { pid: u32 },

    #[error("no process with pid {pid}")]
    NotFound { pid: u32 },

    #[error("signaling process {pid} failed: {source}")]
    Io {
        pid: u32,
        #[source]
        source: std::io::Error,
    },
}

impl SignalError {
    /// Whether this failure means the caller lacks rights over the target.
    #[must_use]
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied { .. })
    }
}

// ── Elevation ─────────────────────────────────────────────────────────────────

/// The elevation mechanism itself failed.
///
/// User refusal is not an error — the elevator reports it as a plain
/// "did not elevate" result. This type covers everything else, carrying the
/// platform's underlying error code for the operator.
#[derive(Debug, Error)]
#[error("privilege elevation failed (OS error {code})")]
pub struct ElevationError {
    pub code: i32,
}

// ── PID record storage ────────────────────────────────────────────────────────

/// Failures of the on-disk PID record.
///
/// A missing record is not an error (`read` returns `None` for that); these
/// variants indicate an unrecoverable environment problem and are never
/// retried.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access PID file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PID file {path} does not contain a process id")]
    Corrupt { path: PathBuf },
}

// ── Lifecycle controller ──────────────────────────────────────────────────────

/// Top-level controller failures surfaced to the operator.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("agent is not running (no PID record found)")]
    NotRunning,

    #[error("agent is already running with pid {0}")]
    AlreadyRunning(u32),

    #[error(
        "permission denied stopping agent process {pid}; re-run with elevated privileges"
    )]
    AccessDenied { pid: u32 },

    #[error(transparent)]
    Elevation(#[from] ElevationError),

    #[error(transparent)]
    Signal(SignalError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to launch agent process: {0}")]
    Launch(#[source] std::io::Error),
}
