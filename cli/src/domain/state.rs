//! Observed agent state, derived from the PID record and the process probe.

use std::fmt;

/// What the controller can tell about the agent right now.
///
/// Nothing beyond the PID record is persisted; this is re-derived on every
/// invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentState {
    /// No PID record exists.
    NotRunning,
    /// A PID record exists and the process is alive.
    Running(u32),
    /// A PID record exists but no such process does — a crash left the
    /// record behind as evidence.
    Stale(u32),
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRunning => write!(f, "not running"),
            Self::Running(pid) => write!(f, "running (pid {pid})"),
            Self::Stale(pid) => write!(f, "not running (stale pid {pid})"),
        }
    }
}
