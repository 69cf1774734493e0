//! The launch descriptor — a reproducible copy of the current invocation.
//!
//! Built once at startup and handed to whichever component needs to
//! re-execute the program: the elevator relaunches the exact original
//! command line in an elevated process; `start` relaunches a foreground
//! variant as the detached agent.

use std::ffi::OsString;
use std::path::PathBuf;

/// Resolved executable path plus the original argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchDescriptor {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl LaunchDescriptor {
    /// Capture the current process's executable and arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable path cannot be resolved.
    pub fn from_env() -> std::io::Result<Self> {
        Ok(Self {
            program: std::env::current_exe()?,
            args: std::env::args_os().skip(1).collect(),
        })
    }

    /// The same invocation with `start`/`restart` removed, so the relaunched
    /// process runs the agent in the foreground instead of trying to detach
    /// itself again.
    #[must_use]
    pub fn foreground(&self) -> Self {
        Self {
            program: self.program.clone(),
            args: self
                .args
                .iter()
                .filter(|arg| arg.as_os_str() != "start" && arg.as_os_str() != "restart")
                .cloned()
                .collect(),
        }
    }
}
