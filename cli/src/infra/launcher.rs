//! Detached relaunch of the current executable.
//!
//! The spawned child must survive this process exiting and must not inherit
//! its terminal: a new session on unix, no console window on Windows.

use std::process::{Command, Stdio};

use crate::application::ports::DetachedLauncher;
use crate::domain::LaunchDescriptor;

/// Launcher that re-executes a [`LaunchDescriptor`] fully detached.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedExec;

impl DetachedLauncher for DetachedExec {
    #[cfg_attr(unix, allow(unsafe_code))] // pre_exec is inherently unsafe
    fn spawn_detached(&self, launch: &LaunchDescriptor) -> Result<u32, std::io::Error> {
        let mut cmd = Command::new(&launch.program);
        cmd.args(&launch.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            // Detach from the controlling session so the agent outlives us.
            unsafe {
                cmd.pre_exec(|| {
                    nix::unistd::setsid()
                        .map(|_| ())
                        .map_err(std::io::Error::from)
                });
            }
        }

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            const DETACHED_PROCESS: u32 = 0x0000_0008;
            const CREATE_NO_WINDOW: u32 = 0x0800_0000;
            cmd.creation_flags(DETACHED_PROCESS | CREATE_NO_WINDOW);
        }

        let child = cmd.spawn()?;
        Ok(child.id())
    }
}
