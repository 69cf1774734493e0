//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: the PID file, process
//! signaling, privilege elevation, detached relaunch, and the worker
//! supervisor adapter. The platform-specific implementations are selected
//! once here, at startup, through the `Platform*` aliases.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod elevator;
pub mod launcher;
pub mod pid_store;
pub mod probe;
pub mod worker;

pub use launcher::DetachedExec;
pub use pid_store::FilePidStore;
pub use worker::SignalWorker;

#[cfg(unix)]
pub type PlatformProbe = probe::UnixProcessProbe;
#[cfg(windows)]
pub type PlatformProbe = probe::WindowsProcessProbe;

#[cfg(windows)]
pub type PlatformElevator = elevator::UacElevator;
#[cfg(not(windows))]
pub type PlatformElevator = elevator::NoElevation;
