//! Domain layer — pure types and errors for agent lifecycle control.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.

pub mod error;
pub mod launch;
pub mod state;

pub use error::{ElevationError, LifecycleError, SignalError, StoreError};
pub use launch::LaunchDescriptor;
pub use state::AgentState;
