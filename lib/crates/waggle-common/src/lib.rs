//! Shared configuration record and well-known paths for the waggle agent.

pub mod config;
pub mod paths;

pub use config::{AgentConfig, ConfigError, ConfigOverrides};
pub use paths::{default_config_path, default_pid_path, resolve_pid_path};
