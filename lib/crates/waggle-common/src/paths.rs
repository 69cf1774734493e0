//! Well-known per-platform paths for the agent's on-disk footprint.

use std::path::{Path, PathBuf};

/// File name of the PID record.
const PID_FILE_NAME: &str = "waggle-agent.pid";

/// Default location of the config file.
///
/// Unix hosts read `/etc/waggle/agent.json`; Windows hosts use the
/// machine-wide program data directory. Falls back to the user config dir
/// when neither applies.
#[must_use]
pub fn default_config_path() -> PathBuf {
    #[cfg(unix)]
    {
        PathBuf::from("/etc/waggle/agent.json")
    }
    #[cfg(windows)]
    {
        std::env::var_os("ProgramData")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(r"C:\ProgramData"))
            .join("waggle")
            .join("agent.json")
    }
    #[cfg(not(any(unix, windows)))]
    {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("waggle")
            .join("agent.json")
    }
}

/// Default location of the PID record.
#[must_use]
pub fn default_pid_path() -> PathBuf {
    #[cfg(unix)]
    {
        PathBuf::from("/var/run").join(PID_FILE_NAME)
    }
    #[cfg(windows)]
    {
        std::env::var_os("ProgramData")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(r"C:\ProgramData"))
            .join("waggle")
            .join(PID_FILE_NAME)
    }
    #[cfg(not(any(unix, windows)))]
    {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("waggle")
            .join(PID_FILE_NAME)
    }
}

/// Resolve where the PID record lives.
///
/// Uses `configured` (the `pid_file` config field) when set, otherwise the
/// platform default. When the chosen location's parent directory does not
/// exist — `/var/run` on a host we cannot write to, an unmounted override —
/// the record is kept next to the config file instead, preserving the file
/// name. An agent run without privileges must still have a working PID
/// store.
#[must_use]
pub fn resolve_pid_path(configured: Option<&Path>, config_path: &Path) -> PathBuf {
    let candidate = configured.map_or_else(default_pid_path, Path::to_path_buf);
    let parent_exists = candidate.parent().is_some_and(Path::is_dir);
    if parent_exists {
        return candidate;
    }
    let file_name = candidate
        .file_name()
        .map_or_else(|| PID_FILE_NAME.into(), ToOwned::to_owned);
    config_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(file_name)
}
