//! `waggle start` — launch the agent as a detached background process.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::lifecycle;

/// Run `waggle start`.
///
/// # Errors
///
/// Returns an error if a live instance already exists or the agent cannot
/// be launched.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    let pid = lifecycle::start(&app.pid_store, &app.probe, &app.launcher, &app.launch)?;
    app.output.success(&format!("Agent started (pid {pid})."));
    app.output.kv("Status", "waggle status");
    app.output.kv("Stop", "waggle stop");
    Ok(ExitCode::SUCCESS)
}
