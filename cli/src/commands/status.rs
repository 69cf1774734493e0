//! `waggle status` — report whether the agent is running.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::lifecycle;
use crate::domain::state::AgentState;

/// Run `waggle status`.
///
/// Exits 0 when a live instance is found, 1 otherwise, so the command can
/// drive shell conditionals and service health checks.
///
/// # Errors
///
/// Returns an error if the recorded pid cannot be read.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    let state = lifecycle::status(&app.pid_store, &app.probe)?;

    match state {
        AgentState::Running(pid) => {
            app.output.success(&format!("Agent is running (pid {pid})."));
            Ok(ExitCode::SUCCESS)
        }
        AgentState::NotRunning => {
            app.output.info("Agent is not running.");
            Ok(ExitCode::FAILURE)
        }
        AgentState::Stale(pid) => {
            app.output.warn(&format!(
                "Agent is not running (stale record for pid {pid})."
            ));
            Ok(ExitCode::FAILURE)
        }
    }
}
