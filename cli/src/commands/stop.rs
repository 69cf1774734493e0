//! `waggle stop` — stop the running agent, escalating privileges if needed.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::lifecycle::{self, StopOutcome, StopTiming};

/// Run `waggle stop`.
///
/// # Errors
///
/// Returns an error if no instance is recorded, or if the stop fails and
/// escalation was unavailable or itself failed.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    // The relaunched command would be `stop` itself, so the elevated
    // sibling's window is always hidden regardless of --debug.
    let outcome = lifecycle::stop(
        &app.pid_store,
        &app.probe,
        &app.elevator,
        &app.launch,
        false,
        StopTiming::default(),
    )
    .await?;

    match outcome {
        StopOutcome::Stopped { pid } => {
            app.output.success(&format!("Agent stopped (pid {pid})."));
        }
        StopOutcome::Elevated => {
            app.output
                .info("Elevation granted; the elevated process is stopping the agent.");
        }
    }
    Ok(ExitCode::SUCCESS)
}
