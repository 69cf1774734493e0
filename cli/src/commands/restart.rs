//! `waggle restart` — stop the agent if running, then start a fresh instance.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::lifecycle::{self, RestartOutcome, StopTiming};

/// Run `waggle restart`.
///
/// # Errors
///
/// Returns an error if the running instance cannot be stopped or the
/// replacement cannot be launched.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let outcome = lifecycle::restart(
        &app.pid_store,
        &app.probe,
        &app.elevator,
        &app.launcher,
        &app.launch,
        app.debug,
        StopTiming::default(),
    )
    .await?;

    match outcome {
        RestartOutcome::Restarted { pid } => {
            app.output.success(&format!("Agent restarted (pid {pid})."));
        }
        RestartOutcome::Elevated => {
            app.output
                .info("Elevation granted; the elevated process is restarting the agent.");
        }
    }
    Ok(ExitCode::SUCCESS)
}
