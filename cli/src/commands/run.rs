//! Foreground run mode — the default when `waggle` is invoked without a
//! subcommand, and what a detached start re-executes.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::lifecycle;

/// Run the monitoring agent in the foreground until shutdown.
///
/// # Errors
///
/// Returns an error if the pid cannot be recorded or the worker fails. On a
/// worker failure the pid record is deliberately left behind so `status` can
/// flag the crash.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    app.output.info("Starting waggle agent.");
    app.output.kv("Account", &app.config.account);
    app.output.kv("Stack", &app.config.stack);
    if !app.config.services.is_empty() {
        app.output.kv("Services", &app.config.services.join(", "));
    }
    app.output
        .debug(&format!("Config loaded from {}", app.config.source.display()));

    lifecycle::run_foreground(&app.pid_store, &app.worker, &app.config).await?;

    app.output.success("Agent shut down.");
    Ok(ExitCode::SUCCESS)
}
