//! Command implementations

pub mod restart;
pub mod run;
pub mod start;
pub mod status;
pub mod stop;
pub mod version;

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::cli::Command;

/// Route a parsed command to its handler. No command means a foreground run.
///
/// # Errors
///
/// Propagates the handler's failure for top-level reporting.
pub async fn dispatch(command: Option<Command>, app: &AppContext) -> Result<ExitCode> {
    match command {
        None => run::run(app).await,
        Some(Command::Start) => start::run(app),
        Some(Command::Stop) => stop::run(app).await,
        Some(Command::Restart) => restart::run(app).await,
        Some(Command::Status) => status::run(app),
        Some(Command::Version) => {
            version::run();
            Ok(ExitCode::SUCCESS)
        }
    }
}
