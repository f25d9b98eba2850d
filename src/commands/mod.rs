/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod accounts;
pub mod config;
pub mod contacts;
pub mod messages;

use std::borrow::Cow;

use anyhow::Result;
use sakari::{SakariError, SettingsStore};
use serde_json::Value;

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::cli::output::write_value;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns the first settings, validation or API error hit by the command.
pub async fn dispatch(
    command: &Command,
    settings: &mut SettingsStore,
    ctx: &OutputCtx,
) -> Result<()> {
    match command {
        Command::Config(command) => config::run(command, settings, ctx),
        Command::Messages(command) => messages::run(command, settings, ctx).await,
        Command::Contacts(command) => contacts::run(command, settings, ctx).await,
        Command::Accounts(command) => accounts::run(command, settings, ctx).await,
    }
}

/// Labels for the spinner of one API call.
pub struct Activity {
    pub pending: Cow<'static, str>,
    pub done: &'static str,
    pub failed: &'static str,
}

/// Await one API call behind a spinner, then print its response.
async fn run_request<F>(ctx: &OutputCtx, activity: Activity, call: F) -> Result<()>
where
    F: Future<Output = Result<Value, SakariError>>,
{
    let progress = ctx.progress(activity.pending);
    match call.await {
        Ok(value) => {
            progress.succeed(activity.done);
            write_value(&value, ctx);
            Ok(())
        }
        Err(err) => {
            progress.fail(activity.failed);
            Err(err.into())
        }
    }
}
