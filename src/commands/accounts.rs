/// `accounts` commands.
use anyhow::Result;
use sakari::{ResourceId, SakariClient, SettingsStore};

use super::{Activity, run_request};
use crate::cli::OutputCtx;
use crate::cli::args::AccountsCommand;

/// Run `sakari accounts <command>`.
///
/// # Errors
///
/// Returns whatever the API call fails with.
pub async fn run(
    command: &AccountsCommand,
    settings: &SettingsStore,
    ctx: &OutputCtx,
) -> Result<()> {
    let client = SakariClient::new(settings);
    match command {
        AccountsCommand::List => {
            let activity = Activity {
                pending: "Fetching accounts...".into(),
                done: "Accounts retrieved",
                failed: "Failed to fetch accounts",
            };
            run_request(ctx, activity, client.list_accounts()).await
        }
        AccountsCommand::Get { id } => {
            let id = ResourceId::new(id.as_str());
            let activity = Activity {
                pending: format!("Fetching account {id}...").into(),
                done: "Account retrieved",
                failed: "Failed to fetch account",
            };
            run_request(ctx, activity, client.get_account(&id)).await
        }
    }
}
