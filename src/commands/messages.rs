/// `messages` commands: send, list and fetch SMS messages.
use anyhow::Result;
use sakari::{
    MessageText, Pagination, PhoneNumber, ResourceId, SakariClient, SendMessage, SettingsStore,
};

use super::{Activity, run_request};
use crate::cli::OutputCtx;
use crate::cli::args::MessagesCommand;

/// Run `sakari messages <command>`.
///
/// # Errors
///
/// Returns a validation error for a blank message body, else whatever the API call fails with.
pub async fn run(
    command: &MessagesCommand,
    settings: &SettingsStore,
    ctx: &OutputCtx,
) -> Result<()> {
    let client = SakariClient::new(settings);
    match command {
        MessagesCommand::Send(args) => {
            let message = SendMessage::new(
                PhoneNumber::new(args.to.as_str()),
                PhoneNumber::new(args.from.as_str()),
                MessageText::new(args.body.as_str())?,
            );
            let activity = Activity {
                pending: "Sending message...".into(),
                done: "Message sent",
                failed: "Failed to send message",
            };
            run_request(ctx, activity, client.send_message(&message)).await
        }
        MessagesCommand::List(page) => {
            let activity = Activity {
                pending: "Fetching messages...".into(),
                done: "Messages retrieved",
                failed: "Failed to fetch messages",
            };
            let page = Pagination::new(page.limit, page.offset);
            run_request(ctx, activity, client.list_messages(page)).await
        }
        MessagesCommand::Get { id } => {
            let id = ResourceId::new(id.as_str());
            let activity = Activity {
                pending: format!("Fetching message {id}...").into(),
                done: "Message retrieved",
                failed: "Failed to fetch message",
            };
            run_request(ctx, activity, client.get_message(&id)).await
        }
    }
}
