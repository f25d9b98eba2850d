/// `contacts` commands.
use anyhow::Result;
use sakari::{CreateContact, Pagination, PhoneNumber, ResourceId, SakariClient, SettingsStore};

use super::{Activity, run_request};
use crate::cli::OutputCtx;
use crate::cli::args::{ContactsCommand, CreateContactArgs};

/// Run `sakari contacts <command>`.
///
/// # Errors
///
/// Returns whatever the API call fails with.
pub async fn run(
    command: &ContactsCommand,
    settings: &SettingsStore,
    ctx: &OutputCtx,
) -> Result<()> {
    let client = SakariClient::new(settings);
    match command {
        ContactsCommand::List(page) => {
            let activity = Activity {
                pending: "Fetching contacts...".into(),
                done: "Contacts retrieved",
                failed: "Failed to fetch contacts",
            };
            let page = Pagination::new(page.limit, page.offset);
            run_request(ctx, activity, client.list_contacts(page)).await
        }
        ContactsCommand::Create(args) => {
            let contact = new_contact(args);
            let activity = Activity {
                pending: "Creating contact...".into(),
                done: "Contact created",
                failed: "Failed to create contact",
            };
            run_request(ctx, activity, client.create_contact(&contact)).await
        }
        ContactsCommand::Get { id } => {
            let id = ResourceId::new(id.as_str());
            let activity = Activity {
                pending: format!("Fetching contact {id}...").into(),
                done: "Contact retrieved",
                failed: "Failed to fetch contact",
            };
            run_request(ctx, activity, client.get_contact(&id)).await
        }
    }
}

fn new_contact(args: &CreateContactArgs) -> CreateContact {
    let mut contact = CreateContact::new(PhoneNumber::new(args.mobile.as_str()));
    if let Some(first) = &args.first {
        contact = contact.first_name(first.as_str());
    }
    if let Some(last) = &args.last {
        contact = contact.last_name(last.as_str());
    }
    contact
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn new_contact_carries_only_given_names() {
        let args = CreateContactArgs {
            mobile: "+12345678900".to_owned(),
            first: Some("Ada".to_owned()),
            last: None,
        };
        let contact = new_contact(&args);
        assert_eq!(
            serde_json::to_value(&contact).unwrap(),
            json!({"mobile": "+12345678900", "firstName": "Ada"})
        );
    }

    #[test]
    fn mobile_is_passed_through_verbatim() {
        let args = CreateContactArgs {
            mobile: "  ".to_owned(),
            first: None,
            last: None,
        };
        assert_eq!(
            serde_json::to_value(new_contact(&args)).unwrap(),
            json!({"mobile": "  "})
        );
    }
}
