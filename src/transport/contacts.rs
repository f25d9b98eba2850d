use crate::domain::{AccountId, CreateContact, Pagination, RequestDescriptor, ResourceId};

fn contacts_path(account: &AccountId) -> String {
    format!("/accounts/{}/contacts", account.as_str())
}

pub fn encode_list_contacts(account: &AccountId, page: Pagination) -> RequestDescriptor {
    RequestDescriptor::get(contacts_path(account))
        .with_query([("limit", page.limit), ("offset", page.offset)])
}

pub fn encode_get_contact(account: &AccountId, id: &ResourceId) -> RequestDescriptor {
    RequestDescriptor::get(format!("{}/{}", contacts_path(account), id.as_str()))
}

pub fn encode_create_contact(
    account: &AccountId,
    contact: &CreateContact,
) -> Result<RequestDescriptor, serde_json::Error> {
    Ok(RequestDescriptor::post(
        contacts_path(account),
        serde_json::to_value(contact)?,
    ))
}
