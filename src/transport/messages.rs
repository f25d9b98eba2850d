use crate::domain::{AccountId, Pagination, RequestDescriptor, ResourceId, SendMessage};

fn messages_path(account: &AccountId) -> String {
    format!("/accounts/{}/messages", account.as_str())
}

pub fn encode_list_messages(account: &AccountId, page: Pagination) -> RequestDescriptor {
    RequestDescriptor::get(messages_path(account))
        .with_query([("limit", page.limit), ("offset", page.offset)])
}

pub fn encode_get_message(account: &AccountId, id: &ResourceId) -> RequestDescriptor {
    RequestDescriptor::get(format!("{}/{}", messages_path(account), id.as_str()))
}

pub fn encode_send_message(
    account: &AccountId,
    message: &SendMessage,
) -> Result<RequestDescriptor, serde_json::Error> {
    Ok(RequestDescriptor::post(
        messages_path(account),
        serde_json::to_value(message)?,
    ))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{MessageText, Method, PhoneNumber, QueryValue};

    #[test]
    fn list_messages_uses_account_scope_and_pagination() {
        let request = encode_list_messages(&AccountId::new("acc"), Pagination::new(10, 20));
        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.path(), "/accounts/acc/messages");
        assert_eq!(
            request.query(),
            &[
                ("limit".to_owned(), QueryValue::UInt(10)),
                ("offset".to_owned(), QueryValue::UInt(20)),
            ]
        );
    }

    #[test]
    fn get_message_appends_id() {
        let id = ResourceId::new("m-1");
        let request = encode_get_message(&AccountId::new("acc"), &id);
        assert_eq!(request.path(), "/accounts/acc/messages/m-1");
        assert!(request.query().is_empty());
    }

    #[test]
    fn send_message_posts_payload() {
        let message = SendMessage::new(
            PhoneNumber::new("+12345678900"),
            PhoneNumber::new("+10987654321"),
            MessageText::new("Hello World").unwrap(),
        );
        let request = encode_send_message(&AccountId::new("acc"), &message).unwrap();
        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.path(), "/accounts/acc/messages");
        assert_eq!(
            request.body(),
            Some(&json!({"to": "+12345678900", "from": "+10987654321", "body": "Hello World"}))
        );
    }

    #[test]
    fn empty_account_id_is_passed_through() {
        let request = encode_list_messages(&AccountId::default(), Pagination::default());
        assert_eq!(request.path(), "/accounts//messages");
    }
}
