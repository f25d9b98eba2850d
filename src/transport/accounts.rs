use crate::domain::{RequestDescriptor, ResourceId};

const ACCOUNTS_PATH: &str = "/accounts";

pub fn encode_list_accounts() -> RequestDescriptor {
    RequestDescriptor::get(ACCOUNTS_PATH)
}

pub fn encode_get_account(id: &ResourceId) -> RequestDescriptor {
    RequestDescriptor::get(format!("{ACCOUNTS_PATH}/{}", id.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Method;

    #[test]
    fn account_paths_are_not_account_scoped() {
        let request = encode_list_accounts();
        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.path(), "/accounts");
        assert!(request.query().is_empty());

        let request = encode_get_account(&ResourceId::new("acc-7"));
        assert_eq!(request.path(), "/accounts/acc-7");
    }
}
