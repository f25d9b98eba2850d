//! Typed helpers for the account, message and contact endpoints.

use serde_json::Value;
use tracing::warn;

use super::{SakariClient, SakariError};
use crate::domain::{AccountId, CreateContact, Pagination, ResourceId, SendMessage};
use crate::transport::{
    encode_create_contact, encode_get_account, encode_get_contact, encode_get_message,
    encode_list_accounts, encode_list_contacts, encode_list_messages, encode_send_message,
};

impl SakariClient<'_> {
    // An unset account id is sent as-is and produces `/accounts//...`.
    fn account_id(&self) -> AccountId {
        let account = self.settings.resolve_account_id();
        if account.is_empty() {
            warn!(
                "accountId is not configured; set it with `sakari config set accountId <id>` \
                 or SAKARI_ACCOUNT_ID"
            );
        }
        account
    }

    /// `GET /accounts/{accountId}/messages`.
    pub async fn list_messages(&self, page: Pagination) -> Result<Value, SakariError> {
        self.execute(encode_list_messages(&self.account_id(), page))
            .await
    }

    /// `GET /accounts/{accountId}/messages/{id}`.
    pub async fn get_message(&self, id: &ResourceId) -> Result<Value, SakariError> {
        self.execute(encode_get_message(&self.account_id(), id))
            .await
    }

    /// `POST /accounts/{accountId}/messages`.
    pub async fn send_message(&self, message: &SendMessage) -> Result<Value, SakariError> {
        let request = encode_send_message(&self.account_id(), message)?;
        self.execute(request).await
    }

    /// `GET /accounts/{accountId}/contacts`.
    pub async fn list_contacts(&self, page: Pagination) -> Result<Value, SakariError> {
        self.execute(encode_list_contacts(&self.account_id(), page))
            .await
    }

    /// `GET /accounts/{accountId}/contacts/{id}`.
    pub async fn get_contact(&self, id: &ResourceId) -> Result<Value, SakariError> {
        self.execute(encode_get_contact(&self.account_id(), id))
            .await
    }

    /// `POST /accounts/{accountId}/contacts`.
    pub async fn create_contact(&self, contact: &CreateContact) -> Result<Value, SakariError> {
        let request = encode_create_contact(&self.account_id(), contact)?;
        self.execute(request).await
    }

    /// `GET /accounts`.
    pub async fn list_accounts(&self) -> Result<Value, SakariError> {
        self.execute(encode_list_accounts()).await
    }

    /// `GET /accounts/{id}`.
    pub async fn get_account(&self, id: &ResourceId) -> Result<Value, SakariError> {
        self.execute(encode_get_account(id)).await
    }
}
