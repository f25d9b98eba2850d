//! Credential resolution: stored value, then environment, then fallback.

use tracing::trace;

use super::{ConfigurationError, Setting, SettingsStore, value_text};
use crate::domain::{AccountId, ClientId, ClientSecret};

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Stored,
    Environment,
    Fallback,
}

impl SettingsStore {
    /// Walk the precedence chain for `setting`.
    ///
    /// Empty stored or environment values are skipped. The environment is read
    /// on every call.
    pub fn resolve(&self, setting: Setting) -> (String, Source) {
        if let Some(value) = self
            .stored(setting.key())
            .map(value_text)
            .filter(|value| !value.is_empty())
        {
            return (value, Source::Stored);
        }
        if let Some(value) = self
            .environment()
            .var(setting.env_var())
            .filter(|value| !value.is_empty())
        {
            return (value, Source::Environment);
        }
        (setting.fallback().to_owned(), Source::Fallback)
    }

    /// Client id from settings or `SAKARI_CLIENT_ID`.
    pub fn resolve_client_id(&self) -> Result<ClientId, ConfigurationError> {
        let (value, source) = self.resolve(Setting::ClientId);
        trace!(?source, "resolved client id");
        ClientId::new(value).map_err(|_| {
            ConfigurationError::missing(ClientId::FIELD, "Client ID", Setting::ClientId.env_var())
        })
    }

    /// Client secret from settings or `SAKARI_CLIENT_SECRET`.
    pub fn resolve_client_secret(&self) -> Result<ClientSecret, ConfigurationError> {
        let (value, source) = self.resolve(Setting::ClientSecret);
        trace!(?source, "resolved client secret");
        ClientSecret::new(value).map_err(|_| {
            ConfigurationError::missing(
                ClientSecret::FIELD,
                "Client secret",
                Setting::ClientSecret.env_var(),
            )
        })
    }

    /// Account id from settings or `SAKARI_ACCOUNT_ID`; empty when neither is set.
    pub fn resolve_account_id(&self) -> AccountId {
        AccountId::new(self.resolve(Setting::AccountId).0)
    }

    /// Base URL from settings or `SAKARI_BASE_URL`, else [`super::DEFAULT_BASE_URL`].
    pub fn resolve_base_url(&self) -> String {
        self.resolve(Setting::BaseUrl).0
    }
}
