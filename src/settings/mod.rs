//! Settings layer: the persistent key-value store and credential resolution.
//!
//! The store keeps user overrides in a JSON document on disk. The four known
//! settings ([`Setting`]) additionally have defaults taken from `SAKARI_*`
//! environment variables and, for the base URL, a fixed fallback.

mod env;
mod error;
mod persistence;
mod resolve;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::info;

pub use env::{Environment, MapEnv, ProcessEnv};
pub use error::{ConfigurationError, SettingsError};
pub use persistence::{APP_DIR, FILE_NAME, default_settings_path};
pub use resolve::Source;

use crate::domain::{AccountId, ClientId, ClientSecret};
use persistence::{Document, load_document, save_document};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.sakari.io/v1";

/// Settings with a documented default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Setting {
    ClientId,
    ClientSecret,
    AccountId,
    BaseUrl,
}

impl Setting {
    pub const ALL: [Setting; 4] = [
        Setting::ClientId,
        Setting::ClientSecret,
        Setting::AccountId,
        Setting::BaseUrl,
    ];

    /// Key in the settings document.
    pub fn key(self) -> &'static str {
        match self {
            Self::ClientId => ClientId::FIELD,
            Self::ClientSecret => ClientSecret::FIELD,
            Self::AccountId => AccountId::FIELD,
            Self::BaseUrl => "baseUrl",
        }
    }

    /// Environment variable consulted when nothing is stored.
    pub fn env_var(self) -> &'static str {
        match self {
            Self::ClientId => "SAKARI_CLIENT_ID",
            Self::ClientSecret => "SAKARI_CLIENT_SECRET",
            Self::AccountId => "SAKARI_ACCOUNT_ID",
            Self::BaseUrl => "SAKARI_BASE_URL",
        }
    }

    /// Value used when neither the store nor the environment provide one.
    pub fn fallback(self) -> &'static str {
        match self {
            Self::BaseUrl => DEFAULT_BASE_URL,
            Self::ClientId | Self::ClientSecret | Self::AccountId => "",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|setting| setting.key() == key)
    }
}

/// Persistent key-value settings.
///
/// Open it once per process and pass it by reference to whatever needs it.
/// Every mutation is written to disk before the call returns.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    overrides: Document,
    env: Arc<dyn Environment>,
}

impl SettingsStore {
    /// Open the store at the default location, with defaults from the process environment.
    pub fn open_default() -> Result<Self, SettingsError> {
        Self::open(default_settings_path()?)
    }

    /// Open the store at `path`, with defaults from the process environment.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        Self::open_with_env(path, Arc::new(ProcessEnv))
    }

    /// Open the store at `path`, taking defaults from `env`.
    pub fn open_with_env(
        path: impl Into<PathBuf>,
        env: Arc<dyn Environment>,
    ) -> Result<Self, SettingsError> {
        let path = path.into();
        let overrides = load_document(&path)?;
        Ok(Self {
            path,
            overrides,
            env,
        })
    }

    /// Location of the settings document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn environment(&self) -> &dyn Environment {
        self.env.as_ref()
    }

    /// Stored override for `key`, ignoring defaults.
    pub fn stored(&self, key: &str) -> Option<&Value> {
        self.overrides.get(key)
    }

    /// Stored value for `key` as text, else its default. Unknown keys have no default.
    ///
    /// Non-string values found in the file are rendered as JSON, and `null` as
    /// an empty string.
    pub fn get(&self, key: &str) -> Option<String> {
        if let Some(value) = self.stored(key) {
            return Some(value_text(value));
        }
        Setting::from_key(key).map(|setting| self.default_value(setting))
    }

    /// Default for a known setting: non-empty environment value, else the fallback.
    pub fn default_value(&self, setting: Setting) -> String {
        self.env
            .var(setting.env_var())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| setting.fallback().to_owned())
    }

    /// All keys with their current value: defaults overlaid with overrides.
    pub fn list(&self) -> Map<String, Value> {
        let mut all: Map<String, Value> = Setting::ALL
            .into_iter()
            .map(|setting| {
                (
                    setting.key().to_owned(),
                    Value::String(self.default_value(setting)),
                )
            })
            .collect();
        all.extend(
            self.overrides
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        all
    }

    /// Store `value` under `key` and persist.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), SettingsError> {
        let key = key.into();
        let mut next = self.overrides.clone();
        next.insert(key.clone(), Value::String(value.into()));
        self.commit(next)?;
        info!(key = %key, "setting updated");
        Ok(())
    }

    /// Remove the override for `key`, reverting it to its default, and persist.
    pub fn delete(&mut self, key: &str) -> Result<(), SettingsError> {
        let mut next = self.overrides.clone();
        next.remove(key);
        self.commit(next)?;
        info!(key = %key, "setting removed");
        Ok(())
    }

    /// Remove every override and persist.
    pub fn clear(&mut self) -> Result<(), SettingsError> {
        self.commit(Document::new())?;
        info!("settings cleared");
        Ok(())
    }

    // In-memory state only changes once the write succeeded.
    fn commit(&mut self, next: Document) -> Result<(), SettingsError> {
        save_document(&self.path, &next)?;
        self.overrides = next;
        Ok(())
    }
}

pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
