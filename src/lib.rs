//! Client for the Sakari SMS REST API.
//!
//! The crate is layered the same way as the `sakari` binary uses it: a domain
//! layer of strong types, a settings layer that persists credentials and
//! resolves them against the environment, a private transport layer for wire
//! encoding, and a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use sakari::{Pagination, SakariClient, SettingsStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = SettingsStore::open_default()?;
//!     let client = SakariClient::new(&settings);
//!     let messages = client.list_messages(Pagination::default()).await?;
//!     println!("{messages:#}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod settings;
mod transport;

pub use client::{DEFAULT_TIMEOUT, RequestError, SakariClient, SakariClientBuilder, SakariError};
pub use domain::{
    AccountId, ClientId, ClientSecret, CreateContact, MessageText, Method, Pagination,
    PhoneNumber, QueryValue, RequestDescriptor, ResourceId, SendMessage, ValidationError,
};
pub use settings::{
    ConfigurationError, DEFAULT_BASE_URL, Environment, MapEnv, ProcessEnv, Setting,
    SettingsError, SettingsStore, Source,
};
