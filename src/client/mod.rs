//! Client layer: resolves credentials, builds each request and maps transport
//! results into the crate's error types.

mod error;
mod resources;

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

pub use error::{RequestError, SakariError};

use crate::domain::{Method, QueryValue, RequestDescriptor};
use crate::settings::SettingsStore;
use crate::transport::{
    HttpRequest, HttpTransport, ReqwestTransport, SessionConfig, TransportFailure,
    authorization_value, decode_body, request_url,
};

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

const DEFAULT_USER_AGENT: &str = concat!("sakari-cli/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
/// Builder for [`SakariClient`].
///
/// Use this when you need to customize the timeout or user-agent.
pub struct SakariClientBuilder<'a> {
    settings: &'a SettingsStore,
    timeout: Duration,
    user_agent: Option<String>,
}

impl<'a> SakariClientBuilder<'a> {
    /// Create a builder with the 30 second timeout and the default user-agent.
    pub fn new(settings: &'a SettingsStore) -> Self {
        Self {
            settings,
            timeout: DEFAULT_TIMEOUT,
            user_agent: Some(DEFAULT_USER_AGENT.to_owned()),
        }
    }

    /// Set the timeout applied to each whole request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SakariClient`].
    pub fn build(self) -> SakariClient<'a> {
        SakariClient {
            settings: self.settings,
            timeout: self.timeout,
            user_agent: self.user_agent,
            http: Arc::new(ReqwestTransport),
        }
    }
}

#[derive(Clone)]
/// Sakari API client.
///
/// Credentials and the base URL are resolved from the [`SettingsStore`] (and the
/// environment behind it) on every call, and a fresh HTTP client is built for
/// each request. Every request carries `Authorization: Basic …`,
/// `Content-Type: application/json` and `Accept: application/json`.
pub struct SakariClient<'a> {
    settings: &'a SettingsStore,
    timeout: Duration,
    user_agent: Option<String>,
    http: Arc<dyn HttpTransport>,
}

impl<'a> SakariClient<'a> {
    /// Create a client with default settings.
    ///
    /// For more customization, use [`SakariClient::builder`].
    pub fn new(settings: &'a SettingsStore) -> Self {
        SakariClientBuilder::new(settings).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(settings: &'a SettingsStore) -> SakariClientBuilder<'a> {
        SakariClientBuilder::new(settings)
    }

    /// Settings the client resolves credentials from.
    pub fn settings(&self) -> &'a SettingsStore {
        self.settings
    }

    /// `GET path` with `query` encoded as the query string.
    pub async fn get<I, K, V>(&self, path: &str, query: I) -> Result<Value, SakariError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<QueryValue>,
    {
        self.execute(RequestDescriptor::get(path).with_query(query))
            .await
    }

    /// `POST path` with `body` as the JSON payload.
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Value, SakariError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.execute(RequestDescriptor::post(path, body)).await
    }

    /// `PUT path` with `body` as the JSON payload.
    pub async fn put<B>(&self, path: &str, body: &B) -> Result<Value, SakariError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.execute(RequestDescriptor::put(path, body)).await
    }

    /// `DELETE path` without a body.
    pub async fn delete(&self, path: &str) -> Result<Value, SakariError> {
        self.execute(RequestDescriptor::delete(path)).await
    }

    /// Issue one request.
    ///
    /// Returns the decoded body of a 2xx response: JSON when it parses, the raw
    /// text as a JSON string otherwise, and `null` for an empty body.
    ///
    /// Errors:
    /// - [`SakariError::Configuration`] when the client id or secret is missing
    ///   (no request is sent),
    /// - [`SakariError::Request`] for timeouts, network failures and non-2xx
    ///   responses.
    pub async fn execute(&self, request: RequestDescriptor) -> Result<Value, SakariError> {
        let session = self.session()?;
        let base_url = self.settings.resolve_base_url();
        let url = request_url(&base_url, &request).map_err(|source| RequestError::InvalidUrl {
            url: format!("{base_url}{}", request.path()),
            source,
        })?;

        let body = match request.method() {
            Method::Post | Method::Put => request.body().cloned(),
            Method::Get | Method::Delete => None,
        };

        debug!(method = %request.method(), url = %url, "sending request");
        let response = self
            .http
            .execute(
                &session,
                HttpRequest {
                    method: request.method(),
                    url,
                    body,
                },
            )
            .await
            .map_err(|failure| self.request_error(failure))?;
        debug!(status = response.status, "received response");

        if !(200..=299).contains(&response.status) {
            return Err(RequestError::HttpStatus {
                status: response.status,
                body: decode_body(&response.body),
            }
            .into());
        }

        Ok(decode_body(&response.body).unwrap_or(Value::Null))
    }

    fn session(&self) -> Result<SessionConfig, SakariError> {
        let client_id = self.settings.resolve_client_id()?;
        let client_secret = self.settings.resolve_client_secret()?;
        Ok(SessionConfig {
            authorization: authorization_value(&client_id, &client_secret),
            timeout: self.timeout,
            user_agent: self.user_agent.clone(),
        })
    }

    fn request_error(&self, failure: TransportFailure) -> RequestError {
        match failure {
            TransportFailure::Timeout(source) => RequestError::Timeout {
                timeout: self.timeout,
                source,
            },
            TransportFailure::Network(source) => RequestError::Network { source },
            build @ TransportFailure::Build(_) => RequestError::Network {
                source: Box::new(build),
            },
        }
    }
}
