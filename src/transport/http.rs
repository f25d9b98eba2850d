use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use url::Url;

use crate::domain::Method;

pub type BoxError = Box<dyn StdError + Send + Sync>;
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Per-call client configuration: auth header, timeout, user agent.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub authorization: String,
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl SessionConfig {
    /// Headers sent with every request.
    pub fn headers(&self) -> Vec<(HeaderName, String)> {
        vec![
            (AUTHORIZATION, self.authorization.clone()),
            (CONTENT_TYPE, JSON_MEDIA_TYPE.to_owned()),
            (ACCEPT, JSON_MEDIA_TYPE.to_owned()),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TransportFailure {
    #[error("timed out: {0}")]
    Timeout(#[source] BoxError),

    #[error("{0}")]
    Network(#[source] BoxError),

    #[error("could not build HTTP client: {0}")]
    Build(#[source] BoxError),
}

impl TransportFailure {
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(Box::new(err))
        } else {
            Self::Network(Box::new(err))
        }
    }
}

pub trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        session: &'a SessionConfig,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>>;
}

/// Builds a fresh `reqwest::Client` for every call; nothing is pooled or
/// carried over between requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransport;

impl ReqwestTransport {
    fn build_client(session: &SessionConfig) -> Result<reqwest::Client, TransportFailure> {
        let mut headers = HeaderMap::new();
        for (name, value) in session.headers() {
            let value =
                HeaderValue::from_str(&value).map_err(|err| TransportFailure::Build(Box::new(err)))?;
            headers.insert(name, value);
        }

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(session.timeout);
        if let Some(user_agent) = session.user_agent.as_deref() {
            builder = builder.user_agent(user_agent);
        }

        builder
            .build()
            .map_err(|err| TransportFailure::Build(Box::new(err)))
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        session: &'a SessionConfig,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move {
            let client = Self::build_client(session)?;
            let mut builder = client.request(reqwest_method(request.method), request.url);
            if let Some(body) = request.body.as_ref() {
                builder = builder.json(body);
            }

            let response = builder.send().await.map_err(TransportFailure::from_reqwest)?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(TransportFailure::from_reqwest)?;
            Ok(HttpResponse { status, body })
        })
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}
