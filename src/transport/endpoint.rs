use serde_json::Value;
use url::Url;

use crate::domain::{Method, RequestDescriptor};

/// Resolve a request path against the configured base URL.
///
/// Paths are appended to the base rather than RFC 3986-joined, so the base
/// URL's own path (`/v1`) is kept. Absolute `http(s)` URLs are used as-is.
pub fn join_url(base_url: &str, path: &str) -> Result<Url, url::ParseError> {
    if let Ok(absolute) = Url::parse(path) {
        if matches!(absolute.scheme(), "http" | "https") {
            return Ok(absolute);
        }
    }

    if path.is_empty() {
        return Url::parse(base_url);
    }

    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    let relative = path.trim_start_matches('/');
    Url::parse(&format!("{base}/{relative}"))
}

/// Full request URL, with query parameters encoded for GET requests.
pub fn request_url(base_url: &str, request: &RequestDescriptor) -> Result<Url, url::ParseError> {
    let mut url = join_url(base_url, request.path())?;
    if request.method() == Method::Get && !request.query().is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in request.query() {
            pairs.append_pair(key, &value.to_string());
        }
    }
    Ok(url)
}

/// Decode a response body: JSON when it parses, the raw text otherwise.
///
/// A blank body decodes to `None`.
pub fn decode_body(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_owned())))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::QueryValue;

    const BASE: &str = "https://api.sakari.io/v1";

    #[test]
    fn join_keeps_base_path() {
        let url = join_url(BASE, "/accounts").unwrap();
        assert_eq!(url.as_str(), "https://api.sakari.io/v1/accounts");
    }

    #[test]
    fn join_tolerates_trailing_and_missing_slashes() {
        assert_eq!(
            join_url("https://api.sakari.io/v1/", "accounts").unwrap().as_str(),
            "https://api.sakari.io/v1/accounts"
        );
        assert_eq!(join_url(BASE, "").unwrap().as_str(), BASE);
    }

    #[test]
    fn join_preserves_empty_segments_inside_path() {
        let url = join_url(BASE, "/accounts//messages").unwrap();
        assert_eq!(url.as_str(), "https://api.sakari.io/v1/accounts//messages");
    }

    #[test]
    fn join_passes_absolute_urls_through() {
        let url = join_url(BASE, "https://other.example/x").unwrap();
        assert_eq!(url.as_str(), "https://other.example/x");
    }

    #[test]
    fn join_rejects_garbage_base() {
        assert!(join_url("not a url", "/accounts").is_err());
    }

    #[test]
    fn get_query_is_encoded() {
        let request = RequestDescriptor::get("/accounts/a1/messages")
            .with_query([("limit", 50u32), ("offset", 0u32)]);
        let url = request_url(BASE, &request).unwrap();

        assert_eq!(url.path(), "/v1/accounts/a1/messages");
        let pairs = url.query_pairs().into_owned().collect::<Vec<_>>();
        assert!(pairs.contains(&("limit".to_owned(), "50".to_owned())));
        assert!(pairs.contains(&("offset".to_owned(), "0".to_owned())));
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let request = RequestDescriptor::get("/accounts")
            .with_query([("q", QueryValue::from("a&b c")), ("flag", QueryValue::from(true))]);
        let url = request_url(BASE, &request).unwrap();
        assert_eq!(url.query(), Some("q=a%26b+c&flag=true"));
    }

    #[test]
    fn empty_query_adds_no_question_mark() {
        let request = RequestDescriptor::get("/accounts");
        let url = request_url(BASE, &request).unwrap();
        assert_eq!(url.as_str(), "https://api.sakari.io/v1/accounts");
    }

    #[test]
    fn body_decoding_prefers_json_then_text() {
        assert_eq!(decode_body(r#"{"ok":true}"#), Some(json!({"ok": true})));
        assert_eq!(decode_body("plain text"), Some(json!("plain text")));
        assert_eq!(decode_body("  "), None);
    }
}
