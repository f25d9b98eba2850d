use base64::prelude::*;

use crate::domain::{ClientId, ClientSecret};

/// Standard base64 of `"<clientId>:<clientSecret>"`.
pub fn basic_credential(client_id: &ClientId, client_secret: &ClientSecret) -> String {
    BASE64_STANDARD.encode(format!("{}:{}", client_id.as_str(), client_secret.as_str()))
}

/// Value of the `Authorization` header.
pub fn authorization_value(client_id: &ClientId, client_secret: &ClientSecret) -> String {
    format!("Basic {}", basic_credential(client_id, client_secret))
}
