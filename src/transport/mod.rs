//! Transport layer: HTTP and wire-format details (URLs, headers, bodies).

mod accounts;
mod auth;
mod contacts;
mod endpoint;
mod http;
mod messages;

pub use accounts::{encode_get_account, encode_list_accounts};
pub use auth::authorization_value;
pub use contacts::{encode_create_contact, encode_get_contact, encode_list_contacts};
pub use endpoint::{decode_body, request_url};
pub use http::{
    BoxError, HttpRequest, HttpTransport, ReqwestTransport, SessionConfig, TransportFailure,
};
#[cfg(test)]
pub use http::{BoxFuture, HttpResponse};
pub use messages::{encode_get_message, encode_list_messages, encode_send_message};
