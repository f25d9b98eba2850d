//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod validation;
mod value;

pub use request::{CreateContact, Method, QueryValue, RequestDescriptor, SendMessage};
pub use validation::ValidationError;
pub use value::{
    AccountId, ClientId, ClientSecret, MessageText, Pagination, PhoneNumber, ResourceId,
};
