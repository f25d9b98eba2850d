use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sakari API client id (the Basic auth user name).
///
/// Invariant: must not be empty. The value is kept verbatim so the Basic
/// credential matches what was stored.
pub struct ClientId(String);

impl ClientId {
    /// Settings key under which the client id is stored (`clientId`).
    pub const FIELD: &'static str = "clientId";

    /// Create a validated [`ClientId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Sakari API client secret (the Basic auth password).
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
/// The `Debug` representation never prints the secret.
pub struct ClientSecret(String);

impl ClientSecret {
    /// Settings key under which the client secret is stored (`clientSecret`).
    pub const FIELD: &'static str = "clientSecret";

    /// Create a validated [`ClientSecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the secret as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
/// Account id used to scope message and contact paths.
///
/// May be empty: an unconfigured account id resolves to `""` and is passed
/// through verbatim, which yields paths such as `/accounts//messages`.
pub struct AccountId(String);

impl AccountId {
    /// Settings key under which the account id is stored (`accountId`).
    pub const FIELD: &'static str = "accountId";

    /// Wrap an account id without validation.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Identifier of a single message, contact or account in a resource path.
///
/// Kept verbatim; the API decides whether it names anything.
pub struct ResourceId(String);

impl ResourceId {
    pub const FIELD: &'static str = "id";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Phone number as sent to Sakari (`to`, `mobile`).
///
/// No normalization is applied; the API expects E.164 and reports its own
/// validation errors.
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub const FIELD: &'static str = "phone number";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`body`).
///
/// Invariant: non-empty after trimming. The value is kept as given, whitespace included.
pub struct MessageText(String);

impl MessageText {
    pub const FIELD: &'static str = "body";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Page window for list endpoints (`limit`, `offset`).
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
}

impl Pagination {
    pub const DEFAULT_LIMIT: u32 = 50;

    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}
