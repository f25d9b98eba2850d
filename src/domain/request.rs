use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::domain::value::{MessageText, PhoneNumber};

/// HTTP verbs supported by the Sakari API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primitive value accepted as a query parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::UInt(u64::from(value))
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// One outgoing API call: verb, path relative to the base URL, query and body.
///
/// The path is not validated. Query parameters are only encoded for GET and the
/// body is only sent for POST and PUT.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    method: Method,
    path: String,
    query: Vec<(String, QueryValue)>,
    body: Option<Value>,
}

impl RequestDescriptor {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Append query parameters. They are only encoded for GET requests.
    pub fn with_query<I, K, V>(mut self, query: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<QueryValue>,
    {
        self.query
            .extend(query.into_iter().map(|(key, value)| (key.into(), value.into())));
        self
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, QueryValue)] {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// Payload for `POST /accounts/{accountId}/messages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessage {
    pub to: PhoneNumber,
    pub from: PhoneNumber,
    pub body: MessageText,
}

impl SendMessage {
    pub fn new(to: PhoneNumber, from: PhoneNumber, body: MessageText) -> Self {
        Self { to, from, body }
    }
}

impl Serialize for SendMessage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SendMessage", 3)?;
        state.serialize_field("to", self.to.as_str())?;
        state.serialize_field("from", self.from.as_str())?;
        state.serialize_field("body", self.body.as_str())?;
        state.end()
    }
}

/// Payload for `POST /accounts/{accountId}/contacts`.
///
/// Absent names are omitted from the JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateContact {
    pub mobile: PhoneNumber,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl CreateContact {
    pub fn new(mobile: PhoneNumber) -> Self {
        Self {
            mobile,
            first_name: None,
            last_name: None,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }
}

impl Serialize for CreateContact {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("CreateContact", 3)?;
        state.serialize_field("mobile", self.mobile.as_str())?;
        match &self.first_name {
            Some(first_name) => state.serialize_field("firstName", first_name)?,
            None => state.skip_field("firstName")?,
        }
        match &self.last_name {
            Some(last_name) => state.serialize_field("lastName", last_name)?,
            None => state.skip_field("lastName")?,
        }
        state.end()
    }
}
