//! The success/error discriminated result every materialized response carries.
//!
//! Each resource embeds an [`Envelope`]: the success discriminant plus the extras map of
//! keys the resource does not declare. Unknown keys are kept rather than dropped so that
//! fields the API adds before this crate is updated stay reachable, and survive
//! re-serialization.
//!
//! A call result is an [`ApiResponse`]: either the materialized resource or an
//! [`ErrorEnvelope`] built from a non-2xx body. API errors are values, not `Err`s; an
//! `Err` from [`materialize`] always means the body did not fit the requested shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::Result;
use crate::serde_helpers::deserialize_with_path;

/// Raw JSON object keyed by field name.
pub type Extras = Map<String, Value>;

const DEFAULT_ERROR_MESSAGE: &str = "Bad Request";

/// Success discriminant and undeclared fields of one materialized JSON object.
///
/// Embed with `#[serde(flatten)]`; every key not matched by a sibling field lands in
/// [`extra`](Self::extra).
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    success: bool,
    extra: Extras,
}

impl Envelope {
    pub(crate) fn failure(extra: Extras) -> Self {
        Self {
            success: false,
            extra,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Keys present in the raw object that the resource does not declare.
    #[must_use]
    pub fn extra(&self) -> &Extras {
        &self.extra
    }

    /// Undeclared value for `key`, if the raw object carried one.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            success: true,
            extra: Extras::new(),
        }
    }
}

impl<'de> Deserialize<'de> for Envelope {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self {
            success: true,
            extra: Extras::deserialize(deserializer)?,
        })
    }
}

impl Serialize for Envelope {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.extra.serialize(serializer)
    }
}

/// Body of a non-2xx response.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEnvelope {
    /// Error message from the body, `"Bad Request"` when absent.
    pub message: String,
    /// HTTP status of the response. Always the transport status, never a body value.
    pub status_code: u16,
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl ErrorEnvelope {
    /// Build the error envelope for `status_code` from a raw body.
    ///
    /// An object body contributes its `message` (if it is a string) and keeps every other
    /// key as extras. A string body becomes the message. Any other body is ignored.
    #[must_use]
    pub fn from_body(status_code: u16, body: Value) -> Self {
        let (message, extra) = match body {
            Value::Object(mut map) => {
                // The transport status wins over anything the body claims.
                map.remove("status_code");
                let message = match map.remove("message") {
                    Some(Value::String(message)) => message,
                    Some(other) => {
                        map.insert("message".to_owned(), other);
                        DEFAULT_ERROR_MESSAGE.to_owned()
                    }
                    None => DEFAULT_ERROR_MESSAGE.to_owned(),
                };
                (message, map)
            }
            Value::String(message) if !message.is_empty() => (message, Extras::new()),
            _ => (DEFAULT_ERROR_MESSAGE.to_owned(), Extras::new()),
        };

        Self {
            message,
            status_code,
            envelope: Envelope::failure(extra),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.envelope.is_success()
    }
}

/// Outcome of one API call: the materialized resource or the API's error body.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success(T),
    Error(ErrorEnvelope),
}

impl<T> ApiResponse<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The resource, or `None` for an API error.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// The error body, or `None` on success.
    #[must_use]
    pub fn error(&self) -> Option<&ErrorEnvelope> {
        match self {
            Self::Success(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    /// Convert into a `Result`, for callers that want to propagate API errors with `?`.
    ///
    /// # Errors
    ///
    /// Returns the [`ErrorEnvelope`] if the call was not successful.
    pub fn into_result(self) -> std::result::Result<T, ErrorEnvelope> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Error(error) => Err(error),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        match self {
            Self::Success(value) => ApiResponse::Success(f(value)),
            Self::Error(error) => ApiResponse::Error(error),
        }
    }
}

/// Materialize a raw JSON value into `T` without a status check.
///
/// # Errors
///
/// Returns a [`Kind::Schema`](crate::error::Kind::Schema) error naming the field path if
/// `value` does not match `T`.
pub fn materialize_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    deserialize_with_path(value)
}

/// Materialize a `(status, body)` pair as returned by the transport.
///
/// A status outside `200..300` yields [`ApiResponse::Error`] regardless of the body's
/// shape. Otherwise the body is materialized into `T`; collections materialize every item
/// independently through the same rule.
///
/// # Errors
///
/// Returns a [`Kind::Schema`](crate::error::Kind::Schema) error if a 2xx body does not
/// match `T`.
pub fn materialize<T: DeserializeOwned>(status_code: u16, body: Value) -> Result<ApiResponse<T>> {
    if !(200..300).contains(&status_code) {
        return Ok(ApiResponse::Error(ErrorEnvelope::from_body(
            status_code,
            body,
        )));
    }

    deserialize_with_path(body).map(ApiResponse::Success)
}
