use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

#[cfg(feature = "webhooks")]
use crate::webhooks::EventType;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A 2xx body did not match the expected resource shape
    Schema,
    /// Error related to the webhook subscriber registry
    Subscription,
    /// One or more webhook subscribers failed while handling an event
    Dispatch,
    /// Error related to invalid input supplied to faceit-client-sdk
    Validation,
    /// Internal error from dependencies
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Validation {
            reason: message.into(),
        }
        .into()
    }

    pub fn schema<S: Into<String>>(
        resource: &'static str,
        path: String,
        kind: SchemaErrorKind,
        message: S,
    ) -> Self {
        Schema {
            resource,
            path,
            kind,
            message: message.into(),
        }
        .into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// Classification of a [`Schema`] failure.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorKind {
    /// A required key was absent.
    MissingField,
    /// A value had the wrong JSON type (or could not be read as the declared type).
    TypeMismatch,
    /// A string was not a member of the declared enumeration.
    InvalidEnumValue,
}

/// A raw body that could not be materialized into the requested resource.
///
/// `path` locates the offending value from the resource root, e.g. `stream.platform` or
/// `items[3].country`. For [`SchemaErrorKind::MissingField`] it names the missing key.
#[non_exhaustive]
#[derive(Debug)]
pub struct Schema {
    pub resource: &'static str,
    pub path: String,
    pub kind: SchemaErrorKind,
    pub message: String,
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} materializing {} at `{}`: {}",
            self.kind, self.resource, self.path, self.message
        )
    }
}

impl StdError for Schema {}

#[non_exhaustive]
#[derive(Debug)]
pub struct Validation {
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid: {}", self.reason)
    }
}

impl StdError for Validation {}

/// Attempted to unsubscribe a subscriber that is not registered for the event type.
#[cfg(feature = "webhooks")]
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct NotRegistered {
    pub event: EventType,
}

#[cfg(feature = "webhooks")]
impl fmt::Display for NotRegistered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscriber is not registered for `{}` events", self.event)
    }
}

#[cfg(feature = "webhooks")]
impl StdError for NotRegistered {}

/// A single subscriber that failed while handling a webhook event.
#[cfg(feature = "webhooks")]
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct SubscriberFailure {
    /// Registration order of the subscriber for this event type at dispatch time.
    pub index: usize,
    pub reason: String,
}

/// Every subscriber failure collected from one dispatch, after all subscribers finished.
#[cfg(feature = "webhooks")]
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct DispatchFailed {
    pub event: EventType,
    pub notified: usize,
    pub failures: Vec<SubscriberFailure>,
}

#[cfg(feature = "webhooks")]
impl fmt::Display for DispatchFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} subscribers failed handling `{}`",
            self.failures.len(),
            self.notified,
            self.event
        )?;
        for failure in &self.failures {
            write!(f, "; [{}] {}", failure.index, failure.reason)?;
        }
        Ok(())
    }
}

#[cfg(feature = "webhooks")]
impl StdError for DispatchFailed {}

#[cfg(feature = "data")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

#[cfg(feature = "data")]
impl From<reqwest::header::InvalidHeaderValue> for Error {
    fn from(e: reqwest::header::InvalidHeaderValue) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

#[cfg(feature = "data")]
impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<Schema> for Error {
    fn from(err: Schema) -> Self {
        Error::with_source(Kind::Schema, err)
    }
}

impl From<Validation> for Error {
    fn from(err: Validation) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

#[cfg(feature = "webhooks")]
impl From<NotRegistered> for Error {
    fn from(err: NotRegistered) -> Self {
        Error::with_source(Kind::Subscription, err)
    }
}

#[cfg(feature = "webhooks")]
impl From<DispatchFailed> for Error {
    fn from(err: DispatchFailed) -> Self {
        Error::with_source(Kind::Dispatch, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_display_should_include_path() {
        let error = Error::schema(
            "Championship",
            "stream.platform".to_owned(),
            SchemaErrorKind::TypeMismatch,
            "invalid type: integer `3`, expected a string",
        );

        assert_eq!(error.kind(), Kind::Schema);
        assert_eq!(
            error.to_string(),
            "Schema: TypeMismatch materializing Championship at `stream.platform`: invalid type: integer `3`, expected a string"
        );

        let schema = error.downcast_ref::<Schema>().unwrap();
        assert_eq!(schema.path, "stream.platform");
    }

    #[cfg(feature = "webhooks")]
    #[test]
    fn dispatch_failed_display_should_list_failures() {
        let failed = DispatchFailed {
            event: EventType::HubCreated,
            notified: 3,
            failures: vec![
                SubscriberFailure {
                    index: 0,
                    reason: "boom".to_owned(),
                },
                SubscriberFailure {
                    index: 2,
                    reason: "panicked".to_owned(),
                },
            ],
        };

        assert_eq!(
            failed.to_string(),
            "2 of 3 subscribers failed handling `hub_created`; [0] boom; [2] panicked"
        );

        let error: Error = failed.into();
        assert_eq!(error.kind(), Kind::Dispatch);
    }
}
