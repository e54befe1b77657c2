#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod collection;
#[cfg(feature = "data")]
pub mod data;
pub mod envelope;
pub mod error;
pub(crate) mod serde_helpers;
pub mod types;
#[cfg(feature = "webhooks")]
pub mod webhooks;

#[cfg(feature = "data")]
use reqwest::Request;
#[cfg(feature = "data")]
use serde::Serialize;
#[cfg(feature = "data")]
use serde::de::DeserializeOwned;
#[cfg(feature = "data")]
use serde_json::Value;

pub use collection::{Collection, LeaderboardCollection, Page, RankedCollection, WindowedCollection};
pub use envelope::{ApiResponse, Envelope, ErrorEnvelope, Extras, materialize, materialize_value};
use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Trait for converting request types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement [`Serialize`].
/// It uses [`serde_html_form`] to serialize the struct fields into a query string.
#[cfg(feature = "data")]
pub trait ToQueryParams: Serialize {
    /// Converts the request to a URL query string.
    ///
    /// Returns an empty string if no parameters are set, otherwise returns
    /// a string starting with `?` followed by URL-encoded key-value pairs.
    fn query_params(&self) -> String {
        let params = serde_html_form::to_string(self)
            .inspect_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::error!("Unable to convert to URL-encoded string {e:?}");
                #[cfg(not(feature = "tracing"))]
                let _: &serde_html_form::ser::Error = e;
            })
            .unwrap_or_default();

        if params.is_empty() {
            String::new()
        } else {
            format!("?{params}")
        }
    }
}

#[cfg(feature = "data")]
impl<T: Serialize> ToQueryParams for T {}

/// Executes `request` and materializes the answer.
///
/// Bodies that are not JSON are kept as a string value (or `null` when empty) so that a
/// non-2xx answer still becomes an [`ErrorEnvelope`].
#[cfg(feature = "data")]
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request<Response: DeserializeOwned>(
    client: &reqwest::Client,
    request: Request,
) -> Result<ApiResponse<Response>> {
    #[cfg(feature = "tracing")]
    let (method, path) = (request.method().clone(), request.url().path().to_owned());

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    let text = response.text().await?;
    let body = parse_body(text);

    if !status_code.is_success() {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            body = %body,
            "API request failed"
        );
    }

    materialize(status_code.as_u16(), body)
}

#[cfg(feature = "data")]
fn parse_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }

    serde_json::from_str(&text).unwrap_or(Value::String(text))
}
