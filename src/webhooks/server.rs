//! HTTP endpoint receiving FACEIT webhook deliveries.
//!
//! **Feature flag:** `server`

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use super::Dispatcher;
use crate::error::Kind;

/// Path FACEIT delivers webhooks to.
pub const WEBHOOK_PATH: &str = "/webhook";

/// A router serving `POST /webhook`, feeding every delivery into `dispatcher`.
///
/// Other methods are answered with `405`, bodies that are not JSON are rejected by the
/// `Json` extractor. A delivery without a string `event` field, or one that does not
/// decode, gets `400`; subscriber failures get `500`.
pub fn router(dispatcher: Arc<Dispatcher>) -> Router {
    Router::new()
        .route(WEBHOOK_PATH, post(receive))
        .with_state(dispatcher)
}

async fn receive(State(dispatcher): State<Arc<Dispatcher>>, Json(body): Json<Value>) -> Response {
    if !body.get("event").is_some_and(Value::is_string) {
        return error_response(StatusCode::BAD_REQUEST, "missing `event` field");
    }

    match dispatcher.handle(body).await {
        Ok(notified) => (StatusCode::OK, Json(json!({ "notified": notified }))).into_response(),
        Err(e) if e.kind() == Kind::Schema => {
            error_response(StatusCode::BAD_REQUEST, &e.to_string())
        }
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::error!(error = %e, "webhook delivery failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
