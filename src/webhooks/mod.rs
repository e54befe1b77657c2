//! FACEIT webhook deliveries: decoding and fan-out to subscribers.
//!
//! **Feature flag:** `webhooks` (`server` adds the HTTP endpoint)
//!
//! A delivery is decoded by its `event` tag into a [`WebhookEvent`] carrying a typed
//! [`Payload`]. Tags this crate does not know still decode, to [`Payload::Unknown`].
//! A [`Dispatcher`] keeps the subscribers of each [`EventType`] and notifies all of them
//! concurrently.
//!
//! # Example
//!
//! ```rust, no_run
//! use std::sync::Arc;
//!
//! use faceit_client_sdk::webhooks::{BoxError, Dispatcher, EventType, Subscriber, WebhookEvent};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let dispatcher = Dispatcher::default();
//!
//!     let on_hub_created: Arc<dyn Subscriber> = Arc::new(|event: Arc<WebhookEvent>| async move {
//!         println!("hub created: {:?}", event.payload.id());
//!         Ok::<(), BoxError>(())
//!     });
//!     dispatcher.subscribe(EventType::HubCreated, on_hub_created);
//!
//!     let raw = serde_json::json!({
//!         "transaction_id": "t-1",
//!         "event": "hub_created",
//!         "event_id": "e-1",
//!         "third_party_id": "tp-1",
//!         "app_id": "app-1",
//!         "timestamp": "2024-05-01T10:00:00Z",
//!         "retry_count": 0,
//!         "version": 1,
//!         "payload": { "id": "h1", "organizer_id": "o-1" }
//!     });
//!     let notified = dispatcher.handle(raw).await?;
//!     println!("notified {notified} subscribers");
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dispatcher;
#[cfg(feature = "server")]
pub mod server;
pub mod types;

pub use config::Config;
pub use dispatcher::{BoxError, Dispatcher, Subscriber};
pub use types::{
    EventType, HubCreated, HubRole, HubRoleDeleted, HubUpdated, Payload, Role, WebhookEvent,
    decode,
};
