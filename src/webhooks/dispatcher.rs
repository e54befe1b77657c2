use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use futures::future::join_all;
use serde_json::Value;

use super::config::Config;
use super::types::{EventType, WebhookEvent, decode};
use crate::Result;
use crate::error::{DispatchFailed, NotRegistered, SubscriberFailure};

/// Error type subscribers report failures with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An async callback notified of webhook events.
///
/// Implemented for every `Fn(Arc<WebhookEvent>) -> impl Future<Output = Result<(), BoxError>>`,
/// so plain closures can be registered directly.
#[async_trait]
pub trait Subscriber: Send + Sync {
    async fn notify(&self, event: Arc<WebhookEvent>) -> std::result::Result<(), BoxError>;
}

#[async_trait]
impl<F, Fut> Subscriber for F
where
    F: Fn(Arc<WebhookEvent>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = std::result::Result<(), BoxError>> + Send + 'static,
{
    async fn notify(&self, event: Arc<WebhookEvent>) -> std::result::Result<(), BoxError> {
        self(event).await
    }
}

/// Registry of subscribers per event type, and the fan-out that notifies them.
///
/// Registration is a set keyed by the subscriber's `Arc` identity: registering the same
/// `Arc` twice for one event type is a no-op, and it takes that same `Arc` to unsubscribe.
#[derive(Default)]
pub struct Dispatcher {
    config: Config,
    subscribers: DashMap<EventType, Vec<Arc<dyn Subscriber>>>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            subscribers: DashMap::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Register `subscriber` for `event`. Returns `false` if it was already registered.
    ///
    /// A known tag wrapped in [`EventType::Unknown`] registers under its own variant.
    pub fn subscribe(&self, event: EventType, subscriber: Arc<dyn Subscriber>) -> bool {
        let mut entry = self.subscribers.entry(event.normalized()).or_default();

        if entry.value().iter().any(|existing| same(existing, &subscriber)) {
            #[cfg(feature = "tracing")]
            tracing::debug!(event = %entry.key(), "subscriber already registered");
            return false;
        }

        entry.value_mut().push(subscriber);

        #[cfg(feature = "tracing")]
        tracing::debug!(event = %entry.key(), count = entry.len(), "subscribed");

        true
    }

    /// Remove `subscriber` from `event`.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Subscription`](crate::error::Kind::Subscription) error if the
    /// subscriber is not registered for `event`.
    pub fn unsubscribe(&self, event: &EventType, subscriber: &Arc<dyn Subscriber>) -> Result<()> {
        let event = &event.clone().normalized();
        let removed = self
            .subscribers
            .get_mut(event)
            .and_then(|mut entry| {
                let index = entry
                    .value()
                    .iter()
                    .position(|existing| same(existing, subscriber))?;
                Some(entry.value_mut().remove(index))
            })
            .is_some();

        // Drop the slot once it is empty so event types do not accumulate.
        self.subscribers
            .remove_if(event, |_, subscribers| subscribers.is_empty());

        if !removed {
            return Err(NotRegistered {
                event: event.clone(),
            }
            .into());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(event = %event, "unsubscribed");

        Ok(())
    }

    /// Number of subscribers registered for `event`.
    #[must_use]
    pub fn subscriber_count(&self, event: &EventType) -> usize {
        self.subscribers
            .get(&event.clone().normalized())
            .map_or(0, |entry| entry.len())
    }

    /// Notify every subscriber of `event.event`, concurrently.
    ///
    /// Each subscriber runs on its own tokio task; all of them are awaited, and a failing
    /// subscriber never stops the others. Returns how many subscribers were notified.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Dispatch`](crate::error::Kind::Dispatch) error listing every
    /// subscriber that returned an error, panicked or timed out.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all, fields(event = %event.event, event_id = %event.event_id))
    )]
    pub async fn dispatch(&self, event: WebhookEvent) -> Result<usize> {
        // Snapshot so no map guard is held across an await.
        let subscribers: Vec<Arc<dyn Subscriber>> = self
            .subscribers
            .get(&event.event)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();

        let notified = subscribers.len();
        let timeout = self.config.callback_timeout;
        let event = Arc::new(event);

        let handles = subscribers.into_iter().map(|subscriber| {
            let event = Arc::clone(&event);
            tokio::spawn(async move {
                match timeout {
                    Some(limit) => tokio::time::timeout(limit, subscriber.notify(event))
                        .await
                        .unwrap_or_else(|_elapsed| {
                            Err(format!("timed out after {}ms", limit.as_millis()).into())
                        }),
                    None => subscriber.notify(event).await,
                }
            })
        });

        let failures: Vec<SubscriberFailure> = join_all(handles)
            .await
            .into_iter()
            .enumerate()
            .filter_map(|(index, outcome)| {
                let reason = match outcome {
                    Ok(Ok(())) => return None,
                    Ok(Err(err)) => err.to_string(),
                    Err(join) if join.is_panic() => "subscriber panicked".to_owned(),
                    Err(join) => join.to_string(),
                };
                Some(SubscriberFailure { index, reason })
            })
            .collect();

        if failures.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(notified, "dispatched webhook event");
            return Ok(notified);
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(
            notified,
            failed = failures.len(),
            "webhook subscribers failed"
        );

        Err(DispatchFailed {
            event: event.event.clone(),
            notified,
            failures,
        }
        .into())
    }

    /// [`decode`] a raw delivery and [`dispatch`](Self::dispatch) it.
    pub async fn handle(&self, raw: Value) -> Result<usize> {
        let event = decode(raw)?;
        self.dispatch(event).await
    }
}

fn same(a: &Arc<dyn Subscriber>, b: &Arc<dyn Subscriber>) -> bool {
    // Compare data pointers only; vtable pointers for one type may differ across
    // codegen units.
    std::ptr::eq(
        Arc::as_ptr(a).cast::<()>(),
        Arc::as_ptr(b).cast::<()>(),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use crate::error::Kind;

    fn hub_created() -> WebhookEvent {
        decode(json!({
            "transaction_id": "tx1",
            "event": "hub_created",
            "event_id": "e1",
            "third_party_id": "tp1",
            "app_id": "app1",
            "timestamp": "2023-04-01T10:00:00Z",
            "retry_count": 0,
            "version": 1,
            "payload": { "id": "h1", "organizer_id": "o1" }
        }))
        .unwrap()
    }

    struct Panicking;

    #[async_trait]
    impl Subscriber for Panicking {
        async fn notify(&self, _event: Arc<WebhookEvent>) -> std::result::Result<(), BoxError> {
            panic!("subscriber bug");
        }
    }

    fn counting(counter: &Arc<AtomicUsize>) -> Arc<dyn Subscriber> {
        let counter = Arc::clone(counter);
        Arc::new(move |_event: Arc<WebhookEvent>| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<(), BoxError>(())
            }
        })
    }

    #[tokio::test]
    async fn subscribe_is_idempotent() {
        let dispatcher = Dispatcher::default();
        let counter = Arc::new(AtomicUsize::new(0));
        let subscriber = counting(&counter);

        assert!(dispatcher.subscribe(EventType::HubCreated, Arc::clone(&subscriber)));
        assert!(!dispatcher.subscribe(EventType::HubCreated, Arc::clone(&subscriber)));
        assert_eq!(dispatcher.subscriber_count(&EventType::HubCreated), 1);

        assert_eq!(dispatcher.dispatch(hub_created()).await.unwrap(), 1);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unsubscribe_stops_delivery() {
        let dispatcher = Dispatcher::default();
        let counter = Arc::new(AtomicUsize::new(0));
        let subscriber = counting(&counter);

        dispatcher.subscribe(EventType::HubCreated, Arc::clone(&subscriber));
        dispatcher
            .unsubscribe(&EventType::HubCreated, &subscriber)
            .unwrap();

        assert_eq!(dispatcher.dispatch(hub_created()).await.unwrap(), 0);
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert_eq!(dispatcher.subscriber_count(&EventType::HubCreated), 0);
    }

    #[test]
    fn unsubscribe_unknown_subscriber_should_fail() {
        let dispatcher = Dispatcher::default();
        let counter = Arc::new(AtomicUsize::new(0));
        let registered = counting(&counter);
        let stranger = counting(&counter);

        dispatcher.subscribe(EventType::HubUpdated, registered);

        let error = dispatcher
            .unsubscribe(&EventType::HubUpdated, &stranger)
            .unwrap_err();
        assert_eq!(error.kind(), Kind::Subscription);

        let error = dispatcher
            .unsubscribe(&EventType::HubCreated, &stranger)
            .unwrap_err();
        let not_registered = error.downcast_ref::<NotRegistered>().unwrap();
        assert_eq!(not_registered.event, EventType::HubCreated);
    }

    #[tokio::test]
    async fn failures_are_aggregated_and_siblings_still_run() {
        let dispatcher = Dispatcher::default();
        let counter = Arc::new(AtomicUsize::new(0));

        let failing: Arc<dyn Subscriber> =
            Arc::new(|_event: Arc<WebhookEvent>| async { Err::<(), BoxError>("boom".into()) });
        let panicking: Arc<dyn Subscriber> = Arc::new(Panicking);

        dispatcher.subscribe(EventType::HubCreated, failing);
        dispatcher.subscribe(EventType::HubCreated, counting(&counter));
        dispatcher.subscribe(EventType::HubCreated, panicking);

        let error = dispatcher.dispatch(hub_created()).await.unwrap_err();
        assert_eq!(error.kind(), Kind::Dispatch);

        let failed = error.downcast_ref::<DispatchFailed>().unwrap();
        assert_eq!(failed.notified, 3);
        assert_eq!(failed.failures.len(), 2);
        assert_eq!(failed.failures[0].index, 0);
        assert_eq!(failed.failures[0].reason, "boom");
        assert_eq!(failed.failures[1].index, 2);
        assert_eq!(failed.failures[1].reason, "subscriber panicked");

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn slow_subscriber_times_out() {
        let dispatcher = Dispatcher::new(
            Config::builder()
                .callback_timeout(Duration::from_millis(20))
                .build(),
        );
        let slow: Arc<dyn Subscriber> = Arc::new(|_event: Arc<WebhookEvent>| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<(), BoxError>(())
        });

        dispatcher.subscribe(EventType::HubCreated, slow);

        let error = dispatcher.dispatch(hub_created()).await.unwrap_err();
        let failed = error.downcast_ref::<DispatchFailed>().unwrap();
        assert_eq!(failed.failures[0].reason, "timed out after 20ms");
    }

    #[tokio::test]
    async fn subscribers_run_concurrently() {
        let dispatcher = Dispatcher::default();
        let barrier = Arc::new(tokio::sync::Barrier::new(2));

        // Each subscriber only returns once the other one has reached the barrier.
        for _ in 0..2 {
            let barrier = Arc::clone(&barrier);
            let waiting: Arc<dyn Subscriber> = Arc::new(move |_event: Arc<WebhookEvent>| {
                let barrier = Arc::clone(&barrier);
                async move {
                    barrier.wait().await;
                    Ok::<(), BoxError>(())
                }
            });
            dispatcher.subscribe(EventType::HubCreated, waiting);
        }

        let notified = tokio::time::timeout(Duration::from_secs(5), dispatcher.dispatch(hub_created()))
            .await
            .expect("subscribers did not run concurrently")
            .unwrap();
        assert_eq!(notified, 2);
    }

    #[tokio::test]
    async fn known_tag_given_as_unknown_is_delivered() {
        let dispatcher = Dispatcher::default();
        let counter = Arc::new(AtomicUsize::new(0));
        let subscriber = counting(&counter);

        dispatcher.subscribe(
            EventType::Unknown("hub_created".to_owned()),
            Arc::clone(&subscriber),
        );
        assert_eq!(dispatcher.subscriber_count(&EventType::HubCreated), 1);

        assert_eq!(dispatcher.dispatch(hub_created()).await.unwrap(), 1);
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        dispatcher
            .unsubscribe(&EventType::HubCreated, &subscriber)
            .unwrap();
        assert_eq!(
            dispatcher.subscriber_count(&EventType::Unknown("hub_created".to_owned())),
            0
        );
    }

    #[tokio::test]
    async fn handle_decodes_then_dispatches() {
        let dispatcher = Dispatcher::default();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_in_subscriber = Arc::clone(&seen);

        dispatcher.subscribe(
            EventType::Unknown("team_created".to_owned()),
            Arc::new(move |event: Arc<WebhookEvent>| {
                let seen = Arc::clone(&seen_in_subscriber);
                async move {
                    assert_eq!(event.event.as_str(), "team_created");
                    seen.fetch_add(1, Ordering::SeqCst);
                    Ok::<(), BoxError>(())
                }
            }),
        );

        let notified = dispatcher
            .handle(json!({
                "transaction_id": "tx1",
                "event": "team_created",
                "event_id": "e2",
                "third_party_id": "tp1",
                "app_id": "app1",
                "timestamp": "2023-04-01T10:00:00Z",
                "retry_count": 1,
                "version": 1,
                "payload": { "team_id": "t1" }
            }))
            .await
            .unwrap();

        assert_eq!(notified, 1);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
