#![cfg(feature = "server")]
#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests"
)]

use std::net::SocketAddr;
use std::sync::Arc;

use faceit_client_sdk::webhooks::Dispatcher;
use faceit_client_sdk::webhooks::server::{WEBHOOK_PATH, router};
use tokio::net::TcpListener;

async fn serve(dispatcher: Arc<Dispatcher>) -> anyhow::Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        axum::serve(listener, router(dispatcher)).await.unwrap();
    });

    Ok(addr)
}

fn url(addr: SocketAddr) -> String {
    format!("http://{addr}{WEBHOOK_PATH}")
}

mod delivery {
    use std::sync::Arc;

    use faceit_client_sdk::webhooks::{
        BoxError, Dispatcher, EventType, Payload, Subscriber, WebhookEvent,
    };
    use reqwest::StatusCode;
    use serde_json::{Value, json};
    use tokio::sync::mpsc;

    use super::{serve, url};

    fn hub_created() -> Value {
        json!({
            "transaction_id": "t-1",
            "event": "hub_created",
            "event_id": "e-1",
            "third_party_id": "tp-1",
            "app_id": "app-1",
            "timestamp": "2024-05-01T10:00:00Z",
            "retry_count": 0,
            "version": 1,
            "payload": {
                "id": "h1",
                "organizer_id": "o-1",
                "name": "N",
                "game": "cs2",
                "region": "EU"
            }
        })
    }

    #[tokio::test]
    async fn post_should_notify_subscriber() -> anyhow::Result<()> {
        let dispatcher = Arc::new(Dispatcher::default());
        let (tx, mut rx) = mpsc::unbounded_channel();

        let subscriber: Arc<dyn Subscriber> = Arc::new(move |event: Arc<WebhookEvent>| {
            let tx = tx.clone();
            async move {
                tx.send(event)?;
                Ok::<(), BoxError>(())
            }
        });
        dispatcher.subscribe(EventType::HubCreated, subscriber);

        let addr = serve(Arc::clone(&dispatcher)).await?;
        let response = reqwest::Client::new()
            .post(url(addr))
            .json(&hub_created())
            .send()
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.json::<Value>().await?, json!({ "notified": 1 }));

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event, EventType::HubCreated);
        assert_eq!(event.payload.id(), Some("h1"));
        assert!(matches!(event.payload, Payload::HubCreated(_)));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_event_should_be_accepted() -> anyhow::Result<()> {
        let dispatcher = Arc::new(Dispatcher::default());
        let addr = serve(dispatcher).await?;

        let mut body = hub_created();
        body["event"] = json!("something_new");

        let response = reqwest::Client::new()
            .post(url(addr))
            .json(&body)
            .send()
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.json::<Value>().await?, json!({ "notified": 0 }));

        Ok(())
    }

    #[tokio::test]
    async fn failing_subscriber_should_be_server_error() -> anyhow::Result<()> {
        let dispatcher = Arc::new(Dispatcher::default());

        let subscriber: Arc<dyn Subscriber> = Arc::new(|_event: Arc<WebhookEvent>| async {
            Err::<(), BoxError>("downstream unavailable".into())
        });
        dispatcher.subscribe(EventType::HubCreated, subscriber);

        let addr = serve(dispatcher).await?;
        let response = reqwest::Client::new()
            .post(url(addr))
            .json(&hub_created())
            .send()
            .await?;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<Value>().await?;
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("downstream unavailable"),
            "{body}"
        );

        Ok(())
    }
}

mod rejection {
    use std::sync::Arc;

    use faceit_client_sdk::webhooks::Dispatcher;
    use reqwest::StatusCode;
    use serde_json::json;

    use super::{serve, url};

    #[tokio::test]
    async fn get_should_be_method_not_allowed() -> anyhow::Result<()> {
        let addr = serve(Arc::new(Dispatcher::default())).await?;

        let response = reqwest::get(url(addr)).await?;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        Ok(())
    }

    #[tokio::test]
    async fn missing_event_should_be_bad_request() -> anyhow::Result<()> {
        let addr = serve(Arc::new(Dispatcher::default())).await?;

        let response = reqwest::Client::new()
            .post(url(addr))
            .json(&json!({ "payload": { "id": "h1" } }))
            .send()
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    async fn undecodable_payload_should_be_bad_request() -> anyhow::Result<()> {
        let addr = serve(Arc::new(Dispatcher::default())).await?;

        let response = reqwest::Client::new()
            .post(url(addr))
            .json(&json!({
                "transaction_id": "t-1",
                "event": "hub_created",
                "event_id": "e-1",
                "third_party_id": "tp-1",
                "app_id": "app-1",
                "timestamp": "2024-05-01T10:00:00Z",
                "retry_count": 0,
                "version": 1,
                "payload": { "id": "h1" }
            }))
            .send()
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    async fn non_json_body_should_be_rejected() -> anyhow::Result<()> {
        let addr = serve(Arc::new(Dispatcher::default())).await?;

        let response = reqwest::Client::new()
            .post(url(addr))
            .header("content-type", "text/plain")
            .body("hello")
            .send()
            .await?;

        assert!(response.status().is_client_error());

        Ok(())
    }
}
