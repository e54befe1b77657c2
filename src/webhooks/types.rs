use std::fmt;

use bon::Builder;
use phf::phf_map;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DefaultOnNull, serde_as};

use crate::Result;
use crate::envelope::{Envelope, Extras};
use crate::serde_helpers::{deserialize_with_path, nest_path};

/// Tag of a webhook delivery, read from its `event` field.
///
/// Tags this crate does not know decode to [`EventType::Unknown`] instead of failing, since
/// FACEIT may start sending new event types at any time.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    HubCreated,
    HubUpdated,
    HubRoleUpdated,
    HubRoleCreated,
    HubRoleDeleted,
    /// A tag without a dedicated variant. Build event types with [`EventType::from_tag`]
    /// rather than wrapping a known tag in `Unknown`; the registry normalizes both forms.
    #[serde(untagged)]
    Unknown(String),
}

impl EventType {
    /// The event type for a wire tag. Known tags map to their variant.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "hub_created" => Self::HubCreated,
            "hub_updated" => Self::HubUpdated,
            "hub_role_updated" => Self::HubRoleUpdated,
            "hub_role_created" => Self::HubRoleCreated,
            "hub_role_deleted" => Self::HubRoleDeleted,
            other => Self::Unknown(other.to_owned()),
        }
    }

    /// `Unknown` holding a known tag becomes that tag's variant.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Self::Unknown(tag) => Self::from_tag(&tag),
            known => known,
        }
    }

    /// The wire tag, e.g. `hub_created`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::HubCreated => "hub_created",
            Self::HubUpdated => "hub_updated",
            Self::HubRoleUpdated => "hub_role_updated",
            Self::HubRoleCreated => "hub_role_created",
            Self::HubRoleDeleted => "hub_role_deleted",
            Self::Unknown(tag) => tag,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One webhook delivery.
///
/// Every envelope field is required. `P` is the payload shape; [`decode`] produces
/// `WebhookEvent<Payload>`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent<P = Payload> {
    pub transaction_id: String,
    pub event: EventType,
    pub event_id: String,
    pub third_party_id: String,
    pub app_id: String,
    pub timestamp: String,
    pub retry_count: i64,
    pub version: i64,
    pub payload: P,
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl<P> WebhookEvent<P> {
    fn with_payload<Q>(self, payload: Q) -> WebhookEvent<Q> {
        WebhookEvent {
            transaction_id: self.transaction_id,
            event: self.event,
            event_id: self.event_id,
            third_party_id: self.third_party_id,
            app_id: self.app_id,
            timestamp: self.timestamp,
            retry_count: self.retry_count,
            version: self.version,
            payload,
            envelope: self.envelope,
        }
    }
}

/// Payload of a delivery, selected by its [`EventType`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    HubCreated(HubCreated),
    HubUpdated(HubUpdated),
    HubRoleUpdated(HubRole),
    HubRoleCreated(HubRole),
    HubRoleDeleted(HubRoleDeleted),
    /// Payload of an unrecognized event type, kept as received. Not validated: any JSON
    /// value, including `null`, is accepted.
    Unknown(Value),
}

impl Payload {
    /// Hub the event refers to. `None` for [`Payload::Unknown`].
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::HubCreated(payload) => Some(payload.id.as_str()),
            Self::HubUpdated(payload) => Some(payload.id.as_str()),
            Self::HubRoleUpdated(payload) | Self::HubRoleCreated(payload) => Some(payload.id.as_str()),
            Self::HubRoleDeleted(payload) => Some(payload.id.as_str()),
            Self::Unknown(_) => None,
        }
    }
}

/// A role as listed in hub webhook payloads.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct Role {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub permissions: Vec<String>,
    pub ranking: Option<i64>,
    pub color: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub visible_on_chat: Option<bool>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct HubCreated {
    #[builder(into)]
    pub id: String,
    #[builder(into)]
    pub organizer_id: String,
    pub name: Option<String>,
    pub owner_id: Option<String>,
    pub game: Option<String>,
    pub region: Option<String>,
    pub published: Option<bool>,
    pub check_game: Option<bool>,
    pub check_region: Option<bool>,
    pub slots: Option<i64>,
    pub join_permissions: Option<String>,
    pub min_skill_level: Option<i64>,
    pub max_skill_level: Option<i64>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub owner_roles: Vec<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub app_config: Extras,
    pub created_at: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct HubUpdated {
    #[builder(into)]
    pub id: String,
    #[builder(into)]
    pub organizer_id: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub roles: Vec<Role>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

/// Payload of `hub_role_created` and `hub_role_updated`.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct HubRole {
    #[builder(into)]
    pub id: String,
    #[builder(into)]
    pub organizer_id: String,
    pub role_id: Option<String>,
    pub role_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub ranking: Option<i64>,
    pub color: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[builder(default)]
    pub permissions: Vec<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct HubRoleDeleted {
    #[builder(into)]
    pub id: String,
    #[builder(into)]
    pub organizer_id: String,
    pub role_id: Option<String>,
    pub role_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(flatten)]
    #[builder(default)]
    pub envelope: Envelope,
}

type PayloadDecoder = fn(Value) -> Result<Payload>;

static DECODERS: phf::Map<&'static str, PayloadDecoder> = phf_map! {
    "hub_created" => decode_hub_created as PayloadDecoder,
    "hub_updated" => decode_hub_updated as PayloadDecoder,
    "hub_role_updated" => decode_hub_role_updated as PayloadDecoder,
    "hub_role_created" => decode_hub_role_created as PayloadDecoder,
    "hub_role_deleted" => decode_hub_role_deleted as PayloadDecoder,
};

fn decode_hub_created(value: Value) -> Result<Payload> {
    deserialize_with_path(value).map(Payload::HubCreated)
}

fn decode_hub_updated(value: Value) -> Result<Payload> {
    deserialize_with_path(value).map(Payload::HubUpdated)
}

fn decode_hub_role_updated(value: Value) -> Result<Payload> {
    deserialize_with_path(value).map(Payload::HubRoleUpdated)
}

fn decode_hub_role_created(value: Value) -> Result<Payload> {
    deserialize_with_path(value).map(Payload::HubRoleCreated)
}

fn decode_hub_role_deleted(value: Value) -> Result<Payload> {
    deserialize_with_path(value).map(Payload::HubRoleDeleted)
}

#[expect(
    clippy::unnecessary_wraps,
    reason = "Shares the decoder signature of the table entries"
)]
fn decode_unknown(value: Value) -> Result<Payload> {
    Ok(Payload::Unknown(value))
}

/// Decode a raw webhook delivery.
///
/// The envelope is materialized first, then the payload against the shape registered for
/// its tag. Unknown tags yield [`Payload::Unknown`] with the raw payload as is. Payload
/// failures are reported with a `payload.` path prefix.
pub fn decode(raw: Value) -> Result<WebhookEvent> {
    let mut event: WebhookEvent<Value> = deserialize_with_path(raw)?;

    let decoder = DECODERS
        .get(event.event.as_str())
        .copied()
        .unwrap_or(decode_unknown as PayloadDecoder);

    let payload = decoder(std::mem::take(&mut event.payload))
        .map_err(|err| nest_path(err, "payload"))?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        event = %event.event,
        event_id = %event.event_id,
        known = DECODERS.contains_key(event.event.as_str()),
        "decoded webhook event"
    );

    Ok(event.with_payload(payload))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::{Kind, Schema, SchemaErrorKind};

    fn delivery(event: &str, payload: Value) -> Value {
        json!({
            "transaction_id": "tx1",
            "event": event,
            "event_id": "e1",
            "third_party_id": "tp1",
            "app_id": "app1",
            "timestamp": "2023-04-01T10:00:00Z",
            "retry_count": 0,
            "version": 1,
            "payload": payload
        })
    }

    #[test]
    fn hub_created_should_succeed() {
        let event = decode(delivery(
            "hub_created",
            json!({
                "id": "h1",
                "name": "N",
                "organizer_id": "o1",
                "roles": [{ "id": "r1", "name": "Admin", "type": "custom", "permissions": ["kick"] }],
                "app_config": { "theme": "dark" }
            }),
        ))
        .unwrap();

        assert_eq!(event.event, EventType::HubCreated);
        assert_eq!(event.payload.id(), Some("h1"));

        let Payload::HubCreated(hub) = &event.payload else {
            panic!("expected hub_created payload, got {:?}", event.payload);
        };
        assert_eq!(hub.name.as_deref(), Some("N"));
        assert_eq!(hub.roles[0].kind.as_deref(), Some("custom"));
        assert_eq!(hub.roles[0].permissions, vec!["kick"]);
        assert!(hub.owner_roles.is_empty());
    }

    #[test]
    fn role_events_share_shape() {
        let payload = json!({
            "id": "h1",
            "organizer_id": "o1",
            "role_id": "r1",
            "role_name": "Mod",
            "type": "custom",
            "ranking": 2
        });

        let created = decode(delivery("hub_role_created", payload.clone())).unwrap();
        let updated = decode(delivery("hub_role_updated", payload)).unwrap();

        assert!(matches!(&created.payload, Payload::HubRoleCreated(role) if role.ranking == Some(2)));
        assert!(matches!(
            &updated.payload,
            Payload::HubRoleUpdated(role) if role.role_name.as_deref() == Some("Mod")
        ));
    }

    #[test]
    fn unknown_tag_keeps_raw_payload() {
        let event = decode(delivery(
            "something_new",
            json!({ "id": "x", "nested": { "a": [1, 2] } }),
        ))
        .unwrap();

        assert_eq!(event.event, EventType::Unknown("something_new".to_owned()));
        assert_eq!(event.event.to_string(), "something_new");

        let Payload::Unknown(raw) = &event.payload else {
            panic!("expected unknown payload, got {:?}", event.payload);
        };
        assert_eq!(raw.get("id"), Some(&json!("x")));
        assert_eq!(raw.get("nested"), Some(&json!({ "a": [1, 2] })));
        assert!(event.payload.id().is_none());
    }

    #[test]
    fn unknown_tag_accepts_any_payload() {
        for payload in [json!(null), json!([1, 2]), json!("text"), json!(7)] {
            let event = decode(delivery("new_thing", payload.clone())).unwrap();

            assert_eq!(event.payload, Payload::Unknown(payload));
        }
    }

    #[test]
    fn payload_failure_is_prefixed() {
        let error = decode(delivery("hub_role_deleted", json!({ "id": "h1" }))).unwrap_err();

        assert_eq!(error.kind(), Kind::Schema);
        let schema = error.downcast_ref::<Schema>().unwrap();
        assert_eq!(schema.kind, SchemaErrorKind::MissingField);
        assert_eq!(schema.path, "payload.organizer_id");
    }

    #[test]
    fn missing_envelope_field_should_fail() {
        let mut raw = delivery("hub_updated", json!({ "id": "h1", "organizer_id": "o1" }));
        raw.as_object_mut().unwrap().remove("event_id");

        let error = decode(raw).unwrap_err();
        let schema = error.downcast_ref::<Schema>().unwrap();
        assert_eq!(schema.path, "event_id");
        assert_eq!(schema.resource, "WebhookEvent");
    }

    #[test]
    fn known_tag_in_unknown_is_normalized() {
        assert_eq!(EventType::from_tag("hub_updated"), EventType::HubUpdated);
        assert_eq!(
            EventType::Unknown("hub_created".to_owned()).normalized(),
            EventType::HubCreated
        );
        assert_eq!(
            EventType::Unknown("team_created".to_owned()).normalized(),
            EventType::Unknown("team_created".to_owned())
        );
    }

    #[test]
    fn event_type_round_trips() {
        let known: EventType = serde_json::from_value(json!("hub_role_deleted")).unwrap();
        assert_eq!(known, EventType::HubRoleDeleted);
        assert_eq!(serde_json::to_value(&known).unwrap(), json!("hub_role_deleted"));

        let unknown: EventType = serde_json::from_value(json!("team_created")).unwrap();
        assert_eq!(serde_json::to_value(&unknown).unwrap(), json!("team_created"));
    }

    #[test]
    fn payload_serializes_without_tag() {
        let payload = Payload::HubRoleDeleted(
            HubRoleDeleted::builder().id("h1").organizer_id("o1").build(),
        );

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "id": "h1",
                "organizer_id": "o1",
                "role_id": null,
                "role_name": null,
                "type": null
            })
        );
    }
}
