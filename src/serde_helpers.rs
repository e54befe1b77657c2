//! Materialization of raw JSON into typed resources.
//!
//! Deserialization runs through `serde_path_to_error` so that a failure anywhere in a
//! nested resource is reported with the full path from the resource root. When the
//! `tracing` feature is enabled, failures are also logged together with the offending
//! value.

use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::Segment;

use crate::Result;
use crate::error::{Error, SchemaErrorKind};

/// Materialize `value` into `T`, failing with a [`Kind::Schema`](crate::error::Kind::Schema)
/// error that names the field path on any mismatch.
///
/// Nothing is partially populated: either the whole tree materializes or nothing does.
pub(crate) fn deserialize_with_path<T: DeserializeOwned>(value: Value) -> Result<T> {
    #[cfg(feature = "tracing")]
    tracing::trace!(type_name = %short_type_name::<T>(), "materializing JSON");

    #[cfg(feature = "tracing")]
    let original = value.clone();

    serde_path_to_error::deserialize(value).map_err(|err| {
        let message = err.inner().to_string();
        let kind = classify(&message);
        let mut path = format_path(err.path());

        if kind == SchemaErrorKind::MissingField {
            if let Some(field) = quoted(&message) {
                if !path.is_empty() {
                    path.push('.');
                }
                path.push_str(field);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::error!(
            type_name = %short_type_name::<T>(),
            path = %path,
            value = %format_value(lookup_value(&original, &path)),
            error = %message,
            "materialization failed"
        );

        Error::schema(short_type_name::<T>(), path, kind, message)
    })
}

/// Prefix the path of a schema error with `prefix`, leaving other errors untouched.
///
/// Used where a resource is materialized as one part of a larger document, e.g. a webhook
/// payload inside its delivery envelope.
pub(crate) fn nest_path(error: Error, prefix: &str) -> Error {
    match error.downcast_ref::<crate::error::Schema>() {
        Some(schema) => {
            let path = if schema.path.is_empty() {
                prefix.to_owned()
            } else if schema.path.starts_with('[') {
                format!("{prefix}{}", schema.path)
            } else {
                format!("{prefix}.{}", schema.path)
            };
            Error::schema(schema.resource, path, schema.kind, schema.message.clone())
        }
        None => error,
    }
}

fn classify(message: &str) -> SchemaErrorKind {
    if message.starts_with("missing field") {
        SchemaErrorKind::MissingField
    } else if message.starts_with("unknown variant") {
        SchemaErrorKind::InvalidEnumValue
    } else {
        SchemaErrorKind::TypeMismatch
    }
}

/// First back-quoted token of a serde error message, e.g. `name` in ``missing field `name` ``.
fn quoted(message: &str) -> Option<&str> {
    let start = message.find('`')? + 1;
    let len = message[start..].find('`')?;
    Some(&message[start..start + len])
}

/// Render a path as `a.b[2].c`, with the empty path rendered as the empty string.
fn format_path(path: &serde_path_to_error::Path) -> String {
    let mut rendered = String::new();

    for segment in path.iter() {
        match segment {
            Segment::Seq { index } => {
                rendered.push('[');
                rendered.push_str(&index.to_string());
                rendered.push(']');
            }
            Segment::Map { key } => {
                if !rendered.is_empty() {
                    rendered.push('.');
                }
                rendered.push_str(key);
            }
            Segment::Enum { .. } => {}
            Segment::Unknown => {
                if !rendered.is_empty() {
                    rendered.push('.');
                }
                rendered.push('?');
            }
        }
    }

    rendered
}

/// Outermost type name without module path or generic parameters, e.g. `Collection`
/// for `faceit_client_sdk::collection::Collection<faceit_client_sdk::types::response::Player>`.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let outer = full.split('<').next().unwrap_or(full);
    outer.rsplit("::").next().unwrap_or(outer)
}

/// Look up a value in a JSON structure by a path in `a.b[2].c` form.
///
/// Returns `None` if the path doesn't exist or traverses a non-container value.
#[cfg(feature = "tracing")]
fn lookup_value<'value>(value: &'value Value, path: &str) -> Option<&'value Value> {
    let mut current = value;

    for segment in parse_path_segments(path) {
        if segment.is_empty() || segment == "?" {
            continue;
        }

        match current {
            Value::Object(map) => {
                current = map.get(&segment)?;
            }
            Value::Array(arr) => {
                let index: usize = segment.parse().ok()?;
                current = arr.get(index)?;
            }
            _ => return None,
        }
    }

    Some(current)
}

/// Split `data[15].game_id` into `["data", "15", "game_id"]`.
#[cfg(feature = "tracing")]
fn parse_path_segments(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    let mut chars = path.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '.' => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
            '[' => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
                for inner in chars.by_ref() {
                    if inner == ']' {
                        break;
                    }
                    current.push(inner);
                }
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

#[cfg(feature = "tracing")]
fn format_value(value: Option<&Value>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "<absent>".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::error::{Kind, Schema};
    use crate::types::Region;

    #[derive(Debug, Deserialize)]
    struct Inner {
        platform: String,
        region: Option<Region>,
    }

    #[derive(Debug, Deserialize)]
    struct Outer {
        name: String,
        #[serde(default)]
        streams: Vec<Inner>,
        stream: Option<Inner>,
    }

    fn schema_of(error: &Error) -> &Schema {
        assert_eq!(error.kind(), Kind::Schema);
        error.downcast_ref::<Schema>().unwrap()
    }

    #[test]
    fn deserialize_with_path_should_succeed() {
        let outer: Outer = deserialize_with_path(json!({
            "name": "cup",
            "stream": { "platform": "twitch", "region": "EU" }
        }))
        .unwrap();

        assert_eq!(outer.name, "cup");
        assert!(outer.streams.is_empty());
        assert_eq!(outer.stream.unwrap().region, Some(Region::Eu));
    }

    #[test]
    fn type_mismatch_reports_nested_path() {
        let error = deserialize_with_path::<Outer>(json!({
            "name": "cup",
            "stream": { "platform": 3 }
        }))
        .unwrap_err();

        let schema = schema_of(&error);
        assert_eq!(schema.kind, SchemaErrorKind::TypeMismatch);
        assert_eq!(schema.path, "stream.platform");
        assert_eq!(schema.resource, "Outer");
    }

    #[test]
    fn missing_field_appends_field_name() {
        let error = deserialize_with_path::<Outer>(json!({
            "name": "cup",
            "streams": [{ "platform": "twitch" }, { "region": "EU" }]
        }))
        .unwrap_err();

        let schema = schema_of(&error);
        assert_eq!(schema.kind, SchemaErrorKind::MissingField);
        assert_eq!(schema.path, "streams[1].platform");
    }

    #[test]
    fn missing_top_level_field() {
        let error = deserialize_with_path::<Outer>(json!({})).unwrap_err();

        let schema = schema_of(&error);
        assert_eq!(schema.kind, SchemaErrorKind::MissingField);
        assert_eq!(schema.path, "name");
    }

    #[test]
    fn unknown_enum_value_is_invalid_enum_value() {
        let error = deserialize_with_path::<Outer>(json!({
            "name": "cup",
            "stream": { "platform": "twitch", "region": "MARS" }
        }))
        .unwrap_err();

        let schema = schema_of(&error);
        assert_eq!(schema.kind, SchemaErrorKind::InvalidEnumValue);
        assert_eq!(schema.path, "stream.region");
    }

    #[test]
    fn nest_path_prefixes_schema_errors() {
        let error = deserialize_with_path::<Outer>(json!({ "name": 1 })).unwrap_err();
        let nested = nest_path(error, "payload");

        assert_eq!(schema_of(&nested).path, "payload.name");
    }

    #[test]
    fn quoted_extracts_first_token() {
        assert_eq!(quoted("missing field `leaderboard`"), Some("leaderboard"));
        assert_eq!(quoted("no quotes"), None);
    }

    #[cfg(feature = "tracing")]
    mod lookup {
        use serde_json::json;

        use super::super::{format_value, lookup_value, parse_path_segments};

        #[test]
        fn parse_path_segments_handles_brackets() {
            assert_eq!(
                parse_path_segments("items[0].stream.platform"),
                vec!["items", "0", "stream", "platform"]
            );
            assert!(parse_path_segments("").is_empty());
        }

        #[test]
        fn lookup_value_walks_arrays_and_objects() {
            let json = json!({ "items": [{ "game": "csgo" }, { "game": "nope" }] });

            assert_eq!(lookup_value(&json, "items[1].game"), Some(&json!("nope")));
            assert_eq!(lookup_value(&json, ""), Some(&json));
            assert_eq!(lookup_value(&json, "items[5].game"), None);
            assert_eq!(format_value(None), "<absent>");
        }

        /// A failure is logged with the type, the path and the raw value found there.
        #[test]
        fn failure_is_logged_with_offending_value() {
            use std::sync::{Arc, Mutex};

            use tracing_subscriber::layer::SubscriberExt as _;

            use super::{Outer, deserialize_with_path};

            let lines: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
            let sink = Arc::clone(&lines);

            let layer = tracing_subscriber::fmt::layer()
                .with_writer(move || {
                    struct CaptureWriter(Arc<Mutex<Vec<String>>>);
                    impl std::io::Write for CaptureWriter {
                        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                            if let Ok(s) = std::str::from_utf8(buf) {
                                self.0.lock().expect("lock").push(s.to_owned());
                            }
                            Ok(buf.len())
                        }
                        fn flush(&mut self) -> std::io::Result<()> {
                            Ok(())
                        }
                    }
                    CaptureWriter(Arc::clone(&sink))
                })
                .with_ansi(false);

            let subscriber = tracing_subscriber::registry().with(layer);

            tracing::subscriber::with_default(subscriber, || {
                let json = json!({
                    "name": "cup",
                    "stream": { "platform": "twitch", "region": "MARS" }
                });

                deserialize_with_path::<Outer>(json).unwrap_err();
            });

            let output = lines.lock().expect("lock").join("");
            assert!(output.contains("materialization failed"), "{output}");
            assert!(output.contains("stream.region"), "{output}");
            assert!(output.contains("MARS"), "{output}");
            assert!(output.contains("Outer"), "{output}");
        }
    }
}
