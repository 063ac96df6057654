//! Classification of decoded events into canonical records

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::IngestError;
use crate::types::{CanonicalRecord, DecodedEvent};

/// Turn a decoded event into a record.
///
/// Returns `Ok(None)` for tags the relay does not store, and an error when a
/// recognized tag carries a payload that is not a JSON object.
pub fn classify(
    event: DecodedEvent,
    captured_at: DateTime<Utc>,
) -> Result<Option<CanonicalRecord>, IngestError> {
    let kind = event.kind();
    let (Some(source_class), Some(tag)) = (kind.source_class(), kind.tag()) else {
        return Ok(None);
    };

    match event.payload {
        Value::Object(fields) => Ok(Some(CanonicalRecord::new(fields, source_class, captured_at))),
        other => Err(IngestError::MalformedPayload {
            tag,
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SourceClass;
    use serde_json::json;

    #[test]
    fn test_flight_plan_is_primary() {
        let now = Utc::now();
        let event = DecodedEvent::new("FLIGHT_PLAN", json!({"callsign": "ABC123", "route": "GPS"}));

        let record = classify(event, now).unwrap().unwrap();
        assert_eq!(record.source_class(), SourceClass::Primary);
        assert_eq!(record.identity(), Some("ABC123"));
        assert_eq!(record.captured_at(), now);
        assert_eq!(record.fields()["route"], "GPS");
    }

    #[test]
    fn test_event_flight_plan_is_event() {
        let event = DecodedEvent::new("EVENT_FLIGHT_PLAN", json!({"callsign": "XYZ999"}));
        let record = classify(event, Utc::now()).unwrap().unwrap();
        assert_eq!(record.source_class(), SourceClass::Event);
    }

    #[test]
    fn test_other_tags_are_ignored() {
        let event = DecodedEvent::new("ACFT_DATA", json!({"callsign": "ABC123"}));
        assert!(classify(event, Utc::now()).unwrap().is_none());

        // Unrecognized tags are ignored even when the payload is unusable
        let event = DecodedEvent::new("CHAT", Value::Null);
        assert!(classify(event, Utc::now()).unwrap().is_none());
    }

    #[test]
    fn test_non_object_payload_is_malformed() {
        for payload in [Value::Null, json!("ABC123"), json!([1, 2]), json!(3)] {
            let event = DecodedEvent::new("FLIGHT_PLAN", payload);
            let err = classify(event, Utc::now()).unwrap_err();
            assert!(matches!(err, IngestError::MalformedPayload { tag: "FLIGHT_PLAN", .. }));
        }
    }

    #[test]
    fn test_empty_object_is_accepted() {
        let event = DecodedEvent::new("FLIGHT_PLAN", json!({}));
        let record = classify(event, Utc::now()).unwrap().unwrap();
        assert_eq!(record.identity(), None);
    }
}
