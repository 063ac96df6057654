//! Upstream message envelope and type tags

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::SourceClass;

/// A parsed upstream message: `{"t": <type>, "d": <payload>}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedEvent {
    #[serde(rename = "t")]
    pub event_type: String,
    #[serde(rename = "d", default)]
    pub payload: Value,
}

impl DecodedEvent {
    pub fn new(event_type: impl Into<String>, payload: Value) -> Self {
        Self {
            event_type: event_type.into(),
            payload,
        }
    }

    /// Classify the type tag
    pub fn kind(&self) -> EventKind {
        EventKind::from_tag(&self.event_type)
    }
}

/// Upstream type tags the relay cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    FlightPlan,
    EventFlightPlan,
    /// Any tag the relay does not store
    Other,
}

impl EventKind {
    pub const FLIGHT_PLAN_TAG: &'static str = "FLIGHT_PLAN";
    pub const EVENT_FLIGHT_PLAN_TAG: &'static str = "EVENT_FLIGHT_PLAN";

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            Self::FLIGHT_PLAN_TAG => EventKind::FlightPlan,
            Self::EVENT_FLIGHT_PLAN_TAG => EventKind::EventFlightPlan,
            _ => EventKind::Other,
        }
    }

    /// Source class for recognized kinds, `None` for tags that are ignored
    pub fn source_class(&self) -> Option<SourceClass> {
        match self {
            EventKind::FlightPlan => Some(SourceClass::Primary),
            EventKind::EventFlightPlan => Some(SourceClass::Event),
            EventKind::Other => None,
        }
    }

    pub fn tag(&self) -> Option<&'static str> {
        match self {
            EventKind::FlightPlan => Some(Self::FLIGHT_PLAN_TAG),
            EventKind::EventFlightPlan => Some(Self::EVENT_FLIGHT_PLAN_TAG),
            EventKind::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_parsing() {
        let json = r#"{"t":"FLIGHT_PLAN","d":{"callsign":"ABC123"}}"#;
        let event: DecodedEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_type, "FLIGHT_PLAN");
        assert_eq!(event.payload["callsign"], "ABC123");
        assert_eq!(event.kind(), EventKind::FlightPlan);
    }

    #[test]
    fn test_missing_payload_defaults_to_null() {
        let event: DecodedEvent = serde_json::from_str(r#"{"t":"EVENT_FLIGHT_PLAN"}"#).unwrap();
        assert!(event.payload.is_null());
    }

    #[test]
    fn test_tag_mapping() {
        assert_eq!(EventKind::from_tag("FLIGHT_PLAN").source_class(), Some(SourceClass::Primary));
        assert_eq!(
            EventKind::from_tag("EVENT_FLIGHT_PLAN").source_class(),
            Some(SourceClass::Event)
        );
        assert_eq!(EventKind::from_tag("ACFT_DATA").source_class(), None);
        // Tags are case sensitive
        assert_eq!(EventKind::from_tag("flight_plan"), EventKind::Other);
    }
}
