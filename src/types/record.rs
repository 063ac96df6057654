//! Canonical flight plan record stored in the history

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Payload key carrying the flight identity
pub const IDENTITY_FIELD: &str = "callsign";

/// Payload keys replaced by derived values during normalization
pub const DERIVED_FIELDS: [&str; 2] = ["timestamp", "source"];

/// Which upstream channel a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SourceClass {
    /// Regular flight plan channel
    #[serde(rename = "Main")]
    Primary,
    /// Event flight plan channel
    Event,
}

impl SourceClass {
    /// Wire label used in serialized records and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceClass::Primary => "Main",
            SourceClass::Event => "Event",
        }
    }
}

impl std::fmt::Display for SourceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized flight plan.
///
/// Serializes flat: the upstream payload fields in their original order,
/// followed by `timestamp` (capture time) and `source` (`"Main"` or `"Event"`).
/// Fields are private so a record cannot change once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalRecord {
    #[serde(flatten)]
    fields: Map<String, Value>,
    #[serde(rename = "timestamp", serialize_with = "serialize_iso8601")]
    captured_at: DateTime<Utc>,
    #[serde(rename = "source")]
    source_class: SourceClass,
}

impl CanonicalRecord {
    /// Build a record from an upstream payload.
    ///
    /// Upstream keys that collide with the derived `timestamp` and `source`
    /// fields are dropped in favour of the derived values.
    pub fn new(
        mut fields: Map<String, Value>,
        source_class: SourceClass,
        captured_at: DateTime<Utc>,
    ) -> Self {
        for key in DERIVED_FIELDS {
            fields.shift_remove(key);
        }
        Self {
            fields,
            captured_at,
            source_class,
        }
    }

    /// Callsign of the flight, if the payload carried one as a string
    pub fn identity(&self) -> Option<&str> {
        self.fields.get(IDENTITY_FIELD).and_then(Value::as_str)
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn source_class(&self) -> SourceClass {
        self.source_class
    }

    /// Payload fields copied from upstream
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2025-03-01T12:00:00.000Z`
fn serialize_iso8601<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}
