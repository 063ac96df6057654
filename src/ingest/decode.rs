//! Raw upstream message to [`DecodedEvent`]

use serde_json::Value;

use crate::error::IngestError;
use crate::types::DecodedEvent;

/// Parse a text message into an envelope.
///
/// The message must be a JSON object with a string `t`; `d` may be absent.
pub fn decode(raw: &str) -> Result<DecodedEvent, IngestError> {
    let value: Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(IngestError::NotAnObject);
    }
    Ok(serde_json::from_value(value)?)
}

/// Parse a binary message holding UTF-8 JSON
pub fn decode_bytes(raw: &[u8]) -> Result<DecodedEvent, IngestError> {
    let text = std::str::from_utf8(raw).map_err(|_| IngestError::NotUtf8)?;
    decode(text)
}
