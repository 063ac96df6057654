//! Ingestion pipeline: raw upstream message → decoded event → canonical record → history
//!
//! [`Ingestor::handle_text`] and [`Ingestor::handle_bytes`] are what the
//! connector's read loop calls. They never fail: decode and classification
//! faults are logged and the message is dropped.

mod decode;
mod normalize;

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, trace, warn};

use crate::error::IngestError;
use crate::history::HistoryStore;
use crate::types::{DecodedEvent, SourceClass};

pub use decode::{decode, decode_bytes};
pub use normalize::classify;

/// What happened to one upstream message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// A record was inserted into history
    Stored {
        source: SourceClass,
        callsign: Option<String>,
    },
    /// The type tag is not one the relay keeps
    Ignored { event_type: String },
    /// The message was dropped because of a decode or classification fault
    Rejected,
}

/// Feeds upstream messages into a [`HistoryStore`]
#[derive(Clone)]
pub struct Ingestor {
    history: Arc<HistoryStore>,
}

impl Ingestor {
    pub fn new(history: Arc<HistoryStore>) -> Self {
        Self { history }
    }

    /// Handle a text frame
    pub fn handle_text(&self, raw: &str) -> IngestOutcome {
        self.settle(decode(raw).and_then(|event| self.ingest(event)))
    }

    /// Handle a binary frame carrying UTF-8 JSON
    pub fn handle_bytes(&self, raw: &[u8]) -> IngestOutcome {
        self.settle(decode_bytes(raw).and_then(|event| self.ingest(event)))
    }

    /// Classify an already decoded event and store it if recognized
    pub fn ingest(&self, event: DecodedEvent) -> Result<IngestOutcome, IngestError> {
        let event_type = event.event_type.clone();
        let Some(record) = classify(event, Utc::now())? else {
            trace!(event_type = %event_type, "ignoring upstream event");
            return Ok(IngestOutcome::Ignored { event_type });
        };

        let source = record.source_class();
        let callsign = record.identity().map(str::to_string);
        info!(
            source = %source,
            callsign = callsign.as_deref().unwrap_or("<none>"),
            "received flight plan"
        );

        self.history.insert(record);
        Ok(IngestOutcome::Stored { source, callsign })
    }

    fn settle(&self, result: Result<IngestOutcome, IngestError>) -> IngestOutcome {
        match result {
            Ok(outcome) => outcome,
            Err(err) if err.is_decode_fault() => {
                warn!(error = %err, "discarding undecodable upstream message");
                IngestOutcome::Rejected
            }
            Err(err) => {
                warn!(error = %err, "discarding malformed flight plan");
                IngestOutcome::Rejected
            }
        }
    }
}
