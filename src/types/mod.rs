//! Data types for the flight plan relay
//!
//! This module contains the upstream message envelope, the canonical record
//! kept in history, and the health summary.

mod health;
mod message;
mod record;

pub use health::HealthReport;
pub use message::{DecodedEvent, EventKind};
pub use record::{CanonicalRecord, SourceClass, DERIVED_FIELDS, IDENTITY_FIELD};
