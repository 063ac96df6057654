//! Flight Plan Relay
//!
//! Connects to a live flight plan WebSocket feed, keeps the most recent
//! flight plans in memory, and serves them over a small polling HTTP API.
//!
//! # Features
//!
//! - **Upstream connector**: one outbound WebSocket, empty `Origin` handshake,
//!   optional reconnect with exponential backoff
//! - **Ingestion**: decodes `{"t", "d"}` envelopes and keeps `FLIGHT_PLAN` and
//!   `EVENT_FLIGHT_PLAN` events; everything else is ignored or logged
//! - **Bounded history**: newest-first, 20 records by default, no persistence
//! - **HTTP API**: `GET /flight-plans`, `GET /health`, optional static files,
//!   CORS open to any origin
//!
//! # Modules
//!
//! - `types`: Upstream envelope, canonical record, health report
//! - `ingest`: Decoding and classification of upstream messages
//! - `history`: Bounded newest-first record store
//! - `connector`: Upstream WebSocket connection and its lifecycle state
//! - `context`: Application context shared by connector and handlers
//! - `api`: Axum router and REST handlers
//! - `config`: Command line / environment configuration
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use flight_plan_relay::{create_router, AppContext, ConnectorConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let ctx = Arc::new(AppContext::default());
//!     ctx.connector(ConnectorConfig::default()).spawn();
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, create_router(ctx, None)).await.unwrap();
//! }
//! ```

pub mod api;
pub mod config;
pub mod connector;
pub mod context;
pub mod error;
pub mod history;
pub mod ingest;
pub mod shutdown;
pub mod types;

// Re-export commonly used items at crate root
pub use api::{create_router, serve};
pub use config::Config;
pub use connector::{ConnectorConfig, ConnectorState, ConnectorStatus, UpstreamConnector};
pub use context::AppContext;
pub use error::{ConfigError, ConnectorError, IngestError, RelayError, RelayResult};
pub use history::HistoryStore;
pub use ingest::{IngestOutcome, Ingestor};
pub use types::{CanonicalRecord, DecodedEvent, EventKind, HealthReport, SourceClass};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
