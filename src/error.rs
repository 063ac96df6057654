//! Error types for the relay
//!
//! Ingestion and connector errors never leave the ingestion task: they are
//! logged where they happen. Only configuration and startup failures reach
//! the binary.

use std::time::Duration;

use tokio_tungstenite::tungstenite;

/// Result type for relay startup operations
pub type RelayResult<T> = Result<T, RelayError>;

/// A single upstream message could not be turned into a record
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("message is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("message is not a JSON object")]
    NotAnObject,

    #[error("binary message is not valid UTF-8")]
    NotUtf8,

    #[error("{tag} payload must be an object, got {found}")]
    MalformedPayload { tag: &'static str, found: &'static str },
}

impl IngestError {
    /// Decode faults happen before the type tag is known; the rest are
    /// classification faults on a recognized tag.
    pub fn is_decode_fault(&self) -> bool {
        !matches!(self, IngestError::MalformedPayload { .. })
    }
}

/// Upstream connection failures
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    #[error("invalid upstream request for {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: tungstenite::Error,
    },

    #[error("handshake with {url} failed: {source}")]
    Handshake {
        url: String,
        #[source]
        source: tungstenite::Error,
    },

    #[error("handshake with {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("upstream transport error: {0}")]
    Transport(#[from] tungstenite::Error),
}

/// Invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("history capacity must be at least 1")]
    ZeroCapacity,

    #[error("upstream url must use ws:// or wss://, got {0}")]
    UnsupportedScheme(String),

    #[error("connect timeout must be greater than zero")]
    ZeroTimeout,
}

/// Errors that stop the relay from starting or serving
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to install shutdown handler: {0}")]
    Signal(#[from] ctrlc::Error),
}
