//! Upstream connector
//!
//! Owns the one outbound WebSocket connection to the flight plan feed and
//! hands every inbound message to the [`Ingestor`].
//!
//! ## Lifecycle
//! - `Connecting → Open` when the handshake succeeds
//! - `Open → Closed` when either side closes the connection
//! - `Connecting | Open → Errored` on any transport fault
//!
//! By default nothing leaves `Closed` or `Errored`: a dead upstream freezes the
//! history at its last state while the HTTP side keeps serving it. With
//! `reconnect` enabled the connector waits out a [`Backoff`] delay and goes
//! back to `Connecting`.

mod backoff;
mod state;

use std::sync::Arc;
use std::time::Duration;

use futures::{Stream, StreamExt};
use tokio::net::TcpStream;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::handshake::client::Request;
use tokio_tungstenite::tungstenite::http::header::ORIGIN;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{error, info, warn};

use crate::error::ConnectorError;
use crate::ingest::Ingestor;

pub use backoff::Backoff;
pub use state::{ConnectorState, ConnectorStatus};

/// Default flight plan feed
pub const DEFAULT_UPSTREAM_URL: &str = "wss://24data.ptfs.app/wss";

/// Stream type produced by a successful handshake
pub type UpstreamStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Connector settings
#[derive(Debug, Clone)]
pub struct ConnectorConfig {
    /// `ws://` or `wss://` endpoint of the feed
    pub url: String,
    /// Reconnect after close or error instead of stopping
    pub reconnect: bool,
    /// Delay policy between reconnect attempts
    pub backoff: Backoff,
    /// Give up on a handshake after this long; `None` waits forever
    pub connect_timeout: Option<Duration>,
}

impl ConnectorConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reconnect: false,
            backoff: Backoff::default(),
            connect_timeout: None,
        }
    }
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_UPSTREAM_URL)
    }
}

/// Build the handshake request.
///
/// The feed rejects handshakes unless an `Origin` header is present with an
/// empty value.
pub fn upstream_request(url: &str) -> Result<Request, ConnectorError> {
    let mut request = url
        .into_client_request()
        .map_err(|source| ConnectorError::Request {
            url: url.to_string(),
            source,
        })?;
    request
        .headers_mut()
        .insert(ORIGIN, HeaderValue::from_static(""));
    Ok(request)
}

/// The single upstream connection
pub struct UpstreamConnector {
    config: ConnectorConfig,
    status: Arc<ConnectorStatus>,
    ingestor: Ingestor,
}

impl UpstreamConnector {
    pub fn new(config: ConnectorConfig, status: Arc<ConnectorStatus>, ingestor: Ingestor) -> Self {
        Self {
            config,
            status,
            ingestor,
        }
    }

    /// Run the connector on its own task
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Connect and pump messages until the connection ends.
    ///
    /// Returns once the connection is closed or errored, unless reconnect is
    /// enabled, in which case it runs until the task is dropped.
    pub async fn run(self) {
        let mut backoff = self.config.backoff.clone();

        loop {
            match self.connect().await {
                Ok(stream) => {
                    backoff.reset();
                    self.pump(stream).await;
                }
                Err(err) => {
                    self.status.transition(ConnectorState::Errored);
                    error!(error = %err, "upstream connection failed");
                }
            }

            if !self.config.reconnect {
                warn!(
                    state = %self.status.get(),
                    "upstream connection ended, reconnect disabled; history is frozen"
                );
                return;
            }

            let delay = backoff.next_delay();
            info!(delay_ms = delay.as_millis() as u64, "reconnecting to upstream");
            tokio::time::sleep(delay).await;
            self.status.transition(ConnectorState::Connecting);
        }
    }

    /// Perform the handshake and move to `Open` on success.
    ///
    /// A failed handshake leaves the state untouched; [`run`](Self::run)
    /// records it as `Errored`.
    pub async fn connect(&self) -> Result<UpstreamStream, ConnectorError> {
        let url = self.config.url.as_str();
        let request = upstream_request(url)?;
        info!(url = %url, "connecting to upstream");

        let handshake = connect_async(request);
        let result = match self.config.connect_timeout {
            Some(timeout) => tokio::time::timeout(timeout, handshake)
                .await
                .map_err(|_| ConnectorError::Timeout {
                    url: url.to_string(),
                    timeout,
                })?,
            None => handshake.await,
        };
        let (stream, response) = result.map_err(|source| ConnectorError::Handshake {
            url: url.to_string(),
            source,
        })?;

        self.status.transition(ConnectorState::Open);
        info!(url = %url, status = %response.status(), "upstream connected");
        Ok(stream)
    }

    /// Drive an open connection until it ends.
    ///
    /// Text and binary frames go to the ingestor; control frames are left to
    /// the WebSocket layer. Ends in `Closed` on a clean close and `Errored` on
    /// a transport fault.
    pub async fn pump<S>(&self, mut stream: S)
    where
        S: Stream<Item = Result<Message, tungstenite::Error>> + Unpin,
    {
        while let Some(frame) = stream.next().await {
            match frame {
                Ok(Message::Text(text)) => {
                    self.ingestor.handle_text(&text);
                }
                Ok(Message::Binary(bytes)) => {
                    self.ingestor.handle_bytes(&bytes);
                }
                Ok(Message::Close(frame)) => {
                    info!(frame = ?frame, "upstream sent close frame");
                }
                Ok(Message::Ping(_) | Message::Pong(_) | Message::Frame(_)) => {}
                Err(tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed) => {
                    break;
                }
                Err(err) => {
                    self.status.transition(ConnectorState::Errored);
                    error!(error = %ConnectorError::Transport(err), "upstream connection errored");
                    return;
                }
            }
        }

        self.status.transition(ConnectorState::Closed);
        info!("upstream connection closed");
    }
}
