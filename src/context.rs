//! Application context shared by the connector and the HTTP handlers

use std::sync::Arc;

use crate::connector::{ConnectorConfig, ConnectorStatus, UpstreamConnector};
use crate::history::HistoryStore;
use crate::ingest::Ingestor;
use crate::types::{CanonicalRecord, HealthReport};

/// Owned process state: one history store and one connector status.
///
/// Built once at startup and shared through `Arc`.
pub struct AppContext {
    history: Arc<HistoryStore>,
    connector: Arc<ConnectorStatus>,
}

impl AppContext {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            history: Arc::new(HistoryStore::with_capacity(history_capacity)),
            connector: Arc::new(ConnectorStatus::new()),
        }
    }

    pub fn history(&self) -> &Arc<HistoryStore> {
        &self.history
    }

    pub fn connector_status(&self) -> &Arc<ConnectorStatus> {
        &self.connector
    }

    /// Ingestor writing into this context's history
    pub fn ingestor(&self) -> Ingestor {
        Ingestor::new(self.history.clone())
    }

    /// The connector that feeds this context
    pub fn connector(&self, config: ConnectorConfig) -> UpstreamConnector {
        UpstreamConnector::new(config, self.connector.clone(), self.ingestor())
    }

    /// Current history, newest first
    pub fn get_history(&self) -> Vec<CanonicalRecord> {
        self.history.snapshot()
    }

    /// Instantaneous health summary
    pub fn get_health(&self) -> HealthReport {
        HealthReport::ok(self.connector.is_open(), self.history.count())
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(crate::history::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::ConnectorState;

    #[test]
    fn test_fresh_context() {
        let ctx = AppContext::default();
        assert!(ctx.get_history().is_empty());
        assert_eq!(ctx.get_health(), HealthReport::ok(false, 0));
    }

    #[test]
    fn test_health_tracks_history_and_connector() {
        let ctx = AppContext::new(2);
        let ingestor = ctx.ingestor();
        for callsign in ["A1", "B2", "C3"] {
            ingestor.handle_text(&format!(
                r#"{{"t":"FLIGHT_PLAN","d":{{"callsign":"{}"}}}}"#,
                callsign
            ));
        }
        ctx.connector_status().transition(ConnectorState::Open);

        let health = ctx.get_health();
        assert!(health.ws_connected);
        assert_eq!(health.flight_plans_count, 2);
        assert_eq!(health.flight_plans_count, ctx.get_history().len());

        ctx.connector_status().transition(ConnectorState::Closed);
        assert!(!ctx.get_health().ws_connected);
        assert_eq!(ctx.get_history().len(), 2);
    }
}
