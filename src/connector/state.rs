//! Upstream connection lifecycle state

use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle of the single upstream connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ConnectorState {
    Connecting = 0,
    Open = 1,
    Closed = 2,
    Errored = 3,
}

impl ConnectorState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => ConnectorState::Connecting,
            1 => ConnectorState::Open,
            2 => ConnectorState::Closed,
            _ => ConnectorState::Errored,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ConnectorState::Open)
    }

    /// Whether `self → next` is a legal transition.
    ///
    /// `Closed` and `Errored` only lead back to `Connecting`, which the
    /// connector does only when reconnect is enabled.
    pub fn permits(&self, next: ConnectorState) -> bool {
        use ConnectorState::*;
        matches!(
            (self, next),
            (Connecting, Open)
                | (Connecting, Errored)
                | (Open, Closed)
                | (Open, Errored)
                | (Closed, Connecting)
                | (Errored, Connecting)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectorState::Connecting => "connecting",
            ConnectorState::Open => "open",
            ConnectorState::Closed => "closed",
            ConnectorState::Errored => "errored",
        }
    }
}

impl std::fmt::Display for ConnectorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared, lock-free cell holding the current [`ConnectorState`].
///
/// Written by the connector task only; read by the HTTP handlers.
#[derive(Debug)]
pub struct ConnectorStatus {
    state: AtomicU8,
}

impl ConnectorStatus {
    /// Starts in `Connecting`
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(ConnectorState::Connecting as u8),
        }
    }

    pub fn get(&self) -> ConnectorState {
        ConnectorState::from_u8(self.state.load(Ordering::SeqCst))
    }

    pub fn is_open(&self) -> bool {
        self.get().is_open()
    }

    /// Move to `next`, returning the previous state
    pub(crate) fn transition(&self, next: ConnectorState) -> ConnectorState {
        let previous = ConnectorState::from_u8(self.state.swap(next as u8, Ordering::SeqCst));
        debug_assert!(
            previous.permits(next),
            "illegal connector transition {} -> {}",
            previous,
            next
        );
        previous
    }
}

impl Default for ConnectorStatus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ConnectorState::*;

    #[test]
    fn test_starts_connecting() {
        let status = ConnectorStatus::new();
        assert_eq!(status.get(), Connecting);
        assert!(!status.is_open());
    }

    #[test]
    fn test_lifecycle_transitions() {
        let status = ConnectorStatus::new();
        assert_eq!(status.transition(Open), Connecting);
        assert!(status.is_open());
        assert_eq!(status.transition(Closed), Open);
        assert!(!status.is_open());
    }

    #[test]
    fn test_terminal_states_only_lead_to_connecting() {
        for terminal in [Closed, Errored] {
            assert!(terminal.permits(Connecting));
            assert!(!terminal.permits(Open));
            assert!(!terminal.permits(Closed));
            assert!(!terminal.permits(Errored));
        }
        assert!(!Connecting.permits(Closed));
        assert!(!Open.permits(Connecting));
    }

    #[test]
    fn test_only_open_reports_connected() {
        assert!(Open.is_open());
        for state in [Connecting, Closed, Errored] {
            assert!(!state.is_open());
        }
    }
}
