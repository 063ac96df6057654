//! Health summary returned by `GET /health`

use serde::{Deserialize, Serialize};

/// Liveness summary of the relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    /// True only while the upstream connection is open
    #[serde(rename = "wsConnected")]
    pub ws_connected: bool,
    #[serde(rename = "flightPlansCount")]
    pub flight_plans_count: usize,
}

impl HealthReport {
    pub fn ok(ws_connected: bool, flight_plans_count: usize) -> Self {
        Self {
            status: "ok".to_string(),
            ws_connected,
            flight_plans_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_string(&HealthReport::ok(true, 3)).unwrap();
        assert_eq!(json, r#"{"status":"ok","wsConnected":true,"flightPlansCount":3}"#);
    }
}
