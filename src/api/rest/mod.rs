//! REST API module for HTTP endpoints
//!
//! Read-only views over the application context:
//! - `GET /flight-plans` - History snapshot, newest first
//! - `GET /health` - Status, upstream connection flag and record count

pub mod flight_plans;
pub mod health;

pub use flight_plans::list_flight_plans;
pub use health::health_check;
