//! Health endpoint

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::context::AppContext;
use crate::types::HealthReport;

/// GET /health - Liveness, upstream connection flag and record count
pub async fn health_check(State(ctx): State<Arc<AppContext>>) -> Json<HealthReport> {
    Json(ctx.get_health())
}
