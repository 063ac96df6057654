//! Flight plan history endpoint

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use crate::context::AppContext;

/// GET /flight-plans - Recent flight plans, newest first
///
/// Always 200; an empty array until the first flight plan arrives.
pub async fn list_flight_plans(State(ctx): State<Arc<AppContext>>) -> impl IntoResponse {
    Json(ctx.get_history())
}
