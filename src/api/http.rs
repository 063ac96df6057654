//! HTTP server setup with Axum

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::rest::{health_check, list_flight_plans};
use crate::context::AppContext;
use crate::error::RelayResult;

/// Create the Axum router with all endpoints.
///
/// When `static_dir` is set, paths not matched by the API are served from it.
pub fn create_router(ctx: Arc<AppContext>, static_dir: Option<PathBuf>) -> Router {
    // Any origin may poll the relay
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/flight-plans", get(list_flight_plans))
        .route("/health", get(health_check));

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(ctx)
}

/// Serve `router` on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> RelayResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(addr = %addr, "server running at http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("server stopped");
    Ok(())
}
