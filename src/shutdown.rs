//! Process shutdown signal

use std::future::Future;

use tokio::sync::watch;
use tracing::info;

use crate::error::RelayResult;

/// Install the Ctrl+C / SIGTERM handler.
///
/// The returned future resolves once the first signal arrives. Only one
/// handler can be installed per process.
pub fn install() -> RelayResult<impl Future<Output = ()> + Send + 'static> {
    let (tx, rx) = watch::channel(false);
    ctrlc::set_handler(move || {
        let _ = tx.send(true);
    })?;
    Ok(signalled(rx))
}

/// Resolves when `rx` reads true, or when its sender is gone
async fn signalled(mut rx: watch::Receiver<bool>) {
    if rx.wait_for(|stop| *stop).await.is_ok() {
        info!("shutdown signal received");
    }
}
