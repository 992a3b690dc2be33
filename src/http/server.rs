//! Server lifecycle
//!
//! Binding, serving and graceful shutdown. Tokio's listener sets
//! `SO_REUSEADDR` on Unix, so the service can be restarted right away on the
//! same port.

use super::router::{create_router, SharedMachine};
use crate::types::ServerError;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Bind the listening socket
///
/// # Errors
///
/// Returns `ServerError::Bind` if the address is unavailable.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|error| ServerError::bind(addr, &error))
}

/// Serve requests on `listener` until `shutdown` resolves
///
/// In-flight requests are allowed to finish once shutdown starts.
///
/// # Errors
///
/// Returns `ServerError::IoError` if the listener fails while serving.
pub async fn serve<F>(
    listener: TcpListener,
    machine: SharedMachine,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(
        %addr,
        items = machine.item_count(),
        price = machine.price(),
        "Vending machine listening"
    );

    axum::serve(listener, create_router(machine))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Vending machine stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM on Unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!(%error, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                warn!(%error, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let listener = bind(SocketAddr::from(([127, 0, 0, 1], 0))).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_bind_in_use_port_fails() {
        let first = bind(SocketAddr::from(([127, 0, 0, 1], 0))).await.unwrap();
        let addr = first.local_addr().unwrap();

        let result = bind(addr).await;

        assert!(matches!(result, Err(ServerError::Bind { .. })));
    }
}
