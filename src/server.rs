// Info server lifecycle: bind + serve, then a bounded graceful drain on stop.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub struct InfoServer {
    local_addr: SocketAddr,
    grace: Duration,
    shutdown_tx: oneshot::Sender<()>,
    handle: JoinHandle<std::io::Result<()>>,
}

impl InfoServer {
    /// Binds `addr` and starts serving `app` on a background task.
    pub async fn start(addr: &str, app: Router, grace: Duration) -> anyhow::Result<Self> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| anyhow::anyhow!("bind {}: {}", addr, e))?;
        let local_addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
        });
        tracing::info!("Info server listening on http://{}", local_addr);

        Ok(Self {
            local_addr,
            grace,
            shutdown_tx,
            handle,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stops accepting connections and waits up to the grace period for in-flight
    /// requests; after that the serving task is aborted.
    pub async fn stop(self) -> anyhow::Result<()> {
        tracing::info!("Shutting down info server...");
        let _ = self.shutdown_tx.send(());
        let mut handle = self.handle;
        match tokio::time::timeout(self.grace, &mut handle).await {
            Ok(Ok(result)) => {
                result?;
                tracing::info!("Info server stopped gracefully");
            }
            Ok(Err(e)) => anyhow::bail!("info server task: {}", e),
            Err(_) => {
                tracing::warn!(
                    grace_secs = self.grace.as_secs(),
                    "info server drain timed out, closing connections"
                );
                handle.abort();
            }
        }
        Ok(())
    }
}
