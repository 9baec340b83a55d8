//! Desk API server lifecycle. Starts/stops the axum HTTP server.
//!
//! bind → spawn background task → return handle with shutdown channel.

use std::net::SocketAddr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use uuid::Uuid;

use crate::api::router::desk_api_router;
use crate::core_state::CoreState;

// ═══════════════════════════════════════════════════════════
// Public types
// ═══════════════════════════════════════════════════════════

/// Session metadata for a running desk API server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskServerSession {
    pub session_id: String,
    pub server_addr: String,
    pub port: u16,
    pub started_at: String,
}

/// Handle to a running desk API server.
pub struct DeskServer {
    pub session: DeskServerSession,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl DeskServer {
    /// Shut down the server gracefully.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Desk API server shutdown signal sent");
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Server lifecycle
// ═══════════════════════════════════════════════════════════

/// Start the desk API server on `addr`. Port 0 binds an ephemeral port.
///
/// Returns a `DeskServer` handle with session metadata and a shutdown
/// channel. The server runs in a background tokio task.
pub async fn start_desk_server(
    core: Arc<CoreState>,
    addr: SocketAddr,
) -> Result<DeskServer, String> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind desk API server on {addr}: {e}"))?;

    let addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to get server address: {e}"))?;

    let app = desk_api_router(core);

    let session = DeskServerSession {
        session_id: Uuid::new_v4().to_string(),
        server_addr: addr.to_string(),
        port: addr.port(),
        started_at: chrono::Utc::now().to_rfc3339(),
    };

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("Desk API server received shutdown signal");
        };

        tracing::info!(%addr, "Desk API server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("Desk API server error: {e}");
        }

        tracing::info!("Desk API server stopped");
    });

    Ok(DeskServer {
        session,
        shutdown_tx: Some(shutdown_tx),
    })
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    use crate::config;

    fn test_core() -> Arc<CoreState> {
        Arc::new(CoreState::with_roster(config::default_roster()))
    }

    fn loopback() -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], 0))
    }

    #[tokio::test]
    async fn start_and_stop_server() {
        let mut server = start_desk_server(test_core(), loopback())
            .await
            .expect("server should start");

        assert!(!server.session.session_id.is_empty());
        assert!(server.session.port > 0);
        assert!(!server.session.started_at.is_empty());

        server.shutdown();
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }

    #[tokio::test]
    async fn server_answers_health_over_tcp() {
        let mut server = start_desk_server(test_core(), loopback())
            .await
            .expect("server should start");

        let mut stream = tokio::net::TcpStream::connect(("127.0.0.1", server.session.port))
            .await
            .unwrap();
        stream
            .write_all(b"GET /api/health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut raw = Vec::new();
        stream.read_to_end(&mut raw).await.unwrap();
        let text = String::from_utf8_lossy(&raw);
        assert!(text.starts_with("HTTP/1.1 200"), "unexpected response: {text}");
        assert!(text.contains("\"status\":\"ok\""));

        server.shutdown();
    }

    #[tokio::test]
    async fn bind_conflict_is_reported() {
        let mut first = start_desk_server(test_core(), loopback()).await.unwrap();
        let taken: SocketAddr = first.session.server_addr.parse().unwrap();

        let second = start_desk_server(test_core(), taken).await;
        assert!(second.is_err());

        first.shutdown();
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let mut server = start_desk_server(test_core(), loopback())
            .await
            .expect("server should start");

        server.shutdown();
        server.shutdown(); // Second call should be safe
    }
}
