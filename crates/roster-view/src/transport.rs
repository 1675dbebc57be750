//! Request transport between the view and the employee service.

use roster_core::{MockServer, Request, Response};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::trace;

/// Transport-level failure (no response was produced)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The backend is unreachable
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Delivers requests to an employee service and returns its responses.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, TransportError>> + Send;
}

/// Transport that hands requests straight to a [`MockServer`] in this process.
///
/// Clones share the same server, so several views (or a test) can observe
/// one store. The server's configured latency is slept before each response.
#[derive(Debug, Clone)]
pub struct InProcessTransport {
    server: Arc<Mutex<MockServer>>,
    offline: Arc<AtomicBool>,
}

impl InProcessTransport {
    pub fn new(server: MockServer) -> Self {
        Self::shared(Arc::new(Mutex::new(server)))
    }

    pub fn shared(server: Arc<Mutex<MockServer>>) -> Self {
        Self {
            server,
            offline: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Handle to the underlying server
    pub fn server(&self) -> Arc<Mutex<MockServer>> {
        Arc::clone(&self.server)
    }

    /// Simulate the backend going away (or coming back)
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }
}

impl Default for InProcessTransport {
    fn default() -> Self {
        Self::new(MockServer::new())
    }
}

impl Transport for InProcessTransport {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        if self.is_offline() {
            return Err(TransportError::Unavailable(format!(
                "{} {}",
                request.method, request.url
            )));
        }

        let (response, delay) = {
            let mut server = self.server.lock().await;
            (server.handle(&request), server.response_delay())
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        trace!(method = %request.method, url = %request.url, status = response.status, "in-process response");
        Ok(response)
    }
}
