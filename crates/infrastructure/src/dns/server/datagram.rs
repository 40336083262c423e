use async_trait::async_trait;
use hopdns_domain::{wire, DomainError, Reply, MAX_DATAGRAM_SIZE};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const RECV_ERROR_BACKOFF_BASE: Duration = Duration::from_millis(10);
const RECV_ERROR_BACKOFF_MAX: Duration = Duration::from_secs(1);

/// Pause after the `consecutive`-th receive error in a row: doubles from
/// 10ms up to 1s.
fn recv_error_backoff(consecutive: u32) -> Duration {
    let exp = consecutive.saturating_sub(1).min(10);
    RECV_ERROR_BACKOFF_BASE
        .saturating_mul(1 << exp)
        .min(RECV_ERROR_BACKOFF_MAX)
}

/// Turns one decoded query into exactly one reply.
#[async_trait]
pub trait QueryHandler: Send + Sync {
    async fn handle(&self, query: &str) -> Reply;
}

/// UDP request/response loop shared by authorities and resolvers.
///
/// Every datagram is handled on its own task, so a slow upstream walk never
/// blocks other clients.
pub struct DatagramServer {
    socket: Arc<UdpSocket>,
    handler: Arc<dyn QueryHandler>,
    role: &'static str,
}

impl DatagramServer {
    pub async fn bind(
        addr: &str,
        handler: Arc<dyn QueryHandler>,
        role: &'static str,
    ) -> Result<Self, DomainError> {
        let socket = UdpSocket::bind(addr).await.map_err(|e| {
            DomainError::IoError(format!("failed to bind {role} socket on {addr}: {e}"))
        })?;
        let server = Self {
            socket: Arc::new(socket),
            handler,
            role,
        };
        info!(role, bind_address = %server.local_addr()?, "UDP server listening");
        Ok(server)
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        Ok(self.socket.local_addr()?)
    }

    /// Serve until `shutdown` is cancelled.
    pub async fn run(self, shutdown: CancellationToken) -> Result<(), DomainError> {
        let mut buf = vec![0u8; MAX_DATAGRAM_SIZE];
        let mut recv_errors = 0u32;

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!(role = self.role, "UDP server shutting down");
                    break;
                }
                result = self.socket.recv_from(&mut buf) => {
                    match result {
                        Ok((len, peer)) => {
                            recv_errors = 0;
                            self.dispatch(buf[..len].to_vec(), peer);
                        }
                        Err(e) => {
                            // A previous send_to may surface as an error here
                            // (ICMP unreachable); a persistent one must not spin.
                            recv_errors = recv_errors.saturating_add(1);
                            let backoff = recv_error_backoff(recv_errors);
                            warn!(
                                role = self.role,
                                error = %e,
                                consecutive = recv_errors,
                                backoff_ms = backoff.as_millis() as u64,
                                "UDP receive failed"
                            );
                            tokio::select! {
                                _ = shutdown.cancelled() => {}
                                _ = tokio::time::sleep(backoff) => {}
                            }
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Run on a background task; returns the bound address and the handle.
    pub fn spawn(
        self,
        shutdown: CancellationToken,
    ) -> Result<(SocketAddr, JoinHandle<Result<(), DomainError>>), DomainError> {
        let addr = self.local_addr()?;
        Ok((addr, tokio::spawn(self.run(shutdown))))
    }

    fn dispatch(&self, datagram: Vec<u8>, peer: SocketAddr) {
        let socket = Arc::clone(&self.socket);
        let handler = Arc::clone(&self.handler);
        let role = self.role;

        tokio::spawn(async move {
            let reply = match wire::decode_query(&datagram) {
                Some(query) => {
                    debug!(role, %peer, query, "Query received");
                    handler.handle(query).await
                }
                None => {
                    warn!(role, %peer, "Query is not valid UTF-8");
                    Reply::NonExistent
                }
            };

            let payload = reply.encode();
            if let Err(e) = socket.send_to(payload.as_bytes(), peer).await {
                warn!(role, %peer, error = %e, "Failed to send reply");
            }
        });
    }
}
