#![allow(dead_code)]
use hopdns_domain::{wire, ZoneTable, MAX_DATAGRAM_SIZE};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// Minimal authority for tests: answers from a zone table (or stays silent)
/// and counts the queries it receives.
pub struct MockAuthority {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockAuthority {
    /// Serve `zone` on an OS-assigned loopback port.
    pub async fn start(zone: ZoneTable) -> Result<Self, std::io::Error> {
        Self::start_inner(Some(zone)).await
    }

    /// Receive queries but never answer.
    pub async fn start_silent() -> Result<Self, std::io::Error> {
        Self::start_inner(None).await
    }

    async fn start_inner(zone: Option<ZoneTable>) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&queries);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; MAX_DATAGRAM_SIZE];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(ref zone) = zone {
                                let query = wire::decode_query(&buf[..len]).unwrap_or_default();
                                let reply = zone.answer(query).encode();
                                let _ = socket.send_to(reply.as_bytes(), peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// `address:port` form used as an NS target.
    pub fn endpoint(&self) -> String {
        self.addr.to_string()
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockAuthority {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
