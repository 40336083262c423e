use async_trait::async_trait;
use hopdns_application::ports::UpstreamTransport;
use hopdns_domain::{Authority, DomainError, MAX_DATAGRAM_SIZE};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Text-protocol transport to authorities over UDP.
///
/// Each exchange binds a fresh ephemeral socket, so hops never share state.
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpTransport;

impl UdpTransport {
    pub fn new() -> Self {
        Self
    }

    async fn resolve_endpoint(authority: &Authority) -> Result<SocketAddr, DomainError> {
        let mut addrs = tokio::net::lookup_host((authority.host.as_str(), authority.port))
            .await
            .map_err(|e| {
                DomainError::InvalidAuthority(format!("cannot resolve {authority}: {e}"))
            })?;
        addrs
            .next()
            .ok_or_else(|| DomainError::InvalidAuthority(format!("no address for {authority}")))
    }

    fn timeout_error(authority: &Authority) -> DomainError {
        DomainError::UpstreamTimeout {
            authority: authority.to_string(),
        }
    }
}

#[async_trait]
impl UpstreamTransport for UdpTransport {
    async fn exchange(
        &self,
        authority: &Authority,
        query: &str,
        timeout: Duration,
    ) -> Result<String, DomainError> {
        let server_addr = Self::resolve_endpoint(authority).await?;

        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if server_addr.is_ipv4() {
            SocketAddr::from(([0, 0, 0, 0], 0))
        } else {
            SocketAddr::from(([0u16; 8], 0))
        };
        let socket = UdpSocket::bind(bind_addr).await?;
        socket.connect(server_addr).await?;

        let bytes_sent = tokio::time::timeout(timeout, socket.send(query.as_bytes()))
            .await
            .map_err(|_| Self::timeout_error(authority))??;

        debug!(server = %server_addr, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_DATAGRAM_SIZE];
        let bytes_received = match tokio::time::timeout(timeout, socket.recv(&mut recv_buf)).await {
            Err(_) => return Err(Self::timeout_error(authority)),
            Ok(Err(e)) => {
                // ICMP port unreachable surfaces here on a connected socket;
                // the authority is just as absent as a silent one.
                warn!(server = %server_addr, error = %e, "UDP receive failed");
                return Err(Self::timeout_error(authority));
            }
            Ok(Ok(n)) => n,
        };
        recv_buf.truncate(bytes_received);

        debug!(server = %server_addr, bytes_received, "UDP response received");

        String::from_utf8(recv_buf)
            .map(|reply| reply.trim().to_string())
            .map_err(|_| DomainError::MalformedUpstreamReply("reply is not UTF-8".to_string()))
    }
}
