use hopdns_domain::{wire, Reply, MAX_DATAGRAM_SIZE};
use std::io::BufRead;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Domain from the argument, or the first line of stdin.
pub fn read_domain(arg: Option<String>) -> anyhow::Result<String> {
    let raw = match arg {
        Some(domain) => domain,
        None => {
            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line)?;
            line
        }
    };
    let domain = raw.trim();
    if domain.is_empty() {
        anyhow::bail!("no domain given");
    }
    Ok(domain.to_string())
}

/// Send one query and wait for its reply.
pub async fn query(server: &str, domain: &str, timeout: Duration) -> anyhow::Result<Reply> {
    let server_addr = tokio::net::lookup_host(server)
        .await?
        .next()
        .ok_or_else(|| anyhow::anyhow!("cannot resolve server address {server}"))?;

    let bind_addr: SocketAddr = if server_addr.is_ipv4() {
        SocketAddr::from(([0, 0, 0, 0], 0))
    } else {
        SocketAddr::from(([0u16; 8], 0))
    };
    let socket = UdpSocket::bind(bind_addr).await?;
    socket.connect(server_addr).await?;
    socket.send(domain.as_bytes()).await?;
    debug!(server = %server_addr, domain, "Query sent");

    let mut buf = vec![0u8; MAX_DATAGRAM_SIZE];
    let len = tokio::time::timeout(timeout, socket.recv(&mut buf))
        .await
        .map_err(|_| anyhow::anyhow!("no reply from {server_addr} within {timeout:?}"))??;

    Ok(wire::decode_reply(&buf[..len])?)
}

/// What the user sees: the target field, or the negative marker.
pub fn render(reply: &Reply) -> String {
    match reply.record() {
        Some(record) => record.target.clone(),
        None => reply.encode(),
    }
}
