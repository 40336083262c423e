use async_trait::async_trait;
use hopdns_application::services::{DelegationWalker, ResolverMetrics};
use hopdns_application::use_cases::{AnswerZoneQueryUseCase, ResolveQueryUseCase};
use hopdns_domain::{wire, Authority, Reply, ZoneTable, MAX_DATAGRAM_SIZE};
use hopdns_infrastructure::dns::{DatagramServer, QueryHandler, ResolutionCache, UdpTransport};
use std::net::SocketAddr;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;

/// Zone handler whose table can be replaced while serving.
struct ReloadableZone {
    current: RwLock<Arc<AnswerZoneQueryUseCase>>,
}

#[async_trait]
impl QueryHandler for ReloadableZone {
    async fn handle(&self, query: &str) -> Reply {
        let use_case = self.current.read().unwrap().clone();
        use_case.execute(query)
    }
}

/// In-process authority on an OS-assigned loopback port.
pub struct TestAuthority {
    addr: SocketAddr,
    zone: Arc<ReloadableZone>,
    shutdown: CancellationToken,
}

impl TestAuthority {
    pub async fn start(zone_text: &str) -> Self {
        let zone = Arc::new(ReloadableZone {
            current: RwLock::new(Self::use_case(zone_text)),
        });
        let shutdown = CancellationToken::new();
        let server = DatagramServer::bind("127.0.0.1:0", zone.clone(), "authority")
            .await
            .expect("bind authority");
        let (addr, _) = server.spawn(shutdown.clone()).expect("spawn authority");

        Self {
            addr,
            zone,
            shutdown,
        }
    }

    /// Swap in a new zone table.
    pub fn load(&self, zone_text: &str) {
        *self.zone.current.write().unwrap() = Self::use_case(zone_text);
    }

    pub fn endpoint(&self) -> String {
        self.addr.to_string()
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn use_case(zone_text: &str) -> Arc<AnswerZoneQueryUseCase> {
        let zone = ZoneTable::parse(zone_text).expect("valid zone");
        Arc::new(AnswerZoneQueryUseCase::new(Arc::new(zone)))
    }
}

impl Drop for TestAuthority {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

pub struct TestResolver {
    addr: SocketAddr,
    pub cache: Arc<ResolutionCache>,
    pub metrics: Arc<ResolverMetrics>,
    shutdown: CancellationToken,
}

impl TestResolver {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn client(&self) -> TestClient {
        TestClient::new(self.addr)
    }
}

impl Drop for TestResolver {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

pub struct TestResolverBuilder {
    root: SocketAddr,
    ttl: Duration,
    hop_timeout: Duration,
    max_hops: usize,
}

impl TestResolverBuilder {
    pub fn new(root: SocketAddr) -> Self {
        Self {
            root,
            ttl: Duration::from_secs(60),
            hop_timeout: Duration::from_millis(300),
            max_hops: 16,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops;
        self
    }

    pub async fn start(self) -> TestResolver {
        let cache = Arc::new(ResolutionCache::new(self.ttl));
        let metrics = Arc::new(ResolverMetrics::new());
        let walker = DelegationWalker::new(
            Arc::new(UdpTransport::new()),
            self.hop_timeout,
            self.max_hops,
        );
        let use_case = ResolveQueryUseCase::new(
            cache.clone(),
            walker,
            Authority::from(self.root),
            Duration::from_secs(3),
        )
        .with_metrics(metrics.clone());

        let shutdown = CancellationToken::new();
        let server = DatagramServer::bind("127.0.0.1:0", Arc::new(use_case), "resolver")
            .await
            .expect("bind resolver");
        let (addr, _) = server.spawn(shutdown.clone()).expect("spawn resolver");

        TestResolver {
            addr,
            cache,
            metrics,
            shutdown,
        }
    }
}

/// One-shot UDP client speaking the text protocol.
pub struct TestClient {
    server: SocketAddr,
}

impl TestClient {
    pub fn new(server: SocketAddr) -> Self {
        Self { server }
    }

    pub async fn query_raw(&self, domain: &str) -> String {
        let socket = UdpSocket::bind("127.0.0.1:0").await.expect("bind client");
        socket
            .send_to(domain.as_bytes(), self.server)
            .await
            .expect("send query");

        let mut buf = vec![0u8; MAX_DATAGRAM_SIZE];
        let (len, _) = tokio::time::timeout(Duration::from_secs(5), socket.recv_from(&mut buf))
            .await
            .expect("reply within 5s")
            .expect("recv reply");
        String::from_utf8(buf[..len].to_vec()).expect("utf-8 reply")
    }

    pub async fn query(&self, domain: &str) -> Reply {
        let raw = self.query_raw(domain).await;
        wire::decode_reply(raw.as_bytes()).expect("well-formed reply")
    }
}
