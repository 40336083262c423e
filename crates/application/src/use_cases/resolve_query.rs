use crate::ports::RecordCache;
use crate::services::{DelegationWalker, ResolverMetrics};
use dashmap::DashMap;
use hopdns_domain::{Authority, CacheEntry, DomainError, Reply, ResolutionOutcome};
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// What the resolver sends back for one client query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverAnswer {
    pub reply: Reply,
    pub cache_hit: bool,
}

impl ResolverAnswer {
    fn negative() -> Self {
        Self {
            reply: Reply::NonExistent,
            cache_hit: false,
        }
    }
}

/// Client-facing resolution: cache first, delegation walk on miss.
///
/// Concurrent queries for the same key are serialized on a per-key lock so
/// only one of them walks; the others re-read the cache afterwards.
pub struct ResolveQueryUseCase {
    cache: Arc<dyn RecordCache>,
    walker: DelegationWalker,
    root: Authority,
    resolution_timeout: Duration,
    inflight: DashMap<String, Arc<Mutex<()>>, FxBuildHasher>,
    metrics: Arc<ResolverMetrics>,
}

impl ResolveQueryUseCase {
    pub fn new(
        cache: Arc<dyn RecordCache>,
        walker: DelegationWalker,
        root: Authority,
        resolution_timeout: Duration,
    ) -> Self {
        Self {
            cache,
            walker,
            root,
            resolution_timeout,
            inflight: DashMap::with_hasher(FxBuildHasher),
            metrics: Arc::new(ResolverMetrics::new()),
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<ResolverMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> Arc<ResolverMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn root(&self) -> &Authority {
        &self.root
    }

    /// Always produces exactly one reply; failures become the negative marker.
    pub async fn execute(&self, query: &str) -> ResolverAnswer {
        self.metrics.record_query();

        let query = query.trim();
        if query.is_empty() {
            debug!("Empty query");
            return ResolverAnswer::negative();
        }

        let key = query.to_lowercase();
        if let Some(entry) = self.cache.lookup(&key, Instant::now()) {
            return self.cached_answer(&key, entry);
        }

        let lock = Arc::clone(&*self.inflight.entry(key.clone()).or_default());
        let answer = {
            let _guard = lock.lock().await;
            // A walk for this key may have finished while we waited.
            match self.cache.peek(&key, Instant::now()) {
                Some(entry) => self.cached_answer(&key, entry),
                None => self.resolve_upstream(query, &key).await,
            }
        };
        drop(lock);
        self.inflight
            .remove_if(&key, |_, lock| Arc::strong_count(lock) == 1);

        answer
    }

    fn cached_answer(&self, key: &str, entry: CacheEntry) -> ResolverAnswer {
        self.metrics.record_cache_hit();
        debug!(domain = key, target = %entry.record.target, "Cache HIT");
        ResolverAnswer {
            reply: Reply::Record(entry.record),
            cache_hit: true,
        }
    }

    async fn resolve_upstream(&self, query: &str, key: &str) -> ResolverAnswer {
        debug!(domain = key, "Cache MISS");
        self.metrics.record_walk();

        let started = Instant::now();
        let result = match tokio::time::timeout(
            self.resolution_timeout,
            self.walker.walk(query, &self.root),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(DomainError::ResolutionTimeout),
        };
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(ResolutionOutcome::Resolved(record)) => {
                self.cache.insert(key, record.clone(), Instant::now());
                self.metrics.record_resolved();
                info!(domain = query, target = %record.target, elapsed_ms, "Resolved");
                ResolverAnswer {
                    reply: Reply::Record(record),
                    cache_hit: false,
                }
            }
            Ok(ResolutionOutcome::NotFound) => {
                self.metrics.record_not_found();
                debug!(domain = query, elapsed_ms, "Domain does not exist");
                ResolverAnswer::negative()
            }
            Ok(ResolutionOutcome::Delegated(authority)) => {
                let err = DomainError::MalformedUpstreamReply(format!(
                    "walk ended on a delegation to {authority}"
                ));
                self.metrics.record_failure(&err);
                warn!(domain = query, error = %err, "Resolution failed");
                ResolverAnswer::negative()
            }
            Err(err) => {
                self.metrics.record_failure(&err);
                match &err {
                    DomainError::DelegationLoop { .. } => error!(
                        domain = query,
                        kind = err.kind(),
                        error = %err,
                        "Delegation loop, check zone configuration"
                    ),
                    _ => warn!(
                        domain = query,
                        kind = err.kind(),
                        error = %err,
                        elapsed_ms,
                        "Resolution failed"
                    ),
                }
                ResolverAnswer::negative()
            }
        }
    }
}
